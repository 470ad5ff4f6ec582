//! Table definitions.
//!
//! A table is an immutable value: an identity, a [`SelectionScheme`] holding
//! its items, and an optional [`Reroll`] rule. Rolling never changes it.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use rt_dice::{DiceExpr, RandomSource};
use serde::{Deserialize, Serialize};

use crate::error::TableResult;
use crate::matchset::MatchSet;
use crate::registry::Registry;
use crate::roller::Roller;
use crate::weighted::Weighted;

/// What happens after an item is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// The item's text is the whole result.
    #[default]
    None,
    /// Roll another registered table and append its result.
    InvokeTable {
        /// ID of the table to roll.
        table: String,
        /// Arguments passed ahead of the caller's own arguments.
        #[serde(default)]
        args: Vec<String>,
    },
}

impl Action {
    /// Roll the table with the given ID, passing no extra arguments.
    pub fn invoke(table: impl Into<String>) -> Self {
        Self::InvokeTable {
            table: table.into(),
            args: Vec::new(),
        }
    }

    /// Roll the table with the given ID, passing `args` to it.
    pub fn invoke_with<I, S>(table: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::InvokeTable {
            table: table.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true for [`Action::None`].
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// An item of a dice-indexed table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Dice outcomes that select this item.
    pub matches: MatchSet,
    /// Text returned when selected.
    pub text: String,
    /// Follow-up action.
    #[serde(default, skip_serializing_if = "Action::is_none")]
    pub action: Action,
}

impl Item {
    /// Create an item selected by `matches`.
    pub fn new(matches: impl Into<MatchSet>, text: impl Into<String>) -> Self {
        Self {
            matches: matches.into(),
            text: text.into(),
            action: Action::None,
        }
    }

    /// Attach a follow-up action.
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }
}

/// An item of a weighted table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedItem {
    /// Relative selection weight. Zero means never selected.
    pub weight: u32,
    /// Text returned when selected.
    pub text: String,
    /// Follow-up action.
    #[serde(default, skip_serializing_if = "Action::is_none")]
    pub action: Action,
}

impl WeightedItem {
    /// Create an item with the given weight.
    pub fn new(weight: u32, text: impl Into<String>) -> Self {
        Self {
            weight,
            text: text.into(),
            action: Action::None,
        }
    }

    /// Attach a follow-up action.
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }
}

impl Weighted for WeightedItem {
    fn weight(&self) -> u32 {
        self.weight
    }
}

/// Roll again with different dice when the first outcome is in `matches`.
///
/// Applied at most once per roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reroll {
    /// Outcomes that trigger the reroll.
    pub matches: MatchSet,
    /// Dice used for the second roll.
    pub dice: String,
}

impl Reroll {
    /// Create a reroll rule.
    pub fn new(matches: impl Into<MatchSet>, dice: impl Into<String>) -> Self {
        Self {
            matches: matches.into(),
            dice: dice.into(),
        }
    }
}

/// How a table turns randomness into an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionScheme {
    /// Roll dice and pick the first item whose match set contains the total.
    DiceMatch {
        /// Dice notation, parsed on every roll.
        dice: String,
        /// Items in declared order.
        items: Vec<Item>,
    },
    /// Pick an item with probability proportional to its weight.
    Weighted {
        /// Items in declared order.
        items: Vec<WeightedItem>,
    },
    /// Pick any item with equal probability.
    Uniform {
        /// Item texts.
        items: Vec<String>,
    },
}

impl SelectionScheme {
    /// Number of declared items.
    pub fn len(&self) -> usize {
        match self {
            Self::DiceMatch { items, .. } => items.len(),
            Self::Weighted { items } => items.len(),
            Self::Uniform { items } => items.len(),
        }
    }

    /// Returns true if the scheme declares no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A roll table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Unique key used by registries and sub-table actions.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Free-form grouping label.
    #[serde(default)]
    pub category: String,
    /// Items and the way they are drawn.
    #[serde(flatten)]
    pub scheme: SelectionScheme,
    /// Optional second roll for designated outcomes.
    ///
    /// Only dice-indexed tables roll an outcome that can trigger it; weighted
    /// and uniform tables ignore the rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reroll: Option<Reroll>,
}

impl Table {
    /// Create a table with an explicit scheme.
    pub fn new(id: impl Into<String>, scheme: SelectionScheme) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            category: String::new(),
            scheme,
            reroll: None,
        }
    }

    /// Create a dice-indexed table.
    pub fn dice_match(id: impl Into<String>, dice: impl Into<String>, items: Vec<Item>) -> Self {
        Self::new(
            id,
            SelectionScheme::DiceMatch {
                dice: dice.into(),
                items,
            },
        )
    }

    /// Create a weighted table.
    pub fn weighted(id: impl Into<String>, items: Vec<WeightedItem>) -> Self {
        Self::new(id, SelectionScheme::Weighted { items })
    }

    /// Create a table whose items are equally likely.
    pub fn uniform<I, S>(id: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            id,
            SelectionScheme::Uniform {
                items: items.into_iter().map(Into::into).collect(),
            },
        )
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the reroll rule.
    ///
    /// Has no effect unless the scheme is [`SelectionScheme::DiceMatch`].
    pub fn with_reroll(mut self, reroll: Reroll) -> Self {
        self.reroll = Some(reroll);
        self
    }

    /// Number of declared items.
    pub fn len(&self) -> usize {
        self.scheme.len()
    }

    /// Returns true if the table declares no items.
    pub fn is_empty(&self) -> bool {
        self.scheme.is_empty()
    }

    /// Roll on the table without a registry.
    ///
    /// Items that invoke other tables fail with
    /// [`TableError::NotRegistered`](crate::TableError::NotRegistered).
    pub fn roll<R: RandomSource + ?Sized>(&self, rng: &mut R) -> TableResult<String> {
        Roller::new().roll(self, rng)
    }

    /// Roll on the table, resolving sub-table actions through `registry`.
    pub fn roll_with<R: RandomSource + ?Sized>(
        &self,
        registry: &Registry,
        rng: &mut R,
    ) -> TableResult<String> {
        Roller::new().with_registry(registry).roll(self, rng)
    }

    /// Check how the match sets of a dice-indexed table cover its dice range.
    ///
    /// Returns `None` for other schemes or when the dice do not parse.
    pub fn coverage(&self) -> Option<Coverage> {
        let SelectionScheme::DiceMatch { dice, items } = &self.scheme else {
            return None;
        };
        let expr = DiceExpr::parse(dice).ok()?;

        let mut claims: BTreeMap<i64, usize> = BTreeMap::new();
        for item in items {
            let mut seen = Vec::new();
            for &n in item.matches.values() {
                if !seen.contains(&n) {
                    seen.push(n);
                    *claims.entry(n).or_default() += 1;
                }
            }
        }

        let (low, high) = (expr.min(), expr.max());
        let mut gaps = Vec::new();
        let mut next = low;
        for &n in claims.range(low..=high).map(|(n, _)| n) {
            if n > next {
                gaps.push(next..=n - 1);
            }
            next = n.saturating_add(1);
        }
        if next <= high && !claims.contains_key(&high) {
            gaps.push(next..=high);
        }
        let overlaps = claims
            .iter()
            .filter(|&(_, &count)| count > 1)
            .map(|(&n, _)| n)
            .collect();
        let unreachable = claims
            .keys()
            .copied()
            .filter(|n| *n < expr.min() || *n > expr.max())
            .collect();

        Some(Coverage {
            gaps,
            overlaps,
            unreachable,
        })
    }
}

/// How well a dice-indexed table's match sets cover its dice range.
///
/// Gaps roll as an empty result and overlaps resolve to the first declared
/// item; neither is an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coverage {
    /// Runs of outcomes the dice can produce that no item matches, in
    /// ascending order.
    pub gaps: Vec<RangeInclusive<i64>>,
    /// Outcomes matched by more than one item.
    pub overlaps: Vec<i64>,
    /// Matched values the dice can never produce.
    pub unreachable: Vec<i64>,
}

impl Coverage {
    /// Returns true if every outcome maps to exactly one item.
    pub fn is_exact(&self) -> bool {
        self.gaps.is_empty() && self.overlaps.is_empty()
    }
}
