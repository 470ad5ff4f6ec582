//! The roll state machine.
//!
//! A roll draws an outcome from the table's scheme, applies the reroll rule
//! at most once, picks the first matching item, and then runs the item's
//! action. `InvokeTable` actions look the target up in the roller's registry
//! and roll it recursively, appending the result after a delimiter.
//!
//! A table whose actions lead back to itself recurses without end unless a
//! depth limit is set with [`Roller::with_max_depth`].

use std::sync::Arc;

use rt_dice::{DiceExpr, RandomSource};
use tracing::{debug, trace};

use crate::config::{DEFAULT_DELIMITER, RollConfig};
use crate::error::{TableError, TableResult};
use crate::registry::Registry;
use crate::table::{Action, SelectionScheme, Table};
use crate::weighted;

/// Rolls tables, resolving sub-table actions through an optional registry.
#[derive(Debug, Clone)]
pub struct Roller<'r> {
    registry: Option<&'r Registry>,
    max_depth: Option<usize>,
    delimiter: String,
}

impl Default for Roller<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> Roller<'r> {
    /// Create a roller with no registry and no depth limit.
    pub fn new() -> Self {
        Self {
            registry: None,
            max_depth: None,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    /// Create a roller using the depth limit and delimiter from `config`.
    pub fn from_config(config: &RollConfig) -> Self {
        Self {
            registry: None,
            max_depth: config.max_depth,
            delimiter: config.delimiter.clone(),
        }
    }

    /// Resolve `InvokeTable` actions through `registry`.
    pub fn with_registry(mut self, registry: &'r Registry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Refuse to follow more than `depth` nested sub-table actions.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Text placed between an item and the result of its action.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Roll on `table`.
    pub fn roll<R: RandomSource + ?Sized>(&self, table: &Table, rng: &mut R) -> TableResult<String> {
        self.roll_with_args(table, &[], rng)
    }

    /// Roll on `table` with context arguments.
    ///
    /// Placeholders `{0}`, `{1}`, ... in the selected item's text are replaced
    /// by the matching argument, and the arguments are passed on to any
    /// sub-table the item invokes.
    pub fn roll_with_args<R: RandomSource + ?Sized>(
        &self,
        table: &Table,
        args: &[String],
        rng: &mut R,
    ) -> TableResult<String> {
        self.roll_at(table, args, 0, rng)
    }

    /// Look up `id` in the registry and roll it.
    pub fn roll_id<R: RandomSource + ?Sized>(&self, id: &str, rng: &mut R) -> TableResult<String> {
        let table = self.lookup(id)?;
        self.roll(&table, rng)
    }

    fn roll_at<R: RandomSource + ?Sized>(
        &self,
        table: &Table,
        args: &[String],
        depth: usize,
        rng: &mut R,
    ) -> TableResult<String> {
        if let Some(limit) = self.max_depth.filter(|&limit| depth > limit) {
            return Err(TableError::RecursionLimit {
                table: table.id.clone(),
                depth: limit,
            });
        }

        let Some((text, action)) = select(table, rng)? else {
            debug!(table = %table.id, "no item matched");
            return Ok(String::new());
        };
        let mut out = interpolate(text, args);

        if let Some(Action::InvokeTable {
            table: target,
            args: action_args,
        }) = action
        {
            debug!(table = %table.id, target = %target, depth, "invoking sub-table");
            let sub_table = self.lookup(target)?;
            let sub_args: Vec<String> = action_args.iter().chain(args).cloned().collect();
            let sub_text = self.roll_at(&sub_table, &sub_args, depth + 1, rng)?;
            out.push_str(&self.delimiter);
            out.push_str(&sub_text);
        }

        Ok(out)
    }

    fn lookup(&self, id: &str) -> TableResult<Arc<Table>> {
        match self.registry {
            Some(registry) => registry.get(id),
            None => Err(TableError::NotRegistered(id.to_string())),
        }
    }
}

/// Draw from the table's scheme and return the selected item's text and
/// action, or `None` when the outcome matches nothing.
fn select<'t, R: RandomSource + ?Sized>(
    table: &'t Table,
    rng: &mut R,
) -> TableResult<Option<(&'t str, Option<&'t Action>)>> {
    if table.reroll.is_some() && !matches!(table.scheme, SelectionScheme::DiceMatch { .. }) {
        debug!(table = %table.id, "reroll ignored outside dice-indexed tables");
    }

    match &table.scheme {
        SelectionScheme::DiceMatch { dice, items } => {
            let mut n = evaluate(table, dice, rng)?;
            trace!(table = %table.id, outcome = n, "dice evaluated");

            if let Some(reroll) = table.reroll.as_ref().filter(|r| r.matches.contains(n)) {
                let first = n;
                n = evaluate(table, &reroll.dice, rng)?;
                debug!(table = %table.id, first, outcome = n, "rerolled");
            }

            Ok(items
                .iter()
                .find(|item| item.matches.contains(n))
                .map(|item| (item.text.as_str(), Some(&item.action))))
        }
        SelectionScheme::Weighted { items } => {
            let index = weighted::pick_index(items, rng)
                .ok_or_else(|| TableError::EmptySelectionSpace(table.id.clone()))?;
            trace!(table = %table.id, index, "weighted draw");
            Ok(items
                .get(index)
                .map(|item| (item.text.as_str(), Some(&item.action))))
        }
        SelectionScheme::Uniform { items } => {
            if items.is_empty() {
                return Err(TableError::EmptySelectionSpace(table.id.clone()));
            }
            let high = i64::try_from(items.len() - 1).unwrap_or(i64::MAX);
            let index = usize::try_from(rng.next_in(0, high)).unwrap_or(0);
            trace!(table = %table.id, index, "uniform draw");
            Ok(items.get(index).map(|text| (text.as_str(), None)))
        }
    }
}

fn evaluate<R: RandomSource + ?Sized>(table: &Table, dice: &str, rng: &mut R) -> TableResult<i64> {
    let expr = DiceExpr::parse(dice).map_err(|source| TableError::MalformedDiceExpression {
        table: table.id.clone(),
        source,
    })?;
    Ok(expr.roll(rng))
}

/// Replace `{N}` with `args[N]` in a single pass. Substituted text is never
/// scanned again.
fn interpolate(text: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let placeholder = after.find('}').and_then(|close| {
            let digits = &after[..close];
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let arg = digits.parse::<usize>().ok().and_then(|i| args.get(i))?;
            Some((arg, close))
        });
        match placeholder {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
