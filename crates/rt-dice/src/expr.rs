//! Dice notation parsing and rolling.
//!
//! Supported forms are `NdM`, `dM` (one die), and either of those followed by
//! a `+K` or `-K` modifier. The `d` is case-insensitive and whitespace is
//! allowed around the modifier.

use std::str::FromStr;

use nom::{
    IResult, Parser,
    character::complete::{digit1, one_of, space0},
    combinator::{all_consuming, map, map_res, opt},
    sequence::{pair, preceded},
};
use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};
use crate::source::RandomSource;

/// Largest number of dice a single expression may roll.
pub const MAX_DICE: u32 = 1000;

/// Largest magnitude a parsed modifier may have.
pub const MAX_MODIFIER: i64 = 1_000_000;

/// A parsed dice expression such as `2d6+1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceExpr {
    /// Number of dice rolled.
    pub count: u32,
    /// Sides on each die.
    pub sides: u32,
    /// Flat amount added to the sum of the dice.
    pub modifier: i64,
}

impl DiceExpr {
    /// Create an expression rolling `count` dice with `sides` sides each.
    pub fn new(count: u32, sides: u32) -> DiceResult<Self> {
        if count == 0 || count > MAX_DICE {
            return Err(DiceError::InvalidCount {
                count,
                max: MAX_DICE,
            });
        }
        if sides == 0 {
            return Err(DiceError::InvalidSides);
        }
        Ok(Self {
            count,
            sides,
            modifier: 0,
        })
    }

    /// Set the flat modifier.
    pub fn with_modifier(mut self, modifier: i64) -> Self {
        self.modifier = modifier;
        self
    }

    /// Parse standard dice notation.
    ///
    /// ```
    /// use rt_dice::DiceExpr;
    ///
    /// let expr = DiceExpr::parse("2d6+1").unwrap();
    /// assert_eq!((expr.min(), expr.max()), (3, 13));
    /// assert!(DiceExpr::parse("2x6").is_err());
    /// ```
    pub fn parse(input: &str) -> DiceResult<Self> {
        let trimmed = input.trim();
        let (_, (count, sides, modifier)) = all_consuming(dice_notation)
            .parse(trimmed)
            .map_err(|_| DiceError::Malformed(input.to_string()))?;

        let modifier = modifier.unwrap_or(0);
        if !(-MAX_MODIFIER..=MAX_MODIFIER).contains(&modifier) {
            return Err(DiceError::InvalidModifier {
                modifier,
                max: MAX_MODIFIER,
            });
        }

        Ok(Self::new(count.unwrap_or(1), sides)?.with_modifier(modifier))
    }

    /// Smallest total this expression can produce.
    ///
    /// Totals saturate at the bounds of `i64`.
    pub fn min(&self) -> i64 {
        i64::from(self.count).saturating_add(self.modifier)
    }

    /// Largest total this expression can produce.
    pub fn max(&self) -> i64 {
        (i64::from(self.count) * i64::from(self.sides)).saturating_add(self.modifier)
    }

    /// Roll the expression once and return the total.
    pub fn roll<R: RandomSource + ?Sized>(&self, rng: &mut R) -> i64 {
        self.roll_detailed(rng).total()
    }

    /// Roll the expression once, keeping the individual die values.
    pub fn roll_detailed<R: RandomSource + ?Sized>(&self, rng: &mut R) -> DiceRoll {
        let sides = i64::from(self.sides);
        let dice = (0..self.count).map(|_| rng.next_in(1, sides)).collect();
        DiceRoll {
            dice,
            modifier: self.modifier,
        }
    }
}

impl FromStr for DiceExpr {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "{m}"),
        }
    }
}

/// The outcome of rolling a dice expression once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    /// Individual die values, each between 1 and the die's sides.
    pub dice: Vec<i64>,
    /// The expression's flat modifier.
    pub modifier: i64,
}

impl DiceRoll {
    /// Sum of all die values plus the modifier, saturating at the bounds of
    /// `i64`.
    pub fn total(&self) -> i64 {
        self.dice
            .iter()
            .fold(self.modifier, |acc, &d| acc.saturating_add(d))
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|d| d.to_string()).collect();
        write!(f, "[{}]", values.join(", "))?;
        match self.modifier {
            0 => {}
            m if m > 0 => write!(f, " +{m}")?,
            m => write!(f, " {m}")?,
        }
        write!(f, " = {}", self.total())
    }
}

fn number(input: &str) -> IResult<&str, u32> {
    map_res(digit1, |s: &str| s.parse::<u32>()).parse(input)
}

fn modifier(input: &str) -> IResult<&str, i64> {
    map(
        preceded(
            space0,
            pair(
                one_of("+-"),
                preceded(space0, map_res(digit1, |s: &str| s.parse::<i64>())),
            ),
        ),
        |(sign, value): (char, i64)| if sign == '-' { -value } else { value },
    )
    .parse(input)
}

fn dice_notation(input: &str) -> IResult<&str, (Option<u32>, u32, Option<i64>)> {
    (opt(number), preceded(one_of("dD"), number), opt(modifier)).parse(input)
}
