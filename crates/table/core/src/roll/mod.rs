//! Roll expressions in dice notation.
//!
//! Accepted forms (whitespace around the expression is ignored, `d` is
//! case-insensitive):
//!
//! ```text
//! 7        constant
//! d8       one eight-sided die
//! 2d6      two six-sided dice
//! 3d4+2    with a positive modifier
//! 1d10-1   with a negative modifier
//! ```

mod dice;

use std::fmt;
use std::str::FromStr;

pub use dice::{Dice, SeededDice};

use crate::error::{ErrorSeverity, TableLibError};

/// Upper bound on dice per expression, keeps sums far from overflow.
const MAX_DICE: u32 = 10_000;

/// Largest modifier magnitude accepted alongside dice.
///
/// With `MAX_DICE` dice of `u32::MAX` sides the total stays well inside `i64`.
const MAX_MODIFIER: i64 = 1_000_000_000;

/// Errors raised while parsing a roll expression.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RollError {
    #[error("roll expression is empty")]
    Empty,

    #[error("invalid number '{0}' in roll expression")]
    InvalidNumber(String),

    #[error("dice count must be between 1 and 10000, got {0}")]
    InvalidCount(u32),

    #[error("dice must have at least one side")]
    ZeroSides,

    #[error("modifier must be between -1000000000 and 1000000000, got {0}")]
    ModifierOutOfRange(i64),
}

impl TableLibError for RollError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }
}

/// A parsed roll expression: `count` dice of `sides` sides plus `modifier`.
///
/// Constants are represented with `count == 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Roll {
    count: u32,
    sides: u32,
    modifier: i64,
}

impl Roll {
    /// A fixed value with no dice.
    pub const fn constant(value: i64) -> Self {
        Self {
            count: 0,
            sides: 0,
            modifier: value,
        }
    }

    /// `count` dice with `sides` sides and a flat modifier.
    pub fn dice(count: u32, sides: u32, modifier: i64) -> Result<Self, RollError> {
        if count == 0 || count > MAX_DICE {
            return Err(RollError::InvalidCount(count));
        }
        if sides == 0 {
            return Err(RollError::ZeroSides);
        }
        if !(-MAX_MODIFIER..=MAX_MODIFIER).contains(&modifier) {
            return Err(RollError::ModifierOutOfRange(modifier));
        }
        Ok(Self {
            count,
            sides,
            modifier,
        })
    }

    pub const fn count(&self) -> u32 {
        self.count
    }

    pub const fn sides(&self) -> u32 {
        self.sides
    }

    pub const fn modifier(&self) -> i64 {
        self.modifier
    }

    /// True when the expression involves no dice.
    pub const fn is_constant(&self) -> bool {
        self.count == 0
    }

    /// Smallest possible result.
    pub const fn min(&self) -> i64 {
        self.count as i64 + self.modifier
    }

    /// Largest possible result.
    pub const fn max(&self) -> i64 {
        self.count as i64 * self.sides as i64 + self.modifier
    }

    /// Rolls every die and adds the modifier.
    pub fn evaluate<D: Dice + ?Sized>(&self, dice: &D) -> i64 {
        let rolled: i64 = (0..self.count)
            .map(|_| i64::from(dice.roll_die(self.sides)))
            .sum();
        rolled + self.modifier
    }
}

fn parse_number<N: FromStr>(text: &str) -> Result<N, RollError> {
    text.trim()
        .parse()
        .map_err(|_| RollError::InvalidNumber(text.trim().to_owned()))
}

impl FromStr for Roll {
    type Err = RollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let expr = s.trim();
        if expr.is_empty() {
            return Err(RollError::Empty);
        }

        let Some(d) = expr.find(['d', 'D']) else {
            return parse_number(expr).map(Roll::constant);
        };

        let (count_text, rest) = (&expr[..d], &expr[d + 1..]);
        let count = if count_text.trim().is_empty() {
            1
        } else {
            parse_number(count_text)?
        };

        let (sides_text, modifier) = match rest.find(['+', '-']) {
            Some(sign) => {
                let magnitude_text = &rest[sign + 1..];
                let magnitude: i64 = parse_number(magnitude_text)?;
                if magnitude < 0 {
                    return Err(RollError::InvalidNumber(magnitude_text.trim().to_owned()));
                }
                let modifier = if rest.as_bytes()[sign] == b'-' {
                    -magnitude
                } else {
                    magnitude
                };
                (&rest[..sign], modifier)
            }
            None => (rest, 0),
        };

        Roll::dice(count, parse_number(sides_text)?, modifier)
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_constant() {
            return write!(f, "{}", self.modifier);
        }
        write!(f, "{}d{}", self.count, self.sides)?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "{m}"),
        }
    }
}
