use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::AnagramError;

/// Binary operation over positive integers. Closed set; extending it means
/// adding a variant here plus its rule in `core::pairs::generate_pairs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Mul,
}

impl Operation {
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Mul => "*",
        }
    }

    /// Display word used inside spelled expressions, e.g. "four plus nine".
    pub fn word(self) -> &'static str {
        match self {
            Operation::Add => "plus",
            Operation::Mul => "times",
        }
    }

    pub fn apply(self, a: u64, b: u64) -> u64 {
        match self {
            Operation::Add => a + b,
            Operation::Mul => a * b,
        }
    }

    /// Valid selector strings, sorted, for error messages.
    pub fn choices() -> String {
        "*, +".to_string()
    }
}

impl FromStr for Operation {
    type Err = AnagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operation::Add),
            "*" => Ok(Operation::Mul),
            other => Err(AnagramError::UnsupportedOperation {
                op: other.to_string(),
                choices: Operation::choices(),
            }),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unordered pair of positive integers, stored in canonical `small <= large`
/// form so commutative operations never produce mirrored duplicates.
/// Deserialization routes through [`Pair::new`], so the canonical form
/// holds for decoded values too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "PairFields")]
pub struct Pair {
    small: u64,
    large: u64,
}

#[derive(Deserialize)]
struct PairFields {
    small: u64,
    large: u64,
}

impl From<PairFields> for Pair {
    fn from(fields: PairFields) -> Self {
        Pair::new(fields.small, fields.large)
    }
}

impl Pair {
    pub fn new(a: u64, b: u64) -> Self {
        if a <= b {
            Self { small: a, large: b }
        } else {
            Self { small: b, large: a }
        }
    }

    pub fn small(&self) -> u64 {
        self.small
    }

    pub fn large(&self) -> u64 {
        self.large
    }

    /// Numeric rendering, e.g. `4 + 27`.
    pub fn render(&self, op: Operation) -> String {
        format!("{} {} {}", self.small, op.symbol(), self.large)
    }
}

/// Two distinct operand pairs whose spelled expressions are anagrams.
/// Canonical `first < second`, so each match is reported exactly once.
/// Deserialization routes through [`AnagramMatch::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "MatchFields")]
pub struct AnagramMatch {
    first: Pair,
    second: Pair,
}

#[derive(Deserialize)]
struct MatchFields {
    first: Pair,
    second: Pair,
}

impl From<MatchFields> for AnagramMatch {
    fn from(fields: MatchFields) -> Self {
        AnagramMatch::new(fields.first, fields.second)
    }
}

impl AnagramMatch {
    pub fn new(a: Pair, b: Pair) -> Self {
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    pub fn first(&self) -> Pair {
        self.first
    }

    pub fn second(&self) -> Pair {
        self.second
    }

    /// Output line, e.g. `4 + 27 = 7 + 24`.
    pub fn render(&self, op: Operation) -> String {
        format!("{} = {}", self.first.render(op), self.second.render(op))
    }
}
