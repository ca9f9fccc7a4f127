use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::domain::model::Operation;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_int, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "anagram-arith")]
#[command(about = "Find pairs of arithmetic expressions on a target whose English spellings are anagrams")]
pub struct CliConfig {
    /// Target value every reported expression must produce
    #[arg(allow_negative_numbers = true)]
    pub target: i64,

    #[arg(long, default_value = "+", help = "Operation combining the operands (*, +) [default: +]")]
    pub op: String,

    #[arg(long, help = "Show a progress bar over the candidate combinations")]
    pub progress: bool,

    #[arg(long, help = "Print results as a JSON array instead of plain lines")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Validated `(target, operation)`, rejecting non-positive targets and
    /// selectors outside the supported set before any search runs.
    pub fn validated(&self) -> Result<(u64, Operation)> {
        let target = validate_positive_int("target", self.target)?;
        let op = self.op.parse()?;
        Ok((target, op))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.validated().map(|_| ())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "sum_sweep")]
#[command(about = "Sweep every sum total up to a maximum and report anagram expression pairs")]
pub struct SweepConfig {
    /// Largest sum total to search, inclusive
    #[arg(allow_negative_numbers = true)]
    pub max: i64,

    #[arg(long, help = "Print results as a JSON array instead of plain lines")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl SweepConfig {
    pub fn max_value(&self) -> Result<u64> {
        validate_positive_int("max", self.max)
    }
}

impl Validate for SweepConfig {
    fn validate(&self) -> Result<()> {
        self.max_value().map(|_| ())
    }
}
