pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{CliConfig, SweepConfig};
pub use crate::core::finder::AnagramFinder;
pub use crate::core::speller::EnglishSpeller;
pub use crate::domain::model::{AnagramMatch, Operation, Pair};
pub use crate::domain::ports::Speller;
pub use crate::utils::error::{AnagramError, Result};
