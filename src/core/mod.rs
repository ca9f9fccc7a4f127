pub mod anagram;
pub mod finder;
pub mod pairs;
pub mod speller;

pub use crate::domain::model::{AnagramMatch, Operation, Pair};
pub use crate::domain::ports::Speller;
pub use crate::utils::error::Result;
