use crate::utils::error::Result;

/// Number-to-words collaborator. Implementations must be deterministic:
/// the spelling of an integer is a pure function of its value.
pub trait Speller {
    fn spell(&self, n: u64) -> Result<String>;
}
