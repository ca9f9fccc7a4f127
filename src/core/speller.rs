use num2words::Num2Words;

use crate::domain::ports::Speller;
use crate::utils::error::{AnagramError, Result};

/// English speller backed by num2words, e.g. 21 -> "twenty-one".
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishSpeller;

impl EnglishSpeller {
    pub fn new() -> Self {
        Self
    }
}

impl Speller for EnglishSpeller {
    fn spell(&self, n: u64) -> Result<String> {
        // num2words takes signed input; operands stay far below i64::MAX.
        Num2Words::new(n as i64)
            .to_words()
            .map_err(|e| AnagramError::Spelling {
                value: n,
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spells_small_numbers() {
        let speller = EnglishSpeller::new();
        assert_eq!(speller.spell(1).unwrap(), "one");
        assert_eq!(speller.spell(12).unwrap(), "twelve");
        assert_eq!(speller.spell(21).unwrap(), "twenty-one");
    }

    #[test]
    fn test_spelling_is_deterministic() {
        let speller = EnglishSpeller::new();
        assert_eq!(speller.spell(27).unwrap(), speller.spell(27).unwrap());
    }
}
