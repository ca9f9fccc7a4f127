use std::collections::HashMap;

use crate::core::anagram::are_anagrams;
use crate::core::pairs::generate_pairs;
use crate::domain::model::{AnagramMatch, Operation, Pair};
use crate::domain::ports::Speller;
use crate::utils::error::Result;

/// Search engine for pairs of expressions whose English spellings are
/// anagrams. Owns a read-through spelling cache, so within one finder each
/// distinct integer is spelled at most once no matter how many combinations
/// it appears in. Create one finder per search invocation.
pub struct AnagramFinder<S: Speller> {
    speller: S,
    cache: HashMap<u64, String>,
}

impl<S: Speller> AnagramFinder<S> {
    pub fn new(speller: S) -> Self {
        Self {
            speller,
            cache: HashMap::new(),
        }
    }

    /// All matches among the operand pairs of `target` under `op`, in
    /// generation order (ascending outer pair, then ascending inner).
    pub fn find(&mut self, target: u64, op: Operation) -> Result<Vec<AnagramMatch>> {
        self.find_observed(target, op, |_, _| {})
    }

    /// Same search as [`find`](Self::find), reporting `(evaluated, total)`
    /// after each candidate combination. The observer is purely
    /// observational and never changes result order or content.
    pub fn find_observed<F>(
        &mut self,
        target: u64,
        op: Operation,
        mut observe: F,
    ) -> Result<Vec<AnagramMatch>>
    where
        F: FnMut(usize, usize),
    {
        let pairs = generate_pairs(target, op);
        let total = pairs.len() * pairs.len().saturating_sub(1) / 2;
        tracing::debug!(
            "Searching {} pair combinations for target {} under '{}'",
            total,
            target,
            op
        );

        let mut matches = Vec::new();
        let mut evaluated = 0;
        for (idx, p1) in pairs.iter().enumerate() {
            let left = self.expression(p1, op)?;
            for p2 in &pairs[idx + 1..] {
                let right = self.expression(p2, op)?;
                evaluated += 1;
                if are_anagrams(&left, &right) {
                    matches.push(AnagramMatch::new(*p1, *p2));
                }
                observe(evaluated, total);
            }
        }

        tracing::debug!("Found {} matches for target {}", matches.len(), target);
        Ok(matches)
    }

    /// Addition-only sweep: searches every sum total in `2..=max` and
    /// returns the aggregate sorted by the natural match ordering. The
    /// spelling cache carries across totals.
    pub fn sweep(&mut self, max: u64) -> Result<Vec<AnagramMatch>> {
        let mut all = Vec::new();
        for total in 2..=max {
            all.extend(self.find(total, Operation::Add)?);
        }
        all.sort();
        Ok(all)
    }

    /// Spelled expression for one pair, e.g. `"four plus twenty-seven"`.
    fn expression(&mut self, pair: &Pair, op: Operation) -> Result<String> {
        let small = self.spelled(pair.small())?;
        let large = self.spelled(pair.large())?;
        Ok(format!("{} {} {}", small, op.word(), large))
    }

    fn spelled(&mut self, n: u64) -> Result<String> {
        if let Some(words) = self.cache.get(&n) {
            return Ok(words.clone());
        }
        let words = self.speller.spell(n)?;
        self.cache.insert(n, words.clone());
        Ok(words)
    }
}
