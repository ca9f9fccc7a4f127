use crate::domain::model::{Operation, Pair};

/// All pairs `(a, b)` of positive integers with `op(a, b) == target` and
/// `a <= b`, ascending by the smaller operand.
///
/// The multiplication scan starts at 2: the degenerate `1 * target`
/// factorization is excluded on purpose, while addition keeps its full
/// `1..=target` range. Targets below 2 yield no pairs under either
/// operation.
pub fn generate_pairs(target: u64, op: Operation) -> Vec<Pair> {
    match op {
        Operation::Add => (1..=target)
            .filter(|i| *i <= target - i)
            .map(|i| Pair::new(i, target - i))
            .collect(),
        Operation::Mul => (2..=target)
            .filter(|i| target % i == 0 && *i <= target / i)
            .map(|i| Pair::new(i, target / i))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addition_pairs_for_31() {
        let pairs = generate_pairs(31, Operation::Add);
        assert_eq!(pairs.len(), 15);
        assert_eq!(pairs[0], Pair::new(1, 30));
        assert_eq!(pairs[14], Pair::new(15, 16));
        for pair in &pairs {
            assert!(pair.small() >= 1);
            assert!(pair.small() <= pair.large());
            assert_eq!(pair.small() + pair.large(), 31);
        }
    }

    #[test]
    fn test_addition_pairs_for_5() {
        let pairs = generate_pairs(5, Operation::Add);
        assert_eq!(pairs, vec![Pair::new(1, 4), Pair::new(2, 3)]);
    }

    #[test]
    fn test_addition_includes_halved_target() {
        let pairs = generate_pairs(2, Operation::Add);
        assert_eq!(pairs, vec![Pair::new(1, 1)]);
    }

    #[test]
    fn test_multiplication_pairs_for_30() {
        let pairs = generate_pairs(30, Operation::Mul);
        assert_eq!(
            pairs,
            vec![Pair::new(2, 15), Pair::new(3, 10), Pair::new(5, 6)]
        );
        for pair in &pairs {
            assert_eq!(pair.small() * pair.large(), 30);
        }
    }

    #[test]
    fn test_multiplication_excludes_one_times_target() {
        let pairs = generate_pairs(7, Operation::Mul);
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_multiplication_square_counted_once() {
        let pairs = generate_pairs(36, Operation::Mul);
        assert_eq!(
            pairs,
            vec![
                Pair::new(2, 18),
                Pair::new(3, 12),
                Pair::new(4, 9),
                Pair::new(6, 6)
            ]
        );
    }

    #[test]
    fn test_degenerate_targets() {
        assert!(generate_pairs(0, Operation::Add).is_empty());
        assert!(generate_pairs(1, Operation::Add).is_empty());
        assert!(generate_pairs(0, Operation::Mul).is_empty());
        assert!(generate_pairs(1, Operation::Mul).is_empty());
    }
}
