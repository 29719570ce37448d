//! Algorithm registry.
//!
//! The set of benchmarked algorithms is closed: every variant shares the
//! same `run(input, target)` contract and reports how many memory accesses
//! it performed alongside its result.

use crate::error::{BenchError, Result};
use crate::search::linear_search::linear_search;
use crate::sort::bubble_sort::bubble_sort;
use crate::utils::bench::{random_input, random_target, seeded_rng};

/// Result of a single algorithm call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutput {
    /// Sorted copy of the input
    Sorted(Vec<u32>),
    /// Index of the first match, `None` when the target is absent
    Index(Option<usize>),
}

/// One benchmarked algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BubbleSort,
    LinearSearch,
}

impl Algorithm {
    /// All algorithms, in reporting order.
    pub const ALL: [Algorithm; 2] = [Algorithm::BubbleSort, Algorithm::LinearSearch];

    /// Display name used in the results table
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::LinearSearch => "Linear Search",
        }
    }

    /// Identifier used on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "bubble_sort",
            Algorithm::LinearSearch => "linear_search",
        }
    }

    /// Category (e.g., "sort", "search")
    pub fn category(&self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "sort",
            Algorithm::LinearSearch => "search",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "Adjacent-pair compare and swap, no early exit",
            Algorithm::LinearSearch => "Left-to-right scan, stops at the first match",
        }
    }

    /// Run the algorithm once and return `(output, memory_accesses)`.
    ///
    /// `target` is only meaningful for searches; sorting ignores it so that
    /// every variant can be driven through the same call.
    pub fn run(&self, input: &[u32], target: u32) -> (RunOutput, u64) {
        match self {
            Algorithm::BubbleSort => {
                let (sorted, accesses) = bubble_sort(input);
                (RunOutput::Sorted(sorted), accesses)
            }
            Algorithm::LinearSearch => {
                let (index, accesses) = linear_search(input, target);
                (RunOutput::Index(index), accesses)
            }
        }
    }

    /// Verify correctness against the standard library on random input.
    pub fn verify(&self) -> Result<()> {
        let mut rng = seeded_rng(0x5EED);
        // Use an odd size to cover uneven passes
        let input = random_input(&mut rng, 257);
        let target = random_target(&mut rng, &input).unwrap_or_default();

        let fail = |reason: String| BenchError::Verification {
            algorithm: self.name(),
            reason,
        };

        match self.run(&input, target) {
            (RunOutput::Sorted(sorted), accesses) => {
                let mut expected = input.clone();
                expected.sort_unstable();
                if sorted != expected {
                    return Err(fail("output is not the sorted input".to_string()));
                }
                let expected_accesses = bubble_sort_accesses(&input);
                if accesses != expected_accesses {
                    return Err(fail(format!(
                        "expected {} accesses, got {}",
                        expected_accesses, accesses
                    )));
                }
            }
            (RunOutput::Index(index), accesses) => {
                let expected = input.iter().position(|&v| v == target);
                if index != expected {
                    return Err(fail(format!("expected {:?}, got {:?}", expected, index)));
                }
                let expected_accesses = expected.map_or(input.len(), |i| i + 1) as u64;
                if accesses != expected_accesses {
                    return Err(fail(format!(
                        "expected {} accesses, got {}",
                        expected_accesses, accesses
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Number of pairs `i < j` with `input[i] > input[j]`.
fn count_inversions(input: &[u32]) -> u64 {
    input
        .iter()
        .enumerate()
        .map(|(i, &a)| input[i + 1..].iter().filter(|&&b| a > b).count() as u64)
        .sum()
}

/// Accesses bubble sort must report: one comparison per pair, one swap
/// per inversion.
fn bubble_sort_accesses(input: &[u32]) -> u64 {
    use crate::sort::bubble_sort::{ACCESSES_PER_COMPARISON, ACCESSES_PER_SWAP};

    let n = input.len() as u64;
    let comparisons = n * n.saturating_sub(1) / 2;
    ACCESSES_PER_COMPARISON * comparisons + ACCESSES_PER_SWAP * count_inversions(input)
}

/// Registry of the algorithms selected for a run
pub struct AlgorithmRegistry {
    algorithms: Vec<Algorithm>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    /// Register an algorithm
    pub fn register(&mut self, algo: Algorithm) {
        if !self.algorithms.contains(&algo) {
            self.algorithms.push(algo);
        }
    }

    /// Get all registered algorithms
    pub fn all(&self) -> &[Algorithm] {
        &self.algorithms
    }

    /// Find algorithm by key
    pub fn find(&self, key: &str) -> Result<Algorithm> {
        self.algorithms
            .iter()
            .copied()
            .find(|a| a.key() == key)
            .ok_or_else(|| BenchError::UnknownAlgorithm {
                name: key.to_string(),
                available: self.list_keys(),
            })
    }

    /// List algorithm keys
    pub fn list_keys(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.key()).collect()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all algorithms
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();
    for algo in Algorithm::ALL {
        registry.register(algo);
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_dispatches_by_variant() {
        let input = [5, 3, 5];

        let (out, accesses) = Algorithm::LinearSearch.run(&input, 5);
        assert_eq!(out, RunOutput::Index(Some(0)));
        assert_eq!(accesses, 1);

        // Target is ignored when sorting
        let (a, acc_a) = Algorithm::BubbleSort.run(&input, 5);
        let (b, acc_b) = Algorithm::BubbleSort.run(&input, 999);
        assert_eq!(a, RunOutput::Sorted(vec![3, 5, 5]));
        assert_eq!((a, acc_a), (b, acc_b));
    }

    #[test]
    fn test_count_inversions() {
        assert_eq!(count_inversions(&[]), 0);
        assert_eq!(count_inversions(&[1, 2, 3]), 0);
        assert_eq!(count_inversions(&[3, 2, 1]), 3);
        assert_eq!(count_inversions(&[2, 2, 1]), 2);
    }

    #[test]
    fn test_bubble_sort_accesses_match_inversions() {
        let input = [5, 1, 4, 2, 8];
        // 10 comparisons, 4 inversions: (5,1) (5,4) (5,2) (4,2)
        assert_eq!(bubble_sort_accesses(&input), 10 * 2 + 4 * 4);

        let (_, accesses) = Algorithm::BubbleSort.run(&input, 0);
        assert_eq!(accesses, bubble_sort_accesses(&input));
    }

    #[test]
    fn test_verify_checks_every_variant() {
        for algo in Algorithm::ALL {
            assert!(algo.verify().is_ok(), "{} failed verification", algo.name());
        }
    }

    #[test]
    fn test_find() {
        let registry = build_registry();
        assert_eq!(registry.find("bubble_sort").unwrap(), Algorithm::BubbleSort);
        assert_eq!(registry.find("linear_search").unwrap(), Algorithm::LinearSearch);

        let err = registry.find("quick_sort").unwrap_err();
        assert!(matches!(err, BenchError::UnknownAlgorithm { .. }));
    }

    #[test]
    fn test_register_ignores_duplicates() {
        let mut registry = AlgorithmRegistry::new();
        registry.register(Algorithm::LinearSearch);
        registry.register(Algorithm::LinearSearch);
        assert_eq!(registry.list_keys(), vec!["linear_search"]);
    }

    #[test]
    fn test_names() {
        let names: Vec<_> = build_registry().all().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["Bubble Sort", "Linear Search"]);
    }
}
