// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pair-sum index for the graph strategy.
//!
//! Every line through the center of a magic square of squares is a triple
//! `a + V + b` with the same sum, where `V` is the center value. Shell `i`
//! takes `V = (i+1)^2` and files every pair of smaller squares under the sum
//! `a + b + V`. A bucket that collects several triples is a set of lines that
//! could share one center; the builder tries to complete a square from it.
//!
//! Buckets are keyed by the exact integer sum and are kept for the whole run.
//! Memory therefore grows with the number of shells explored.

use std::collections::HashMap;

use crate::grid::{squared_value, Root, Value};

/// One line through a prospective center: `larger + smaller + vertex`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SumTriple {
    pub larger: Value,
    pub smaller: Value,
    pub vertex: Value,
}

impl SumTriple {
    pub fn sum(&self) -> Value {
        self.larger + self.smaller + self.vertex
    }

    pub fn values(&self) -> [Value; 3] {
        [self.larger, self.smaller, self.vertex]
    }

    pub fn contains(&self, value: Value) -> bool {
        self.values().contains(&value)
    }

    /// The two values other than `vertex`, in stored order.
    ///
    /// Only the first occurrence of `vertex` is removed.
    pub fn companions(&self, vertex: Value) -> [Value; 2] {
        match self.values() {
            [v, a, b] | [a, v, b] | [a, b, v] if v == vertex => [a, b],
            [a, b, _] => [a, b],
        }
    }
}

/// A bucket handed to the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emission {
    /// Key of the bucket.
    pub sum: Value,
    /// Center value of the shell that grew the bucket.
    pub vertex: Value,
}

/// Outcome of filing one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insertion {
    pub sum: Value,
    /// Bucket size after the insert.
    pub count: usize,
    /// The bucket is now strictly larger than any seen before.
    pub new_maximum: bool,
}

/// Buckets of triples keyed by their sum.
#[derive(Debug, Default)]
pub struct PairSumIndex {
    buckets: HashMap<Value, Vec<SumTriple>>,
    max_sums: usize,
    triples: u64,
}

impl PairSumIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// File the pair of roots `(j, k)`, `j < k`, against shell `shell`.
    pub fn insert(&mut self, shell: Root, j: Root, k: Root) -> Insertion {
        debug_assert!(j < k && k < shell, "pair ({j}, {k}) is not below shell {shell}");
        let triple = SumTriple {
            larger: squared_value(k),
            smaller: squared_value(j),
            vertex: squared_value(shell),
        };
        self.insert_triple(triple)
    }

    pub fn insert_triple(&mut self, triple: SumTriple) -> Insertion {
        let sum = triple.sum();
        let bucket = self.buckets.entry(sum).or_default();
        bucket.push(triple);
        let count = bucket.len();
        self.triples += 1;
        let new_maximum = count > self.max_sums;
        if new_maximum {
            self.max_sums = count;
        }
        Insertion {
            sum,
            count,
            new_maximum,
        }
    }

    pub fn bucket(&self, sum: Value) -> &[SumTriple] {
        self.buckets.get(&sum).map_or(&[], Vec::as_slice)
    }

    /// Size of the largest bucket so far.
    pub fn max_sums(&self) -> usize {
        self.max_sums
    }

    /// Number of triples filed over the run.
    pub fn total_triples(&self) -> u64 {
        self.triples
    }
}

/// Whether a bucket that just reached `count` goes to the builder.
///
/// Buckets no larger than the best score found so far cannot improve on it.
/// With `skip_short_entries`, buckets smaller than the largest seen are
/// passed over as well.
pub fn should_emit(count: usize, max_sums: usize, cur_score: usize, skip_short_entries: bool) -> bool {
    if count <= cur_score {
        return false;
    }
    !(skip_short_entries && count < max_sums)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_shells(index: &mut PairSumIndex, shells: Root) -> Vec<usize> {
        let mut maxima = Vec::new();
        for shell in 0..shells {
            for k in 0..shell {
                for j in 0..k {
                    index.insert(shell, j, k);
                }
            }
            maxima.push(index.max_sums());
        }
        maxima
    }

    #[test]
    fn test_triples_are_filed_under_their_sum() {
        let mut index = PairSumIndex::new();
        let insertion = index.insert(8, 0, 7);
        assert_eq!(insertion.sum, 1 + 64 + 81);
        assert_eq!(insertion.count, 1);
        assert!(insertion.new_maximum);
        assert_eq!(
            index.bucket(146),
            &[SumTriple {
                larger: 64,
                smaller: 1,
                vertex: 81
            }]
        );
    }

    #[test]
    fn test_coincident_sums_share_a_bucket() {
        // 1 + 64 == 16 + 49
        let mut index = PairSumIndex::new();
        index.insert(8, 0, 7);
        let second = index.insert(8, 3, 6);
        assert_eq!(second.sum, 146);
        assert_eq!(second.count, 2);
        assert_eq!(index.max_sums(), 2);
    }

    #[test]
    fn test_buckets_are_retained_across_shells() {
        let mut index = PairSumIndex::new();
        fill_shells(&mut index, 12);
        // Shell i contributes i choose 2 pairs.
        let expected: u64 = (0..12u64).map(|i| i * i.saturating_sub(1) / 2).sum();
        assert_eq!(index.total_triples(), expected);
        let filed: usize = index.buckets.values().map(Vec::len).sum();
        assert_eq!(filed as u64, expected);
        for (sum, bucket) in index.buckets.iter() {
            assert!(bucket.iter().all(|t| t.sum() == *sum));
        }
    }

    #[test]
    fn test_max_sums_is_monotone() {
        let mut index = PairSumIndex::new();
        let maxima = fill_shells(&mut index, 40);
        assert!(maxima.windows(2).all(|w| w[0] <= w[1]));
        assert!(*maxima.last().unwrap() >= 2);
    }

    #[test]
    fn test_companions() {
        let triple = SumTriple {
            larger: 49,
            smaller: 1,
            vertex: 25,
        };
        assert_eq!(triple.companions(25), [49, 1]);
        assert_eq!(triple.companions(49), [1, 25]);
        assert!(triple.contains(1));
        assert!(!triple.contains(4));
    }

    #[test]
    fn test_should_emit() {
        assert!(should_emit(3, 3, 0, false));
        assert!(!should_emit(3, 3, 3, false));
        assert!(should_emit(2, 5, 1, false));
        assert!(!should_emit(2, 5, 1, true));
        assert!(should_emit(5, 5, 1, true));
    }
}
