//! Enumerate distinct integer partitions with memoization

use crate::error::PartitionArgsError;
use crate::puzzle::Value;
use crate::solve::magic_numbers::MAGIC_NUMBERS;

/// Memoized partition results, keyed by `(total, length)`
pub struct PartitionCache {
    entries: Vec<CacheEntry>,
}

struct CacheEntry {
    total: u32,
    length: usize,
    partitions: Vec<Vec<Value>>,
}

impl PartitionCache {
    /// Creates a cache pre-seeded with the known single-partition totals
    pub fn new() -> Self {
        let entries = MAGIC_NUMBERS
            .iter()
            .map(|(total, values)| CacheEntry {
                total: *total,
                length: values.len(),
                partitions: vec![values.clone()],
            })
            .collect();
        Self { entries }
    }

    fn get(
        &self,
        total: u32,
        length: usize,
        min: Value,
        max: Value,
    ) -> Option<Vec<Vec<Value>>> {
        self.entries
            .iter()
            .find(|entry| {
                entry.total == total
                    && entry.length == length
                    && entry
                        .partitions
                        .iter()
                        .flatten()
                        .all(|&v| v >= min && v <= max)
            })
            .map(|entry| entry.partitions.clone())
    }

    fn insert(&mut self, total: u32, length: usize, partitions: Vec<Vec<Value>>) {
        if partitions.is_empty() {
            return;
        }
        self.entries.push(CacheEntry {
            total,
            length,
            partitions,
        });
    }

    #[cfg(test)]
    fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for PartitionCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Enumerates every set of `length` distinct values in `min..=max` summing to
/// `total`. Each partition is in descending order and the list is ordered with
/// larger leading values first.
pub fn calculate_distinct_partitions(
    total: u32,
    length: usize,
    min: Value,
    max: Value,
    cache: &mut PartitionCache,
) -> Result<Vec<Vec<Value>>, PartitionArgsError> {
    if max > 9 {
        return Err(PartitionArgsError::MaxTooLarge(max));
    }
    if max >= total {
        return Err(PartitionArgsError::MaxNotBelowTotal { max, total });
    }
    if min >= max {
        return Err(PartitionArgsError::MinNotBelowMax { min, max });
    }
    if let Some(partitions) = cache.get(total, length, min, max) {
        return Ok(partitions);
    }
    let partitions = distinct_partitions(total, length, min, max);
    cache.insert(total, length, partitions.clone());
    Ok(partitions)
}

fn distinct_partitions(total: u32, length: usize, min: Value, max: Value) -> Vec<Vec<Value>> {
    if total <= 1 {
        let partition = if total == 0 || total < min {
            Vec::new()
        } else {
            vec![total]
        };
        return vec![partition];
    }
    let mut partitions = Vec::new();
    if length == 0 {
        return partitions;
    }
    for value in (min..=total.min(max)).rev() {
        for sub in distinct_partitions(total - value, length - 1, min, value) {
            let mut partition = Vec::with_capacity(sub.len() + 1);
            partition.push(value);
            partition.extend(sub);
            if partition.len() == length
                && partition.iter().sum::<u32>() == total
                && is_descending_distinct(&partition)
            {
                partitions.push(partition);
            }
        }
    }
    partitions
}

fn is_descending_distinct(partition: &[Value]) -> bool {
    partition.windows(2).all(|pair| pair[0] > pair[1])
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use proptest::prelude::*;

    use super::{calculate_distinct_partitions, PartitionCache};
    use crate::error::PartitionArgsError;
    use crate::puzzle::Value;

    #[test]
    fn three_cells_total_twenty() {
        let mut cache = PartitionCache::new();
        let partitions = calculate_distinct_partitions(20, 3, 1, 9, &mut cache).unwrap();
        assert_eq!(
            vec![vec![9, 8, 3], vec![9, 7, 4], vec![9, 6, 5], vec![8, 7, 5]],
            partitions
        );
    }

    #[test]
    fn rejects_invalid_args() {
        let mut cache = PartitionCache::new();
        assert_eq!(
            PartitionArgsError::MaxTooLarge(10),
            calculate_distinct_partitions(10, 2, 1, 10, &mut cache).unwrap_err()
        );
        assert_eq!(
            PartitionArgsError::MaxNotBelowTotal { max: 5, total: 5 },
            calculate_distinct_partitions(5, 2, 1, 5, &mut cache).unwrap_err()
        );
        assert_eq!(
            PartitionArgsError::MinNotBelowMax { min: 3, max: 3 },
            calculate_distinct_partitions(4, 2, 3, 3, &mut cache).unwrap_err()
        );
    }

    #[test]
    fn cache_idempotence() {
        let mut cache = PartitionCache::new();
        let before = cache.entry_count();
        let first = calculate_distinct_partitions(12, 3, 1, 9, &mut cache).unwrap();
        assert_eq!(before + 1, cache.entry_count());
        let second = calculate_distinct_partitions(12, 3, 1, 9, &mut cache).unwrap();
        assert_eq!(before + 1, cache.entry_count());
        assert_eq!(first, second);
    }

    #[test]
    fn cache_copies_are_isolated() {
        let mut cache = PartitionCache::new();
        let mut first = calculate_distinct_partitions(12, 3, 1, 9, &mut cache).unwrap();
        first[0][0] = 0;
        first.pop();
        let second = calculate_distinct_partitions(12, 3, 1, 9, &mut cache).unwrap();
        assert_ne!(first, second);
        assert_eq!(9, second[0][0]);
    }

    #[test]
    fn cache_skips_empty_results() {
        let mut cache = PartitionCache::new();
        let before = cache.entry_count();
        let partitions = calculate_distinct_partitions(5, 4, 1, 4, &mut cache).unwrap();
        assert!(partitions.is_empty());
        assert_eq!(before, cache.entry_count());
    }

    #[test]
    fn magic_numbers_seed_the_cache() {
        let mut cache = PartitionCache::new();
        let before = cache.entry_count();
        let partitions = calculate_distinct_partitions(17, 2, 1, 9, &mut cache).unwrap();
        assert_eq!(vec![vec![9, 8]], partitions);
        assert_eq!(before, cache.entry_count());
    }

    fn brute_force(total: u32, length: usize, min: Value, max: Value) -> Vec<Vec<Value>> {
        (min..=max)
            .combinations(length)
            .filter(|partition| partition.iter().sum::<u32>() == total)
            .collect()
    }

    proptest! {
        #[test]
        fn matches_brute_force(total in 3u32..=30, length in 2usize..=5) {
            let max = if total <= 9 { total - 1 } else { 9 };
            let mut cache = PartitionCache::new();
            let partitions =
                calculate_distinct_partitions(total, length, 1, max, &mut cache).unwrap();
            let mut actual: Vec<Vec<Value>> = partitions
                .iter()
                .map(|partition| partition.iter().rev().copied().collect())
                .collect();
            let mut expected = brute_force(total, length, 1, max);
            actual.sort();
            expected.sort();
            prop_assert_eq!(&expected, &actual);
            // distinct partitions only, no repeated multisets
            prop_assert!(actual.windows(2).all(|pair| pair[0] != pair[1]));
        }
    }
}
