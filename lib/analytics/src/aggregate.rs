//! Generic grouped aggregation.
//!
//! Groups preserve first-seen order so tabular output is deterministic.
//! Null values are skipped in means; a group whose every value is null
//! yields `None`, not zero and not an error.

use ahash::AHashMap;
use std::hash::Hash;

/// Mean of `value` per group, ignoring `None` values.
pub fn group_mean<R, K, KF, VF>(records: &[R], key: KF, value: VF) -> Vec<(K, Option<f64>)>
where
    K: Eq + Hash + Clone,
    KF: Fn(&R) -> K,
    VF: Fn(&R) -> Option<f64>,
{
    let mut index: AHashMap<K, usize> = AHashMap::new();
    let mut groups: Vec<(K, f64, usize)> = Vec::new();

    for record in records {
        let k = key(record);
        let slot = *index.entry(k.clone()).or_insert_with(|| {
            groups.push((k, 0.0, 0));
            groups.len() - 1
        });
        if let Some(v) = value(record) {
            groups[slot].1 += v;
            groups[slot].2 += 1;
        }
    }

    groups
        .into_iter()
        .map(|(k, sum, n)| (k, (n > 0).then(|| sum / n as f64)))
        .collect()
}

/// Record count per group, in first-seen order.
pub fn group_count<R, K, KF>(records: &[R], key: KF) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    KF: Fn(&R) -> K,
{
    let mut index: AHashMap<K, usize> = AHashMap::new();
    let mut groups: Vec<(K, usize)> = Vec::new();

    for record in records {
        let k = key(record);
        let slot = *index.entry(k.clone()).or_insert_with(|| {
            groups.push((k, 0));
            groups.len() - 1
        });
        groups[slot].1 += 1;
    }

    groups
}
