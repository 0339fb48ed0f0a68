use crate::encoder::OneHotMatrix;
use crate::error::{MinerError, Result};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Canonical itemset: sorted column positions into the encoded matrix
pub type Itemset = Vec<usize>;

/// Frequent itemsets with their supports, keyed by canonical ordering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequentItemsets {
    supports: HashMap<Itemset, f64>,
}

impl FrequentItemsets {
    /// Support of an itemset, if it was found frequent
    pub fn support(&self, itemset: &[usize]) -> Option<f64> {
        self.supports.get(itemset).copied()
    }

    /// Whether an itemset was found frequent
    pub fn contains(&self, itemset: &[usize]) -> bool {
        self.supports.contains_key(itemset)
    }

    /// Number of frequent itemsets across all levels
    pub fn len(&self) -> usize {
        self.supports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supports.is_empty()
    }

    /// Iterate over (itemset, support) pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&Itemset, f64)> {
        self.supports.iter().map(|(set, &support)| (set, support))
    }
}

/// Mine all frequent itemsets from a one-hot matrix, level by level
///
/// Level 1 keeps every singleton meeting `min_support`. Level k joins pairs
/// of frequent (k-1)-itemsets sharing a k-2 prefix, discards candidates with
/// an infrequent (k-1)-subset (the Apriori property), and counts survivors
/// against the matrix. Stops when a level comes up empty.
pub fn mine(matrix: &OneHotMatrix, min_support: f64) -> Result<FrequentItemsets> {
    if !(min_support > 0.0 && min_support <= 1.0) {
        return Err(MinerError::InvalidParameter(format!(
            "min_support must be in (0, 1], got {min_support}"
        )));
    }
    if matrix.n_rows() == 0 {
        return Err(MinerError::EmptyInput(
            "membership matrix has no rows".to_string(),
        ));
    }

    let mut supports: HashMap<Itemset, f64> = HashMap::new();

    // Level 1: frequent singletons
    let mut level: Vec<Itemset> = Vec::new();
    for col in 0..matrix.n_items() {
        let support = matrix.support(&[col]);
        if support >= min_support {
            supports.insert(vec![col], support);
            level.push(vec![col]);
        }
    }
    level.sort();
    debug!(level = 1, frequent = level.len(), "apriori level complete");

    let mut k = 2;
    while !level.is_empty() && k <= matrix.n_items() {
        let prev: HashSet<Itemset> = level.iter().cloned().collect();
        let mut candidates = 0usize;
        let mut next: Vec<Itemset> = Vec::new();

        for i in 0..level.len() {
            for j in (i + 1)..level.len() {
                // Prefix join over the sorted level: once the k-2 prefix of
                // level[j] diverges from level[i] it never matches again.
                if level[i][..k - 2] != level[j][..k - 2] {
                    break;
                }
                let mut candidate = level[i].clone();
                candidate.push(level[j][k - 2]);
                candidates += 1;

                if !all_subsets_frequent(&candidate, &prev) {
                    continue;
                }
                let support = matrix.support(&candidate);
                if support >= min_support {
                    supports.insert(candidate.clone(), support);
                    next.push(candidate);
                }
            }
        }

        next.sort();
        debug!(
            level = k,
            candidates,
            frequent = next.len(),
            "apriori level complete"
        );
        level = next;
        k += 1;
    }

    Ok(FrequentItemsets { supports })
}

/// Apriori pruning: every (k-1)-subset of a k-candidate must itself be frequent
fn all_subsets_frequent(candidate: &[usize], prev: &HashSet<Itemset>) -> bool {
    (0..candidate.len()).all(|skip| {
        let subset: Itemset = candidate
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != skip)
            .map(|(_, &item)| item)
            .collect();
        prev.contains(&subset)
    })
}
