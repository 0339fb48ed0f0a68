// Level-wise association rule mining (Apriori family).
//
// This module implements the combinatorial core: frequent-itemset search
// with candidate generation and subset pruning, followed by rule derivation
// with the standard interestingness metrics.
//
// Key insight: any superset of an infrequent itemset is itself infrequent
// (the Apriori property), so each level only joins survivors of the previous
// one instead of re-scanning the power set.

mod apriori;
mod rules;

pub use apriori::{mine, FrequentItemsets, Itemset};
pub use rules::{finalize, generate_rules, itemset_names, sort_rules, Metric, Rule};
