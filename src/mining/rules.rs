use super::apriori::{FrequentItemsets, Itemset};
use crate::error::MinerError;
use std::str::FromStr;
use tracing::debug;

/// Interestingness metric used to screen candidate rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Confidence,
    Lift,
    Leverage,
    Conviction,
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Confidence => "confidence",
            Metric::Lift => "lift",
            Metric::Leverage => "leverage",
            Metric::Conviction => "conviction",
        }
    }

    /// Value of this metric for a computed rule
    pub fn value(&self, rule: &Rule) -> f64 {
        match self {
            Metric::Confidence => rule.confidence,
            Metric::Lift => rule.lift,
            Metric::Leverage => rule.leverage,
            Metric::Conviction => rule.conviction,
        }
    }
}

impl FromStr for Metric {
    type Err = MinerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confidence" => Ok(Metric::Confidence),
            "lift" => Ok(Metric::Lift),
            "leverage" => Ok(Metric::Leverage),
            "conviction" => Ok(Metric::Conviction),
            other => Err(MinerError::InvalidParameter(format!(
                "unknown metric: {other} (expected confidence, lift, leverage, or conviction)"
            ))),
        }
    }
}

/// A directional association rule antecedent → consequent
///
/// Antecedent and consequent are disjoint, non-empty itemsets whose union is
/// frequent. All four metrics are computed up front so callers can re-rank
/// without touching the matrix again.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub antecedent: Itemset,
    pub consequent: Itemset,
    pub antecedent_support: f64,
    pub consequent_support: f64,
    /// Support of antecedent ∪ consequent
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
    pub leverage: f64,
    /// `f64::INFINITY` when confidence is exactly 1
    pub conviction: f64,
}

/// Derive candidate rules from the frequent itemsets
///
/// Every frequent itemset with at least two items contributes one candidate
/// per non-empty proper subset (the antecedent); the remainder is the
/// consequent. A candidate survives iff the chosen `metric` meets
/// `min_threshold`. Both directions of a split are independent candidates.
pub fn generate_rules(frequent: &FrequentItemsets, metric: Metric, min_threshold: f64) -> Vec<Rule> {
    // Fix an itemset order so the output sequence is deterministic
    let mut itemsets: Vec<(&Itemset, f64)> = frequent.iter().collect();
    itemsets.sort_by(|a, b| a.0.cmp(b.0));

    let mut rules = Vec::new();
    for (itemset, support) in itemsets {
        let n = itemset.len();
        if n < 2 {
            continue;
        }
        // Every non-empty proper subset, via bitmask over member positions
        for mask in 1..(1u64 << n) - 1 {
            let mut antecedent = Itemset::new();
            let mut consequent = Itemset::new();
            for (bit, &item) in itemset.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    antecedent.push(item);
                } else {
                    consequent.push(item);
                }
            }

            // Closure under subsets guarantees both lookups succeed
            let Some(antecedent_support) = frequent.support(&antecedent) else {
                continue;
            };
            let Some(consequent_support) = frequent.support(&consequent) else {
                continue;
            };

            let confidence = support / antecedent_support;
            let lift = confidence / consequent_support;
            let leverage = support - antecedent_support * consequent_support;
            let conviction = if confidence < 1.0 {
                (1.0 - consequent_support) / (1.0 - confidence)
            } else {
                f64::INFINITY
            };

            let rule = Rule {
                antecedent,
                consequent,
                antecedent_support,
                consequent_support,
                support,
                confidence,
                lift,
                leverage,
                conviction,
            };
            if metric.value(&rule) >= min_threshold {
                rules.push(rule);
            }
        }
    }

    debug!(
        metric = metric.as_str(),
        min_threshold,
        rules = rules.len(),
        "rule generation complete"
    );
    rules
}

/// Final confidence floor, independent of the generation metric
///
/// Kept separate so a caller mining by lift can still demand a hard
/// confidence minimum on the output. Preserves order; never duplicates.
pub fn finalize(rules: Vec<Rule>, confidence_threshold: f64) -> Vec<Rule> {
    rules
        .into_iter()
        .filter(|rule| rule.confidence >= confidence_threshold)
        .collect()
}

/// Resolve an itemset's column positions back to a display string
pub fn itemset_names(itemset: &[usize], items: &[String]) -> String {
    itemset
        .iter()
        .map(|&i| items[i].as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Sort rules by a metric, descending; ties keep their relative order
pub fn sort_rules(rules: &mut [Rule], metric: Metric) {
    rules.sort_by(|a, b| {
        metric
            .value(b)
            .partial_cmp(&metric.value(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
