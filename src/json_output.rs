//! JSON output format for mined association rules

use crate::mining::{FrequentItemsets, Rule};
use serde::{Deserialize, Serialize};

/// A single association rule record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRule {
    /// Antecedent item names
    pub antecedent: Vec<String>,
    /// Consequent item names
    pub consequent: Vec<String>,
    pub antecedent_support: f64,
    pub consequent_support: f64,
    /// Support of antecedent ∪ consequent
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
    pub leverage: f64,
    /// Omitted when infinite (confidence = 1); JSON has no Infinity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conviction: Option<f64>,
}

/// Summary statistics for a mining run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSummary {
    /// Number of transactions mined
    pub total_transactions: usize,
    /// Number of distinct items observed
    pub total_items: usize,
    /// Number of frequent itemsets across all levels
    pub frequent_itemsets: usize,
    /// Number of rules surviving both thresholds
    pub total_rules: usize,
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    /// Surviving rules, in pipeline output order
    pub rules: Vec<JsonRule>,
    /// Summary statistics
    pub summary: JsonSummary,
}

impl JsonOutput {
    /// Create a new JSON output structure
    pub fn new(total_transactions: usize, total_items: usize) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "canasta-json-v1".to_string(),
            rules: Vec::new(),
            summary: JsonSummary {
                total_transactions,
                total_items,
                frequent_itemsets: 0,
                total_rules: 0,
            },
        }
    }

    /// Add a rule to the output, resolving item names
    pub fn add_rule(&mut self, rule: &Rule, items: &[String]) {
        let names = |itemset: &[usize]| -> Vec<String> {
            itemset.iter().map(|&i| items[i].clone()).collect()
        };
        self.rules.push(JsonRule {
            antecedent: names(&rule.antecedent),
            consequent: names(&rule.consequent),
            antecedent_support: rule.antecedent_support,
            consequent_support: rule.consequent_support,
            support: rule.support,
            confidence: rule.confidence,
            lift: rule.lift,
            leverage: rule.leverage,
            conviction: rule.conviction.is_finite().then_some(rule.conviction),
        });
        self.summary.total_rules += 1;
    }

    /// Record the frequent-itemset count in the summary
    pub fn set_frequent_itemsets(&mut self, frequent: &FrequentItemsets) {
        self.summary.frequent_itemsets = frequent.len();
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
