//! CSV output format for mined association rules
//!
//! Columns match the classic rule-table layout: antecedent, consequent, the
//! three raw supports, then the derived metrics. Infinite conviction renders
//! as `inf`, which is what f64's Display produces.

use crate::mining::{itemset_names, Rule};

/// A single rule rendered for CSV export
#[derive(Debug, Clone)]
pub struct CsvRule {
    pub antecedent: String,
    pub consequent: String,
    pub antecedent_support: f64,
    pub consequent_support: f64,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
    pub leverage: f64,
    pub conviction: f64,
}

/// CSV output formatter for association rules
#[derive(Debug, Default)]
pub struct CsvRuleOutput {
    rules: Vec<CsvRule>,
}

impl CsvRuleOutput {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Build the full output from computed rules, resolving item names
    pub fn from_rules(rules: &[Rule], items: &[String]) -> Self {
        let mut output = Self::new();
        for rule in rules {
            output.add_rule(CsvRule {
                antecedent: itemset_names(&rule.antecedent, items),
                consequent: itemset_names(&rule.consequent, items),
                antecedent_support: rule.antecedent_support,
                consequent_support: rule.consequent_support,
                support: rule.support,
                confidence: rule.confidence,
                lift: rule.lift,
                leverage: rule.leverage,
                conviction: rule.conviction,
            });
        }
        output
    }

    /// Add a rendered rule row
    pub fn add_rule(&mut self, rule: CsvRule) {
        self.rules.push(rule);
    }

    fn header() -> &'static str {
        "antecedent,consequent,antecedent_support,consequent_support,support,confidence,lift,leverage,conviction"
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// Format a rule as a CSV row
    fn format_rule(rule: &CsvRule) -> String {
        let fields = [
            Self::escape_field(&rule.antecedent),
            Self::escape_field(&rule.consequent),
            rule.antecedent_support.to_string(),
            rule.consequent_support.to_string(),
            rule.support.to_string(),
            rule.confidence.to_string(),
            rule.lift.to_string(),
            rule.leverage.to_string(),
            rule.conviction.to_string(),
        ];
        fields.join(",")
    }

    /// Generate CSV output as a string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();
        output.push_str(Self::header());
        output.push('\n');
        for rule in &self.rules {
            output.push_str(&Self::format_rule(rule));
            output.push('\n');
        }
        output
    }
}
