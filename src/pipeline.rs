//! Mining pipeline configuration and session
//!
//! Ties the stages together: encode → mine → generate → finalize. Each stage
//! hands an owned result to the next; the session just holds onto what one
//! run produced so callers (the CLI, mostly) can query it afterwards.

use crate::encoder::{self, OneHotMatrix};
use crate::error::{MinerError, Result};
use crate::mining::{self, FrequentItemsets, Metric, Rule};
use tracing::info;

/// Configuration surface of the mining core
#[derive(Debug, Clone, Copy)]
pub struct MinerConfig {
    /// Minimum itemset support, in (0, 1]
    pub min_support: f64,
    /// Metric screened during rule generation
    pub metric: Metric,
    /// Threshold the chosen metric must meet
    pub metric_threshold: f64,
    /// Hard confidence floor applied to the final output
    pub confidence_threshold: f64,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            min_support: 0.005,
            metric: Metric::Confidence,
            metric_threshold: 0.2,
            confidence_threshold: 0.2,
        }
    }
}

impl MinerConfig {
    /// Check thresholds before any work happens
    pub fn validate(&self) -> Result<()> {
        if !(self.min_support > 0.0 && self.min_support <= 1.0) {
            return Err(MinerError::InvalidParameter(format!(
                "min_support must be in (0, 1], got {}",
                self.min_support
            )));
        }
        if !self.metric_threshold.is_finite() {
            return Err(MinerError::InvalidParameter(
                "metric_threshold must be finite".to_string(),
            ));
        }
        if !self.confidence_threshold.is_finite() {
            return Err(MinerError::InvalidParameter(
                "confidence_threshold must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// Everything one mining run produced
#[derive(Debug)]
pub struct MiningResults {
    pub matrix: OneHotMatrix,
    pub frequent: FrequentItemsets,
    pub rules: Vec<Rule>,
}

/// One configured mining run
///
/// Results are owned by the session after `run`; querying them earlier is
/// the `NotComputed` error rather than a panic.
#[derive(Debug, Default)]
pub struct MinerSession {
    config: MinerConfig,
    results: Option<MiningResults>,
}

impl MinerSession {
    pub fn new(config: MinerConfig) -> Self {
        Self {
            config,
            results: None,
        }
    }

    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    /// Execute the full pipeline over raw transactions
    pub fn run(&mut self, transactions: &[Vec<String>]) -> Result<&MiningResults> {
        self.config.validate()?;

        let matrix = encoder::encode(transactions)?;
        let frequent = mining::mine(&matrix, self.config.min_support)?;
        let generated =
            mining::generate_rules(&frequent, self.config.metric, self.config.metric_threshold);
        let rules = mining::finalize(generated, self.config.confidence_threshold);

        info!(
            transactions = matrix.n_rows(),
            items = matrix.n_items(),
            frequent_itemsets = frequent.len(),
            rules = rules.len(),
            "mining run complete"
        );

        Ok(self.results.insert(MiningResults {
            matrix,
            frequent,
            rules,
        }))
    }

    /// Results of the last run
    pub fn results(&self) -> Result<&MiningResults> {
        self.results.as_ref().ok_or(MinerError::NotComputed)
    }

    /// Final rules of the last run
    pub fn rules(&self) -> Result<&[Rule]> {
        Ok(&self.results()?.rules)
    }
}
