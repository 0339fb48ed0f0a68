//! Canasta - Pure Rust association rule miner for market-basket data
//!
//! This library provides the core functionality for discovering frequent
//! itemsets in transaction data with the level-wise Apriori algorithm and
//! deriving directional association rules ranked by the standard
//! interestingness metrics (confidence, lift, leverage, conviction).

pub mod cli;
pub mod csv_output;
pub mod encoder;
pub mod error;
pub mod json_output;
pub mod loader;
pub mod mining;
pub mod pipeline;
