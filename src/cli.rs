//! CLI argument parsing for Canasta

use crate::mining::Metric;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the mined rule table
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

/// Interestingness metric selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricArg {
    Confidence,
    Lift,
    Leverage,
    Conviction,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Confidence => Metric::Confidence,
            MetricArg::Lift => Metric::Lift,
            MetricArg::Leverage => Metric::Leverage,
            MetricArg::Conviction => Metric::Conviction,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "canasta")]
#[command(version)]
#[command(about = "Association rule mining over delimited transaction data", long_about = None)]
pub struct Cli {
    /// Delimited input file with one item row per record
    pub input: PathBuf,

    /// Minimum itemset support in (0, 1]
    #[arg(
        short = 's',
        long = "min-support",
        value_name = "FRACTION",
        default_value = "0.005"
    )]
    pub min_support: f64,

    /// Metric used to screen candidate rules
    #[arg(long = "metric", value_enum, default_value = "confidence")]
    pub metric: MetricArg,

    /// Threshold the chosen metric must meet during rule generation
    #[arg(long = "metric-threshold", value_name = "VALUE", default_value = "0.2")]
    pub metric_threshold: f64,

    /// Hard confidence floor applied to the final rule table
    #[arg(
        short = 'c',
        long = "min-confidence",
        value_name = "FRACTION",
        default_value = "0.2"
    )]
    pub confidence_threshold: f64,

    /// Field separator of the input file
    #[arg(long = "sep", value_name = "CHAR", default_value = ";")]
    pub sep: char,

    /// Header column holding the transaction key
    #[arg(
        long = "transaction-col",
        value_name = "NAME",
        default_value = "Payment ID"
    )]
    pub transaction_col: String,

    /// Header column holding the item
    #[arg(long = "item-col", value_name = "NAME", default_value = "Item")]
    pub item_col: String,

    /// Output format (text, json, or csv)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Sort the final rules by a metric, descending
    #[arg(long = "sort-by", value_enum, value_name = "METRIC")]
    pub sort_by: Option<MetricArg>,

    /// Also print the frequent itemsets before the rule table (text format)
    #[arg(long = "show-itemsets")]
    pub show_itemsets: bool,

    /// Enable debug logging to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
