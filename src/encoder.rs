//! One-hot transaction encoding
//!
//! Converts raw per-transaction item lists into a boolean membership matrix
//! over a sorted, deduplicated item universe. Columns are stored as packed
//! u64 bitmaps so itemset support counting is a word-wise AND plus popcount
//! instead of a per-cell scan.

use crate::error::{MinerError, Result};
use std::collections::{BTreeSet, HashMap};

/// One-hot encoded transaction matrix (column-major bitmaps)
#[derive(Debug, Clone)]
pub struct OneHotMatrix {
    /// Sorted, deduplicated item universe; vector index = column position
    items: Vec<String>,
    /// One packed bitmap per item; bit t is set iff transaction t contains it
    columns: Vec<Vec<u64>>,
    /// Number of transactions (rows)
    rows: usize,
}

impl OneHotMatrix {
    /// Number of transactions encoded
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Number of distinct items (columns)
    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    /// The item universe, sorted; index = stable column position
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Name of the item at a column position
    pub fn item_name(&self, col: usize) -> &str {
        &self.items[col]
    }

    /// Whether transaction `row` contains the item at `col`
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.columns[col][row / 64] & (1u64 << (row % 64)) != 0
    }

    /// Count transactions containing every item in `cols`
    ///
    /// An empty column list is trivially contained in every transaction.
    pub fn support_count(&self, cols: &[usize]) -> usize {
        let Some((&first, rest)) = cols.split_first() else {
            return self.rows;
        };
        let mut acc = self.columns[first].clone();
        for &col in rest {
            for (word, other) in acc.iter_mut().zip(&self.columns[col]) {
                *word &= other;
            }
        }
        acc.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Fraction of transactions containing every item in `cols`
    pub fn support(&self, cols: &[usize]) -> f64 {
        self.support_count(cols) as f64 / self.rows as f64
    }
}

/// Encode raw transactions into a one-hot membership matrix
///
/// Item repetition within a single transaction is collapsed. The item
/// universe is a sorted dedup of everything observed, so duplicate columns
/// cannot occur by construction.
pub fn encode(transactions: &[Vec<String>]) -> Result<OneHotMatrix> {
    if transactions.is_empty() {
        return Err(MinerError::EmptyInput("no transactions".to_string()));
    }

    let universe: BTreeSet<&str> = transactions
        .iter()
        .flat_map(|txn| txn.iter().map(String::as_str))
        .collect();
    if universe.is_empty() {
        return Err(MinerError::EmptyInput(
            "every transaction is empty".to_string(),
        ));
    }

    let items: Vec<String> = universe.into_iter().map(String::from).collect();
    let index: HashMap<&str, usize> = items
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    let rows = transactions.len();
    let words = rows.div_ceil(64);
    let mut columns = vec![vec![0u64; words]; items.len()];

    for (row, txn) in transactions.iter().enumerate() {
        for item in txn {
            let col = index[item.as_str()];
            columns[col][row / 64] |= 1u64 << (row % 64);
        }
    }

    Ok(OneHotMatrix {
        items,
        columns,
        rows,
    })
}
