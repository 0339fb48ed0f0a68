//! Delimited transaction file loading
//!
//! Reads a separator-delimited text file with a header row, groups rows by a
//! transaction key column (e.g. a payment identifier), and yields one item
//! list per transaction in first-seen key order. The mining core never sees
//! the key, only the grouped item lists.

use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load and group transactions from a delimited file
pub fn load_transactions(
    path: &Path,
    sep: char,
    transaction_col: &str,
    item_col: &str,
) -> Result<Vec<Vec<String>>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_transactions(&contents, sep, transaction_col, item_col)
        .with_context(|| format!("failed to parse {}", path.display()))
}

/// Parse delimited records and group item rows by transaction key
///
/// Blank lines are skipped. Rows shorter than the header are rejected with
/// their line number. Empty item fields are dropped (a transaction made
/// entirely of them still counts as seen, just with no items).
pub fn parse_transactions(
    contents: &str,
    sep: char,
    transaction_col: &str,
    item_col: &str,
) -> Result<Vec<Vec<String>>> {
    let mut lines = contents.lines();
    let Some(header) = lines.next() else {
        bail!("input is empty (no header row)");
    };

    let columns: Vec<&str> = header.split(sep).map(str::trim).collect();
    let key_idx = columns
        .iter()
        .position(|c| *c == transaction_col)
        .with_context(|| format!("header has no {transaction_col:?} column"))?;
    let item_idx = columns
        .iter()
        .position(|c| *c == item_col)
        .with_context(|| format!("header has no {item_col:?} column"))?;

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut transactions: Vec<Vec<String>> = Vec::new();

    for (offset, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(sep).collect();
        let line_no = offset + 2; // 1-based, after the header
        let Some(key) = fields.get(key_idx).map(|f| f.trim()) else {
            bail!("line {line_no}: missing {transaction_col:?} field");
        };
        let Some(item) = fields.get(item_idx).map(|f| f.trim()) else {
            bail!("line {line_no}: missing {item_col:?} field");
        };

        let slot = match index.get(key) {
            Some(&slot) => slot,
            None => {
                index.insert(key.to_string(), transactions.len());
                transactions.push(Vec::new());
                transactions.len() - 1
            }
        };
        if !item.is_empty() {
            transactions[slot].push(item.to_string());
        }
    }

    debug!(
        transactions = transactions.len(),
        "grouped input rows by transaction key"
    );
    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
Payment ID;Item
1001;milk
1001;bread
1002;bread
1003;milk
1003;milk
";

    #[test]
    fn test_parse_groups_by_key() {
        let txns = parse_transactions(SAMPLE, ';', "Payment ID", "Item").unwrap();
        assert_eq!(txns.len(), 3);
        assert_eq!(txns[0], vec!["milk", "bread"]);
        assert_eq!(txns[1], vec!["bread"]);
        // Duplicates within a transaction are kept here; the encoder collapses them
        assert_eq!(txns[2], vec!["milk", "milk"]);
    }

    #[test]
    fn test_parse_preserves_first_seen_order() {
        let input = "Payment ID;Item\n9;a\n1;b\n9;c\n";
        let txns = parse_transactions(input, ';', "Payment ID", "Item").unwrap();
        assert_eq!(txns, vec![vec!["a", "c"], vec!["b"]]);
    }

    #[test]
    fn test_parse_extra_columns_ignored() {
        let input = "Date,Payment ID,Item,Price\nmon,1,tea,2.50\nmon,1,jam,1.10\n";
        let txns = parse_transactions(input, ',', "Payment ID", "Item").unwrap();
        assert_eq!(txns, vec![vec!["tea", "jam"]]);
    }

    #[test]
    fn test_parse_skips_blank_lines_and_empty_items() {
        let input = "Payment ID;Item\n1;milk\n\n1;\n2;bread\n";
        let txns = parse_transactions(input, ';', "Payment ID", "Item").unwrap();
        assert_eq!(txns, vec![vec!["milk"], vec!["bread"]]);
    }

    #[test]
    fn test_parse_empty_input_fails() {
        let result = parse_transactions("", ';', "Payment ID", "Item");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_missing_key_column_fails() {
        let result = parse_transactions("Foo;Item\n1;milk\n", ';', "Payment ID", "Item");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Payment ID"));
    }

    #[test]
    fn test_parse_missing_item_column_fails() {
        let result = parse_transactions("Payment ID;Foo\n1;milk\n", ';', "Payment ID", "Item");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Item"));
    }

    #[test]
    fn test_parse_short_row_fails_with_line_number() {
        let input = "Payment ID;Item\n1;milk\n2\n";
        let err = parse_transactions(input, ';', "Payment ID", "Item").unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_load_transactions_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let txns = load_transactions(file.path(), ';', "Payment ID", "Item").unwrap();
        assert_eq!(txns.len(), 3);
    }

    #[test]
    fn test_load_transactions_missing_file_fails() {
        let result = load_transactions(
            Path::new("/nonexistent/baskets.csv"),
            ';',
            "Payment ID",
            "Item",
        );
        assert!(result.is_err());
    }
}
