//! Convert table rows into typed transactions.
//!
//! Descriptions that wrapped onto extra physical lines show up as rows whose
//! first token is not a date; those rows are folded back into the preceding
//! transaction's details.

use khata_core::{Transaction, is_date_string};

/// Positional row columns: `[date, details, debit, credit, balance]`.
/// Missing columns read as empty strings.
fn field<'a>(row: &'a [String], index: usize) -> &'a str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// Parse an amount token. Anything that is not a plain number (empty string,
/// grouped digits like `1,234.56`) coerces to zero.
fn parse_amount(token: &str) -> f64 {
    token.trim().parse().unwrap_or(0.0)
}

/// Parse one table region into transactions, merging continuation rows.
///
/// The date token is kept verbatim when it reads as a date, otherwise the
/// transaction is emitted with an empty date. Rows are never dropped.
pub fn parse_table(rows: &[Vec<String>]) -> Vec<Transaction> {
    let mut transactions = Vec::new();
    let mut cursor = 0;

    while cursor < rows.len() {
        let row = &rows[cursor];
        let date_token = field(row, 0);
        let mut details = field(row, 1).to_string();
        let debit = parse_amount(field(row, 2));
        let credit = parse_amount(field(row, 3));
        let balance = parse_amount(field(row, 4));

        cursor += 1;
        while cursor < rows.len() && !is_date_string(field(&rows[cursor], 0)) {
            // Wrapped description: concatenated with no separator, matching
            // how the fragments were split.
            details.push_str(field(&rows[cursor], 0));
            cursor += 1;
        }

        let date = if is_date_string(date_token) {
            date_token.to_string()
        } else {
            String::new()
        };

        transactions.push(Transaction {
            date,
            details,
            debit,
            credit,
            balance,
        });
    }

    transactions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_parses_plain_rows() {
        let rows = vec![
            row(&["2024-01-05", "Payment to X", "100", "", "900"]),
            row(&["2024-01-06", "Salary", "", "2500", "3400"]),
        ];
        let txns = parse_table(&rows);

        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0], Transaction::new("2024-01-05", "Payment to X", 100.0, 0.0, 900.0));
        assert_eq!(txns[1], Transaction::new("2024-01-06", "Salary", 0.0, 2500.0, 3400.0));
    }

    #[test]
    fn test_continuation_rows_merge_into_details() {
        let rows = vec![
            row(&["2024-01-05", "Payment to X", "100", "", "900"]),
            row(&["continued text"]),
            row(&["2024-01-06", "Next", "", "50", "950"]),
        ];
        let txns = parse_table(&rows);

        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].details, "Payment to Xcontinued text");
        assert_eq!(txns[1].details, "Next");
    }

    #[test]
    fn test_multiple_continuation_rows() {
        let rows = vec![
            row(&["2024-01-05", "NEFT/", "100", "", "900"]),
            row(&["SOME LONG"]),
            row(&["BENEFICIARY NAME"]),
        ];
        let txns = parse_table(&rows);

        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].details, "NEFT/SOME LONGBENEFICIARY NAME");
    }

    #[test]
    fn test_empty_amount_coerces_to_zero() {
        let rows = vec![row(&["2024-01-05", "Payment", "", "", ""])];
        let txns = parse_table(&rows);
        assert_eq!(txns[0].debit, 0.0);
        assert_eq!(txns[0].credit, 0.0);
        assert_eq!(txns[0].balance, 0.0);
    }

    #[test]
    fn test_grouped_digits_coerce_to_zero() {
        // Thousands separators are not parsed; the token coerces to zero.
        let rows = vec![row(&["2024-01-05", "Payment", "1,234.56", "", "9,000.00"])];
        let txns = parse_table(&rows);
        assert_eq!(txns[0].debit, 0.0);
        assert_eq!(txns[0].balance, 0.0);
    }

    #[test]
    fn test_invalid_date_emits_empty_date() {
        // A region that opens with a wrapped row still yields a transaction.
        let rows = vec![row(&["B/F", "Opening balance", "", "", "1000"])];
        let txns = parse_table(&rows);
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].date, "");
        assert_eq!(txns[0].details, "Opening balance");
        assert_eq!(txns[0].balance, 1000.0);
    }

    #[test]
    fn test_short_rows_read_as_empty_fields() {
        let rows = vec![row(&["2024-01-05"])];
        let txns = parse_table(&rows);
        assert_eq!(txns[0].details, "");
        assert_eq!(txns[0].debit, 0.0);
    }

    #[test]
    fn test_empty_region_yields_no_transactions() {
        assert!(parse_table(&[]).is_empty());
    }
}
