//! Expenditure aggregation over a parsed transaction set.
//!
//! The period's starting balance is estimated from the last transaction of
//! the earliest day: its balance with the transaction's own effect undone
//! (add the debit back, or subtract the credit). The ending balance is the
//! balance on the first transaction of the latest day.

use std::collections::BTreeMap;

use anyhow::{Result, bail};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::dates::parse_loose_date;
use crate::transaction::Transaction;

/// Aggregate view of a transaction set over its statement period.
///
/// `total_money_expended` and `total_money_increased` are exact negations of
/// each other; a net increase over the period shows up as a negative
/// `total_money_expended`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenditureSummary {
    pub total_debit_amount: f64,
    pub total_credit_amount: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_money_expended: f64,
    pub total_money_increased: f64,
}

/// Summarize a transaction set.
///
/// Transactions whose date token does not parse still count toward the
/// debit/credit totals but are left out of the date grouping. Errors when
/// the set is empty or no transaction carries a usable date.
pub fn summarize_expenditure(transactions: &[Transaction]) -> Result<ExpenditureSummary> {
    if transactions.is_empty() {
        bail!("cannot summarize an empty transaction set");
    }

    let mut total_debit = 0.0;
    let mut total_credit = 0.0;

    // BTreeMap keeps the date keys sorted; per-date vectors keep insertion
    // order, which the opening/closing balance picks depend on.
    let mut by_date: BTreeMap<NaiveDate, Vec<&Transaction>> = BTreeMap::new();

    for txn in transactions {
        total_debit += txn.debit;
        total_credit += txn.credit;

        if let Some(date) = parse_loose_date(&txn.date) {
            by_date.entry(date).or_default().push(txn);
        }
    }

    let (Some((&start_date, start_group)), Some((&end_date, end_group))) =
        (by_date.first_key_value(), by_date.last_key_value())
    else {
        bail!("no transaction carries a parseable date");
    };

    // Last transaction of the earliest day, with its own effect undone.
    let opening = start_group[start_group.len() - 1];
    let starting_amount = if opening.debit != 0.0 {
        opening.balance + opening.debit
    } else {
        opening.balance - opening.credit
    };

    // First transaction of the latest day.
    let ending_amount = end_group[0].balance;

    Ok(ExpenditureSummary {
        total_debit_amount: total_debit,
        total_credit_amount: total_credit,
        start_date,
        end_date,
        total_money_expended: starting_amount - ending_amount,
        total_money_increased: ending_amount - starting_amount,
    })
}

/// Summarize each calendar year independently, keyed by year.
///
/// Transactions without a parseable date are skipped.
pub fn summarize_by_year(transactions: &[Transaction]) -> Result<BTreeMap<i32, ExpenditureSummary>> {
    let mut by_year: BTreeMap<i32, Vec<Transaction>> = BTreeMap::new();
    for txn in transactions {
        if let Some(date) = parse_loose_date(&txn.date) {
            by_year.entry(date.year()).or_default().push(txn.clone());
        }
    }

    let mut summaries = BTreeMap::new();
    for (year, group) in &by_year {
        summaries.insert(*year, summarize_expenditure(group)?);
    }
    Ok(summaries)
}

/// Summarize each calendar month independently, keyed `M-YYYY` (no zero
/// padding, e.g. `6-2025`).
///
/// The keys are labels, not a chronology: map order is lexicographic, so
/// `10-2025` sorts before `6-2025`.
///
/// Transactions without a parseable date are skipped.
pub fn summarize_by_month(
    transactions: &[Transaction],
) -> Result<BTreeMap<String, ExpenditureSummary>> {
    let mut by_month: BTreeMap<String, Vec<Transaction>> = BTreeMap::new();
    for txn in transactions {
        if let Some(date) = parse_loose_date(&txn.date) {
            let key = format!("{}-{}", date.month(), date.year());
            by_month.entry(key).or_default().push(txn.clone());
        }
    }

    let mut summaries = BTreeMap::new();
    for (key, group) in &by_month {
        summaries.insert(key.clone(), summarize_expenditure(group)?);
    }
    Ok(summaries)
}
