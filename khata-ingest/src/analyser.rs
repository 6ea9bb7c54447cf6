//! Drive extraction across a whole document and aggregate the result.

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use khata_core::{ExpenditureSummary, Transaction, summarize_expenditure};

use crate::extract::{DocumentText, PdfText};
use crate::layout::reconstruct_lines;
use crate::parser::parse_table;
use crate::table::locate_table_regions;

/// Options for a statement analysis run.
///
/// The document password is an explicit option here; reading it from the
/// environment is the caller's business.
#[derive(Debug, Clone, Default)]
pub struct AnalyseOptions {
    pub password: Option<String>,
}

/// Extract every transaction in the document, in page order and row order
/// within each page. Pages without a recognised table contribute nothing.
pub fn extract_transactions(document: &dyn DocumentText) -> Result<Vec<Transaction>> {
    let mut transactions = Vec::new();

    for page_index in 0..document.page_count() {
        let fragments = document.page_fragments(page_index)?;
        let lines = reconstruct_lines(fragments);
        let regions = locate_table_regions(&lines);
        debug!(page = page_index, regions = regions.len(), "located table regions");

        for region in &regions {
            transactions.extend(parse_table(region));
        }
    }

    debug!(count = transactions.len(), "extracted transactions");
    Ok(transactions)
}

/// Analyse a statement PDF on disk and summarize its expenditure.
pub fn analyse_file(path: impl AsRef<Path>, options: &AnalyseOptions) -> Result<ExpenditureSummary> {
    let document = PdfText::open(path, options.password.as_deref())?;
    let transactions = extract_transactions(&document)?;
    summarize_expenditure(&transactions)
}

/// Analyse a statement PDF already read into memory.
pub fn analyse_bytes(bytes: &[u8], options: &AnalyseOptions) -> Result<ExpenditureSummary> {
    let document = PdfText::from_bytes(bytes, options.password.as_deref())?;
    let transactions = extract_transactions(&document)?;
    summarize_expenditure(&transactions)
}
