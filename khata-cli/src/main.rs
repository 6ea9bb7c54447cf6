use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use khata_core::{summarize_by_month, summarize_by_year, summarize_expenditure};
use khata_ingest::{PdfText, extract_transactions};

mod logging;

/// Environment fallback for the statement password when --password is not
/// given. The library itself never reads the environment.
const PASSWORD_ENV: &str = "KHATA_PDF_PASSWORD";

#[derive(Parser, Debug)]
#[command(name = "khata", version, about = "Bank statement expenditure analyser")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyse a statement PDF and print the expenditure summary as JSON
    Analyse {
        /// Path to the statement PDF
        pdf: PathBuf,

        /// Document password (falls back to KHATA_PDF_PASSWORD)
        #[arg(long)]
        password: Option<String>,

        /// Print the raw transaction list instead of the summary
        #[arg(long)]
        transactions: bool,

        /// Summarize per period instead of over the whole statement
        #[arg(long, value_enum)]
        by: Option<Grouping>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Grouping {
    Year,
    Month,
}

fn main() -> Result<()> {
    logging::setup_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Analyse {
            pdf,
            password,
            transactions,
            by,
        } => analyse(pdf, password, transactions, by),
    }
}

fn analyse(
    pdf: PathBuf,
    password: Option<String>,
    raw_transactions: bool,
    by: Option<Grouping>,
) -> Result<()> {
    if !pdf.is_file() {
        bail!("PDF not found: {} (pass a statement path)", pdf.display());
    }

    let password = password.or_else(|| std::env::var(PASSWORD_ENV).ok());

    let document = PdfText::open(&pdf, password.as_deref())
        .with_context(|| format!("opening {}", pdf.display()))?;
    let txns = extract_transactions(&document)?;
    tracing::debug!(count = txns.len(), "extracted transactions");

    let output = if raw_transactions {
        serde_json::to_string_pretty(&txns)?
    } else {
        match by {
            None => serde_json::to_string_pretty(&summarize_expenditure(&txns)?)?,
            Some(Grouping::Year) => serde_json::to_string_pretty(&summarize_by_year(&txns)?)?,
            Some(Grouping::Month) => serde_json::to_string_pretty(&summarize_by_month(&txns)?)?,
        }
    };

    println!("{output}");
    Ok(())
}
