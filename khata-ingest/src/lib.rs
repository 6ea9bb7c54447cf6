//! khata-ingest: statement PDF text extraction and table parsing.
//!
//! Pipeline, per page: positioned text fragments -> visual lines -> table
//! regions -> typed transactions. The analyser drives it across all pages
//! and hands the concatenated transactions to `khata-core` for aggregation.

pub mod analyser;
pub mod extract;
pub mod layout;
pub mod parser;
pub mod table;
pub mod types;

pub use analyser::{AnalyseOptions, analyse_bytes, analyse_file, extract_transactions};
pub use extract::{DocumentText, PdfText};
pub use types::TextFragment;
