//! khata-core: transaction types, date heuristics, and expenditure aggregation

pub mod dates;
pub mod summary;
pub mod transaction;

pub use dates::{is_date_string, parse_loose_date};
pub use summary::{
    ExpenditureSummary, summarize_by_month, summarize_by_year, summarize_expenditure,
};
pub use transaction::Transaction;
