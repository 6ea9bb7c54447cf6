//! Locate transaction-table regions within a page's reconstructed lines.

use std::sync::OnceLock;

use regex::Regex;

/// Column-header signature of the supported statement layout.
fn header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"Date\s*Details\s*Ref No\./Cheque\s*Debit\s*Credit\s*Balance")
            .expect("header regex")
    })
}

/// First token of the boilerplate footer line. Only the first token of the
/// region's last line is checked, never the whole line.
const FOOTER_FIRST_TOKEN: &str =
    "** This is computer generated statement and does not require a signature.";

/// Number of trailing lines removed when the footer is present: the footer
/// line itself plus two decorative lines.
const FOOTER_TRAILER_LINES: usize = 3;

/// Extract every table region on a page.
///
/// A region starts two lines below a header match (the header line and the
/// "No"-continuation label line beneath it are skipped) and runs to the end
/// of the page, minus the footer trailer when the page closes with the
/// generated-statement notice. A page without a header match yields no
/// regions; that is the normal case for cover pages.
pub fn locate_table_regions(lines: &[Vec<String>]) -> Vec<Vec<Vec<String>>> {
    let mut regions = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        if !header_regex().is_match(&line.join(" ")) {
            continue;
        }

        let start = (idx + 2).min(lines.len());
        let mut rows = lines[start..].to_vec();

        let ends_with_footer = rows
            .last()
            .and_then(|row| row.first())
            .is_some_and(|token| token == FOOTER_FIRST_TOKEN);
        if ends_with_footer {
            rows.truncate(rows.len().saturating_sub(FOOTER_TRAILER_LINES));
        }

        regions.push(rows);
    }

    regions
}
