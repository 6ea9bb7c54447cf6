//! Rebuild visual lines from positioned text fragments.
//!
//! Extractors emit fragments in content-stream order, which is not reading
//! order. Fragments are clustered into lines by vertical proximity, then
//! each line is read left to right.

use std::cmp::Ordering;

use crate::types::TextFragment;

/// Fragments whose `y` differs by less than this share a line.
const LINE_EPSILON: f64 = 2.0;

/// Group a page's fragments into lines of text tokens, top of page first.
///
/// Clustering is greedy and online: each fragment joins the first existing
/// line (in insertion order) whose representative `y` is within epsilon,
/// otherwise it starts a new line keyed by its own `y`. Lines that were
/// split early are never re-merged. Literal single-space fragments are
/// dropped from the output.
pub fn reconstruct_lines(fragments: Vec<TextFragment>) -> Vec<Vec<String>> {
    let mut clusters: Vec<(f64, Vec<TextFragment>)> = Vec::new();

    for fragment in fragments {
        match clusters
            .iter_mut()
            .find(|(y, _)| (*y - fragment.y).abs() < LINE_EPSILON)
        {
            Some((_, items)) => items.push(fragment),
            None => clusters.push((fragment.y, vec![fragment])),
        }
    }

    // Stable sorts: equal coordinates keep insertion order.
    clusters.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    clusters
        .into_iter()
        .map(|(_, mut items)| {
            items.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));
            items
                .into_iter()
                .map(|f| f.text)
                .filter(|text| text != " ")
                .collect()
        })
        .collect()
}
