use serde::{Deserialize, Serialize};

/// One run of text at a page coordinate, as reported by the extractor.
///
/// Coordinates are in page units with the origin at the bottom-left, so a
/// larger `y` is higher on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

impl TextFragment {
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }
}
