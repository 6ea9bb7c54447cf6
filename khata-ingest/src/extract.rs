//! Positioned text extraction from statement PDFs.
//!
//! The pipeline only needs `{text, x, y}` per shown string, so the walker
//! below implements just enough of the PDF text-rendering state machine to
//! track the text matrix: BT/ET, Tm, Td, TD, T*, TL and the four show-text
//! operators. Fonts, spacing and scaling operators are ignored; the emitted
//! position is the text-matrix translation at the time the string is shown.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use lopdf::content::Content;
use lopdf::{Document, Object, ObjectId};
use tracing::debug;

use crate::types::TextFragment;

/// A loaded document that can report positioned text per page.
///
/// The parsing pipeline depends on this trait, not on any PDF library, so
/// tests can feed synthetic fragments straight in.
pub trait DocumentText {
    fn page_count(&self) -> usize;

    /// Positioned fragments for the page at `page_index` (zero-based),
    /// in content-stream order.
    fn page_fragments(&self, page_index: usize) -> Result<Vec<TextFragment>>;
}

/// Statement PDF opened with `lopdf`.
pub struct PdfText {
    document: Document,
    page_ids: Vec<ObjectId>,
}

impl PdfText {
    /// Load a statement PDF from disk, decrypting it when a password is
    /// supplied. Load and decryption failures are fatal for the analysis.
    pub fn open(path: impl AsRef<Path>, password: Option<&str>) -> Result<Self> {
        let path = path.as_ref();
        let document = Document::load(path)
            .with_context(|| format!("loading {}", path.display()))?;
        Self::from_document(document, password)
    }

    /// Load a statement PDF already read into memory.
    pub fn from_bytes(bytes: &[u8], password: Option<&str>) -> Result<Self> {
        let document = Document::load_mem(bytes).context("loading PDF from buffer")?;
        Self::from_document(document, password)
    }

    fn from_document(mut document: Document, password: Option<&str>) -> Result<Self> {
        if document.is_encrypted() {
            let password = password.unwrap_or("");
            document
                .decrypt(password)
                .map_err(|e| anyhow!("decrypting document: {e}"))?;
        }

        // get_pages is keyed by page number, so values come out in page order.
        let page_ids: Vec<ObjectId> = document.get_pages().into_values().collect();
        debug!(pages = page_ids.len(), "loaded statement document");

        Ok(Self { document, page_ids })
    }
}

impl DocumentText for PdfText {
    fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    fn page_fragments(&self, page_index: usize) -> Result<Vec<TextFragment>> {
        let page_id = self
            .page_ids
            .get(page_index)
            .copied()
            .ok_or_else(|| anyhow!("page {page_index} out of range"))?;

        let content_data = self
            .document
            .get_page_content(page_id)
            .with_context(|| format!("reading content of page {page_index}"))?;
        let content = Content::decode(&content_data)
            .with_context(|| format!("decoding content of page {page_index}"))?;

        Ok(walk_text_operations(&content))
    }
}

/// Text matrix elements `[a, b, c, d, tx, ty]`.
type Matrix = [f64; 6];

const IDENTITY: Matrix = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];

struct TextState {
    text_matrix: Matrix,
    line_matrix: Matrix,
    leading: f64,
}

impl TextState {
    fn new() -> Self {
        Self {
            text_matrix: IDENTITY,
            line_matrix: IDENTITY,
            leading: 0.0,
        }
    }

    /// Translate the line matrix by `(tx, ty)` and restart the text matrix
    /// from it (Td / TD / T*).
    fn translate_line(&mut self, tx: f64, ty: f64) {
        let m = self.line_matrix;
        self.line_matrix[4] = m[0] * tx + m[2] * ty + m[4];
        self.line_matrix[5] = m[1] * tx + m[3] * ty + m[5];
        self.text_matrix = self.line_matrix;
    }

    fn next_line(&mut self) {
        self.translate_line(0.0, -self.leading);
    }
}

fn operand_number(operand: &Object) -> Option<f64> {
    match operand {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(f) => Some(f64::from(*f)),
        _ => None,
    }
}

/// Decode a shown string without consulting font encodings: UTF-16BE when
/// byte-order-marked, byte-per-char otherwise. Statement text is plain
/// Latin, where this matches the font's encoding closely enough.
fn decode_text_simple(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }
    bytes.iter().map(|&b| b as char).collect()
}

fn operand_text(operand: &Object) -> Option<String> {
    match operand {
        Object::String(bytes, _) => Some(decode_text_simple(bytes)),
        _ => None,
    }
}

fn emit(text: String, state: &TextState, fragments: &mut Vec<TextFragment>) {
    fragments.push(TextFragment {
        text,
        x: state.text_matrix[4],
        y: state.text_matrix[5],
    });
}

fn walk_text_operations(content: &Content) -> Vec<TextFragment> {
    let mut state = TextState::new();
    let mut fragments = Vec::new();

    for op in &content.operations {
        match op.operator.as_str() {
            "BT" => {
                state.text_matrix = IDENTITY;
                state.line_matrix = IDENTITY;
            }
            "Tm" => {
                if op.operands.len() >= 6 {
                    let mut m = IDENTITY;
                    for (slot, operand) in m.iter_mut().zip(&op.operands) {
                        *slot = operand_number(operand).unwrap_or(0.0);
                    }
                    state.text_matrix = m;
                    state.line_matrix = m;
                }
            }
            "Td" => {
                if let (Some(tx), Some(ty)) = (
                    op.operands.first().and_then(operand_number),
                    op.operands.get(1).and_then(operand_number),
                ) {
                    state.translate_line(tx, ty);
                }
            }
            "TD" => {
                if let (Some(tx), Some(ty)) = (
                    op.operands.first().and_then(operand_number),
                    op.operands.get(1).and_then(operand_number),
                ) {
                    state.leading = -ty;
                    state.translate_line(tx, ty);
                }
            }
            "T*" => state.next_line(),
            "TL" => {
                if let Some(v) = op.operands.first().and_then(operand_number) {
                    state.leading = v;
                }
            }
            "Tj" => {
                if let Some(text) = op.operands.first().and_then(operand_text) {
                    emit(text, &state, &mut fragments);
                }
            }
            "TJ" => {
                // Kerned show: concatenate the string parts into one
                // fragment at the current position.
                if let Some(Object::Array(parts)) = op.operands.first() {
                    let text: String = parts.iter().filter_map(operand_text).collect();
                    if !text.is_empty() {
                        emit(text, &state, &mut fragments);
                    }
                }
            }
            "'" => {
                state.next_line();
                if let Some(text) = op.operands.first().and_then(operand_text) {
                    emit(text, &state, &mut fragments);
                }
            }
            "\"" => {
                // Word/char spacing operands do not affect position tracking.
                state.next_line();
                if let Some(text) = op.operands.get(2).and_then(operand_text) {
                    emit(text, &state, &mut fragments);
                }
            }
            _ => {}
        }
    }

    fragments
}
