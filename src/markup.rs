//! Markup handling: segment splitting and the converter seam.
//!
//! Region text arrives as a restricted HTML dialect. The only token this
//! crate understands is the paragraph delimiter; everything between
//! delimiters is handed verbatim to a [`MarkupConverter`], which turns it
//! into runs on the target paragraph.
//!
//! # Example
//!
//! ```
//! use pdfmaker::markup::{split_markup, LINE_BREAK_DELIMITER};
//!
//! let segments = split_markup("A<br/>B<br/>C", LINE_BREAK_DELIMITER);
//! assert_eq!(segments, vec!["A", "B", "C"]);
//! ```

use crate::error::Result;
use crate::model::Paragraph;

/// Literal token separating paragraphs in region markup.
pub const LINE_BREAK_DELIMITER: &str = "<br/>";

/// Split markup on a literal delimiter.
///
/// An empty input yields a single empty segment.
pub fn split_markup<'a>(markup: &'a str, delimiter: &str) -> Vec<&'a str> {
    if delimiter.is_empty() {
        return vec![markup];
    }
    markup.split(delimiter).collect()
}

/// Converts one markup segment into runs appended to a paragraph.
///
/// Implement this trait to plug in an HTML-to-runs converter. Errors are
/// propagated unchanged to the caller of the assembly step.
pub trait MarkupConverter: Send + Sync {
    /// Get the name of this converter.
    fn name(&self) -> &str;

    /// Append the runs for `markup` to `paragraph`.
    fn convert(&self, markup: &str, paragraph: &mut Paragraph) -> Result<()>;
}

/// Converter that appends the markup verbatim as a single unstyled text run.
#[derive(Debug, Clone, Default)]
pub struct PlainTextConverter {
    _private: (),
}

impl PlainTextConverter {
    /// Create a new plain-text converter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl MarkupConverter for PlainTextConverter {
    fn name(&self) -> &str {
        "plain-text"
    }

    fn convert(&self, markup: &str, paragraph: &mut Paragraph) -> Result<()> {
        paragraph.add_text(markup);
        Ok(())
    }
}
