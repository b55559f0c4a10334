//! Assembly options and configuration.

use serde::{Deserialize, Serialize};

use crate::markup::LINE_BREAK_DELIMITER;

/// Spaces placed after every body image except the last.
pub const DEFAULT_GALLERY_SPACING: usize = 10;

/// Line breaks in the spacer paragraph opening the body.
pub const DEFAULT_SPACER_LINE_BREAKS: usize = 2;

/// Options for document assembly.
///
/// The defaults reproduce the standard region layout; page geometry is fixed
/// and not part of these options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssembleOptions {
    /// Literal token splitting region markup into paragraphs
    pub line_break_delimiter: String,

    /// Spaces of padding between consecutive body images
    pub gallery_spacing: usize,

    /// Line breaks in the body's leading spacer paragraph
    pub spacer_line_breaks: usize,
}

impl AssembleOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the markup delimiter.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.line_break_delimiter = delimiter.into();
        self
    }

    /// Set the padding between body images.
    pub fn with_gallery_spacing(mut self, spaces: usize) -> Self {
        self.gallery_spacing = spaces;
        self
    }

    /// Set the number of line breaks in the body spacer.
    pub fn with_spacer_line_breaks(mut self, breaks: usize) -> Self {
        self.spacer_line_breaks = breaks;
        self
    }
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            line_break_delimiter: LINE_BREAK_DELIMITER.to_string(),
            gallery_spacing: DEFAULT_GALLERY_SPACING,
            spacer_line_breaks: DEFAULT_SPACER_LINE_BREAKS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = AssembleOptions::default();
        assert_eq!(options.line_break_delimiter, "<br/>");
        assert_eq!(options.gallery_spacing, 10);
        assert_eq!(options.spacer_line_breaks, 2);
    }

    #[test]
    fn test_builder_chain() {
        let options = AssembleOptions::new()
            .with_delimiter("<br>")
            .with_gallery_spacing(4)
            .with_spacer_line_breaks(0);

        assert_eq!(options.line_break_delimiter, "<br>");
        assert_eq!(options.gallery_spacing, 4);
        assert_eq!(options.spacer_line_breaks, 0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options: AssembleOptions = serde_json::from_str(r#"{"gallery_spacing": 2}"#).unwrap();
        assert_eq!(options.gallery_spacing, 2);
        assert_eq!(options.line_break_delimiter, "<br/>");
    }
}
