//! # pdfmaker
//!
//! Document assembly engine for paginated output.
//!
//! This library takes style overrides, a restricted HTML-like markup and
//! optional images, and builds an in-memory document: metadata, page
//! geometry, named styles, and a section with header, body and footer
//! regions. Rendering the model to PDF bytes is left to an external
//! renderer, which receives the [`Document`] directly or as JSON.
//!
//! ## Quick Start
//!
//! ```
//! use pdfmaker::{assemble, DocumentRequest, StyleDirective};
//!
//! fn main() -> pdfmaker::Result<()> {
//!     let request = DocumentRequest::new()
//!         .with_title("Invoice #42")
//!         .with_style(StyleDirective::new("Normal").with_font_family("Helvetica"))
//!         .with_body(Some("Thank you<br/>for your order"), Vec::new());
//!
//!     let doc = assemble(&request)?;
//!     let json = pdfmaker::render::to_json(&doc, pdfmaker::JsonFormat::Compact)?;
//!     assert!(json.contains("Invoice #42"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Fixed stylesheet**: built-in named styles, modified but never created
//! - **Region recipes**: header, body and footer laid out from one policy table
//! - **Pluggable markup**: bring your own [`MarkupConverter`]
//! - **Opaque images**: payloads embedded as-is, serialized as base64

pub mod assemble;
pub mod error;
pub mod markup;
pub mod model;
pub mod region;
pub mod render;
pub mod styles;

// Re-export commonly used types
pub use assemble::{
    add_section, create_document, AssembleOptions, DocumentAssembler, DocumentRequest,
};
pub use error::{Error, Result};
pub use markup::{split_markup, MarkupConverter, PlainTextConverter, LINE_BREAK_DELIMITER};
pub use model::{
    Alignment, Color, Document, ImageData, Metadata, PageSetup, Paragraph, Region, Run, Section,
    Style, StyleSheet, TextRun, TextStyle, Unit,
};
pub use region::{insert_image, insert_markup, RegionBuilder, RegionKind};
pub use render::JsonFormat;
pub use styles::{apply_styles, StyleDirective};

use std::path::Path;
use std::sync::Arc;

/// Assemble a document, treating markup as plain text.
///
/// # Example
///
/// ```
/// use pdfmaker::{assemble, DocumentRequest};
///
/// let doc = assemble(&DocumentRequest::new().with_title("Memo")).unwrap();
/// assert_eq!(doc.metadata.title, "Memo");
/// assert_eq!(doc.section_count(), 1);
/// ```
pub fn assemble(request: &DocumentRequest) -> Result<Document> {
    DocumentAssembler::default().assemble(request)
}

/// Assemble a document with a custom markup converter.
pub fn assemble_with(
    request: &DocumentRequest,
    converter: Arc<dyn MarkupConverter>,
) -> Result<Document> {
    DocumentAssembler::new(converter).assemble(request)
}

/// Parse a JSON request and assemble it.
///
/// # Example
///
/// ```
/// let doc = pdfmaker::assemble_json(r#"{"title": "Hi", "footer": {"html": "1<br/>2"}}"#)?;
/// assert_eq!(doc.sections[0].footer.paragraph_count(), 3);
/// # Ok::<(), pdfmaker::Error>(())
/// ```
pub fn assemble_json(json: &str) -> Result<Document> {
    let request: DocumentRequest = serde_json::from_str(json)
        .map_err(|e| Error::Other(format!("Invalid request: {}", e)))?;
    assemble(&request)
}

/// Read a JSON request file and assemble it.
pub fn assemble_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let json = std::fs::read_to_string(path)?;
    assemble_json(&json)
}

/// Builder for assembling documents and producing output.
///
/// # Example
///
/// ```
/// use pdfmaker::{DocumentRequest, PdfMaker};
///
/// let json = PdfMaker::new()
///     .with_delimiter("<br>")
///     .with_gallery_spacing(4)
///     .assemble(&DocumentRequest::new().with_body(Some("a<br>b"), Vec::new()))?
///     .to_json(pdfmaker::JsonFormat::Pretty)?;
/// assert!(json.contains("\"body\""));
/// # Ok::<(), pdfmaker::Error>(())
/// ```
pub struct PdfMaker {
    converter: Arc<dyn MarkupConverter>,
    options: AssembleOptions,
}

impl PdfMaker {
    /// Create a new builder with the plain-text converter.
    pub fn new() -> Self {
        Self {
            converter: Arc::new(PlainTextConverter::new()),
            options: AssembleOptions::default(),
        }
    }

    /// Use a custom markup converter.
    pub fn with_converter(mut self, converter: Arc<dyn MarkupConverter>) -> Self {
        self.converter = converter;
        self
    }

    /// Set the markup paragraph delimiter.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.options = self.options.with_delimiter(delimiter);
        self
    }

    /// Set the padding between body images.
    pub fn with_gallery_spacing(mut self, spaces: usize) -> Self {
        self.options = self.options.with_gallery_spacing(spaces);
        self
    }

    /// Set all assembly options at once.
    pub fn with_options(mut self, options: AssembleOptions) -> Self {
        self.options = options;
        self
    }

    /// Assemble a request into a result wrapper.
    pub fn assemble(self, request: &DocumentRequest) -> Result<PdfMakerResult> {
        let document = DocumentAssembler::new(self.converter)
            .with_options(self.options)
            .assemble(request)?;
        Ok(PdfMakerResult { document })
    }
}

impl Default for PdfMaker {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of assembling a document.
pub struct PdfMakerResult {
    /// The assembled document
    pub document: Document,
}

impl PdfMakerResult {
    /// Convert to JSON for the renderer.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Plain text preview of the regions.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Take ownership of the document.
    pub fn into_document(self) -> Document {
        self.document
    }
}
