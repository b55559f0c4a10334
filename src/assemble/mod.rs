//! Document assembly: metadata, styles, and the three regions of a section.
//!
//! # Example
//!
//! ```
//! use pdfmaker::assemble::{DocumentAssembler, DocumentRequest};
//! use pdfmaker::StyleDirective;
//!
//! fn main() -> pdfmaker::Result<()> {
//!     let request = DocumentRequest::new()
//!         .with_title("Quarterly report")
//!         .with_style(StyleDirective::new("Normal").with_font_size(11.0))
//!         .with_header(Some("ACME<br/>Finance"), None)
//!         .with_body(Some("Revenue grew."), Vec::new());
//!
//!     let doc = DocumentAssembler::default().assemble(&request)?;
//!     assert_eq!(doc.sections[0].header.paragraph_count(), 3);
//!     Ok(())
//! }
//! ```

mod options;
mod request;

pub use options::{AssembleOptions, DEFAULT_GALLERY_SPACING, DEFAULT_SPACER_LINE_BREAKS};
pub use request::{DocumentRequest, MultiImageRegion, SingleImageRegion};

use crate::error::Result;
use crate::markup::{MarkupConverter, PlainTextConverter};
use crate::model::{Document, ImageData, Section};
use crate::region::{RegionBuilder, RegionKind};
use crate::styles::{self, StyleDirective};
use std::sync::Arc;
use std::time::Instant;

/// Builds documents from requests using a markup converter.
///
/// An assembler holds no per-document state and can serve any number of
/// requests; every call produces a fresh [`Document`].
pub struct DocumentAssembler {
    converter: Arc<dyn MarkupConverter>,
    options: AssembleOptions,
}

impl DocumentAssembler {
    /// Create an assembler around a converter with default options.
    pub fn new(converter: Arc<dyn MarkupConverter>) -> Self {
        Self {
            converter,
            options: AssembleOptions::default(),
        }
    }

    /// Set assembly options.
    pub fn with_options(mut self, options: AssembleOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &AssembleOptions {
        &self.options
    }

    /// Name of the markup converter in use.
    pub fn converter_name(&self) -> &str {
        self.converter.name()
    }

    /// Create an empty document with metadata.
    pub fn create_document(
        &self,
        title: Option<&str>,
        author: Option<&str>,
        subject: Option<&str>,
    ) -> Document {
        create_document(title, author, subject)
    }

    /// Append a section with the fixed page geometry.
    pub fn add_section<'d>(&self, document: &'d mut Document) -> &'d mut Section {
        add_section(document)
    }

    /// Apply style directives to the document.
    pub fn apply_styles(&self, document: &mut Document, directives: &[StyleDirective]) -> Result<()> {
        styles::apply_styles(document, directives)
    }

    /// Append header paragraphs to the section.
    pub fn add_header(
        &self,
        section: &mut Section,
        html: Option<&str>,
        image: Option<&ImageData>,
    ) -> Result<()> {
        let region = self.builder().build(RegionKind::Header, html, single(image))?;
        section.header.paragraphs.extend(region.paragraphs);
        Ok(())
    }

    /// Append body paragraphs to the section.
    pub fn add_body(
        &self,
        section: &mut Section,
        html: Option<&str>,
        images: &[ImageData],
    ) -> Result<()> {
        let region = self.builder().build(RegionKind::Body, html, images)?;
        section.body.paragraphs.extend(region.paragraphs);
        Ok(())
    }

    /// Append footer paragraphs to the section.
    pub fn add_footer(
        &self,
        section: &mut Section,
        html: Option<&str>,
        image: Option<&ImageData>,
    ) -> Result<()> {
        let region = self.builder().build(RegionKind::Footer, html, single(image))?;
        section.footer.paragraphs.extend(region.paragraphs);
        Ok(())
    }

    /// Assemble a complete single-section document.
    ///
    /// Fails with [`crate::Error::UnknownStyle`] before any region is built if
    /// a directive names an unknown style; converter errors abort the
    /// region being built.
    pub fn assemble(&self, request: &DocumentRequest) -> Result<Document> {
        let t0 = Instant::now();

        let mut document = self.create_document(
            request.title.as_deref(),
            request.author.as_deref(),
            request.subject.as_deref(),
        );
        if request.created.is_some() {
            document.metadata.created = request.created;
        }
        self.apply_styles(&mut document, &request.styles)?;
        log::debug!("Applied {} style directives", request.styles.len());

        let section = self.add_section(&mut document);
        self.add_header(
            section,
            request.header.html.as_deref(),
            request.header.image.as_ref(),
        )?;
        self.add_body(section, request.body.html.as_deref(), &request.body.images)?;
        self.add_footer(
            section,
            request.footer.html.as_deref(),
            request.footer.image.as_ref(),
        )?;

        log::info!(
            "Assembled '{}' with {} converter: header={} body={} footer={} paragraphs in {:.1}ms",
            document.metadata.title,
            self.converter.name(),
            document.sections[0].header.paragraph_count(),
            document.sections[0].body.paragraph_count(),
            document.sections[0].footer.paragraph_count(),
            t0.elapsed().as_secs_f64() * 1000.0,
        );

        Ok(document)
    }

    fn builder(&self) -> RegionBuilder<'_> {
        RegionBuilder::new(self.converter.as_ref(), &self.options)
    }
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        Self::new(Arc::new(PlainTextConverter::new()))
    }
}

fn single(image: Option<&ImageData>) -> &[ImageData] {
    image.map(std::slice::from_ref).unwrap_or_default()
}

/// Create an empty document; absent metadata values become empty strings.
pub fn create_document(title: Option<&str>, author: Option<&str>, subject: Option<&str>) -> Document {
    Document::with_metadata(title, author, subject)
}

/// Append a section with the fixed page geometry and return it.
pub fn add_section(document: &mut Document) -> &mut Section {
    document.add_section()
}
