//! Document-level types.

use super::{PageSetup, Paragraph, StyleSheet, Unit};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Distance from the page edge to the header and to the footer.
pub const HEADER_FOOTER_DISTANCE_MM: f32 = 5.0;
/// Top and bottom page margin.
pub const VERTICAL_MARGIN_MM: f32 = 25.0;
/// Left and right page margin.
pub const HORIZONTAL_MARGIN_MM: f32 = 15.0;

/// A document under assembly, handed to the renderer once complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, author, subject)
    pub metadata: Metadata,

    /// Page geometry cloned into every new section
    pub default_page_setup: PageSetup,

    /// Sections in the document
    pub sections: Vec<Section>,

    /// Named styles
    pub styles: StyleSheet,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            default_page_setup: PageSetup::default(),
            sections: Vec::new(),
            styles: StyleSheet::builtin(),
        }
    }

    /// Create a document with metadata; absent values are stored as empty strings.
    pub fn with_metadata(title: Option<&str>, author: Option<&str>, subject: Option<&str>) -> Self {
        let mut doc = Self::new();
        doc.metadata = Metadata {
            title: title.unwrap_or_default().to_string(),
            author: author.unwrap_or_default().to_string(),
            subject: subject.unwrap_or_default().to_string(),
            created: Some(Utc::now()),
            ..Metadata::default()
        };
        doc
    }

    /// Append a new section and return it for population.
    ///
    /// The section starts from a clone of `default_page_setup` with the fixed
    /// header/footer distances and margins applied on top.
    pub fn add_section(&mut self) -> &mut Section {
        let mut page_setup = self.default_page_setup.clone();
        page_setup.header_distance = Unit::from_mm(HEADER_FOOTER_DISTANCE_MM);
        page_setup.footer_distance = Unit::from_mm(HEADER_FOOTER_DISTANCE_MM);
        page_setup.top_margin = Unit::from_mm(VERTICAL_MARGIN_MM);
        page_setup.bottom_margin = Unit::from_mm(VERTICAL_MARGIN_MM);
        page_setup.left_margin = Unit::from_mm(HORIZONTAL_MARGIN_MM);
        page_setup.right_margin = Unit::from_mm(HORIZONTAL_MARGIN_MM);

        self.sections.push(Section::new(page_setup));
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }

    /// Get the number of sections in the document.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Check if the document has any sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Document metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: String,
    pub author: String,
    pub subject: String,

    /// Producing application
    pub creator: String,

    /// Creation timestamp
    pub created: Option<DateTime<Utc>>,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            subject: String::new(),
            creator: format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            created: None,
        }
    }
}

/// A page-layout section owning its geometry and the three regions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub page_setup: PageSetup,
    pub header: Region,
    pub body: Region,
    pub footer: Region,
}

impl Section {
    /// Create a section with empty regions.
    pub fn new(page_setup: PageSetup) -> Self {
        Self {
            page_setup,
            header: Region::default(),
            body: Region::default(),
            footer: Region::default(),
        }
    }
}

/// An ordered run of paragraphs; order is reading order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub paragraphs: Vec<Paragraph>,
}

impl Region {
    /// Create a new empty region.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a paragraph and return it for population.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Paragraph {
        self.paragraphs.push(paragraph);
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }

    /// Get the number of paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Check if the region has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Get plain text content of the region.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
