//! Document model types.
//!
//! This module defines the in-memory structure handed to the renderer:
//! metadata, page geometry, named styles, and the header/body/footer
//! regions of each section.

mod document;
mod page;
mod paragraph;
mod resource;
mod style;

pub use document::{
    Document, Metadata, Region, Section, HEADER_FOOTER_DISTANCE_MM, HORIZONTAL_MARGIN_MM,
    VERTICAL_MARGIN_MM,
};
pub use page::{Orientation, PageSetup, Unit};
pub use paragraph::{Alignment, Paragraph, Run, TextRun, TextStyle};
pub use resource::{ImageData, EMBED_PREFIX};
pub use style::{
    Color, Font, ParagraphFormat, Style, StyleSheet, Underline, BUILTIN_STYLE_NAMES,
};
