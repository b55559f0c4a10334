//! Region building: turning markup and images into ordered paragraphs.
//!
//! Header, body and footer share one construction routine. What differs is
//! captured by a [`RegionPolicy`]:
//!
//! | Region | Paragraphs, in order |
//! |--------|----------------------|
//! | Header | right-aligned image paragraph (always); one centered paragraph per markup segment |
//! | Body   | spacer of line breaks; one paragraph with every image (only if any); one default-aligned paragraph per segment |
//! | Footer | right-aligned image paragraph (always); one right-aligned paragraph per segment |

use crate::assemble::AssembleOptions;
use crate::error::Result;
use crate::markup::{split_markup, MarkupConverter};
use crate::model::{Alignment, ImageData, Paragraph, Region};

/// The three content regions of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    Header,
    Body,
    Footer,
}

impl RegionKind {
    /// Construction policy for this region.
    pub fn policy(self) -> RegionPolicy {
        match self {
            RegionKind::Header => RegionPolicy {
                leading_spacer: false,
                image_placement: ImagePlacement::Single,
                image_alignment: Some(Alignment::Right),
                markup_alignment: Some(Alignment::Center),
            },
            RegionKind::Body => RegionPolicy {
                leading_spacer: true,
                image_placement: ImagePlacement::Gallery,
                image_alignment: None,
                markup_alignment: None,
            },
            RegionKind::Footer => RegionPolicy {
                leading_spacer: false,
                image_placement: ImagePlacement::Single,
                image_alignment: Some(Alignment::Right),
                markup_alignment: Some(Alignment::Right),
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RegionKind::Header => "header",
            RegionKind::Body => "body",
            RegionKind::Footer => "footer",
        }
    }
}

impl std::fmt::Display for RegionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How a region lays out its images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePlacement {
    /// One paragraph holding at most one image, emitted even without an image.
    Single,
    /// One paragraph holding all images, emitted only when images were given.
    Gallery,
}

/// Paragraph construction recipe for one region kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionPolicy {
    /// Start with a paragraph of line breaks
    pub leading_spacer: bool,
    pub image_placement: ImagePlacement,
    pub image_alignment: Option<Alignment>,
    pub markup_alignment: Option<Alignment>,
}

/// Append an image run followed by `space_after` spaces of padding.
///
/// Absent or empty images append nothing, padding included.
pub fn insert_image(paragraph: &mut Paragraph, image: Option<&ImageData>, space_after: usize) {
    let Some(image) = image.filter(|image| !image.is_empty()) else {
        return;
    };
    paragraph.add_image(image.clone());
    if space_after > 0 {
        paragraph.add_text(" ".repeat(space_after));
    }
}

/// Hand non-empty markup to the converter; empty markup appends nothing.
pub fn insert_markup(
    paragraph: &mut Paragraph,
    markup: Option<&str>,
    converter: &dyn MarkupConverter,
) -> Result<()> {
    match markup.filter(|m| !m.is_empty()) {
        Some(markup) => converter.convert(markup, paragraph),
        None => Ok(()),
    }
}

/// Builds regions with a given converter and options.
pub struct RegionBuilder<'a> {
    converter: &'a dyn MarkupConverter,
    options: &'a AssembleOptions,
}

impl<'a> RegionBuilder<'a> {
    /// Create a builder.
    pub fn new(converter: &'a dyn MarkupConverter, options: &'a AssembleOptions) -> Self {
        Self { converter, options }
    }

    /// Build the paragraphs of one region.
    ///
    /// Header and footer use only the first image; extra images are ignored.
    pub fn build(
        &self,
        kind: RegionKind,
        markup: Option<&str>,
        images: &[ImageData],
    ) -> Result<Region> {
        let policy = kind.policy();
        let mut region = Region::new();

        if policy.leading_spacer {
            let spacer = region.add_paragraph(Paragraph::new());
            for _ in 0..self.options.spacer_line_breaks {
                spacer.add_line_break();
            }
        }

        match policy.image_placement {
            ImagePlacement::Single => {
                if images.len() > 1 {
                    log::warn!(
                        "{} takes a single image, ignoring {} extra",
                        kind,
                        images.len() - 1
                    );
                }
                let paragraph = region.add_paragraph(Paragraph::aligned(policy.image_alignment));
                insert_image(paragraph, images.first(), 0);
            }
            ImagePlacement::Gallery if !images.is_empty() => {
                let paragraph = region.add_paragraph(Paragraph::aligned(policy.image_alignment));
                let last = images.len() - 1;
                for (i, image) in images.iter().enumerate() {
                    let padding = if i == last {
                        0
                    } else {
                        self.options.gallery_spacing
                    };
                    insert_image(paragraph, Some(image), padding);
                }
            }
            ImagePlacement::Gallery => {}
        }

        let segments = split_markup(markup.unwrap_or_default(), &self.options.line_break_delimiter);
        for &segment in &segments {
            let paragraph = region.add_paragraph(Paragraph::aligned(policy.markup_alignment));
            insert_markup(paragraph, Some(segment), self.converter)?;
        }

        log::debug!(
            "Built {} with {} paragraphs ({} segments, {} images)",
            kind,
            region.paragraph_count(),
            segments.len(),
            images.len()
        );
        Ok(region)
    }
}
