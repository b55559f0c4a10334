//! Paragraph and run-level types.

use serde::{Deserialize, Serialize};

use super::ImageData;

/// A paragraph: an optional alignment and the runs in append order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Alignment override (`None` inherits the style default)
    pub alignment: Option<Alignment>,

    /// Runs in the exact order they were appended
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty paragraph with an alignment override.
    pub fn aligned(alignment: Option<Alignment>) -> Self {
        Self {
            alignment,
            runs: Vec::new(),
        }
    }

    /// Add plain text to the paragraph.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.runs.push(Run::Text(TextRun::new(text)));
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.runs.push(Run::Text(run));
    }

    /// Add a forced line break.
    pub fn add_line_break(&mut self) {
        self.runs.push(Run::LineBreak);
    }

    /// Add an image run.
    pub fn add_image(&mut self, image: ImageData) {
        self.runs.push(Run::Image(image));
    }

    /// Number of runs in the paragraph.
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Check if the paragraph has no runs.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Iterate over the image payloads in run order.
    pub fn images(&self) -> impl Iterator<Item = &ImageData> {
        self.runs.iter().filter_map(|run| match run {
            Run::Image(image) => Some(image),
            _ => None,
        })
    }

    /// Number of line-break runs.
    pub fn line_break_count(&self) -> usize {
        self.runs
            .iter()
            .filter(|run| matches!(run, Run::LineBreak))
            .count()
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.runs
            .iter()
            .map(|run| match run {
                Run::Text(text) => text.text.as_str(),
                Run::LineBreak => "\n",
                Run::Image(_) => "",
            })
            .collect()
    }
}

/// An indivisible piece of paragraph content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Run {
    /// A text span with styling
    Text(TextRun),

    /// An embedded image
    Image(ImageData),

    /// A forced line break
    LineBreak,
}

impl Run {
    pub fn is_text(&self) -> bool {
        matches!(self, Run::Text(_))
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Run::Image(_))
    }

    pub fn is_line_break(&self) -> bool {
        matches!(self, Run::LineBreak)
    }

    /// Text content if this is a text run.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Run::Text(run) => Some(&run.text),
            _ => None,
        }
    }
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Text styling
    pub style: TextStyle,
}

impl TextRun {
    /// Create a new text run with default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Create a bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle {
                bold: true,
                ..Default::default()
            },
        }
    }

    /// Create an italic text run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle {
                italic: true,
                ..Default::default()
            },
        }
    }
}

/// Character formatting applied to a single run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub superscript: bool,
    pub subscript: bool,

    /// Font name
    pub font_name: Option<String>,

    /// Font size in points
    pub font_size: Option<f32>,

    /// Text color (hex format, e.g., "#FF0000")
    pub color: Option<String>,
}

impl TextStyle {
    /// Check if any styling is applied.
    pub fn has_styling(&self) -> bool {
        self.bold
            || self.italic
            || self.underline
            || self.strikethrough
            || self.superscript
            || self.subscript
    }
}

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}
