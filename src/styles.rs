//! Style directives and their application onto a document's stylesheet.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Color, Document, Style, StyleSheet, Unit};

/// Formatting overrides for one named style.
///
/// Zero numeric values and empty strings mean "leave unchanged"; bold and
/// italic always overwrite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleDirective {
    /// Name of the predefined style to modify
    #[serde(alias = "title")]
    pub name: Option<String>,

    #[serde(alias = "fontIsBold")]
    pub bold: bool,

    #[serde(alias = "fontIsItalic")]
    pub italic: bool,

    pub font_family: Option<String>,

    /// Font size in points
    pub font_size: f32,

    /// Color as `#RRGGBB`, `#AARRGGBB` or a color name
    pub font_color: Option<String>,

    /// Line spacing in points
    #[serde(alias = "paragraphLineSpacing")]
    pub line_spacing: f32,

    /// Space after the paragraph in points
    #[serde(alias = "paragraphSpaceAfter")]
    pub space_after: f32,

    /// Space before the paragraph in points
    #[serde(alias = "paragraphSpaceBefore", alias = "paragraphSpaceBefor")]
    pub space_before: f32,
}

impl StyleDirective {
    /// Create a directive targeting a style.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn with_font_size(mut self, points: f32) -> Self {
        self.font_size = points;
        self
    }

    pub fn with_font_color(mut self, color: impl Into<String>) -> Self {
        self.font_color = Some(color.into());
        self
    }

    pub fn with_line_spacing(mut self, points: f32) -> Self {
        self.line_spacing = points;
        self
    }

    pub fn with_space_after(mut self, points: f32) -> Self {
        self.space_after = points;
        self
    }

    pub fn with_space_before(mut self, points: f32) -> Self {
        self.space_before = points;
        self
    }

    /// Target style name, if set and non-empty.
    pub fn target(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    fn color(&self) -> Result<Option<Color>> {
        match self.font_color.as_deref().filter(|c| !c.is_empty()) {
            Some(value) => value.parse().map(Some),
            None => Ok(None),
        }
    }

    fn apply_to(&self, style: &mut Style, color: Option<Color>) {
        style.font.bold = self.bold;
        style.font.italic = self.italic;

        if let Some(family) = self.font_family.as_deref().filter(|f| !f.is_empty()) {
            style.font.name = Some(family.to_string());
        }
        if let Some(size) = points(self.font_size) {
            style.font.size = Some(size);
        }
        if color.is_some() {
            style.font.color = color;
        }

        let format = &mut style.paragraph_format;
        if let Some(spacing) = points(self.line_spacing) {
            format.line_spacing = Some(spacing);
        }
        if let Some(after) = points(self.space_after) {
            format.space_after = Some(after);
        }
        if let Some(before) = points(self.space_before) {
            format.space_before = Some(before);
        }
    }
}

fn points(value: f32) -> Option<Unit> {
    (value != 0.0).then(|| Unit::from_point(value))
}

/// Apply directives to the document's stylesheet in list order.
///
/// Every name and color is resolved before anything is modified, so an
/// error leaves the stylesheet exactly as it was.
pub fn apply_styles(document: &mut Document, directives: &[StyleDirective]) -> Result<()> {
    apply_to_sheet(&mut document.styles, directives)
}

/// Apply directives to a stylesheet.
pub fn apply_to_sheet(sheet: &mut StyleSheet, directives: &[StyleDirective]) -> Result<()> {
    let mut resolved = Vec::with_capacity(directives.len());
    for directive in directives {
        let Some(name) = directive.target() else {
            log::debug!("Skipping style directive without a name");
            continue;
        };
        if !sheet.contains(name) {
            return Err(Error::UnknownStyle(name.to_string()));
        }
        resolved.push((name, directive, directive.color()?));
    }

    for (name, directive, color) in resolved {
        let style = sheet.get_mut(name)?;
        directive.apply_to(style, color);
        log::debug!("Applied style directive to '{}'", style.name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_only_present_fields() {
        let mut doc = Document::new();
        let directive = StyleDirective::new("Heading1")
            .bold(true)
            .with_font_size(18.0)
            .with_space_after(6.0);

        apply_styles(&mut doc, &[directive]).unwrap();

        let style = doc.styles.get("Heading1").unwrap();
        assert!(style.font.bold);
        assert!(!style.font.italic);
        assert_eq!(style.font.size, Some(Unit::from_point(18.0)));
        assert_eq!(style.paragraph_format.space_after, Some(Unit::from_point(6.0)));
        assert_eq!(style.font.name, None);
        assert_eq!(style.font.color, None);
        assert_eq!(style.paragraph_format.line_spacing, None);
        assert_eq!(style.paragraph_format.space_before, None);
    }

    #[test]
    fn test_zero_and_empty_are_unset() {
        let mut doc = Document::new();
        let directive = StyleDirective::new("Normal")
            .with_font_family("")
            .with_font_color("")
            .with_font_size(0.0);

        apply_styles(&mut doc, &[directive]).unwrap();

        let normal = doc.styles.get("Normal").unwrap();
        assert_eq!(normal.font.name.as_deref(), Some("Arial"));
        assert_eq!(normal.font.size, Some(Unit::from_point(10.0)));
        assert_eq!(normal.font.color, Some(Color::BLACK));
    }

    #[test]
    fn test_zero_spacing_keeps_existing_values() {
        let mut doc = Document::new();
        let spaced = StyleDirective::new("List")
            .with_line_spacing(14.0)
            .with_space_after(3.0)
            .with_space_before(1.5);
        apply_styles(&mut doc, &[spaced]).unwrap();

        let zeros = StyleDirective::new("List")
            .with_line_spacing(0.0)
            .with_space_after(0.0)
            .with_space_before(0.0);
        apply_styles(&mut doc, &[zeros]).unwrap();

        let format = &doc.styles.get("List").unwrap().paragraph_format;
        assert_eq!(format.line_spacing, Some(Unit::from_point(14.0)));
        assert_eq!(format.space_after, Some(Unit::from_point(3.0)));
        assert_eq!(format.space_before, Some(Unit::from_point(1.5)));
    }

    #[test]
    fn test_bold_italic_always_overwrite() {
        let mut doc = Document::new();
        apply_styles(&mut doc, &[StyleDirective::new("Footer").bold(true).italic(true)]).unwrap();
        apply_styles(&mut doc, &[StyleDirective::new("Footer")]).unwrap();

        let footer = doc.styles.get("Footer").unwrap();
        assert!(!footer.font.bold);
        assert!(!footer.font.italic);
    }

    #[test]
    fn test_later_directives_win_field_by_field() {
        let mut doc = Document::new();
        let directives = [
            StyleDirective::new("Header")
                .with_font_family("Georgia")
                .with_font_size(12.0),
            StyleDirective::new("header").with_font_size(14.0),
        ];

        apply_styles(&mut doc, &directives).unwrap();

        let header = doc.styles.get("Header").unwrap();
        assert_eq!(header.font.name.as_deref(), Some("Georgia"));
        assert_eq!(header.font.size, Some(Unit::from_point(14.0)));
    }

    #[test]
    fn test_unnamed_directives_are_skipped() {
        let mut doc = Document::new();
        let before = doc.styles.clone();
        let directives = [
            StyleDirective::default().bold(true),
            StyleDirective::new("").with_font_size(30.0),
        ];

        apply_styles(&mut doc, &directives).unwrap();
        assert_eq!(doc.styles, before);
    }

    #[test]
    fn test_unknown_style_leaves_sheet_untouched() {
        let mut doc = Document::new();
        let before = doc.styles.clone();
        let directives = [
            StyleDirective::new("Normal").with_font_size(20.0),
            StyleDirective::new("Subtitle").bold(true),
        ];

        let err = apply_styles(&mut doc, &directives).unwrap_err();
        assert!(matches!(err, Error::UnknownStyle(ref name) if name == "Subtitle"));
        assert_eq!(doc.styles, before);
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let mut doc = Document::new();
        let err = apply_styles(
            &mut doc,
            &[StyleDirective::new("Normal").with_font_color("#12")],
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidColor(_)));
    }

    #[test]
    fn test_deserialize_request_spelling() {
        let json = r##"{
            "title": "Heading2",
            "fontIsBold": true,
            "fontIsItalic": false,
            "fontFamily": "Verdana",
            "fontSize": 16,
            "fontColor": "#336699",
            "paragraphLineSpacing": 0,
            "paragraphSpaceAfter": 4,
            "paragraphSpaceBefor": 8
        }"##;
        let directive: StyleDirective = serde_json::from_str(json).unwrap();
        assert_eq!(directive.target(), Some("Heading2"));
        assert!(directive.bold);
        assert_eq!(directive.font_size, 16.0);
        assert_eq!(directive.space_before, 8.0);
        assert_eq!(directive.line_spacing, 0.0);
    }
}
