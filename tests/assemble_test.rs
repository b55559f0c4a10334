//! Integration tests for region building and document assembly.

use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};

use pdfmaker::assemble::{AssembleOptions, DocumentAssembler, DocumentRequest};
use pdfmaker::error::Result;
use pdfmaker::markup::MarkupConverter;
use pdfmaker::model::{Alignment, ImageData, Paragraph, Run, TextRun};
use pdfmaker::region::{insert_image, RegionBuilder, RegionKind};
use pdfmaker::{Error, StyleDirective};

/// Mock converter that wraps each segment in a bold run and records calls.
struct MockConverter {
    calls: Mutex<Vec<String>>,
}

impl MockConverter {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl MarkupConverter for MockConverter {
    fn name(&self) -> &str {
        "mock"
    }

    fn convert(&self, markup: &str, paragraph: &mut Paragraph) -> Result<()> {
        self.calls.lock().unwrap().push(markup.to_string());
        paragraph.add_run(TextRun::bold(format!("converted:{}", markup)));
        Ok(())
    }
}

/// Converter that fails on segments containing `<table>`.
struct PickyConverter;

impl MarkupConverter for PickyConverter {
    fn name(&self) -> &str {
        "picky"
    }

    fn convert(&self, markup: &str, paragraph: &mut Paragraph) -> Result<()> {
        if markup.contains("<table>") {
            return Err(Error::MarkupConversion("tables are not supported".into()));
        }
        paragraph.add_text(markup);
        Ok(())
    }
}

fn image(tag: u8) -> ImageData {
    ImageData::new(vec![0xFF, 0xD8, 0xFF, tag])
}

fn text_of(run: &Run) -> Option<&str> {
    run.as_text()
}

#[test]
fn test_header_with_markup_and_no_image() {
    let converter = MockConverter::new();
    let options = AssembleOptions::default();
    let builder = RegionBuilder::new(&converter, &options);

    let region = builder
        .build(RegionKind::Header, Some("Hello<br/>World"), &[])
        .unwrap();

    let image_paragraph = &region.paragraphs[0];
    assert_eq!(image_paragraph.alignment, Some(Alignment::Right));
    assert!(image_paragraph.is_empty());

    let centered: Vec<&Paragraph> = region
        .paragraphs
        .iter()
        .filter(|p| p.alignment == Some(Alignment::Center))
        .collect();
    assert_eq!(centered.len(), 2);
    assert_eq!(text_of(&centered[0].runs[0]), Some("converted:Hello"));
    assert_eq!(text_of(&centered[1].runs[0]), Some("converted:World"));
    assert_eq!(converter.calls(), vec!["Hello", "World"]);
}

#[test]
fn test_header_image_paragraph_holds_single_image() {
    let converter = MockConverter::new();
    let options = AssembleOptions::default();
    let builder = RegionBuilder::new(&converter, &options);

    let region = builder
        .build(RegionKind::Header, None, &[image(1)])
        .unwrap();

    assert_eq!(region.paragraph_count(), 2);
    assert_eq!(region.paragraphs[0].runs, vec![Run::Image(image(1))]);
    // The single empty segment yields an empty centered paragraph.
    assert_eq!(region.paragraphs[1].alignment, Some(Alignment::Center));
    assert!(region.paragraphs[1].is_empty());
    assert!(converter.calls().is_empty());
}

#[test]
fn test_body_with_three_images_and_no_markup() {
    let converter = MockConverter::new();
    let options = AssembleOptions::default();
    let builder = RegionBuilder::new(&converter, &options);

    let region = builder
        .build(RegionKind::Body, None, &[image(1), image(2), image(3)])
        .unwrap();

    assert_eq!(region.paragraph_count(), 3);

    let spacer = &region.paragraphs[0];
    assert_eq!(spacer.runs, vec![Run::LineBreak, Run::LineBreak]);
    assert_eq!(spacer.alignment, None);

    let gallery = &region.paragraphs[1];
    let padding = " ".repeat(10);
    assert_eq!(gallery.images().count(), 3);
    assert_eq!(gallery.run_count(), 5);
    assert_eq!(gallery.runs[0], Run::Image(image(1)));
    assert_eq!(text_of(&gallery.runs[1]), Some(padding.as_str()));
    assert_eq!(gallery.runs[2], Run::Image(image(2)));
    assert_eq!(text_of(&gallery.runs[3]), Some(padding.as_str()));
    assert_eq!(gallery.runs[4], Run::Image(image(3)));

    let markup = &region.paragraphs[2];
    assert!(markup.is_empty());
    assert_eq!(markup.alignment, None);
}

#[test]
fn test_body_without_images_has_no_gallery() {
    let converter = MockConverter::new();
    let options = AssembleOptions::default();
    let builder = RegionBuilder::new(&converter, &options);

    let region = builder
        .build(RegionKind::Body, Some("one<br/>two"), &[])
        .unwrap();

    assert_eq!(region.paragraph_count(), 3);
    assert_eq!(region.paragraphs[0].line_break_count(), 2);
    assert_eq!(region.paragraphs[1].plain_text(), "converted:one");
    assert_eq!(region.paragraphs[2].plain_text(), "converted:two");
}

#[test]
fn test_body_gallery_skips_empty_payloads() {
    let converter = MockConverter::new();
    let options = AssembleOptions::default();
    let builder = RegionBuilder::new(&converter, &options);

    let region = builder
        .build(RegionKind::Body, None, &[image(1), ImageData::new(Vec::new())])
        .unwrap();

    let gallery = &region.paragraphs[1];
    assert_eq!(gallery.images().count(), 1);
    // The first image is not last, so it keeps its padding.
    assert_eq!(gallery.run_count(), 2);
}

#[test]
fn test_footer_is_right_aligned() {
    let converter = MockConverter::new();
    let options = AssembleOptions::default();
    let builder = RegionBuilder::new(&converter, &options);

    let region = builder
        .build(RegionKind::Footer, Some("a<br/>b<br/>c"), &[image(9)])
        .unwrap();

    assert_eq!(region.paragraph_count(), 4);
    assert!(region
        .paragraphs
        .iter()
        .all(|p| p.alignment == Some(Alignment::Right)));
    assert_eq!(region.paragraphs[0].images().count(), 1);
}

#[test]
fn test_insert_image_zero_length_is_noop() {
    let mut paragraph = Paragraph::new();
    paragraph.add_text("before");
    let before = paragraph.run_count();

    insert_image(&mut paragraph, Some(&ImageData::new(Vec::new())), 10);

    assert_eq!(paragraph.run_count(), before);
}

#[test]
fn test_region_counts_independent_of_directives() {
    let header = "h1<br/>h2<br/>h3";
    let footer = "f1<br/>f2";

    for directive_count in [0usize, 1, 5] {
        let mut request = DocumentRequest::new()
            .with_header(Some(header), Some(image(1)))
            .with_footer(Some(footer), None);
        for i in 0..directive_count {
            request = request.with_style(
                StyleDirective::new(format!("Heading{}", i + 1)).with_font_size(12.0 + i as f32),
            );
        }

        let doc = DocumentAssembler::new(Arc::new(MockConverter::new()))
            .assemble(&request)
            .unwrap();

        let section = &doc.sections[0];
        assert_eq!(section.header.paragraph_count(), 3 + 1);
        assert_eq!(section.footer.paragraph_count(), 2 + 1);
    }
}

#[test]
fn test_assemble_applies_styles_and_metadata() {
    let request = DocumentRequest::new()
        .with_title("Statement")
        .with_subject("March")
        .with_style(StyleDirective::new("Normal").with_font_color("#336699"))
        .with_body(Some("Balance"), vec![image(1), image(2)]);

    let doc = DocumentAssembler::new(Arc::new(MockConverter::new()))
        .assemble(&request)
        .unwrap();

    assert_eq!(doc.metadata.title, "Statement");
    assert_eq!(doc.metadata.author, "");
    assert_eq!(doc.metadata.subject, "March");
    assert_eq!(
        doc.styles.get("Normal").unwrap().font.color.map(|c| c.to_hex()),
        Some("#336699".to_string())
    );

    let body = &doc.sections[0].body;
    assert_eq!(body.paragraph_count(), 3);
    assert_eq!(body.paragraphs[1].images().count(), 2);
}

#[test]
fn test_assemble_propagates_converter_error() {
    let request = DocumentRequest::new().with_body(Some("ok<br/><table>x</table>"), Vec::new());

    let err = DocumentAssembler::new(Arc::new(PickyConverter))
        .assemble(&request)
        .unwrap_err();

    assert!(matches!(err, Error::MarkupConversion(ref m) if m == "tables are not supported"));
}

#[test]
fn test_assemble_unknown_style_stops_before_regions() {
    let converter = Arc::new(MockConverter::new());
    let request = DocumentRequest::new()
        .with_style(StyleDirective::new("Heading12").bold(true))
        .with_header(Some("never converted"), None);

    let err = DocumentAssembler::new(converter.clone())
        .assemble(&request)
        .unwrap_err();

    assert!(matches!(err, Error::UnknownStyle(ref name) if name == "Heading12"));
    assert!(converter.calls().is_empty());
}

#[test]
fn test_documents_are_independent() {
    let assembler = DocumentAssembler::default();
    let styled = DocumentRequest::new().with_style(StyleDirective::new("Normal").bold(true));

    let first = assembler.assemble(&styled).unwrap();
    let second = assembler.assemble(&DocumentRequest::new()).unwrap();

    assert!(first.styles.get("Normal").unwrap().font.bold);
    assert!(!second.styles.get("Normal").unwrap().font.bold);
}

#[test]
fn test_assemble_json_request() {
    let json = r#"{
        "title": "From JSON",
        "styles": [{"title": "Footer", "fontIsItalic": true, "fontSize": 8}],
        "header": {"html": "Top", "image": "base64:/9j/4A=="},
        "body": {"html": "Body", "images": []},
        "footer": {"html": "Bottom"}
    }"#;

    let doc = pdfmaker::assemble_json(json).unwrap();
    let section = &doc.sections[0];

    assert_eq!(section.header.paragraphs[0].images().count(), 1);
    assert_eq!(
        section.header.paragraphs[0]
            .images()
            .next()
            .and_then(|i| i.mime_type.as_deref()),
        Some("image/jpeg")
    );
    // An explicitly empty image list emits no gallery paragraph.
    assert_eq!(section.body.paragraph_count(), 2);
    assert!(doc.styles.get("Footer").unwrap().font.italic);
}

#[test]
fn test_pinned_timestamp_makes_assembly_reproducible() {
    let created = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
    let request = DocumentRequest::new()
        .with_title("Receipt")
        .with_created(created)
        .with_header(Some("Shop"), Some(image(1)))
        .with_body(Some("Coffee<br/>Cake"), vec![image(2)]);

    let first = pdfmaker::assemble(&request).unwrap();
    let second = pdfmaker::assemble(&request).unwrap();

    assert_eq!(first.metadata.created, Some(created));
    assert_eq!(first, second);
    assert_eq!(
        pdfmaker::render::to_json(&first, pdfmaker::JsonFormat::Compact).unwrap(),
        pdfmaker::render::to_json(&second, pdfmaker::JsonFormat::Compact).unwrap()
    );

    let unpinned = pdfmaker::assemble(&DocumentRequest::new()).unwrap();
    assert!(unpinned.metadata.created.is_some());
}

#[test]
fn test_created_from_json_request() {
    let doc = pdfmaker::assemble_json(r#"{"created": "2024-03-01T09:30:00Z"}"#).unwrap();
    assert_eq!(
        doc.metadata.created,
        Some(Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap())
    );
}
