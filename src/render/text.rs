//! Plain text preview of an assembled document.

use crate::model::{Document, Region};

/// Render the regions of every section as plain text.
///
/// Images are shown as `[image: <mime>]` placeholders; useful for previews
/// and logs, not as a substitute for the real renderer.
pub fn to_text(doc: &Document) -> String {
    let mut output = String::new();

    for (i, section) in doc.sections.iter().enumerate() {
        if doc.sections.len() > 1 {
            output.push_str(&format!("=== Section {} ===\n", i + 1));
        }
        push_region(&mut output, "header", &section.header);
        push_region(&mut output, "body", &section.body);
        push_region(&mut output, "footer", &section.footer);
    }

    output.trim_end().to_string()
}

fn push_region(output: &mut String, name: &str, region: &Region) {
    output.push_str(&format!("--- {} ---\n", name));
    for paragraph in &region.paragraphs {
        let images: Vec<String> = paragraph
            .images()
            .map(|image| {
                format!(
                    "[image: {}]",
                    image.mime_type.as_deref().unwrap_or("application/octet-stream")
                )
            })
            .collect();
        if !images.is_empty() {
            output.push_str(&images.join(" "));
            output.push('\n');
        }
        output.push_str(paragraph.plain_text().trim_end_matches('\n'));
        output.push('\n');
    }
}
