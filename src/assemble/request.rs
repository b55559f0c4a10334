//! Assembly requests as received from a host.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ImageData;
use crate::styles::StyleDirective;

/// Everything needed to assemble one document.
///
/// Images deserialize from base64 strings (optionally `base64:`-prefixed).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,

    /// Creation timestamp; the assembly time when absent
    pub created: Option<DateTime<Utc>>,

    /// Style overrides, applied in order
    #[serde(alias = "htmlStyles")]
    pub styles: Vec<StyleDirective>,

    pub header: SingleImageRegion,
    pub body: MultiImageRegion,
    pub footer: SingleImageRegion,
}

/// Header or footer content: markup and at most one image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleImageRegion {
    pub html: Option<String>,
    pub image: Option<ImageData>,
}

/// Body content: markup and any number of images.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiImageRegion {
    pub html: Option<String>,
    pub images: Vec<ImageData>,
}

impl DocumentRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Pin the creation timestamp, making repeated assembly reproducible.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Add a style directive.
    pub fn with_style(mut self, directive: StyleDirective) -> Self {
        self.styles.push(directive);
        self
    }

    /// Set header markup and image.
    pub fn with_header(mut self, html: Option<&str>, image: Option<ImageData>) -> Self {
        self.header = SingleImageRegion {
            html: html.map(str::to_string),
            image,
        };
        self
    }

    /// Set body markup and images.
    pub fn with_body(mut self, html: Option<&str>, images: Vec<ImageData>) -> Self {
        self.body = MultiImageRegion {
            html: html.map(str::to_string),
            images,
        };
        self
    }

    /// Set footer markup and image.
    pub fn with_footer(mut self, html: Option<&str>, image: Option<ImageData>) -> Self {
        self.footer = SingleImageRegion {
            html: html.map(str::to_string),
            image,
        };
        self
    }
}
