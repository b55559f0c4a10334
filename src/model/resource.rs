//! Image payloads embedded in paragraphs.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Prefix marking an inline base64 image reference.
pub const EMBED_PREFIX: &str = "base64:";

/// An opaque image payload, read fully into memory.
///
/// The bytes are never decoded; the renderer decides how to embed them.
/// An empty payload counts as "no image".
///
/// Deserializes from a bare base64 string or from the full object form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ImageRepr")]
pub struct ImageData {
    /// Raw binary data (base64 in serialized form)
    #[serde(serialize_with = "base64_bytes::serialize")]
    pub data: Vec<u8>,

    /// MIME type sniffed from the payload, if recognized
    pub mime_type: Option<String>,

    /// Original filename if known
    pub filename: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ImageRepr {
    Encoded(String),
    Full {
        #[serde(deserialize_with = "base64_bytes::deserialize")]
        data: Vec<u8>,
        #[serde(default)]
        mime_type: Option<String>,
        #[serde(default)]
        filename: Option<String>,
    },
}

impl TryFrom<ImageRepr> for ImageData {
    type Error = Error;

    fn try_from(repr: ImageRepr) -> Result<Self> {
        match repr {
            ImageRepr::Encoded(encoded) => Self::from_base64(&encoded),
            ImageRepr::Full {
                data,
                mime_type,
                filename,
            } => {
                let mut image = Self::new(data);
                if mime_type.is_some() {
                    image.mime_type = mime_type;
                }
                image.filename = filename;
                Ok(image)
            }
        }
    }
}

impl ImageData {
    /// Wrap raw bytes, sniffing the MIME type.
    pub fn new(data: Vec<u8>) -> Self {
        let mime_type = Self::detect_mime_type(&data).map(str::to_string);
        Self {
            data,
            mime_type,
            filename: None,
        }
    }

    /// Read an image file into memory.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let mut image = Self::new(data);
        image.filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        Ok(image)
    }

    /// Decode an image from a base64 string, with or without the `base64:` prefix.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let encoded = encoded.strip_prefix(EMBED_PREFIX).unwrap_or(encoded);
        let data = STANDARD
            .decode(encoded.trim())
            .map_err(|e| Error::Other(format!("Invalid base64 image: {}", e)))?;
        Ok(Self::new(data))
    }

    /// Set filename.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Size of the payload in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Inline reference in the `base64:<data>` form understood by the renderer.
    pub fn embed_reference(&self) -> String {
        format!("{}{}", EMBED_PREFIX, STANDARD.encode(&self.data))
    }

    /// Detect MIME type from data magic bytes.
    pub fn detect_mime_type(data: &[u8]) -> Option<&'static str> {
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some("image/jpeg");
        }

        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Some("image/png");
        }

        if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            return Some("image/gif");
        }

        if data.starts_with(b"BM") {
            return Some("image/bmp");
        }

        if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
            return Some("image/webp");
        }

        None
    }
}

mod base64_bytes {
    use super::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(data))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        let encoded = encoded.strip_prefix(super::EMBED_PREFIX).unwrap_or(&encoded);
        STANDARD
            .decode(encoded.trim())
            .map_err(serde::de::Error::custom)
    }
}
