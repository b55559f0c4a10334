//! Error types for pdfmaker.

use std::io;
use thiserror::Error;

/// Result type alias for pdfmaker operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while assembling a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading image files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A style directive names a style outside the predefined set.
    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    /// A color override could not be parsed.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// The markup converter failed on a segment.
    #[error("Markup conversion error: {0}")]
    MarkupConversion(String),

    /// Error while serializing the document model.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownStyle("Heading10".to_string());
        assert_eq!(err.to_string(), "Unknown style: Heading10");

        let err = Error::InvalidColor("#GG0000".to_string());
        assert_eq!(err.to_string(), "Invalid color: #GG0000");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
