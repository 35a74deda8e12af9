//! Error types for doc-number extraction.
//!
//! Every failure falls into one of three kinds: the file could not be read,
//! the XML is not well-formed, or the input is neither XML nor a usable path.
//! Callers branch on the variant, never on the message.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the extractor library.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A source path could not be read as UTF-8 text.
    #[error("Failed to read {}: {reason}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        reason: FileReadReason,
    },

    /// XML content is not well-formed.
    #[error("Invalid XML: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Input is neither XML content nor something that can name a file.
    #[error("Invalid input {0:?}: expected the path to an existing file or an XML string starting with '<'")]
    InvalidInput(String),
}

impl ExtractError {
    /// Build a [`ExtractError::FileRead`] for `path`.
    pub(crate) fn file_read(path: impl Into<PathBuf>, reason: FileReadReason) -> Self {
        Self::FileRead {
            path: path.into(),
            reason,
        }
    }
}

/// Why a source file could not be read.
#[derive(Debug, Error)]
pub enum FileReadReason {
    /// Nothing exists at the path.
    #[error("file not found")]
    NotFound,

    /// The path exists but is a directory or other non-regular file.
    #[error("not a regular file")]
    NotAFile,

    /// The file is not valid UTF-8.
    #[error("not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// The file could not be opened or read.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
