//! Input resolution: decide whether a value is XML content or a file path.

use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{ExtractError, FileReadReason, Result};

/// Where the XML for an extraction comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source<'a> {
    /// Literal XML content.
    Inline(&'a str),

    /// Path to a UTF-8 encoded XML file.
    File(&'a Path),
}

impl<'a> Source<'a> {
    /// Classify a raw value as XML content or a file path.
    ///
    /// The content check wins: anything starting with `<` after trimming is
    /// XML, even if a file with that name exists. Values that cannot name a
    /// file (blank, or containing a line break or NUL) are rejected.
    ///
    /// # Examples
    /// ```
    /// use docnum_extractor::Source;
    ///
    /// assert!(matches!(Source::detect("  <root/>"), Ok(Source::Inline(_))));
    /// assert!(matches!(Source::detect("patent.xml"), Ok(Source::File(_))));
    /// assert!(Source::detect("   ").is_err());
    /// ```
    ///
    /// # Errors
    /// Returns [`ExtractError::InvalidInput`] for values that are neither.
    pub fn detect(value: &'a str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.starts_with('<') {
            return Ok(Self::Inline(value));
        }
        if trimmed.is_empty() || value.contains(['\n', '\r', '\0']) {
            return Err(ExtractError::InvalidInput(value.to_string()));
        }
        Ok(Self::File(Path::new(value)))
    }

    /// Produce the XML text, reading the file if needed.
    ///
    /// # Errors
    /// Returns [`ExtractError::FileRead`] if a file source cannot be read.
    pub fn read(self) -> Result<Cow<'a, str>> {
        match self {
            Self::Inline(xml) => Ok(Cow::Borrowed(xml)),
            Self::File(path) => read_xml_file(path).map(Cow::Owned),
        }
    }
}

/// Read a whole XML file as UTF-8 text.
///
/// A leading byte-order mark is dropped.
///
/// # Errors
/// Returns [`ExtractError::FileRead`] when the path does not exist, is not a
/// regular file, cannot be read, or is not valid UTF-8.
pub fn read_xml_file(path: &Path) -> Result<String> {
    let metadata = fs::metadata(path).map_err(|e| {
        let reason = if e.kind() == ErrorKind::NotFound {
            FileReadReason::NotFound
        } else {
            FileReadReason::Io(e)
        };
        ExtractError::file_read(path, reason)
    })?;

    if !metadata.is_file() {
        return Err(ExtractError::file_read(path, FileReadReason::NotAFile));
    }

    let bytes = fs::read(path).map_err(|e| ExtractError::file_read(path, e.into()))?;
    let mut xml = String::from_utf8(bytes).map_err(|e| ExtractError::file_read(path, e.into()))?;

    if xml.starts_with('\u{feff}') {
        xml.remove(0);
    }

    tracing::info!(path = %path.display(), bytes = xml.len(), "Read XML file");
    Ok(xml)
}
