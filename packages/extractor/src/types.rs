//! Core data types for doc-number extraction.

use std::fmt;

use crate::config::{EPO_FORMAT, PATENT_OFFICE_SOURCE};

/// Priority tier of a `document-id`, ordered from highest to lowest.
///
/// The derived `Ord` follows declaration order, so sorting by `Priority`
/// puts [`Priority::EpoPatentOffice`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    /// `format="epo"` and `load-source="patent-office"`.
    EpoPatentOffice,

    /// `format="epo"` only.
    Epo,

    /// `load-source="patent-office"` only.
    PatentOffice,

    /// Neither attribute matches.
    Other,
}

impl Priority {
    /// Classify from the two attribute predicates.
    ///
    /// # Examples
    /// ```
    /// use docnum_extractor::Priority;
    ///
    /// assert_eq!(Priority::classify(true, true), Priority::EpoPatentOffice);
    /// assert_eq!(Priority::classify(false, false), Priority::Other);
    /// ```
    #[must_use]
    pub fn classify(is_epo: bool, is_patent_office: bool) -> Self {
        match (is_epo, is_patent_office) {
            (true, true) => Self::EpoPatentOffice,
            (true, false) => Self::Epo,
            (false, true) => Self::PatentOffice,
            (false, false) => Self::Other,
        }
    }

    /// Classify from raw `format` and `load-source` attribute values.
    ///
    /// Comparison is case-insensitive; a missing attribute never matches.
    ///
    /// # Examples
    /// ```
    /// use docnum_extractor::Priority;
    ///
    /// assert_eq!(Priority::from_attributes(Some("EPO"), None), Priority::Epo);
    /// assert_eq!(
    ///     Priority::from_attributes(None, Some("Patent-Office")),
    ///     Priority::PatentOffice
    /// );
    /// ```
    #[must_use]
    pub fn from_attributes(format: Option<&str>, load_source: Option<&str>) -> Self {
        let format = format.unwrap_or_default().to_lowercase();
        let load_source = load_source.unwrap_or_default().to_lowercase();
        Self::classify(format == EPO_FORMAT, load_source == PATENT_OFFICE_SOURCE)
    }

    /// Numeric tier, 1 (highest) to 4 (lowest).
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::EpoPatentOffice => 1,
            Self::Epo => 2,
            Self::PatentOffice => 3,
            Self::Other => 4,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank())
    }
}

/// A doc-number found in a document, together with its priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocNumber {
    /// Priority of the enclosing `document-id`.
    pub priority: Priority,

    /// Trimmed, non-empty `doc-number` text.
    pub value: String,
}

impl DocNumber {
    /// Create a new record.
    #[must_use]
    pub fn new(priority: Priority, value: impl Into<String>) -> Self {
        Self {
            priority,
            value: value.into(),
        }
    }
}
