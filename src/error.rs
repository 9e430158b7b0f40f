//! Error types for playlist parsing

use crate::model::PlaylistFormat;

/// Errors raised while turning playlist text into structured data
#[derive(Debug, thiserror::Error)]
pub enum PlaylistError {
    /// The text does not carry the header of the format that was asked for
    #[error("input is not a valid {expected} playlist")]
    FormatMismatch { expected: PlaylistFormat },

    #[error("unrecognized playlist format")]
    UnrecognizedFormat,

    /// PLS `Version=` directive other than 2
    #[error("unsupported PLS version: {found:?}")]
    InvalidVersion { found: String },

    #[error("PLS declares {titles} title(s) but {files} file(s)")]
    FieldCountMismatch { titles: usize, files: usize },

    #[error("malformed XML: {0}")]
    MalformedXml(String),

    #[error("missing <{0}> element")]
    MissingRoot(&'static str),

    #[error("index out of range: {0}")]
    IndexOutOfRange(String),

    #[error("invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for PlaylistError {
    fn from(err: quick_xml::Error) -> Self {
        PlaylistError::MalformedXml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for PlaylistError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        PlaylistError::MalformedXml(err.to_string())
    }
}

/// Result type for playlist parsing
pub type Result<T> = std::result::Result<T, PlaylistError>;
