//! Error type for the XML text layer.

use std::str;

use thiserror::Error;

/// Errors raised while turning XML text into an [`XmlNode`](crate::XmlNode) tree.
#[derive(Debug, Error)]
pub enum XmlError {
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("attribute error: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    #[error("encoding error: {0}")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    #[error("utf8 error: {0}")]
    Utf8(#[from] str::Utf8Error),

    #[error("unexpected structure: {0}")]
    Structure(String),
}

/// A type alias for `Result<T, XmlError>`.
pub type Result<T> = std::result::Result<T, XmlError>;
