//! Error types for SBGN-ML model operations.
//!
//! This module provides the main error type [`SbgnError`]. Parsing fails fast:
//! an error never comes with a partially built object graph.

use thiserror::Error;

use sbgn_xml::XmlError;

/// The main error type for SBGN-ML model operations.
#[derive(Debug, Error)]
pub enum SbgnError {
    /// The XML text could not be turned into an element tree.
    #[error("XML error: {0}")]
    Xml(#[from] XmlError),

    /// The element tree does not have the shape the entry point expects.
    #[error("Bad XML provided: {0}")]
    Structure(String),

    /// A configuration record named fields the element does not have.
    #[error("Unknown field(s) for `{element}`: {}", .fields.join(", "))]
    Config {
        element: &'static str,
        fields: Vec<String>,
    },
}

impl SbgnError {
    /// Create a `Structure` error for a wrapper tag that does not match.
    pub fn unexpected_element(expected: &str, found: &str) -> Self {
        Self::Structure(format!("expected element `{expected}`, found `{found}`"))
    }
}

/// A type alias for `Result<T, SbgnError>`.
pub type Result<T> = std::result::Result<T, SbgnError>;
