//! SBGN-ML - reading, editing and writing Systems Biology Graphical Notation diagrams.
//!
//! The crate maps SBGN-ML documents onto a typed object model and back. Every
//! element type implements [`SbgnElement`], which gives it `from_xml`/`to_xml`
//! as well as construction from an attribute record. Elements that may carry
//! an `<extension>` also implement [`Extensible`]; the render and annotation
//! extensions are parsed into [`render`] and [`annotation`] types, anything
//! else is preserved verbatim.
//!
//! Absent values are never written: a missing or malformed number reads as
//! `None` and stays out of the output.
//!
//! # Example
//!
//! ```
//! use sbgn::{Document, SbgnElement};
//!
//! let doc = Document::from_xml(
//!     r#"<sbgn xmlns="http://sbgn.org/libsbgn/0.3">
//!          <map><glyph id="g1" class="macromolecule"><bbox x="10" y="10" w="20" h="20"/></glyph></map>
//!        </sbgn>"#,
//! ).unwrap();
//!
//! let glyph = &doc.map().unwrap().glyphs()[0];
//! assert_eq!(glyph.class(), Some("macromolecule"));
//! assert_eq!(glyph.bbox().and_then(|bbox| bbox.w()), Some(20.0));
//! ```

pub mod annotation;
pub mod coerce;
pub mod config;
pub mod render;

mod base;
mod element;
mod error;
mod extension;
mod model;

pub use sbgn_xml::{WriteOptions, XmlNode};

pub use base::{ElementBase, Extensible};
pub use element::SbgnElement;
pub use error::{Result, SbgnError};
pub use extension::{Extension, ExtensionPayload};
pub use model::{
    Arc, Bbox, CloneType, Document, EndType, Glyph, Label, Map, NextType, Port, SBGN_NAMESPACE,
    StartType, StateType,
};

use log::{debug, info, trace};

use config::AppConfig;

/// Reads and writes whole SBGN-ML documents with a fixed configuration.
///
/// # Examples
///
/// ```
/// use sbgn::{DocumentBuilder, WriteOptions, config::AppConfig};
///
/// let builder = DocumentBuilder::new(AppConfig::new(WriteOptions::default().with_indent(2)));
/// let doc = builder.parse(r#"<sbgn xmlns="http://sbgn.org/libsbgn/0.3"><map id="m"/></sbgn>"#).unwrap();
///
/// assert_eq!(
///     builder.write(&doc),
///     "<sbgn xmlns=\"http://sbgn.org/libsbgn/0.3\">\n  <map id=\"m\"/>\n</sbgn>"
/// );
/// ```
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    config: AppConfig,
}

impl DocumentBuilder {
    /// Create a new document builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse SBGN-ML text into a [`Document`].
    ///
    /// # Errors
    ///
    /// Returns [`SbgnError::Xml`] for text that is not well-formed XML and
    /// [`SbgnError::Structure`] when the root is not a valid `<sbgn>` element.
    pub fn parse(&self, source: &str) -> Result<Document> {
        info!(bytes = source.len(); "Parsing SBGN-ML document");

        let doc = Document::from_xml(source)?;

        debug!("Document parsed successfully");
        trace!(doc:?; "Parsed document");
        Ok(doc)
    }

    /// Write a [`Document`] using the configured output options.
    pub fn write(&self, doc: &Document) -> String {
        let xml = doc.to_xml_with(self.config.output());
        debug!(bytes = xml.len(); "Document written");
        xml
    }
}
