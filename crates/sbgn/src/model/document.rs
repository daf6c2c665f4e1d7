//! The `<sbgn>` root element.

use log::{debug, trace};

use sbgn_xml::XmlNode;

use crate::base::{ElementBase, impl_extensible};
use crate::coerce::{get_str, set_opt_str};
use crate::element::{SbgnElement, expect_tag, parse_first};
use crate::error::{Result, SbgnError};
use crate::model::Map;

/// Namespace of SBGN-ML documents written by this crate.
pub const SBGN_NAMESPACE: &str = "http://sbgn.org/libsbgn/0.3";

/// Represents the `<sbgn>` root element of an SBGN-ML document.
///
/// # Examples
///
/// ```
/// use sbgn::{Document, SbgnElement};
///
/// let doc = Document::from_xml(r#"<sbgn xmlns:s="http://sbgn.org/libsbgn/0.3"><s:map/></sbgn>"#).unwrap();
/// assert_eq!(doc.xmlns(), Some("http://sbgn.org/libsbgn/0.3"));
/// assert_eq!(doc.namespace_prefix(), Some("s"));
/// assert!(doc.map().is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    base: ElementBase,
    xmlns: Option<String>,
    namespace_prefix: Option<String>,
    map: Option<Map>,
}

impl_extensible!(Document);

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document in the SBGN-ML namespace.
    pub fn new() -> Self {
        Self {
            base: ElementBase::default(),
            xmlns: Some(SBGN_NAMESPACE.to_string()),
            namespace_prefix: None,
            map: None,
        }
    }

    pub fn xmlns(&self) -> Option<&str> {
        self.xmlns.as_deref()
    }

    /// The prefix the namespace was declared under in the parsed source, if any.
    pub fn namespace_prefix(&self) -> Option<&str> {
        self.namespace_prefix.as_deref()
    }

    pub fn map(&self) -> Option<&Map> {
        self.map.as_ref()
    }

    pub fn map_mut(&mut self) -> Option<&mut Map> {
        self.map.as_mut()
    }

    pub fn set_xmlns(&mut self, xmlns: Option<String>) {
        self.xmlns = xmlns;
    }

    pub fn set_map(&mut self, map: Map) {
        self.map = Some(map);
    }

    pub fn with_map(mut self, map: Map) -> Self {
        self.map = Some(map);
        self
    }

    /// Resolves the namespace declaration of an `<sbgn>` node.
    ///
    /// Returns the namespace and, for a prefixed declaration, its prefix.
    fn resolve_namespace(node: &XmlNode) -> Result<(Option<String>, Option<String>)> {
        if let Some(xmlns) = get_str(node, "xmlns") {
            return Ok((Some(xmlns), None));
        }
        if !node.has_attributes() {
            return Ok((None, None));
        }

        node.attributes()
            .find(|(name, _)| name.starts_with("xmlns"))
            .map(|(name, value)| {
                let prefix = name.strip_prefix("xmlns:").unwrap_or(name);
                (Some(value.to_string()), Some(prefix.to_string()))
            })
            .ok_or_else(|| {
                SbgnError::Structure("couldn't find xmlns definition in sbgn element".to_string())
            })
    }
}

impl SbgnElement for Document {
    const TAG: &'static str = "sbgn";
    const ATTRIBUTES: &'static [&'static str] = &["xmlns"];

    fn from_node(node: &XmlNode) -> Result<Self> {
        expect_tag(node, Self::TAG)?;
        let (xmlns, namespace_prefix) = Self::resolve_namespace(node)?;
        trace!(xmlns:?, prefix:? = namespace_prefix; "Resolved document namespace");

        let mut doc = Self {
            base: ElementBase::default(),
            xmlns,
            namespace_prefix,
            map: parse_first(node)?,
        };
        doc.base.populate_from_parsed(node)?;

        if let Some(map) = &doc.map {
            debug!(
                glyphs = map.glyphs().len(),
                arcs = map.arcs().len();
                "Parsed SBGN-ML document"
            );
        }
        Ok(doc)
    }

    fn to_node(&self) -> XmlNode {
        let mut node = XmlNode::new(Self::TAG);
        set_opt_str(&mut node, "xmlns", self.xmlns());

        self.base.contribute_to_build(&mut node);
        if let Some(map) = &self.map {
            node.push_child(map.to_node());
        }
        node
    }
}
