//! The `<extension>` element and its payload dispatcher.
//!
//! Each direct child of `<extension>` becomes one [`ExtensionPayload`], keyed
//! by its local tag name. Known sub-schemas (`renderInformation`,
//! `annotation`) are parsed into typed values; anything else is kept as the
//! raw subtree and written back unchanged.
//!
//! Kinds keep the position of their first occurrence. A later payload of the
//! same kind replaces the stored one in that position, so interleaved kinds
//! such as `<a/><b/><a/>` are written back as `<a/><b/>` holding the last `a`.

use indexmap::IndexMap;
use log::{debug, warn};

use sbgn_xml::XmlNode;

use crate::annotation::Annotation;
use crate::element::SbgnElement;
use crate::error::{Result, SbgnError};
use crate::render::RenderInformation;

/// One extension payload, resolved once when parsed or added.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtensionPayload {
    /// Rendering information (colors, styles).
    RenderInformation(RenderInformation),
    /// RDF annotations.
    Annotation(Annotation),
    /// An unrecognized extension, kept verbatim.
    Unknown(XmlNode),
}

impl ExtensionPayload {
    /// Dispatches a child of `<extension>` on its local tag name.
    ///
    /// # Errors
    ///
    /// Propagates failures from the known sub-schemas. Unknown payloads never fail.
    pub fn from_node(node: &XmlNode) -> Result<Self> {
        let name = node.local_name();
        if name == RenderInformation::TAG {
            Ok(Self::RenderInformation(RenderInformation::from_node(node)?))
        } else if name == Annotation::TAG {
            Ok(Self::Annotation(Annotation::from_node(node)?))
        } else {
            debug!(extension = name; "Keeping unrecognized extension as-is");
            Ok(Self::Unknown(node.clone()))
        }
    }

    /// The key this payload is stored under.
    pub fn name(&self) -> &str {
        match self {
            Self::RenderInformation(_) => RenderInformation::TAG,
            Self::Annotation(_) => Annotation::TAG,
            Self::Unknown(node) => node.local_name(),
        }
    }

    /// Builds the payload's subtree.
    ///
    /// Unknown payloads are emitted as an independent copy of the stored subtree.
    pub fn to_node(&self) -> XmlNode {
        match self {
            Self::RenderInformation(info) => info.to_node(),
            Self::Annotation(annotation) => annotation.to_node(),
            Self::Unknown(node) => node.clone(),
        }
    }
}

impl From<RenderInformation> for ExtensionPayload {
    fn from(info: RenderInformation) -> Self {
        Self::RenderInformation(info)
    }
}

impl From<Annotation> for ExtensionPayload {
    fn from(annotation: Annotation) -> Self {
        Self::Annotation(annotation)
    }
}

/// Represents the `<extension>` element: at most one payload per kind name.
///
/// # Examples
///
/// ```
/// use sbgn::{Extension, SbgnElement};
/// use sbgn::render::RenderInformation;
///
/// let mut extension = Extension::new();
/// extension.add(RenderInformation::new());
/// assert!(extension.has("renderInformation"));
/// assert!(extension.render_information().is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extension {
    list: IndexMap<String, ExtensionPayload>,
}

impl Extension {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a payload under its kind name.
    ///
    /// A payload of the same kind that was already present is replaced and
    /// returned (last write wins).
    pub fn add(&mut self, payload: impl Into<ExtensionPayload>) -> Option<ExtensionPayload> {
        let payload = payload.into();
        let name = payload.name().to_string();
        let previous = self.list.insert(name, payload);
        if let Some(previous) = &previous {
            warn!(extension = previous.name(); "Extension replaced by a later one of the same kind");
        }
        previous
    }

    /// Returns `true` if a payload is stored under `name`.
    pub fn has(&self, name: &str) -> bool {
        self.list.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&ExtensionPayload> {
        self.list.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ExtensionPayload> {
        self.list.get_mut(name)
    }

    /// Removes and returns the payload stored under `name`, keeping the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<ExtensionPayload> {
        self.list.shift_remove(name)
    }

    pub fn render_information(&self) -> Option<&RenderInformation> {
        match self.get(RenderInformation::TAG) {
            Some(ExtensionPayload::RenderInformation(info)) => Some(info),
            _ => None,
        }
    }

    pub fn annotation(&self) -> Option<&Annotation> {
        match self.get(Annotation::TAG) {
            Some(ExtensionPayload::Annotation(annotation)) => Some(annotation),
            _ => None,
        }
    }

    /// Kind names and payloads in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExtensionPayload)> {
        self.list.iter().map(|(name, payload)| (name.as_str(), payload))
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl SbgnElement for Extension {
    const TAG: &'static str = "extension";
    const ATTRIBUTES: &'static [&'static str] = &[];

    fn from_node(node: &XmlNode) -> Result<Self> {
        if node.local_name() != Self::TAG {
            return Err(SbgnError::Structure(format!(
                "expected extension element, found `{}`",
                node.name()
            )));
        }

        let mut extension = Self::new();
        for (_, group) in node.child_groups() {
            for child in group {
                extension.add(ExtensionPayload::from_node(child)?);
            }
        }
        Ok(extension)
    }

    fn to_node(&self) -> XmlNode {
        let mut node = XmlNode::new(Self::TAG);
        for payload in self.list.values() {
            node.push_child(payload.to_node());
        }
        node
    }
}
