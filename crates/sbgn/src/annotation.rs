//! The `<annotation>` extension payload.
//!
//! The whole element is kept as an opaque subtree and written back unchanged.
//! Only a few read-only helpers look inside its RDF content.

use sbgn_xml::{XmlNode, local_part};

use crate::element::{SbgnElement, expect_tag};
use crate::error::Result;

/// Represents the `<annotation>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    node: XmlNode,
}

impl Default for Annotation {
    fn default() -> Self {
        Self::new()
    }
}

impl Annotation {
    pub fn new() -> Self {
        Self {
            node: XmlNode::new(Self::TAG),
        }
    }

    /// The full `<annotation>` subtree: attributes, text and every child.
    pub fn node(&self) -> &XmlNode {
        &self.node
    }

    /// The first `RDF` child, whatever its prefix.
    pub fn rdf(&self) -> Option<&XmlNode> {
        self.node.first_child("RDF")
    }

    /// Replaces the `RDF` content, leaving the other children in place.
    pub fn set_rdf(&mut self, rdf: XmlNode) {
        self.node.set_children("RDF", vec![rdf]);
    }

    /// The `about` attributes of the RDF `Description` children, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sbgn::SbgnElement;
    /// use sbgn::annotation::Annotation;
    ///
    /// let annotation = Annotation::from_xml(
    ///     r##"<annotation><rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    ///         <rdf:Description rdf:about="#glyph1"/>
    ///     </rdf:RDF></annotation>"##,
    /// ).unwrap();
    /// assert_eq!(annotation.about_ids(), vec!["#glyph1"]);
    /// ```
    pub fn about_ids(&self) -> Vec<&str> {
        let Some(rdf) = self.rdf() else {
            return Vec::new();
        };
        rdf.children("Description")
            .iter()
            .filter_map(|description| {
                description
                    .attributes()
                    .find(|(name, _)| local_part(name) == "about")
                    .map(|(_, value)| value)
            })
            .collect()
    }
}

impl SbgnElement for Annotation {
    const TAG: &'static str = "annotation";
    const ATTRIBUTES: &'static [&'static str] = &[];

    fn from_node(node: &XmlNode) -> Result<Self> {
        expect_tag(node, Self::TAG)?;

        let mut annotation = Self::new();
        for (name, value) in node.attributes() {
            annotation.node.set_attribute(name, value);
        }
        for (_, group) in node.child_groups() {
            for child in group {
                annotation.node.push_child(child.clone());
            }
        }
        if let Some(text) = node.text() {
            annotation.node.set_text(text);
        }
        Ok(annotation)
    }

    fn to_node(&self) -> XmlNode {
        self.node.clone()
    }
}
