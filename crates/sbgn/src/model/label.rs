//! The `<label>` element.

use sbgn_xml::XmlNode;

use crate::base::{ElementBase, impl_extensible};
use crate::coerce::{get_str, set_opt_str};
use crate::element::{SbgnElement, expect_tag};
use crate::error::Result;

/// Represents the `<label>` element of a glyph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Label {
    base: ElementBase,
    text: Option<String>,
}

impl_extensible!(Label);

impl Label {
    /// Creates a label with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: Option<String>) {
        self.text = text;
    }
}

impl SbgnElement for Label {
    const TAG: &'static str = "label";
    const ATTRIBUTES: &'static [&'static str] = &["text"];

    fn from_node(node: &XmlNode) -> Result<Self> {
        expect_tag(node, Self::TAG)?;
        let mut label = Self {
            text: get_str(node, "text"),
            ..Self::default()
        };
        label.base.populate_from_parsed(node)?;
        Ok(label)
    }

    fn to_node(&self) -> XmlNode {
        let mut node = XmlNode::new(Self::TAG);
        set_opt_str(&mut node, "text", self.text());
        self.base.contribute_to_build(&mut node);
        node
    }
}
