//! The `<clone>` marker of a glyph.

use sbgn_xml::XmlNode;

use crate::coerce::{get_str, set_opt_str};
use crate::element::{SbgnElement, expect_tag};
use crate::error::Result;

/// Represents the `<clone>` element, with an optional marker label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloneType {
    label: Option<String>,
}

impl CloneType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl SbgnElement for CloneType {
    const TAG: &'static str = "clone";
    const ATTRIBUTES: &'static [&'static str] = &["label"];

    fn from_node(node: &XmlNode) -> Result<Self> {
        expect_tag(node, Self::TAG)?;
        Ok(Self {
            label: get_str(node, "label"),
        })
    }

    fn to_node(&self) -> XmlNode {
        let mut node = XmlNode::new(Self::TAG);
        set_opt_str(&mut node, "label", self.label());
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_write() {
        let clone = CloneType::from_xml("<clone label='C' />").unwrap();
        assert_eq!(clone.label(), Some("C"));
        assert_eq!(clone.to_xml(), r#"<clone label="C"/>"#);
    }

    #[test]
    fn test_write_empty() {
        assert_eq!(CloneType::new().to_xml(), "<clone/>");
    }

    #[test]
    fn test_ignores_children() {
        let clone = CloneType::from_xml("<clone><label text='x'/></clone>").unwrap();
        assert_eq!(clone.label(), None);
        assert_eq!(clone.to_xml(), "<clone/>");
    }
}
