//! The `<port>` element.

use sbgn_xml::XmlNode;

use crate::base::{ElementBase, impl_extensible};
use crate::coerce::{get_num, get_str, set_opt_num, set_opt_str};
use crate::element::{SbgnElement, expect_tag};
use crate::error::Result;

/// Represents the `<port>` element: a connection point on a glyph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Port {
    base: ElementBase,
    id: Option<String>,
    x: Option<f64>,
    y: Option<f64>,
}

impl_extensible!(Port);

impl Port {
    /// Creates a port with the given identifier and position.
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            base: ElementBase::default(),
            id: Some(id.into()),
            x: Some(x),
            y: Some(y),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn x(&self) -> Option<f64> {
        self.x
    }

    pub fn y(&self) -> Option<f64> {
        self.y
    }

    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    pub fn set_x(&mut self, x: Option<f64>) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: Option<f64>) {
        self.y = y;
    }
}

impl SbgnElement for Port {
    const TAG: &'static str = "port";
    const ATTRIBUTES: &'static [&'static str] = &["id", "x", "y"];

    fn from_node(node: &XmlNode) -> Result<Self> {
        expect_tag(node, Self::TAG)?;
        let mut port = Self {
            base: ElementBase::default(),
            id: get_str(node, "id"),
            x: get_num(node, "x"),
            y: get_num(node, "y"),
        };
        port.base.populate_from_parsed(node)?;
        Ok(port)
    }

    fn to_node(&self) -> XmlNode {
        let mut node = XmlNode::new(Self::TAG);
        set_opt_str(&mut node, "id", self.id());
        set_opt_num(&mut node, "x", self.x);
        set_opt_num(&mut node, "y", self.y);
        self.base.contribute_to_build(&mut node);
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_complete() {
        let port = Port::from_xml("<port id='p1' x='5' y='7.5' />").unwrap();
        assert_eq!(port.id(), Some("p1"));
        assert_eq!(port.x(), Some(5.0));
        assert_eq!(port.y(), Some(7.5));
    }

    #[test]
    fn test_write_complete() {
        assert_eq!(
            Port::new("p1", 5.0, 7.5).to_xml(),
            r#"<port id="p1" x="5" y="7.5"/>"#
        );
    }

    #[test]
    fn test_write_empty() {
        assert_eq!(Port::default().to_xml(), "<port/>");
    }

    #[test]
    fn test_from_attributes_rejects_all_unknown() {
        let err = Port::from_attributes([("id", "p1"), ("w", "1"), ("h", "2")]).unwrap_err();
        assert_eq!(err.to_string(), "Unknown field(s) for `port`: w, h");
    }
}
