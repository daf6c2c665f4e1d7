//! The `<bbox>` element.

use sbgn_xml::XmlNode;

use crate::base::{ElementBase, impl_extensible};
use crate::coerce::{get_num, set_opt_num};
use crate::element::{SbgnElement, expect_tag};
use crate::error::Result;

/// Represents the `<bbox>` element: an axis-aligned bounding box.
///
/// Each coordinate is optional. Absent coordinates are never written, so a
/// box read from a file with only `x` and `y` writes back exactly those.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bbox {
    base: ElementBase,
    x: Option<f64>,
    y: Option<f64>,
    w: Option<f64>,
    h: Option<f64>,
}

impl_extensible!(Bbox);

impl Bbox {
    /// Creates a box with all four coordinates set.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            base: ElementBase::default(),
            x: Some(x),
            y: Some(y),
            w: Some(w),
            h: Some(h),
        }
    }

    pub fn x(&self) -> Option<f64> {
        self.x
    }

    pub fn y(&self) -> Option<f64> {
        self.y
    }

    pub fn w(&self) -> Option<f64> {
        self.w
    }

    pub fn h(&self) -> Option<f64> {
        self.h
    }

    pub fn set_x(&mut self, x: Option<f64>) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: Option<f64>) {
        self.y = y;
    }

    pub fn set_w(&mut self, w: Option<f64>) {
        self.w = w;
    }

    pub fn set_h(&mut self, h: Option<f64>) {
        self.h = h;
    }
}

impl SbgnElement for Bbox {
    const TAG: &'static str = "bbox";
    const ATTRIBUTES: &'static [&'static str] = &["x", "y", "w", "h"];

    fn from_node(node: &XmlNode) -> Result<Self> {
        expect_tag(node, Self::TAG)?;
        let mut bbox = Self {
            base: ElementBase::default(),
            x: get_num(node, "x"),
            y: get_num(node, "y"),
            w: get_num(node, "w"),
            h: get_num(node, "h"),
        };
        bbox.base.populate_from_parsed(node)?;
        Ok(bbox)
    }

    fn to_node(&self) -> XmlNode {
        let mut node = XmlNode::new(Self::TAG);
        set_opt_num(&mut node, "x", self.x);
        set_opt_num(&mut node, "y", self.y);
        set_opt_num(&mut node, "w", self.w);
        set_opt_num(&mut node, "h", self.h);
        self.base.contribute_to_build(&mut node);
        node
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_parse_empty() {
        let bbox = Bbox::from_xml("<bbox />").unwrap();
        assert_eq!(bbox.x(), None);
        assert_eq!(bbox.y(), None);
        assert_eq!(bbox.w(), None);
        assert_eq!(bbox.h(), None);
    }

    #[test]
    fn test_parse_complete() {
        let bbox = Bbox::from_xml("<bbox x='1' y='2' w='3.25' h='4' />").unwrap();
        assert_eq!(bbox.x(), Some(1.0));
        assert_eq!(bbox.y(), Some(2.0));
        assert_eq!(bbox.w(), Some(3.25));
        assert_eq!(bbox.h(), Some(4.0));
    }

    #[test]
    fn test_write_empty() {
        assert_eq!(Bbox::default().to_xml(), "<bbox/>");
    }

    #[test]
    fn test_write_complete() {
        assert_eq!(
            Bbox::new(1.0, 2.0, 3.25, 4.0).to_xml(),
            r#"<bbox x="1" y="2" w="3.25" h="4"/>"#
        );
    }

    #[test]
    fn test_partial_box_omits_missing() {
        let mut bbox = Bbox::new(1.0, 2.0, 3.0, 4.0);
        bbox.set_w(None);
        bbox.set_h(None);
        assert_eq!(bbox.to_xml(), r#"<bbox x="1" y="2"/>"#);
    }

    proptest! {
        #[test]
        fn prop_omission_law(
            x in proptest::option::of(-1.0e6f64..1.0e6),
            y in proptest::option::of(-1.0e6f64..1.0e6),
            w in proptest::option::of(0.0f64..1.0e6),
            h in proptest::option::of(0.0f64..1.0e6),
        ) {
            let mut bbox = Bbox::default();
            bbox.set_x(x);
            bbox.set_y(y);
            bbox.set_w(w);
            bbox.set_h(h);

            let node = bbox.to_node();
            for (name, value) in [("x", x), ("y", y), ("w", w), ("h", h)] {
                match value {
                    Some(v) => {
                        let expected = format!("{v}");
                        prop_assert_eq!(node.attribute(name), Some(expected.as_str()));
                    }
                    None => prop_assert_eq!(node.attribute(name), None),
                }
            }

            let reparsed = Bbox::from_xml(&bbox.to_xml()).unwrap();
            prop_assert_eq!(reparsed, bbox);
        }
    }
}
