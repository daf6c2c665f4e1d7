//! Arc geometry points: `<start>`, `<next>` and `<end>`.
//!
//! All three share the same shape, an optional `x`/`y` coordinate pair, and
//! differ only in their tag.

use sbgn_xml::XmlNode;

use crate::coerce::{get_num, set_opt_num};
use crate::element::{SbgnElement, expect_tag};
use crate::error::Result;

macro_rules! geometry_point {
    ($(#[$meta:meta])* $name:ident, $tag:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq)]
        pub struct $name {
            x: Option<f64>,
            y: Option<f64>,
        }

        impl $name {
            /// Creates a point at the given coordinates.
            pub fn new(x: f64, y: f64) -> Self {
                Self {
                    x: Some(x),
                    y: Some(y),
                }
            }

            pub fn x(&self) -> Option<f64> {
                self.x
            }

            pub fn y(&self) -> Option<f64> {
                self.y
            }

            pub fn set_x(&mut self, x: Option<f64>) {
                self.x = x;
            }

            pub fn set_y(&mut self, y: Option<f64>) {
                self.y = y;
            }
        }

        impl SbgnElement for $name {
            const TAG: &'static str = $tag;
            const ATTRIBUTES: &'static [&'static str] = &["x", "y"];

            fn from_node(node: &XmlNode) -> Result<Self> {
                expect_tag(node, Self::TAG)?;
                Ok(Self {
                    x: get_num(node, "x"),
                    y: get_num(node, "y"),
                })
            }

            fn to_node(&self) -> XmlNode {
                let mut node = XmlNode::new(Self::TAG);
                set_opt_num(&mut node, "x", self.x);
                set_opt_num(&mut node, "y", self.y);
                node
            }
        }
    };
}

geometry_point!(
    /// Represents the `<start>` element: where an arc leaves its source.
    StartType,
    "start"
);

geometry_point!(
    /// Represents the `<next>` element: an intermediate waypoint of an arc.
    NextType,
    "next"
);

geometry_point!(
    /// Represents the `<end>` element: where an arc meets its target.
    EndType,
    "end"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SbgnError;

    #[test]
    fn test_parse_coordinates() {
        let start = StartType::from_xml("<start x='1.5' y='-2'/>").unwrap();
        assert_eq!(start.x(), Some(1.5));
        assert_eq!(start.y(), Some(-2.0));
    }

    #[test]
    fn test_unparsable_coordinate_is_absent() {
        let next = NextType::from_xml("<next x='abc' y='3'/>").unwrap();
        assert_eq!(next.x(), None);
        assert_eq!(next.to_xml(), r#"<next y="3"/>"#);
    }

    #[test]
    fn test_write_empty_point() {
        assert_eq!(EndType::default().to_xml(), "<end/>");
    }

    #[test]
    fn test_write_complete_point() {
        assert_eq!(EndType::new(10.0, 20.5).to_xml(), r#"<end x="10" y="20.5"/>"#);
    }

    #[test]
    fn test_zero_is_written() {
        assert_eq!(StartType::new(0.0, 0.0).to_xml(), r#"<start x="0" y="0"/>"#);
    }

    #[test]
    fn test_tags_are_not_interchangeable() {
        let err = EndType::from_xml("<start x='1' y='1'/>").unwrap_err();
        assert!(matches!(err, SbgnError::Structure(_)));
    }

    #[test]
    fn test_from_attributes_coerces_numbers() {
        let next = NextType::from_attributes([("x", "4"), ("y", "")]).unwrap();
        assert_eq!(next.x(), Some(4.0));
        assert_eq!(next.y(), None);
    }
}
