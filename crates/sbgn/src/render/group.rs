//! The `<g>` render group: the visual properties a style applies.

use sbgn_xml::XmlNode;

use crate::coerce::{get_num, get_str, set_opt_num, set_opt_str};
use crate::element::{SbgnElement, expect_tag};
use crate::error::Result;

/// Represents the `<g>` element.
///
/// `fontSize` and `strokeWidth` are numbers; everything else is kept as text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderGroup {
    id: Option<String>,
    font_size: Option<f64>,
    font_family: Option<String>,
    font_weight: Option<String>,
    font_style: Option<String>,
    text_anchor: Option<String>,
    vtext_anchor: Option<String>,
    fill: Option<String>,
    stroke: Option<String>,
    stroke_width: Option<f64>,
}

impl RenderGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn font_size(&self) -> Option<f64> {
        self.font_size
    }

    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    pub fn font_weight(&self) -> Option<&str> {
        self.font_weight.as_deref()
    }

    pub fn font_style(&self) -> Option<&str> {
        self.font_style.as_deref()
    }

    pub fn text_anchor(&self) -> Option<&str> {
        self.text_anchor.as_deref()
    }

    pub fn vtext_anchor(&self) -> Option<&str> {
        self.vtext_anchor.as_deref()
    }

    pub fn fill(&self) -> Option<&str> {
        self.fill.as_deref()
    }

    pub fn stroke(&self) -> Option<&str> {
        self.stroke.as_deref()
    }

    pub fn stroke_width(&self) -> Option<f64> {
        self.stroke_width
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = Some(font_size);
        self
    }

    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = Some(font_family.into());
        self
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = Some(stroke_width);
        self
    }

    pub fn set_font_weight(&mut self, font_weight: Option<String>) {
        self.font_weight = font_weight;
    }

    pub fn set_font_style(&mut self, font_style: Option<String>) {
        self.font_style = font_style;
    }

    pub fn set_text_anchor(&mut self, text_anchor: Option<String>) {
        self.text_anchor = text_anchor;
    }

    pub fn set_vtext_anchor(&mut self, vtext_anchor: Option<String>) {
        self.vtext_anchor = vtext_anchor;
    }
}

impl SbgnElement for RenderGroup {
    const TAG: &'static str = "g";
    const ATTRIBUTES: &'static [&'static str] = &[
        "id",
        "fontSize",
        "fontFamily",
        "fontWeight",
        "fontStyle",
        "textAnchor",
        "vtextAnchor",
        "fill",
        "stroke",
        "strokeWidth",
    ];

    fn from_node(node: &XmlNode) -> Result<Self> {
        expect_tag(node, Self::TAG)?;
        Ok(Self {
            id: get_str(node, "id"),
            font_size: get_num(node, "fontSize"),
            font_family: get_str(node, "fontFamily"),
            font_weight: get_str(node, "fontWeight"),
            font_style: get_str(node, "fontStyle"),
            text_anchor: get_str(node, "textAnchor"),
            vtext_anchor: get_str(node, "vtextAnchor"),
            fill: get_str(node, "fill"),
            stroke: get_str(node, "stroke"),
            stroke_width: get_num(node, "strokeWidth"),
        })
    }

    fn to_node(&self) -> XmlNode {
        let mut node = XmlNode::new(Self::TAG);
        set_opt_str(&mut node, "id", self.id());
        set_opt_num(&mut node, "fontSize", self.font_size);
        set_opt_str(&mut node, "fontFamily", self.font_family());
        set_opt_str(&mut node, "fontWeight", self.font_weight());
        set_opt_str(&mut node, "fontStyle", self.font_style());
        set_opt_str(&mut node, "textAnchor", self.text_anchor());
        set_opt_str(&mut node, "vtextAnchor", self.vtext_anchor());
        set_opt_str(&mut node, "stroke", self.stroke());
        set_opt_num(&mut node, "strokeWidth", self.stroke_width);
        set_opt_str(&mut node, "fill", self.fill());
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPLETE: &str = r##"<g id="id" fontSize="12" fontFamily="Comic" fontWeight="not bold" fontStyle="style" textAnchor="on top of the top" vtextAnchor="left" stroke="blue" strokeWidth="2" fill="#123456"/>"##;

    #[test]
    fn test_parse_empty() {
        assert_eq!(RenderGroup::from_xml("<g />").unwrap(), RenderGroup::default());
    }

    #[test]
    fn test_parse_complete() {
        let group = RenderGroup::from_xml(
            "<g id='id' fontSize='12' fontFamily='Comic' fontWeight='not bold' \
             fontStyle='style' textAnchor='on top of the top' vtextAnchor='left' \
             fill='#123456' stroke='blue' strokeWidth='2' />",
        )
        .unwrap();

        assert_eq!(group.id(), Some("id"));
        assert_eq!(group.font_size(), Some(12.0));
        assert_eq!(group.font_family(), Some("Comic"));
        assert_eq!(group.font_weight(), Some("not bold"));
        assert_eq!(group.font_style(), Some("style"));
        assert_eq!(group.text_anchor(), Some("on top of the top"));
        assert_eq!(group.vtext_anchor(), Some("left"));
        assert_eq!(group.fill(), Some("#123456"));
        assert_eq!(group.stroke(), Some("blue"));
        assert_eq!(group.stroke_width(), Some(2.0));
    }

    #[test]
    fn test_write_empty() {
        assert_eq!(RenderGroup::new().to_xml(), "<g/>");
    }

    #[test]
    fn test_write_complete_puts_fill_last() {
        let group = RenderGroup::from_attributes([
            ("id", "id"),
            ("fontSize", "12"),
            ("fontFamily", "Comic"),
            ("fontWeight", "not bold"),
            ("fontStyle", "style"),
            ("textAnchor", "on top of the top"),
            ("vtextAnchor", "left"),
            ("fill", "#123456"),
            ("stroke", "blue"),
            ("strokeWidth", "2"),
        ])
        .unwrap();
        assert_eq!(group.to_xml(), COMPLETE);
    }

    #[test]
    fn test_builders() {
        let group = RenderGroup::new()
            .with_id("g1")
            .with_font_size(10.5)
            .with_stroke("red")
            .with_stroke_width(1.0)
            .with_fill("white");
        assert_eq!(
            group.to_xml(),
            r#"<g id="g1" fontSize="10.5" stroke="red" strokeWidth="1" fill="white"/>"#
        );
    }
}
