//! The `<arc>` element: a diagram edge.

use sbgn_xml::XmlNode;

use crate::base::{ElementBase, impl_extensible};
use crate::coerce::{get_str, set_opt_str};
use crate::element::{SbgnElement, expect_tag, parse_all, parse_first};
use crate::error::Result;
use crate::model::{EndType, Glyph, NextType, StartType};

/// Represents the `<arc>` element.
///
/// `source` and `target` are identifiers of glyphs or ports. They are kept as
/// plain strings and never resolved here.
///
/// Children are always written as glyphs, start, waypoints, end, extension,
/// whatever their order in the parsed document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arc {
    base: ElementBase,
    id: Option<String>,
    class: Option<String>,
    source: Option<String>,
    target: Option<String>,
    start: Option<StartType>,
    nexts: Vec<NextType>,
    end: Option<EndType>,
    glyphs: Vec<Glyph>,
}

impl_extensible!(Arc);

impl Arc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn start(&self) -> Option<&StartType> {
        self.start.as_ref()
    }

    /// The intermediate waypoints, in path order.
    pub fn nexts(&self) -> &[NextType] {
        &self.nexts
    }

    pub fn end(&self) -> Option<&EndType> {
        self.end.as_ref()
    }

    /// Decoration glyphs carried by the arc, such as cardinality labels.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn glyphs_mut(&mut self) -> &mut Vec<Glyph> {
        &mut self.glyphs
    }

    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    pub fn set_class(&mut self, class: Option<String>) {
        self.class = class;
    }

    pub fn set_source(&mut self, source: Option<String>) {
        self.source = source;
    }

    pub fn set_target(&mut self, target: Option<String>) {
        self.target = target;
    }

    pub fn set_start(&mut self, start: StartType) {
        self.start = Some(start);
    }

    pub fn set_end(&mut self, end: EndType) {
        self.end = Some(end);
    }

    pub fn add_next(&mut self, next: NextType) {
        self.nexts.push(next);
    }

    pub fn add_glyph(&mut self, glyph: Glyph) {
        self.glyphs.push(glyph);
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_start(mut self, start: StartType) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_next(mut self, next: NextType) -> Self {
        self.nexts.push(next);
        self
    }

    pub fn with_end(mut self, end: EndType) -> Self {
        self.end = Some(end);
        self
    }

    pub fn with_glyph(mut self, glyph: Glyph) -> Self {
        self.glyphs.push(glyph);
        self
    }
}

impl SbgnElement for Arc {
    const TAG: &'static str = "arc";
    const ATTRIBUTES: &'static [&'static str] = &["id", "class", "source", "target"];

    fn from_node(node: &XmlNode) -> Result<Self> {
        expect_tag(node, Self::TAG)?;
        let mut arc = Self {
            base: ElementBase::default(),
            id: get_str(node, "id"),
            class: get_str(node, "class"),
            source: get_str(node, "source"),
            target: get_str(node, "target"),
            start: parse_first(node)?,
            nexts: parse_all(node)?,
            end: parse_first(node)?,
            glyphs: parse_all(node)?,
        };
        arc.base.populate_from_parsed(node)?;
        Ok(arc)
    }

    fn to_node(&self) -> XmlNode {
        let mut node = XmlNode::new(Self::TAG);
        set_opt_str(&mut node, "id", self.id());
        set_opt_str(&mut node, "class", self.class());
        set_opt_str(&mut node, "source", self.source());
        set_opt_str(&mut node, "target", self.target());

        for glyph in &self.glyphs {
            node.push_child(glyph.to_node());
        }
        if let Some(start) = &self.start {
            node.push_child(start.to_node());
        }
        for next in &self.nexts {
            node.push_child(next.to_node());
        }
        if let Some(end) = &self.end {
            node.push_child(end.to_node());
        }
        self.base.contribute_to_build(&mut node);
        node
    }
}
