//! The `<glyph>` element: a diagram node.
//!
//! A glyph may contain further glyphs as members (complexes, multimers,
//! submaps), nested to any depth. Only the direct `<glyph>` children of a glyph
//! are its members; deeper levels belong to the members themselves.

use sbgn_xml::XmlNode;

use crate::base::{ElementBase, impl_extensible};
use crate::coerce::{get_str, set_opt_str};
use crate::element::{SbgnElement, expect_tag, parse_all, parse_first};
use crate::error::Result;
use crate::model::{Bbox, CloneType, Label, Port, StateType};

/// Represents the `<glyph>` element.
///
/// Members and ports are kept in two separate sequences. Each keeps the
/// document order of its own tag, but the interleaving of `<glyph>` and
/// `<port>` children in the source is not recorded: on write all members come
/// before all ports.
///
/// # Examples
///
/// ```
/// use sbgn::{Bbox, Glyph, Label, SbgnElement};
///
/// let glyph = Glyph::new()
///     .with_id("g1")
///     .with_class("macromolecule")
///     .with_label(Label::new("RAS"))
///     .with_bbox(Bbox::new(10.0, 10.0, 20.0, 20.0));
///
/// assert_eq!(
///     glyph.to_xml(),
///     r#"<glyph id="g1" class="macromolecule"><label text="RAS"/><bbox x="10" y="10" w="20" h="20"/></glyph>"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Glyph {
    base: ElementBase,
    id: Option<String>,
    class: Option<String>,
    compartment_ref: Option<String>,
    label: Option<Label>,
    state: Option<StateType>,
    bbox: Option<Bbox>,
    clone: Option<CloneType>,
    glyph_members: Vec<Glyph>,
    ports: Vec<Port>,
}

impl_extensible!(Glyph);

impl Glyph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The glyph class, such as `macromolecule` or `process`.
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Identifier of the compartment glyph this glyph sits in.
    pub fn compartment_ref(&self) -> Option<&str> {
        self.compartment_ref.as_deref()
    }

    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    pub fn state(&self) -> Option<&StateType> {
        self.state.as_ref()
    }

    pub fn bbox(&self) -> Option<&Bbox> {
        self.bbox.as_ref()
    }

    pub fn clone_marker(&self) -> Option<&CloneType> {
        self.clone.as_ref()
    }

    /// The direct member glyphs, in document order.
    pub fn glyph_members(&self) -> &[Glyph] {
        &self.glyph_members
    }

    pub fn glyph_members_mut(&mut self) -> &mut Vec<Glyph> {
        &mut self.glyph_members
    }

    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    pub fn ports_mut(&mut self) -> &mut Vec<Port> {
        &mut self.ports
    }

    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    pub fn set_class(&mut self, class: Option<String>) {
        self.class = class;
    }

    pub fn set_compartment_ref(&mut self, compartment_ref: Option<String>) {
        self.compartment_ref = compartment_ref;
    }

    pub fn set_label(&mut self, label: Label) {
        self.label = Some(label);
    }

    pub fn set_state(&mut self, state: StateType) {
        self.state = Some(state);
    }

    pub fn set_bbox(&mut self, bbox: Bbox) {
        self.bbox = Some(bbox);
    }

    pub fn set_clone(&mut self, clone: CloneType) {
        self.clone = Some(clone);
    }

    pub fn add_glyph_member(&mut self, member: Glyph) {
        self.glyph_members.push(member);
    }

    pub fn add_port(&mut self, port: Port) {
        self.ports.push(port);
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_compartment_ref(mut self, compartment_ref: impl Into<String>) -> Self {
        self.compartment_ref = Some(compartment_ref.into());
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.label = Some(label);
        self
    }

    pub fn with_state(mut self, state: StateType) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_bbox(mut self, bbox: Bbox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    pub fn with_clone(mut self, clone: CloneType) -> Self {
        self.clone = Some(clone);
        self
    }

    pub fn with_glyph_member(mut self, member: Glyph) -> Self {
        self.glyph_members.push(member);
        self
    }

    pub fn with_port(mut self, port: Port) -> Self {
        self.ports.push(port);
        self
    }

    /// Finds a member glyph with the given id at any depth, depth-first.
    ///
    /// The glyph itself is not considered.
    pub fn find_member(&self, id: &str) -> Option<&Glyph> {
        self.glyph_members.iter().find_map(|member| {
            if member.id() == Some(id) {
                Some(member)
            } else {
                member.find_member(id)
            }
        })
    }

    /// Finds a port with the given id on this glyph or any of its members.
    pub fn find_port(&self, id: &str) -> Option<&Port> {
        self.ports
            .iter()
            .find(|port| port.id() == Some(id))
            .or_else(|| {
                self.glyph_members
                    .iter()
                    .find_map(|member| member.find_port(id))
            })
    }
}

impl SbgnElement for Glyph {
    const TAG: &'static str = "glyph";
    const ATTRIBUTES: &'static [&'static str] = &["id", "class", "compartmentRef"];

    fn from_node(node: &XmlNode) -> Result<Self> {
        expect_tag(node, Self::TAG)?;
        let mut glyph = Self {
            base: ElementBase::default(),
            id: get_str(node, "id"),
            class: get_str(node, "class"),
            compartment_ref: get_str(node, "compartmentRef"),
            label: parse_first(node)?,
            state: parse_first(node)?,
            bbox: parse_first(node)?,
            clone: parse_first(node)?,
            glyph_members: parse_all(node)?,
            ports: parse_all(node)?,
        };
        glyph.base.populate_from_parsed(node)?;
        Ok(glyph)
    }

    fn to_node(&self) -> XmlNode {
        let mut node = XmlNode::new(Self::TAG);
        set_opt_str(&mut node, "id", self.id());
        set_opt_str(&mut node, "class", self.class());
        set_opt_str(&mut node, "compartmentRef", self.compartment_ref());

        if let Some(label) = &self.label {
            node.push_child(label.to_node());
        }
        if let Some(state) = &self.state {
            node.push_child(state.to_node());
        }
        if let Some(bbox) = &self.bbox {
            node.push_child(bbox.to_node());
        }
        if let Some(clone) = &self.clone {
            node.push_child(clone.to_node());
        }
        for member in &self.glyph_members {
            node.push_child(member.to_node());
        }
        for port in &self.ports {
            node.push_child(port.to_node());
        }
        self.base.contribute_to_build(&mut node);
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Extensible;

    #[test]
    fn test_parse_attributes_and_children() {
        let glyph = Glyph::from_xml(
            r#"<glyph id="g1" class="macromolecule" compartmentRef="c1">
                <label text="RAS"/>
                <state value="P" variable="S1"/>
                <bbox x="1" y="2" w="3" h="4"/>
                <clone label="C"/>
            </glyph>"#,
        )
        .unwrap();

        assert_eq!(glyph.id(), Some("g1"));
        assert_eq!(glyph.class(), Some("macromolecule"));
        assert_eq!(glyph.compartment_ref(), Some("c1"));
        assert_eq!(glyph.label().and_then(Label::text), Some("RAS"));
        assert_eq!(glyph.state().and_then(StateType::value), Some("P"));
        assert_eq!(glyph.bbox().and_then(Bbox::h), Some(4.0));
        assert_eq!(glyph.clone_marker().and_then(CloneType::label), Some("C"));
        assert!(glyph.glyph_members().is_empty());
        assert!(glyph.ports().is_empty());
    }

    #[test]
    fn test_extra_single_children_are_ignored() {
        let glyph = Glyph::from_xml(
            "<glyph><label text='first'/><label text='second'/><bbox x='1'/><bbox x='2'/></glyph>",
        )
        .unwrap();

        assert_eq!(glyph.label().and_then(Label::text), Some("first"));
        assert_eq!(glyph.bbox().and_then(Bbox::x), Some(1.0));
        assert_eq!(
            glyph.to_xml(),
            r#"<glyph><label text="first"/><bbox x="1"/></glyph>"#
        );
    }

    #[test]
    fn test_three_level_nesting() {
        let glyph = Glyph::from_xml(
            "<glyph id='outer'>\
                <glyph id='middle'><glyph id='inner'/></glyph>\
                <glyph id='sibling'/>\
            </glyph>",
        )
        .unwrap();

        let members: Vec<_> = glyph.glyph_members().iter().map(|g| g.id()).collect();
        assert_eq!(members, vec![Some("middle"), Some("sibling")]);

        let middle = &glyph.glyph_members()[0];
        assert_eq!(middle.glyph_members().len(), 1);

        let inner = &middle.glyph_members()[0];
        assert_eq!(inner.id(), Some("inner"));
        assert!(inner.glyph_members().is_empty());
        assert!(glyph.glyph_members()[1].glyph_members().is_empty());
    }

    #[test]
    fn test_members_written_before_ports() {
        let glyph = Glyph::from_xml(
            "<glyph id='p'><port id='p1' x='0' y='0'/><glyph id='m'/><port id='p2' x='1' y='1'/></glyph>",
        )
        .unwrap();

        assert_eq!(glyph.ports().len(), 2);
        assert_eq!(glyph.glyph_members().len(), 1);
        assert_eq!(
            glyph.to_xml(),
            r#"<glyph id="p"><glyph id="m"/><port id="p1" x="0" y="0"/><port id="p2" x="1" y="1"/></glyph>"#
        );
    }

    #[test]
    fn test_extension_written_last() {
        let source = r#"<glyph id="g"><label text="L"/><bbox x="0" y="0" w="1" h="1"/><extension><note/></extension></glyph>"#;
        let glyph = Glyph::from_xml(source).unwrap();
        assert!(glyph.extension().is_some());
        assert_eq!(glyph.to_xml(), source);
    }

    #[test]
    fn test_find_member_searches_depth_first() {
        let glyph = Glyph::new()
            .with_id("complex")
            .with_glyph_member(
                Glyph::new()
                    .with_id("a")
                    .with_glyph_member(Glyph::new().with_id("deep").with_class("first")),
            )
            .with_glyph_member(Glyph::new().with_id("deep").with_class("second"));

        assert_eq!(glyph.find_member("deep").and_then(Glyph::class), Some("first"));
        assert_eq!(glyph.find_member("a").and_then(Glyph::id), Some("a"));
        assert!(glyph.find_member("complex").is_none());
        assert!(glyph.find_member("missing").is_none());
    }

    #[test]
    fn test_find_port_searches_members() {
        let glyph = Glyph::new()
            .with_port(Port::new("p1", 0.0, 0.0))
            .with_glyph_member(Glyph::new().with_port(Port::new("p2", 1.0, 1.0)));

        assert_eq!(glyph.find_port("p2").and_then(Port::x), Some(1.0));
        assert!(glyph.find_port("p3").is_none());
    }

    #[test]
    fn test_from_attributes_uses_xml_names() {
        let glyph = Glyph::from_attributes([("id", "g1"), ("compartmentRef", "c")]).unwrap();
        assert_eq!(glyph.compartment_ref(), Some("c"));

        let err = Glyph::from_attributes([("compartment_ref", "c")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown field(s) for `glyph`: compartment_ref"
        );
    }

    #[test]
    fn test_mutators() {
        let mut glyph = Glyph::new();
        glyph.set_class(Some("complex".to_string()));
        glyph.set_label(Label::new("C1"));
        glyph.add_glyph_member(Glyph::new().with_id("m1"));
        glyph.add_port(Port::new("p", 2.0, 3.0));
        glyph.set_state(StateType::new().with_value("P"));
        glyph.set_clone(CloneType::new());

        assert_eq!(
            glyph.to_xml(),
            r#"<glyph class="complex"><label text="C1"/><state value="P"/><clone/><glyph id="m1"/><port id="p" x="2" y="3"/></glyph>"#
        );
    }
}
