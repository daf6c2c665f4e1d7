//! The `<map>` element: one diagram.

use sbgn_xml::XmlNode;

use crate::base::{ElementBase, impl_extensible};
use crate::coerce::{get_str, set_opt_str};
use crate::element::{SbgnElement, expect_tag, parse_all};
use crate::error::Result;
use crate::model::{Arc, Glyph, Port};

/// Represents the `<map>` element: an ordered set of glyphs and arcs.
///
/// Only the direct `<glyph>` children of the map are top-level glyphs. Glyphs
/// nested in arcs stay with their arc, and members stay with their parent glyph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Map {
    base: ElementBase,
    id: Option<String>,
    language: Option<String>,
    glyphs: Vec<Glyph>,
    arcs: Vec<Arc>,
}

impl_extensible!(Map);

impl Map {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The SBGN language of the diagram, such as `process description`.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn glyphs_mut(&mut self) -> &mut Vec<Glyph> {
        &mut self.glyphs
    }

    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    pub fn arcs_mut(&mut self) -> &mut Vec<Arc> {
        &mut self.arcs
    }

    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    pub fn set_language(&mut self, language: Option<String>) {
        self.language = language;
    }

    pub fn add_glyph(&mut self, glyph: Glyph) {
        self.glyphs.push(glyph);
    }

    pub fn add_arc(&mut self, arc: Arc) {
        self.arcs.push(arc);
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_glyph(mut self, glyph: Glyph) -> Self {
        self.glyphs.push(glyph);
        self
    }

    pub fn with_arc(mut self, arc: Arc) -> Self {
        self.arcs.push(arc);
        self
    }

    /// Finds a glyph anywhere in the map by id.
    ///
    /// Top-level glyphs and their members are searched first, in document
    /// order, then the decoration glyphs of each arc.
    pub fn glyph_by_id(&self, id: &str) -> Option<&Glyph> {
        fn find_in<'a>(glyphs: &'a [Glyph], id: &str) -> Option<&'a Glyph> {
            glyphs.iter().find_map(|glyph| {
                if glyph.id() == Some(id) {
                    Some(glyph)
                } else {
                    glyph.find_member(id)
                }
            })
        }

        find_in(&self.glyphs, id)
            .or_else(|| self.arcs.iter().find_map(|arc| find_in(arc.glyphs(), id)))
    }

    pub fn arc_by_id(&self, id: &str) -> Option<&Arc> {
        self.arcs.iter().find(|arc| arc.id() == Some(id))
    }

    /// Finds a port on any glyph of the map, members included.
    pub fn port_by_id(&self, id: &str) -> Option<&Port> {
        self.glyphs.iter().find_map(|glyph| glyph.find_port(id))
    }

    /// Total number of ports on all glyphs of the map, members included.
    pub fn port_count(&self) -> usize {
        fn count(glyph: &Glyph) -> usize {
            glyph.ports().len() + glyph.glyph_members().iter().map(count).sum::<usize>()
        }
        self.glyphs.iter().map(count).sum()
    }
}

impl SbgnElement for Map {
    const TAG: &'static str = "map";
    const ATTRIBUTES: &'static [&'static str] = &["id", "language"];

    fn from_node(node: &XmlNode) -> Result<Self> {
        expect_tag(node, Self::TAG)?;
        let mut map = Self {
            base: ElementBase::default(),
            id: get_str(node, "id"),
            language: get_str(node, "language"),
            glyphs: parse_all(node)?,
            arcs: parse_all(node)?,
        };
        map.base.populate_from_parsed(node)?;
        Ok(map)
    }

    fn to_node(&self) -> XmlNode {
        let mut node = XmlNode::new(Self::TAG);
        set_opt_str(&mut node, "id", self.id());
        set_opt_str(&mut node, "language", self.language());

        self.base.contribute_to_build(&mut node);
        for glyph in &self.glyphs {
            node.push_child(glyph.to_node());
        }
        for arc in &self.arcs {
            node.push_child(arc.to_node());
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Extensible;
    use crate::error::SbgnError;
    use crate::model::{Bbox, Port};

    #[test]
    fn test_parse_single_glyph_with_bbox() {
        let map = Map::from_xml(
            r#"<map><glyph id="g1" class="macromolecule"><bbox x="10" y="10" w="20" h="20"/></glyph></map>"#,
        )
        .unwrap();

        assert_eq!(map.glyphs().len(), 1);
        let glyph = &map.glyphs()[0];
        assert_eq!(glyph.id(), Some("g1"));
        assert_eq!(glyph.class(), Some("macromolecule"));

        let bbox = glyph.bbox().expect("bbox");
        assert_eq!(
            (bbox.x(), bbox.y(), bbox.w(), bbox.h()),
            (Some(10.0), Some(10.0), Some(20.0), Some(20.0))
        );
    }

    #[test]
    fn test_arc_glyphs_are_not_top_level() {
        let map = Map::from_xml(
            "<map>\
                <glyph id='g1'/>\
                <arc id='a1'><glyph id='card'/></arc>\
                <glyph id='g2'/>\
            </map>",
        )
        .unwrap();

        let ids: Vec<_> = map.glyphs().iter().map(Glyph::id).collect();
        assert_eq!(ids, vec![Some("g1"), Some("g2")]);
        assert_eq!(map.arcs().len(), 1);
        assert_eq!(map.arcs()[0].glyphs().len(), 1);
    }

    #[test]
    fn test_write_extension_before_glyphs_and_arcs() {
        let source = r#"<map id="m" language="process description"><extension><note/></extension><glyph id="g1"/><arc id="a1"/></map>"#;
        let map = Map::from_xml(source).unwrap();
        assert!(map.extension().is_some());
        assert_eq!(map.to_xml(), source);
    }

    #[test]
    fn test_lookup_helpers() {
        let map = Map::new()
            .with_glyph(
                Glyph::new()
                    .with_id("complex")
                    .with_glyph_member(
                        Glyph::new()
                            .with_id("member")
                            .with_port(Port::new("p-member", 0.0, 0.0)),
                    ),
            )
            .with_glyph(
                Glyph::new()
                    .with_id("process")
                    .with_port(Port::new("p1", 1.0, 1.0)),
            )
            .with_arc(
                Arc::new()
                    .with_id("a1")
                    .with_glyph(Glyph::new().with_id("cardinality")),
            );

        assert_eq!(map.glyph_by_id("member").and_then(Glyph::id), Some("member"));
        assert_eq!(map.glyph_by_id("cardinality").and_then(Glyph::id), Some("cardinality"));
        assert!(map.glyph_by_id("nope").is_none());
        assert_eq!(map.arc_by_id("a1").and_then(Arc::id), Some("a1"));
        assert!(map.arc_by_id("a2").is_none());
        assert_eq!(map.port_by_id("p-member").and_then(|p| p.x()), Some(0.0));
        assert_eq!(map.port_count(), 2);
    }

    #[test]
    fn test_wrong_tag() {
        let err = Map::from_xml("<glyph/>").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Bad XML provided: expected element `map`, found `glyph`"
        );
        assert!(matches!(err, SbgnError::Structure(_)));
    }

    #[test]
    fn test_prefixed_children_are_read() {
        let map = Map::from_xml(
            "<s:map xmlns:s='http://sbgn.org/libsbgn/0.3'><s:glyph id='g'><s:bbox x='1'/></s:glyph></s:map>",
        )
        .unwrap();
        assert_eq!(map.glyphs()[0].bbox().and_then(Bbox::x), Some(1.0));
    }
}
