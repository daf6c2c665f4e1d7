//! Styles: `<style>` and `<listOfStyles>`.

use indexmap::IndexMap;

use sbgn_xml::XmlNode;

use crate::coerce::{get_str, set_opt_str};
use crate::element::{SbgnElement, expect_tag, parse_all, parse_first};
use crate::error::Result;
use crate::render::RenderGroup;

/// Represents the `<style>` element: a render group applied to a list of element ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    id: Option<String>,
    name: Option<String>,
    id_list: Option<String>,
    render_group: Option<RenderGroup>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The raw, space-separated list of ids the style applies to.
    pub fn id_list(&self) -> Option<&str> {
        self.id_list.as_deref()
    }

    pub fn render_group(&self) -> Option<&RenderGroup> {
        self.render_group.as_ref()
    }

    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn set_id_list(&mut self, id_list: Option<String>) {
        self.id_list = id_list;
    }

    pub fn set_render_group(&mut self, render_group: RenderGroup) {
        self.render_group = Some(render_group);
    }

    pub fn with_id_list(mut self, id_list: impl Into<String>) -> Self {
        self.id_list = Some(id_list.into());
        self
    }

    pub fn with_render_group(mut self, render_group: RenderGroup) -> Self {
        self.render_group = Some(render_group);
        self
    }

    /// Splits the id list on whitespace.
    pub fn id_list_as_vec(&self) -> Vec<&str> {
        self.id_list
            .as_deref()
            .map(|list| list.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Replaces the id list with `ids` joined by single spaces.
    pub fn set_id_list_from<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = ids
            .into_iter()
            .map(|id| id.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        self.id_list = Some(joined);
    }

    /// Maps every listed id to this style's render group.
    ///
    /// Empty when the style has no render group.
    pub fn style_map(&self) -> IndexMap<String, &RenderGroup> {
        let Some(group) = &self.render_group else {
            return IndexMap::new();
        };
        self.id_list_as_vec()
            .into_iter()
            .map(|id| (id.to_string(), group))
            .collect()
    }
}

impl SbgnElement for Style {
    const TAG: &'static str = "style";
    const ATTRIBUTES: &'static [&'static str] = &["id", "name", "idList"];

    fn from_node(node: &XmlNode) -> Result<Self> {
        expect_tag(node, Self::TAG)?;
        Ok(Self {
            id: get_str(node, "id"),
            name: get_str(node, "name"),
            id_list: get_str(node, "idList"),
            render_group: parse_first(node)?,
        })
    }

    fn to_node(&self) -> XmlNode {
        let mut node = XmlNode::new(Self::TAG);
        set_opt_str(&mut node, "id", self.id());
        set_opt_str(&mut node, "name", self.name());
        set_opt_str(&mut node, "idList", self.id_list());
        if let Some(group) = &self.render_group {
            node.push_child(group.to_node());
        }
        node
    }
}

/// Represents the `<listOfStyles>` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListOfStyles {
    styles: Vec<Style>,
}

impl ListOfStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    pub fn add_style(&mut self, style: Style) {
        self.styles.push(style);
    }

    /// Merges the style maps of all styles in order.
    ///
    /// An id listed by several styles maps to the group of the last one.
    pub fn style_map(&self) -> IndexMap<String, &RenderGroup> {
        let mut map = IndexMap::new();
        for style in &self.styles {
            map.extend(style.style_map());
        }
        map
    }
}

impl SbgnElement for ListOfStyles {
    const TAG: &'static str = "listOfStyles";
    const ATTRIBUTES: &'static [&'static str] = &[];

    fn from_node(node: &XmlNode) -> Result<Self> {
        expect_tag(node, Self::TAG)?;
        Ok(Self {
            styles: parse_all(node)?,
        })
    }

    fn to_node(&self) -> XmlNode {
        let mut node = XmlNode::new(Self::TAG);
        for style in &self.styles {
            node.push_child(style.to_node());
        }
        node
    }
}
