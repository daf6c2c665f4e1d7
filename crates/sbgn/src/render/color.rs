//! Named colors: `<colorDefinition>` and `<listOfColorDefinitions>`.

use indexmap::IndexMap;

use sbgn_xml::XmlNode;

use crate::coerce::{get_str, set_opt_str};
use crate::element::{SbgnElement, expect_tag, parse_all};
use crate::error::Result;

/// Represents the `<colorDefinition>` element: a color value under an id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorDefinition {
    id: Option<String>,
    value: Option<String>,
}

impl ColorDefinition {
    /// Creates a definition binding `id` to the color `value` (e.g. `#FFFFFF`).
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            value: Some(value.into()),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }
}

impl SbgnElement for ColorDefinition {
    const TAG: &'static str = "colorDefinition";
    const ATTRIBUTES: &'static [&'static str] = &["id", "value"];

    fn from_node(node: &XmlNode) -> Result<Self> {
        expect_tag(node, Self::TAG)?;
        Ok(Self {
            id: get_str(node, "id"),
            value: get_str(node, "value"),
        })
    }

    fn to_node(&self) -> XmlNode {
        let mut node = XmlNode::new(Self::TAG);
        set_opt_str(&mut node, "id", self.id());
        set_opt_str(&mut node, "value", self.value());
        node
    }
}

/// Represents the `<listOfColorDefinitions>` element.
///
/// Keeps an index from color id to color value alongside the definitions.
/// Only definitions carrying both an id and a value are indexed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListOfColorDefinitions {
    color_definitions: Vec<ColorDefinition>,
    color_index: IndexMap<String, String>,
}

impl ListOfColorDefinitions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color_definitions(&self) -> &[ColorDefinition] {
        &self.color_definitions
    }

    pub fn add_color_definition(&mut self, definition: ColorDefinition) {
        if let (Some(id), Some(value)) = (definition.id(), definition.value()) {
            self.color_index.insert(id.to_string(), value.to_string());
        }
        self.color_definitions.push(definition);
    }

    /// Looks up a color value by its id.
    pub fn color_by_id(&self, id: &str) -> Option<&str> {
        self.color_index.get(id).map(String::as_str)
    }

    /// All indexed color values, in the order their ids were first defined.
    pub fn all_colors(&self) -> Vec<&str> {
        self.color_index.values().map(String::as_str).collect()
    }
}

impl SbgnElement for ListOfColorDefinitions {
    const TAG: &'static str = "listOfColorDefinitions";
    const ATTRIBUTES: &'static [&'static str] = &[];

    fn from_node(node: &XmlNode) -> Result<Self> {
        expect_tag(node, Self::TAG)?;
        let mut list = Self::new();
        for definition in parse_all(node)? {
            list.add_color_definition(definition);
        }
        Ok(list)
    }

    fn to_node(&self) -> XmlNode {
        let mut node = XmlNode::new(Self::TAG);
        for definition in &self.color_definitions {
            node.push_child(definition.to_node());
        }
        node
    }
}
