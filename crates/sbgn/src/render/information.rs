//! The `<renderInformation>` extension payload.

use sbgn_xml::XmlNode;

use crate::coerce::{get_str, set_opt_str};
use crate::element::{SbgnElement, expect_tag, parse_first};
use crate::error::Result;
use crate::render::{ListOfColorDefinitions, ListOfStyles, RENDER_NAMESPACE};

/// Represents the `<renderInformation>` element.
///
/// A parsed payload without an `xmlns` attribute falls back to
/// [`RENDER_NAMESPACE`], so the namespace is always written.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderInformation {
    xmlns: Option<String>,
    id: Option<String>,
    name: Option<String>,
    program_name: Option<String>,
    program_version: Option<String>,
    background_color: Option<String>,
    list_of_color_definitions: Option<ListOfColorDefinitions>,
    list_of_styles: Option<ListOfStyles>,
}

impl Default for RenderInformation {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderInformation {
    pub fn new() -> Self {
        Self {
            xmlns: Some(RENDER_NAMESPACE.to_string()),
            id: None,
            name: None,
            program_name: None,
            program_version: None,
            background_color: None,
            list_of_color_definitions: None,
            list_of_styles: None,
        }
    }

    pub fn xmlns(&self) -> Option<&str> {
        self.xmlns.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn program_name(&self) -> Option<&str> {
        self.program_name.as_deref()
    }

    pub fn program_version(&self) -> Option<&str> {
        self.program_version.as_deref()
    }

    /// Background color, either a color value or a color definition id.
    pub fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref()
    }

    pub fn list_of_color_definitions(&self) -> Option<&ListOfColorDefinitions> {
        self.list_of_color_definitions.as_ref()
    }

    pub fn list_of_styles(&self) -> Option<&ListOfStyles> {
        self.list_of_styles.as_ref()
    }

    pub fn set_xmlns(&mut self, xmlns: Option<String>) {
        self.xmlns = xmlns;
    }

    pub fn set_list_of_color_definitions(&mut self, list: ListOfColorDefinitions) {
        self.list_of_color_definitions = Some(list);
    }

    pub fn set_list_of_styles(&mut self, list: ListOfStyles) {
        self.list_of_styles = Some(list);
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_program(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.program_name = Some(name.into());
        self.program_version = Some(version.into());
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Resolves the background color through the color definitions, if it names one.
    pub fn resolved_background_color(&self) -> Option<&str> {
        let color = self.background_color()?;
        self.list_of_color_definitions
            .as_ref()
            .and_then(|list| list.color_by_id(color))
            .or(Some(color))
    }
}

impl SbgnElement for RenderInformation {
    const TAG: &'static str = "renderInformation";
    const ATTRIBUTES: &'static [&'static str] = &[
        "xmlns",
        "id",
        "name",
        "programName",
        "programVersion",
        "backgroundColor",
    ];

    fn from_node(node: &XmlNode) -> Result<Self> {
        expect_tag(node, Self::TAG)?;
        Ok(Self {
            xmlns: get_str(node, "xmlns").or_else(|| Some(RENDER_NAMESPACE.to_string())),
            id: get_str(node, "id"),
            name: get_str(node, "name"),
            program_name: get_str(node, "programName"),
            program_version: get_str(node, "programVersion"),
            background_color: get_str(node, "backgroundColor"),
            list_of_color_definitions: parse_first(node)?,
            list_of_styles: parse_first(node)?,
        })
    }

    fn to_node(&self) -> XmlNode {
        let mut node = XmlNode::new(Self::TAG);
        set_opt_str(&mut node, "xmlns", self.xmlns());
        set_opt_str(&mut node, "id", self.id());
        set_opt_str(&mut node, "name", self.name());
        set_opt_str(&mut node, "programName", self.program_name());
        set_opt_str(&mut node, "programVersion", self.program_version());
        set_opt_str(&mut node, "backgroundColor", self.background_color());
        if let Some(list) = &self.list_of_color_definitions {
            node.push_child(list.to_node());
        }
        if let Some(list) = &self.list_of_styles {
            node.push_child(list.to_node());
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ColorDefinition;

    #[test]
    fn test_parse_empty() {
        let info = RenderInformation::from_xml("<renderInformation></renderInformation>").unwrap();
        assert_eq!(info.id(), None);
        assert_eq!(info.name(), None);
        assert_eq!(info.program_name(), None);
        assert_eq!(info.program_version(), None);
        assert_eq!(info.background_color(), None);
        assert!(info.list_of_color_definitions().is_none());
        assert!(info.list_of_styles().is_none());
        assert_eq!(info.xmlns(), Some(RENDER_NAMESPACE));
    }

    #[test]
    fn test_parse_attributes() {
        let info = RenderInformation::from_xml(
            "<renderInformation id='a' name='name' programName='prog' \
             programVersion='2.0.1a' backgroundColor='#FFFFFF'></renderInformation>",
        )
        .unwrap();
        assert_eq!(info.id(), Some("a"));
        assert_eq!(info.name(), Some("name"));
        assert_eq!(info.program_name(), Some("prog"));
        assert_eq!(info.program_version(), Some("2.0.1a"));
        assert_eq!(info.background_color(), Some("#FFFFFF"));
    }

    #[test]
    fn test_parse_children() {
        let info = RenderInformation::from_xml(
            "<renderInformation><listOfColorDefinitions></listOfColorDefinitions>\
             <listOfStyles></listOfStyles></renderInformation>",
        )
        .unwrap();
        assert!(info.list_of_color_definitions().is_some());
        assert!(info.list_of_styles().is_some());
    }

    #[test]
    fn test_write_empty() {
        assert_eq!(
            RenderInformation::new().to_xml(),
            r#"<renderInformation xmlns="http://www.sbml.org/sbml/level3/version1/render/version1"/>"#
        );
    }

    #[test]
    fn test_write_complete_with_empty_children() {
        let mut info = RenderInformation::from_attributes([
            ("id", "id"),
            ("name", "name"),
            ("programName", "prog"),
            ("programVersion", "0.0.0"),
            ("backgroundColor", "blue"),
        ])
        .unwrap();
        info.set_list_of_color_definitions(ListOfColorDefinitions::new());
        info.set_list_of_styles(ListOfStyles::new());

        assert_eq!(
            info.to_xml(),
            concat!(
                r#"<renderInformation xmlns="http://www.sbml.org/sbml/level3/version1/render/version1""#,
                r#" id="id" name="name" programName="prog" programVersion="0.0.0" backgroundColor="blue">"#,
                "<listOfColorDefinitions/>",
                "<listOfStyles/>",
                "</renderInformation>"
            )
        );
    }

    #[test]
    fn test_from_attributes_keeps_default_namespace() {
        let info = RenderInformation::from_attributes([("id", "r")]).unwrap();
        assert_eq!(info.xmlns(), Some(RENDER_NAMESPACE));
    }

    #[test]
    fn test_resolved_background_color() {
        let mut colors = ListOfColorDefinitions::new();
        colors.add_color_definition(ColorDefinition::new("bg", "#EEEEEE"));

        let mut info = RenderInformation::new().with_background_color("bg");
        assert_eq!(info.resolved_background_color(), Some("bg"));

        info.set_list_of_color_definitions(colors);
        assert_eq!(info.resolved_background_color(), Some("#EEEEEE"));

        let literal = RenderInformation::new().with_background_color("#000000");
        assert_eq!(literal.resolved_background_color(), Some("#000000"));
    }
}
