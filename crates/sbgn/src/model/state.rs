//! The `<state>` element of a state-variable glyph.

use sbgn_xml::XmlNode;

use crate::coerce::{get_str, set_opt_str};
use crate::element::{SbgnElement, expect_tag};
use crate::error::Result;

/// Represents the `<state>` element: a free-form value/variable pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateType {
    value: Option<String>,
    variable: Option<String>,
}

impl StateType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn variable(&self) -> Option<&str> {
        self.variable.as_deref()
    }

    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    pub fn set_variable(&mut self, variable: Option<String>) {
        self.variable = variable;
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = Some(variable.into());
        self
    }
}

impl SbgnElement for StateType {
    const TAG: &'static str = "state";
    const ATTRIBUTES: &'static [&'static str] = &["value", "variable"];

    fn from_node(node: &XmlNode) -> Result<Self> {
        expect_tag(node, Self::TAG)?;
        Ok(Self {
            value: get_str(node, "value"),
            variable: get_str(node, "variable"),
        })
    }

    fn to_node(&self) -> XmlNode {
        let mut node = XmlNode::new(Self::TAG);
        set_opt_str(&mut node, "value", self.value());
        set_opt_str(&mut node, "variable", self.variable());
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SbgnError;

    #[test]
    fn test_parse_empty() {
        let state = StateType::from_xml("<state />").unwrap();
        assert_eq!(state.value(), None);
        assert_eq!(state.variable(), None);
    }

    #[test]
    fn test_parse_complete() {
        let state = StateType::from_xml("<state value='P' variable='S123' />").unwrap();
        assert_eq!(state.value(), Some("P"));
        assert_eq!(state.variable(), Some("S123"));
    }

    #[test]
    fn test_parse_wrong_tag() {
        let err = StateType::from_xml("<clone />").unwrap_err();
        assert!(matches!(err, SbgnError::Structure(ref msg) if msg.contains("`clone`")));
    }

    #[test]
    fn test_write_empty() {
        assert_eq!(StateType::new().to_xml(), "<state/>");
    }

    #[test]
    fn test_write_complete() {
        let state = StateType::new().with_value("P").with_variable("S123");
        assert_eq!(state.to_xml(), r#"<state value="P" variable="S123"/>"#);
    }

    #[test]
    fn test_from_attributes_rejects_unknown() {
        let err = StateType::from_attributes([("value", "P"), ("label", "x")]).unwrap_err();
        assert!(matches!(
            err,
            SbgnError::Config { element: "state", ref fields } if fields == &["label".to_string()]
        ));
    }
}
