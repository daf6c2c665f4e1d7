//! The nested element tree produced by [`parse`](crate::parse) and consumed by
//! [`to_string`](crate::to_string).
//!
//! An [`XmlNode`] mirrors the classic "xml2js" shape: attributes live in one
//! ordered map, and children are grouped by tag name, each group keeping its
//! occurrences in document order. Interleaving *between* different tag names
//! is not tracked.

use indexmap::IndexMap;

/// One XML element with its attributes, grouped children and text content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlNode {
    name: String,
    attributes: IndexMap<String, String>,
    children: IndexMap<String, Vec<XmlNode>>,
    text: Option<String>,
}

impl XmlNode {
    /// Creates an element with the given (possibly prefixed) tag name.
    ///
    /// # Examples
    ///
    /// ```
    /// use sbgn_xml::XmlNode;
    ///
    /// let node = XmlNode::new("rdf:RDF");
    /// assert_eq!(node.name(), "rdf:RDF");
    /// assert_eq!(node.local_name(), "RDF");
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The qualified tag name, exactly as written.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tag name without its namespace prefix.
    pub fn local_name(&self) -> &str {
        local_part(&self.name)
    }

    /// Returns the value of the attribute `name`, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Sets an attribute, keeping its original position if it already existed.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Builder variant of [`XmlNode::set_attribute`].
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// All attributes in document (or insertion) order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    /// Direct children whose local name is `local_name`, in document order.
    pub fn children(&self, local_name: &str) -> &[XmlNode] {
        self.children
            .get(local_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The first direct child whose local name is `local_name`.
    pub fn first_child(&self, local_name: &str) -> Option<&XmlNode> {
        self.children(local_name).first()
    }

    /// Appends a child to the group keyed by the child's local name.
    pub fn push_child(&mut self, child: XmlNode) {
        let key = child.local_name().to_string();
        self.children.entry(key).or_default().push(child);
    }

    /// Replaces the children stored under `local_name`.
    ///
    /// An existing group keeps its position among the other groups; a new one
    /// is appended. An empty `children` removes the group.
    pub fn set_children(&mut self, local_name: &str, children: Vec<XmlNode>) {
        if children.is_empty() {
            self.children.shift_remove(local_name);
        } else {
            self.children.insert(local_name.to_string(), children);
        }
    }

    /// Builder variant of [`XmlNode::push_child`].
    pub fn with_child(mut self, child: XmlNode) -> Self {
        self.push_child(child);
        self
    }

    /// Child groups as `(local_name, occurrences)` in first-seen order.
    pub fn child_groups(&self) -> impl Iterator<Item = (&str, &[XmlNode])> {
        self.children
            .iter()
            .map(|(name, nodes)| (name.as_str(), nodes.as_slice()))
    }

    /// Returns `true` if the element has at least one child element.
    pub fn has_children(&self) -> bool {
        self.children.values().any(|group| !group.is_empty())
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Appends character data, used while reading split text runs.
    pub(crate) fn append_text(&mut self, chunk: &str) {
        match self.text.as_mut() {
            Some(existing) => existing.push_str(chunk),
            None => self.text = Some(chunk.to_string()),
        }
    }

    /// Returns `true` if the element would be written as a self-closing tag.
    pub fn is_empty_element(&self) -> bool {
        !self.has_children() && self.text.is_none()
    }
}

/// Strips a namespace prefix from a qualified name.
///
/// # Examples
///
/// ```
/// use sbgn_xml::local_part;
///
/// assert_eq!(local_part("rdf:about"), "about");
/// assert_eq!(local_part("id"), "id");
/// ```
pub fn local_part(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_are_grouped_by_local_name() {
        let mut node = XmlNode::new("glyph");
        node.push_child(XmlNode::new("port").with_attribute("id", "p1"));
        node.push_child(XmlNode::new("glyph").with_attribute("id", "g2"));
        node.push_child(XmlNode::new("port").with_attribute("id", "p2"));

        let groups: Vec<_> = node.child_groups().map(|(name, nodes)| (name, nodes.len())).collect();
        assert_eq!(groups, vec![("port", 2), ("glyph", 1)]);
        assert_eq!(node.children("port")[1].attribute("id"), Some("p2"));
    }

    #[test]
    fn test_prefixed_children_use_local_key() {
        let node = XmlNode::new("annotation").with_child(XmlNode::new("rdf:RDF"));

        assert_eq!(node.children("RDF").len(), 1);
        assert_eq!(node.children("RDF")[0].name(), "rdf:RDF");
        assert!(node.children("rdf:RDF").is_empty());
    }

    #[test]
    fn test_missing_children_is_empty_slice() {
        let node = XmlNode::new("map");
        assert!(node.children("glyph").is_empty());
        assert!(node.first_child("glyph").is_none());
        assert!(node.is_empty_element());
    }

    #[test]
    fn test_set_attribute_keeps_position() {
        let mut node = XmlNode::new("bbox")
            .with_attribute("x", "1")
            .with_attribute("y", "2");
        node.set_attribute("x", "3");

        let attrs: Vec<_> = node.attributes().collect();
        assert_eq!(attrs, vec![("x", "3"), ("y", "2")]);
    }

    #[test]
    fn test_set_children_keeps_group_position() {
        let mut node = XmlNode::new("annotation")
            .with_child(XmlNode::new("note"))
            .with_child(XmlNode::new("rdf:RDF"))
            .with_child(XmlNode::new("extra"));
        node.set_children("note", vec![XmlNode::new("note").with_attribute("n", "2")]);
        node.set_children("RDF", Vec::new());

        let groups: Vec<_> = node.child_groups().map(|(name, _)| name).collect();
        assert_eq!(groups, vec!["note", "extra"]);
        assert_eq!(node.children("note")[0].attribute("n"), Some("2"));
    }

    #[test]
    fn test_text_makes_element_non_empty() {
        let mut node = XmlNode::new("notes");
        node.set_text("hello");
        assert!(!node.is_empty_element());
        assert_eq!(node.text(), Some("hello"));
    }
}
