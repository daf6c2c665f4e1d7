//! [`XmlNode`] to XML text conversion.

use std::io;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use serde::Deserialize;

use crate::node::XmlNode;

/// Output formatting options.
///
/// All fields default to compact output without an XML declaration, which is
/// what the element-level `to_xml` methods produce.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WriteOptions {
    /// Number of spaces per nesting level. `None` writes everything on one line.
    #[serde(default)]
    indent: Option<usize>,

    /// Prefix the output with `<?xml version="1.0" encoding="UTF-8"?>`.
    #[serde(default)]
    xml_declaration: bool,
}

impl WriteOptions {
    /// Creates options with the given indentation and declaration settings.
    pub fn new(indent: Option<usize>, xml_declaration: bool) -> Self {
        Self {
            indent,
            xml_declaration,
        }
    }

    pub fn indent(&self) -> Option<usize> {
        self.indent
    }

    pub fn xml_declaration(&self) -> bool {
        self.xml_declaration
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = Some(indent);
        self
    }

    pub fn with_xml_declaration(mut self, xml_declaration: bool) -> Self {
        self.xml_declaration = xml_declaration;
        self
    }
}

/// Serializes a node tree to XML text.
///
/// Elements with neither children nor text are written self-closing. Child
/// groups are written in the order they were first added.
///
/// # Examples
///
/// ```
/// use sbgn_xml::{WriteOptions, XmlNode};
///
/// let node = XmlNode::new("colorDefinition").with_attribute("id", "blue");
/// assert_eq!(
///     sbgn_xml::to_string(&node, &WriteOptions::default()),
///     r#"<colorDefinition id="blue"/>"#
/// );
/// ```
pub fn to_string(node: &XmlNode, options: &WriteOptions) -> String {
    let bytes = write_document(node, options)
        .expect("Writing to an in-memory buffer is infallible");
    String::from_utf8(bytes).expect("Writer only receives UTF-8 input")
}

fn write_document(node: &XmlNode, options: &WriteOptions) -> io::Result<Vec<u8>> {
    let mut writer = match options.indent {
        Some(width) => Writer::new_with_indent(Vec::new(), b' ', width),
        None => Writer::new(Vec::new()),
    };

    if options.xml_declaration {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    }
    write_node(&mut writer, node)?;

    Ok(writer.into_inner())
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &XmlNode) -> io::Result<()> {
    let mut start = BytesStart::new(node.name());
    for (key, value) in node.attributes() {
        start.push_attribute((key, value));
    }

    if node.is_empty_element() {
        return writer.write_event(Event::Empty(start));
    }

    writer.write_event(Event::Start(start))?;
    if let Some(text) = node.text() {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }
    for (_, group) in node.child_groups() {
        for child in group {
            write_node(writer, child)?;
        }
    }
    writer.write_event(Event::End(BytesEnd::new(node.name())))
}
