//! XML text to [`XmlNode`] conversion.
//!
//! Whitespace policy:
//! - Whitespace-only text and CDATA runs are indentation and are dropped.
//! - Any other character data is kept exactly, unescaped.
//! - Declarations, comments, processing instructions and doctypes are ignored.

use std::str;

use log::trace;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{Result, XmlError};
use crate::node::XmlNode;

/// Parses a complete XML document into its root element.
///
/// # Errors
///
/// Returns [`XmlError`] when the text is not well-formed (mismatched end tags,
/// bad attributes, unclosed elements) or does not contain exactly one root
/// element.
///
/// # Examples
///
/// ```
/// let root = sbgn_xml::parse(r#"<map id="m"><glyph id="g1"/><glyph id="g2"/></map>"#).unwrap();
/// assert_eq!(root.name(), "map");
/// assert_eq!(root.children("glyph").len(), 2);
/// ```
pub fn parse(text: &str) -> Result<XmlNode> {
    let mut reader = Reader::from_str(text);
    // Whitespace-only runs are dropped in `push_text` instead.
    reader.config_mut().trim_text(false);

    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                stack.push(start_node(&e)?);
            }
            Event::Empty(e) => {
                let node = start_node(&e)?;
                attach(node, &mut stack, &mut root)?;
            }
            Event::End(_) => {
                let node = stack.pop().ok_or_else(|| {
                    XmlError::Structure("closing tag without matching opening tag".into())
                })?;
                attach(node, &mut stack, &mut root)?;
            }
            Event::Text(t) => {
                let txt = t.unescape()?;
                push_text(&mut stack, &txt);
            }
            Event::CData(c) => {
                let txt = c.decode()?;
                push_text(&mut stack, &txt);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlError::Structure(format!(
            "unclosed element `{}` at end of input",
            open.name()
        )));
    }

    let root = root.ok_or_else(|| XmlError::Structure("no root element found".into()))?;
    trace!(root = root.name(); "Parsed XML document");
    Ok(root)
}

fn start_node(e: &BytesStart<'_>) -> Result<XmlNode> {
    let qname = e.name();
    let name = str::from_utf8(qname.as_ref())?;
    let mut node = XmlNode::new(name);
    for attr in e.attributes() {
        let attr = attr?;
        let key = str::from_utf8(attr.key.as_ref())?;
        let value = attr.unescape_value()?;
        node.set_attribute(key, value.into_owned());
    }
    Ok(node)
}

fn attach(node: XmlNode, stack: &mut [XmlNode], root: &mut Option<XmlNode>) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.push_child(node);
        return Ok(());
    }
    if let Some(existing) = root {
        return Err(XmlError::Structure(format!(
            "multiple root elements: `{}` follows `{}`",
            node.name(),
            existing.name()
        )));
    }
    *root = Some(node);
    Ok(())
}

fn push_text(stack: &mut [XmlNode], txt: &str) {
    if txt.trim().is_empty() {
        // formatting-only
        return;
    }
    // Text outside the root element carries no meaning for the tree.
    if let Some(current) = stack.last_mut() {
        current.append_text(txt);
    }
}
