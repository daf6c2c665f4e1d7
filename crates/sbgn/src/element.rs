//! The per-element parse/build contract shared by every SBGN-ML type.

use sbgn_xml::{WriteOptions, XmlNode};

use crate::coerce;
use crate::error::{Result, SbgnError};

/// An element that can be read from and written to an [`XmlNode`] subtree.
///
/// Implementors supply the tag name, the attribute names they accept, and the
/// two tree conversions. Text-level entry points and construction from a
/// configuration record come for free.
///
/// # Examples
///
/// ```
/// use sbgn::{Bbox, SbgnElement};
///
/// let bbox = Bbox::from_xml(r#"<bbox x="10" y="10" w="20" h="20"/>"#).unwrap();
/// assert_eq!(bbox.w(), Some(20.0));
/// assert_eq!(bbox.to_xml(), r#"<bbox x="10" y="10" w="20" h="20"/>"#);
///
/// let partial = Bbox::from_attributes([("x", "1"), ("y", "oops")]).unwrap();
/// assert_eq!(partial.to_xml(), r#"<bbox x="1"/>"#);
/// ```
pub trait SbgnElement: Sized {
    /// Local tag name of the element.
    const TAG: &'static str;

    /// Attribute names accepted by [`SbgnElement::from_attributes`].
    const ATTRIBUTES: &'static [&'static str];

    /// Builds the element from its own subtree.
    ///
    /// # Errors
    ///
    /// Returns [`SbgnError::Structure`] if the node is not tagged [`Self::TAG`],
    /// or if a nested element fails to parse.
    fn from_node(node: &XmlNode) -> Result<Self>;

    /// Builds the subtree representing this element. Absent values are omitted.
    fn to_node(&self) -> XmlNode;

    /// Parses XML text whose root element is this element.
    fn from_xml(text: &str) -> Result<Self> {
        let node = sbgn_xml::parse(text)?;
        Self::from_node(&node)
    }

    /// Serializes the element to compact XML text.
    fn to_xml(&self) -> String {
        self.to_xml_with(&WriteOptions::default())
    }

    /// Serializes the element to XML text with the given formatting.
    fn to_xml_with(&self, options: &WriteOptions) -> String {
        sbgn_xml::to_string(&self.to_node(), options)
    }

    /// Creates the element from a record of attribute names and values.
    ///
    /// Values are coerced exactly as when parsing, so a malformed number
    /// simply reads as absent.
    ///
    /// # Errors
    ///
    /// Returns [`SbgnError::Config`] listing every name not in [`Self::ATTRIBUTES`].
    fn from_attributes<I, K, V>(record: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let node = coerce::check_params(Self::TAG, Self::ATTRIBUTES, record)?;
        Self::from_node(&node)
    }
}

/// Fails with [`SbgnError::Structure`] unless `node` is tagged `tag`.
pub(crate) fn expect_tag(node: &XmlNode, tag: &str) -> Result<()> {
    if node.local_name() == tag {
        Ok(())
    } else {
        Err(SbgnError::unexpected_element(tag, node.name()))
    }
}

/// Parses every direct child tagged `E::TAG`, in document order.
pub(crate) fn parse_all<E: SbgnElement>(node: &XmlNode) -> Result<Vec<E>> {
    node.children(E::TAG).iter().map(E::from_node).collect()
}

/// Parses the first direct child tagged `E::TAG`, ignoring any further ones.
pub(crate) fn parse_first<E: SbgnElement>(node: &XmlNode) -> Result<Option<E>> {
    node.first_child(E::TAG).map(E::from_node).transpose()
}
