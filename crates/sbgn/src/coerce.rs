//! Attribute coercion helpers.
//!
//! Reading is permissive: a numeric attribute that is missing, empty or not a
//! finite number reads as absent. String attributes are read as written, so an
//! empty value stays distinct from a missing one. Writing is strict: absent
//! values are never written.

use sbgn_xml::XmlNode;

use crate::error::{Result, SbgnError};

/// Parses a numeric attribute, yielding `None` for anything that isn't a finite number.
///
/// # Examples
///
/// ```
/// use sbgn::coerce::parse_number;
///
/// assert_eq!(parse_number(Some("10")), Some(10.0));
/// assert_eq!(parse_number(Some(" 2.5 ")), Some(2.5));
/// assert_eq!(parse_number(Some("ten")), None);
/// assert_eq!(parse_number(Some("NaN")), None);
/// assert_eq!(parse_number(None), None);
/// ```
pub fn parse_number(value: Option<&str>) -> Option<f64> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|number| number.is_finite())
}

/// Formats a number in its shortest round-trip form (`10`, `10.5`).
pub fn format_number(value: f64) -> String {
    format!("{value}")
}

/// Reads a string attribute. An empty value is kept as `Some("")`.
pub fn get_str(node: &XmlNode, name: &str) -> Option<String> {
    node.attribute(name).map(str::to_string)
}

/// Reads a numeric attribute permissively.
pub fn get_num(node: &XmlNode, name: &str) -> Option<f64> {
    parse_number(node.attribute(name))
}

/// Writes a string attribute if present.
pub fn set_opt_str(node: &mut XmlNode, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        node.set_attribute(name, value);
    }
}

/// Writes a numeric attribute if present.
pub fn set_opt_num(node: &mut XmlNode, name: &str, value: Option<f64>) {
    if let Some(value) = value {
        node.set_attribute(name, format_number(value));
    }
}

/// Validates a configuration record against the attribute names an element accepts.
///
/// On success the record is returned as an attribute-only node tagged `tag`, ready
/// to be read by the element's own parser. Every unknown field name is reported
/// at once.
///
/// # Errors
///
/// Returns [`SbgnError::Config`] listing all unrecognized field names.
///
/// # Examples
///
/// ```
/// use sbgn::coerce::check_params;
///
/// let node = check_params("bbox", &["x", "y", "w", "h"], [("x", "10")]).unwrap();
/// assert_eq!(node.attribute("x"), Some("10"));
///
/// let err = check_params("bbox", &["x", "y", "w", "h"], [("z", "1"), ("d", "2")]).unwrap_err();
/// assert_eq!(err.to_string(), "Unknown field(s) for `bbox`: z, d");
/// ```
pub fn check_params<I, K, V>(tag: &'static str, allowed: &[&str], record: I) -> Result<XmlNode>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut node = XmlNode::new(tag);
    let mut unknown = Vec::new();

    for (key, value) in record {
        let key = key.into();
        if allowed.contains(&key.as_str()) {
            node.set_attribute(key, value);
        } else {
            unknown.push(key);
        }
    }

    if !unknown.is_empty() {
        return Err(SbgnError::Config {
            element: tag,
            fields: unknown,
        });
    }
    Ok(node)
}
