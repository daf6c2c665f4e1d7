//! SBGN XML text layer
//!
//! Converts XML text into a tree of [`XmlNode`]s and back. Each node keeps its
//! attributes in order and groups its children by tag name, which is the shape
//! the SBGN-ML object model reads from and builds into.
//!
//! - [`parse`]: XML text to the root [`XmlNode`]
//! - [`to_string`]: [`XmlNode`] to XML text, formatted by [`WriteOptions`]
//!
//! # Example
//!
//! ```
//! use sbgn_xml::{WriteOptions, parse, to_string};
//!
//! let node = parse("<bbox x='10' y='10'/>").unwrap();
//! assert_eq!(node.attribute("x"), Some("10"));
//! assert_eq!(to_string(&node, &WriteOptions::default()), r#"<bbox x="10" y="10"/>"#);
//! ```

pub mod error;

mod node;
mod reader;
mod writer;

pub use error::XmlError;
pub use node::{XmlNode, local_part};
pub use reader::parse;
pub use writer::{WriteOptions, to_string};
