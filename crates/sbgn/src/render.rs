//! The SBML render extension, as carried inside SBGN-ML `<extension>` elements.
//!
//! A [`RenderInformation`] payload holds named colors
//! ([`ListOfColorDefinitions`]) and styles ([`ListOfStyles`]). Each [`Style`]
//! applies one [`RenderGroup`] to a whitespace-separated list of element ids.

mod color;
mod group;
mod information;
mod style;

pub use color::{ColorDefinition, ListOfColorDefinitions};
pub use group::RenderGroup;
pub use information::RenderInformation;
pub use style::{ListOfStyles, Style};

/// Namespace of the render extension.
pub const RENDER_NAMESPACE: &str = "http://www.sbml.org/sbml/level3/version1/render/version1";
