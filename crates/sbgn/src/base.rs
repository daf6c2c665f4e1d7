//! The optional `<extension>` child shared by most SBGN-ML elements.
//!
//! Elements embed an [`ElementBase`] value and call its build/populate
//! helpers explicitly from their own `to_node`/`from_node`. The
//! [`Extensible`] trait then exposes the extension uniformly.

use sbgn_xml::XmlNode;

use crate::element::SbgnElement;
use crate::error::Result;
use crate::extension::Extension;

/// Holder for an element's optional extension.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementBase {
    extension: Option<Extension>,
}

impl ElementBase {
    pub fn extension(&self) -> Option<&Extension> {
        self.extension.as_ref()
    }

    pub fn extension_mut(&mut self) -> Option<&mut Extension> {
        self.extension.as_mut()
    }

    /// Replaces the extension.
    pub fn set_extension(&mut self, extension: Extension) {
        self.extension = Some(extension);
    }

    /// Appends the extension child to `node` if one is present.
    pub fn contribute_to_build(&self, node: &mut XmlNode) {
        if let Some(extension) = &self.extension {
            node.push_child(extension.to_node());
        }
    }

    /// Reads the first direct `<extension>` child of `node`, if any.
    ///
    /// # Errors
    ///
    /// Propagates failures from the extension's own sub-schemas.
    pub fn populate_from_parsed(&mut self, node: &XmlNode) -> Result<()> {
        if let Some(child) = node.first_child(Extension::TAG) {
            self.set_extension(Extension::from_node(child)?);
        }
        Ok(())
    }
}

/// Elements that carry an optional [`Extension`].
pub trait Extensible {
    fn base(&self) -> &ElementBase;

    fn base_mut(&mut self) -> &mut ElementBase;

    fn extension(&self) -> Option<&Extension> {
        self.base().extension()
    }

    fn extension_mut(&mut self) -> Option<&mut Extension> {
        self.base_mut().extension_mut()
    }

    /// Replaces the element's extension.
    fn set_extension(&mut self, extension: Extension) {
        self.base_mut().set_extension(extension);
    }
}

/// Implements [`Extensible`] for a type with a `base: ElementBase` field.
macro_rules! impl_extensible {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::base::Extensible for $ty {
                fn base(&self) -> &$crate::base::ElementBase {
                    &self.base
                }

                fn base_mut(&mut self) -> &mut $crate::base::ElementBase {
                    &mut self.base
                }
            }
        )+
    };
}

pub(crate) use impl_extensible;
