//! SBGN-ML element types, from the `<sbgn>` root down to arc waypoints.

mod arc;
mod bbox;
mod clone;
mod document;
mod glyph;
mod label;
mod map;
mod point;
mod port;
mod state;

pub use arc::Arc;
pub use bbox::Bbox;
pub use clone::CloneType;
pub use document::{Document, SBGN_NAMESPACE};
pub use glyph::Glyph;
pub use label::Label;
pub use map::Map;
pub use point::{EndType, NextType, StartType};
pub use port::Port;
pub use state::StateType;
