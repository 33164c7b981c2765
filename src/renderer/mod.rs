//! Rendering module
//!
//! Backend-agnostic: builds frame snapshots and colored quads. Uploading and
//! drawing them (and rendering text) is up to the host.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{Align, Frame, TextLine};
pub use vertex::Vertex;
