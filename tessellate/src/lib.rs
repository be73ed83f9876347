//!
//! # flo_vitmap_tessellate
//!
//! Turns the closed polygons in a vitmap into triangle meshes that a renderer can draw directly. Each shape
//! becomes one `ShapeMesh`: a vertex buffer, an index buffer with three indices per triangle and the shape's
//! fill colour. Tessellation is performed by `lyon`, constrained to the outline of the shape.
//!
//! Meshes are not cached: tessellate a shape again whenever it changes.
//!
#![warn(bare_trait_objects)]

mod error;
mod vertex;
mod mesh;
mod options;
mod tessellator;

pub use self::error::*;
pub use self::vertex::*;
pub use self::mesh::*;
pub use self::options::*;
pub use self::tessellator::*;
