//!
//! # flo_vitmap
//!
//! `flo_vitmap` describes 'vitmaps': small vector images made up of coloured, closed polygons. A
//! `Shape` is a single polygon, a `Vitmap` is an ordered list of shapes (later shapes are drawn on
//! top of earlier ones) and a `VitmapAnimation` is a sequence of vitmap frames with a playback
//! cursor.
//!
//! Elements inside a container are referred to using handles (`PointHandle` and `ShapeHandle`)
//! rather than by reference, so an editor can hold on to 'the shape under the cursor' across
//! operations that add, remove or reorder other shapes. A handle to an element that has been
//! removed simply stops resolving.
//!
//! The library also defines a compact binary file format for vitmaps and animations, and the
//! point-in-polygon test used to find the shapes under a point. Tessellation into triangle meshes
//! is provided by `flo_vitmap_tessellate`.
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

mod file;
mod edges;
mod color;
mod error;
mod point;
mod shape;
mod handle;
mod vitmap;
mod encoding;
mod decoding;
mod animation;
mod point_in_polygon;

pub use self::file::*;
pub use self::edges::*;
pub use self::color::*;
pub use self::error::*;
pub use self::point::*;
pub use self::shape::*;
pub use self::handle::*;
pub use self::vitmap::*;
pub use self::encoding::*;
pub use self::decoding::*;
pub use self::animation::*;
pub use self::point_in_polygon::*;
