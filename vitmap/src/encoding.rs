use crate::color::*;
use crate::point::*;
use crate::shape::*;
use crate::vitmap::*;
use crate::animation::*;

/// The first four bytes of a vitmap file
pub const VITMAP_MAGIC: [u8; 4]         = *b"VITM";

/// The first four bytes of an animation file
pub const ANIMATION_MAGIC: [u8; 4]      = *b"VITA";

/// The version of the file format written by this library
pub const FILE_FORMAT_VERSION: u32      = 1;

///
/// Trait implemented by objects that can be written in the vitmap binary format
///
/// Everything is written little-endian, whatever the host byte order.
///
pub trait VitmapEncoding {
    ///
    /// Encodes this item by appending it to the specified buffer
    ///
    fn encode_vitmap(&self, append_to: &mut Vec<u8>);
}

impl VitmapEncoding for u8 {
    #[inline]
    fn encode_vitmap(&self, append_to: &mut Vec<u8>) {
        append_to.push(*self);
    }
}

impl VitmapEncoding for i32 {
    #[inline]
    fn encode_vitmap(&self, append_to: &mut Vec<u8>) {
        append_to.extend_from_slice(&self.to_le_bytes());
    }
}

impl VitmapEncoding for u32 {
    #[inline]
    fn encode_vitmap(&self, append_to: &mut Vec<u8>) {
        append_to.extend_from_slice(&self.to_le_bytes());
    }
}

impl VitmapEncoding for f32 {
    #[inline]
    fn encode_vitmap(&self, append_to: &mut Vec<u8>) {
        append_to.extend_from_slice(&self.to_bits().to_le_bytes());
    }
}

///
/// Writes the number of items in a list
///
/// Containers never grow beyond `MAX_ELEMENTS`, so lengths always fit in the file format's `i32` counts
///
#[inline]
fn encode_count(len: usize, append_to: &mut Vec<u8>) {
    (len as i32).encode_vitmap(append_to);
}

impl VitmapEncoding for Point {
    fn encode_vitmap(&self, append_to: &mut Vec<u8>) {
        self.x.encode_vitmap(append_to);
        self.y.encode_vitmap(append_to);
    }
}

impl VitmapEncoding for Color {
    fn encode_vitmap(&self, append_to: &mut Vec<u8>) {
        append_to.extend_from_slice(&self.to_array());
    }
}

impl VitmapEncoding for Shape {
    fn encode_vitmap(&self, append_to: &mut Vec<u8>) {
        encode_count(self.len(), append_to);
        append_to.reserve(self.len() * 8 + 4);

        for point in self.points() {
            point.encode_vitmap(append_to);
        }

        self.color().encode_vitmap(append_to);
    }
}

impl VitmapEncoding for Vitmap {
    fn encode_vitmap(&self, append_to: &mut Vec<u8>) {
        encode_count(self.len(), append_to);

        for shape in self.shapes() {
            shape.encode_vitmap(append_to);
        }
    }
}

impl VitmapEncoding for VitmapAnimation {
    fn encode_vitmap(&self, append_to: &mut Vec<u8>) {
        encode_count(self.len(), append_to);
        (self.current_frame_index().unwrap_or(0) as i32).encode_vitmap(append_to);

        for frame in self.frames() {
            frame.encode_vitmap(append_to);
        }
    }
}

///
/// Encodes a vitmap as the contents of a vitmap file (with its magic number and version)
///
pub fn encode_vitmap_file(vitmap: &Vitmap) -> Vec<u8> {
    let mut result = vec![];

    result.extend_from_slice(&VITMAP_MAGIC);
    FILE_FORMAT_VERSION.encode_vitmap(&mut result);
    vitmap.encode_vitmap(&mut result);

    result
}

///
/// Encodes an animation as the contents of an animation file (with its magic number and version)
///
pub fn encode_animation_file(animation: &VitmapAnimation) -> Vec<u8> {
    let mut result = vec![];

    result.extend_from_slice(&ANIMATION_MAGIC);
    FILE_FORMAT_VERSION.encode_vitmap(&mut result);
    animation.encode_vitmap(&mut result);

    result
}
