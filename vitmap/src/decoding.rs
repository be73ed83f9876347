use crate::color::*;
use crate::error::*;
use crate::point::*;
use crate::shape::*;
use crate::vitmap::*;
use crate::encoding::*;
use crate::animation::*;

use log::*;
use thiserror::Error;

use std::io::{Read};
use std::convert::{TryInto};

/// Smallest number of bytes a shape can take up (its point count and its colour)
const MIN_SHAPE_BYTES: usize = 8;

/// Number of bytes used by a point
const POINT_BYTES: usize = 8;

/// Number of bytes used by a colour
const COLOR_BYTES: usize = 4;

/// Smallest number of bytes a vitmap can take up (its shape count)
const MIN_VITMAP_BYTES: usize = 4;

///
/// Ways that vitmap data can be corrupt
///
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum DecoderError {
    /// The data ended before everything it declared was read
    #[error("data ended at byte {offset} but {needed} more bytes were expected")]
    UnexpectedEndOfData { offset: usize, needed: usize },

    /// A count of shapes, points or frames was negative
    #[error("found a negative count ({count}) at byte {offset}")]
    NegativeCount { offset: usize, count: i32 },

    /// The file did not start with the expected magic number
    #[error("unexpected file type (magic number {0:?})")]
    BadMagic([u8; 4]),

    /// The file was written by a newer version of the format
    #[error("unsupported file format version {0}")]
    UnsupportedVersion(u32),

    /// An animation's current frame was not one of its frames
    #[error("current frame {current_frame} is not valid for an animation with {num_frames} frames")]
    CurrentFrameOutOfRange { current_frame: i64, num_frames: i64 },

    /// There was more data after the end of the file's contents
    #[error("{remaining} unexpected bytes after the end of the data at byte {offset}")]
    TrailingData { offset: usize, remaining: usize },
}

///
/// Reads values in the vitmap binary format from a byte slice
///
pub struct VitmapDecoder<'a> {
    data:   &'a [u8],
    offset: usize,
}

impl<'a> VitmapDecoder<'a> {
    ///
    /// Creates a decoder that reads from the start of some data
    ///
    pub fn new(data: &'a [u8]) -> VitmapDecoder<'a> {
        VitmapDecoder { data, offset: 0 }
    }

    /// The number of bytes read so far
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The number of bytes that have not been read yet
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    ///
    /// Fails if fewer than a certain number of bytes remain
    ///
    #[inline]
    fn require(&self, len: usize) -> Result<(), DecoderError> {
        if self.remaining() < len {
            Err(DecoderError::UnexpectedEndOfData { offset: self.offset, needed: len - self.remaining() })
        } else {
            Ok(())
        }
    }

    ///
    /// Reads the next few bytes
    ///
    #[inline]
    fn take<const N: usize>(&mut self) -> Result<[u8; N], DecoderError> {
        self.require(N)?;

        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.data[self.offset..(self.offset + N)]);
        self.offset += N;

        Ok(bytes)
    }

    pub fn decode_u8(&mut self) -> Result<u8, DecoderError> {
        let [byte] = self.take::<1>()?;
        Ok(byte)
    }

    pub fn decode_i32(&mut self) -> Result<i32, DecoderError> {
        Ok(i32::from_le_bytes(self.take()?))
    }

    pub fn decode_u32(&mut self) -> Result<u32, DecoderError> {
        Ok(u32::from_le_bytes(self.take()?))
    }

    pub fn decode_f32(&mut self) -> Result<f32, DecoderError> {
        Ok(f32::from_bits(u32::from_le_bytes(self.take()?)))
    }

    ///
    /// Reads a count, checking that there's enough data left for that many items of at least a certain size
    ///
    fn decode_count(&mut self, min_item_bytes: usize) -> Result<usize, DecoderError> {
        let offset  = self.offset;
        let count   = self.decode_i32()?;
        let count: usize = count.try_into().map_err(|_| DecoderError::NegativeCount { offset, count })?;

        self.require(count.saturating_mul(min_item_bytes))?;

        Ok(count)
    }

    pub fn decode_point(&mut self) -> Result<Point, DecoderError> {
        let x = self.decode_f32()?;
        let y = self.decode_f32()?;

        Ok(Point { x, y })
    }

    pub fn decode_color(&mut self) -> Result<Color, DecoderError> {
        Ok(Color::from(self.take::<4>()?))
    }

    ///
    /// Reads a shape (point count, points and colour)
    ///
    pub fn decode_shape(&mut self) -> Result<Shape, VitmapError> {
        let num_points  = self.decode_count(POINT_BYTES)?;
        self.require(num_points.saturating_mul(POINT_BYTES).saturating_add(COLOR_BYTES))?;

        let mut shape   = Shape::new();
        for _ in 0..num_points {
            shape.add_point(self.decode_point()?)?;
        }

        shape.set_color(self.decode_color()?);

        Ok(shape)
    }

    ///
    /// Reads a vitmap (shape count followed by the shapes)
    ///
    pub fn decode_vitmap(&mut self) -> Result<Vitmap, VitmapError> {
        let num_shapes  = self.decode_count(MIN_SHAPE_BYTES)?;

        let mut vitmap  = Vitmap::new();
        for _ in 0..num_shapes {
            vitmap.push_shape(self.decode_shape()?)?;
        }

        Ok(vitmap)
    }

    ///
    /// Reads an animation (frame count, current frame and the frames)
    ///
    pub fn decode_animation(&mut self) -> Result<VitmapAnimation, VitmapError> {
        let num_frames      = self.decode_count(MIN_VITMAP_BYTES)?;
        let current_frame   = self.decode_i32()?;

        let frame_in_range  = if num_frames == 0 { current_frame == 0 } else { current_frame >= 0 && (current_frame as usize) < num_frames };
        if !frame_in_range {
            return Err(DecoderError::CurrentFrameOutOfRange { current_frame: current_frame as i64, num_frames: num_frames as i64 }.into());
        }

        let mut animation   = VitmapAnimation::empty();
        for _ in 0..num_frames {
            animation.add_frame(self.decode_vitmap()?)?;
        }

        if num_frames > 0 {
            animation.set_current_frame(current_frame as isize)?;
        }

        Ok(animation)
    }

    ///
    /// Reads a file header, checking its magic number and version
    ///
    pub fn decode_header(&mut self, magic: [u8; 4]) -> Result<u32, DecoderError> {
        let found_magic = self.take::<4>()?;
        if found_magic != magic {
            return Err(DecoderError::BadMagic(found_magic));
        }

        let version = self.decode_u32()?;
        if version == 0 || version > FILE_FORMAT_VERSION {
            return Err(DecoderError::UnsupportedVersion(version));
        }

        Ok(version)
    }

    ///
    /// Checks that all of the data has been read
    ///
    pub fn finish(self) -> Result<(), DecoderError> {
        if self.remaining() > 0 {
            Err(DecoderError::TrailingData { offset: self.offset, remaining: self.remaining() })
        } else {
            Ok(())
        }
    }
}

///
/// Decodes the contents of a vitmap file
///
/// Files without a header are treated as the unversioned format (a bare little-endian vitmap).
///
pub fn decode_vitmap_file(data: &[u8]) -> Result<Vitmap, VitmapError> {
    let mut decoder = VitmapDecoder::new(data);

    if data.starts_with(&VITMAP_MAGIC) {
        decoder.decode_header(VITMAP_MAGIC)?;
    } else {
        debug!("Vitmap data has no header: reading as an unversioned vitmap");
    }

    let vitmap = decoder.decode_vitmap()?;
    decoder.finish()?;

    Ok(vitmap)
}

///
/// Decodes the contents of an animation file
///
pub fn decode_animation_file(data: &[u8]) -> Result<VitmapAnimation, VitmapError> {
    let mut decoder = VitmapDecoder::new(data);

    decoder.decode_header(ANIMATION_MAGIC)?;
    let animation = decoder.decode_animation()?;
    decoder.finish()?;

    Ok(animation)
}

///
/// Reads a vitmap file from a stream
///
pub fn read_vitmap(mut reader: impl Read) -> Result<Vitmap, VitmapError> {
    let mut data = vec![];
    reader.read_to_end(&mut data)?;

    decode_vitmap_file(&data)
}

///
/// Reads an animation file from a stream
///
pub fn read_animation(mut reader: impl Read) -> Result<VitmapAnimation, VitmapError> {
    let mut data = vec![];
    reader.read_to_end(&mut data)?;

    decode_animation_file(&data)
}
