use crate::error::*;
use crate::vitmap::*;
use crate::decoding::*;

use std::convert::{TryFrom};

use log::*;

///
/// A sequence of vitmap frames with a playback cursor
///
/// Whenever there is at least one frame, the current frame is a valid index into the frame list.
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "VitmapAnimationData", into = "VitmapAnimationData")]
pub struct VitmapAnimation {
    frames:         Vec<Vitmap>,
    current_frame:  usize,
}

///
/// The serialized form of an animation (checked for a valid current frame when it's deserialized)
///
#[derive(Clone, Serialize, Deserialize)]
struct VitmapAnimationData {
    frames:         Vec<Vitmap>,
    current_frame:  usize,
}

impl VitmapAnimation {
    ///
    /// Creates an animation with a single empty frame
    ///
    pub fn new() -> VitmapAnimation {
        VitmapAnimation {
            frames:         vec![Vitmap::new()],
            current_frame:  0,
        }
    }

    ///
    /// Creates an animation with no frames at all
    ///
    pub fn empty() -> VitmapAnimation {
        VitmapAnimation {
            frames:         vec![],
            current_frame:  0,
        }
    }

    ///
    /// Creates an animation from a list of frames, with the first frame as the current one
    ///
    pub fn from_frames(frames: Vec<Vitmap>) -> VitmapAnimation {
        VitmapAnimation {
            frames:         frames,
            current_frame:  0,
        }
    }

    ///
    /// Adds a frame to the end of this animation, returning its index
    ///
    pub fn add_frame(&mut self, frame: Vitmap) -> Result<usize, VitmapError> {
        reserve_one(&mut self.frames)?;
        self.frames.push(frame);

        debug!("Added frame: animation now has {} frames", self.frames.len());

        Ok(self.frames.len() - 1)
    }

    ///
    /// Changes the current frame
    ///
    /// Indexes outside of the animation are rejected with `OutOfRange`, leaving the current frame as it was.
    ///
    pub fn set_current_frame(&mut self, index: isize) -> Result<(), VitmapError> {
        if index < 0 || index as usize >= self.frames.len() {
            return Err(VitmapError::OutOfRange { index: index as i64, len: self.frames.len() });
        }

        self.current_frame = index as usize;
        Ok(())
    }

    ///
    /// Moves to the next frame, staying on the last frame if there are no more
    ///
    pub fn next_frame(&mut self) {
        if self.current_frame + 1 < self.frames.len() {
            self.current_frame += 1;
        }
    }

    ///
    /// Moves to the previous frame, staying on the first frame if there are no earlier frames
    ///
    pub fn previous_frame(&mut self) {
        self.current_frame = self.current_frame.saturating_sub(1);
    }

    ///
    /// The index of the current frame (None if there are no frames)
    ///
    pub fn current_frame_index(&self) -> Option<usize> {
        if self.frames.is_empty() {
            None
        } else {
            Some(self.current_frame)
        }
    }

    pub fn current_frame(&self) -> Option<&Vitmap> {
        self.frames.get(self.current_frame)
    }

    pub fn current_frame_mut(&mut self) -> Option<&mut Vitmap> {
        self.frames.get_mut(self.current_frame)
    }

    pub fn frame(&self, index: usize) -> Option<&Vitmap> {
        self.frames.get(index)
    }

    pub fn frame_mut(&mut self, index: usize) -> Option<&mut Vitmap> {
        self.frames.get_mut(index)
    }

    ///
    /// The frames of this animation, in playback order
    ///
    #[inline]
    pub fn frames(&self) -> &[Vitmap] {
        &self.frames
    }

    /// The number of frames in this animation
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl Default for VitmapAnimation {
    fn default() -> VitmapAnimation {
        VitmapAnimation::new()
    }
}

impl TryFrom<VitmapAnimationData> for VitmapAnimation {
    type Error = DecoderError;

    fn try_from(data: VitmapAnimationData) -> Result<VitmapAnimation, DecoderError> {
        let in_range = if data.frames.is_empty() { data.current_frame == 0 } else { data.current_frame < data.frames.len() };

        if in_range {
            Ok(VitmapAnimation { frames: data.frames, current_frame: data.current_frame })
        } else {
            Err(DecoderError::CurrentFrameOutOfRange { current_frame: data.current_frame as i64, num_frames: data.frames.len() as i64 })
        }
    }
}

impl From<VitmapAnimation> for VitmapAnimationData {
    fn from(animation: VitmapAnimation) -> VitmapAnimationData {
        VitmapAnimationData { frames: animation.frames, current_frame: animation.current_frame }
    }
}
