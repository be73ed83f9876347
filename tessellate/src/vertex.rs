///
/// A vertex in a shape mesh
///
#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C)]
pub struct Vertex2D {
    pub pos:    [f32; 2],
    pub color:  [u8; 4]
}

impl Vertex2D {
    ///
    /// Creates a 2D vertex with the position set and the colour zeroed out
    ///
    pub fn with_pos(x: f32, y: f32) -> Vertex2D {
        Vertex2D {
            pos:    [x, y],
            color:  [0, 0, 0, 0]
        }
    }

    ///
    /// Updates this vertex with a particular colour
    ///
    pub fn with_color(self, color: [u8; 4]) -> Vertex2D {
        Vertex2D {
            pos:    self.pos,
            color:  color
        }
    }
}
