use lyon::tessellation::{TessellationError};
use thiserror::Error;

///
/// Ways that tessellating a shape can fail
///
#[derive(Debug, Error)]
pub enum TessellateError {
    /// The shape needs more vertices than can be addressed by a 16-bit index buffer
    #[error("the shape has too many vertices to fit in a mesh")]
    TooManyVertices,

    /// One of the points of the shape was infinite or NaN
    #[error("point {index} of the shape is not a finite coordinate")]
    NonFiniteCoordinate { index: usize },

    /// The tessellator could not process the shape
    #[error("tessellation failed: {0:?}")]
    Tessellation(TessellationError),
}
