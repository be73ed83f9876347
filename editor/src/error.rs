use flo_vitmap::*;
use flo_vitmap_tessellate::*;

use thiserror::Error;

///
/// Errors from an editor command
///
#[derive(Debug, Error)]
pub enum EditorError {
    /// The vitmap could not be changed, loaded or saved
    #[error(transparent)]
    Vitmap(#[from] VitmapError),

    /// A shape could not be converted to a mesh
    #[error(transparent)]
    Tessellate(#[from] TessellateError),

    /// The command needs the draw tool to be active
    #[error("points can only be added with the draw tool")]
    NotDrawing,

    /// The command needs a shape or vertex to be selected
    #[error("nothing is selected")]
    NothingSelected,

    /// The animation has no frames to edit
    #[error("the animation has no frames")]
    NoFrame,
}
