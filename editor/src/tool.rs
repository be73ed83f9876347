///
/// The tools available in the editor
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Tool {
    /// Looking at the vitmap without changing it
    View,

    /// Clicking adds points to a new shape
    Draw,

    /// Clicking selects shapes and vertices so they can be edited
    Select,
}

impl Default for Tool {
    fn default() -> Tool {
        Tool::View
    }
}
