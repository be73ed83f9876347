use crate::tool::*;
use crate::error::*;

use flo_vitmap::*;
use flo_vitmap_tessellate::*;

use log::*;

use std::path::{Path};
use std::collections::{VecDeque};

/// The number of snapshots kept for undo
const MAX_UNDO: usize = 64;

///
/// The editing state before a command was applied
///
#[derive(Clone)]
struct EditSnapshot {
    animation:          VitmapAnimation,
    tool:               Tool,
    color:              Color,
    drawing_shape:      Option<ShapeHandle>,
    selected_shape:     Option<ShapeHandle>,
    selected_vertex:    Option<PointHandle>,
}

///
/// The state of an editing session
///
/// Shapes and vertices are remembered by handle, so a selection either still refers to the same element after
/// an edit or stops resolving (in which case it's cleared).
///
pub struct EditorSession {
    /// The animation being edited (a single vitmap is an animation with one frame)
    animation:          VitmapAnimation,

    /// The active tool
    tool:               Tool,

    /// The colour given to new shapes
    color:              Color,

    /// The shape that clicks are currently adding points to
    drawing_shape:      Option<ShapeHandle>,

    /// The selected shape in the current frame
    selected_shape:     Option<ShapeHandle>,

    /// The selected vertex within the selected shape
    selected_vertex:    Option<PointHandle>,

    /// Snapshots of the editing state before each edit, oldest first
    undo_stack:         VecDeque<EditSnapshot>,

    /// Generates meshes for the renderer
    tessellator:        ShapeTessellator,
}

impl EditorSession {
    ///
    /// Creates a session editing an empty vitmap
    ///
    pub fn new() -> EditorSession {
        EditorSession::with_animation(VitmapAnimation::new())
    }

    ///
    /// Creates a session editing an existing vitmap
    ///
    pub fn with_vitmap(vitmap: Vitmap) -> EditorSession {
        EditorSession::with_animation(VitmapAnimation::from_frames(vec![vitmap]))
    }

    ///
    /// Creates a session editing an animation
    ///
    pub fn with_animation(animation: VitmapAnimation) -> EditorSession {
        EditorSession {
            animation:          animation,
            tool:               Tool::default(),
            color:              Color::BLACK,
            drawing_shape:      None,
            selected_shape:     None,
            selected_vertex:    None,
            undo_stack:         VecDeque::new(),
            tessellator:        ShapeTessellator::new(),
        }
    }

    ///
    /// Creates a session for a vitmap file, starting with an empty vitmap if the file can't be loaded
    ///
    pub fn open(path: impl AsRef<Path>) -> EditorSession {
        let path = path.as_ref();

        match load_vitmap(path) {
            Ok(vitmap)  => EditorSession::with_vitmap(vitmap),
            Err(err)    => {
                warn!("Starting with an empty vitmap: could not open {}: {}", path.display(), err);
                EditorSession::new()
            }
        }
    }

    #[inline]
    pub fn animation(&self) -> &VitmapAnimation {
        &self.animation
    }

    ///
    /// The frame being edited
    ///
    #[inline]
    pub fn current_vitmap(&self) -> Option<&Vitmap> {
        self.animation.current_frame()
    }

    #[inline]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn drawing_shape(&self) -> Option<ShapeHandle> {
        self.drawing_shape
    }

    #[inline]
    pub fn selected_shape(&self) -> Option<ShapeHandle> {
        self.selected_shape
    }

    #[inline]
    pub fn selected_vertex(&self) -> Option<PointHandle> {
        self.selected_vertex
    }

    ///
    /// The frame being edited, for changing
    ///
    fn frame_mut(&mut self) -> Result<&mut Vitmap, EditorError> {
        self.animation.current_frame_mut().ok_or(EditorError::NoFrame)
    }

    ///
    /// Captures the current editing state
    ///
    fn snapshot(&self) -> EditSnapshot {
        EditSnapshot {
            animation:          self.animation.clone(),
            tool:               self.tool,
            color:              self.color,
            drawing_shape:      self.drawing_shape,
            selected_shape:     self.selected_shape,
            selected_vertex:    self.selected_vertex,
        }
    }

    ///
    /// Puts the editing state back to how it was when a snapshot was taken
    ///
    fn restore(&mut self, snapshot: EditSnapshot) {
        self.animation          = snapshot.animation;
        self.tool               = snapshot.tool;
        self.color              = snapshot.color;
        self.drawing_shape      = snapshot.drawing_shape;
        self.selected_shape     = snapshot.selected_shape;
        self.selected_vertex    = snapshot.selected_vertex;
    }

    ///
    /// Performs an edit that can be undone
    ///
    /// A failed edit leaves the session exactly as it was and adds nothing to the undo stack.
    ///
    fn edit<TResult>(&mut self, edit_fn: impl FnOnce(&mut EditorSession) -> Result<TResult, EditorError>) -> Result<TResult, EditorError> {
        let before = self.snapshot();

        match edit_fn(self) {
            Ok(result)  => {
                if self.undo_stack.len() >= MAX_UNDO {
                    self.undo_stack.pop_front();
                }

                self.undo_stack.push_back(before);
                Ok(result)
            }

            Err(err)    => {
                self.restore(before);
                Err(err)
            }
        }
    }

    ///
    /// Clears any handles that no longer refer to anything in the current frame
    ///
    fn forget_stale_handles(&mut self) {
        let frame = self.animation.current_frame();

        let shape_exists = |handle: ShapeHandle| frame.map(|frame| frame.shape(handle).is_some()).unwrap_or(false);

        if !self.drawing_shape.map(|handle| shape_exists(handle)).unwrap_or(false) {
            self.drawing_shape = None;
        }

        if !self.selected_shape.map(|handle| shape_exists(handle)).unwrap_or(false) {
            self.selected_shape = None;
        }

        let vertex_exists = match (self.selected_shape, self.selected_vertex, frame) {
            (Some(shape), Some(vertex), Some(frame))    => frame.shape(shape).map(|shape| shape.point(vertex).is_some()).unwrap_or(false),
            _                                           => false,
        };

        if !vertex_exists {
            self.selected_vertex = None;
        }
    }

    ///
    /// Clears the selection and any shape being drawn
    ///
    fn clear_selection(&mut self) {
        self.drawing_shape      = None;
        self.selected_shape     = None;
        self.selected_vertex    = None;
    }

    ///
    /// Changes the active tool (leaving the draw tool finishes the shape being drawn)
    ///
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool == Tool::Draw && tool != Tool::Draw {
            self.finish_shape();
        }

        self.tool = tool;
    }

    ///
    /// Changes the colour for new shapes, and recolours the selected shape if there is one
    ///
    pub fn set_color(&mut self, color: Color) -> Result<(), EditorError> {
        match self.selected_shape {
            Some(selected)  => self.edit(move |session| {
                session.frame_mut()?.shape_mut(selected).ok_or(VitmapError::NotFound)?.set_color(color);
                session.color = color;

                Ok(())
            }),

            None            => {
                self.color = color;
                Ok(())
            }
        }
    }

    ///
    /// Adds a point where the user clicked, starting a new shape if one isn't being drawn already
    ///
    pub fn commit_point(&mut self, position: Point) -> Result<PointHandle, EditorError> {
        if self.tool != Tool::Draw {
            return Err(EditorError::NotDrawing);
        }

        self.edit(move |session| {
            let color   = session.color;
            let drawing = session.drawing_shape;
            let frame   = session.frame_mut()?;

            // Use the open shape, or start a new one on top of the others
            let shape_handle = match drawing.filter(|handle| frame.shape(*handle).is_some()) {
                Some(handle)    => handle,
                None            => {
                    let handle = frame.add_shape()?;
                    frame.shape_mut(handle).ok_or(VitmapError::NotFound)?.set_color(color);
                    handle
                }
            };

            let point_handle = frame.shape_mut(shape_handle).ok_or(VitmapError::NotFound)?.add_point(position)?;

            session.drawing_shape = Some(shape_handle);

            Ok(point_handle)
        })
    }

    ///
    /// Stops adding points to the shape being drawn
    ///
    /// Shapes that don't have enough points to be a polygon are discarded. Returns the finished shape.
    ///
    pub fn finish_shape(&mut self) -> Option<ShapeHandle> {
        let handle  = self.drawing_shape.take()?;
        let frame   = self.animation.current_frame_mut()?;

        match frame.shape(handle).map(|shape| shape.is_polygon()) {
            Some(true)  => {
                debug!("Finished shape {:?}", handle);
                Some(handle)
            }

            Some(false) => {
                debug!("Discarding shape {:?}: not enough points to make a polygon", handle);
                frame.remove_shape(handle).ok();
                None
            }

            None        => None,
        }
    }

    ///
    /// Selects the shape on top at a point (or clears the selection if there's no shape there)
    ///
    pub fn select_at(&mut self, position: Point) -> Option<ShapeHandle> {
        self.selected_shape     = self.current_vitmap().and_then(|frame| frame.topmost_shape_at(position));
        self.selected_vertex    = None;

        self.selected_shape
    }

    ///
    /// Selects the vertex of the selected shape nearest to a point, if one is close enough
    ///
    pub fn select_vertex_at(&mut self, position: Point, radius: f32) -> Option<PointHandle> {
        let selected_shape      = self.selected_shape;
        self.selected_vertex    = self.current_vitmap()
            .and_then(|frame| selected_shape.and_then(|handle| frame.shape(handle)))
            .and_then(|shape| shape.nearest_point(position, radius));

        self.selected_vertex
    }

    ///
    /// Moves the selected vertex to a new position
    ///
    pub fn move_selected_vertex(&mut self, position: Point) -> Result<(), EditorError> {
        let (shape, vertex) = self.selected_shape.zip(self.selected_vertex).ok_or(EditorError::NothingSelected)?;

        self.edit(move |session| {
            session.frame_mut()?
                .shape_mut(shape).ok_or(VitmapError::NotFound)?
                .set_point(vertex, position)?;

            Ok(())
        })
    }

    ///
    /// Deletes the selected vertex, or the selected shape if no vertex is selected
    ///
    pub fn delete_selected(&mut self) -> Result<(), EditorError> {
        let shape = self.selected_shape.ok_or(EditorError::NothingSelected)?;

        self.edit(move |session| {
            if let Some(vertex) = session.selected_vertex.take() {
                session.frame_mut()?
                    .shape_mut(shape).ok_or(VitmapError::NotFound)?
                    .remove_point(vertex)?;
            } else {
                session.frame_mut()?.remove_shape(shape)?;
                session.selected_shape = None;
            }

            session.forget_stale_handles();

            Ok(())
        })
    }

    ///
    /// Moves the selected shape one step towards the top
    ///
    pub fn raise_selected(&mut self) -> Result<(), EditorError> {
        self.reorder_selected(ReorderDirection::Up)
    }

    ///
    /// Moves the selected shape one step towards the bottom
    ///
    pub fn lower_selected(&mut self) -> Result<(), EditorError> {
        self.reorder_selected(ReorderDirection::Down)
    }

    fn reorder_selected(&mut self, direction: ReorderDirection) -> Result<(), EditorError> {
        let shape = self.selected_shape.ok_or(EditorError::NothingSelected)?;

        self.edit(move |session| {
            let moved = session.frame_mut()?.reorder_shape(shape, direction)?;
            session.selected_shape = Some(moved);

            Ok(())
        })
    }

    ///
    /// Moves the selected shape by an offset
    ///
    pub fn move_selected(&mut self, dx: f32, dy: f32) -> Result<(), EditorError> {
        let shape = self.selected_shape.ok_or(EditorError::NothingSelected)?;

        self.edit(move |session| {
            session.frame_mut()?.shape_mut(shape).ok_or(VitmapError::NotFound)?.move_by(dx, dy);

            Ok(())
        })
    }

    ///
    /// Moves every shape in the current frame by an offset
    ///
    pub fn move_all(&mut self, dx: f32, dy: f32) -> Result<(), EditorError> {
        self.edit(move |session| {
            session.frame_mut()?.move_by(dx, dy);

            Ok(())
        })
    }

    ///
    /// Adds a copy of the current frame to the end of the animation and starts editing it
    ///
    pub fn add_frame(&mut self) -> Result<usize, EditorError> {
        self.finish_shape();

        self.edit(|session| {
            let copy    = session.current_vitmap().cloned().unwrap_or_default();
            let index   = session.animation.add_frame(copy)?;
            session.animation.set_current_frame(index as isize)?;
            session.clear_selection();

            Ok(index)
        })
    }

    ///
    /// Moves to the next frame of the animation (staying on the last frame)
    ///
    pub fn next_frame(&mut self) {
        self.finish_shape();
        self.animation.next_frame();
        self.clear_selection();
    }

    ///
    /// Moves to the previous frame of the animation (staying on the first frame)
    ///
    pub fn previous_frame(&mut self) {
        self.finish_shape();
        self.animation.previous_frame();
        self.clear_selection();
    }

    ///
    /// Moves to a particular frame of the animation
    ///
    pub fn set_frame(&mut self, index: isize) -> Result<(), EditorError> {
        self.finish_shape();
        self.animation.set_current_frame(index)?;
        self.clear_selection();

        Ok(())
    }

    ///
    /// Reverts the most recent edit, returning false if there's nothing to undo
    ///
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop_back() {
            Some(previous)  => {
                self.restore(previous);
                self.forget_stale_handles();
                true
            }

            None            => false,
        }
    }

    ///
    /// Saves the current frame as a vitmap file
    ///
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), EditorError> {
        let frame = self.current_vitmap().ok_or(EditorError::NoFrame)?;
        save_vitmap(path, frame)?;

        Ok(())
    }

    ///
    /// Replaces the animation with a single frame loaded from a vitmap file
    ///
    /// If the file can't be loaded, the session is left unchanged.
    ///
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), EditorError> {
        let vitmap = load_vitmap(path)?;

        self.edit(move |session| {
            session.animation = VitmapAnimation::from_frames(vec![vitmap]);
            session.clear_selection();

            Ok(())
        })
    }

    ///
    /// Saves the whole animation
    ///
    pub fn save_animation(&self, path: impl AsRef<Path>) -> Result<(), EditorError> {
        save_animation(path, &self.animation)?;

        Ok(())
    }

    ///
    /// Replaces the animation with one loaded from a file (the session is left unchanged on failure)
    ///
    pub fn load_animation(&mut self, path: impl AsRef<Path>) -> Result<(), EditorError> {
        let animation = load_animation(path)?;

        self.edit(move |session| {
            session.animation = animation;
            session.clear_selection();

            Ok(())
        })
    }

    ///
    /// Tessellates the current frame, returning the meshes to draw from bottom to top
    ///
    pub fn meshes(&mut self) -> Result<Vec<ShapeMesh>, EditorError> {
        let frame = match self.animation.current_frame() {
            Some(frame) => frame,
            None        => return Ok(vec![]),
        };

        Ok(self.tessellator.tessellate_vitmap(frame)?)
    }
}

impl Default for EditorSession {
    fn default() -> EditorSession {
        EditorSession::new()
    }
}
