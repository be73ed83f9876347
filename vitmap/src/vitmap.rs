use crate::error::*;
use crate::point::*;
use crate::shape::*;
use crate::handle::*;

use log::*;
use smallvec::*;

use std::fmt;

///
/// The direction to move a shape in when reordering it
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ReorderDirection {
    /// Towards the top of the vitmap (drawn later, +1)
    Up,

    /// Towards the bottom of the vitmap (drawn earlier, -1)
    Down,
}

impl ReorderDirection {
    ///
    /// Converts a signed offset (+1 or -1) into a direction (None for 0)
    ///
    pub fn from_offset(offset: i32) -> Option<ReorderDirection> {
        if offset > 0 {
            Some(ReorderDirection::Up)
        } else if offset < 0 {
            Some(ReorderDirection::Down)
        } else {
            None
        }
    }
}

///
/// A vector image: an ordered list of shapes
///
/// The order of the shapes is the order they're painted in, so the last shape is the one on top.
///
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "VitmapData", into = "VitmapData")]
pub struct Vitmap {
    /// The shapes in this vitmap, from bottom to top
    shapes:         Vec<Shape>,

    /// The handle of each shape (same length as shapes)
    shape_handles:  Vec<ShapeHandle>,
}

///
/// The serialized form of a vitmap
///
#[derive(Clone, Serialize, Deserialize)]
struct VitmapData {
    shapes: Vec<Shape>,
}

impl Vitmap {
    ///
    /// Creates a vitmap containing no shapes
    ///
    pub fn new() -> Vitmap {
        Vitmap {
            shapes:         vec![],
            shape_handles:  vec![],
        }
    }

    ///
    /// Adds a new empty shape on top of the existing shapes
    ///
    pub fn add_shape(&mut self) -> Result<ShapeHandle, VitmapError> {
        self.push_shape(Shape::new())
    }

    ///
    /// Adds an existing shape on top of the existing shapes
    ///
    pub fn push_shape(&mut self, shape: Shape) -> Result<ShapeHandle, VitmapError> {
        reserve_one(&mut self.shapes)?;
        reserve_one(&mut self.shape_handles)?;

        let handle = ShapeHandle::allocate();
        self.shapes.push(shape);
        self.shape_handles.push(handle);

        debug!("Added shape {:?}: vitmap now has {} shapes", handle, self.shapes.len());

        Ok(handle)
    }

    ///
    /// Removes a shape from this vitmap, returning it
    ///
    /// The other shapes keep their order and their handles.
    ///
    pub fn remove_shape(&mut self, handle: ShapeHandle) -> Result<Shape, VitmapError> {
        let index = self.index_of_shape(handle).ok_or(VitmapError::NotFound)?;

        self.shape_handles.remove(index);
        let shape = self.shapes.remove(index);

        release_unused(&mut self.shapes);
        release_unused(&mut self.shape_handles);

        debug!("Removed shape {:?}: vitmap now has {} shapes", handle, self.shapes.len());

        Ok(shape)
    }

    ///
    /// Swaps a shape with its neighbour above or below it
    ///
    /// A shape that is already at the top can't move up, and one at the bottom can't move down: these are not errors
    /// and leave the vitmap unchanged. The shape's handle is returned (handles follow their shapes when they move).
    ///
    pub fn reorder_shape(&mut self, handle: ShapeHandle, direction: ReorderDirection) -> Result<ShapeHandle, VitmapError> {
        let index = self.index_of_shape(handle).ok_or(VitmapError::NotFound)?;

        let target = match direction {
            ReorderDirection::Up    => index.checked_add(1).filter(|target| *target < self.shapes.len()),
            ReorderDirection::Down  => index.checked_sub(1),
        };

        if let Some(target) = target {
            self.shapes.swap(index, target);
            self.shape_handles.swap(index, target);

            debug!("Moved shape {:?} from position {} to {}", handle, index, target);
        }

        Ok(handle)
    }

    ///
    /// Moves every shape in this vitmap by an offset
    ///
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        for shape in self.shapes.iter_mut() {
            shape.move_by(dx, dy);
        }
    }

    ///
    /// Finds all of the shapes that contain a point, from bottom to top
    ///
    pub fn shapes_containing_point(&self, point: Point) -> SmallVec<[ShapeHandle; 4]> {
        self.shapes.iter()
            .zip(self.shape_handles.iter())
            .filter(|(shape, _)| shape.contains_point(point))
            .map(|(_, handle)| *handle)
            .collect()
    }

    ///
    /// Finds the shape on top at a particular point
    ///
    pub fn topmost_shape_at(&self, point: Point) -> Option<ShapeHandle> {
        self.shapes.iter()
            .zip(self.shape_handles.iter())
            .rev()
            .find(|(shape, _)| shape.contains_point(point))
            .map(|(_, handle)| *handle)
    }

    ///
    /// Retrieves a shape from this vitmap
    ///
    pub fn shape(&self, handle: ShapeHandle) -> Option<&Shape> {
        self.index_of_shape(handle).map(move |index| &self.shapes[index])
    }

    ///
    /// Retrieves a shape from this vitmap so it can be edited
    ///
    pub fn shape_mut(&mut self, handle: ShapeHandle) -> Option<&mut Shape> {
        let index = self.index_of_shape(handle)?;
        Some(&mut self.shapes[index])
    }

    ///
    /// Finds the position of a shape in the painting order (0 is the bottom)
    ///
    pub fn index_of_shape(&self, handle: ShapeHandle) -> Option<usize> {
        self.shape_handles.iter().position(|existing| *existing == handle)
    }

    ///
    /// The shapes in this vitmap, from bottom to top
    ///
    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    ///
    /// The handles of the shapes in this vitmap, from bottom to top
    ///
    #[inline]
    pub fn shape_handles(&self) -> &[ShapeHandle] {
        &self.shape_handles
    }

    /// The number of shapes in this vitmap
    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// True if this vitmap has no shapes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    ///
    /// The bounding box of every point in this vitmap as (min, max), or None if there are no points
    ///
    pub fn bounds(&self) -> Option<(Point, Point)> {
        self.shapes.iter()
            .filter_map(|shape| shape.bounds())
            .reduce(|(min_a, max_a), (min_b, max_b)| {
                (Point::new(min_a.x.min(min_b.x), min_a.y.min(min_b.y)), Point::new(max_a.x.max(max_b.x), max_a.y.max(max_b.y)))
            })
    }
}

impl PartialEq for Vitmap {
    fn eq(&self, other: &Vitmap) -> bool {
        self.shapes == other.shapes
    }
}

impl From<VitmapData> for Vitmap {
    fn from(data: VitmapData) -> Vitmap {
        let shape_handles = data.shapes.iter().map(|_| ShapeHandle::allocate()).collect();

        Vitmap { shapes: data.shapes, shape_handles }
    }
}

impl From<Vitmap> for VitmapData {
    fn from(vitmap: Vitmap) -> VitmapData {
        VitmapData { shapes: vitmap.shapes }
    }
}

impl fmt::Display for Vitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vitmap:")?;
        writeln!(f, "  Number of Shapes: {}", self.shapes.len())?;
        writeln!(f, "  Shapes:")?;

        for (index, shape) in self.shapes.iter().enumerate() {
            writeln!(f, "    Shape {}:", index + 1)?;
            write!(f, "{}", shape)?;
        }

        Ok(())
    }
}
