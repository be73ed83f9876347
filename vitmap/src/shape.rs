use crate::edges::*;
use crate::color::*;
use crate::error::*;
use crate::point::*;
use crate::handle::*;
use crate::point_in_polygon::*;

use log::*;

use std::fmt;

///
/// A closed polygon with a single fill colour
///
/// The first point is not repeated at the end of the list: the polygon is implicitly closed. Shapes with fewer
/// than 3 points can exist while they are being drawn, but never tessellate to anything and never contain a point.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "ShapeData", into = "ShapeData")]
pub struct Shape {
    /// The points making up the outline of this shape
    points:         Vec<Point>,

    /// The handle of each point (same length as points)
    point_handles:  Vec<PointHandle>,

    /// The colour this shape is filled with
    color:          Color,
}

///
/// The serialized form of a shape (handles are reallocated when a shape is deserialized)
///
#[derive(Clone, Serialize, Deserialize)]
struct ShapeData {
    points: Vec<Point>,
    color:  Color,
}

impl Shape {
    ///
    /// Creates a new shape with no points, filled with opaque black
    ///
    pub fn new() -> Shape {
        Shape::with_color(Color::BLACK)
    }

    ///
    /// Creates a new shape with no points and a particular colour
    ///
    pub fn with_color(color: Color) -> Shape {
        Shape {
            points:         vec![],
            point_handles:  vec![],
            color:          color,
        }
    }

    ///
    /// Creates a shape from a list of points
    ///
    pub fn from_points(points: impl IntoIterator<Item=Point>, color: Color) -> Shape {
        let points          = points.into_iter().collect::<Vec<_>>();
        let point_handles   = points.iter().map(|_| PointHandle::allocate()).collect();

        Shape { points, point_handles, color }
    }

    ///
    /// Adds a point to the end of this shape, returning its handle
    ///
    pub fn add_point(&mut self, point: Point) -> Result<PointHandle, VitmapError> {
        // Reserve everything before changing anything, so a failure leaves the shape as it was
        reserve_one(&mut self.points)?;
        reserve_one(&mut self.point_handles)?;

        let handle = PointHandle::allocate();
        self.points.push(point);
        self.point_handles.push(handle);

        trace!("Added point ({}, {}) to shape: now {} points", point.x, point.y, self.points.len());

        Ok(handle)
    }

    ///
    /// Removes a point from this shape, returning where it was
    ///
    /// The remaining points keep their order and their handles.
    ///
    pub fn remove_point(&mut self, handle: PointHandle) -> Result<Point, VitmapError> {
        let index = self.index_of_point(handle).ok_or(VitmapError::NotFound)?;

        self.point_handles.remove(index);
        let point = self.points.remove(index);

        release_unused(&mut self.points);
        release_unused(&mut self.point_handles);

        Ok(point)
    }

    ///
    /// Moves a single point to a new position
    ///
    pub fn set_point(&mut self, handle: PointHandle, point: Point) -> Result<(), VitmapError> {
        let index = self.index_of_point(handle).ok_or(VitmapError::NotFound)?;
        self.points[index] = point;

        Ok(())
    }

    ///
    /// Retrieves the position of a point in this shape
    ///
    pub fn point(&self, handle: PointHandle) -> Option<Point> {
        self.index_of_point(handle).map(|index| self.points[index])
    }

    ///
    /// Finds where a point is in the outline of this shape
    ///
    pub fn index_of_point(&self, handle: PointHandle) -> Option<usize> {
        self.point_handles.iter().position(|existing| *existing == handle)
    }

    ///
    /// The handles of the points in this shape, in outline order
    ///
    #[inline]
    pub fn point_handles(&self) -> &[PointHandle] {
        &self.point_handles
    }

    ///
    /// The points making up the outline of this shape
    ///
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The number of points in this shape
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if this shape has no points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    ///
    /// True if this shape has enough points to enclose an area
    ///
    #[inline]
    pub fn is_polygon(&self) -> bool {
        self.points.len() >= 3
    }

    ///
    /// Moves every point in this shape by an offset
    ///
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        for point in self.points.iter_mut() {
            *point = point.offset(dx, dy);
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    ///
    /// The edges of the outline of this shape, including the edge that closes it
    ///
    #[inline]
    pub fn edges(&self) -> ShapeEdges<'_> {
        polygon_edges(&self.points)
    }

    ///
    /// True if a point is inside this shape (points on the outline are outside)
    ///
    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        polygon_contains_point(&self.points, point)
    }

    ///
    /// Finds the point in this shape closest to a position, provided it's within a maximum distance
    ///
    pub fn nearest_point(&self, position: Point, max_distance: f32) -> Option<PointHandle> {
        self.points.iter()
            .zip(self.point_handles.iter())
            .map(|(point, handle)| (point.distance_to(position), *handle))
            .filter(|(distance, _)| *distance <= max_distance)
            .min_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(_, handle)| handle)
    }

    ///
    /// The bounding box of this shape as (min, max), or None if it has no points
    ///
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = *self.points.first()?;

        Some(self.points.iter().fold((first, first), |(min, max), point| {
            (Point::new(min.x.min(point.x), min.y.min(point.y)), Point::new(max.x.max(point.x), max.y.max(point.y)))
        }))
    }
}

impl Default for Shape {
    fn default() -> Shape {
        Shape::new()
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Shape) -> bool {
        // Handles are identities, not part of the value
        self.color == other.color && self.points == other.points
    }
}

impl From<ShapeData> for Shape {
    fn from(data: ShapeData) -> Shape {
        Shape::from_points(data.points, data.color)
    }
}

impl From<Shape> for ShapeData {
    fn from(shape: Shape) -> ShapeData {
        ShapeData { points: shape.points, color: shape.color }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "      Number of Points: {}", self.points.len())?;
        writeln!(f, "      Color (RGBA): ({}, {}, {}, {})", self.color.r, self.color.g, self.color.b, self.color.a)?;
        writeln!(f, "      Points:")?;

        for (index, point) in self.points.iter().enumerate() {
            writeln!(f, "          Point {}: ({:.2}, {:.2})", index + 1, point.x, point.y)?;
        }

        Ok(())
    }
}
