use std::ops::{Add, Sub};

///
/// A point in vitmap space
///
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    ///
    /// Creates a new point
    ///
    #[inline]
    pub fn new(x: f32, y: f32) -> Point {
        Point { x, y }
    }

    ///
    /// Returns this point moved by a particular offset
    ///
    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Point {
        Point { x: self.x + dx, y: self.y + dy }
    }

    ///
    /// The distance between this point and another
    ///
    #[inline]
    pub fn distance_to(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;

        (dx*dx + dy*dy).sqrt()
    }
}

impl From<(f32, f32)> for Point {
    #[inline]
    fn from((x, y): (f32, f32)) -> Point {
        Point { x, y }
    }
}

impl Into<(f32, f32)> for Point {
    #[inline]
    fn into(self) -> (f32, f32) {
        (self.x, self.y)
    }
}

impl Add<Point> for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Point) -> Point {
        Point { x: self.x + other.x, y: self.y + other.y }
    }
}

impl Sub<Point> for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }
}
