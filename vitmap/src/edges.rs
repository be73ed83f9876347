use crate::point::*;

use std::iter::FusedIterator;

///
/// Iterates over the edges of a closed polygon
///
/// Polygons are stored without repeating their first point, so the final edge runs from the last
/// point back to the first one. This is the only place that closing edge is generated.
///
#[derive(Clone, Debug)]
pub struct ShapeEdges<'a> {
    points: &'a [Point],
    index:  usize,
}

///
/// Returns the edges of the closed polygon described by a list of points
///
/// There are no edges for 0 or 1 points. Two points produce the same segment twice (there and back).
///
pub fn polygon_edges(points: &[Point]) -> ShapeEdges<'_> {
    ShapeEdges { points, index: 0 }
}

impl<'a> Iterator for ShapeEdges<'a> {
    type Item = (Point, Point);

    fn next(&mut self) -> Option<(Point, Point)> {
        let len = self.points.len();

        if len < 2 || self.index >= len {
            return None;
        }

        let from    = self.points[self.index];
        let to      = self.points[(self.index + 1) % len];
        self.index  += 1;

        Some((from, to))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.points.len() < 2 { 0 } else { self.points.len() - self.index };
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for ShapeEdges<'a> { }
impl<'a> FusedIterator for ShapeEdges<'a> { }
