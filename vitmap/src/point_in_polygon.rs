use crate::edges::*;
use crate::point::*;

/// How far a point can be from an edge (in vitmap units) and still count as lying on it
const ON_EDGE_TOLERANCE: f64 = 1e-5;

///
/// Determines whether or not a point lies inside a closed polygon
///
/// This is the classic ray-crossing test: a horizontal ray is cast from the point and it's inside the polygon
/// if the ray crosses an odd number of edges. Points that lie on the outline of the polygon (including its
/// vertices) are always outside. A polygon with fewer than 3 points never contains anything.
///
pub fn polygon_contains_point(points: &[Point], point: Point) -> bool {
    if points.len() < 3 {
        return false;
    }

    if polygon_edges(points).any(|(from, to)| point_on_segment(point, from, to)) {
        return false;
    }

    let (px, py)    = (point.x as f64, point.y as f64);
    let mut inside  = false;

    for (from, to) in polygon_edges(points) {
        let (x1, y1) = (from.x as f64, from.y as f64);
        let (x2, y2) = (to.x as f64, to.y as f64);

        // Only edges that straddle the ray can cross it (which also excludes horizontal edges)
        if (y1 > py) != (y2 > py) {
            let crossing_x = x1 + (py - y1) * (x2 - x1) / (y2 - y1);

            if px < crossing_x {
                inside = !inside;
            }
        }
    }

    inside
}

///
/// True if a point lies on the line segment between two other points
///
fn point_on_segment(point: Point, from: Point, to: Point) -> bool {
    let (px, py) = (point.x as f64, point.y as f64);
    let (x1, y1) = (from.x as f64, from.y as f64);
    let (x2, y2) = (to.x as f64, to.y as f64);

    let (dx, dy)    = (x2 - x1, y2 - y1);
    let len_sq      = dx*dx + dy*dy;

    if len_sq == 0.0 {
        let (ex, ey) = (px - x1, py - y1);
        return ex*ex + ey*ey <= ON_EDGE_TOLERANCE*ON_EDGE_TOLERANCE;
    }

    // Distance from the line through the segment
    let cross   = dx * (py - y1) - dy * (px - x1);
    let len     = len_sq.sqrt();
    if (cross / len).abs() > ON_EDGE_TOLERANCE {
        return false;
    }

    // Position along the segment
    let along       = (dx * (px - x1) + dy * (py - y1)) / len;
    along >= -ON_EDGE_TOLERANCE && along <= len + ON_EDGE_TOLERANCE
}
