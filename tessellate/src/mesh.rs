use crate::vertex::*;

use flo_vitmap::*;

///
/// A triangle mesh generated from a shape
///
#[derive(Clone, PartialEq, Debug)]
pub struct ShapeMesh {
    /// The vertices of the mesh (coloured with the shape's fill colour)
    pub vertices:   Vec<Vertex2D>,

    /// Indexes into the vertices, three per triangle
    pub indices:    Vec<u16>,

    /// The colour to fill the mesh with
    pub color:      Color,
}

impl ShapeMesh {
    ///
    /// Creates a mesh with no triangles
    ///
    pub fn empty(color: Color) -> ShapeMesh {
        ShapeMesh {
            vertices:   vec![],
            indices:    vec![],
            color:      color,
        }
    }

    /// True if this mesh has no triangles
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The number of triangles in this mesh
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    ///
    /// Iterates over the triangles in this mesh
    ///
    pub fn triangles<'a>(&'a self) -> impl 'a + Iterator<Item=[Vertex2D; 3]> {
        self.indices.chunks_exact(3)
            .map(move |triangle| [
                self.vertices[triangle[0] as usize],
                self.vertices[triangle[1] as usize],
                self.vertices[triangle[2] as usize],
            ])
    }

    ///
    /// The total area covered by the triangles in this mesh
    ///
    pub fn area(&self) -> f64 {
        self.triangles()
            .map(|[a, b, c]| {
                let (ax, ay) = (a.pos[0] as f64, a.pos[1] as f64);
                let (bx, by) = (b.pos[0] as f64, b.pos[1] as f64);
                let (cx, cy) = (c.pos[0] as f64, c.pos[1] as f64);

                ((bx - ax) * (cy - ay) - (cx - ax) * (by - ay)).abs() / 2.0
            })
            .sum()
    }
}
