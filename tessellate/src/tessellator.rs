use crate::mesh::*;
use crate::error::*;
use crate::vertex::*;
use crate::options::*;

use flo_vitmap::*;

use log::*;
use lyon::path;
use lyon::math::{point};
use lyon::tessellation;
use lyon::tessellation::{VertexBuffers, BuffersBuilder, FillVertex, FillOptions, TessellationError, GeometryBuilderError};

///
/// Converts the polygons in vitmaps into triangle meshes
///
pub struct ShapeTessellator {
    tessellator:    tessellation::FillTessellator,
    options:        TessellateOptions,
}

impl ShapeTessellator {
    ///
    /// Creates a tessellator with the default options
    ///
    pub fn new() -> ShapeTessellator {
        ShapeTessellator::with_options(TessellateOptions::default())
    }

    ///
    /// Creates a tessellator with some specific options
    ///
    pub fn with_options(options: TessellateOptions) -> ShapeTessellator {
        ShapeTessellator {
            tessellator:    tessellation::FillTessellator::new(),
            options:        options,
        }
    }

    #[inline]
    pub fn options(&self) -> &TessellateOptions {
        &self.options
    }

    ///
    /// Generates the mesh that fills a shape
    ///
    pub fn tessellate_shape(&mut self, shape: &Shape) -> Result<ShapeMesh, TessellateError> {
        self.tessellate_points(shape.points(), shape.color())
    }

    ///
    /// Generates the mesh that fills the closed polygon formed by a list of points
    ///
    /// Fewer than 3 points can't enclose anything, so these always produce an empty mesh.
    ///
    pub fn tessellate_points(&mut self, points: &[Point], color: Color) -> Result<ShapeMesh, TessellateError> {
        if points.len() < 3 {
            return Ok(ShapeMesh::empty(color));
        }

        if let Some(index) = points.iter().position(|point| !point.x.is_finite() || !point.y.is_finite()) {
            return Err(TessellateError::NonFiniteCoordinate { index });
        }

        // Set up the fill options
        let mut fill_options    = FillOptions::default();
        fill_options.fill_rule  = self.options.winding_rule.into();
        fill_options.tolerance  = self.options.clamped_tolerance();

        // Tessellate the outline
        let outline             = outline_path(points);
        let vertex_color        = color.to_array();
        let mut geometry        = VertexBuffers::<Vertex2D, u16>::new();

        self.tessellator.tessellate_path(&outline, &fill_options,
            &mut BuffersBuilder::new(&mut geometry, move |vertex: FillVertex| {
                let [x, y] = vertex.position().to_array();
                Vertex2D::with_pos(x, y).with_color(vertex_color)
            }))
            .map_err(|err| match err {
                TessellationError::GeometryBuilder(GeometryBuilderError::TooManyVertices)   => TessellateError::TooManyVertices,
                other                                                                       => TessellateError::Tessellation(other),
            })?;

        trace!("Tessellated {} points into {} triangles", points.len(), geometry.indices.len() / 3);

        Ok(ShapeMesh {
            vertices:   geometry.vertices,
            indices:    geometry.indices,
            color:      color,
        })
    }

    ///
    /// Generates the meshes for every shape in a vitmap, from bottom to top
    ///
    /// Shapes that are not polygons yet (fewer than 3 points) are left out.
    ///
    pub fn tessellate_vitmap(&mut self, vitmap: &Vitmap) -> Result<Vec<ShapeMesh>, TessellateError> {
        vitmap.shapes().iter()
            .filter(|shape| shape.is_polygon())
            .map(|shape| self.tessellate_shape(shape))
            .collect()
    }
}

impl Default for ShapeTessellator {
    fn default() -> ShapeTessellator {
        ShapeTessellator::new()
    }
}

///
/// Creates the lyon path for the outline of a closed polygon
///
/// This follows the same edges as `polygon_edges()`: one per consecutive pair of points, with the closing
/// edge from the last point back to the first supplied by `end(true)` rather than by repeating the first point.
///
fn outline_path(points: &[Point]) -> path::Path {
    let mut builder = path::Path::builder();

    builder.begin(point(points[0].x, points[0].y));
    for next_point in points.iter().skip(1) {
        builder.line_to(point(next_point.x, next_point.y));
    }

    // Closing the path adds the edge from the last point back to the first
    builder.end(true);

    builder.build()
}

///
/// Generates the mesh for a single shape using the default options
///
pub fn tessellate_shape(shape: &Shape) -> Result<ShapeMesh, TessellateError> {
    ShapeTessellator::new().tessellate_shape(shape)
}
