use flo_vitmap_tessellate::*;
use flo_vitmap::*;

fn unit_square() -> Shape {
    Shape::from_points(vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ], Color::rgba(200, 100, 50, 255))
}

fn u_shape() -> Shape {
    Shape::from_points(vec![
        Point::new(0.0, 0.0),
        Point::new(3.0, 0.0),
        Point::new(3.0, 3.0),
        Point::new(2.0, 3.0),
        Point::new(2.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, 3.0),
        Point::new(0.0, 3.0),
    ], Color::BLACK)
}

fn pentagram() -> Shape {
    let points = (0..5).map(|idx| {
        let angle = std::f32::consts::FRAC_PI_2 + (idx as f32) * 4.0 * std::f32::consts::PI / 5.0;
        Point::new(100.0 * angle.cos(), 100.0 * angle.sin())
    });

    Shape::from_points(points, Color::BLACK)
}

#[test]
fn square_is_two_triangles() {
    let mesh = tessellate_shape(&unit_square()).unwrap();

    assert!(mesh.triangle_count() == 2, "Mesh is {:?}", mesh);
    assert!(mesh.indices.len() == 6);
    assert!((mesh.area() - 1.0).abs() < 1e-6, "Area is {}", mesh.area());
}

#[test]
fn mesh_has_shape_color() {
    let mesh = tessellate_shape(&unit_square()).unwrap();

    assert!(mesh.color == Color::rgba(200, 100, 50, 255));
    assert!(mesh.vertices.iter().all(|vertex| vertex.color == [200, 100, 50, 255]), "Vertices are {:?}", mesh.vertices);
}

#[test]
fn indices_refer_to_vertices() {
    let mesh = tessellate_shape(&u_shape()).unwrap();

    assert!(mesh.indices.len() % 3 == 0);
    assert!(mesh.indices.iter().all(|index| (*index as usize) < mesh.vertices.len()));
}

#[test]
fn concave_shape_stays_inside_outline() {
    let shape   = u_shape();
    let mesh    = tessellate_shape(&shape).unwrap();

    assert!((mesh.area() - 7.0).abs() < 1e-4, "Area is {}", mesh.area());

    // No triangle should cover the notch of the U
    for [a, b, c] in mesh.triangles() {
        let twice_area = ((b.pos[0] - a.pos[0]) * (c.pos[1] - a.pos[1]) - (c.pos[0] - a.pos[0]) * (b.pos[1] - a.pos[1])).abs();
        if twice_area < 1e-6 { continue; }

        let centroid = Point::new((a.pos[0] + b.pos[0] + c.pos[0]) / 3.0, (a.pos[1] + b.pos[1] + c.pos[1]) / 3.0);
        assert!(shape.contains_point(centroid), "Triangle {:?} {:?} {:?} is outside the shape", a, b, c);
    }
}

#[test]
fn degenerate_shapes_are_empty() {
    let mut shape       = Shape::new();
    let mut tessellator = ShapeTessellator::new();

    for idx in 0..3 {
        let mesh = tessellator.tessellate_shape(&shape).unwrap();

        assert!(mesh.is_empty(), "Shape with {} points produced {:?}", idx, mesh);
        assert!(mesh.vertices.is_empty());

        shape.add_point(Point::new(idx as f32, (idx * idx) as f32)).unwrap();
    }

    assert!(!tessellator.tessellate_shape(&shape).unwrap().is_empty());
}

#[test]
fn winding_rule_changes_star_fill() {
    let star            = pentagram();

    let even_odd        = ShapeTessellator::with_options(TessellateOptions { winding_rule: WindingRule::EvenOdd, ..TessellateOptions::default() })
        .tessellate_shape(&star).unwrap();
    let non_zero        = ShapeTessellator::with_options(TessellateOptions { winding_rule: WindingRule::NonZero, ..TessellateOptions::default() })
        .tessellate_shape(&star).unwrap();

    // The pentagon in the middle of the star is only filled with the non-zero rule
    assert!(non_zero.area() > even_odd.area() + 100.0, "Even-odd area {}, non-zero area {}", even_odd.area(), non_zero.area());
}

#[test]
fn non_finite_points_are_rejected() {
    let shape   = Shape::from_points(vec![Point::new(0.0, 0.0), Point::new(f32::NAN, 0.0), Point::new(1.0, 1.0)], Color::BLACK);
    let result  = tessellate_shape(&shape);

    assert!(matches!(result, Err(TessellateError::NonFiniteCoordinate { index: 1 })), "Unexpected result {:?}", result);
}

#[test]
fn tolerance_is_clamped() {
    let options = TessellateOptions { tolerance: 0.0, ..TessellateOptions::default() };
    assert!(options.clamped_tolerance() == MIN_TOLERANCE);

    let options = TessellateOptions { tolerance: 1e9, ..TessellateOptions::default() };
    assert!(options.clamped_tolerance() == MAX_TOLERANCE);
}

#[test]
fn vitmap_meshes_in_z_order() {
    let mut vitmap = Vitmap::new();
    vitmap.push_shape(unit_square()).unwrap();
    vitmap.add_shape().unwrap();
    vitmap.push_shape(u_shape()).unwrap();

    let meshes = ShapeTessellator::new().tessellate_vitmap(&vitmap).unwrap();

    assert!(meshes.len() == 2, "Degenerate shapes should be skipped");
    assert!(meshes[0].color == Color::rgba(200, 100, 50, 255));
    assert!(meshes[1].color == Color::BLACK);
}

#[test]
fn mesh_follows_moved_shape() {
    let mut shape = unit_square();
    shape.move_by(10.0, 20.0);

    let mesh = tessellate_shape(&shape).unwrap();

    assert!(mesh.vertices.iter().all(|vertex| vertex.pos[0] >= 10.0 && vertex.pos[0] <= 11.0 && vertex.pos[1] >= 20.0 && vertex.pos[1] <= 21.0), "Vertices are {:?}", mesh.vertices);
}
