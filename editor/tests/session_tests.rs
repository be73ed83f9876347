use flo_vitmap_editor::*;
use flo_vitmap::*;

fn draw_square(session: &mut EditorSession, x: f32, y: f32, size: f32) -> ShapeHandle {
    session.set_tool(Tool::Draw);
    session.commit_point(Point::new(x, y)).unwrap();
    session.commit_point(Point::new(x + size, y)).unwrap();
    session.commit_point(Point::new(x + size, y + size)).unwrap();
    session.commit_point(Point::new(x, y + size)).unwrap();

    session.finish_shape().unwrap()
}

#[test]
fn starts_with_one_empty_frame() {
    let session = EditorSession::new();

    assert!(session.animation().len() == 1);
    assert!(session.current_vitmap().map(|frame| frame.is_empty()) == Some(true));
    assert!(session.tool() == Tool::View);
}

#[test]
fn points_need_draw_tool() {
    let mut session = EditorSession::new();

    let result = session.commit_point(Point::new(1.0, 1.0));
    assert!(matches!(result, Err(EditorError::NotDrawing)), "Unexpected result {:?}", result);
}

#[test]
fn draw_shape_with_current_color() {
    let mut session = EditorSession::new();
    session.set_color(Color::rgba(255, 0, 0, 255)).unwrap();

    let square  = draw_square(&mut session, 0.0, 0.0, 10.0);
    let frame   = session.current_vitmap().unwrap();

    assert!(frame.len() == 1);
    assert!(frame.shape(square).map(|shape| shape.len()) == Some(4));
    assert!(frame.shape(square).map(|shape| shape.color()) == Some(Color::rgba(255, 0, 0, 255)));
    assert!(session.drawing_shape().is_none());
}

#[test]
fn degenerate_shape_is_discarded() {
    let mut session = EditorSession::new();
    session.set_tool(Tool::Draw);

    session.commit_point(Point::new(0.0, 0.0)).unwrap();
    session.commit_point(Point::new(1.0, 1.0)).unwrap();

    assert!(session.current_vitmap().unwrap().len() == 1, "Shapes exist while being drawn");

    // Switching tools finishes the shape
    session.set_tool(Tool::Select);

    assert!(session.current_vitmap().unwrap().is_empty());
}

#[test]
fn select_topmost_and_reorder() {
    let mut session = EditorSession::new();
    let bottom      = draw_square(&mut session, 0.0, 0.0, 10.0);
    let top         = draw_square(&mut session, 5.0, 5.0, 10.0);

    session.set_tool(Tool::Select);
    assert!(session.select_at(Point::new(7.0, 7.0)) == Some(top));

    session.lower_selected().unwrap();
    assert!(session.current_vitmap().unwrap().shape_handles() == &[top, bottom]);
    assert!(session.select_at(Point::new(7.0, 7.0)) == Some(bottom));

    assert!(session.select_at(Point::new(100.0, 100.0)).is_none());
    assert!(matches!(session.raise_selected(), Err(EditorError::NothingSelected)));
}

#[test]
fn delete_vertex_then_shape() {
    let mut session = EditorSession::new();
    let square      = draw_square(&mut session, 0.0, 0.0, 10.0);

    session.set_tool(Tool::Select);
    session.select_at(Point::new(5.0, 5.0));
    let vertex = session.select_vertex_at(Point::new(9.5, 9.5), 1.0);
    assert!(vertex.is_some());

    session.delete_selected().unwrap();
    assert!(session.current_vitmap().unwrap().shape(square).map(|shape| shape.len()) == Some(3));
    assert!(session.selected_vertex().is_none());
    assert!(session.selected_shape() == Some(square));

    session.delete_selected().unwrap();
    assert!(session.current_vitmap().unwrap().is_empty());
    assert!(session.selected_shape().is_none());
}

#[test]
fn drag_vertex_and_move_shape() {
    let mut session = EditorSession::new();
    let square      = draw_square(&mut session, 0.0, 0.0, 10.0);

    session.set_tool(Tool::Select);
    session.select_at(Point::new(5.0, 5.0));
    session.select_vertex_at(Point::new(0.0, 0.0), 1.0);
    session.move_selected_vertex(Point::new(-5.0, -5.0)).unwrap();
    session.move_selected(1.0, 1.0).unwrap();

    let shape = session.current_vitmap().unwrap().shape(square).unwrap();
    assert!(shape.points()[0] == Point::new(-4.0, -4.0), "Points are {:?}", shape.points());
    assert!(shape.points()[2] == Point::new(11.0, 11.0), "Points are {:?}", shape.points());
}

#[test]
fn undo_restores_previous_state() {
    let mut session = EditorSession::new();
    let square      = draw_square(&mut session, 0.0, 0.0, 10.0);
    let before      = session.animation().clone();

    session.set_tool(Tool::Select);
    session.select_at(Point::new(5.0, 5.0));
    session.delete_selected().unwrap();
    assert!(session.current_vitmap().unwrap().is_empty());

    assert!(session.undo());
    assert!(*session.animation() == before);
    assert!(session.current_vitmap().unwrap().shape(square).is_some(), "Handles should resolve after undo");
}

#[test]
fn undo_drawing_clears_stale_handles() {
    let mut session = EditorSession::new();
    session.set_tool(Tool::Draw);
    session.commit_point(Point::new(0.0, 0.0)).unwrap();

    assert!(session.undo());
    assert!(session.current_vitmap().unwrap().is_empty());
    assert!(session.drawing_shape().is_none());

    while session.undo() { }
    assert!(!session.undo());
}

#[test]
fn add_frame_copies_current() {
    let mut session = EditorSession::new();
    draw_square(&mut session, 0.0, 0.0, 10.0);

    let index = session.add_frame().unwrap();
    assert!(index == 1);
    assert!(session.animation().current_frame_index() == Some(1));
    assert!(session.animation().frame(0) == session.animation().frame(1));

    session.move_all(5.0, 0.0).unwrap();
    assert!(session.animation().frame(0) != session.animation().frame(1));

    session.previous_frame();
    session.previous_frame();
    assert!(session.animation().current_frame_index() == Some(0));

    assert!(session.set_frame(2).is_err());
    assert!(session.animation().current_frame_index() == Some(0));
}

#[test]
fn meshes_for_current_frame() {
    let mut session = EditorSession::new();
    draw_square(&mut session, 0.0, 0.0, 10.0);
    draw_square(&mut session, 20.0, 0.0, 10.0);

    let meshes = session.meshes().unwrap();

    assert!(meshes.len() == 2);
    assert!(meshes.iter().all(|mesh| mesh.triangle_count() == 2));
}

#[test]
fn save_and_load() {
    let dir         = tempfile::tempdir().unwrap();
    let path        = dir.path().join("drawing.vit");

    let mut session = EditorSession::new();
    draw_square(&mut session, 0.0, 0.0, 10.0);
    session.save(&path).unwrap();

    let mut other   = EditorSession::new();
    other.load(&path).unwrap();
    assert!(other.current_vitmap() == session.current_vitmap());

    let reopened    = EditorSession::open(&path);
    assert!(reopened.current_vitmap() == session.current_vitmap());
}

#[test]
fn failed_load_leaves_session_unchanged() {
    let dir         = tempfile::tempdir().unwrap();
    let mut session = EditorSession::new();
    draw_square(&mut session, 0.0, 0.0, 10.0);
    let before      = session.animation().clone();

    let result = session.load(dir.path().join("missing.vit"));

    assert!(matches!(result, Err(EditorError::Vitmap(VitmapError::Io(_)))), "Unexpected result {:?}", result);
    assert!(*session.animation() == before);
}

#[test]
fn open_missing_file_starts_empty() {
    let dir     = tempfile::tempdir().unwrap();
    let session = EditorSession::open(dir.path().join("missing.vit"));

    assert!(session.current_vitmap().map(|frame| frame.is_empty()) == Some(true));
}

#[test]
fn save_and_load_animation() {
    let dir         = tempfile::tempdir().unwrap();
    let path        = dir.path().join("walk.vita");

    let mut session = EditorSession::new();
    draw_square(&mut session, 0.0, 0.0, 10.0);
    session.add_frame().unwrap();
    session.save_animation(&path).unwrap();

    let mut other   = EditorSession::new();
    other.load_animation(&path).unwrap();

    assert!(*other.animation() == *session.animation());
}

#[test]
fn set_frame_discards_unfinished_shape() {
    let mut session = EditorSession::new();
    session.add_frame().unwrap();

    session.set_tool(Tool::Draw);
    session.commit_point(Point::new(0.0, 0.0)).unwrap();
    session.set_frame(0).unwrap();

    assert!(session.drawing_shape().is_none());
    assert!(session.animation().frame(1).map(|frame| frame.len()) == Some(0), "Frame is {:?}", session.animation().frame(1));
    assert!(session.animation().frame(0).map(|frame| frame.len()) == Some(0), "Frame is {:?}", session.animation().frame(0));
}

#[test]
fn undo_after_discard_resumes_drawing() {
    let mut session = EditorSession::new();
    session.set_tool(Tool::Draw);
    session.commit_point(Point::new(0.0, 0.0)).unwrap();
    session.commit_point(Point::new(10.0, 0.0)).unwrap();

    session.set_tool(Tool::View);
    assert!(session.current_vitmap().unwrap().is_empty());

    assert!(session.undo());

    let frame   = session.current_vitmap().unwrap();
    let drawing = session.drawing_shape();
    assert!(frame.len() == 1, "Frame is {:?}", frame);
    assert!(drawing == Some(frame.shape_handles()[0]), "Drawing {:?}", drawing);
    assert!(frame.shape(frame.shape_handles()[0]).map(|shape| shape.len()) == Some(1));
    assert!(session.tool() == Tool::Draw);

    // Drawing carries on with the restored shape
    session.commit_point(Point::new(10.0, 10.0)).unwrap();
    session.commit_point(Point::new(0.0, 10.0)).unwrap();
    let finished = session.finish_shape();
    assert!(finished == drawing, "Finished {:?}", finished);
    assert!(session.current_vitmap().unwrap().shape(finished.unwrap()).map(|shape| shape.len()) == Some(3));
}

#[test]
fn failed_edit_is_not_undoable() {
    let mut session = EditorSession::with_animation(VitmapAnimation::empty());

    let result = session.move_all(1.0, 1.0);
    assert!(matches!(result, Err(EditorError::NoFrame)), "Unexpected result {:?}", result);
    assert!(!session.undo());

    let result = session.add_frame();
    assert!(result.is_ok(), "Unexpected result {:?}", result);
    assert!(session.undo());
    assert!(!session.undo());
}

#[test]
fn undo_set_color_restores_both_colors() {
    let mut session = EditorSession::new();
    let red         = Color::rgba(255, 0, 0, 255);
    let blue        = Color::rgba(0, 0, 255, 255);
    session.set_color(red).unwrap();

    let square = draw_square(&mut session, 0.0, 0.0, 10.0);
    session.set_tool(Tool::Select);
    session.select_at(Point::new(5.0, 5.0));
    session.set_color(blue).unwrap();

    assert!(session.color() == blue);
    assert!(session.current_vitmap().unwrap().shape(square).map(|shape| shape.color()) == Some(blue));

    assert!(session.undo());
    assert!(session.color() == red, "Color is {:?}", session.color());
    assert!(session.current_vitmap().unwrap().shape(square).map(|shape| shape.color()) == Some(red));
    assert!(session.selected_shape() == Some(square));
}
