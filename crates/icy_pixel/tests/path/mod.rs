use icy_pixel::{Canvas, PathInterpreter, PathOptions, PixelError, PointF};
use pretty_assertions::assert_eq;

use crate::{init_logging, set_pixels};

fn draw(path: &str) -> (Canvas, PathInterpreter) {
    let mut canvas = Canvas::new(40, 40).unwrap();
    let mut interpreter = PathInterpreter::new(PathOptions::default());
    interpreter.draw(&mut canvas, path).unwrap();
    (canvas, interpreter)
}

#[test]
fn test_triangle_matches_lines() {
    let (canvas, _) = draw("M0 0 L10 0 L10 10 Z");

    let mut lines = Canvas::new(40, 40).unwrap();
    lines.line(0, 0, 10, 0, true);
    lines.line(10, 0, 10, 10, true);
    lines.line(10, 10, 0, 0, true);
    assert_eq!(set_pixels(&lines), set_pixels(&canvas));
}

#[test]
fn test_relative_square() {
    let (canvas, interpreter) = draw("m5 5 l5 0 v5 h-5 z");

    let mut square = Canvas::new(40, 40).unwrap();
    square.rectangle(5, 5, 10, 10, true, false);
    assert_eq!(set_pixels(&square), set_pixels(&canvas));
    assert_eq!(PointF::new(5.0, 5.0), interpreter.current());
}

#[test]
fn test_implicit_repetition() {
    let (canvas, interpreter) = draw("M0,0 L5,0 5,5");
    assert!(canvas.pixel(5, 0));
    assert!(canvas.pixel(5, 5));
    assert_eq!(PointF::new(5.0, 5.0), interpreter.current());
}

#[test]
fn test_cubic_reflection() {
    let (_, interpreter) = draw("M0 0 C0,0 10,0 10,10");
    assert_eq!(PointF::new(10.0, 20.0), interpreter.reflected_control());

    let (_, interpreter) = draw("M0 0 C0,0 10,0 10,10 S 20,20 30,30");
    assert_eq!(PointF::new(30.0, 30.0), interpreter.current());
    assert_eq!(PointF::new(40.0, 40.0), interpreter.reflected_control());
}

#[test]
fn test_quadratic_reflection() {
    let (_, interpreter) = draw("M0 0 Q5,0 10,10");
    assert_eq!(PointF::new(15.0, 20.0), interpreter.reflected_control());

    let (_, interpreter) = draw("M0 0 Q5,0 10,10 T20,10");
    assert_eq!(PointF::new(25.0, 0.0), interpreter.reflected_control());
}

#[test]
fn test_smooth_curve_without_previous_curve() {
    let (canvas, interpreter) = draw("M0 0 L4 0 T10 0");
    assert_eq!(PointF::new(10.0, 0.0), interpreter.current());
    assert_eq!(PointF::new(16.0, 0.0), interpreter.reflected_control());

    let mut line = Canvas::new(40, 40).unwrap();
    line.line(0, 0, 10, 0, true);
    assert_eq!(set_pixels(&line), set_pixels(&canvas));
}

#[test]
fn test_arc_only_moves() {
    let (canvas, interpreter) = draw("M0 0 A5 5");
    assert!(set_pixels(&canvas).is_empty());
    assert_eq!(PointF::new(5.0, 5.0), interpreter.current());
}

#[test]
fn test_unknown_command_continues() {
    init_logging();
    let mut canvas = Canvas::new(40, 40).unwrap();
    let mut interpreter = PathInterpreter::new(PathOptions::default());
    let result = interpreter.draw(&mut canvas, "M0 0 X L5 0");
    assert!(matches!(result, Err(PixelError::Parse { token }) if token == "X"));
    assert!(canvas.pixel(5, 0));
}

#[test]
fn test_origin_and_scale() {
    let mut canvas = Canvas::new(40, 40).unwrap();
    let options = PathOptions {
        origin: PointF::new(2.0, 2.0),
        scale: 2.0,
        set: true,
    };
    PathInterpreter::new(options).draw(&mut canvas, "M0 0 L1 0").unwrap();
    assert_eq!(vec![(4, 4), (5, 4), (6, 4)], set_pixels(&canvas).iter().map(|p| (p.x, p.y)).collect::<Vec<_>>());
}

#[test]
fn test_clear_path() {
    let mut canvas = Canvas::new(40, 40).unwrap();
    canvas.rectangle(0, 0, 39, 39, true, true);
    let options = PathOptions { set: false, ..PathOptions::at(0.0, 0.0) };
    PathInterpreter::new(options).draw(&mut canvas, "M0 0 H9").unwrap();
    assert!(!canvas.pixel(9, 0));
    assert!(canvas.pixel(10, 0));
}

#[test]
fn test_far_coordinates_are_clipped() {
    let (canvas, interpreter) = draw("M0 0 L3000000000 0");
    assert_eq!((0..40).map(|x| icy_pixel::Position::new(x, 0)).collect::<Vec<_>>(), set_pixels(&canvas));
    assert_eq!(PointF::new(3_000_000_000.0, 0.0), interpreter.current());
}
