use icy_pixel::{Canvas, CanvasOptions, ColorMode, MAX_X, MAX_Y, PixelError, Rectangle};
use pretty_assertions::assert_eq;

use crate::set_pixels;

#[test]
fn test_invalid_dimensions() {
    assert!(matches!(Canvas::new(0, 10), Err(PixelError::Dimension { width: 0, height: 10 })));
    assert!(matches!(Canvas::new(10, MAX_Y + 1), Err(PixelError::Dimension { .. })));
    assert!(Canvas::new(MAX_X, MAX_Y).is_ok());
}

#[test]
fn test_set_dimensions_keeps_canvas_on_error() {
    let mut canvas = Canvas::new(10, 10).unwrap();
    canvas.set_pixel(1, 1, true);
    assert!(canvas.set_dimensions(-1, 5).is_err());
    assert_eq!(10, canvas.width());
    assert!(canvas.pixel(1, 1));

    canvas.set_dimensions(20, 6).unwrap();
    assert_eq!((20, 6), (canvas.width(), canvas.height()));
    assert!(set_pixels(&canvas).is_empty());
}

#[test]
fn test_out_of_bounds_access() {
    let mut canvas = Canvas::new(8, 8).unwrap();
    canvas.rectangle(0, 0, 7, 7, true, true);
    let before = set_pixels(&canvas);

    for (x, y) in [(-1, 0), (0, -1), (8, 0), (0, 8), (100, 100), (i32::MIN, 3)] {
        assert!(!canvas.pixel(x, y));
        assert_eq!(0, canvas.pixel_color(x, y));
        canvas.set_pixel(x, y, false);
        canvas.set_pixel_color(x, y, 0);
    }
    assert_eq!(before, set_pixels(&canvas));
}

#[test]
fn test_clipping() {
    let mut canvas = Canvas::new(10, 10).unwrap();
    canvas.set_clipping(true, Some(Rectangle::from_coords(2, 2, 4, 4)));
    canvas.rectangle(0, 0, 9, 9, true, true);
    assert_eq!(9, set_pixels(&canvas).len());
    assert!(canvas.pixel(2, 2));
    assert!(canvas.pixel(4, 4));
    assert!(!canvas.pixel(5, 4));

    canvas.set_clipping(false, None);
    assert_eq!(None, canvas.clipping());
    canvas.set_pixel(9, 9, true);
    assert!(canvas.pixel(9, 9));

    // re-enabling reuses the last rectangle
    canvas.set_clipping(true, None);
    assert_eq!(Some(Rectangle::from_coords(2, 2, 4, 4)), canvas.clipping());
    canvas.set_pixel(0, 0, true);
    assert!(!canvas.pixel(0, 0));
}

#[test]
fn test_toggle() {
    let mut canvas = Canvas::new(4, 4).unwrap();
    canvas.set_toggle(true);
    canvas.set_pixel(1, 1, true);
    assert!(canvas.pixel(1, 1));
    canvas.set_pixel(1, 1, true);
    assert!(!canvas.pixel(1, 1));
}

#[test]
fn test_scale() {
    let mut canvas = Canvas::new(20, 20).unwrap();
    canvas.set_scale(2.0);
    canvas.set_pixel(3, 4, true);
    canvas.set_scale(1.0);
    assert!(canvas.pixel(6, 8));
    assert_eq!(1, set_pixels(&canvas).len());
}

#[test]
fn test_colors() {
    let mut canvas = Canvas::new(4, 4).unwrap();
    canvas.set_colors(0xFF_00_00, 0x00_00_10);
    canvas.set_pixel(0, 0, true);
    canvas.set_pixel(1, 0, false);
    assert_eq!(0xFF_00_00, canvas.pixel_color(0, 0));
    assert_eq!(0x10, canvas.pixel_color(1, 0));
    assert!(canvas.pixel(1, 0));
}

#[test]
fn test_clear_keeps_dimensions() {
    let mut canvas = Canvas::new(6, 3).unwrap();
    canvas.rectangle(0, 0, 5, 2, true, true);
    canvas.text(0, 0, "ab");
    canvas.clear();
    assert!(set_pixels(&canvas).is_empty());
    assert_eq!(None, canvas.overlay_char(0, 0));
    assert_eq!((6, 3), (canvas.width(), canvas.height()));
}

#[test]
fn test_options_round_trip() {
    let mut canvas = Canvas::new(4, 4).unwrap();
    canvas.set_color_mode(ColorMode::TrueColor);
    canvas.set_steps(100);
    let json = serde_json::to_string(canvas.options()).unwrap();
    let options: CanvasOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(ColorMode::TrueColor, options.color_mode);
    assert_eq!(15, options.steps);

    let defaults: CanvasOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(CanvasOptions::default(), defaults);
}

#[test]
fn test_apply_options_validates_steps() {
    let mut canvas = Canvas::new(4, 4).unwrap();
    canvas.apply_options(CanvasOptions { steps: 0, ..Default::default() });
    assert_eq!(15, canvas.steps());
    canvas.set_steps(50);
    assert_eq!(50, canvas.steps());
}
