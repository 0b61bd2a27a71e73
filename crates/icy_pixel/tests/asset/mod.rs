use icy_pixel::{Canvas, Font, Glyph, Picture, PixelError, Position, Rectangle, Stamp, left_justify};
use pretty_assertions::assert_eq;

use crate::set_pixels;

mod store;

#[test]
fn test_left_justify_width_property() {
    let samples: [&[u64]; 5] = [
        &[0b1, 0b10, 0b100],
        &[0b11111, 0b00100, 0b00100],
        &[0xFFFF_0000_0000_0000, 0x1],
        &[0b1000, 0b0001, 0b0110],
        &[u64::MAX],
    ];
    for rows in samples {
        let max = rows.iter().copied().max().unwrap();
        let shift = max.leading_zeros();
        let (shifted, unused) = left_justify(rows, None);

        let min_trailing = shifted.iter().map(|row| row.trailing_zeros()).min().unwrap();
        assert_eq!(min_trailing, unused);
        assert!(shifted.iter().all(|row| *row <= max << shift));
        assert_eq!(max << shift, shifted.iter().copied().max().unwrap());

        let (again, unused_again) = left_justify(&shifted, None);
        assert_eq!(shifted, again);
        assert_eq!(unused, unused_again);
    }
}

#[test]
fn test_stamp_normalization_is_idempotent() {
    let mut stamp = Stamp::standard();
    let width = stamp.width();
    let rows = stamp.rows().to_vec();
    stamp.prepare();
    assert_eq!(width, stamp.width());
    assert_eq!(rows, stamp.rows());
}

#[test]
fn test_kerning() {
    let mut font = Font::standard();
    let mut canvas = Canvas::new(20, 6).unwrap();
    canvas.print(&mut font, 0, 0, "LT", true);

    // T tucks in one column behind L
    assert!(canvas.pixel(3, 4));
    assert!((4..=8).all(|x| canvas.pixel(x, 0)));
    assert!(!canvas.pixel(9, 0));
    assert!(canvas.pixel(6, 4));

    let mut canvas = Canvas::new(20, 6).unwrap();
    canvas.print(&mut font, 0, 0, "TL", true);
    assert!(canvas.pixel(6, 0));
    assert!(!canvas.pixel(5, 0));
}

#[test]
fn test_print_spacing_and_missing_glyphs() {
    let mut font = Font::standard();
    let mut canvas = Canvas::new(30, 6).unwrap();
    canvas.print_spaced(&mut font, 0, 0, "II", true, 2);
    // I is 3 wide, 1 gap column plus 2 spacing
    assert!(canvas.pixel(6, 0));
    assert!(!canvas.pixel(5, 0));

    let mut canvas = Canvas::new(30, 6).unwrap();
    canvas.print(&mut font, 0, 0, "a", true);
    assert!(set_pixels(&canvas).is_empty());
}

#[test]
fn test_font_aspect() {
    let mut font = Font::new();
    font.insert('x', Glyph::new(&[0b11, 0b01]));
    let mut canvas = Canvas::new(10, 10).unwrap();
    canvas.set_font_aspect(true, true);
    canvas.print(&mut font, 1, 1, "x", true);
    assert_eq!(
        vec![Position::new(1, 1), Position::new(2, 1), Position::new(3, 1), Position::new(4, 1),
             Position::new(1, 2), Position::new(2, 2), Position::new(3, 2), Position::new(4, 2),
             Position::new(3, 3), Position::new(4, 3), Position::new(3, 4), Position::new(4, 4)],
        set_pixels(&canvas)
    );
}

#[test]
fn test_glyph_offsets() {
    let mut font = Font::new();
    let mut glyph = Glyph::new(&[0b1]);
    glyph.offset_x = 2;
    glyph.offset_y = 1;
    font.insert('.', glyph);
    let mut canvas = Canvas::new(10, 10).unwrap();
    canvas.print(&mut font, 0, 0, ".", true);
    assert_eq!(vec![Position::new(2, 1)], set_pixels(&canvas));
}

#[test]
fn test_stamp() {
    let mut stamp = Stamp::standard();
    let mut canvas = Canvas::new(60, 15).unwrap();
    canvas.stamp(&mut stamp, 0, 0, true, false);
    let bits: u32 = stamp.rows().iter().map(|row| row.count_ones()).sum();
    assert_eq!(bits as usize, set_pixels(&canvas).len());
    assert!(!canvas.pixel(56, 2));
}

#[test]
fn test_opaque_stamp() {
    let mut stamp = Stamp::new(&[0b101]);
    let mut canvas = Canvas::new(5, 1).unwrap();
    canvas.rectangle(0, 0, 4, 0, true, true);
    canvas.stamp(&mut stamp, 0, 0, true, true);
    assert_eq!(vec![Position::new(0, 0), Position::new(2, 0), Position::new(3, 0), Position::new(4, 0)], set_pixels(&canvas));

    canvas.stamp(&mut stamp, 1, 0, false, true);
    assert_eq!(vec![Position::new(0, 0), Position::new(2, 0), Position::new(4, 0)], set_pixels(&canvas));
}

fn numbered_picture() -> Picture {
    Picture::new(4, 4, (1..=16).collect()).unwrap().with_segments(2, 2)
}

#[test]
fn test_picture_segment() {
    let picture = numbered_picture();
    let mut canvas = Canvas::new(20, 20).unwrap();
    canvas.picture(&picture, 10, 10, 3);
    assert_eq!(9, canvas.pixel_color(10, 10));
    assert_eq!(10, canvas.pixel_color(11, 10));
    assert_eq!(13, canvas.pixel_color(10, 11));
    assert_eq!(14, canvas.pixel_color(11, 11));
    assert_eq!(4, set_pixels(&canvas).len());
}

#[test]
fn test_picture_segment_fallback() {
    for segment in [0, 5, 100] {
        let mut canvas = Canvas::new(8, 8).unwrap();
        canvas.picture(&numbered_picture(), 0, 0, segment);
        assert_eq!(16, set_pixels(&canvas).len());
        assert_eq!(16, canvas.pixel_color(3, 3));
    }
}

#[test]
fn test_picture_color_key() {
    let picture = Picture::new(2, 1, vec![5, 7]).unwrap().with_color_key(7);
    let mut canvas = Canvas::new(4, 4).unwrap();
    canvas.set_pixel_color(1, 0, 3);
    canvas.picture(&picture, 0, 0, 0);
    assert_eq!(5, canvas.pixel_color(0, 0));
    assert_eq!(3, canvas.pixel_color(1, 0));
}

#[test]
fn test_capture() {
    let mut canvas = Canvas::new(10, 10).unwrap();
    canvas.circle(5, 5, 3, true);
    let picture = canvas.capture(Rectangle::from_coords(2, 2, 8, 8)).unwrap();
    assert_eq!((7, 7), (picture.width(), picture.height()));

    let mut copy = Canvas::new(10, 10).unwrap();
    copy.picture(&picture, 2, 2, 0);
    assert_eq!(set_pixels(&canvas), set_pixels(&copy));
}

#[test]
fn test_scaled_picture() {
    let picture = Picture::new(2, 1, vec![5, 7]).unwrap();
    let mut canvas = Canvas::new(10, 10).unwrap();
    canvas.set_scale(2.0);
    canvas.picture(&picture, 1, 1, 0);
    canvas.set_scale(1.0);
    assert_eq!(vec![Position::new(2, 2), Position::new(4, 2)], set_pixels(&canvas));
    assert_eq!(5, canvas.pixel_color(2, 2));
    assert_eq!(7, canvas.pixel_color(4, 2));
}

#[test]
fn test_picture_record_is_validated() {
    let record = r#"{"sizeX":2,"sizeY":2147483647,"segX":1,"segY":1,"data":[]}"#;
    assert!(serde_json::from_str::<Picture>(record).is_err());

    let picture: Picture = serde_json::from_str(r#"{"sizeX":2,"sizeY":2,"segX":1,"segY":1,"colorKey":3,"data":[1]}"#).unwrap();
    assert_eq!(4, picture.segment_count());
    assert_eq!(Some(3), picture.color_key);
    assert_eq!(Some(0), picture.pixel(1, 1));
}

#[test]
fn test_huge_capture() {
    let canvas = Canvas::new(10, 10).unwrap();
    let rect = Rectangle::from_coords(0, 0, 1, i32::MAX);
    assert!(matches!(canvas.capture(rect), Err(PixelError::Dimension { .. })));
}
