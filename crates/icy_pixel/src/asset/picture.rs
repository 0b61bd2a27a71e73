use serde::{Deserialize, Serialize};

use crate::{Canvas, MAX_X, MAX_Y, PixelError, Position, Rectangle, Result};

/// A dense color bitmap, optionally cut into equally sized tiles ("segments").
///
/// Segments are numbered from 1 in row major order. Segment 0 and numbers past
/// the last tile address the whole picture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PictureRecord")]
pub struct Picture {
    /// Color mode the pixel values were made for.
    pub mode: u8,
    /// Pixels of this color are skipped when blitting.
    #[serde(rename = "colorKey")]
    pub color_key: Option<u32>,
    #[serde(rename = "sizeX")]
    width: i32,
    #[serde(rename = "sizeY")]
    height: i32,
    #[serde(rename = "segX")]
    seg_x: i32,
    #[serde(rename = "segY")]
    seg_y: i32,
    data: Vec<u32>,
}

/// The stored form of a [`Picture`], checked by [`Picture::try_from`].
#[derive(Deserialize)]
pub(super) struct PictureRecord {
    #[serde(default)]
    mode: u8,
    #[serde(rename = "colorKey", default)]
    color_key: Option<u32>,
    #[serde(rename = "sizeX")]
    width: i32,
    #[serde(rename = "sizeY")]
    height: i32,
    #[serde(rename = "segX", default)]
    seg_x: i32,
    #[serde(rename = "segY", default)]
    seg_y: i32,
    #[serde(default)]
    data: Vec<u32>,
}

impl TryFrom<PictureRecord> for Picture {
    type Error = PixelError;

    fn try_from(record: PictureRecord) -> Result<Self> {
        let mut picture = Picture::new(record.width, record.height, record.data)?.with_segments(record.seg_x, record.seg_y);
        picture.mode = record.mode;
        picture.color_key = record.color_key;
        Ok(picture)
    }
}

impl Picture {
    /// Missing pixels are filled with 0, extra ones dropped.
    ///
    /// # Errors
    ///
    /// Returns [`PixelError::Dimension`] when `width` or `height` is outside `1..=MAX`.
    pub fn new(width: i32, height: i32, mut data: Vec<u32>) -> Result<Self> {
        if !(1..=MAX_X).contains(&width) || !(1..=MAX_Y).contains(&height) {
            return Err(PixelError::dimension(width, height));
        }
        data.resize(width as usize * height as usize, 0);
        Ok(Self {
            mode: 0,
            color_key: None,
            width,
            height,
            seg_x: 0,
            seg_y: 0,
            data,
        })
    }

    pub fn with_segments(mut self, seg_x: i32, seg_y: i32) -> Self {
        self.seg_x = seg_x.max(0);
        self.seg_y = seg_y.max(0);
        self
    }

    pub fn with_color_key(mut self, key: u32) -> Self {
        self.color_key = Some(key);
        self
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn segment_size(&self) -> Position {
        Position::new(self.seg_x, self.seg_y)
    }

    pub fn segment_count(&self) -> usize {
        if self.seg_x <= 0 || self.seg_y <= 0 {
            return 0;
        }
        (self.width / self.seg_x) as usize * (self.height / self.seg_y) as usize
    }

    /// Top left source pixel of `segment`, `None` if it addresses the whole picture.
    pub fn segment_origin(&self, segment: usize) -> Option<Position> {
        if segment == 0 || segment > self.segment_count() {
            return None;
        }
        let tiles_x = (self.width / self.seg_x) as usize;
        let index = segment - 1;
        Some(Position::new(
            (index % tiles_x) as i32 * self.seg_x,
            (index / tiles_x) as i32 * self.seg_y,
        ))
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y as usize * self.width as usize + x as usize).copied()
    }
}

impl Canvas {
    /// Copies `segment` of `picture` (or all of it) to (`x`, `y`).
    pub fn picture(&mut self, picture: &Picture, x: i32, y: i32, segment: usize) {
        let (origin, size) = match picture.segment_origin(segment) {
            Some(origin) => (origin, picture.segment_size()),
            None => {
                if segment != 0 {
                    log::debug!("segment {segment} out of range, drawing whole picture");
                }
                (Position::default(), Position::new(picture.width, picture.height))
            }
        };

        for dy in 0..size.y {
            for dx in 0..size.x {
                let Some(color) = picture.pixel(origin.x + dx, origin.y + dy) else {
                    continue;
                };
                if picture.color_key == Some(color) {
                    continue;
                }
                self.set_pixel_color(x.saturating_add(dx), y.saturating_add(dy), color);
            }
        }
    }

    /// Snapshots the pixel colors inside `rect` as a picture.
    ///
    /// # Errors
    ///
    /// Returns [`PixelError::Dimension`] if the rectangle is too large for a picture.
    pub fn capture(&self, rect: Rectangle) -> Result<Picture> {
        let mut picture = Picture::new(rect.size.x.saturating_add(1), rect.size.y.saturating_add(1), Vec::new())?;
        for (i, y) in (rect.top()..=rect.bottom()).enumerate() {
            for (j, x) in (rect.left()..=rect.right()).enumerate() {
                picture.data[i * picture.width as usize + j] = self.get_color(x, y);
            }
        }
        picture.mode = self.color_mode() as u8;
        Ok(picture)
    }
}
