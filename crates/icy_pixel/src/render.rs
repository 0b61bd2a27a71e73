//! Turns the pixel grid into text rows.
//!
//! Without colors every character cell shows a 2x2 pixel block through the 16
//! quadrant glyphs. In the color modes a cell shows two stacked pixels: the top
//! one as background color and the bottom one as a colored lower half block.
use crate::{Canvas, Rectangle};

/// Block glyphs indexed by a 4 bit mask, 8 = top left, 4 = top right, 2 = bottom left, 1 = bottom right.
pub const QUADRANTS: [char; 16] = [
    ' ', '\u{2597}', '\u{2596}', '\u{2584}', '\u{259D}', '\u{2590}', '\u{259E}', '\u{259F}', '\u{2598}', '\u{259A}', '\u{258C}', '\u{2599}', '\u{2580}', '\u{259C}',
    '\u{259B}', '\u{2588}',
];

const LOWER_HALF: char = '\u{2584}';
const RESET_ATTRIBUTES: &str = "\x1b[0m";

impl Canvas {
    /// Renders the whole canvas, see [`Canvas::render_region`].
    pub fn render(&mut self) -> &[String] {
        self.render_region(0, 0, self.width(), self.height())
    }

    /// Renders the pixels in `x1..x2` x `y1..y2` (clamped to the canvas) and keeps the result as the last frame.
    pub fn render_region(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> &[String] {
        let (x1, x2) = (x1.min(x2).clamp(0, self.width()), x1.max(x2).clamp(0, self.width()));
        let (y1, y2) = (y1.min(y2).clamp(0, self.height()), y1.max(y2).clamp(0, self.height()));
        log::trace!("render {x1},{y1} - {x2},{y2} in {:?}", self.color_mode());

        self.frame = if self.color_mode().is_colored() {
            self.render_colored(x1, y1, x2, y2)
        } else {
            self.render_blocks(x1, y1, x2, y2)
        };
        &self.frame
    }

    /// Renders only the smallest area holding every pixel that differs from the background.
    /// An empty canvas renders no rows.
    pub fn render_smallest(&mut self) -> &[String] {
        match self.smallest_bounds() {
            Some(bounds) => self.render_region(bounds.left(), bounds.top(), bounds.right() + 1, bounds.bottom() + 1),
            None => {
                self.frame.clear();
                &self.frame
            }
        }
    }

    /// Bounding box of all non background pixels grown by one pixel, clamped to the canvas.
    pub fn smallest_bounds(&self) -> Option<Rectangle> {
        let background = self.background();
        let mut bounds: Option<(i32, i32, i32, i32)> = None;
        for y in 0..self.height() {
            for x in 0..self.width() {
                if self.get_color(x, y) == background {
                    continue;
                }
                bounds = Some(match bounds {
                    Some((x1, y1, x2, y2)) => (x1.min(x), y1.min(y), x2.max(x), y2.max(y)),
                    None => (x, y, x, y),
                });
            }
        }
        let (x1, y1, x2, y2) = bounds?;
        Some(Rectangle::from_coords(
            (x1 - 1).max(0),
            (y1 - 1).max(0),
            (x2 + 1).min(self.width() - 1),
            (y2 + 1).min(self.height() - 1),
        ))
    }

    /// Quadrant mask of the cell whose top left pixel is (`x`, `y`), honoring aspect and invert.
    pub fn block_index(&self, x: i32, y: i32) -> usize {
        let on = !self.options().invert;
        let right = if self.options().aspect_x { x } else { x + 1 };
        let bottom = if self.options().aspect_y { y } else { y + 1 };

        let mut index = 0;
        for (px, py, weight) in [(x, y, 8), (right, y, 4), (x, bottom, 2), (right, bottom, 1)] {
            if self.get(px, py) == on {
                index += weight;
            }
        }
        index
    }

    fn render_blocks(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<String> {
        let step_x = if self.options().aspect_x { 1 } else { 2 };
        let step_y = if self.options().aspect_y { 1 } else { 2 };

        let mut lines = Vec::new();
        for y in (y1..y2).step_by(step_y) {
            let line: String = (x1..x2).step_by(step_x).map(|x| QUADRANTS[self.block_index(x, y)]).collect();
            lines.push(line);
        }
        lines
    }

    fn render_colored(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<String> {
        let mode = self.color_mode();
        let mut lines = Vec::new();
        for y in (y1..y2).step_by(2) {
            let mut line = String::new();
            let mut cur_fg = None;
            let mut cur_bg = None;
            for x in x1..x2 {
                let top = self.get_color(x, y);
                let bottom = self.get_color(x, y + 1);
                if cur_bg != Some(top) {
                    line.push_str(&mode.background(top));
                    cur_bg = Some(top);
                }
                if cur_fg != Some(bottom) {
                    line.push_str(&mode.foreground(bottom));
                    cur_fg = Some(bottom);
                }
                let ch = match self.overlay_char(x, y / 2) {
                    Some(ch) => ch,
                    None if top != bottom => LOWER_HALF,
                    None => ' ',
                };
                line.push(ch);
            }
            line.push_str(RESET_ATTRIBUTES);
            lines.push(line);
        }
        lines
    }
}
