use crate::Canvas;

// Frame styles, the nine parts in reading order: top left, top, top right,
// left, center, right, bottom left, bottom, bottom right.
pub const SINGLE_FRAME: &str = "┌─┐│*│└─┘";
pub const DOUBLE_FRAME: &str = "╔═╗║*║╚═╝";
pub const ROUND_FRAME: &str = "╭─╮│*│╰─╯";
pub const BLOCK_FRAME: &str = "▛▀▜▌*▐▙▄▟";
pub const ASCII_FRAME: &str = "+-+|*|+-+";

/// Frame part mask bits for [`Canvas::text_frame`].
pub const FRAME_TOP_LEFT: u16 = 1 << 8;
pub const FRAME_TOP: u16 = 1 << 7;
pub const FRAME_TOP_RIGHT: u16 = 1 << 6;
pub const FRAME_LEFT: u16 = 1 << 5;
pub const FRAME_RIGHT: u16 = 1 << 3;
pub const FRAME_BOTTOM_LEFT: u16 = 1 << 2;
pub const FRAME_BOTTOM: u16 = 1 << 1;
pub const FRAME_BOTTOM_RIGHT: u16 = 1;
pub const FRAME_ALL: u16 = FRAME_TOP_LEFT | FRAME_TOP | FRAME_TOP_RIGHT | FRAME_LEFT | FRAME_RIGHT | FRAME_BOTTOM_LEFT | FRAME_BOTTOM | FRAME_BOTTOM_RIGHT;

const HBAR: [char; 8] = ['█', '▏', '▎', '▍', '▌', '▋', '▊', '▉'];

/// A horizontal bar `size` eighths of a cell long.
pub fn hbar(size: usize) -> String {
    let mut bar: String = std::iter::repeat_n(HBAR[0], size / 8).collect();
    if size % 8 > 0 {
        bar.push(HBAR[size % 8]);
    }
    bar
}

/// The nine parts of `style`, `None` (and a warning) if it is too short.
fn frame_parts(style: &str) -> Option<Vec<char>> {
    let parts: Vec<char> = style.chars().collect();
    if parts.len() < 9 {
        log::warn!("frame style needs 9 characters, got {}", parts.len());
        return None;
    }
    Some(parts)
}

/// Places a string at a position, either in the overlay grid or in the last rendered frame.
type TextWriter = fn(&mut Canvas, i32, i32, &str);

fn write_char(canvas: &mut Canvas, write: TextWriter, x: i32, y: i32, ch: char) {
    let mut buf = [0; 4];
    write(canvas, x, y, ch.encode_utf8(&mut buf));
}

impl Canvas {
    /// Places `text` in the overlay grid starting at pixel (`x`, `y`), one character per pixel column.
    ///
    /// Written cells get a clear top and a set bottom pixel so the color render
    /// shows the character in the current colors. Text past the right edge is dropped.
    pub fn text(&mut self, x: i32, y: i32, text: &str) {
        if !self.in_bounds(x, y) {
            return;
        }
        let row = y / 2;
        for (col, ch) in (x..self.width()).zip(text.chars()) {
            self.set_overlay_char(col, row, ch);
            self.set_pixel(col, row * 2, false);
            self.set_pixel(col, row * 2 + 1, true);
        }
    }

    /// Draws the parts of a frame selected by `mask` (`FRAME_*` bits) into the overlay grid.
    ///
    /// `style` holds the nine frame characters, see [`SINGLE_FRAME`]. Corners are pixel
    /// coordinates in any order; frames thinner than one column or row are skipped.
    pub fn text_frame(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, style: &str, mask: u16) {
        let Some(parts) = frame_parts(style) else {
            return;
        };
        self.draw_frame(x1, y1, x2, y2, &parts, mask, Canvas::text);
    }

    fn draw_frame(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, parts: &[char], mask: u16, write: TextWriter) {
        let (x1, x2) = (x1.min(x2), x1.max(x2));
        let (y1, y2) = (y1.min(y2), y1.max(y2));
        let (w, h) = (x2 as i64 - x1 as i64, y2 as i64 - y1 as i64);
        if w < 1 || h < 1 {
            return;
        }

        // parts outside the canvas are never visible
        if h >= 2 {
            for y in (y1 + 1).max(0)..y2.min(self.height()) {
                if mask & FRAME_LEFT != 0 {
                    write_char(self, write, x1, y, parts[3]);
                }
                if mask & FRAME_RIGHT != 0 {
                    write_char(self, write, x2, y, parts[5]);
                }
            }
        }

        if w >= 2 {
            let len = (w - 1).min(self.width() as i64) as usize;
            if mask & FRAME_TOP != 0 {
                write(self, x1 + 1, y1, &parts[1].to_string().repeat(len));
            }
            if mask & FRAME_BOTTOM != 0 {
                write(self, x1 + 1, y2, &parts[7].to_string().repeat(len));
            }
        }

        for (bit, x, y, ch) in [
            (FRAME_TOP_LEFT, x1, y1, parts[0]),
            (FRAME_TOP_RIGHT, x2, y1, parts[2]),
            (FRAME_BOTTOM_LEFT, x1, y2, parts[6]),
            (FRAME_BOTTOM_RIGHT, x2, y2, parts[8]),
        ] {
            if mask & bit != 0 {
                write_char(self, write, x, y, ch);
            }
        }
    }

    /// Overwrites characters of the last rendered frame, starting at column `x` of row `y`.
    /// The row keeps its length; placement outside of the frame is ignored.
    pub fn text_in_frame(&mut self, x: i32, y: i32, text: &str) {
        if x < 0 || y < 0 {
            return;
        }
        let Some(line) = self.frame.get_mut(y as usize) else {
            return;
        };
        let mut chars: Vec<char> = line.chars().collect();
        let x = x as usize;
        if x > chars.len() {
            return;
        }
        for (dst, ch) in chars[x..].iter_mut().zip(text.chars()) {
            *dst = ch;
        }
        *line = chars.into_iter().collect();
    }

    /// [`Canvas::text_in_frame`] at a pixel position, mapped to its cell with the current scale and aspect.
    pub fn text_in_frame_scaled(&mut self, x: i32, y: i32, text: &str) {
        let (x, y) = self.frame_cell(x, y);
        self.text_in_frame(x, y, text);
    }

    /// Cell of the rendered frame showing pixel (`x`, `y`).
    fn frame_cell(&self, x: i32, y: i32) -> (i32, i32) {
        let (x, y) = self.scale_pos(x, y);
        let x = if self.options().aspect_x { x } else { x / 2 };
        let y = if self.options().aspect_y { y } else { y / 2 };
        (x, y)
    }

    fn frame_position(&self, x: i32, y: i32, scaled: bool) -> (i32, i32) {
        if scaled { self.frame_cell(x, y) } else { (x, y) }
    }

    /// Draws a frame like [`Canvas::text_frame`] straight into the last rendered frame.
    ///
    /// Corners are cells, or pixels mapped to cells when `scaled` is set.
    pub fn text_frame_in_frame(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, style: &str, mask: u16, scaled: bool) {
        let Some(parts) = frame_parts(style) else {
            return;
        };
        let (x1, y1) = self.frame_position(x1, y1, scaled);
        let (x2, y2) = self.frame_position(x2, y2, scaled);
        self.draw_frame(x1, y1, x2, y2, &parts, mask, Canvas::text_in_frame);
    }

    /// Writes `x2 - x1` top edge characters of `style` from the left end point into the last rendered frame.
    pub fn text_hline_in_frame(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, style: &str, scaled: bool) {
        let Some(parts) = frame_parts(style) else {
            return;
        };
        let mut from = self.frame_position(x1, y1, scaled);
        let mut to = self.frame_position(x2, y2, scaled);
        if from.0 > to.0 {
            std::mem::swap(&mut from, &mut to);
        }
        let len = (to.0 as i64 - from.0 as i64).min(self.width() as i64) as usize;
        self.text_in_frame(from.0, from.1, &parts[1].to_string().repeat(len));
    }

    /// Writes the left edge character of `style` into the rows `y1..y2` (exclusive) of the
    /// last rendered frame, in the column of the upper end point.
    pub fn text_vline_in_frame(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, style: &str, scaled: bool) {
        let Some(parts) = frame_parts(style) else {
            return;
        };
        let mut from = self.frame_position(x1, y1, scaled);
        let mut to = self.frame_position(x2, y2, scaled);
        if from.1 > to.1 {
            std::mem::swap(&mut from, &mut to);
        }
        for y in from.1.max(0)..to.1.min(self.height()) {
            write_char(self, Canvas::text_in_frame, from.0, y, parts[3]);
        }
    }
}
