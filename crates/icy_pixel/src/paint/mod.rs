//! Integer rasterization of lines, rectangles, circles, ellipses and flood fills.
//!
//! All public entry points scale their coordinates once through the canvas scale
//! factor and then write through the canvas pixel contract, so clipping and
//! bounds checks apply to every primitive.

use crate::{Canvas, Position};

mod arc;
pub use arc::*;

mod bezier;

/// `- - - - - -`
pub const DOT_1X1: u8 = 0b0101_0101;
/// `--  --  --`
pub const DOT_2X2: u8 = 0b0011_0011;
/// `----    ----`
pub const DOT_4X4: u8 = 0b0000_1111;
/// `-   -   -`
pub const DOT_1X3: u8 = 0b0001_0001;
/// `---  -  ---  -`
pub const DOT_3X2X1: u8 = 0b0010_0111;
/// `------  ------`
pub const DOT_6X2: u8 = 0b0011_1111;
/// `------- -------`
pub const DOT_7X1: u8 = 0b0111_1111;
/// `----- - ----- -`
pub const DOT_5X1X1: u8 = 0b0101_1111;

/// Walks the pixels of a Bresenham line, both end points included.
pub struct LinePoints {
    cur: Position,
    to: Position,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl LinePoints {
    pub fn new(from: Position, to: Position) -> Self {
        let dx = (to.x as i64 - from.x as i64).abs();
        let dy = -(to.y as i64 - from.y as i64).abs();
        Self {
            cur: from,
            to,
            dx,
            dy,
            sx: if from.x < to.x { 1 } else { -1 },
            sy: if from.y < to.y { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for LinePoints {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.done {
            return None;
        }
        let result = self.cur;
        if self.cur == self.to {
            self.done = true;
            return Some(result);
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.cur.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.cur.y += self.sy;
        }
        Some(result)
    }
}

/// The pixels of the line between `from` and `to`. The set doesn't depend on the direction.
pub fn line_points(from: Position, to: Position) -> Vec<Position> {
    let (from, to) = canonical(from, to);
    LinePoints::new(from, to).collect()
}

fn canonical(from: Position, to: Position) -> (Position, Position) {
    if (to.x, to.y) < (from.x, from.y) { (to, from) } else { (from, to) }
}

/// Clips the segment against the `width` x `height` area grown by one pixel on every side.
///
/// Segments with both ends in that area come back unchanged, segments missing it return `None`.
fn clip_line(from: Position, to: Position, width: i32, height: i32) -> Option<(Position, Position)> {
    let inside = |p: Position| (-1..=width).contains(&p.x) && (-1..=height).contains(&p.y);
    if inside(from) && inside(to) {
        return Some((from, to));
    }

    let (x0, y0) = (from.x as f64, from.y as f64);
    let (dx, dy) = (to.x as f64 - x0, to.y as f64 - y0);
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [(-dx, x0 + 1.0), (dx, width as f64 - x0), (-dy, y0 + 1.0), (dy, height as f64 - y0)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    let at = |t: f64| Position::new((x0 + t * dx).round() as i32, (y0 + t * dy).round() as i32);
    Some((at(t0), at(t1)))
}

/// Half axes beyond this are ignored by [`Canvas::ellipse_rect`].
const MAX_ELLIPSE_AXIS: i64 = 1 << 18;

impl Canvas {
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, set: bool) {
        let from = self.scale_position(Position::new(x0, y0));
        let to = self.scale_position(Position::new(x1, y1));
        self.line_raw(from, to, set);
    }

    pub(crate) fn line_raw(&mut self, from: Position, to: Position, set: bool) {
        self.line_segment(from, to, set, false);
    }

    /// Continues a polyline at `from`: like `line_raw` but leaves `from` to the previous segment.
    pub(crate) fn line_continue(&mut self, from: Position, to: Position, set: bool) {
        self.line_segment(from, to, set, true);
    }

    fn line_segment(&mut self, from: Position, to: Position, set: bool, skip_from: bool) {
        let (a, b) = canonical(from, to);
        let Some((a, b)) = clip_line(a, b, self.width(), self.height()) else {
            return;
        };
        for p in LinePoints::new(a, b) {
            if skip_from && p == from {
                continue;
            }
            self.put(p.x, p.y, set);
        }
    }

    /// Draws a line where only the steps whose current pattern bit is 1 are painted.
    /// The pattern rotates right by one bit per step, painted or not.
    pub fn dotted_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, set: bool, pattern: Option<u8>) {
        let mut pattern = pattern.unwrap_or(DOT_1X1);
        let from = self.scale_position(Position::new(x0, y0));
        let to = self.scale_position(Position::new(x1, y1));
        let Some((start, end)) = clip_line(from, to, self.width(), self.height()) else {
            return;
        };
        // keep the pattern phase of the steps clipped away
        let skipped = (start.x as i64 - from.x as i64).abs().max((start.y as i64 - from.y as i64).abs());
        pattern = pattern.rotate_right((skipped % 8) as u32);

        for p in LinePoints::new(start, end) {
            if pattern & 0x01 != 0 {
                self.put(p.x, p.y, set);
            }
            pattern = pattern.rotate_right(1);
        }
    }

    /// Inclusive rectangle, corner order doesn't matter.
    pub fn rectangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, set: bool, filled: bool) {
        let (x0, y0) = self.scale_pos(x0, y0);
        let (x1, y1) = self.scale_pos(x1, y1);
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));

        // rows and columns past the canvas can't be written
        let (x_from, x_to) = (left.max(-1), right.min(self.width()));
        let (y_from, y_to) = (top.max(-1), bottom.min(self.height()));
        for y in y_from..=y_to {
            if filled || y == top || y == bottom {
                for x in x_from..=x_to {
                    self.put(x, y, set);
                }
            } else {
                self.put(left, y, set);
                self.put(right, y, set);
            }
        }
    }

    /// Midpoint circle around (`cx`, `cy`).
    pub fn circle(&mut self, cx: i32, cy: i32, radius: i32, set: bool) {
        let (cx, cy) = self.scale_pos(cx, cy);
        let radius = self.scale_len(radius) as i64;
        let (cx, cy) = (cx as i64, cy as i64);
        if cx + radius < 0 || cy + radius < 0 || cx - radius >= self.width() as i64 || cy - radius >= self.height() as i64 {
            return;
        }
        let mut x = -radius;
        let mut y = 0;
        let mut err = 2 - 2 * radius;
        loop {
            self.plot(cx - x, cy + y, set);
            self.plot(cx - y, cy - x, set);
            self.plot(cx + x, cy - y, set);
            self.plot(cx + y, cy + x, set);
            let r = err;
            if r > x {
                x += 1;
                err += x * 2 + 1;
            }
            if r <= y {
                y += 1;
                err += y * 2 + 1;
            }
            if x >= 0 {
                break;
            }
        }
    }

    /// Ellipse fitting exactly inside the rectangle spanned by the two corners.
    pub fn ellipse_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, set: bool) {
        let (x0, y0) = self.scale_pos(x0, y0);
        let (x1, y1) = self.scale_pos(x1, y1);
        if x0.max(x1) < 0 || y0.max(y1) < 0 || x0.min(x1) >= self.width() || y0.min(y1) >= self.height() {
            return;
        }
        let (mut x0, mut y0, mut x1, mut y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
        let mut a = (x1 - x0).abs();
        let b = (y1 - y0).abs();
        if a > MAX_ELLIPSE_AXIS || b > MAX_ELLIPSE_AXIS {
            log::debug!("ellipse {a}x{b} too large, skipped");
            return;
        }
        let mut b1 = b & 1;

        // error increments
        let mut dx = 4 * (1 - a) * b * b;
        let mut dy = 4 * (b1 + 1) * a * a;
        let mut err = dx + dy + b1 * a * a;

        if x0 > x1 {
            x0 = x1;
            x1 += a;
        }
        if y0 > y1 {
            y0 = y1;
        }
        y0 += (b + 1) / 2;
        y1 = y0 - b1;
        a *= 8 * a;
        b1 = 8 * b * b;

        loop {
            self.plot(x1, y0, set);
            self.plot(x0, y0, set);
            self.plot(x0, y1, set);
            self.plot(x1, y1, set);
            let e2 = 2 * err;
            if e2 >= dx {
                x0 += 1;
                x1 -= 1;
                dx += b1;
                err += dx;
            }
            if e2 <= dy {
                y0 += 1;
                y1 -= 1;
                dy += a;
                err += dy;
            }
            if x0 > x1 {
                break;
            }
        }

        // flat ellipses finish the tips
        while y0 - y1 < b {
            self.plot(x0 - 1, y0, set);
            self.plot(x1 + 1, y0, set);
            y0 += 1;
            self.plot(x0 - 1, y1, set);
            self.plot(x1 + 1, y1, set);
            y1 -= 1;
        }
    }

    fn plot(&mut self, x: i64, y: i64, set: bool) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.put(x, y, set);
        }
    }

    /// 4-connected scanline fill of the region sharing the seed's state.
    pub fn flood_fill(&mut self, x: i32, y: i32, set: bool) {
        let (x, y) = self.scale_pos(x, y);
        if !self.is_writable(x, y) {
            return;
        }
        let target = self.get(x, y);
        if target == set {
            return;
        }

        let mut visited = vec![false; (self.width() * self.height()) as usize];
        let mut stack = vec![Position::new(x, y)];
        while let Some(seed) = stack.pop() {
            if !self.fill_matches(&visited, seed.x, seed.y, target) {
                continue;
            }

            let mut start = seed.x;
            while self.fill_matches(&visited, start - 1, seed.y, target) {
                start -= 1;
            }

            let mut above_active = false;
            let mut below_active = false;
            let mut cur = start;
            while self.fill_matches(&visited, cur, seed.y, target) {
                self.put(cur, seed.y, set);
                visited[(seed.y * self.width() + cur) as usize] = true;

                for (ny, active) in [(seed.y - 1, &mut above_active), (seed.y + 1, &mut below_active)] {
                    if self.fill_matches(&visited, cur, ny, target) {
                        if !*active {
                            stack.push(Position::new(cur, ny));
                            *active = true;
                        }
                    } else {
                        *active = false;
                    }
                }
                cur += 1;
            }
        }
    }

    fn fill_matches(&self, visited: &[bool], x: i32, y: i32, target: bool) -> bool {
        self.is_writable(x, y) && !visited[(y * self.width() + x) as usize] && self.get(x, y) == target
    }
}
