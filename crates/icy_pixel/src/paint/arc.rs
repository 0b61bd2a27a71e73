use crate::{Canvas, Position};

/// Where angle 0 lies and which way angles grow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArcOrientation {
    /// 0 is up (12 o'clock), 90 is right, angles grow clockwise.
    #[default]
    Clock,
    /// 0 is right (3 o'clock), 90 is up, angles grow counter clockwise.
    Math,
}

impl ArcOrientation {
    /// Offset of the point at `angle` degrees on a circle of `radius` around the origin.
    pub fn offset(self, radius: i32, angle: i32) -> Position {
        let rad = ((angle % 360) as f64).to_radians();
        let r = radius as f64;
        let (sin, cos) = ((r * rad.sin()).round() as i32, (r * rad.cos()).round() as i32);
        match self {
            ArcOrientation::Clock => Position::new(sin, -cos),
            ArcOrientation::Math => Position::new(cos, -sin),
        }
    }
}

/// The sampled angles `start, start + step, ...` below `end`, `None` if the arc is empty.
fn arc_angles(start: i32, end: i32, step: i32) -> Option<(impl Iterator<Item = i32>, i32)> {
    if start == end || step < 1 || !(0..=360).contains(&start) || !(0..=360).contains(&end) {
        return None;
    }
    let end = if start > end { end + 360 } else { end };
    Some(((start..end).step_by(step as usize), end))
}

fn arc_point(center: Position, orientation: ArcOrientation, radius: i32, angle: i32) -> Position {
    let offset = orientation.offset(radius, angle);
    Position::new(center.x.saturating_add(offset.x), center.y.saturating_add(offset.y))
}

impl Canvas {
    /// Plots the samples of an arc around (`x`, `y`), angle 0 up and growing clockwise.
    pub fn dot_arc(&mut self, x: i32, y: i32, radius: i32, start: i32, end: i32, step: i32, set: bool) {
        self.dot_arc_with(ArcOrientation::Clock, x, y, radius, start, end, step, set);
    }

    pub fn dot_arc_with(&mut self, orientation: ArcOrientation, x: i32, y: i32, radius: i32, start: i32, end: i32, step: i32, set: bool) {
        let center = self.scale_position(Position::new(x, y));
        let radius = self.scale_len(radius);
        let Some((angles, _)) = arc_angles(start, end, step) else {
            return;
        };
        for angle in angles {
            let p = arc_point(center, orientation, radius, angle);
            self.put(p.x, p.y, set);
        }
    }

    /// Connects the samples of an arc and closes it with a segment to the exact end angle.
    pub fn line_arc(&mut self, x: i32, y: i32, radius: i32, start: i32, end: i32, step: i32, set: bool) {
        self.line_arc_with(ArcOrientation::Clock, x, y, radius, start, end, step, set);
    }

    pub fn line_arc_with(&mut self, orientation: ArcOrientation, x: i32, y: i32, radius: i32, start: i32, end: i32, step: i32, set: bool) {
        let center = self.scale_position(Position::new(x, y));
        let radius = self.scale_len(radius);
        let Some((angles, end)) = arc_angles(start, end, step) else {
            return;
        };

        let points: Vec<Position> = angles.chain(std::iter::once(end)).map(|angle| arc_point(center, orientation, radius, angle)).collect();
        for (i, segment) in points.windows(2).enumerate() {
            if i == 0 {
                self.line_raw(segment[0], segment[1], set);
            } else {
                self.line_continue(segment[0], segment[1], set);
            }
        }
    }

    /// A spoke at `angle` between the radii `inner` and `outer`.
    pub fn line_radius(&mut self, x: i32, y: i32, inner: i32, outer: i32, angle: i32, set: bool) {
        let center = self.scale_position(Position::new(x, y));
        let inner = self.scale_len(inner);
        let outer = self.scale_len(outer);
        let from = arc_point(center, ArcOrientation::Clock, inner, angle);
        let to = arc_point(center, ArcOrientation::Clock, outer, angle);
        self.line_raw(from, to, set);
    }
}
