use crate::{Canvas, PointF, Position};

fn to_point(p: Position) -> PointF {
    PointF::new(p.x as f64, p.y as f64)
}

fn quadratic(p0: PointF, c: PointF, p1: PointF, t: f64) -> PointF {
    let a = 1.0 - t;
    let (w0, w1, w2) = (a * a, 2.0 * t * a, t * t);
    PointF::new(w0 * p0.x + w1 * c.x + w2 * p1.x, w0 * p0.y + w1 * c.y + w2 * p1.y)
}

fn cubic(p0: PointF, c1: PointF, c2: PointF, p1: PointF, t: f64) -> PointF {
    let a = 1.0 - t;
    let (w0, w1, w2, w3) = (a * a * a, 3.0 * a * a * t, 3.0 * a * t * t, t * t * t);
    PointF::new(
        w0 * p0.x + w1 * c1.x + w2 * c2.x + w3 * p1.x,
        w0 * p0.y + w1 * c1.y + w2 * c2.y + w3 * p1.y,
    )
}

impl Canvas {
    /// Flattens the quadratic curve into [`Canvas::steps`] line segments.
    pub fn quadratic_bezier(&mut self, p0: Position, c: Position, p1: Position, set: bool) {
        let (p0, c, p1) = (
            to_point(self.scale_position(p0)),
            to_point(self.scale_position(c)),
            to_point(self.scale_position(p1)),
        );
        self.flatten(p0, |t| quadratic(p0, c, p1, t), set);
    }

    /// Flattens the cubic curve into [`Canvas::steps`] line segments.
    pub fn cubic_bezier(&mut self, p0: Position, c1: Position, c2: Position, p1: Position, set: bool) {
        let (p0, c1, c2, p1) = (
            to_point(self.scale_position(p0)),
            to_point(self.scale_position(c1)),
            to_point(self.scale_position(c2)),
            to_point(self.scale_position(p1)),
        );
        self.flatten(p0, |t| cubic(p0, c1, c2, p1, t), set);
    }

    /// The point of the quadratic curve at `t` in `0.0..=1.0`, in canvas pixels.
    pub fn point_on_quadratic(&self, p0: Position, c: Position, p1: Position, t: f64) -> PointF {
        quadratic(
            to_point(self.scale_position(p0)),
            to_point(self.scale_position(c)),
            to_point(self.scale_position(p1)),
            t,
        )
    }

    /// The point of the cubic curve at `t` in `0.0..=1.0`, in canvas pixels.
    pub fn point_on_cubic(&self, p0: Position, c1: Position, c2: Position, p1: Position, t: f64) -> PointF {
        cubic(
            to_point(self.scale_position(p0)),
            to_point(self.scale_position(c1)),
            to_point(self.scale_position(c2)),
            to_point(self.scale_position(p1)),
            t,
        )
    }

    /// Joins the `steps + 1` samples of `curve` with `steps` segments, painting every pixel once.
    fn flatten(&mut self, start: PointF, curve: impl Fn(f64) -> PointF, set: bool) {
        let steps = self.steps();
        let mut last = Position::new(start.x as i32, start.y as i32);
        self.put(last.x, last.y, set);
        for i in 1..=steps {
            let p = curve(i as f64 / steps as f64);
            let p = Position::new(p.x as i32, p.y as i32);
            if p != last {
                self.line_continue(last, p, set);
                last = p;
            }
        }
    }
}
