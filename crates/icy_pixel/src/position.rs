use std::ops::{Add, AddAssign, Sub, SubAssign};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(x: {}, y: {})", self.x, self.y)
    }
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn min(self, other: Self) -> Self {
        Position::new(self.x.min(other.x), self.y.min(other.y))
    }

    pub fn max(self, other: Self) -> Self {
        Position::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl From<(i32, i32)> for Position {
    fn from(value: (i32, i32)) -> Self {
        Position { x: value.0, y: value.1 }
    }
}

impl Add<Position> for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign<Position> for Position {
    fn add_assign(&mut self, rhs: Position) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub<Position> for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl SubAssign<Position> for Position {
    fn sub_assign(&mut self, rhs: Position) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

/// A geometric point used by the curve evaluator and the path interpreter.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    pub fn new(x: f64, y: f64) -> Self {
        PointF { x, y }
    }

    /// Mirrors `control` through `self`: `self + (self - control)`.
    pub fn reflect(self, control: PointF) -> PointF {
        PointF::new(self.x + (self.x - control.x), self.y + (self.y - control.y))
    }
}

impl Add<PointF> for PointF {
    type Output = PointF;

    fn add(self, rhs: PointF) -> PointF {
        PointF::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Inclusive rectangle: `start` is the top left pixel, `start + size` the bottom right one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rectangle {
    pub start: Position,
    pub size: Position,
}

impl std::fmt::Display for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(x:{}, y:{}, width: {}, height: {})", self.start.x, self.start.y, self.size.x, self.size.y)
    }
}

impl Rectangle {
    /// Corner order doesn't matter.
    pub fn from_coords(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Rectangle {
            start: Position::new(x1.min(x2), y1.min(y2)),
            size: Position::new((x2 - x1).abs(), (y2 - y1).abs()),
        }
    }

    pub fn left(&self) -> i32 {
        self.start.x
    }

    pub fn top(&self) -> i32 {
        self.start.y
    }

    pub fn right(&self) -> i32 {
        self.start.x.saturating_add(self.size.x)
    }

    pub fn bottom(&self) -> i32 {
        self.start.y.saturating_add(self.size.y)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.left() <= x && x <= self.right() && self.top() <= y && y <= self.bottom()
    }
}
