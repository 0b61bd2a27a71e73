//! Interpreter for a compact subset of the SVG path language.
//!
//! Supported commands are `M L H V C S Q T Z A` in absolute (upper case) and
//! relative (lower case) form. `A` only consumes an end point and moves there
//! without drawing.
use regex::Regex;

use crate::{Canvas, PixelError, PointF, Position, Result};

lazy_static::lazy_static! {
    static ref TOKEN_REGEX: Regex = Regex::new(r"[A-Za-z]|[+-]?\d+\.\d+|[+-]?\d+|[+-]?\.\d+").unwrap();
}

/// Where and how a path string lands on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathOptions {
    /// Added to every path coordinate before scaling.
    pub origin: PointF,
    pub scale: f64,
    pub set: bool,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            origin: PointF::default(),
            scale: 1.0,
            set: true,
        }
    }
}

impl PathOptions {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            origin: PointF::new(x, y),
            ..Default::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Move,
    Line,
    Horizontal,
    Vertical,
    Cubic,
    SmoothCubic,
    Quadratic,
    SmoothQuadratic,
    Arc,
    Close,
}

impl Command {
    /// The command for `letter` and whether it is relative.
    fn from_letter(letter: char) -> Option<(Self, bool)> {
        let cmd = match letter.to_ascii_uppercase() {
            'M' => Command::Move,
            'L' => Command::Line,
            'H' => Command::Horizontal,
            'V' => Command::Vertical,
            'C' => Command::Cubic,
            'S' => Command::SmoothCubic,
            'Q' => Command::Quadratic,
            'T' => Command::SmoothQuadratic,
            'A' => Command::Arc,
            'Z' => Command::Close,
            _ => return None,
        };
        Some((cmd, letter.is_ascii_lowercase()))
    }

    fn arity(self) -> usize {
        match self {
            Command::Close => 0,
            Command::Horizontal | Command::Vertical => 1,
            Command::Move | Command::Line | Command::SmoothQuadratic | Command::Arc => 2,
            Command::SmoothCubic | Command::Quadratic => 4,
            Command::Cubic => 6,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Token {
    Letter(char),
    Number(f64),
}

fn tokenize(path: &str) -> impl Iterator<Item = Token> + '_ {
    TOKEN_REGEX.find_iter(path).filter_map(|m| {
        let s = m.as_str();
        if let Ok(n) = s.parse::<f64>() {
            return Some(Token::Number(n));
        }
        s.chars().next().map(Token::Letter)
    })
}

/// Parses path strings and draws them with lines and bezier curves.
///
/// The interpreter keeps the pen state of the last drawn path so callers can
/// inspect the end point and the reflected control point afterwards.
#[derive(Debug, Default)]
pub struct PathInterpreter {
    options: PathOptions,
    current: PointF,
    start: PointF,
    last_control: Option<PointF>,
    command: Option<(Command, bool)>,
    args: Vec<f64>,
}

impl PathInterpreter {
    pub fn new(options: PathOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn options(&self) -> &PathOptions {
        &self.options
    }

    /// The pen position in path coordinates.
    pub fn current(&self) -> PointF {
        self.current
    }

    /// The implicit first control point a following `S` or `T` would use.
    pub fn reflected_control(&self) -> PointF {
        match self.last_control {
            Some(control) => self.current.reflect(control),
            None => self.current,
        }
    }

    /// Draws `path` onto `canvas`. Unknown commands are skipped and drawing continues.
    ///
    /// # Errors
    ///
    /// Returns the first [`PixelError::Parse`] seen, after the whole path has been drawn.
    pub fn draw(&mut self, canvas: &mut Canvas, path: &str) -> Result<()> {
        self.current = PointF::default();
        self.start = PointF::default();
        self.last_control = None;
        self.command = None;
        self.args.clear();

        let mut error = None;
        for token in tokenize(path) {
            match token {
                Token::Letter(letter) => match Command::from_letter(letter) {
                    Some((Command::Close, _)) => {
                        self.args.clear();
                        self.command = Some((Command::Close, false));
                        self.close(canvas);
                    }
                    Some(cmd) => {
                        self.args.clear();
                        self.command = Some(cmd);
                    }
                    None => {
                        log::warn!("unknown path command '{letter}'");
                        error.get_or_insert_with(|| PixelError::parse(letter.to_string()));
                    }
                },
                Token::Number(n) => {
                    let Some((cmd, relative)) = self.command else {
                        log::debug!("path number {n} without command");
                        continue;
                    };
                    if cmd == Command::Close {
                        log::debug!("path number {n} after close");
                        continue;
                    }
                    self.args.push(n);
                    if self.args.len() == cmd.arity() {
                        self.execute(canvas, cmd, relative);
                        self.args.clear();
                    }
                }
            }
        }

        match error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn execute(&mut self, canvas: &mut Canvas, cmd: Command, relative: bool) {
        let base = if relative { self.current } else { PointF::default() };
        let args = std::mem::take(&mut self.args);
        let pt = |i: usize| PointF::new(args[i], args[i + 1]) + base;

        match cmd {
            Command::Move => {
                self.current = pt(0);
                self.start = self.current;
                self.last_control = None;
            }
            Command::Line => {
                self.line_to(canvas, pt(0));
                self.last_control = None;
            }
            Command::Horizontal => {
                self.line_to(canvas, PointF::new(args[0] + base.x, self.current.y));
                self.last_control = None;
            }
            Command::Vertical => {
                self.line_to(canvas, PointF::new(self.current.x, args[0] + base.y));
                self.last_control = None;
            }
            Command::Cubic => self.cubic_to(canvas, pt(0), pt(2), pt(4)),
            Command::SmoothCubic => self.cubic_to(canvas, self.reflected_control(), pt(0), pt(2)),
            Command::Quadratic => self.quadratic_to(canvas, pt(0), pt(2)),
            Command::SmoothQuadratic => self.quadratic_to(canvas, self.reflected_control(), pt(0)),
            Command::Arc => {
                self.current = pt(0);
                self.last_control = None;
            }
            Command::Close => self.close(canvas),
        }
        log::trace!("path {cmd:?} -> {:?}", self.current);
    }

    fn close(&mut self, canvas: &mut Canvas) {
        self.line_to(canvas, self.start);
        self.last_control = None;
    }

    fn line_to(&mut self, canvas: &mut Canvas, to: PointF) {
        let from = self.to_pixel(self.current);
        let end = self.to_pixel(to);
        canvas.line(from.x, from.y, end.x, end.y, self.options.set);
        self.current = to;
    }

    fn quadratic_to(&mut self, canvas: &mut Canvas, control: PointF, to: PointF) {
        canvas.quadratic_bezier(self.to_pixel(self.current), self.to_pixel(control), self.to_pixel(to), self.options.set);
        self.current = to;
        self.last_control = Some(control);
    }

    fn cubic_to(&mut self, canvas: &mut Canvas, c1: PointF, c2: PointF, to: PointF) {
        canvas.cubic_bezier(
            self.to_pixel(self.current),
            self.to_pixel(c1),
            self.to_pixel(c2),
            self.to_pixel(to),
            self.options.set,
        );
        self.current = to;
        self.last_control = Some(c2);
    }

    fn to_pixel(&self, p: PointF) -> Position {
        let PathOptions { origin, scale, .. } = self.options;
        Position::new(((p.x + origin.x) * scale) as i32, ((p.y + origin.y) * scale) as i32)
    }
}
