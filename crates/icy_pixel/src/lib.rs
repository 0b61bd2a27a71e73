#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::too_many_lines,
    clippy::too_many_arguments,
    clippy::cast_lossless,
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::struct_excessive_bools,
    clippy::return_self_not_must_use,
    clippy::many_single_char_names
)]
//! Character cell pixel engine.
//!
//! A [`Canvas`] holds a virtual pixel grid that is drawn on with lines, circles,
//! ellipses, arcs, bezier curves, path strings, fonts, stamps and pictures. The
//! render engine compresses the grid into text rows made of unicode block
//! elements, optionally colored with ANSI escape sequences.

mod error;
pub use error::*;

mod position;
pub use position::*;

mod color;
pub use color::*;

mod canvas;
pub use canvas::*;

pub mod paint;
pub use paint::*;

pub mod path;
pub use path::{PathInterpreter, PathOptions};

pub mod asset;
pub use asset::*;

mod render;
pub use render::*;

mod text;
pub use text::*;

mod session;
pub use session::*;

/// Largest accepted canvas width.
pub const MAX_X: i32 = 4000;
/// Largest accepted canvas height.
pub const MAX_Y: i32 = 2000;
/// Curve step count used when an invalid count is requested.
pub const DEFAULT_STEPS: i32 = 15;
