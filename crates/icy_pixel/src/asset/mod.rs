//! Bit packed fonts and stamps, color pictures, and the stores that keep them.

mod bitmap;
pub use bitmap::*;

mod glyph;
pub use glyph::*;

mod stamp;
pub use stamp::*;

mod picture;
pub use picture::*;

mod registry;
pub use registry::*;

mod store;
pub use store::*;
