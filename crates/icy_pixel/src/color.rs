use serde::{Deserialize, Serialize};

use crate::PixelError;

/// ANSI 16 color codes, usable as pixel values in [`ColorMode::Ansi16`].
pub const BLACK: u32 = 30;
pub const RED: u32 = 31;
pub const GREEN: u32 = 32;
pub const YELLOW: u32 = 33;
pub const BLUE: u32 = 34;
pub const MAGENTA: u32 = 35;
pub const CYAN: u32 = 36;
pub const WHITE: u32 = 37;
pub const DEFAULT: u32 = 38;
pub const RESET: u32 = 39;

/// How the render engine turns pixel values into terminal output.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorMode {
    /// 2x2 pixels per cell, drawn with the 16 quadrant block glyphs.
    #[default]
    None = 0,
    /// Pixel values are ANSI 16 color codes (30..=37).
    Ansi16 = 1,
    /// Pixel values are xterm 256 palette indices.
    Palette = 2,
    /// Pixel values are packed `0xRRGGBB`.
    TrueColor = 3,
}

impl TryFrom<u8> for ColorMode {
    type Error = PixelError;

    fn try_from(mode: u8) -> Result<Self, Self::Error> {
        match mode {
            0 => Ok(ColorMode::None),
            1 => Ok(ColorMode::Ansi16),
            2 => Ok(ColorMode::Palette),
            3 => Ok(ColorMode::TrueColor),
            _ => Err(PixelError::ColorMode { mode }),
        }
    }
}

impl ColorMode {
    pub fn is_colored(self) -> bool {
        !matches!(self, ColorMode::None)
    }

    /// Escape sequence selecting `color` as foreground, empty in [`ColorMode::None`].
    pub fn foreground(self, color: u32) -> String {
        match self {
            ColorMode::None => String::new(),
            ColorMode::Ansi16 => format!("\x1b[1;{}m", color & 0xFF),
            ColorMode::Palette => format!("\x1b[38;5;{}m", color & 0xFF),
            ColorMode::TrueColor => {
                let (r, g, b) = split_rgb(color);
                format!("\x1b[38;2;{r};{g};{b}m")
            }
        }
    }

    /// Escape sequence selecting `color` as background, empty in [`ColorMode::None`].
    pub fn background(self, color: u32) -> String {
        match self {
            ColorMode::None => String::new(),
            ColorMode::Ansi16 => format!("\x1b[1;{}m", (color & 0xFF) + 10),
            ColorMode::Palette => format!("\x1b[48;5;{}m", color & 0xFF),
            ColorMode::TrueColor => {
                let (r, g, b) = split_rgb(color);
                format!("\x1b[48;2;{r};{g};{b}m")
            }
        }
    }
}

/// Packs r, g, b into a `0xRRGGBB` pixel value.
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    (r as u32) << 16 | (g as u32) << 8 | b as u32
}

pub fn split_rgb(color: u32) -> (u8, u8, u8) {
    (((color >> 16) & 0xFF) as u8, ((color >> 8) & 0xFF) as u8, (color & 0xFF) as u8)
}

/// Dims (`factor < 1`) or brightens (`factor > 1`) a packed rgb color, clamping each channel at 255.
pub fn rgb_mul(color: u32, factor: f64) -> u32 {
    let (r, g, b) = split_rgb(color);
    let mul = |c: u8| (c as f64 * factor).clamp(0.0, 255.0) as u8;
    rgb(mul(r), mul(g), mul(b))
}
