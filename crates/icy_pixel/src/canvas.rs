use serde::{Deserialize, Serialize};

use crate::{ColorMode, DEFAULT_STEPS, MAX_X, MAX_Y, PixelError, Position, Rectangle, Result};

/// Serializable snapshot of the canvas drawing and rendering settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasOptions {
    #[serde(default)]
    pub color_mode: ColorMode,
    #[serde(default)]
    pub invert: bool,
    #[serde(default)]
    pub toggle: bool,
    /// Uniform coordinate scale, `0.0` and `1.0` both mean unscaled.
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Line segments per bezier curve, 1..=50.
    #[serde(default = "default_steps")]
    pub steps: i32,
    /// Render one pixel column per cell instead of two.
    #[serde(default)]
    pub aspect_x: bool,
    /// Render one pixel row per cell instead of two (no color mode only).
    #[serde(default)]
    pub aspect_y: bool,
    #[serde(default)]
    pub font_aspect_x: bool,
    #[serde(default)]
    pub font_aspect_y: bool,
}

fn default_scale() -> f64 {
    1.0
}

fn default_steps() -> i32 {
    DEFAULT_STEPS
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::None,
            invert: false,
            toggle: false,
            scale: default_scale(),
            steps: default_steps(),
            aspect_x: false,
            aspect_y: false,
            font_aspect_x: false,
            font_aspect_y: false,
        }
    }
}

/// The addressable pixel grid together with its clipping, scaling and overlay state.
///
/// Pixels hold a color value where `0` is "unset". Boolean drawing writes the
/// current foreground color for `true` and the background color for `false`.
pub struct Canvas {
    width: i32,
    height: i32,
    pixels: Vec<u32>,
    overlay: Vec<Option<char>>,

    clip_rect: Rectangle,
    clipping: bool,

    foreground: u32,
    background: u32,

    options: CanvasOptions,
    pub(crate) frame: Vec<String>,
}

impl Canvas {
    /// # Errors
    ///
    /// Returns [`PixelError::Dimension`] when `width` or `height` is outside `1..=MAX`.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![0; (width * height) as usize],
            overlay: vec![None; overlay_len(width, height)],
            clip_rect: Rectangle::default(),
            clipping: false,
            foreground: 1,
            background: 0,
            options: CanvasOptions::default(),
            frame: Vec::new(),
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Re-dimensions the canvas, dropping its content. An invalid size leaves the canvas untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PixelError::Dimension`] when `width` or `height` is outside `1..=MAX`.
    pub fn set_dimensions(&mut self, width: i32, height: i32) -> Result<()> {
        check_dimensions(width, height)?;
        self.width = width;
        self.height = height;
        self.clear();
        Ok(())
    }

    /// Resets every pixel and overlay cell, keeping the dimensions.
    pub fn clear(&mut self) {
        self.pixels = vec![0; (self.width * self.height) as usize];
        self.overlay = vec![None; overlay_len(self.width, self.height)];
    }

    pub fn foreground(&self) -> u32 {
        self.foreground
    }

    pub fn background(&self) -> u32 {
        self.background
    }

    pub fn set_color(&mut self, foreground: u32) {
        self.foreground = foreground;
    }

    pub fn set_colors(&mut self, foreground: u32, background: u32) {
        self.foreground = foreground;
        self.background = background;
    }

    pub fn options(&self) -> &CanvasOptions {
        &self.options
    }

    pub fn apply_options(&mut self, options: CanvasOptions) {
        let steps = options.steps;
        self.options = options;
        self.set_steps(steps);
    }

    pub fn color_mode(&self) -> ColorMode {
        self.options.color_mode
    }

    pub fn set_color_mode(&mut self, mode: ColorMode) {
        self.options.color_mode = mode;
    }

    pub fn set_toggle(&mut self, toggle: bool) {
        self.options.toggle = toggle;
    }

    pub fn set_invert(&mut self, invert: bool) {
        self.options.invert = invert;
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.options.scale = scale;
    }

    pub fn steps(&self) -> i32 {
        self.options.steps
    }

    /// Anything outside `1..=50` falls back to [`DEFAULT_STEPS`].
    pub fn set_steps(&mut self, steps: i32) {
        self.options.steps = if (1..=50).contains(&steps) { steps } else { DEFAULT_STEPS };
    }

    pub fn set_aspect(&mut self, x: bool, y: bool) {
        self.options.aspect_x = x;
        self.options.aspect_y = y;
    }

    pub fn set_font_aspect(&mut self, x: bool, y: bool) {
        self.options.font_aspect_x = x;
        self.options.font_aspect_y = y;
    }

    /// `set_clipping(true, None)` re-enables the last configured rectangle.
    pub fn set_clipping(&mut self, enable: bool, rect: Option<Rectangle>) {
        self.clipping = enable;
        if let Some(rect) = rect {
            self.clip_rect = rect;
        }
    }

    /// The active clip rectangle, if clipping is enabled.
    pub fn clipping(&self) -> Option<Rectangle> {
        if self.clipping { Some(self.clip_rect) } else { None }
    }

    pub fn last_frame(&self) -> &[String] {
        &self.frame
    }

    /// Sets or clears the pixel at the scaled position.
    pub fn set_pixel(&mut self, x: i32, y: i32, set: bool) {
        let (x, y) = self.scale_pos(x, y);
        self.put(x, y, set);
    }

    pub fn set_pixel_color(&mut self, x: i32, y: i32, color: u32) {
        let (x, y) = self.scale_pos(x, y);
        self.put_color(x, y, color);
    }

    pub fn pixel(&self, x: i32, y: i32) -> bool {
        let (x, y) = self.scale_pos(x, y);
        self.get(x, y)
    }

    pub fn pixel_color(&self, x: i32, y: i32) -> u32 {
        let (x, y) = self.scale_pos(x, y);
        self.get_color(x, y)
    }

    /// The overlay character of text cell (`column`, `row`), one row covering two pixel rows.
    pub fn overlay_char(&self, column: i32, row: i32) -> Option<char> {
        if column < 0 || row < 0 || column >= self.width || row > self.height / 2 {
            return None;
        }
        self.overlay[(row * self.width + column) as usize]
    }

    pub(crate) fn set_overlay_char(&mut self, column: i32, row: i32, ch: char) {
        if column < 0 || row < 0 || column >= self.width || row > self.height / 2 {
            return;
        }
        self.overlay[(row * self.width + column) as usize] = Some(ch);
    }

    pub(crate) fn scale_pos(&self, x: i32, y: i32) -> (i32, i32) {
        (self.scale_len(x), self.scale_len(y))
    }

    pub(crate) fn scale_len(&self, v: i32) -> i32 {
        if self.options.scale == 0.0 {
            v
        } else {
            (v as f64 * self.options.scale) as i32
        }
    }

    pub(crate) fn scale_position(&self, pos: Position) -> Position {
        let (x, y) = self.scale_pos(pos.x, pos.y);
        Position::new(x, y)
    }

    pub(crate) fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    /// Inside the canvas and inside the clip rectangle when clipping is active.
    pub(crate) fn is_writable(&self, x: i32, y: i32) -> bool {
        if self.clipping && !self.clip_rect.contains(x, y) {
            return false;
        }
        self.in_bounds(x, y)
    }

    #[inline(always)]
    pub(crate) fn put(&mut self, x: i32, y: i32, set: bool) {
        if !self.is_writable(x, y) {
            return;
        }
        let off = (y * self.width + x) as usize;
        let set = if self.options.toggle { self.pixels[off] == 0 } else { set };
        self.pixels[off] = if set { self.foreground } else { self.background };
    }

    #[inline(always)]
    pub(crate) fn put_color(&mut self, x: i32, y: i32, color: u32) {
        if !self.is_writable(x, y) {
            return;
        }
        self.pixels[(y * self.width + x) as usize] = color;
    }

    #[inline(always)]
    pub(crate) fn get(&self, x: i32, y: i32) -> bool {
        self.get_color(x, y) != 0
    }

    #[inline(always)]
    pub(crate) fn get_color(&self, x: i32, y: i32) -> u32 {
        if !self.in_bounds(x, y) {
            return 0;
        }
        self.pixels[(y * self.width + x) as usize]
    }
}

fn check_dimensions(width: i32, height: i32) -> Result<()> {
    if !(1..=MAX_X).contains(&width) || !(1..=MAX_Y).contains(&height) {
        log::warn!("rejected canvas dimensions {width}x{height}");
        return Err(PixelError::dimension(width, height));
    }
    Ok(())
}

fn overlay_len(width: i32, height: i32) -> usize {
    ((height / 2 + 1) * width) as usize
}
