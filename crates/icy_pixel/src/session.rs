use crate::{AssetKind, AssetRegistry, AssetStore, Canvas, ColorMode, Font, PathInterpreter, PathOptions, Picture, PixelError, Result, Stamp};

/// Name the built in font and stamp are registered under.
pub const STANDARD_ASSET: &str = "__std";

/// A canvas together with its named assets and the last error seen.
///
/// Session operations never fail loudly: a failure is logged, stored as
/// [`Session::last_error`] and the operation does nothing.
pub struct Session {
    canvas: Canvas,
    fonts: AssetRegistry<Font>,
    stamps: AssetRegistry<Stamp>,
    pictures: AssetRegistry<Picture>,
    last_error: Option<PixelError>,
}

impl Session {
    /// Creates a session with the standard font and stamp registered as [`STANDARD_ASSET`].
    ///
    /// # Errors
    ///
    /// Returns [`PixelError::Dimension`] for an invalid canvas size.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let mut fonts = AssetRegistry::new();
        fonts.insert(STANDARD_ASSET, Font::standard());
        let mut stamps = AssetRegistry::new();
        stamps.insert(STANDARD_ASSET, Stamp::standard());
        Ok(Self {
            canvas: Canvas::new(width, height)?,
            fonts,
            stamps,
            pictures: AssetRegistry::new(),
            last_error: None,
        })
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn fonts(&self) -> &AssetRegistry<Font> {
        &self.fonts
    }

    pub fn fonts_mut(&mut self) -> &mut AssetRegistry<Font> {
        &mut self.fonts
    }

    pub fn stamps(&self) -> &AssetRegistry<Stamp> {
        &self.stamps
    }

    pub fn stamps_mut(&mut self) -> &mut AssetRegistry<Stamp> {
        &mut self.stamps
    }

    pub fn pictures(&self) -> &AssetRegistry<Picture> {
        &self.pictures
    }

    pub fn pictures_mut(&mut self) -> &mut AssetRegistry<Picture> {
        &mut self.pictures
    }

    pub fn last_error(&self) -> Option<&PixelError> {
        self.last_error.as_ref()
    }

    pub fn take_last_error(&mut self) -> Option<PixelError> {
        self.last_error.take()
    }

    fn fail(&mut self, err: PixelError) {
        log::warn!("{err}");
        self.last_error = Some(err);
    }

    fn record(&mut self, result: Result<()>) {
        if let Err(err) = result {
            self.fail(err);
        }
    }

    /// Re-dimensions and clears the canvas. Invalid sizes keep the old canvas.
    pub fn set_dimensions(&mut self, width: i32, height: i32) {
        let result = self.canvas.set_dimensions(width, height);
        self.record(result);
    }

    /// Switches the render color mode, 0 = none, 1 = 16 colors, 2 = palette, 3 = true color.
    pub fn set_color_mode(&mut self, mode: u8) {
        match ColorMode::try_from(mode) {
            Ok(mode) => self.canvas.set_color_mode(mode),
            Err(err) => self.fail(err),
        }
    }

    pub fn render(&mut self) -> &[String] {
        self.canvas.render()
    }

    pub fn draw_path(&mut self, path: &str, options: PathOptions) {
        let result = PathInterpreter::new(options).draw(&mut self.canvas, path);
        self.record(result);
    }

    pub fn print(&mut self, font: &str, x: i32, y: i32, text: &str, set: bool) {
        self.print_spaced(font, x, y, text, set, 0);
    }

    pub fn print_spaced(&mut self, font: &str, x: i32, y: i32, text: &str, set: bool, spacing: i32) {
        let Some(glyphs) = self.fonts.get_mut(font) else {
            self.fail(PixelError::not_found(AssetKind::Font, font));
            return;
        };
        self.canvas.print_spaced(glyphs, x, y, text, set, spacing);
    }

    pub fn stamp(&mut self, name: &str, x: i32, y: i32, set: bool, opaque: bool) {
        let Some(stamp) = self.stamps.get_mut(name) else {
            self.fail(PixelError::not_found(AssetKind::Stamp, name));
            return;
        };
        self.canvas.stamp(stamp, x, y, set, opaque);
    }

    pub fn picture(&mut self, name: &str, x: i32, y: i32, segment: usize) {
        let Some(picture) = self.pictures.get(name) else {
            self.fail(PixelError::not_found(AssetKind::Picture, name));
            return;
        };
        self.canvas.picture(picture, x, y, segment);
    }

    /// Loads a font from `store` and registers it under `name`, replacing any font of that name.
    pub fn load_font(&mut self, store: &dyn AssetStore, name: &str) {
        match store.load_font(name) {
            Ok(font) => {
                self.fonts.insert(name, font);
            }
            Err(err) => self.fail(err),
        }
    }

    pub fn save_font(&mut self, store: &mut dyn AssetStore, name: &str) {
        let result = match self.fonts.get(name) {
            Some(font) => store.save_font(name, font),
            None => Err(PixelError::not_found(AssetKind::Font, name)),
        };
        self.record(result);
    }

    pub fn load_stamp(&mut self, store: &dyn AssetStore, name: &str) {
        match store.load_stamp(name) {
            Ok(stamp) => {
                self.stamps.insert(name, stamp);
            }
            Err(err) => self.fail(err),
        }
    }

    pub fn save_stamp(&mut self, store: &mut dyn AssetStore, name: &str) {
        let result = match self.stamps.get(name) {
            Some(stamp) => store.save_stamp(name, stamp),
            None => Err(PixelError::not_found(AssetKind::Stamp, name)),
        };
        self.record(result);
    }

    pub fn load_picture(&mut self, store: &dyn AssetStore, name: &str) {
        match store.load_picture(name) {
            Ok(picture) => {
                self.pictures.insert(name, picture);
            }
            Err(err) => self.fail(err),
        }
    }

    pub fn save_picture(&mut self, store: &mut dyn AssetStore, name: &str) {
        let result = match self.pictures.get(name) {
            Some(picture) => store.save_picture(name, picture),
            None => Err(PixelError::not_found(AssetKind::Picture, name)),
        };
        self.record(result);
    }
}
