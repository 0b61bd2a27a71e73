use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Canvas, bit_width, left_justify};

/// One character of a bit packed [`Font`].
///
/// Rows are stored right aligned until the font is prepared, afterwards they are
/// left justified against bit 63.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyph {
    #[serde(rename = "OffsetX", default)]
    pub offset_x: i32,
    #[serde(rename = "OffsetY", default)]
    pub offset_y: i32,
    #[serde(rename = "sizeX", default)]
    pub width: u32,
    #[serde(rename = "sizeY", default)]
    pub height: u32,
    /// Unused low bits of the prepared rows.
    #[serde(rename = "len", default)]
    pub unused: u32,
    /// Kerning group of this glyph.
    #[serde(default)]
    pub gn: i32,
    /// Kerning group this glyph tucks in behind.
    #[serde(default)]
    pub ga: i32,
    #[serde(default)]
    pub data: Vec<u64>,
}

impl Glyph {
    pub fn new(rows: &[u64]) -> Self {
        Self {
            data: rows.to_vec(),
            ..Default::default()
        }
    }

    /// Fixes the glyph width instead of detecting it from the widest row.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_kerning(mut self, gn: i32, ga: i32) -> Self {
        self.gn = gn;
        self.ga = ga;
        self
    }

    fn prepare(&mut self) {
        if self.width == 0 {
            self.width = bit_width(&self.data);
        }
        self.height = self.data.len() as u32;
        let (data, unused) = left_justify(&self.data, Some(self.width));
        self.data = data;
        self.unused = unused;
    }
}

/// Widest and tallest glyph of a font and its glyph count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FontInfo {
    pub max_x: u32,
    pub max_y: u32,
    pub chars: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    #[serde(default)]
    prepared: bool,
    #[serde(default)]
    chars: BTreeMap<u32, Glyph>,
}

impl Font {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built in 5 pixel high font covering digits, upper case letters and some punctuation.
    pub fn standard() -> Self {
        let mut font = Font::new();
        for (ch, glyph) in standard_glyphs() {
            font.insert(ch, glyph);
        }
        font.prepare();
        font
    }

    /// Adds or replaces a glyph. The font needs preparing again afterwards.
    pub fn insert(&mut self, ch: char, glyph: Glyph) -> Option<Glyph> {
        self.prepared = false;
        self.chars.insert(ch as u32, glyph)
    }

    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.chars.get(&(ch as u32))
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    /// Detects glyph sizes and left justifies all rows. Does nothing on a prepared font.
    pub fn prepare(&mut self) {
        if self.prepared {
            return;
        }
        for glyph in self.chars.values_mut() {
            glyph.prepare();
        }
        self.prepared = true;
    }

    pub fn info(&mut self) -> FontInfo {
        self.prepare();
        FontInfo {
            max_x: self.chars.values().map(|g| g.width).max().unwrap_or(0),
            max_y: self.chars.values().map(|g| g.height).max().unwrap_or(0),
            chars: self.chars.len(),
        }
    }

    /// Width in pixels `text` takes when printed with `spacing` extra columns per glyph.
    pub fn text_width(&mut self, text: &str, spacing: i32) -> i32 {
        self.prepare();
        let mut width = 0;
        let mut last_group = 0;
        for ch in text.chars() {
            let glyph = self.glyph(ch).cloned().unwrap_or_default();
            width += glyph.width as i32 + 1 + kerning(last_group, &glyph) + spacing;
            last_group = glyph.gn;
        }
        width
    }
}

fn kerning(last_group: i32, glyph: &Glyph) -> i32 {
    if last_group != 0 && glyph.ga == last_group { -1 } else { 0 }
}

impl Canvas {
    /// Prints `text` with its top left corner at (`x`, `y`).
    pub fn print(&mut self, font: &mut Font, x: i32, y: i32, text: &str, set: bool) {
        self.print_spaced(font, x, y, text, set, 0);
    }

    /// Like [`Canvas::print`] with `spacing` extra columns after every glyph.
    pub fn print_spaced(&mut self, font: &mut Font, x: i32, y: i32, text: &str, set: bool, spacing: i32) {
        font.prepare();
        let double_x = self.options().font_aspect_x;
        let double_y = self.options().font_aspect_y;

        let mut cur_x = x;
        let mut last_group = 0;
        for ch in text.chars() {
            let Some(glyph) = font.glyph(ch) else {
                log::debug!("no glyph for '{ch}'");
                cur_x += 1 + spacing;
                last_group = 0;
                continue;
            };
            let kern = kerning(last_group, glyph);
            self.paint_glyph(glyph, cur_x + kern, y, set, double_x, double_y);

            let advance = glyph.width as i32 + 1 + kern;
            cur_x += advance + spacing;
            if double_x {
                cur_x += advance;
            }
            last_group = glyph.gn;
        }
    }

    fn paint_glyph(&mut self, glyph: &Glyph, x: i32, y: i32, set: bool, double_x: bool, double_y: bool) {
        let step_x = if double_x { 2 } else { 1 };
        let step_y = if double_y { 2 } else { 1 };
        let x = x + glyph.offset_x;
        let y = y + glyph.offset_y;

        for (row, &bits) in glyph.data.iter().enumerate() {
            let py = y + row as i32 * step_y;
            for col in 0..64_i32 {
                if bits & (1_u64 << (63 - col)) == 0 {
                    continue;
                }
                let px = x + col * step_x;
                for dy in 0..step_y {
                    for dx in 0..step_x {
                        self.put(px + dx, py + dy, set);
                    }
                }
            }
        }
    }
}

fn standard_glyphs() -> Vec<(char, Glyph)> {
    vec![
        (' ', Glyph::new(&[0b000, 0b000, 0b000, 0b000, 0b000]).with_width(3)),
        ('.', Glyph::new(&[0b000, 0b000, 0b000, 0b000, 0b010]).with_width(3)),
        (',', Glyph::new(&[0b000, 0b000, 0b000, 0b010, 0b100])),
        ('!', Glyph::new(&[0b010, 0b010, 0b010, 0b000, 0b010])),
        ('(', Glyph::new(&[0b001, 0b010, 0b010, 0b010, 0b001])),
        (')', Glyph::new(&[0b010, 0b001, 0b001, 0b001, 0b010])),
        ('[', Glyph::new(&[0b011, 0b010, 0b010, 0b010, 0b011])),
        (']', Glyph::new(&[0b011, 0b001, 0b001, 0b001, 0b011])),
        ('*', Glyph::new(&[0b00000, 0b00100, 0b11111, 0b01010, 0b00000])),
        ('+', Glyph::new(&[0b000, 0b010, 0b111, 0b010, 0b000])),
        ('-', Glyph::new(&[0b000, 0b000, 0b111, 0b000, 0b000])),
        ('/', Glyph::new(&[0b001, 0b010, 0b010, 0b100, 0b100])),
        ('\\', Glyph::new(&[0b100, 0b010, 0b010, 0b001, 0b001])),
        ('=', Glyph::new(&[0b000, 0b111, 0b000, 0b111, 0b000])),
        ('A', Glyph::new(&[0b01110, 0b10001, 0b11111, 0b10001, 0b10001])),
        ('B', Glyph::new(&[0b11110, 0b10001, 0b11110, 0b10001, 0b11110])),
        ('C', Glyph::new(&[0b01110, 0b10001, 0b10000, 0b10001, 0b01110])),
        ('D', Glyph::new(&[0b11110, 0b10001, 0b10001, 0b10001, 0b11110])),
        ('E', Glyph::new(&[0b1111, 0b1000, 0b1110, 0b1000, 0b1111])),
        ('F', Glyph::new(&[0b1111, 0b1000, 0b1110, 0b1000, 0b1000])),
        ('G', Glyph::new(&[0b01110, 0b10000, 0b10111, 0b10001, 0b01110])),
        ('H', Glyph::new(&[0b10001, 0b10001, 0b11111, 0b10001, 0b10001])),
        ('I', Glyph::new(&[0b111, 0b010, 0b010, 0b010, 0b111])),
        ('J', Glyph::new(&[0b0001, 0b0001, 0b0001, 0b1001, 0b0110]).with_kerning(0, 2)),
        ('K', Glyph::new(&[0b10001, 0b11110, 0b10100, 0b10010, 0b10001])),
        ('L', Glyph::new(&[0b1000, 0b1000, 0b1000, 0b1000, 0b1111]).with_kerning(1, 0)),
        ('M', Glyph::new(&[0b10001, 0b11011, 0b10101, 0b10001, 0b10001])),
        ('N', Glyph::new(&[0b10001, 0b11001, 0b10101, 0b10011, 0b10001])),
        ('O', Glyph::new(&[0b01110, 0b10001, 0b10001, 0b10001, 0b01110])),
        ('P', Glyph::new(&[0b11110, 0b10001, 0b11110, 0b10000, 0b10000])),
        ('Q', Glyph::new(&[0b01110, 0b10001, 0b10001, 0b10010, 0b01101])),
        ('R', Glyph::new(&[0b11110, 0b10001, 0b11110, 0b10010, 0b10001])),
        ('S', Glyph::new(&[0b01111, 0b10000, 0b01110, 0b00001, 0b11110])),
        ('T', Glyph::new(&[0b11111, 0b00100, 0b00100, 0b00100, 0b00100]).with_kerning(2, 1)),
        ('U', Glyph::new(&[0b10001, 0b10001, 0b10001, 0b10001, 0b01110])),
        ('V', Glyph::new(&[0b10001, 0b10001, 0b10001, 0b01010, 0b00100])),
        ('W', Glyph::new(&[0b10001, 0b10001, 0b10101, 0b11011, 0b10001])),
        ('X', Glyph::new(&[0b10001, 0b01010, 0b00100, 0b01010, 0b10001])),
        ('Y', Glyph::new(&[0b10001, 0b01010, 0b00100, 0b00100, 0b00100])),
        ('Z', Glyph::new(&[0b11111, 0b00010, 0b00100, 0b01000, 0b11111])),
        ('0', Glyph::new(&[0b01110, 0b10001, 0b10101, 0b10001, 0b01110])),
        ('1', Glyph::new(&[0b010, 0b110, 0b010, 0b010, 0b111])),
        ('2', Glyph::new(&[0b11110, 0b00001, 0b01110, 0b10000, 0b11111])),
        ('3', Glyph::new(&[0b11110, 0b00001, 0b01110, 0b00001, 0b11110])),
        ('4', Glyph::new(&[0b10010, 0b10010, 0b11111, 0b00010, 0b00010])),
        ('5', Glyph::new(&[0b11111, 0b10000, 0b11110, 0b00001, 0b11110])),
        ('6', Glyph::new(&[0b01110, 0b10000, 0b11110, 0b10001, 0b01110])),
        ('7', Glyph::new(&[0b11111, 0b00001, 0b00010, 0b00100, 0b01000])),
        ('8', Glyph::new(&[0b01110, 0b10001, 0b01110, 0b10001, 0b01110])),
        ('9', Glyph::new(&[0b01110, 0b10001, 0b01111, 0b00001, 0b01110])),
    ]
}
