use serde::{Deserialize, Serialize};

use crate::{Canvas, left_justify};

/// A single bit packed bitmap, one `u64` per pixel row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stamp {
    #[serde(default)]
    prepared: bool,
    /// Unused low bits of the prepared rows.
    #[serde(rename = "len", default)]
    unused: u32,
    #[serde(default)]
    data: Vec<u64>,
}

impl Stamp {
    /// Creates a stamp from right aligned rows, the width is detected on first use.
    pub fn new(rows: &[u64]) -> Self {
        Self {
            data: rows.to_vec(),
            ..Default::default()
        }
    }

    /// The built in 56x13 logo stamp.
    pub fn standard() -> Self {
        Self::new(&[
            0b00111111_11111111_11111111_11110011_11111111_11111111_11111100,
            0b01000000_00000000_00000000_00000111_11111111_11111111_11111110,
            0b10011111_00000000_00000000_00011000_00110010_01110110_00001111,
            0b10011000_10000000_00000000_00011001_11010010_01110100_11110111,
            0b10011000_10100000_00000000_10011001_11010010_00110100_11111111,
            0b10011000_10000000_00000000_10011001_11010010_01010100_11111111,
            0b10011111_00101000_10011100_10011001_11010010_01100100_11000111,
            0b10011000_00100101_00100010_10011001_11010010_01110100_11110111,
            0b10011000_00100010_00111110_10011001_11010010_01110100_11110111,
            0b10011000_00100101_00100000_10011001_11010010_01110100_11110111,
            0b10011000_00101000_10011100_11011000_00110010_01110110_00001111,
            0b01000000_00000000_00000000_00001111_11111111_11111111_11111110,
            0b00111111_11111111_11111111_11100111_11111111_11111111_11111100,
        ])
    }

    pub fn prepare(&mut self) {
        if self.prepared {
            return;
        }
        let (data, unused) = left_justify(&self.data, None);
        self.data = data;
        self.unused = unused;
        self.prepared = true;
    }

    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    pub fn width(&mut self) -> u32 {
        self.prepare();
        64 - self.unused
    }

    pub fn height(&self) -> u32 {
        self.data.len() as u32
    }

    pub fn rows(&self) -> &[u64] {
        &self.data
    }
}

impl Canvas {
    /// Paints the set bits of `stamp` at (`x`, `y`). An `opaque` stamp also paints its clear bits with `!set`.
    pub fn stamp(&mut self, stamp: &mut Stamp, x: i32, y: i32, set: bool, opaque: bool) {
        let width = stamp.width() as i32;
        for (row, &bits) in stamp.rows().iter().enumerate() {
            let py = y + row as i32;
            for col in 0..width {
                if bits & (1_u64 << (63 - col)) != 0 {
                    self.put(x + col, py, set);
                } else if opaque {
                    self.put(x + col, py, !set);
                }
            }
        }
    }
}
