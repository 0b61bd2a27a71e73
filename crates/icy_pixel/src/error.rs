//! Unified error type for icy_pixel

use thiserror::Error;

/// Main error type for icy_pixel operations
#[derive(Debug, Error)]
pub enum PixelError {
    // === Geometry ===
    #[error("Dimension error: {width}x{height} is outside 1..={max_x} x 1..={max_y}", max_x = crate::MAX_X, max_y = crate::MAX_Y)]
    Dimension { width: i32, height: i32 },

    // === Parsing ===
    #[error("Unknown path command: {token}")]
    Parse { token: String },

    #[error("Unsupported color mode: {mode}")]
    ColorMode { mode: u8 },

    // === Assets ===
    #[error("{kind} '{name}' not found")]
    AssetNotFound { kind: AssetKind, name: String },

    // === External Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for icy_pixel operations
pub type Result<T> = std::result::Result<T, PixelError>;

/// The record type an asset error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Font,
    Stamp,
    Picture,
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetKind::Font => write!(f, "Font"),
            AssetKind::Stamp => write!(f, "Stamp"),
            AssetKind::Picture => write!(f, "Picture"),
        }
    }
}

impl PixelError {
    pub fn dimension(width: i32, height: i32) -> Self {
        Self::Dimension { width, height }
    }

    pub fn parse(token: impl Into<String>) -> Self {
        Self::Parse { token: token.into() }
    }

    pub fn not_found(kind: AssetKind, name: impl Into<String>) -> Self {
        Self::AssetNotFound { kind, name: name.into() }
    }
}
