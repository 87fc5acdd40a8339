//! The six face colors and their fixed wheel geometry

use serde::{Deserialize, Serialize};

/// One of the six face colors of a puzzle cube
///
/// The variants sit on a fixed wheel; the colors on opposite faces of a cube
/// are always three steps apart (White/Yellow, Red/Pink, Blue/Green).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceColor {
    White,
    Red,
    Blue,
    Yellow,
    Pink,
    Green,
}

impl FaceColor {
    /// All six colors in wheel order
    pub const WHEEL: [FaceColor; 6] = [
        FaceColor::White,
        FaceColor::Red,
        FaceColor::Blue,
        FaceColor::Yellow,
        FaceColor::Pink,
        FaceColor::Green,
    ];

    /// Position of this color on the wheel
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The color on the opposite face: three steps away on the wheel
    #[inline]
    pub fn complement(self) -> FaceColor {
        Self::WHEEL[(self as usize + 3) % 6]
    }

    /// Single-letter code (W, R, B, Y, P, G)
    pub fn tag(self) -> char {
        match self {
            FaceColor::White => 'W',
            FaceColor::Red => 'R',
            FaceColor::Blue => 'B',
            FaceColor::Yellow => 'Y',
            FaceColor::Pink => 'P',
            FaceColor::Green => 'G',
        }
    }

    /// Parse a single-letter code (case-insensitive)
    pub fn from_tag(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'W' => Some(FaceColor::White),
            'R' => Some(FaceColor::Red),
            'B' => Some(FaceColor::Blue),
            'Y' => Some(FaceColor::Yellow),
            'P' => Some(FaceColor::Pink),
            'G' => Some(FaceColor::Green),
            _ => None,
        }
    }

    /// RGB hex value used when drawing this face
    pub fn hex(self) -> &'static str {
        match self {
            FaceColor::White => "#ffffea",
            FaceColor::Red => "#973aa8",
            FaceColor::Blue => "#0000ff",
            FaceColor::Yellow => "#ffff3f",
            FaceColor::Pink => "#ef476f",
            FaceColor::Green => "#70e000",
        }
    }
}
