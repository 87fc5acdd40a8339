//! Cube orientation and the face permutation applied by a roll

use crate::{Direction, FaceColor};
use serde::{Deserialize, Serialize};

/// Slot indices into the ring returned by [`side_faces`]
pub const SIDE_FRONT: usize = 0;
pub const SIDE_LEFT: usize = 1;
pub const SIDE_BACK: usize = 2;
pub const SIDE_RIGHT: usize = 3;

/// The four side faces of a cube, given its top and front colors
///
/// Returns Front, Left, Back, Right in fixed cyclic order around the
/// vertical axis. Dropping `top` and its complement from the wheel leaves
/// the four side colors in their induced cyclic order; that ring is
/// traversed in the opposite sense when `top` sits on an odd wheel position
/// (the handedness of a physical cube's sides flips with the pair of faces
/// chosen as top/bottom), then rotated so `front` leads.
///
/// # Panics
///
/// Panics if `front` equals `top` or its complement; no physical cube shows
/// the same axis on two exposed faces.
pub fn side_faces(top: FaceColor, front: FaceColor) -> [FaceColor; 4] {
    let complement = top.complement();
    assert!(
        front != top && front != complement,
        "front face {front:?} cannot share an axis with top {top:?}"
    );

    let mut ring = [top; 4];
    let mut n = 0;
    for color in FaceColor::WHEEL {
        if color != top && color != complement {
            ring[n] = color;
            n += 1;
        }
    }
    if top.index() % 2 == 1 {
        ring.reverse();
    }

    let lead = ring
        .iter()
        .position(|&c| c == front)
        .expect("front is one of the four side colors");
    [
        ring[lead],
        ring[(lead + 1) % 4],
        ring[(lead + 2) % 4],
        ring[(lead + 3) % 4],
    ]
}

/// How a roll in one direction rewrites (top, front)
///
/// Expressed as slot indices into two successive [`side_faces`] rings:
/// `sides = side_faces(top, front)`, then
/// `second = side_faces(sides[pivot], top)`. The new top is always
/// `second[SIDE_RIGHT]`; `front` picks the slot of `second` that becomes the
/// new front, or keeps the old front when `None`.
struct RollRule {
    pivot: usize,
    front: Option<usize>,
}

/// Indexed by `Direction as usize`
const ROLL_RULES: [RollRule; 4] = [
    // Up
    RollRule {
        pivot: SIDE_RIGHT,
        front: Some(SIDE_BACK),
    },
    // Left
    RollRule {
        pivot: SIDE_BACK,
        front: None,
    },
    // Down
    RollRule {
        pivot: SIDE_LEFT,
        front: Some(SIDE_FRONT),
    },
    // Right
    RollRule {
        pivot: SIDE_FRONT,
        front: None,
    },
];

/// The visible coloring of a cube, stored as its top and front faces
///
/// Bottom is always the top's complement and the remaining sides follow
/// from [`side_faces`], so two colors fully determine the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Orientation {
    top: FaceColor,
    front: FaceColor,
}

impl Orientation {
    /// Create an orientation from its top and front colors
    ///
    /// # Panics
    ///
    /// Panics if `front` equals `top` or its complement.
    pub fn new(top: FaceColor, front: FaceColor) -> Self {
        assert!(
            front != top && front != top.complement(),
            "front face {front:?} cannot share an axis with top {top:?}"
        );
        Orientation { top, front }
    }

    /// The color currently facing up
    #[inline]
    pub fn top(self) -> FaceColor {
        self.top
    }

    /// The color currently facing the viewer
    #[inline]
    pub fn front(self) -> FaceColor {
        self.front
    }

    /// The color facing down
    #[inline]
    pub fn bottom(self) -> FaceColor {
        self.top.complement()
    }

    /// Front, Left, Back, Right ring of this orientation
    pub fn sides(self) -> [FaceColor; 4] {
        side_faces(self.top, self.front)
    }

    /// Orientation after tipping the cube 90 degrees over its edge in
    /// `direction`
    pub fn rolled(self, direction: Direction) -> Orientation {
        let rule = &ROLL_RULES[direction as usize];
        let sides = side_faces(self.top, self.front);
        let second = side_faces(sides[rule.pivot], self.top);
        Orientation {
            top: second[SIDE_RIGHT],
            front: rule.front.map_or(self.front, |slot| second[slot]),
        }
    }
}

impl Default for Orientation {
    /// The canonical start orientation: White on top with a Blue front
    fn default() -> Self {
        Orientation {
            top: FaceColor::White,
            front: FaceColor::Blue,
        }
    }
}
