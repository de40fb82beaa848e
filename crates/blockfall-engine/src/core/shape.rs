use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

/// Offset of a single block relative to its piece's local origin, as `(dx, dy)`.
///
/// `dx` grows rightward and `dy` grows downward, matching grid coordinates.
pub type BlockOffset = (i32, i32);

/// Identity of one of the seven tetromino templates.
///
/// The kind doubles as the color identity of settled cells: every template has
/// exactly one fixed color, so a locked cell only needs to remember its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[repr(u8)]
pub enum ShapeKind {
    /// I-piece.
    I = 0,
    /// J-piece.
    J = 1,
    /// L-piece.
    L = 2,
    /// O-piece.
    O = 3,
    /// S-piece.
    S = 4,
    /// T-piece.
    T = 5,
    /// Z-piece.
    Z = 6,
}

impl Distribution<ShapeKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ShapeKind {
        ShapeKind::ALL[rng.random_range(0..ShapeKind::LEN)]
    }
}

impl ShapeKind {
    /// Number of shape kinds (7).
    pub const LEN: usize = 7;

    /// All kinds, in catalog order.
    pub const ALL: [Self; Self::LEN] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    /// Returns the immutable template for this kind.
    #[must_use]
    pub fn template(self) -> &'static ShapeTemplate {
        &TEMPLATES[self as usize]
    }

    /// Returns the single character representation of this kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_engine::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::I.as_char(), 'I');
    /// assert_eq!(ShapeKind::Z.as_char(), 'Z');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            ShapeKind::I => 'I',
            ShapeKind::J => 'J',
            ShapeKind::L => 'L',
            ShapeKind::O => 'O',
            ShapeKind::S => 'S',
            ShapeKind::T => 'T',
            ShapeKind::Z => 'Z',
        }
    }

    /// Parses a kind from a single character.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_engine::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_char('T'), Some(ShapeKind::T));
    /// assert_eq!(ShapeKind::from_char('X'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(ShapeKind::I),
            'J' => Some(ShapeKind::J),
            'L' => Some(ShapeKind::L),
            'O' => Some(ShapeKind::O),
            'S' => Some(ShapeKind::S),
            'T' => Some(ShapeKind::T),
            'Z' => Some(ShapeKind::Z),
            _ => None,
        }
    }
}

/// The fixed definition of one tetromino: four block offsets and its kind.
///
/// Offsets are relative to the top-left corner of the template's bounding box.
/// Pieces copy these offsets on spawn and rotate their own copy, so the
/// templates themselves never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeTemplate {
    kind: ShapeKind,
    offsets: [BlockOffset; 4],
}

impl ShapeTemplate {
    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[must_use]
    pub const fn offsets(&self) -> &[BlockOffset; 4] {
        &self.offsets
    }

    /// Largest column offset of any block.
    #[must_use]
    pub fn max_dx(&self) -> i32 {
        self.offsets.iter().map(|&(dx, _)| dx).max().unwrap_or(0)
    }
}

static TEMPLATES: [ShapeTemplate; ShapeKind::LEN] = {
    const fn t(kind: ShapeKind, offsets: [BlockOffset; 4]) -> ShapeTemplate {
        ShapeTemplate { kind, offsets }
    }
    [
        t(ShapeKind::I, [(0, 0), (1, 0), (2, 0), (3, 0)]),
        t(ShapeKind::J, [(0, 0), (0, 1), (1, 1), (2, 1)]),
        t(ShapeKind::L, [(2, 0), (0, 1), (1, 1), (2, 1)]),
        t(ShapeKind::O, [(0, 0), (1, 0), (0, 1), (1, 1)]),
        t(ShapeKind::S, [(1, 0), (2, 0), (0, 1), (1, 1)]),
        t(ShapeKind::T, [(1, 0), (0, 1), (1, 1), (2, 1)]),
        t(ShapeKind::Z, [(0, 0), (1, 0), (1, 1), (2, 1)]),
    ]
};
