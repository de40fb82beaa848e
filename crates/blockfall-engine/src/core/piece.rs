use super::{
    GRID_WIDTH_I32,
    shape::{BlockOffset, ShapeKind},
};

/// A falling tetromino: its own copy of block offsets, its kind, and where it is.
///
/// Pieces are immutable values. Movement and rotation return new `Piece`s and
/// never check the grid; legality is decided separately by [`collides`].
///
/// # Coordinate System
///
/// - The position is the grid cell of the piece's local origin
/// - Each block sits at `position + offset`
/// - `x` may become negative (a rotated piece can have an empty leading
///   column) and `y` may be negative while the piece pokes above the grid
///
/// # Example
///
/// ```
/// use blockfall_engine::{Piece, ShapeKind};
///
/// let piece = Piece::new(ShapeKind::T);
/// let moved = piece.right().down();
/// let rotated = moved.rotated_right();
/// assert_eq!(rotated.position(), moved.position());
/// ```
///
/// [`collides`]: super::collides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    position: PiecePosition,
    offsets: [BlockOffset; 4],
    kind: ShapeKind,
}

impl Piece {
    /// Creates a piece of the given kind at its spawn position.
    ///
    /// The piece is horizontally centered: `x = floor(W / 2) - ceil(max_dx / 2)`
    /// with `max_dx` from [`ShapeTemplate::max_dx`], and `y = 0`. That puts
    /// the I piece at column 3 and every other piece at column 4.
    ///
    /// [`ShapeTemplate::max_dx`]: super::ShapeTemplate::max_dx
    #[must_use]
    pub fn new(kind: ShapeKind) -> Self {
        let template = kind.template();
        let max_dx = template.max_dx();
        Self {
            position: PiecePosition::new(GRID_WIDTH_I32 / 2 - (max_dx + 1) / 2, 0),
            offsets: *template.offsets(),
            kind,
        }
    }

    /// Like [`Self::new`], but placed at an explicit position.
    #[must_use]
    pub fn at(kind: ShapeKind, position: PiecePosition) -> Self {
        Self {
            position,
            ..Self::new(kind)
        }
    }

    #[must_use]
    pub fn position(&self) -> PiecePosition {
        self.position
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[must_use]
    pub fn offsets(&self) -> &[BlockOffset; 4] {
        &self.offsets
    }

    /// Returns the absolute grid coordinates of the piece's four blocks.
    pub fn occupied_positions(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.offsets
            .iter()
            .map(move |&(dx, dy)| (self.position.x() + dx, self.position.y() + dy))
    }

    /// Returns the piece translated by `(dx, dy)`.
    #[must_use]
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            position: self.position.shifted(dx, dy),
            ..*self
        }
    }

    #[must_use]
    pub fn left(&self) -> Self {
        self.shifted(-1, 0)
    }

    #[must_use]
    pub fn right(&self) -> Self {
        self.shifted(1, 0)
    }

    #[must_use]
    pub fn down(&self) -> Self {
        self.shifted(0, 1)
    }

    /// Returns a copy rotated 90° clockwise about the block at index 1.
    ///
    /// The pivot is a fixed block index rather than the geometric center, so
    /// some pieces (most visibly the I piece) appear to shift sideways when
    /// rotated. The pivot block maps onto itself, which makes four rotations
    /// reproduce the original offsets exactly. Position and kind are kept.
    #[must_use]
    pub fn rotated_right(&self) -> Self {
        let (px, py) = self.offsets[1];
        let offsets = self.offsets.map(|(dx, dy)| {
            let (tx, ty) = (dx - px, dy - py);
            let (rx, ry) = (-ty, tx);
            (rx + px, ry + py)
        });
        Self { offsets, ..*self }
    }
}

/// Position of a piece's local origin on the grid.
///
/// - (0, 0) is the top-left cell of the visible grid
/// - X increases rightward (columns)
/// - Y increases downward (rows); negative rows are above the visible top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PiecePosition {
    x: i32,
    y: i32,
}

impl PiecePosition {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn x(self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> i32 {
        self.y
    }

    #[must_use]
    pub const fn shifted(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}
