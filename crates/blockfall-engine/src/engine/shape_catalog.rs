use crate::Piece;

use super::piece_source::{PieceSource, RandomPieceSource};

/// Produces freshly spawned pieces.
///
/// The catalog pairs the seven fixed templates with a [`PieceSource`] deciding
/// which one comes next. Each spawned piece gets its own copy of the template
/// offsets and starts horizontally centered on the top row (see [`Piece::new`]).
#[derive(Debug, Clone)]
pub struct ShapeCatalog<S = RandomPieceSource> {
    source: S,
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        Self::new(RandomPieceSource::new())
    }
}

impl<S> ShapeCatalog<S>
where
    S: PieceSource,
{
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Spawns the next piece at its starting position.
    pub fn random_piece(&mut self) -> Piece {
        Piece::new(self.source.next_kind())
    }
}
