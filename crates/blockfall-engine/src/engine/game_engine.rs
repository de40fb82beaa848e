use crate::{Grid, Piece, collides};

use super::{
    game_state::{GameState, Phase},
    game_stats::GameStats,
    piece_source::{PieceSeed, PieceSource, RandomPieceSource},
    shape_catalog::ShapeCatalog,
};

/// Direction of a sideways move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum HorizontalDirection {
    Left,
    Right,
}

impl HorizontalDirection {
    #[must_use]
    pub const fn dx(self) -> i32 {
        match self {
            HorizontalDirection::Left => -1,
            HorizontalDirection::Right => 1,
        }
    }
}

/// Result of locking the active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockOutcome {
    /// Rows removed by the lock.
    pub cleared_lines: usize,
    /// Whether the piece spawned after the lock did not fit.
    pub game_over: bool,
}

/// Result of one step of downward movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum DropOutcome {
    /// The piece moved down one row.
    Moved,
    /// The piece could not move and was locked.
    Locked(LockOutcome),
}

/// The game-state engine: owns the state and applies every rule.
///
/// All methods are synchronous and free of timing; a scheduler decides when
/// to call [`Self::tick`]. Once the game is over, every mutating method is a
/// no-op that reports `None` or `false`.
#[derive(Debug, Clone)]
pub struct GameEngine<S = RandomPieceSource> {
    state: GameState,
    catalog: ShapeCatalog<S>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Starts a game on an empty grid with a randomly seeded piece sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(RandomPieceSource::new())
    }

    /// Like [`Self::new`], but with a specific seed for a reproducible piece sequence.
    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self::with_source(RandomPieceSource::with_seed(seed))
    }

    /// Returns the seed of the piece sequence.
    #[must_use]
    pub fn seed(&self) -> PieceSeed {
        self.catalog.source().seed()
    }
}

impl<S> GameEngine<S>
where
    S: PieceSource,
{
    /// Starts a game on an empty grid, drawing pieces from `source`.
    #[must_use]
    pub fn with_source(source: S) -> Self {
        Self::with_grid(source, Grid::EMPTY)
    }

    /// Starts a game on a prepared grid.
    ///
    /// If the first piece already collides with the grid, the game begins in
    /// [`Phase::GameOver`].
    #[must_use]
    pub fn with_grid(source: S, grid: Grid) -> Self {
        let mut catalog = ShapeCatalog::new(source);
        let piece = catalog.random_piece();
        let mut state = GameState::new(grid, piece);
        if collides(&piece, state.grid(), 0, 0) {
            state.set_game_over();
        }
        Self { state, catalog }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        self.state.grid()
    }

    #[must_use]
    pub fn active_piece(&self) -> &Piece {
        self.state.active_piece()
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        self.state.stats()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.state.stats().score()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.phase().is_game_over()
    }

    /// Advances the game by one gravity step. Same as [`Self::soft_drop`].
    pub fn tick(&mut self) -> Option<DropOutcome> {
        self.soft_drop()
    }

    /// Moves the active piece down one row, locking it if it cannot move.
    ///
    /// Returns `None` once the game is over.
    pub fn soft_drop(&mut self) -> Option<DropOutcome> {
        if self.is_game_over() {
            return None;
        }
        let piece = *self.state.active_piece();
        if collides(&piece, self.state.grid(), 0, 1) {
            return self.lock().map(DropOutcome::Locked);
        }
        self.state.set_active_piece(piece.down());
        Some(DropOutcome::Moved)
    }

    /// Locks the active piece where it is and spawns the next one.
    ///
    /// Blocks above the visible top are discarded. Full rows are cleared and
    /// scored. If the new piece collides right away, the game ends and the
    /// colliding piece stays active. Returns `None` once the game is over.
    pub fn lock(&mut self) -> Option<LockOutcome> {
        if self.is_game_over() {
            return None;
        }
        let cleared_lines = self.state.settle_active_piece();
        let next = self.catalog.random_piece();
        self.state.set_active_piece(next);
        let game_over = collides(&next, self.state.grid(), 0, 0);
        if game_over {
            self.state.set_game_over();
        }
        Some(LockOutcome {
            cleared_lines,
            game_over,
        })
    }

    /// Moves the active piece one column in `direction` if nothing is in the way.
    ///
    /// Returns whether the piece moved.
    pub fn move_horizontal(&mut self, direction: HorizontalDirection) -> bool {
        if self.is_game_over() {
            return false;
        }
        let piece = *self.state.active_piece();
        if collides(&piece, self.state.grid(), direction.dx(), 0) {
            return false;
        }
        self.state.set_active_piece(piece.shifted(direction.dx(), 0));
        true
    }

    /// Rotates the active piece clockwise if the rotated piece fits in place.
    ///
    /// There are no wall kicks: a blocked rotation is simply rejected.
    /// Returns whether the piece rotated.
    pub fn rotate(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        let rotated = self.state.active_piece().rotated_right();
        if collides(&rotated, self.state.grid(), 0, 0) {
            return false;
        }
        self.state.set_active_piece(rotated);
        true
    }
}
