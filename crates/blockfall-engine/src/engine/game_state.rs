use crate::{Grid, Piece};

use super::game_stats::GameStats;

/// Whether the game still accepts moves.
///
/// A game moves from `Running` to `GameOver` exactly once and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum Phase {
    #[default]
    Running,
    GameOver,
}

/// Everything a renderer needs to draw one frame.
///
/// The active piece is always present. After game over it is the spawned piece
/// that did not fit, so it is drawn overlapping the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,
    active_piece: Piece,
    stats: GameStats,
    phase: Phase,
}

impl GameState {
    pub(crate) fn new(grid: Grid, active_piece: Piece) -> Self {
        Self {
            grid,
            active_piece,
            stats: GameStats::new(),
            phase: Phase::Running,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn active_piece(&self) -> &Piece {
        &self.active_piece
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn set_active_piece(&mut self, piece: Piece) {
        self.active_piece = piece;
    }

    pub(crate) fn set_game_over(&mut self) {
        self.phase = Phase::GameOver;
    }

    /// Writes the active piece into the grid, clears full rows and scores them.
    ///
    /// Blocks above the visible top are dropped. Returns the number of rows
    /// cleared.
    pub(crate) fn settle_active_piece(&mut self) -> usize {
        for (x, y) in self.active_piece.occupied_positions() {
            if y >= 0 {
                self.grid.set_cell(x, y, self.active_piece.kind());
            }
        }
        let cleared = self.grid.clear_full_rows();
        self.stats.record_lock(cleared);
        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PiecePosition, ShapeKind};

    #[test]
    fn test_new_state_is_running() {
        let state = GameState::new(Grid::EMPTY, Piece::new(ShapeKind::T));
        assert!(state.phase().is_running());
        assert_eq!(state.stats().score(), 0);
        assert_eq!(state.active_piece().kind(), ShapeKind::T);
    }

    #[test]
    fn test_settle_drops_blocks_above_top() {
        // Vertical I whose top block sits at row -1.
        let piece = Piece::at(ShapeKind::I, PiecePosition::new(2, 0)).rotated_right();
        let mut state = GameState::new(Grid::EMPTY, piece);
        assert_eq!(state.settle_active_piece(), 0);

        let occupied = state
            .grid()
            .rows()
            .flat_map(|row| row.cells())
            .filter(|cell| !cell.is_empty())
            .count();
        assert_eq!(occupied, 3);
        for y in 0..3 {
            assert!(state.grid().is_occupied(3, y));
        }
        assert_eq!(state.stats().locked_pieces(), 1);
    }
}
