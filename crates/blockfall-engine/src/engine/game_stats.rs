/// Points awarded for each cleared line.
///
/// Lines are scored independently: clearing two at once is worth exactly twice
/// a single.
pub const SCORE_PER_LINE: usize = 100;

/// Score and counters for one game.
///
/// Only line clears change the score. The piece and line counters are
/// informational and shown next to the score.
///
/// # Example
///
/// ```
/// use blockfall_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.record_lock(0);
/// stats.record_lock(2);
///
/// assert_eq!(stats.score(), 200);
/// assert_eq!(stats.cleared_lines(), 2);
/// assert_eq!(stats.locked_pieces(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    score: usize,
    locked_pieces: usize,
    cleared_lines: usize,
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    /// Creates statistics with every counter at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            locked_pieces: 0,
            cleared_lines: 0,
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Returns how many pieces have been locked into the grid.
    #[must_use]
    pub const fn locked_pieces(&self) -> usize {
        self.locked_pieces
    }

    /// Returns the total number of lines cleared so far.
    #[must_use]
    pub const fn cleared_lines(&self) -> usize {
        self.cleared_lines
    }

    /// Updates the counters after a piece locks and `cleared_lines` rows are removed.
    pub const fn record_lock(&mut self, cleared_lines: usize) {
        self.locked_pieces += 1;
        self.cleared_lines += cleared_lines;
        self.score += cleared_lines * SCORE_PER_LINE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_are_zero() {
        let stats = GameStats::new();
        assert_eq!(stats.score(), 0);
        assert_eq!(stats.locked_pieces(), 0);
        assert_eq!(stats.cleared_lines(), 0);
        assert_eq!(stats, GameStats::default());
    }

    #[test]
    fn test_score_is_linear_in_lines() {
        for lines in 0..=4 {
            let mut stats = GameStats::new();
            stats.record_lock(lines);
            assert_eq!(stats.score(), lines * 100);
        }
    }

    #[test]
    fn test_counters_accumulate() {
        let mut stats = GameStats::new();
        for lines in [1, 0, 0, 3, 4] {
            stats.record_lock(lines);
        }
        assert_eq!(stats.locked_pieces(), 5);
        assert_eq!(stats.cleared_lines(), 8);
        assert_eq!(stats.score(), 800);
    }
}
