//! Game rules and state management.
//!
//! This module builds the game on top of the core data structures:
//!
//! - [`GameEngine`] - Owns the state and applies moves, gravity, locking and scoring
//! - [`GameState`] - Grid, active piece, statistics and phase, as read by renderers
//! - [`GameStats`] - Score, cleared lines and locked pieces
//! - [`ShapeCatalog`] - Spawns centered pieces from a [`PieceSource`]
//! - [`PieceSeed`] - Seed for deterministic piece generation
//!
//! # Game Flow
//!
//! 1. Create a [`GameEngine`]; the first piece spawns at the top center
//! 2. The player moves and rotates the active piece
//! 3. Gravity ([`GameEngine::tick`]) moves it down until it cannot move, then locks it
//! 4. Full rows are cleared and scored, and the next piece spawns
//! 5. Repeat until a spawned piece collides with the stack
//!
//! # Example
//!
//! ```
//! use blockfall_engine::{DropOutcome, GameEngine, HorizontalDirection};
//!
//! let mut engine = GameEngine::new();
//!
//! engine.move_horizontal(HorizontalDirection::Left);
//! engine.rotate();
//!
//! while let Some(outcome) = engine.tick() {
//!     if let DropOutcome::Locked(lock) = outcome {
//!         println!("cleared {} lines", lock.cleared_lines);
//!         break;
//!     }
//! }
//! assert_eq!(engine.stats().locked_pieces(), 1);
//! ```

pub use self::{game_engine::*, game_state::*, game_stats::*, piece_source::*, shape_catalog::*};

mod game_engine;
mod game_state;
mod game_stats;
mod piece_source;
mod shape_catalog;
