//! A mine sweeping engine whose board is never mutated: every game is an
//! immutable mine layout plus a log of moves, and what the player sees is
//! derived by replaying that log.
//!
//! ```
//! use minereplay::{Cell, Game, GameStatus};
//!
//! let cells = [false, true, true, true].into_iter().map(Cell::new).collect();
//! let game = Game::from_cells(2, 2, cells)?;
//! let next = game.open_coordinates(0, 0)?;
//!
//! assert_eq!(next.board(), vec!['3', ' ', ' ', ' ']);
//! assert_eq!(next.game_status(), GameStatus::Open);
//! # Ok::<(), minereplay::Error>(())
//! ```

mod cell;
mod chain;
mod config;
mod error;
mod game;
mod grid;
mod moves;
mod record;
mod store;
mod view;

pub use cell::{Cell, CellId, Location};
pub use chain::neighbors_chain;
pub use config::{GameConfig, DEFAULT_MINE_PROBABILITY};
pub use error::{Axis, Error, Result};
pub use game::{Game, GameId, GameStatus};
pub use grid::{associate_cells, generate_cells, Grid};
pub use moves::{GameMove, MoveKind, MoveRequest, ParseMoveKindError};
pub use record::{CellRecord, GameRecord};
pub use store::MemGameStore;
pub use view::{derive_views, CellState, CellView};
