//! Core Connect Four game logic: board representation, player types, and the
//! rules engine that owns a game from the first move to a win or draw.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, Coord, Direction, WinningLine, WIN_LENGTH};
pub use player::Player;
pub use state::{Engine, GameStatus, Placement};
