//! Core Connect Four game logic: board representation, player types, the
//! stateless move engine, undoable place commands and the game controller.

mod board;
mod command;
mod controller;
pub mod engine;
mod player;

pub use board::{Board, Cell, COLS, ROWS};
pub use command::PlaceCommand;
pub use controller::{GameController, GameStatus, SelectOutcome};
pub use engine::{GameResult, Move, CONNECT};
pub use player::Player;
