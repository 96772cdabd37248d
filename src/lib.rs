//! # Connect Four
//!
//! A two-player Connect Four game with undoable moves and a scoreboard that
//! persists across sessions. Plays in the terminal via Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Board, player, move engine, place commands, game controller
//! - [`render`] — Renderer trait the controller reports visual changes to
//! - [`scores`] — Win counters and their in-memory / JSON file stores
//! - [`ui`] — Terminal UI: board view, game screen, app loop
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — File-backed tracing setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod render;
pub mod scores;
pub mod ui;
