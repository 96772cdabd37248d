//! Terminal UI: the board view the controller renders into, the game screen,
//! and the keyboard-driven app loop.

mod app;
mod game_view;
mod view;

pub use app::App;
pub use view::BoardView;
