//! Rendering seam between the game controller and whatever draws the board.

use crate::game::Player;
use crate::scores::ScoreRecord;

/// Receives visual updates from the game controller.
///
/// `render_piece` and `remove_piece` must be idempotent: drawing an already
/// drawn cell or clearing an empty one is a no-op.
pub trait Renderer {
    /// Build the visual grid. Called once when a controller is created.
    fn set_board_dimensions(&mut self, rows: usize, cols: usize);

    fn render_piece(&mut self, row: usize, col: usize, player: Player);

    fn remove_piece(&mut self, row: usize, col: usize);

    /// Win, tie and turn messages
    fn set_status_text(&mut self, text: &str);

    fn set_turn_indicator(&mut self, player: Player);

    fn set_scores(&mut self, scores: &ScoreRecord);
}

/// Renderer that discards every update, for headless games.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn set_board_dimensions(&mut self, _rows: usize, _cols: usize) {}

    fn render_piece(&mut self, _row: usize, _col: usize, _player: Player) {}

    fn remove_piece(&mut self, _row: usize, _col: usize) {}

    fn set_status_text(&mut self, _text: &str) {}

    fn set_turn_indicator(&mut self, _player: Player) {}

    fn set_scores(&mut self, _scores: &ScoreRecord) {}
}
