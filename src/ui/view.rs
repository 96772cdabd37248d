use crate::game::Player;
use crate::render::Renderer;
use crate::scores::ScoreRecord;

/// What the terminal currently shows: drawn pieces, status line, turn
/// indicator and scoreboard. The game view renders straight from this.
#[derive(Debug, Clone, Default)]
pub struct BoardView {
    rows: usize,
    cols: usize,
    pieces: Vec<Vec<Option<Player>>>,
    status: String,
    turn: Option<Player>,
    scores: ScoreRecord,
}

impl BoardView {
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Drawn piece at `(row, col)`; `None` for empty or off-grid cells
    pub fn piece_at(&self, row: usize, col: usize) -> Option<Player> {
        self.pieces.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.iter().flatten().filter(|p| p.is_some()).count()
    }

    pub fn status_text(&self) -> &str {
        &self.status
    }

    pub fn turn(&self) -> Option<Player> {
        self.turn
    }

    pub fn scores(&self) -> ScoreRecord {
        self.scores
    }

    fn slot(&mut self, row: usize, col: usize) -> Option<&mut Option<Player>> {
        self.pieces.get_mut(row).and_then(|r| r.get_mut(col))
    }
}

impl Renderer for BoardView {
    fn set_board_dimensions(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.pieces = vec![vec![None; cols]; rows];
    }

    fn render_piece(&mut self, row: usize, col: usize, player: Player) {
        if let Some(slot) = self.slot(row, col) {
            if slot.is_none() {
                *slot = Some(player);
            }
        }
    }

    fn remove_piece(&mut self, row: usize, col: usize) {
        if let Some(slot) = self.slot(row, col) {
            *slot = None;
        }
    }

    fn set_status_text(&mut self, text: &str) {
        self.status = text.to_string();
    }

    fn set_turn_indicator(&mut self, player: Player) {
        self.turn = Some(player);
    }

    fn set_scores(&mut self, scores: &ScoreRecord) {
        self.scores = *scores;
    }
}
