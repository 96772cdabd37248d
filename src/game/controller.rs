use tracing::{debug, info, instrument, warn};

use crate::error::GameError;
use crate::render::Renderer;
use crate::scores::{ScoreRecord, ScoreStore};

use super::command::PlaceCommand;
use super::engine::{self, GameResult, Move};
use super::{Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingMove(Player),
    Won(Player),
    Tied,
}

impl GameStatus {
    /// Won and Tied accept no further moves
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::AwaitingMove(_))
    }
}

/// What a column selection did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Placed { mv: Move, status: GameStatus },
    /// Column had no empty cell; nothing changed.
    ColumnFull,
    /// Game already finished; nothing changed.
    GameOver,
}

/// Turn sequencing and score bookkeeping for one game session.
///
/// Owns the board exclusively. Every state change is forwarded to the
/// renderer; wins are persisted through the score store.
pub struct GameController<R: Renderer, S: ScoreStore> {
    board: Board,
    status: GameStatus,
    history: Vec<PlaceCommand>,
    scores: ScoreRecord,
    renderer: R,
    store: S,
}

impl<R: Renderer, S: ScoreStore> GameController<R, S> {
    /// Start a session on an empty `rows` x `cols` board with Player 1 to move.
    pub fn new(rows: usize, cols: usize, mut renderer: R, store: S) -> Result<Self, GameError> {
        let board = Board::new(rows, cols)?;
        let scores = store.load_record().unwrap_or_else(|e| {
            warn!(error = %e, "failed to load scores, starting from zero");
            ScoreRecord::default()
        });

        renderer.set_board_dimensions(rows, cols);
        renderer.set_scores(&scores);

        let mut controller = GameController {
            board,
            status: GameStatus::AwaitingMove(Player::Player1),
            history: Vec::new(),
            scores,
            renderer,
            store,
        };
        controller.announce_turn(Player::Player1);
        Ok(controller)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Player to move, if the game is still running
    pub fn current_player(&self) -> Option<Player> {
        match self.status {
            GameStatus::AwaitingMove(player) => Some(player),
            _ => None,
        }
    }

    pub fn scores(&self) -> ScoreRecord {
        self.scores
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Number of moves that can still be undone
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Play the current player's piece into `column`.
    ///
    /// `column` outside the board is a caller error. A full column or a
    /// finished game leaves everything untouched.
    #[instrument(skip(self))]
    pub fn select_column(&mut self, column: usize) -> Result<SelectOutcome, GameError> {
        if column >= self.board.cols() {
            return Err(GameError::OutOfBounds {
                row: 0,
                col: column,
                rows: self.board.rows(),
                cols: self.board.cols(),
            });
        }

        let player = match self.status {
            GameStatus::AwaitingMove(player) => player,
            _ => {
                debug!("game over, selection ignored");
                return Ok(SelectOutcome::GameOver);
            }
        };

        let command =
            match PlaceCommand::execute(&mut self.board, column, player, &mut self.renderer) {
                Ok(command) => command,
                Err(GameError::ColumnFull { .. }) => {
                    debug!("column full, selection ignored");
                    return Ok(SelectOutcome::ColumnFull);
                }
                Err(e) => return Err(e),
            };
        self.history.push(command);

        let mv = command.placed();
        debug!(row = mv.row, ?player, "piece placed");

        self.status = match engine::evaluate(&self.board, player) {
            GameResult::Win(winner) => {
                self.on_win(winner);
                GameStatus::Won(winner)
            }
            GameResult::Tie => {
                info!("game tied");
                self.renderer.set_status_text("Tie!");
                GameStatus::Tied
            }
            GameResult::InProgress => {
                let next = player.other();
                self.announce_turn(next);
                GameStatus::AwaitingMove(next)
            }
        };

        Ok(SelectOutcome::Placed {
            mv,
            status: self.status,
        })
    }

    /// Take back the most recent move and give the turn back to its player.
    ///
    /// Returns `None` when there is nothing to undo or the game has already
    /// finished.
    #[instrument(skip(self))]
    pub fn undo_last(&mut self) -> Result<Option<Move>, GameError> {
        if self.status.is_terminal() {
            return Ok(None);
        }
        let Some(command) = self.history.pop() else {
            return Ok(None);
        };

        if let Err(e) = command.undo(&mut self.board, &mut self.renderer) {
            self.history.push(command);
            return Err(e);
        }

        let mv = command.placed();
        debug!(row = mv.row, column = mv.column, player = ?mv.player, "move undone");
        self.status = GameStatus::AwaitingMove(mv.player);
        self.announce_turn(mv.player);
        Ok(Some(mv))
    }

    /// Zero both win counters. The board is left alone.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores.clear();
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "failed to clear stored scores");
        }
        self.renderer.set_scores(&self.scores);
        info!("scoreboard reset");
    }

    /// Empty the board and hand the first move to Player 1. Scores persist.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        let placed: Vec<(usize, usize)> =
            self.board.pieces().map(|(row, col, _)| (row, col)).collect();
        for (row, col) in placed {
            self.renderer.remove_piece(row, col);
        }

        self.board.clear();
        self.history.clear();
        self.status = GameStatus::AwaitingMove(Player::Player1);
        self.announce_turn(Player::Player1);
        info!("new game started");
    }

    fn on_win(&mut self, winner: Player) {
        let wins = self.scores.record_win(winner);
        info!(?winner, wins, "game won");

        if let Err(e) = self.store.save(winner, wins) {
            warn!(error = %e, "failed to persist score");
        }
        self.renderer.set_scores(&self.scores);
        self.renderer
            .set_status_text(&format!("Player {} Wins!", winner.number()));
    }

    fn announce_turn(&mut self, player: Player) {
        self.renderer.set_turn_indicator(player);
        self.renderer
            .set_status_text(&format!("{}'s turn", player.color_name()));
    }
}
