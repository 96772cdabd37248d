use crate::game::{GameController, SelectOutcome};
use crate::scores::ScoreStore;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

use super::BoardView;

pub struct App<S: ScoreStore> {
    controller: GameController<BoardView, S>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl<S: ScoreStore> App<S> {
    pub fn new(controller: GameController<BoardView, S>) -> Self {
        let selected_column = controller.board().cols() / 2; // Start in middle
        App {
            controller,
            selected_column,
            should_quit: false,
            message: None,
        }
    }

    pub fn controller(&self) -> &GameController<BoardView, S> {
        &self.controller
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.controller.board().cols() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                if column < self.controller.board().cols() {
                    self.selected_column = column;
                    self.drop_piece();
                } else {
                    self.message = Some("Invalid column!".to_string());
                }
            }
            KeyCode::Char('u') => {
                self.undo();
            }
            KeyCode::Char('n') => {
                self.controller.new_game();
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Char('c') => {
                self.controller.reset_scores();
                self.message = Some("Scoreboard cleared.".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.controller.select_column(self.selected_column) {
            Ok(SelectOutcome::Placed { .. }) => {}
            Ok(SelectOutcome::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Ok(SelectOutcome::GameOver) => {
                self.message = Some("Game over! Press 'n' for a new game.".to_string());
            }
            Err(e) => {
                tracing::error!(error = %e, "column selection failed");
                self.message = Some("Invalid column!".to_string());
            }
        }
    }

    fn undo(&mut self) {
        match self.controller.undo_last() {
            Ok(Some(_)) => {
                self.message = Some("Move undone.".to_string());
            }
            Ok(None) if self.controller.status().is_terminal() => {
                self.message = Some("Finished games cannot be undone.".to_string());
            }
            Ok(None) => {
                self.message = Some("Nothing to undo.".to_string());
            }
            Err(e) => {
                tracing::error!(error = %e, "undo failed");
                self.message = Some(format!("Undo failed: {e}"));
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            self.controller.renderer(),
            self.controller.status(),
            self.selected_column,
            &self.message,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameStatus, Player, COLS, ROWS};
    use crate::scores::{MemoryScoreStore, ScoreRecord};

    fn app() -> App<MemoryScoreStore> {
        let controller =
            GameController::new(ROWS, COLS, BoardView::default(), MemoryScoreStore::new())
                .unwrap();
        App::new(controller)
    }

    fn press(app: &mut App<MemoryScoreStore>, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    #[test]
    fn test_selector_stays_on_board() {
        let mut app = app();
        assert_eq!(app.selected_column(), 3);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column(), COLS - 1);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column(), 0);
    }

    #[test]
    fn test_digit_selects_and_drops() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.selected_column(), 1);
        assert_eq!(
            app.controller().renderer().piece_at(ROWS - 1, 1),
            Some(Player::Player1)
        );
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.message(), Some("Invalid column!"));
    }

    #[test]
    fn test_full_column_message() {
        let mut app = app();
        for _ in 0..ROWS {
            press(&mut app, KeyCode::Enter);
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message(), Some("Column is full!"));
        assert_eq!(app.controller().board().piece_count(), ROWS);
    }

    #[test]
    fn test_undo_and_new_game_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.message(), Some("Nothing to undo."));

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.message(), Some("Move undone."));
        assert_eq!(app.controller().board().piece_count(), 0);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.controller().board().piece_count(), 0);
        assert_eq!(app.message(), Some("New game started!"));
    }

    #[test]
    fn test_win_then_clear_scores() {
        let mut app = app();
        for key in ['1', '1', '2', '2', '3', '3', '4'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(app.controller().status(), GameStatus::Won(Player::Player1));
        assert_eq!(app.controller().scores(), ScoreRecord::new(1, 0));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message(), Some("Game over! Press 'n' for a new game."));

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.controller().scores(), ScoreRecord::default());
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
