use crate::error::GameError;
use crate::render::Renderer;

use super::engine::{self, Move};
use super::{Board, Player};

/// An executed piece placement that can be reverted.
///
/// Board mutation goes through the engine; the renderer is only told about
/// the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceCommand {
    mv: Move,
}

impl PlaceCommand {
    /// Drop `player`'s piece into `column` and draw it.
    pub fn execute<R: Renderer + ?Sized>(
        board: &mut Board,
        column: usize,
        player: Player,
        renderer: &mut R,
    ) -> Result<Self, GameError> {
        let mv = engine::apply_move(board, column, player)?;
        renderer.render_piece(mv.row, mv.column, mv.player);
        Ok(PlaceCommand { mv })
    }

    /// Clear the placed piece from the board and the display.
    pub fn undo<R: Renderer + ?Sized>(
        &self,
        board: &mut Board,
        renderer: &mut R,
    ) -> Result<(), GameError> {
        engine::undo_move(board, &self.mv)?;
        renderer.remove_piece(self.mv.row, self.mv.column);
        Ok(())
    }

    pub fn placed(&self) -> Move {
        self.mv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;
    use crate::ui::BoardView;

    fn view_for(board: &Board) -> BoardView {
        let mut view = BoardView::default();
        view.set_board_dimensions(board.rows(), board.cols());
        view
    }

    #[test]
    fn test_execute_places_and_renders() {
        let mut board = Board::standard();
        let mut view = view_for(&board);

        let cmd = PlaceCommand::execute(&mut board, 2, Player::Player1, &mut view).unwrap();

        assert_eq!(cmd.placed().row, 5);
        assert_eq!(board.get(5, 2).unwrap(), Cell::Player1);
        assert_eq!(view.piece_at(5, 2), Some(Player::Player1));
    }

    #[test]
    fn test_undo_clears_board_and_view() {
        let mut board = Board::standard();
        let mut view = view_for(&board);

        let cmd = PlaceCommand::execute(&mut board, 6, Player::Player2, &mut view).unwrap();
        cmd.undo(&mut board, &mut view).unwrap();

        assert_eq!(board, Board::standard());
        assert_eq!(view.piece_at(5, 6), None);
    }

    #[test]
    fn test_failed_execute_renders_nothing() {
        let mut board = Board::new(1, 2).unwrap();
        let mut view = view_for(&board);
        PlaceCommand::execute(&mut board, 0, Player::Player1, &mut view).unwrap();

        let err = PlaceCommand::execute(&mut board, 0, Player::Player2, &mut view).unwrap_err();
        assert_eq!(err, GameError::ColumnFull { column: 0 });
        assert_eq!(view.piece_at(0, 0), Some(Player::Player1));
    }

    #[test]
    fn test_out_of_order_undo_is_rejected() {
        let mut board = Board::standard();
        let mut view = view_for(&board);
        let first = PlaceCommand::execute(&mut board, 0, Player::Player1, &mut view).unwrap();
        first.undo(&mut board, &mut view).unwrap();
        PlaceCommand::execute(&mut board, 0, Player::Player2, &mut view).unwrap();

        assert!(matches!(
            first.undo(&mut board, &mut view),
            Err(GameError::InvalidUndo { .. })
        ));
        assert_eq!(board.get(5, 0).unwrap(), Cell::Player2);
        assert_eq!(view.piece_at(5, 0), Some(Player::Player2));
    }
}
