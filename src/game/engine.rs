//! Stateless move engine: drop-row search, move application and undo, and
//! win/tie detection over a borrowed [`Board`].

use crate::error::GameError;

use super::{Board, Cell, Player};

/// Pieces in a row needed to win
pub const CONNECT: usize = 4;

/// `(d_row, d_col)` for horizontal, vertical, diagonal down-right and
/// diagonal down-left runs.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A piece placed at `(row, column)` by `player`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub column: usize,
    pub row: usize,
    pub player: Player,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    Win(Player),
    Tie,
}

/// Find the row a piece dropped into `column` would land on.
///
/// Scans every row from the bottom up and returns the first empty one, or
/// `None` when the column has no empty cell.
pub fn find_drop_row(board: &Board, column: usize) -> Result<Option<usize>, GameError> {
    if column >= board.cols() {
        return Err(GameError::OutOfBounds {
            row: 0,
            col: column,
            rows: board.rows(),
            cols: board.cols(),
        });
    }

    for row in (0..board.rows()).rev() {
        if board.get(row, column)?.is_empty() {
            return Ok(Some(row));
        }
    }
    Ok(None)
}

/// Drop a piece for `player` into `column`.
pub fn apply_move(board: &mut Board, column: usize, player: Player) -> Result<Move, GameError> {
    let row = find_drop_row(board, column)?.ok_or(GameError::ColumnFull { column })?;
    board.set(row, column, player.to_cell())?;
    Ok(Move {
        column,
        row,
        player,
    })
}

/// Revert `mv`. Fails if the cell no longer holds `mv.player`'s piece.
pub fn undo_move(board: &mut Board, mv: &Move) -> Result<(), GameError> {
    let found = board.get(mv.row, mv.column)?;
    if found != mv.player.to_cell() {
        return Err(GameError::InvalidUndo {
            row: mv.row,
            col: mv.column,
            player: mv.player,
            found,
        });
    }
    board.set(mv.row, mv.column, Cell::Empty)
}

/// Check whether `player` has `CONNECT` pieces in a row anywhere on the board
pub fn check_win(board: &Board, player: Player) -> bool {
    let target = player.to_cell();
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            for &(d_row, d_col) in &DIRECTIONS {
                if run_matches(board, row as isize, col as isize, d_row, d_col, target) {
                    return true;
                }
            }
        }
    }
    false
}

/// Board is full and nobody has won
pub fn check_tie(board: &Board) -> bool {
    board.is_full() && !check_win(board, Player::Player1) && !check_win(board, Player::Player2)
}

/// Derive the result after `mover` has just played. A win on the final
/// empty cell is a win, not a tie.
pub fn evaluate(board: &Board, mover: Player) -> GameResult {
    if check_win(board, mover) {
        GameResult::Win(mover)
    } else if check_tie(board) {
        GameResult::Tie
    } else {
        GameResult::InProgress
    }
}

/// Columns that can still take a piece
pub fn legal_columns(board: &Board) -> Vec<usize> {
    (0..board.cols())
        .filter(|&col| !board.is_column_full(col))
        .collect()
}

fn run_matches(
    board: &Board,
    row: isize,
    col: isize,
    d_row: isize,
    d_col: isize,
    target: Cell,
) -> bool {
    (0..CONNECT as isize).all(|k| {
        let r = row + k * d_row;
        let c = col + k * d_col;
        board.in_bounds(r, c) && board.get(r as usize, c as usize) == Ok(target)
    })
}
