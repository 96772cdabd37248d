use crate::game::Player;

/// Wins per player. Only a finished game with a winner increments it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreRecord {
    player1: u32,
    player2: u32,
}

impl ScoreRecord {
    pub fn new(player1: u32, player2: u32) -> Self {
        ScoreRecord { player1, player2 }
    }

    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::Player1 => self.player1,
            Player::Player2 => self.player2,
        }
    }

    /// Add one win for `player` and return the new count
    pub fn record_win(&mut self, player: Player) -> u32 {
        let slot = match player {
            Player::Player1 => &mut self.player1,
            Player::Player2 => &mut self.player2,
        };
        *slot = slot.saturating_add(1);
        *slot
    }

    pub fn clear(&mut self) {
        *self = ScoreRecord::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_win_only_touches_winner() {
        let mut record = ScoreRecord::new(2, 5);
        assert_eq!(record.record_win(Player::Player1), 3);
        assert_eq!(record.wins(Player::Player1), 3);
        assert_eq!(record.wins(Player::Player2), 5);
    }

    #[test]
    fn test_clear() {
        let mut record = ScoreRecord::new(4, 1);
        record.clear();
        assert_eq!(record, ScoreRecord::default());
    }

    #[test]
    fn test_record_win_saturates() {
        let mut record = ScoreRecord::new(u32::MAX, 0);
        assert_eq!(record.record_win(Player::Player1), u32::MAX);
    }
}
