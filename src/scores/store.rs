use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;
use crate::game::Player;

use super::ScoreRecord;

/// Key-value persistence for the two win counters.
pub trait ScoreStore {
    /// Stored win count for `player`; 0 when nothing has been saved yet.
    fn load(&self, player: Player) -> Result<u32, ScoreError>;

    fn save(&mut self, player: Player, wins: u32) -> Result<(), ScoreError>;

    /// Reset both counters to 0.
    fn clear(&mut self) -> Result<(), ScoreError>;

    /// Load both counters at once.
    fn load_record(&self) -> Result<ScoreRecord, ScoreError> {
        Ok(ScoreRecord::new(
            self.load(Player::Player1)?,
            self.load(Player::Player2)?,
        ))
    }
}

/// In-process store; forgets everything when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    record: ScoreRecord,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing counts, as if loaded from a previous session
    pub fn with_record(record: ScoreRecord) -> Self {
        MemoryScoreStore { record }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self, player: Player) -> Result<u32, ScoreError> {
        Ok(self.record.wins(player))
    }

    fn save(&mut self, player: Player, wins: u32) -> Result<(), ScoreError> {
        let other = self.record.wins(player.other());
        self.record = match player {
            Player::Player1 => ScoreRecord::new(wins, other),
            Player::Player2 => ScoreRecord::new(other, wins),
        };
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ScoreError> {
        self.record.clear();
        Ok(())
    }
}

/// On-disk layout: `{"p1Wins": n, "p2Wins": n}`. Missing keys read as 0.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct ScoreFile {
    #[serde(rename = "p1Wins", default)]
    p1_wins: u32,
    #[serde(rename = "p2Wins", default)]
    p2_wins: u32,
}

/// Scores persisted as a small JSON file.
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonScoreStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<ScoreFile, ScoreError> {
        if !self.path.exists() {
            return Ok(ScoreFile::default());
        }

        let json = fs::read_to_string(&self.path).map_err(|e| ScoreError::Read {
            path: self.path.clone(),
            source: e,
        })?;
        serde_json::from_str(&json).map_err(|e| ScoreError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    fn write(&self, file: &ScoreFile) -> Result<(), ScoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(file)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "scores written");
        Ok(())
    }
}

impl ScoreStore for JsonScoreStore {
    fn load(&self, player: Player) -> Result<u32, ScoreError> {
        let file = self.read()?;
        Ok(match player {
            Player::Player1 => file.p1_wins,
            Player::Player2 => file.p2_wins,
        })
    }

    fn save(&mut self, player: Player, wins: u32) -> Result<(), ScoreError> {
        // An unparsable file is overwritten rather than blocking every save.
        let mut file = match self.read() {
            Ok(file) => file,
            Err(e @ ScoreError::Parse { .. }) => {
                tracing::warn!(error = %e, "replacing unreadable scores file");
                ScoreFile::default()
            }
            Err(e) => return Err(e),
        };
        match player {
            Player::Player1 => file.p1_wins = wins,
            Player::Player2 => file.p2_wins = wins,
        }
        self.write(&file)
    }

    fn clear(&mut self) -> Result<(), ScoreError> {
        self.write(&ScoreFile::default())
    }
}
