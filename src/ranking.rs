//! Leaderboard persistence.
//!
//! Keeps the best `MAX_RANKING` players, one entry per player name, sorted by
//! total score. Stored as JSON.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::compute::{final_score, time_used};
use crate::entities::GameState;
use crate::error::RankingError;

/// Maximum number of players kept on the board.
pub const MAX_RANKING: usize = 10;

/// Default leaderboard file, next to `config.txt`.
pub const RANKING_FILE: &str = "ranking.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub name: String,
    pub stars_collected: u32,
    pub star_quota: u32,
    /// Seconds played.
    pub time_used: f64,
    pub total_score: u32,
}

impl RankingEntry {
    /// Summarise a finished session.
    pub fn from_session(state: &GameState) -> Self {
        Self {
            name: state.config.player_name.clone(),
            stars_collected: state.bird.score,
            star_quota: state.config.star_quota,
            time_used: time_used(&state.config),
            total_score: final_score(state),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ranking {
    pub entries: Vec<RankingEntry>,
}

impl Ranking {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a result. A returning player only replaces their entry with a
    /// better score. Returns the 1-indexed rank held afterwards, or `None` if
    /// the player did not make the board.
    pub fn record(&mut self, entry: RankingEntry) -> Option<usize> {
        let name = entry.name.clone();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(existing) => {
                if entry.total_score > existing.total_score {
                    *existing = entry;
                }
            }
            None => self.entries.push(entry),
        }

        self.entries.sort_by(|a, b| b.total_score.cmp(&a.total_score));
        self.entries.truncate(MAX_RANKING);

        self.entries
            .iter()
            .position(|e| e.name == name)
            .map(|i| i + 1)
    }

    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.total_score)
    }

    /// Load the board. A missing file is an empty board, not an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RankingError> {
        let path = path.as_ref();
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("no ranking at {}, starting fresh", path.display());
                return Ok(Self::new());
            }
            Err(source) => {
                return Err(RankingError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let mut ranking: Ranking = serde_json::from_str(&json)?;
        ranking.entries.sort_by(|a, b| b.total_score.cmp(&a.total_score));
        ranking.entries.truncate(MAX_RANKING);
        log::info!("loaded {} ranking entries", ranking.entries.len());
        Ok(ranking)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RankingError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| RankingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("ranking saved ({} entries)", self.entries.len());
        Ok(())
    }
}
