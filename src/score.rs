use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::GameMode;
use crate::error::LeaderboardError;

const APP_DIR_NAME: &str = "grid-snake";
const LEADERBOARD_FILE_NAME: &str = "leaderboard.json";

/// One finished game as reported to a leaderboard.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player: String,
    pub score: u32,
    pub mode: GameMode,
}

/// Score store the driver reports finished games to.
pub trait Leaderboard {
    fn submit(&mut self, entry: LeaderboardEntry) -> Result<(), LeaderboardError>;

    /// Best entries for `mode`, highest score first.
    fn top(&self, mode: GameMode, limit: usize) -> Result<Vec<LeaderboardEntry>, LeaderboardError>;
}

fn ranked(entries: &[LeaderboardEntry], mode: GameMode, limit: usize) -> Vec<LeaderboardEntry> {
    let mut matching: Vec<_> = entries
        .iter()
        .filter(|entry| entry.mode == mode)
        .cloned()
        .collect();
    matching.sort_by(|a, b| b.score.cmp(&a.score));
    matching.truncate(limit);
    matching
}

/// Leaderboard kept only for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLeaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl InMemoryLeaderboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }
}

impl Leaderboard for InMemoryLeaderboard {
    fn submit(&mut self, entry: LeaderboardEntry) -> Result<(), LeaderboardError> {
        self.entries.push(entry);
        Ok(())
    }

    fn top(&self, mode: GameMode, limit: usize) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        Ok(ranked(&self.entries, mode, limit))
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct LeaderboardFile {
    entries: Vec<LeaderboardEntry>,
}

/// Leaderboard persisted as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonFileLeaderboard {
    path: PathBuf,
}

impl JsonFileLeaderboard {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Opens the leaderboard at the platform-correct data path.
    #[must_use]
    pub fn at_default_path() -> Self {
        Self::new(leaderboard_path())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<LeaderboardFile, LeaderboardError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(LeaderboardFile::default());
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, file: &LeaderboardFile) -> Result<(), LeaderboardError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(file)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl Leaderboard for JsonFileLeaderboard {
    fn submit(&mut self, entry: LeaderboardEntry) -> Result<(), LeaderboardError> {
        let mut file = self.load()?;
        file.entries.push(entry);
        self.save(&file)
    }

    fn top(&self, mode: GameMode, limit: usize) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        Ok(ranked(&self.load()?.entries, mode, limit))
    }
}

/// Returns the platform-correct leaderboard file path.
#[must_use]
pub fn leaderboard_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LEADERBOARD_FILE_NAME);
    base
}
