use chrono::Local;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::config;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: i64,
    pub level: u8,
    /// RFC 3339 timestamp of when the score was set.
    pub date: String,
}

/// Per-song score lists, keyed by song name.
pub type Scoreboard = HashMap<String, Vec<ScoreEntry>>;

/// A missing or corrupt scoreboard file degrades to an empty board.
pub fn load_scoreboard(path: &Path) -> Scoreboard {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(_) => return Scoreboard::new(),
    };
    match serde_json::from_str(&text) {
        Ok(board) => board,
        Err(e) => {
            warn!(
                "Scoreboard '{}' is unreadable ({}); starting fresh",
                path.display(),
                e
            );
            Scoreboard::new()
        }
    }
}

pub fn save_scoreboard(path: &Path, board: &Scoreboard) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(board)?)?;
    Ok(())
}

/// Appends a score to the song's list, keeps it sorted descending, caps it,
/// persists the board and returns the song's updated list.
pub fn record_score(
    path: &Path,
    song_key: &str,
    player_name: &str,
    score: i64,
    level: u8,
) -> Result<Vec<ScoreEntry>, Box<dyn Error>> {
    let mut board = load_scoreboard(path);
    let entries = board.entry(song_key.to_string()).or_default();

    entries.push(ScoreEntry {
        name: player_name.to_string(),
        score,
        level,
        date: Local::now().to_rfc3339(),
    });
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(config::SCOREBOARD_MAX_ENTRIES);

    let snapshot = entries.clone();
    save_scoreboard(path, &board)?;
    info!(
        "Recorded {} points for '{}' on '{}' ({} entries)",
        score,
        player_name,
        song_key,
        snapshot.len()
    );
    Ok(snapshot)
}
