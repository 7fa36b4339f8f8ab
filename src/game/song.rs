use crate::game::timeline::{NoteEvent, Timeline};
use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A song folder discovered on disk: a directory containing a JSON chart.
/// The chart is the note-event list an external MIDI extractor produced.
#[derive(Debug, Clone)]
pub struct SongInfo {
    pub name: String,
    pub chart_path: PathBuf,
}

/// A fully loaded song, ready to hand to `gameplay::init`.
#[derive(Debug, Clone)]
pub struct SongData {
    pub name: String,
    pub timeline: Timeline,
    pub length_seconds: f32,
}

#[derive(Debug, Deserialize)]
struct ChartFile {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    length_seconds: Option<f32>,
    notes: Vec<NoteEvent>,
}

/// Scans `dir` for per-song subdirectories carrying a `.json` chart. A
/// missing directory yields an empty list, not an error.
pub fn find_songs(dir: &Path) -> Vec<SongInfo> {
    let mut songs = Vec::new();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Could not read songs directory '{}': {}", dir.display(), e);
            return songs;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(chart_path) = first_json_in(&path) else {
            continue;
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        songs.push(SongInfo { name, chart_path });
    }

    songs.sort_by(|a, b| a.name.cmp(&b.name));
    info!("Found {} song(s) in '{}'", songs.len(), dir.display());
    songs
}

fn first_json_in(dir: &Path) -> Option<PathBuf> {
    let mut charts: Vec<PathBuf> = fs::read_dir(dir)
        .ok()?
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")))
        .collect();
    charts.sort();
    charts.into_iter().next()
}

/// Loads a song's chart. Missing or malformed chart data degrades to an
/// empty timeline: the session runs, no blocks ever spawn.
pub fn load_song(info: &SongInfo) -> SongData {
    let chart = fs::read_to_string(&info.chart_path)
        .map_err(|e| e.to_string())
        .and_then(|text| serde_json::from_str::<ChartFile>(&text).map_err(|e| e.to_string()));

    let chart = match chart {
        Ok(chart) => chart,
        Err(e) => {
            warn!(
                "Failed to load chart '{}': {}; using an empty timeline",
                info.chart_path.display(),
                e
            );
            ChartFile {
                name: None,
                length_seconds: None,
                notes: Vec::new(),
            }
        }
    };

    let timeline = Timeline::from_events(chart.notes);
    let length_seconds = chart
        .length_seconds
        .filter(|len| len.is_finite() && *len > 0.0)
        .unwrap_or_else(|| timeline.last_onset());
    let name = chart.name.unwrap_or_else(|| info.name.clone());

    info!(
        "Loaded song '{}': {} notes, {:.1}s",
        name,
        timeline.len(),
        length_seconds
    );
    SongData {
        name,
        timeline,
        length_seconds,
    }
}
