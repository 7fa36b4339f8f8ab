use log::{debug, warn};
use serde::Deserialize;

/// One MIDI-derived onset, as produced by the external chart parser.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct NoteEvent {
    pub pitch: u8,
    /// Onset in seconds from the start of the song.
    pub time: f32,
}

/// A scheduled note. Immutable after load except for the write-once
/// `spawned` flag set by the spawn engine.
#[derive(Debug, Clone)]
pub struct Note {
    pub pitch: u8,
    pub time: f32,
    spawned: bool,
}

impl Note {
    pub fn lane(&self, lane_count: usize) -> usize {
        if lane_count == 0 {
            0
        } else {
            self.pitch as usize % lane_count
        }
    }

    pub fn is_spawned(&self) -> bool {
        self.spawned
    }

    pub(crate) fn mark_spawned(&mut self) {
        debug_assert!(!self.spawned, "note spawned twice");
        self.spawned = true;
    }
}

/// Time-ordered note sequence, sorted once at load and never re-sorted.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    notes: Vec<Note>,
}

impl Timeline {
    pub fn from_events(events: impl IntoIterator<Item = NoteEvent>) -> Self {
        let mut notes: Vec<Note> = Vec::new();
        let mut discarded = 0usize;
        for event in events {
            if !event.time.is_finite() || event.time < 0.0 {
                discarded += 1;
                continue;
            }
            notes.push(Note {
                pitch: event.pitch,
                time: event.time,
                spawned: false,
            });
        }
        if discarded > 0 {
            warn!("Discarded {} note events with invalid onsets", discarded);
        }
        notes.sort_by(|a, b| a.time.total_cmp(&b.time));
        debug!("Timeline loaded with {} notes", notes.len());
        Timeline { notes }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub(crate) fn notes_mut(&mut self) -> &mut [Note] {
        &mut self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Onset of the final note; zero for an empty timeline.
    pub fn last_onset(&self) -> f32 {
        self.notes.last().map_or(0.0, |n| n.time)
    }

    pub fn all_spawned(&self) -> bool {
        self.notes.iter().all(|n| n.spawned)
    }

    /// Clears every `spawned` flag in one pass, for replay.
    pub fn reset(&mut self) {
        for note in &mut self.notes {
            note.spawned = false;
        }
    }
}
