use std::time::{Duration, Instant};

/// Wall-clock song timeline with pause accounting.
///
/// Every position and spawn computation derives from the single `elapsed`
/// value this clock produces, never from the wall clock directly, so pausing
/// freezes the whole visual timeline at once. Elapsed time never goes
/// negative: underflow from a pause-offset correction clamps to zero.
#[derive(Debug, Clone, Copy)]
pub struct SongClock {
    started_at: Instant,
    paused_at: Option<Instant>,
    pause_offset: Duration,
}

impl SongClock {
    pub fn start(now: Instant) -> Self {
        SongClock {
            started_at: now,
            paused_at: None,
            pause_offset: Duration::ZERO,
        }
    }

    /// Seconds of song time since start, excluding paused spans. Frozen at
    /// the pause instant while paused.
    pub fn elapsed(&self, now: Instant) -> f32 {
        let end = self.paused_at.unwrap_or(now);
        end.saturating_duration_since(self.started_at)
            .checked_sub(self.pause_offset)
            .unwrap_or(Duration::ZERO)
            .as_secs_f32()
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// No-op when already paused.
    pub fn pause(&mut self, now: Instant) {
        if self.paused_at.is_none() {
            self.paused_at = Some(now);
        }
    }

    /// Folds the paused span into the pause offset. No-op when running.
    pub fn resume(&mut self, now: Instant) {
        if let Some(paused_at) = self.paused_at.take() {
            self.pause_offset += now.saturating_duration_since(paused_at);
        }
    }

    /// Instant at which audio playback should begin so that a block's visual
    /// center crosses the hit line exactly on its note's onset.
    pub fn music_start_at(&self, lead_time_sec: f32) -> Instant {
        self.started_at + Duration::from_secs_f32(lead_time_sec.max(0.0))
    }
}

/// Visual lead time between session start and audio start. Negative values
/// (a note due before the lead window) clamp to zero: playback fires
/// immediately at start.
pub fn lead_time_seconds(hit_line_y: f32, block_height: f32, speed: f32) -> f32 {
    if speed <= 0.0 {
        return 0.0;
    }
    ((hit_line_y - block_height * 0.5) / speed).max(0.0)
}
