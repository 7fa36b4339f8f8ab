use crate::config;
use crate::utils::math::Rect;
use cgmath::Vector2;

/// Lifecycle of a falling target. `since` timestamps are in elapsed song
/// seconds, used for the hit pulse animation and the missed fade timer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlockState {
    Falling,
    Hit { since: f32 },
    Missed { since: f32 },
}

/// One live falling target. The block does not own its note; it only copies
/// the onset needed to recompute its position from elapsed time.
#[derive(Debug, Clone)]
pub struct Block {
    pub lane: usize,
    pub rect: Rect,
    pub color: [f32; 4],
    pub state: BlockState,
    /// Onset of the originating note, in song seconds.
    pub note_time: f32,
}

impl Block {
    /// Vertical position as a pure function of elapsed time. Clamped so a
    /// block can never sit above its spawn position.
    #[inline(always)]
    pub fn fall_y(note_time: f32, elapsed: f32, speed: f32) -> f32 {
        ((elapsed - note_time) * speed).max(0.0)
    }

    pub fn is_falling(&self) -> bool {
        matches!(self.state, BlockState::Falling)
    }

    pub fn is_hit(&self) -> bool {
        matches!(self.state, BlockState::Hit { .. })
    }

    pub fn is_missed(&self) -> bool {
        matches!(self.state, BlockState::Missed { .. })
    }

    /// Progress of the hit pulse animation in 0..1, or None once it has
    /// played out (the block then stays rendered without animating).
    pub fn hit_pulse_phase(&self, elapsed: f32) -> Option<f32> {
        match self.state {
            BlockState::Hit { since } => {
                let phase = (elapsed - since) / config::HIT_PULSE_SECONDS;
                (0.0..1.0).contains(&phase).then_some(phase)
            }
            _ => None,
        }
    }

    /// Remaining opacity of the missed fade in 0..1.
    pub fn miss_fade(&self, elapsed: f32) -> Option<f32> {
        match self.state {
            BlockState::Missed { since } => {
                Some((1.0 - (elapsed - since) / config::MISS_GRACE_SECONDS).clamp(0.0, 1.0))
            }
            _ => None,
        }
    }
}

/// Ephemeral physics body for one half of a sliced block. Unlike blocks,
/// fragments integrate velocity; they exist only for the slice animation.
#[derive(Debug, Clone)]
pub struct Fragment {
    pub rect: Rect,
    pub velocity: Vector2<f32>,
    pub color: [f32; 4],
    pub life: f32,
}
