use crate::config;
use crate::game::block::Fragment;
use crate::utils::math::Rect;
use cgmath::{InnerSpace, Vector2};

/// One frame of fingertip motion that qualified as a slice.
#[derive(Debug, Clone, Copy)]
pub struct SliceSegment {
    pub from: Vector2<f32>,
    pub to: Vector2<f32>,
}

impl SliceSegment {
    pub fn direction(&self) -> Vector2<f32> {
        self.to - self.from
    }
}

/// A committed slice, reported back to the caller for HUD/audio feedback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceEvent {
    pub lane: usize,
    pub points: i64,
}

/// Pairs each frame's fingertip positions with the previous frame's to form
/// motion segments. Hands are matched by index when the detector keeps its
/// ordering, otherwise by nearest neighbour within a bounded radius.
#[derive(Debug, Default)]
pub struct HandTracker {
    prev: Vec<Vector2<f32>>,
}

impl HandTracker {
    pub fn new() -> Self {
        HandTracker::default()
    }

    pub fn clear(&mut self) {
        self.prev.clear();
    }

    /// Consumes this frame's positions and returns the segments whose motion
    /// exceeds the jitter threshold. An empty `positions` slice (tracking
    /// stalled or no hands in frame) simply clears the history.
    pub fn advance(
        &mut self,
        positions: &[Vector2<f32>],
        match_radius: f32,
    ) -> Vec<SliceSegment> {
        let prev = std::mem::replace(&mut self.prev, positions.to_vec());
        let mut segments = Vec::new();

        for (idx, &curr) in positions.iter().enumerate() {
            let from = match prev.get(idx) {
                Some(&p) => Some(p),
                None => nearest_within(&prev, curr, match_radius),
            };
            let Some(from) = from else {
                continue;
            };
            let motion = curr - from;
            if motion.magnitude2() >= config::MIN_SLICE_DISTANCE * config::MIN_SLICE_DISTANCE {
                segments.push(SliceSegment { from, to: curr });
            }
        }
        segments
    }
}

fn nearest_within(
    candidates: &[Vector2<f32>],
    target: Vector2<f32>,
    radius: f32,
) -> Option<Vector2<f32>> {
    candidates
        .iter()
        .map(|&p| (p, (p - target).magnitude2()))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .filter(|&(_, d2)| d2 < radius * radius)
        .map(|(p, _)| p)
}

/// Splits a sliced block into left/right halves whose combined area equals
/// the block's. Kick velocity pushes the halves apart and upward, skewed by
/// the vertical sense of the slice; gravity takes over in the fragment tick.
pub fn split_block(rect: &Rect, color: [f32; 4], direction: Vector2<f32>) -> [Fragment; 2] {
    let vertical_sign = if direction.y.abs() > f32::EPSILON {
        direction.y.signum()
    } else {
        0.0
    };
    let half_w = rect.w * 0.5;

    let left = Fragment {
        rect: Rect::new(rect.x, rect.y, half_w, rect.h),
        velocity: Vector2::new(
            -config::FRAGMENT_KICK_X - config::FRAGMENT_KICK_X_BIAS * vertical_sign,
            config::FRAGMENT_KICK_Y,
        ),
        color,
        life: config::FRAGMENT_LIFE_SECONDS,
    };
    let right = Fragment {
        rect: Rect::new(rect.x + half_w, rect.y, rect.w - half_w, rect.h),
        velocity: Vector2::new(
            config::FRAGMENT_KICK_X + config::FRAGMENT_KICK_X_BIAS * vertical_sign,
            config::FRAGMENT_KICK_Y,
        ),
        color,
        life: config::FRAGMENT_LIFE_SECONDS,
    };
    [left, right]
}
