use crate::config;
use crate::game::block::Block;

/// Multiplier for a streak under the given `(threshold, multiplier)` tiers.
/// Tiers are data, not behavior: keyboard and gesture paths pass different
/// tables from `config`.
pub fn multiplier_for_streak(streak: u32, tiers: &[(u32, u32)]) -> u32 {
    let mut multiplier = 1;
    for &(threshold, tier_multiplier) in tiers {
        if streak >= threshold {
            multiplier = tier_multiplier;
        }
    }
    multiplier
}

/// Index of the best falling block in `lane`: nearest to the hit line among
/// those strictly inside the hit window. Nearest wins over first-in-list
/// because a block still in its miss grace can coexist with a fresh one.
pub fn find_candidate(
    blocks: &[Block],
    lane: usize,
    hit_line_y: f32,
    hit_window: f32,
) -> Option<usize> {
    blocks
        .iter()
        .enumerate()
        .filter(|(_, b)| b.lane == lane && b.is_falling())
        .map(|(i, b)| (i, (b.rect.y - hit_line_y).abs()))
        .filter(|&(_, distance)| distance < hit_window)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

/// Score, streak and multiplier state shared by both judgement paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoring {
    pub score: i64,
    pub streak: u32,
    pub multiplier: u32,
}

impl Scoring {
    pub fn new() -> Self {
        Scoring {
            score: 0,
            streak: 0,
            multiplier: 1,
        }
    }

    /// Awards a hit at the current multiplier, then advances the streak and
    /// re-resolves the multiplier against `tiers`. Returns the points given.
    pub fn register_hit(&mut self, tiers: &[(u32, u32)]) -> i64 {
        let points = config::BASE_HIT_POINTS * self.multiplier as i64;
        self.score += points;
        self.streak += 1;
        self.multiplier = multiplier_for_streak(self.streak, tiers);
        points
    }

    /// An out-of-window key press: streak and multiplier reset plus a fixed
    /// score penalty. The score may go negative.
    pub fn register_miss(&mut self) {
        self.streak = 0;
        self.multiplier = 1;
        self.score -= config::MISS_PENALTY;
    }

    /// A passively missed block breaks the streak without a score penalty.
    pub fn break_streak(&mut self) {
        self.streak = 0;
        self.multiplier = 1;
    }
}

impl Default for Scoring {
    fn default() -> Self {
        Scoring::new()
    }
}
