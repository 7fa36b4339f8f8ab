use crate::config;
use crate::utils::math::Rect;

/// Difficulty-controlled travel/target sizing. The block height doubles as
/// the keyboard hit window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    pub block_height: f32,
    /// Fall speed in pixels per second.
    pub speed: f32,
    pub lane_count: usize,
}

impl Difficulty {
    pub fn from_level(level: u8) -> Self {
        Difficulty {
            block_height: config::block_height_for_level(level),
            speed: config::PIXELS_PER_SECOND,
            lane_count: config::LANE_COUNT,
        }
    }

    #[inline(always)]
    pub fn hit_window(&self) -> f32 {
        self.block_height
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::from_level(1)
    }
}

/// Horizontal lane geometry and the hit line, centered on the screen.
#[derive(Debug, Clone, Copy)]
pub struct LaneLayout {
    pub screen_w: f32,
    pub screen_h: f32,
    pub lane_count: usize,
    pub lane_width: f32,
    pub spacing: f32,
    pub left: f32,
    pub hit_line_y: f32,
}

impl LaneLayout {
    pub fn new(screen_w: f32, screen_h: f32, lane_count: usize) -> Self {
        let lane_width = (screen_w * config::LANE_WIDTH_RATIO).floor();
        let spacing = config::LANE_SPACING;
        let area_width = lane_width * lane_count as f32 + spacing * (lane_count as f32 - 1.0);
        LaneLayout {
            screen_w,
            screen_h,
            lane_count,
            lane_width,
            spacing,
            left: ((screen_w - area_width) * 0.5).floor(),
            hit_line_y: (screen_h * config::HIT_LINE_RATIO).floor(),
        }
    }

    pub fn lane_x(&self, lane: usize) -> f32 {
        self.left + lane as f32 * (self.lane_width + self.spacing)
    }

    /// Reverse lookup from an x coordinate (typically a rect center) to the
    /// lane it falls in, if any.
    pub fn lane_for_x(&self, x: f32) -> Option<usize> {
        let stride = self.lane_width + self.spacing;
        let offset = x - self.left;
        if offset < 0.0 || stride <= 0.0 {
            return None;
        }
        let lane = (offset / stride).floor() as usize;
        if lane < self.lane_count && offset - lane as f32 * stride <= self.lane_width {
            Some(lane)
        } else {
            None
        }
    }

    /// Block rectangle for a lane at vertical position `y`, inset from the
    /// lane edges.
    pub fn block_rect(&self, lane: usize, y: f32, height: f32) -> Rect {
        Rect::new(
            self.lane_x(lane) + config::BLOCK_INSET,
            y,
            self.lane_width - 2.0 * config::BLOCK_INSET,
            height,
        )
    }

    /// The y past which a falling block of `block_height` counts as missed.
    pub fn miss_line_y(&self, block_height: f32) -> f32 {
        self.hit_line_y + config::MISS_DISTANCE_FACTOR * block_height
    }
}
