// Playfield Layout
pub const LANE_COUNT: usize = 4;
pub const LANE_SPACING: f32 = 20.0;
pub const LANE_WIDTH_RATIO: f32 = 0.12; // lane width as a fraction of screen width
pub const HIT_LINE_RATIO: f32 = 0.8; // hit line y as a fraction of screen height
pub const BLOCK_INSET: f32 = 10.0; // horizontal gap between a block and its lane edges

// Block Movement
pub const PIXELS_PER_SECOND: f32 = 300.0;
pub const SPAWN_CLEARANCE_FACTOR: f32 = 1.5; // admission check radius, in block heights
pub const MISS_DISTANCE_FACTOR: f32 = 1.5; // how far past the hit line a block may fall, in block heights

// Difficulty (level -> block height / hit window)
pub const BLOCK_HEIGHT_EASY: f32 = 100.0;
pub const BLOCK_HEIGHT_MEDIUM: f32 = 75.0;
pub const BLOCK_HEIGHT_HARD: f32 = 50.0;

// Block Lifecycle
pub const MISS_GRACE_SECONDS: f32 = 1.0; // fade-and-hold before a missed block is dropped
pub const HIT_PULSE_SECONDS: f32 = 0.3;

// Scoring
pub const BASE_HIT_POINTS: i64 = 100;
pub const MISS_PENALTY: i64 = 20;
pub const ERROR_FLASH_TICKS: u32 = 15; // ~250ms at 60Hz
// (streak threshold, multiplier) pairs, ascending
pub const KEYBOARD_MULTIPLIER_TIERS: &[(u32, u32)] = &[(25, 2), (100, 3), (250, 5)];
pub const GESTURE_MULTIPLIER_TIERS: &[(u32, u32)] = &[(25, 2), (50, 3)];

// Gesture Slicing
pub const MIN_SLICE_DISTANCE: f32 = 20.0; // pixels of motion before a segment counts as a slice
pub const HAND_MATCH_RADIUS_RATIO: f32 = 0.25; // nearest-neighbour search radius, fraction of screen width

// Fragment Physics
pub const FRAGMENT_GRAVITY: f32 = 800.0;
pub const FRAGMENT_LIFE_SECONDS: f32 = 1.2;
pub const FRAGMENT_KICK_X: f32 = 200.0;
pub const FRAGMENT_KICK_X_BIAS: f32 = 50.0;
pub const FRAGMENT_KICK_Y: f32 = -200.0;
pub const FRAGMENT_OFFSCREEN_MARGIN: f32 = 200.0;

// Block Color Presets
pub const BLOCK_COLORS: [[f32; 4]; 5] = [
    [0.0, 200.0 / 255.0, 200.0 / 255.0, 1.0], // Cyan
    [1.0, 50.0 / 255.0, 50.0 / 255.0, 1.0],   // Red
    [50.0 / 255.0, 1.0, 50.0 / 255.0, 1.0],   // Green
    [200.0 / 255.0, 0.0, 200.0 / 255.0, 1.0], // Purple
    [1.0, 165.0 / 255.0, 0.0, 1.0],           // Orange
];
pub const HIT_FEEDBACK_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];

// End Of Song
pub const RESULTS_DELAY_SECONDS: f32 = 5.0;

// Persistence
pub const SONGS_DIR: &str = "songs";
pub const SCOREBOARD_PATH: &str = "save/scores.json";
pub const SCOREBOARD_MAX_ENTRIES: usize = 50;

// Misc
pub const TICK_RATE_HZ: f32 = 60.0;

/// Maps the 1..=3 difficulty setting to the block height used for both
/// travel size and the keyboard hit window.
pub fn block_height_for_level(level: u8) -> f32 {
    match level {
        3 => BLOCK_HEIGHT_HARD,
        2 => BLOCK_HEIGHT_MEDIUM,
        _ => BLOCK_HEIGHT_EASY,
    }
}
