use crate::config;
use crate::game::block::{Block, BlockState, Fragment};
use crate::game::clock::{self, SongClock};
use crate::game::field::{Difficulty, LaneLayout};
use crate::game::judgment::{self, Scoring};
use crate::game::slice::{self, HandTracker, SliceEvent};
use crate::game::song::SongData;
use crate::game::timeline::Timeline;
use crate::utils::math::segment_intersects_rect;
use cgmath::Vector2;
use log::{debug, info};
use std::time::Instant;

/// One gameplay session. Everything the renderer needs is readable here;
/// everything time-dependent derives from `clock` through `elapsed`, which
/// is refreshed once at the top of each `update`.
pub struct State {
    pub song_name: String,
    pub song_length: f32,
    pub timeline: Timeline,
    pub clock: SongClock,
    pub layout: LaneLayout,
    pub difficulty: Difficulty,

    pub blocks: Vec<Block>,
    pub fragments: Vec<Fragment>,
    pub scoring: Scoring,
    pub hands: HandTracker,

    pub block_color: [f32; 4],
    /// Ticks remaining on the transient miss feedback flash.
    pub error_flash: u32,
    /// Elapsed song seconds as of the current tick.
    pub elapsed: f32,

    pub music_start_at: Instant,
    pub music_started: bool,
    /// Elapsed time at which the last note cleared the field.
    pub finished_at: Option<f32>,

    log_timer: f32,
}

pub fn init(
    song: SongData,
    difficulty: Difficulty,
    layout: LaneLayout,
    block_color: [f32; 4],
    now: Instant,
) -> State {
    let clock = SongClock::start(now);
    let lead_time =
        clock::lead_time_seconds(layout.hit_line_y, difficulty.block_height, difficulty.speed);
    info!(
        "Starting session for '{}': {} notes, lead time {:.2}s, speed {:.0} px/s",
        song.name,
        song.timeline.len(),
        lead_time,
        difficulty.speed
    );

    State {
        song_name: song.name,
        song_length: song.length_seconds,
        timeline: song.timeline,
        music_start_at: clock.music_start_at(lead_time),
        clock,
        layout,
        difficulty,
        blocks: Vec::new(),
        fragments: Vec::new(),
        scoring: Scoring::new(),
        hands: HandTracker::new(),
        block_color,
        error_flash: 0,
        elapsed: 0.0,
        music_started: false,
        finished_at: None,
        log_timer: 0.0,
    }
}

/// Advances the session by one tick and returns how many blocks newly
/// transitioned to `Missed`. The caller owns the reaction to passive misses
/// (streak reset and error flash), mirroring what it already does for its
/// own input feedback.
///
/// In-tick ordering is load-bearing: spawn, then reposition, then the miss
/// sweep, then fragment physics. Judgement entry points called after this
/// read the current tick's positions.
pub fn update(state: &mut State, now: Instant, delta_time: f32) -> u32 {
    if state.clock.is_paused() {
        return 0;
    }

    let elapsed = state.clock.elapsed(now);
    state.elapsed = elapsed;

    spawn_due_notes(state, elapsed);
    reposition_blocks(state, elapsed);
    let newly_missed = sweep_misses(state, elapsed);
    tick_fragments(state, delta_time);

    if state.error_flash > 0 {
        state.error_flash -= 1;
    }

    // Hit blocks stay rendered until externally cleared, so only falling and
    // missed blocks keep the session alive.
    if state.finished_at.is_none()
        && state.timeline.all_spawned()
        && state.blocks.iter().all(|b| b.is_hit())
        && state.fragments.is_empty()
    {
        state.finished_at = Some(elapsed);
        info!(
            "Song '{}' cleared at {:.2}s with score {}",
            state.song_name, elapsed, state.scoring.score
        );
    }

    state.log_timer += delta_time;
    if state.log_timer >= 1.0 {
        debug!(
            "t={:.2}s blocks={} fragments={} score={} streak={}",
            elapsed,
            state.blocks.len(),
            state.fragments.len(),
            state.scoring.score,
            state.scoring.streak
        );
        state.log_timer -= 1.0;
    }

    newly_missed
}

/// Emits blocks for every due, not-yet-spawned note. A note whose lane is
/// blocked stays unspawned and is retried next tick; it is never dropped.
/// Notes are time-ordered, so the scan stops at the first note still in the
/// future.
fn spawn_due_notes(state: &mut State, elapsed: f32) {
    let State {
        timeline,
        blocks,
        fragments,
        layout,
        difficulty,
        block_color,
        ..
    } = state;
    let clearance = difficulty.block_height * config::SPAWN_CLEARANCE_FACTOR;

    for note in timeline.notes_mut() {
        if note.time > elapsed {
            break;
        }
        if note.is_spawned() {
            continue;
        }

        let lane = note.lane(difficulty.lane_count);
        let y = Block::fall_y(note.time, elapsed, difficulty.speed);
        if !lane_is_clear(blocks, fragments, layout, lane, y, clearance) {
            continue;
        }

        blocks.push(Block {
            lane,
            rect: layout.block_rect(lane, y, difficulty.block_height),
            color: *block_color,
            state: BlockState::Falling,
            note_time: note.time,
        });
        note.mark_spawned();
    }
}

/// Admission check: no falling or missed block, and no in-flight fragment,
/// in the lane may sit within `clearance` of the provisional y. Hit blocks
/// are spent targets and do not blockade; otherwise a note scheduled close
/// behind a hit note in the same lane could never spawn, since both fall at
/// the same speed and their gap never widens.
fn lane_is_clear(
    blocks: &[Block],
    fragments: &[Fragment],
    layout: &LaneLayout,
    lane: usize,
    y: f32,
    clearance: f32,
) -> bool {
    if blocks
        .iter()
        .any(|b| b.lane == lane && !b.is_hit() && (b.rect.y - y).abs() < clearance)
    {
        return false;
    }
    !fragments.iter().any(|f| {
        layout.lane_for_x(f.rect.center_x()) == Some(lane) && (f.rect.y - y).abs() < clearance
    })
}

/// Recomputes y for falling and hit blocks from elapsed time. Missed blocks
/// stay where they were judged and only fade.
fn reposition_blocks(state: &mut State, elapsed: f32) {
    let speed = state.difficulty.speed;
    for block in &mut state.blocks {
        match block.state {
            BlockState::Falling | BlockState::Hit { .. } => {
                block.rect.y = Block::fall_y(block.note_time, elapsed, speed);
            }
            BlockState::Missed { .. } => {}
        }
    }
}

/// Transitions overdue falling blocks to `Missed` and drops missed blocks
/// whose grace period has elapsed. Builds a new collection and swaps it in;
/// in-place removal while iterating is deliberately off the table.
fn sweep_misses(state: &mut State, elapsed: f32) -> u32 {
    let miss_line = state.layout.miss_line_y(state.difficulty.block_height);
    let mut kept = Vec::with_capacity(state.blocks.len());
    let mut newly_missed = 0u32;

    for mut block in state.blocks.drain(..) {
        match block.state {
            BlockState::Falling if block.rect.top() > miss_line => {
                block.state = BlockState::Missed { since: elapsed };
                newly_missed += 1;
                kept.push(block);
            }
            BlockState::Missed { since } => {
                if elapsed - since <= config::MISS_GRACE_SECONDS {
                    kept.push(block);
                }
            }
            _ => kept.push(block),
        }
    }
    state.blocks = kept;

    if newly_missed > 0 {
        debug!("{} block(s) crossed the miss line", newly_missed);
    }
    newly_missed
}

/// Fragments are the one thing here that integrates velocity; they are
/// animation-only and never rewound, so clock purity does not apply.
fn tick_fragments(state: &mut State, delta_time: f32) {
    if state.fragments.is_empty() {
        return;
    }
    let floor = state.layout.screen_h + config::FRAGMENT_OFFSCREEN_MARGIN;
    let mut kept = Vec::with_capacity(state.fragments.len());

    for mut fragment in state.fragments.drain(..) {
        fragment.velocity.y += config::FRAGMENT_GRAVITY * delta_time;
        fragment.rect.x += fragment.velocity.x * delta_time;
        fragment.rect.y += fragment.velocity.y * delta_time;
        fragment.life -= delta_time;
        if fragment.life > 0.0 && fragment.rect.y <= floor {
            kept.push(fragment);
        }
    }
    state.fragments = kept;
}

/// Keyboard judgement for one lane press. Returns whether a block was hit.
/// Key-press misses are penalized here; passive misses only report through
/// `update`'s return value and carry no score penalty.
pub fn handle_lane_press(state: &mut State, lane: usize) -> bool {
    if state.clock.is_paused() {
        return false;
    }

    let candidate = judgment::find_candidate(
        &state.blocks,
        lane,
        state.layout.hit_line_y,
        state.difficulty.hit_window(),
    );
    match candidate {
        Some(index) => {
            let elapsed = state.elapsed;
            let block = &mut state.blocks[index];
            block.state = BlockState::Hit { since: elapsed };
            block.color = config::HIT_FEEDBACK_COLOR;
            let points = state
                .scoring
                .register_hit(config::KEYBOARD_MULTIPLIER_TIERS);
            debug!(
                "Lane {} hit for {} points (streak {}, x{})",
                lane, points, state.scoring.streak, state.scoring.multiplier
            );
            true
        }
        None => {
            state.scoring.register_miss();
            state.error_flash = config::ERROR_FLASH_TICKS;
            debug!("Lane {} pressed with no block in window", lane);
            false
        }
    }
}

/// Gesture judgement for one frame of fingertip positions. Each qualifying
/// motion segment slices at most one falling block: the block is replaced by
/// two fragments and scored with the gesture tier table. Slicing ignores the
/// hit line entirely.
pub fn handle_hand_positions(
    state: &mut State,
    positions: &[Vector2<f32>],
) -> Vec<SliceEvent> {
    if state.clock.is_paused() {
        return Vec::new();
    }

    let match_radius = state.layout.screen_w * config::HAND_MATCH_RADIUS_RATIO;
    let segments = state.hands.advance(positions, match_radius);
    let mut events = Vec::new();

    for segment in segments {
        let Some(index) = state.blocks.iter().position(|b| {
            b.is_falling() && segment_intersects_rect(segment.from, segment.to, &b.rect)
        }) else {
            continue;
        };

        let block = state.blocks.remove(index);
        let [left, right] = slice::split_block(&block.rect, block.color, segment.direction());
        state.fragments.push(left);
        state.fragments.push(right);

        let points = state.scoring.register_hit(config::GESTURE_MULTIPLIER_TIERS);
        debug!(
            "Sliced block in lane {} for {} points (streak {})",
            block.lane, points, state.scoring.streak
        );
        events.push(SliceEvent {
            lane: block.lane,
            points,
        });
    }
    events
}

pub fn set_paused(state: &mut State, paused: bool, now: Instant) {
    if paused {
        state.clock.pause(now);
    } else {
        state.clock.resume(now);
    }
}

/// True exactly once, at the instant scheduled audio playback becomes due.
pub fn take_music_start(state: &mut State, now: Instant) -> bool {
    if !state.music_started && now >= state.music_start_at {
        state.music_started = true;
        return true;
    }
    false
}

/// Restarts the session from scratch: blocks, fragments, spawn flags and
/// scoring all reset together, and music is rescheduled. Partial resets are
/// not a thing.
pub fn reset_for_replay(state: &mut State, now: Instant) {
    state.timeline.reset();
    state.blocks.clear();
    state.fragments.clear();
    state.hands.clear();
    state.scoring = Scoring::new();
    state.error_flash = 0;
    state.elapsed = 0.0;
    state.finished_at = None;

    state.clock = SongClock::start(now);
    let lead_time = clock::lead_time_seconds(
        state.layout.hit_line_y,
        state.difficulty.block_height,
        state.difficulty.speed,
    );
    state.music_start_at = state.clock.music_start_at(lead_time);
    state.music_started = false;
    info!("Session for '{}' restarted", state.song_name);
}

/// Read-only view for the render layer.
pub fn visible_blocks(state: &State) -> &[Block] {
    &state.blocks
}

pub fn visible_fragments(state: &State) -> &[Fragment] {
    &state.fragments
}

/// Whether the post-song results delay has run out.
pub fn results_due(state: &State) -> bool {
    state
        .finished_at
        .is_some_and(|at| state.elapsed - at >= config::RESULTS_DELAY_SECONDS)
}
