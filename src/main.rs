use log::{info, warn, LevelFilter};
use std::error::Error;
use std::path::Path;
use std::time::{Duration, Instant};

use midihero::config;
use midihero::game::field::{Difficulty, LaneLayout};
use midihero::game::{gameplay, profile, scores, song};

// Reference playfield for the headless run; a renderer would pass its own.
const SCREEN_W: f32 = 1280.0;
const SCREEN_H: f32 = 1024.0;

/// Headless session driver: loads the first discovered song, autoplays it at
/// a fixed 60 Hz tick and commits the result to the scoreboard. Useful for
/// sync checks and chart validation without a window.
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Info)
        .filter_module("midihero::game::gameplay", LevelFilter::Debug)
        .init();

    profile::load();
    let settings = profile::get();

    let songs_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::SONGS_DIR.to_string());
    let songs = song::find_songs(Path::new(&songs_dir));
    let Some(first) = songs.first() else {
        warn!("No songs found in '{}/'. Nothing to play.", songs_dir);
        return Ok(());
    };
    let data = song::load_song(first);
    if data.timeline.is_empty() {
        warn!("Song '{}' has no notes; exiting.", data.name);
        return Ok(());
    }

    let difficulty = Difficulty::from_level(settings.difficulty_level);
    let layout = LaneLayout::new(SCREEN_W, SCREEN_H, difficulty.lane_count);
    let color = config::BLOCK_COLORS[settings.color_index % config::BLOCK_COLORS.len()];
    let mut state = gameplay::init(data, difficulty, layout, color, Instant::now());

    let tick = Duration::from_secs_f32(1.0 / config::TICK_RATE_HZ);
    loop {
        let now = Instant::now();
        if gameplay::take_music_start(&mut state, now) {
            info!("Audio onset due (lead time elapsed)");
        }

        let missed = gameplay::update(&mut state, now, tick.as_secs_f32());
        if missed > 0 {
            state.scoring.break_streak();
            state.error_flash = config::ERROR_FLASH_TICKS;
        }

        // Autoplay: press a lane the moment its block reaches the hit line.
        // Judgement runs after update so it sees this tick's positions.
        for lane in 0..state.difficulty.lane_count {
            let due = state.blocks.iter().any(|b| {
                b.lane == lane && b.is_falling() && b.rect.y >= state.layout.hit_line_y
            });
            if due {
                gameplay::handle_lane_press(&mut state, lane);
            }
        }

        if gameplay::results_due(&state) {
            break;
        }
        std::thread::sleep(tick);
    }

    let entries = scores::record_score(
        Path::new(config::SCOREBOARD_PATH),
        &state.song_name,
        &settings.player_name,
        state.scoring.score,
        settings.difficulty_level,
    )?;
    info!(
        "Run complete: {} points, best on record {}",
        state.scoring.score,
        entries.first().map_or(0, |e| e.score)
    );
    Ok(())
}
