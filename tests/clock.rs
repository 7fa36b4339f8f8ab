use midihero::game::clock::{lead_time_seconds, SongClock};
use std::time::{Duration, Instant};

fn at(start: Instant, secs: f32) -> Instant {
    start + Duration::from_secs_f32(secs)
}

#[test]
fn elapsed_tracks_wall_clock_while_running() {
    let start = Instant::now();
    let clock = SongClock::start(start);
    assert!((clock.elapsed(at(start, 1.5)) - 1.5).abs() < 1e-4);
}

#[test]
fn pausing_freezes_elapsed_and_resuming_restores_it() {
    let start = Instant::now();
    let mut clock = SongClock::start(start);

    clock.pause(at(start, 1.0));
    assert!(clock.is_paused());
    assert!((clock.elapsed(at(start, 5.0)) - 1.0).abs() < 1e-4);

    clock.resume(at(start, 5.0));
    assert!(!clock.is_paused());
    assert!((clock.elapsed(at(start, 6.0)) - 2.0).abs() < 1e-4);
}

#[test]
fn pause_then_immediate_resume_is_idempotent() {
    let start = Instant::now();
    let mut clock = SongClock::start(start);
    let t = at(start, 2.0);

    let before = clock.elapsed(t);
    clock.pause(t);
    clock.resume(t);
    let after = clock.elapsed(t);
    assert!((before - after).abs() < 1e-5);
}

#[test]
fn double_pause_and_double_resume_are_noops() {
    let start = Instant::now();
    let mut clock = SongClock::start(start);

    clock.pause(at(start, 1.0));
    clock.pause(at(start, 3.0));
    assert!((clock.elapsed(at(start, 10.0)) - 1.0).abs() < 1e-4);

    clock.resume(at(start, 10.0));
    clock.resume(at(start, 12.0));
    assert!((clock.elapsed(at(start, 11.0)) - 2.0).abs() < 1e-4);
}

#[test]
fn elapsed_never_goes_negative() {
    let start = Instant::now() + Duration::from_secs(100);
    let clock = SongClock::start(start);
    assert_eq!(clock.elapsed(Instant::now()), 0.0);
}

#[test]
fn lead_time_matches_hit_line_travel() {
    // Block center (half height below the top) crosses y=800 at 2.5s at 300 px/s.
    let lead = lead_time_seconds(800.0, 100.0, 300.0);
    assert!((lead - 2.5).abs() < 1e-5);
}

#[test]
fn negative_lead_time_clamps_to_immediate_playback() {
    let start = Instant::now();
    let clock = SongClock::start(start);
    assert_eq!(lead_time_seconds(40.0, 100.0, 300.0), 0.0);
    assert_eq!(clock.music_start_at(-1.0), start);
}

#[test]
fn music_start_is_offset_by_lead_time() {
    let start = Instant::now();
    let clock = SongClock::start(start);
    let lead = lead_time_seconds(800.0, 100.0, 300.0);
    assert_eq!(clock.music_start_at(lead), start + Duration::from_secs_f32(2.5));
}
