//! Core engine for a MIDI-driven falling-block rhythm game.
//!
//! Notes parsed from a MIDI chart fall toward a hit line across lanes; the
//! player matches timing with lane keys or by slicing blocks with tracked
//! fingertips. This crate owns the timeline clock, the spawn engine, the
//! block lifecycle and both judgement paths. Rendering, audio output,
//! windowing and hand tracking are external collaborators: they feed lane
//! presses and fingertip positions in, and read the block/fragment sets out.

pub mod config;
pub mod game;
pub mod utils;
