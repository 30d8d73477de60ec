//! Clip playback system

pub mod job;
pub mod player;
pub mod rodio_player;
pub mod schedule;

pub use job::{PlaybackEvent, PlaybackJob};
pub use player::{perform, Outcome, Player};
pub use rodio_player::RodioPlayer;
pub use schedule::{Cue, Schedule, Timing};
