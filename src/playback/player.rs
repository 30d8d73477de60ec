//! Audio output abstraction
//!
//! The schedule is played one cue at a time through a [`Player`]. Clips
//! are played to the end before the next cue starts.

use super::schedule::{Cue, Schedule};
use crate::Result;
use log::{debug, info};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Audio output used to voice a schedule
pub trait Player {
    /// Play an audio file, returning once it has finished
    fn play_clip(&mut self, path: &Path) -> Result<()>;

    /// Stay silent for a while
    fn silence(&mut self, duration: Duration) -> Result<()>;

    /// Cut off anything still playing
    fn stop(&mut self) -> Result<()>;
}

/// How a playback run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every cue was played
    Completed { played: usize },
    /// The cancel flag was raised; `played` cues were voiced first
    Cancelled { played: usize },
}

/// Play a schedule in order
///
/// `cancel` is checked before every cue. `progress` is called after each
/// cue with (cues done, total cues).
pub fn perform<F>(
    schedule: &Schedule,
    player: &mut dyn Player,
    cancel: &AtomicBool,
    mut progress: F,
) -> Result<Outcome>
where
    F: FnMut(usize, usize),
{
    let total = schedule.len();
    info!("Playing {} cues", total);

    for (idx, cue) in schedule.cues.iter().enumerate() {
        if cancel.load(Ordering::Relaxed) {
            info!("Playback cancelled after {} of {} cues", idx, total);
            player.stop()?;
            return Ok(Outcome::Cancelled { played: idx });
        }

        match cue {
            Cue::Clip { phoneme, path } => {
                debug!("Playing {} from {:?}", phoneme, path);
                player.play_clip(path)?;
            }
            Cue::Silence(duration) => {
                debug!("Pausing {:?}", duration);
                player.silence(*duration)?;
            }
        }
        progress(idx + 1, total);
    }

    Ok(Outcome::Completed { played: total })
}
