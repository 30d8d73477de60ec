//! Background playback
//!
//! Runs a schedule on its own thread so the window keeps repainting while
//! clips play. Events come back over a channel and are drained by the UI.

use super::player::{perform, Outcome, Player};
use super::schedule::Schedule;
use crate::Result;
use log::{debug, error};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Progress reports from a playback thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// (cues done, total cues)
    Progress(usize, usize),
    Finished(Outcome),
    Failed(String),
}

/// Handle to a running playback thread
pub struct PlaybackJob {
    cancel: Arc<AtomicBool>,
    events: Receiver<PlaybackEvent>,
    handle: Option<JoinHandle<()>>,
}

impl PlaybackJob {
    /// Start playing `schedule` on a new thread
    ///
    /// `make_player` runs on the playback thread, which is where audio
    /// devices have to be opened.
    pub fn spawn<F>(schedule: Schedule, make_player: F) -> Self
    where
        F: FnOnce() -> Result<Box<dyn Player>> + Send + 'static,
    {
        let cancel = Arc::new(AtomicBool::new(false));
        let (tx, events) = mpsc::channel();
        let flag = Arc::clone(&cancel);

        let handle = thread::spawn(move || {
            let result = make_player().and_then(|mut player| {
                perform(&schedule, player.as_mut(), &flag, |done, total| {
                    let _ = tx.send(PlaybackEvent::Progress(done, total));
                })
            });
            let event = match result {
                Ok(outcome) => PlaybackEvent::Finished(outcome),
                Err(e) => {
                    error!("Playback failed: {}", e);
                    PlaybackEvent::Failed(e.to_string())
                }
            };
            // The receiver may already be gone if the job was dropped
            let _ = tx.send(event);
        });

        Self {
            cancel,
            events,
            handle: Some(handle),
        }
    }

    /// Ask the thread to stop before its next cue
    pub fn cancel(&self) {
        debug!("Cancelling playback");
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Events received since the last poll
    pub fn poll(&self) -> Vec<PlaybackEvent> {
        let mut events = Vec::new();
        loop {
            match self.events.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        events
    }

    /// Whether the playback thread has exited
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    /// Block until the thread exits and return the remaining events
    pub fn wait(mut self) -> Vec<PlaybackEvent> {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!("Playback thread panicked");
            }
        }
        self.poll()
    }
}

impl Drop for PlaybackJob {
    fn drop(&mut self) {
        self.cancel();
    }
}
