//! Playback tests
//!
//! Uses a recording player in place of the sound card so the order of
//! clips and silences can be checked without audio hardware

use pets::playback::{perform, Cue, Outcome, PlaybackEvent, PlaybackJob, Player, Schedule};
use pets::state::config::Config;
use pets::state::Session;
use pets::dictionary::Dictionary;
use pets::phoneme::Phoneme;
use pets::Result;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Played {
    Clip(String),
    Silence(Duration),
    Stop,
}

/// Player that writes down what it was asked to do
#[derive(Clone, Default)]
struct RecordingPlayer {
    log: Arc<Mutex<Vec<Played>>>,

    /// Raised after the given number of clips
    cancel_after: Option<(usize, Arc<AtomicBool>)>,
}

impl RecordingPlayer {
    fn played(&self) -> Vec<Played> {
        self.log.lock().unwrap().clone()
    }
}

impl Player for RecordingPlayer {
    fn play_clip(&mut self, path: &Path) -> Result<()> {
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        let mut log = self.log.lock().unwrap();
        log.push(Played::Clip(name));
        if let Some((limit, flag)) = &self.cancel_after {
            let clips = log.iter().filter(|p| matches!(p, Played::Clip(_))).count();
            if clips >= *limit {
                flag.store(true, Ordering::Relaxed);
            }
        }
        Ok(())
    }

    fn silence(&mut self, duration: Duration) -> Result<()> {
        self.log.lock().unwrap().push(Played::Silence(duration));
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.log.lock().unwrap().push(Played::Stop);
        Ok(())
    }
}

/// Voice directory with clips for a handful of phonemes
fn voice_dir(names: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in names {
        File::create(dir.path().join(name)).unwrap();
    }
    dir
}

fn session(config_dir: &Path) -> Session {
    let mut dictionary = Dictionary::new();
    dictionary.insert("hi", vec![Phoneme::HH, Phoneme::AY]);
    dictionary.insert("you", vec![Phoneme::Y, Phoneme::UW]);
    let config = Config::load_from(config_dir.join("pets.cfg")).unwrap();
    Session::with_dictionary(config, dictionary)
}

fn clip(name: &str) -> Played {
    Played::Clip(name.to_string())
}

#[test]
fn test_plays_in_reading_order() {
    let voice = voice_dir(&["HH.wav", "AY.wav", "Y.mp3", "UW.wav"]);
    let config_dir = tempfile::tempdir().unwrap();
    let session = session(config_dir.path());

    let prepared = session
        .prepare("Hi, you.", &voice.path().to_string_lossy())
        .unwrap();
    assert!(prepared.schedule.missing.is_empty());

    let mut player = RecordingPlayer::default();
    let cancel = AtomicBool::new(false);
    let mut progress = Vec::new();
    let outcome = perform(&prepared.schedule, &mut player, &cancel, |done, total| {
        progress.push((done, total))
    })
    .unwrap();

    assert_eq!(outcome, Outcome::Completed { played: 6 });
    assert_eq!(
        player.played(),
        vec![
            clip("HH.wav"),
            clip("AY.wav"),
            Played::Silence(Duration::from_millis(500)),
            clip("Y.mp3"),
            clip("UW.wav"),
            Played::Silence(Duration::from_millis(500)),
        ]
    );
    assert_eq!(progress.last(), Some(&(6, 6)));
}

#[test]
fn test_missing_clips_are_skipped() {
    let voice = voice_dir(&["HH.wav"]);
    let config_dir = tempfile::tempdir().unwrap();
    let session = session(config_dir.path());

    let prepared = session
        .prepare("hi", &voice.path().to_string_lossy())
        .unwrap();
    assert_eq!(prepared.schedule.missing, vec![Phoneme::AY]);
    assert_eq!(prepared.schedule.len(), 1);
}

#[test]
fn test_cancel_stops_between_cues() {
    let voice = voice_dir(&["HH.wav", "AY.wav", "Y.wav", "UW.wav"]);
    let config_dir = tempfile::tempdir().unwrap();
    let prepared = session(config_dir.path())
        .prepare("hi you", &voice.path().to_string_lossy())
        .unwrap();

    let cancel = Arc::new(AtomicBool::new(false));
    let mut player = RecordingPlayer {
        cancel_after: Some((2, Arc::clone(&cancel))),
        ..Default::default()
    };

    let outcome = perform(&prepared.schedule, &mut player, &cancel, |_, _| {}).unwrap();
    assert_eq!(outcome, Outcome::Cancelled { played: 2 });
    assert_eq!(
        player.played(),
        vec![clip("HH.wav"), clip("AY.wav"), Played::Stop]
    );
}

#[test]
fn test_background_job_reports_events() {
    let schedule = Schedule {
        cues: vec![
            Cue::Clip {
                phoneme: Phoneme::AA,
                path: PathBuf::from("AA.wav"),
            },
            Cue::Silence(Duration::from_millis(1)),
        ],
        missing: Vec::new(),
    };
    let player = RecordingPlayer::default();
    let recorder = player.clone();

    let job = PlaybackJob::spawn(schedule, move || {
        let player: Box<dyn Player> = Box::new(player);
        Ok(player)
    });
    let events = job.wait();

    assert_eq!(
        events,
        vec![
            PlaybackEvent::Progress(1, 2),
            PlaybackEvent::Progress(2, 2),
            PlaybackEvent::Finished(Outcome::Completed { played: 2 }),
        ]
    );
    assert_eq!(recorder.played().len(), 2);
}

#[test]
fn test_background_job_reports_player_failure() {
    let job = PlaybackJob::spawn(Schedule::default(), || {
        Err(pets::PetsError::Playback("no audio device".to_string()))
    });
    let events = job.wait();

    assert_eq!(
        events,
        vec![PlaybackEvent::Failed(
            "Playback error: no audio device".to_string()
        )]
    );
}
