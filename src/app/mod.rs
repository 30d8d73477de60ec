//! Desktop window
//!
//! Text box, audio directory picker, convert button and output panel.
//! Playback runs on a [`PlaybackJob`] so the window stays responsive and
//! can stop a long recitation.

mod theme;

use crate::clipboard::copy_to_clipboard;
use crate::playback::{Outcome, PlaybackEvent, PlaybackJob, Player, RodioPlayer};
use crate::state::Session;
use crate::{PetsError, Result};
use eframe::{App, Frame};
use egui::{Button, CentralPanel, Context, RichText, ScrollArea, TextEdit};
use egui_file::FileDialog;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const WINDOW_TITLE: &str = "Pets - Personalized Text-to-Speech";

const COMPLETE: &str = "Text-to-Speech conversion complete!";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Status {
    Info(String),
    Error(String),
}

impl Default for Status {
    fn default() -> Self {
        Status::Info(String::new())
    }
}

pub struct PetsApp {
    session: Session,
    text: String,
    audio_dir: String,
    output: String,
    status: Status,
    dir_dialog: Option<FileDialog>,
    job: Option<PlaybackJob>,
}

impl PetsApp {
    pub fn new(cc: &eframe::CreationContext<'_>, session: Session) -> Self {
        theme::apply(&cc.egui_ctx);
        Self::from_session(session)
    }

    /// App state without a window, restoring the last audio directory
    pub fn from_session(session: Session) -> Self {
        let audio_dir = session
            .config
            .audio_dir()
            .map(|d| d.display().to_string())
            .unwrap_or_default();
        Self {
            session,
            text: String::new(),
            audio_dir,
            output: String::new(),
            status: Status::default(),
            dir_dialog: None,
            job: None,
        }
    }

    fn is_playing(&self) -> bool {
        self.job.is_some()
    }

    fn browse_audio_directory(&mut self) {
        let initial = Some(PathBuf::from(self.audio_dir.trim())).filter(|p| p.is_dir());
        let mut dialog = FileDialog::select_folder(initial).title("Select Audio Directory");
        dialog.open();
        self.dir_dialog = Some(dialog);
    }

    fn show_dir_dialog(&mut self, ctx: &Context) {
        if let Some(dialog) = &mut self.dir_dialog {
            if dialog.show(ctx).selected() {
                if let Some(path) = dialog.path() {
                    self.audio_dir = path.display().to_string();
                }
            }
        }
    }

    /// Convert the text box and start playing it
    fn process_text_to_speech(&mut self) {
        self.stop_playback();

        let prepared = match self.session.prepare(&self.text, &self.audio_dir) {
            Ok(prepared) => prepared,
            Err(e) => {
                self.status = Status::Error(format!("ERROR: {}", e));
                return;
            }
        };

        self.output = prepared.transcript.render();
        self.remember_audio_dir();

        let missing = prepared.schedule.missing.len();
        self.status = Status::Info(if missing > 0 {
            format!("Playing audio... ({} phonemes have no clip)", missing)
        } else {
            "Playing audio...".to_string()
        });

        let volume = self.session.config.volume();
        self.job = Some(PlaybackJob::spawn(prepared.schedule, move || {
            let player: Box<dyn Player> = Box::new(RodioPlayer::new(volume)?);
            Ok(player)
        }));
    }

    fn remember_audio_dir(&mut self) {
        let dir = Path::new(self.audio_dir.trim()).to_path_buf();
        if self.session.config.audio_dir().as_ref() == Some(&dir) {
            return;
        }
        self.session.config.set_audio_dir(&dir);
        if let Err(e) = self.session.config.save() {
            warn!("Could not remember audio directory: {}", e);
        }
    }

    fn stop_playback(&mut self) {
        if let Some(job) = self.job.take() {
            job.cancel();
        }
    }

    /// Drain playback events into the status line
    fn poll_playback(&mut self) {
        let Some(job) = &self.job else {
            return;
        };
        let finished = job.is_finished();

        for event in job.poll() {
            self.status = match event {
                PlaybackEvent::Progress(done, total) => {
                    Status::Info(format!("Playing audio... {}/{}", done, total))
                }
                PlaybackEvent::Finished(Outcome::Completed { .. }) => {
                    Status::Info(COMPLETE.to_string())
                }
                PlaybackEvent::Finished(Outcome::Cancelled { .. }) => {
                    Status::Info("Playback stopped.".to_string())
                }
                PlaybackEvent::Failed(msg) => Status::Error(format!("ERROR: {}", msg)),
            };
        }

        if finished {
            info!("Playback thread finished");
            self.job = None;
        }
    }

    fn copy_output(&mut self) {
        if let Err(e) = copy_to_clipboard(&self.output) {
            self.status = Status::Error(format!("ERROR: {}", e));
        }
    }
}

impl App for PetsApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.poll_playback();
        if self.is_playing() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.);
                ui.heading("Welcome to Pets (Personalized Text-to-Speech)");
                ui.add_space(10.);

                ui.label("Enter text:");
                ui.add(
                    TextEdit::multiline(&mut self.text)
                        .desired_rows(5)
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(5.);

                ui.label("Audio Directory:");
                ui.horizontal(|ui| {
                    ui.add(TextEdit::singleline(&mut self.audio_dir).desired_width(360.));
                    if ui.button("Browse...").clicked() {
                        self.browse_audio_directory();
                    }
                });
                ui.add_space(10.);

                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(!self.is_playing(), Button::new("Convert to Speech"))
                        .clicked()
                    {
                        self.process_text_to_speech();
                    }
                    if ui
                        .add_enabled(self.is_playing(), Button::new("Stop"))
                        .clicked()
                    {
                        if let Some(job) = &self.job {
                            job.cancel();
                        }
                    }
                });
                ui.add_space(5.);

                ui.horizontal(|ui| {
                    ui.label("Output:");
                    if ui
                        .add_enabled(!self.output.is_empty(), Button::new("Copy"))
                        .clicked()
                    {
                        self.copy_output();
                    }
                });
                ScrollArea::vertical().max_height(260.).show(ui, |ui| {
                    ui.add(
                        TextEdit::multiline(&mut self.output.as_str())
                            .desired_rows(10)
                            .desired_width(f32::INFINITY),
                    );
                });
                ui.add_space(10.);

                match &self.status {
                    Status::Info(text) => ui.label(RichText::new(text).color(theme::STATUS)),
                    Status::Error(text) => {
                        ui.label(RichText::new(text).color(ui.visuals().error_fg_color))
                    }
                };
                ui.small(self.session.dictionary_status());
            });
        });

        self.show_dir_dialog(ctx);
    }
}

/// Open the main window and block until it is closed
pub fn run(session: Session) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 700.0])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(PetsApp::new(cc, session)))),
    )
    .map_err(|e| PetsError::Other(format!("GUI error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::state::config::Config;

    fn app(dir: &Path) -> PetsApp {
        let config = Config::load_from(dir.join("pets.cfg")).unwrap();
        PetsApp::from_session(Session::with_dictionary(config, Dictionary::new()))
    }

    #[test]
    fn test_missing_input_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());

        app.process_text_to_speech();
        assert_eq!(
            app.status,
            Status::Error("ERROR: Please enter both text and audio directory.".to_string())
        );
        assert!(app.job.is_none());
        assert!(app.output.is_empty());
    }

    #[test]
    fn test_bad_audio_directory_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());
        app.text = "hello".to_string();
        app.audio_dir = dir.path().join("missing").display().to_string();

        app.process_text_to_speech();
        assert!(matches!(app.status, Status::Error(ref s) if s.contains("Audio directory not found")));
        assert!(app.job.is_none());
    }

    #[test]
    fn test_restores_audio_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::load_from(dir.path().join("pets.cfg")).unwrap();
        config.set_audio_dir(Path::new("/tmp/voice"));

        let app = PetsApp::from_session(Session::with_dictionary(config, Dictionary::new()));
        assert_eq!(app.audio_dir, "/tmp/voice");
    }
}
