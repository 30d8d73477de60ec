//! Playback on the default output device through rodio

use super::player::Player;
use crate::{PetsError, Result};
use log::debug;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

/// Player writing to the system's default audio output
///
/// The output stream is not `Send` on every platform, so create the
/// player on the thread that uses it.
pub struct RodioPlayer {
    /// Keeps the device open for as long as the sink plays
    _stream: OutputStream,
    sink: Sink,
}

impl RodioPlayer {
    /// Open the default output device
    ///
    /// `volume` is 0-100.
    pub fn new(volume: u8) -> Result<Self> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| PetsError::Playback(format!("Failed to open audio output: {}", e)))?;
        stream.log_on_drop(false);
        let sink = Sink::connect_new(stream.mixer());
        sink.set_volume(volume.min(100) as f32 / 100.0);
        debug!("Opened default audio output at volume {}", volume);

        Ok(Self {
            _stream: stream,
            sink,
        })
    }
}

impl Player for RodioPlayer {
    fn play_clip(&mut self, path: &Path) -> Result<()> {
        let file = File::open(path)?;
        let source = Decoder::new(BufReader::new(file)).map_err(|e| {
            PetsError::Playback(format!("Failed to decode {}: {}", path.display(), e))
        })?;
        self.sink.append(source);
        self.sink.sleep_until_end();
        Ok(())
    }

    fn silence(&mut self, duration: Duration) -> Result<()> {
        self.sink.sleep_until_end();
        std::thread::sleep(duration);
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.sink.stop();
        Ok(())
    }
}
