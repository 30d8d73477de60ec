//! PETS main entry point
//!
//! With no text arguments the window opens. Given text, PETS converts
//! and plays it from the terminal instead:
//!
//! ```text
//! pets [--debug] [--dir AUDIO_DIR] [--json] [--no-play] TEXT...
//! ```

use anyhow::{bail, Context};
use log::{debug, error, info};
use pets::playback::{perform, RodioPlayer};
use pets::state::config::Config;
use pets::state::Session;
use std::process;
use std::sync::atomic::AtomicBool;

const USAGE: &str = "\
Usage: pets [OPTIONS] [TEXT...]

Without TEXT, opens the PETS window.

Options:
  -d, --debug      Write a debug log to pets.log
      --dir DIR    Audio directory with one clip per phoneme
      --json       Print the transcript as JSON
      --no-play    Only print the transcript
  -h, --help       Show this help";

/// Command line options
#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    debug: bool,
    help: bool,
    dir: Option<String>,
    json: bool,
    play: bool,
    text: Vec<String>,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> anyhow::Result<Options> {
    let mut options = Options {
        play: true,
        ..Default::default()
    };
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-d" | "--debug" => options.debug = true,
            "-h" | "--help" => options.help = true,
            "--json" => options.json = true,
            "--no-play" => options.play = false,
            "--dir" => match args.next() {
                Some(dir) => options.dir = Some(dir),
                None => bail!("--dir needs a directory"),
            },
            "--" => {
                options.text.extend(args.by_ref());
            }
            flag if flag.starts_with("--") => bail!("Unknown option {}", flag),
            _ => options.text.push(arg),
        }
    }

    Ok(options)
}

fn main() {
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, USAGE);
            process::exit(2);
        }
    };

    if options.help {
        println!("{}", USAGE);
        return;
    }

    // Initialize logger
    if options.debug {
        // Debug mode: write to pets.log file
        use std::fs::OpenOptions;
        match OpenOptions::new().create(true).append(true).open("pets.log") {
            Ok(log_file) => {
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Debug)
                    .target(env_logger::Target::Pipe(Box::new(log_file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Warning: Failed to open pets.log for debug logging: {}", e);
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Warn)
                    .init();
            }
        }

        info!(
            "PETS version {} starting (debug mode, logging to pets.log)",
            pets::VERSION
        );
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Error)
            .init();
    }

    if let Err(e) = run(options) {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(options: Options) -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    debug!("Configuration loaded from {:?}", config.path());

    let session = Session::new(config).context("Failed to load pronouncing dictionary")?;
    info!("{}", session.dictionary_status());

    if options.text.is_empty() {
        return pets::app::run(session).context("Failed to run window");
    }

    speak_from_terminal(&session, &options)
}

fn speak_from_terminal(session: &Session, options: &Options) -> anyhow::Result<()> {
    let text = options.text.join(" ");

    if !options.play {
        let transcript = session.convert(&text);
        if options.json {
            println!("{}", serde_json::to_string_pretty(&transcript)?);
        } else {
            println!("{}", transcript.render());
        }
        return Ok(());
    }

    let dir = match options
        .dir
        .clone()
        .or_else(|| session.config.audio_dir().map(|d| d.display().to_string()))
    {
        Some(dir) => dir,
        None => bail!("No audio directory: pass --dir or choose one in the window first"),
    };

    let prepared = session.prepare(&text, &dir)?;
    if options.json {
        println!("{}", serde_json::to_string_pretty(&prepared.transcript)?);
    } else {
        println!("{}", prepared.transcript.render());
    }
    if !prepared.schedule.missing.is_empty() {
        eprintln!(
            "Audio files not found for: {}",
            pets::phoneme::join(&prepared.schedule.missing)
        );
    }

    let mut player = RodioPlayer::new(session.config.volume())?;
    let cancel = AtomicBool::new(false);
    perform(&prepared.schedule, &mut player, &cancel, |done, total| {
        debug!("Played {}/{}", done, total);
    })?;

    println!("Text-to-Speech conversion complete!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_opens_window() {
        let options = parse_args(args(&[])).unwrap();
        assert!(options.text.is_empty());
        assert!(options.play);
    }

    #[test]
    fn test_headless_flags() {
        let options =
            parse_args(args(&["--dir", "voice", "--json", "--no-play", "Hello,", "world"]))
                .unwrap();
        assert_eq!(options.dir.as_deref(), Some("voice"));
        assert!(options.json);
        assert!(!options.play);
        assert_eq!(options.text, args(&["Hello,", "world"]));
    }

    #[test]
    fn test_double_dash_ends_flags() {
        let options = parse_args(args(&["-d", "--", "--json"])).unwrap();
        assert!(options.debug);
        assert!(!options.json);
        assert_eq!(options.text, args(&["--json"]));
    }

    #[test]
    fn test_bad_args() {
        assert!(parse_args(args(&["--dir"])).is_err());
        assert!(parse_args(args(&["--loud"])).is_err());
    }
}
