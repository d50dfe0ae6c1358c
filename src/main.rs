//! Face gesture counter: replays landmark recordings and reports blink,
//! eyebrow raise and mouth opening counts.

use anyhow::{bail, Context, Result};
use clap::Parser;
use face_gesture_counter::{
    config::{GestureConfig, EXAMPLE_CONFIG},
    engine::GestureEngine,
    recording::RecordingSource,
    session::TrackingSession,
};
use log::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Landmark recording to replay (JSON Lines)
    #[arg(short, long)]
    recording: Option<String>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Print an example configuration file and exit
    #[arg(long)]
    print_config: bool,

    /// Print counts every N frames (0 prints only the final counts)
    #[arg(short, long, default_value = "0")]
    every: u64,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    if args.print_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    let Some(recording) = args.recording else {
        bail!("No recording given, pass --recording <PATH>");
    };

    info!("Face Gesture Counter");

    let config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        match GestureConfig::from_file(config_path).and_then(|cfg| cfg.validate().map(|()| cfg)) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Failed to load config file: {}. Using defaults.", e);
                GestureConfig::default()
            }
        }
    } else {
        GestureConfig::default()
    };

    let engine = GestureEngine::new(config).context("Failed to create gesture engine")?;
    let source = RecordingSource::open(&recording).with_context(|| format!("Failed to open {recording}"))?;
    let mut session = TrackingSession::new(engine, source);

    let every = args.every;
    let mut frame_index = 0_u64;
    let summary = session.run(|counts| {
        frame_index += 1;
        if every > 0 && frame_index % every == 0 {
            println!("frame {frame_index}: {counts}");
        }
    })?;

    println!("{}", summary.counts);
    Ok(())
}
