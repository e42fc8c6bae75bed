use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use catchphrase_core::*;
use clap::Parser;

mod play;

#[derive(Parser, Debug)]
#[command(version, about = "Guess the picture before all of it is revealed", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Image file, looked up inside the images directory
    filename: Option<PathBuf>,

    /// How many pieces to reveal before the answer (1 to 8)
    #[arg(short = 'n', long, allow_hyphen_values = true)]
    reveal_number: Option<RevealCount>,

    /// Directory the image filename is relative to
    #[arg(long)]
    images_dir: Option<PathBuf>,

    /// TOML file with `filename`, `reveal_number`, `images_dir` and `max_dimension`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Where the frames are written
    #[arg(short, long, default_value = "frames")]
    out_dir: PathBuf,

    /// Longest edge of the written frames, in pixels
    #[arg(long)]
    max_dimension: Option<u32>,

    /// Step through the game on the terminal
    #[arg(long)]
    play: bool,
}

/// Config file first, then anything given on the command line.
fn resolve_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Could not read config {}", path.display()))?;
            toml::from_str::<GameConfig>(&text)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => {
            let filename = args
                .filename
                .clone()
                .context("No image given, pass a filename or --config")?;
            GameConfig::with_count(filename, RevealCount::default())
        }
    };

    if let Some(filename) = &args.filename {
        config.filename = filename.clone();
    }
    if let Some(reveal_number) = args.reveal_number {
        config.reveal_number = reveal_number;
    }
    if let Some(images_dir) = &args.images_dir {
        config = config.images_dir(images_dir);
    }
    if let Some(max_dimension) = args.max_dimension {
        config.max_dimension = max_dimension;
    }
    Ok(config)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn write_frames(frames: &FrameSequence, out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Could not create {}", out_dir.display()))?;
    for (i, frame) in frames.iter().enumerate() {
        let path = out_dir.join(format!("frame-{i:02}.png"));
        save(frame, &path).with_context(|| format!("Could not write {}", path.display()))?;
    }
    log::info!("Wrote {} frames to {}", frames.len(), out_dir.display());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = resolve_config(&args)?;
    let seed = args.seed.unwrap_or_else(clock_seed);
    log::debug!("config: {config:?}, seed: {seed}");

    let frames = catchphrase_frames(&config, RandomRevealGenerator::new(seed))
        .with_context(|| format!("Could not start a game with {}", config.image_path().display()))?;
    let frames = rescale_for_display(frames, config.max_dimension)?;
    write_frames(&frames, &args.out_dir)?;

    if args.play {
        play::run(GameSession::new(frames), &args.out_dir)?;
    }
    Ok(())
}
