// Seedsong generator — CLI entry point.
//
// Generates one piece and writes it to `<out-dir>/<Piece_Name>.mid`.
// The pipeline: seed → drums → melody → message streams → MIDI bytes.
//
// Usage:
//   cargo run -p seedsong_music -- [--seed N] [--out-dir DIR] [--config FILE]
//     [--stop-before-start] [--dry-run] [--verbose]
//
// Log level comes from RUST_LOG (default info, or debug with --verbose).

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use seedsong_music::config::GeneratorConfig;
use seedsong_music::generator::Generator;
use seedsong_music::names::{default_words, file_stem};
use seedsong_music::stream::EventOrder;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "generate", about = "Generate a seeded drum + melody MIDI piece")]
struct Args {
    /// Seed to generate from. A random seed is drawn if omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory the .mid file is written to.
    #[arg(short, long, default_value = "out")]
    out_dir: PathBuf,

    /// JSON generator config. Missing fields use the built-in defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Order note-offs before note-ons that share a tick.
    #[arg(long)]
    stop_before_start: bool,

    /// Log the message streams instead of writing a file.
    #[arg(short, long)]
    dry_run: bool,

    /// Log per-step generation detail.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = match &args.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    let order = if args.stop_before_start {
        EventOrder::StopBeforeStart
    } else {
        config.event_order
    };

    let generator = Generator::new(config, default_words()?)?;
    let piece = match args.seed {
        Some(seed) => generator.generate(seed)?,
        None => generator.generate_random()?,
    };

    if args.dry_run {
        for (i, track) in piece.composition.tracks().iter().enumerate() {
            let messages = track.to_messages(order);
            info!(
                "track {i}: {:?}, {} messages",
                track.instrument(),
                messages.len()
            );
            for message in &messages {
                debug!("  +{} {:?}", message.delta, message.kind);
            }
        }
        return Ok(());
    }

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;
    let path = args.out_dir.join(format!("{}.mid", file_stem(&piece.name)));
    piece
        .composition
        .save(&path, order)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("wrote {}", path.display());

    Ok(())
}
