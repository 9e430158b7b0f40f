use anyhow::{Context, Result};
use clap::Parser;
use playlist_parser::PlaylistFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "plparse")]
#[command(about = "Parse an M3U, PLS or XSPF playlist and print it as JSON", long_about = None)]
struct Args {
    /// Playlist file to parse
    file: PathBuf,

    /// Parse as this format instead of detecting it (m3u, pls, xspf)
    #[arg(short = 'f', long)]
    format: Option<PlaylistFormat>,

    /// Print only index, file, title and length of each track
    #[arg(short = 's', long)]
    simple: bool,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let playlist = match args.format {
        Some(format) => playlist_parser::parse_file_as(&args.file, format),
        None => playlist_parser::parse_file(&args.file),
    }
    .with_context(|| format!("Failed to parse playlist: {:?}", args.file))?;

    if let Some(nominal) = PlaylistFormat::from_extension(&args.file) {
        if nominal != playlist.format() {
            log::debug!(
                "{:?} has a {} extension but contains a {} playlist",
                args.file,
                nominal,
                playlist.format()
            );
        }
    }

    log::info!(
        "{} playlist: {} entries, {} tracks",
        playlist.format(),
        playlist.entry_count(),
        playlist.track_count()
    );

    let json = if args.simple {
        to_json(&playlist.simplify(), args.compact)?
    } else {
        to_json(&playlist, args.compact)?
    };
    println!("{}", json);

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    json.context("Failed to serialize playlist")
}
