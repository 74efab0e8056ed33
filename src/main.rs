use anyhow::{Context, Result};
use clap::Parser;
use playlist_scanner::{read_playlist_with, Dialect, PlaylistInfo, PlaylistScan, ScanConfig, TrackRecord};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "playlist-scanner")]
#[command(about = "List the tracks of M3U and PLS playlists", long_about = None)]
struct Args {
    /// Playlist files, or directories to search for playlists
    #[arg(required = true)]
    paths: Vec<String>,

    /// Playlist format (m3u or pls); guessed from the extension if omitted
    #[arg(short = 'f', long)]
    format: Option<String>,

    /// Maximum line length in bytes
    #[arg(long, default_value = "4096")]
    max_line_len: usize,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut playlists = Vec::new();
    for arg in &args.paths {
        let path = PathBuf::from(shellexpand::tilde(arg).as_ref());
        if path.is_dir() {
            playlists.extend(find_playlists(&path));
        } else {
            playlists.push(path);
        }
    }
    log::info!("Scanning {} playlist(s)", playlists.len());

    // One session per file; files are independent
    let results: Vec<_> = playlists
        .par_iter()
        .map(|path| (path, scan(path, args.format.as_deref(), args.max_line_len)))
        .collect();

    let mut failures = 0;
    for (path, result) in results {
        match result {
            Ok(scan) => print_playlist(&scan.info, &scan.tracks),
            Err(e) => {
                failures += 1;
                log::error!("{:?}: {:#}", path, e);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} playlist(s) could not be read", failures);
    }
    Ok(())
}

/// Recursively collect files with a playlist extension
fn find_playlists(dir: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && Dialect::from_path(e.path()).is_some())
        .map(|e| e.into_path())
        .collect()
}

/// Read a playlist, keeping the tracks read before any fatal error
fn scan(path: &Path, format: Option<&str>, max_line_len: usize) -> Result<PlaylistScan> {
    let format = match format {
        Some(format) => format.to_string(),
        None => Dialect::from_path(path)
            .with_context(|| format!("Cannot guess playlist format of {:?}", path))?
            .to_string(),
    };

    let config = ScanConfig::new().with_max_line_len(max_line_len);
    read_playlist_with(path, &format, config)
        .with_context(|| format!("Failed to open playlist: {:?}", path))
}

fn print_playlist(info: &PlaylistInfo, tracks: &[TrackRecord]) {
    println!("{} [{}] {} track(s)", info.title, info.dialect, tracks.len());
    for track in tracks {
        let mut line = format!("  {:>4}. {} - {}", track.track_number, track.display_title(), track.path);
        if let Some(mime) = &track.mime {
            line.push_str(&format!(" ({})", mime));
        }
        if let Some(profile) = &track.dlna_profile {
            line.push_str(&format!(" [{}]", profile));
        }
        println!("{}", line);
    }
}
