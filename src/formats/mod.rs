//! Playlist format parsing
//!
//! One parser per format plus a dispatcher that picks the parser from the
//! first non-blank characters of the text.

mod m3u;
mod pls;
pub mod text;
mod xml;
mod xspf;

pub use m3u::parse_m3u;
pub use pls::parse_pls;
pub use xspf::parse_xspf;

use crate::error::{PlaylistError, Result};
use crate::model::{Playlist, PlaylistFormat, SimplePlaylist};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Detect the playlist format from the leading text
///
/// Checked in order: `[playlist]` (any case) for PLS, `#EXTM3U` for M3U,
/// then `<?xml`, `<xml` or `<playlist` for XSPF.
pub fn detect_format(text: &str) -> Option<PlaylistFormat> {
    let text = text.trim_start();

    if starts_with_ignore_ascii_case(text, pls::PLS_HEADER) {
        Some(PlaylistFormat::Pls)
    } else if text.starts_with(m3u::M3U_HEADER) {
        Some(PlaylistFormat::M3u)
    } else if xspf::has_xspf_prefix(text) {
        Some(PlaylistFormat::Xspf)
    } else {
        None
    }
}

fn starts_with_ignore_ascii_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Parse text of any supported format
pub fn parse_playlist(text: &str) -> Result<Playlist> {
    let format = detect_format(text).ok_or(PlaylistError::UnrecognizedFormat)?;
    log::debug!("Detected {} playlist", format);
    parse_as(text, format)
}

/// Parse text with the parser for `format`, skipping detection
pub fn parse_as(text: &str, format: PlaylistFormat) -> Result<Playlist> {
    let playlist: Playlist = match format {
        PlaylistFormat::M3u => parse_m3u(text)?.into(),
        PlaylistFormat::Pls => parse_pls(text)?.into(),
        PlaylistFormat::Xspf => parse_xspf(text)?.into(),
    };
    Ok(playlist)
}

/// Parse text of any supported format into the reduced four-field view
pub fn parse_playlist_simple(text: &str) -> Result<SimplePlaylist> {
    parse_playlist(text).map(Playlist::simplify)
}

/// Drain a reader and parse its contents
///
/// The input must be UTF-8.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Playlist> {
    parse_playlist(&read_text(&mut reader)?)
}

/// Read and parse a playlist file of any supported format
pub fn parse_file(path: &Path) -> Result<Playlist> {
    log::info!("Parsing playlist from {:?}", path);
    parse_playlist(&read_file(path)?)
}

/// Read a playlist file and parse it as `format`
pub fn parse_file_as(path: &Path, format: PlaylistFormat) -> Result<Playlist> {
    log::info!("Parsing {} playlist from {:?}", format, path);
    parse_as(&read_file(path)?, format)
}

/// Read a playlist file of any supported format into the reduced view
pub fn parse_simple_file(path: &Path) -> Result<SimplePlaylist> {
    parse_file(path).map(Playlist::simplify)
}

fn read_file(path: &Path) -> Result<String> {
    let mut file = File::open(path)?;
    read_text(&mut file)
}

fn read_text<R: Read>(reader: &mut R) -> Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}
