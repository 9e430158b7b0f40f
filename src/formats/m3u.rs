//! Extended M3U parser
//!
//! The file must open with `#EXTM3U`; after that lines are read in pairs,
//! an `#EXTINF:<length>,<title>` line followed by the media path.

use super::text::{normalize_lines, normalize_tokens};
use crate::error::{PlaylistError, Result};
use crate::model::{M3uPlaylist, PlaylistFormat};

pub(crate) const M3U_HEADER: &str = "#EXTM3U";

/// Length of the `#EXTINF:` prefix. The prefix text itself is not checked.
const EXTINF_PREFIX_LEN: usize = 8;

/// Parse extended M3U text
pub fn parse_m3u(text: &str) -> Result<M3uPlaylist> {
    let lines = normalize_lines(text);

    if lines.first() != Some(&M3U_HEADER) {
        return Err(PlaylistError::FormatMismatch {
            expected: PlaylistFormat::M3u,
        });
    }

    let mut playlist = M3uPlaylist::new();
    let mut pairs = lines[1..].chunks_exact(2);

    for pair in &mut pairs {
        let (length, title) = parse_extinf(pair[0])?;
        log::debug!("M3U track {}: {:?} -> {}", playlist.len() + 1, title, pair[1]);
        playlist.add_track(pair[1].to_string(), title, length);
    }

    if let [dangling] = pairs.remainder() {
        log::warn!("Ignoring trailing M3U line without a path: {:?}", dangling);
    }

    log::info!("Parsed {} tracks from M3U playlist", playlist.entry_count);
    Ok(playlist)
}

/// Split an `#EXTINF:` line into `(length, title)`
///
/// The remainder is split on every comma and empty pieces are dropped;
/// the first two pieces are the length and the title.
fn parse_extinf(line: &str) -> Result<(String, String)> {
    let info = line.get(EXTINF_PREFIX_LEN..).ok_or_else(|| {
        PlaylistError::IndexOutOfRange(format!(
            "M3U metadata line {:?} is shorter than the #EXTINF: prefix",
            line
        ))
    })?;

    match normalize_tokens(info.split(',')).as_slice() {
        [length, title, ..] => Ok((length.to_string(), title.to_string())),
        _ => Err(PlaylistError::IndexOutOfRange(format!(
            "M3U metadata line {:?} has no length,title pair",
            line
        ))),
    }
}
