//! XSPF (XML Shareable Playlist Format) parser
//!
//! Reads a `<playlist version="N">` root with optional descriptive children,
//! any number of `<meta rel="...">` elements and a `<trackList>` of
//! `<track>` elements. Optional elements that are absent come back empty.

use super::xml::{self, Element};
use crate::error::{PlaylistError, Result};
use crate::model::{PlaylistFormat, XspfMeta, XspfMetadata, XspfPlaylist, XspfTrack};

/// Leading text an XSPF document may start with
const XSPF_PREFIXES: [&str; 3] = ["<?xml", "<xml", "<playlist"];

/// Cheap prefix check used before any XML parsing
pub(crate) fn has_xspf_prefix(text: &str) -> bool {
    let text = text.trim_start();
    XSPF_PREFIXES.iter().any(|prefix| text.starts_with(prefix))
}

/// Parse XSPF text
pub fn parse_xspf(text: &str) -> Result<XspfPlaylist> {
    if !has_xspf_prefix(text) {
        return Err(PlaylistError::FormatMismatch {
            expected: PlaylistFormat::Xspf,
        });
    }

    let document = xml::parse_document(text)?;
    let root = document
        .child("playlist")
        .ok_or(PlaylistError::MissingRoot("playlist"))?;

    let version = root.attribute("version").ok_or_else(|| {
        PlaylistError::IndexOutOfRange("<playlist> has no version attribute".to_string())
    })?;
    let version = version
        .trim()
        .parse::<u32>()
        .map_err(|_| PlaylistError::InvalidNumber {
            field: "version",
            value: version.to_string(),
        })?;

    let meta = root
        .descendants_named("meta")
        .into_iter()
        .map(|m| XspfMeta {
            rel: m.attribute("rel").unwrap_or_default().to_string(),
            value: m.text().to_string(),
        })
        .collect();

    let tracks = root
        .child("trackList")
        .ok_or(PlaylistError::MissingRoot("trackList"))?
        .children_named("track")
        .enumerate()
        .map(|(index, track)| parse_track(index, track))
        .collect::<Result<Vec<_>>>()?;

    let playlist = XspfPlaylist {
        version,
        metadata: read_metadata(root),
        date: root.child_text("date"),
        license: root.child_text("license"),
        meta,
        tracks,
    };

    log::info!(
        "Parsed {} tracks from XSPF playlist (version {})",
        playlist.tracks.len(),
        playlist.version
    );
    Ok(playlist)
}

fn read_metadata(element: &Element) -> XspfMetadata {
    XspfMetadata {
        title: element.child_text("title"),
        creator: element.child_text("creator"),
        annotation: element.child_text("annotation"),
        info: element.child_text("info"),
        location: element.child_text("location"),
        identifier: element.child_text("identifier"),
        image: element.child_text("image"),
    }
}

fn parse_track(index: usize, track: &Element) -> Result<XspfTrack> {
    for required in ["location", "title"] {
        if track.child(required).is_none() {
            return Err(PlaylistError::IndexOutOfRange(format!(
                "XSPF track {} has no <{}>",
                index, required
            )));
        }
    }

    let track = XspfTrack {
        index,
        metadata: read_metadata(track),
        album: track.child_text("album"),
        duration: track.child_text("duration"),
    };

    log::debug!(
        "XSPF track {}: {:?} -> {}",
        index,
        track.title(),
        track.location()
    );
    Ok(track)
}
