use super::{M3uPlaylist, PlsPlaylist, XspfPlaylist};
use serde::{Deserialize, Serialize};

/// Format-agnostic track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleTrack {
    pub index: usize,
    /// File path, URL or XSPF location
    pub file: String,
    pub title: String,
    /// Length or XSPF duration, unconverted
    pub length: String,
}

/// Lossy view of any playlist: index, file, title and length only
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplePlaylist {
    pub entry_count: usize,
    pub tracks: Vec<SimpleTrack>,
}

impl From<M3uPlaylist> for SimplePlaylist {
    fn from(playlist: M3uPlaylist) -> Self {
        Self {
            entry_count: playlist.entry_count,
            tracks: playlist
                .tracks
                .into_iter()
                .map(|t| SimpleTrack {
                    index: t.index,
                    file: t.file,
                    title: t.title,
                    length: t.length,
                })
                .collect(),
        }
    }
}

impl From<PlsPlaylist> for SimplePlaylist {
    fn from(playlist: PlsPlaylist) -> Self {
        Self {
            entry_count: playlist.entry_count,
            tracks: playlist
                .tracks
                .into_iter()
                .map(|t| SimpleTrack {
                    index: t.index,
                    file: t.file,
                    title: t.title,
                    length: t.length,
                })
                .collect(),
        }
    }
}

impl From<XspfPlaylist> for SimplePlaylist {
    fn from(playlist: XspfPlaylist) -> Self {
        Self {
            entry_count: playlist.tracks.len(),
            tracks: playlist
                .tracks
                .into_iter()
                .map(|t| SimpleTrack {
                    index: t.index,
                    file: t.metadata.location,
                    title: t.metadata.title,
                    length: t.duration,
                })
                .collect(),
        }
    }
}
