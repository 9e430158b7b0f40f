use serde::{Deserialize, Serialize};

/// Only PLS version understood by the parser
pub const PLS_VERSION: u32 = 2;

/// A track assembled from `FileN`, `TitleN` and `LengthN` directives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlsTrack {
    /// The shared numeric suffix `N` (1-based)
    pub index: usize,

    pub file: String,

    pub title: String,

    /// Length as written, seconds or -1 for streams; empty when not declared
    pub length: String,
}

/// PLS playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlsPlaylist {
    /// Value of the `NumberOfEntries` directive, not recomputed from `tracks`
    pub entry_count: usize,

    pub version: u32,

    /// Tracks ordered by their numeric suffix
    pub tracks: Vec<PlsTrack>,
}

impl Default for PlsPlaylist {
    fn default() -> Self {
        Self {
            entry_count: 0,
            version: PLS_VERSION,
            tracks: Vec::new(),
        }
    }
}

impl PlsPlaylist {
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
