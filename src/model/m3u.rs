use serde::{Deserialize, Serialize};

/// One `#EXTINF` + path pair from an extended M3U playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct M3uTrack {
    /// Position in playlist (1-based)
    pub index: usize,

    /// Path or URL of the media
    pub file: String,

    /// Display title as written after the comma
    pub title: String,

    /// Duration exactly as written, usually seconds or -1 for streams
    pub length: String,
}

/// Extended M3U playlist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct M3uPlaylist {
    /// Number of tracks parsed (always equals `tracks.len()`)
    pub entry_count: usize,

    pub tracks: Vec<M3uTrack>,
}

impl M3uPlaylist {
    /// Create a new empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a track, assigning the next 1-based index
    pub fn add_track(&mut self, file: String, title: String, length: String) {
        let index = self.tracks.len() + 1;
        self.tracks.push(M3uTrack {
            index,
            file,
            title,
            length,
        });
        self.entry_count = self.tracks.len();
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_track_keeps_count_in_sync() {
        let mut playlist = M3uPlaylist::new();
        playlist.add_track("a.mp3".into(), "A".into(), "10".into());
        playlist.add_track("b.mp3".into(), "B".into(), "20".into());

        assert_eq!(playlist.entry_count, 2);
        assert_eq!(playlist.tracks[0].index, 1);
        assert_eq!(playlist.tracks[1].index, 2);
        assert_eq!(playlist.tracks[1].file, "b.mp3");
    }
}
