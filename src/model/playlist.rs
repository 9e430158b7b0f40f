use super::{M3uPlaylist, PlsPlaylist, SimplePlaylist, XspfPlaylist};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Supported playlist formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaylistFormat {
    M3u,
    Pls,
    Xspf,
}

impl PlaylistFormat {
    /// Guess the format from a file extension (`m3u`, `m3u8`, `pls`, `xspf`)
    pub fn from_extension(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl fmt::Display for PlaylistFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlaylistFormat::M3u => "M3U",
            PlaylistFormat::Pls => "PLS",
            PlaylistFormat::Xspf => "XSPF",
        };
        f.write_str(name)
    }
}

impl FromStr for PlaylistFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "m3u" | "m3u8" => Ok(PlaylistFormat::M3u),
            "pls" => Ok(PlaylistFormat::Pls),
            "xspf" => Ok(PlaylistFormat::Xspf),
            other => Err(format!("unknown playlist format: {other}")),
        }
    }
}

/// A parsed playlist of any supported format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", content = "playlist")]
pub enum Playlist {
    M3u(M3uPlaylist),
    Pls(PlsPlaylist),
    Xspf(XspfPlaylist),
}

impl Playlist {
    pub fn format(&self) -> PlaylistFormat {
        match self {
            Playlist::M3u(_) => PlaylistFormat::M3u,
            Playlist::Pls(_) => PlaylistFormat::Pls,
            Playlist::Xspf(_) => PlaylistFormat::Xspf,
        }
    }

    /// Entry count as the source playlist reports it
    ///
    /// For PLS this is the declared `NumberOfEntries`; XSPF has no such
    /// field so the track count is used.
    pub fn entry_count(&self) -> usize {
        match self {
            Playlist::M3u(p) => p.entry_count,
            Playlist::Pls(p) => p.entry_count,
            Playlist::Xspf(p) => p.tracks.len(),
        }
    }

    /// Number of tracks actually parsed
    pub fn track_count(&self) -> usize {
        match self {
            Playlist::M3u(p) => p.len(),
            Playlist::Pls(p) => p.len(),
            Playlist::Xspf(p) => p.len(),
        }
    }

    pub fn as_m3u(&self) -> Option<&M3uPlaylist> {
        match self {
            Playlist::M3u(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_pls(&self) -> Option<&PlsPlaylist> {
        match self {
            Playlist::Pls(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_xspf(&self) -> Option<&XspfPlaylist> {
        match self {
            Playlist::Xspf(p) => Some(p),
            _ => None,
        }
    }

    /// Project down to the format-agnostic view
    pub fn simplify(self) -> SimplePlaylist {
        match self {
            Playlist::M3u(p) => p.into(),
            Playlist::Pls(p) => p.into(),
            Playlist::Xspf(p) => p.into(),
        }
    }
}

impl From<M3uPlaylist> for Playlist {
    fn from(playlist: M3uPlaylist) -> Self {
        Playlist::M3u(playlist)
    }
}

impl From<PlsPlaylist> for Playlist {
    fn from(playlist: PlsPlaylist) -> Self {
        Playlist::Pls(playlist)
    }
}

impl From<XspfPlaylist> for Playlist {
    fn from(playlist: XspfPlaylist) -> Self {
        Playlist::Xspf(playlist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("M3U8".parse::<PlaylistFormat>(), Ok(PlaylistFormat::M3u));
        assert_eq!("pls".parse::<PlaylistFormat>(), Ok(PlaylistFormat::Pls));
        assert_eq!("Xspf".parse::<PlaylistFormat>(), Ok(PlaylistFormat::Xspf));
        assert!("jspf".parse::<PlaylistFormat>().is_err());
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            PlaylistFormat::from_extension(Path::new("/music/radio.PLS")),
            Some(PlaylistFormat::Pls)
        );
        assert_eq!(PlaylistFormat::from_extension(Path::new("notes.txt")), None);
        assert_eq!(PlaylistFormat::from_extension(Path::new("no_extension")), None);
    }

    #[test]
    fn test_checked_accessors() {
        let playlist = Playlist::from(M3uPlaylist::new());

        assert_eq!(playlist.format(), PlaylistFormat::M3u);
        assert!(playlist.as_m3u().is_some());
        assert!(playlist.as_pls().is_none());
        assert!(playlist.as_xspf().is_none());
    }

    #[test]
    fn test_pls_entry_count_is_declared_value() {
        let playlist = Playlist::Pls(PlsPlaylist {
            entry_count: 5,
            ..PlsPlaylist::default()
        });

        assert_eq!(playlist.entry_count(), 5);
        assert_eq!(playlist.track_count(), 0);
    }
}
