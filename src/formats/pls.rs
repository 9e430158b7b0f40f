//! PLS parser
//!
//! PLS is INI-like: a `[playlist]` header, then `Key=Value` directives.
//! Per-track directives (`FileN`, `TitleN`, `LengthN`) may appear in any
//! order; tracks are assembled by matching the numeric suffix `N`.

use super::text::{normalize_lines, normalize_tokens};
use crate::error::{PlaylistError, Result};
use crate::model::{PlaylistFormat, PlsPlaylist, PlsTrack, PLS_VERSION};

pub(crate) const PLS_HEADER: &str = "[playlist]";

/// A `TitleN`, `FileN` or `LengthN` value with its parsed suffix
#[derive(Debug)]
struct Directive<'a> {
    /// `None` when the suffix is not a number, so it never matches a track
    index: Option<usize>,
    value: &'a str,
}

/// Parse PLS text
pub fn parse_pls(text: &str) -> Result<PlsPlaylist> {
    let lines = normalize_lines(text);

    match lines.first() {
        Some(header) if header.eq_ignore_ascii_case(PLS_HEADER) => {}
        _ => {
            return Err(PlaylistError::FormatMismatch {
                expected: PlaylistFormat::Pls,
            })
        }
    }

    let mut playlist = PlsPlaylist::default();
    let mut declared_entries = None;
    let mut titles = Vec::new();
    let mut files = Vec::new();
    let mut lengths = Vec::new();

    for line in &lines[1..] {
        let (key, value) = split_directive(line)?;
        let key_lower = key.to_ascii_lowercase();

        match key_lower.as_str() {
            "numberofentries" => {
                let count = value.parse().map_err(|_| PlaylistError::InvalidNumber {
                    field: "NumberOfEntries",
                    value: value.to_string(),
                })?;
                declared_entries = Some(count);
            }
            "version" => playlist.version = parse_version(value)?,
            _ => {
                if let Some(suffix) = key_lower.strip_prefix("title") {
                    titles.push(directive(key, suffix, value)?);
                } else if let Some(suffix) = key_lower.strip_prefix("file") {
                    files.push(directive(key, suffix, value)?);
                } else if let Some(suffix) = key_lower.strip_prefix("length") {
                    lengths.push(directive(key, suffix, value)?);
                } else {
                    log::warn!("Ignoring PLS directive: {}", key);
                }
            }
        }
    }

    playlist.tracks = reconcile(&titles, &files, &lengths)?;
    playlist.entry_count = match declared_entries {
        Some(count) => {
            if count != playlist.tracks.len() {
                log::warn!(
                    "PLS declares {} entries but {} tracks were assembled",
                    count,
                    playlist.tracks.len()
                );
            }
            count
        }
        None => playlist.tracks.len(),
    };

    log::info!(
        "Parsed {} tracks from PLS playlist (version {})",
        playlist.tracks.len(),
        playlist.version
    );
    Ok(playlist)
}

/// Split `Key=Value` at the first `=`; both sides must be non-empty
fn split_directive(line: &str) -> Result<(&str, &str)> {
    let pair = line
        .split_once('=')
        .map(|(key, value)| normalize_tokens([key, value]));

    match pair.as_deref() {
        Some([key, value]) => Ok((*key, *value)),
        _ => Err(PlaylistError::IndexOutOfRange(format!(
            "PLS line {:?} is not a Key=Value directive",
            line
        ))),
    }
}

fn parse_version(value: &str) -> Result<u32> {
    match value.parse::<u32>() {
        Ok(PLS_VERSION) => Ok(PLS_VERSION),
        _ => Err(PlaylistError::InvalidVersion {
            found: value.to_string(),
        }),
    }
}

/// Build a directive from the key suffix after `Title`/`File`/`Length`
fn directive<'a>(key: &str, suffix: &str, value: &'a str) -> Result<Directive<'a>> {
    if suffix.is_empty() {
        return Err(PlaylistError::IndexOutOfRange(format!(
            "PLS directive {:?} has no track number",
            key
        )));
    }

    let index = if suffix.bytes().all(|b| b.is_ascii_digit()) {
        suffix.parse().ok()
    } else {
        log::warn!("PLS directive {:?} has a non-numeric track number", key);
        None
    };

    Ok(Directive { index, value })
}

/// Assemble tracks `1..=titles.len()` by suffix, ignoring directive order
///
/// The first directive carrying a given suffix wins. A suffix with no
/// matching directive leaves that field empty.
fn reconcile(
    titles: &[Directive],
    files: &[Directive],
    lengths: &[Directive],
) -> Result<Vec<PlsTrack>> {
    if titles.len() != files.len() {
        return Err(PlaylistError::FieldCountMismatch {
            titles: titles.len(),
            files: files.len(),
        });
    }

    let tracks = (1..=titles.len())
        .map(|index| PlsTrack {
            index,
            file: lookup(files, index),
            title: lookup(titles, index),
            length: lookup(lengths, index),
        })
        .collect();

    Ok(tracks)
}

fn lookup(directives: &[Directive], index: usize) -> String {
    directives
        .iter()
        .find(|d| d.index == Some(index))
        .map(|d| d.value.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RADIO: &str = "\
[playlist]
NumberOfEntries=2
File1=http://stream.example.com:8000/live
Title1=Example Radio (live)
Length1=-1
File2=http://backup.example.com/live
Title2=Example Radio (backup)
Length2=-1
Version=2
";

    #[test]
    fn test_single_track() {
        let playlist = parse_pls(
            "[playlist]\nNumberOfEntries=1\nFile1=a.mp3\nTitle1=A\nLength1=100\nVersion=2\n",
        )
        .unwrap();

        assert_eq!(playlist.entry_count, 1);
        assert_eq!(playlist.version, 2);
        assert_eq!(
            playlist.tracks,
            vec![PlsTrack {
                index: 1,
                file: "a.mp3".to_string(),
                title: "A".to_string(),
                length: "100".to_string(),
            }]
        );
    }

    #[test]
    fn test_directive_order_is_irrelevant() {
        let shuffled = "\
[playlist]
Version=2
Length2=-1
Title2=Example Radio (backup)
File1=http://stream.example.com:8000/live
NumberOfEntries=2
File2=http://backup.example.com/live
Length1=-1
Title1=Example Radio (live)
";
        assert_eq!(parse_pls(RADIO).unwrap(), parse_pls(shuffled).unwrap());
    }

    #[test]
    fn test_keys_and_header_are_case_insensitive() {
        let playlist =
            parse_pls("[PlayList]\nnumberofentries=1\nFILE1=x.ogg\ntitle1=X\nVERSION=2\n").unwrap();
        assert_eq!(playlist.tracks[0].file, "x.ogg");
        assert_eq!(playlist.tracks[0].title, "X");
        assert_eq!(playlist.tracks[0].length, "");
    }

    #[test]
    fn test_count_mismatch_either_way() {
        let more_titles = "[playlist]\nTitle1=A\nTitle2=B\nFile1=a.mp3\nVersion=2\n";
        let more_files = "[playlist]\nTitle1=A\nFile1=a.mp3\nFile2=b.mp3\nVersion=2\n";

        assert!(matches!(
            parse_pls(more_titles).unwrap_err(),
            PlaylistError::FieldCountMismatch { titles: 2, files: 1 }
        ));
        assert!(matches!(
            parse_pls(more_files).unwrap_err(),
            PlaylistError::FieldCountMismatch { titles: 1, files: 2 }
        ));
    }

    #[test]
    fn test_wrong_version() {
        let err = parse_pls("[playlist]\nFile1=a.mp3\nTitle1=A\nVersion=3\n").unwrap_err();
        assert!(matches!(err, PlaylistError::InvalidVersion { found } if found == "3"));

        let err = parse_pls("[playlist]\nVersion=two\n").unwrap_err();
        assert!(matches!(err, PlaylistError::InvalidVersion { .. }));
    }

    #[test]
    fn test_entry_count_is_declared_not_recomputed() {
        let playlist = parse_pls("[playlist]\nNumberOfEntries=7\nFile1=a.mp3\nTitle1=A\n").unwrap();
        assert_eq!(playlist.entry_count, 7);
        assert_eq!(playlist.tracks.len(), 1);
    }

    #[test]
    fn test_missing_entry_count_falls_back_to_tracks() {
        let playlist = parse_pls("[playlist]\nFile1=a.mp3\nTitle1=A\n").unwrap();
        assert_eq!(playlist.entry_count, 1);
        assert_eq!(playlist.version, PLS_VERSION);
    }

    #[test]
    fn test_gap_in_suffixes_keeps_track_with_empty_fields() {
        let playlist =
            parse_pls("[playlist]\nFile1=a.mp3\nTitle1=A\nFile3=c.mp3\nTitle3=C\n").unwrap();

        assert_eq!(playlist.tracks.len(), 2);
        assert_eq!(playlist.tracks[1].index, 2);
        assert_eq!(playlist.tracks[1].file, "");
        assert_eq!(playlist.tracks[1].title, "");
    }

    #[test]
    fn test_duplicate_suffix_takes_first() {
        let playlist = parse_pls(
            "[playlist]\nTitle1=First\nTitle1=Second\nFile1=a.mp3\nFile2=b.mp3\n",
        )
        .unwrap();
        assert_eq!(playlist.tracks[0].title, "First");
        assert_eq!(playlist.tracks[1].title, "");
        assert_eq!(playlist.tracks[1].file, "b.mp3");
    }

    #[test]
    fn test_multi_digit_suffix() {
        let mut text = String::from("[playlist]\n");
        for n in 1..=12 {
            text.push_str(&format!("File{n}=track{n}.mp3\nTitle{n}=Track {n}\n"));
        }

        let playlist = parse_pls(&text).unwrap();
        assert_eq!(playlist.tracks.len(), 12);
        assert_eq!(playlist.tracks[11].file, "track12.mp3");
        assert_eq!(playlist.tracks[9].title, "Track 10");
    }

    #[test]
    fn test_value_keeps_equals_signs() {
        let playlist = parse_pls("[playlist]\nFile1=http://host/play?id=42\nTitle1=Q\n").unwrap();
        assert_eq!(playlist.tracks[0].file, "http://host/play?id=42");
    }

    #[test]
    fn test_malformed_lines_are_fatal() {
        for text in [
            "[playlist]\nFile1 a.mp3\n",
            "[playlist]\nFile1=\n",
            "[playlist]\n=a.mp3\n",
            "[playlist]\nTitle=no number\n",
        ] {
            assert!(
                matches!(parse_pls(text), Err(PlaylistError::IndexOutOfRange(_))),
                "{text:?} should fail"
            );
        }
    }

    #[test]
    fn test_bad_entry_count() {
        let err = parse_pls("[playlist]\nNumberOfEntries=many\n").unwrap_err();
        assert!(matches!(err, PlaylistError::InvalidNumber { field: "NumberOfEntries", .. }));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let playlist = parse_pls("[playlist]\nX-Comment=hello\nFile1=a.mp3\nTitle1=A\n").unwrap();
        assert_eq!(playlist.tracks.len(), 1);
    }

    #[test]
    fn test_wrong_header() {
        let err = parse_pls("#EXTM3U\n").unwrap_err();
        assert!(matches!(
            err,
            PlaylistError::FormatMismatch {
                expected: PlaylistFormat::Pls
            }
        ));
    }
}
