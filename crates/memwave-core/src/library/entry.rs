use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::map::{MapSummary, format_length_ms};

/// One song's catalog record: asset paths, audio length, and everything the
/// summary pass derived from its map. Immutable after the scan; the
/// currently-selected marker lives on the owning `Catalog`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongCatalogEntry {
    /// Song directory name, used as the stable catalog key.
    pub name: String,
    pub directory: PathBuf,
    pub map_path: PathBuf,
    pub audio_path: PathBuf,
    pub cover_path: PathBuf,
    pub song_length: Duration,
    pub summary: MapSummary,
}

impl SongCatalogEntry {
    pub fn title(&self) -> &str {
        self.summary.metadata.title.as_deref().unwrap_or(&self.name)
    }

    pub fn artist(&self) -> &str {
        self.summary.metadata.artist.as_deref().unwrap_or("")
    }

    pub fn creator(&self) -> &str {
        self.summary.metadata.creator.as_deref().unwrap_or("")
    }

    /// Audio length as `minutes:seconds`.
    pub fn song_length_display(&self) -> String {
        format_length_ms(self.song_length.as_millis() as i64)
    }

    /// First-to-last hit-event span as `minutes:seconds`.
    pub fn map_length_display(&self) -> String {
        self.summary.map_length_display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MapMetadata;

    fn make_entry() -> SongCatalogEntry {
        SongCatalogEntry {
            name: "TestSong".to_string(),
            directory: PathBuf::from("songs/TestSong"),
            map_path: PathBuf::from("songs/TestSong/map.memw"),
            audio_path: PathBuf::from("songs/TestSong/audio.mp3"),
            cover_path: PathBuf::from("songs/TestSong/cover.png"),
            song_length: Duration::from_secs(187),
            summary: MapSummary {
                metadata: MapMetadata {
                    title: Some("A Song".to_string()),
                    artist: Some("An Artist".to_string()),
                    ..Default::default()
                },
                max_bpm: 30.0,
                map_length_ms: 125_000,
                memory_segments: 4,
            },
        }
    }

    #[test]
    fn test_display_fields() {
        let entry = make_entry();
        assert_eq!(entry.title(), "A Song");
        assert_eq!(entry.artist(), "An Artist");
        assert_eq!(entry.creator(), "");
        assert_eq!(entry.song_length_display(), "3:07");
        assert_eq!(entry.map_length_display(), "2:05");
    }

    #[test]
    fn test_title_falls_back_to_directory_name() {
        let mut entry = make_entry();
        entry.summary.metadata.title = None;
        assert_eq!(entry.title(), "TestSong");
    }
}
