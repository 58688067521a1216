use serde::{Deserialize, Serialize};

/// The fixed set of recognized header keys. Anything else is ignored.
pub const RECOGNIZED_KEYS: [&str; 12] = [
    "AudioFilename",
    "PreviewTime",
    "Title",
    "Artist",
    "Creator",
    "Difficulty",
    "Source",
    "Tags",
    "LevelID",
    "HPDrainRate",
    "OverallDifficulty",
    "ApproachRate",
];

/// Typed header metadata record.
///
/// Numeric fields parse permissively: an unparseable value leaves the field
/// unset rather than failing the pass. A sloppy header must not knock a
/// song out of the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapMetadata {
    pub audio_filename: Option<String>,
    pub preview_time: Option<i32>,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub creator: Option<String>,
    pub difficulty: Option<String>,
    pub source: Option<String>,
    /// Free-form, space-separated.
    pub tags: Vec<String>,
    pub level_id: Option<i32>,
    pub hp_drain_rate: Option<f32>,
    pub overall_difficulty: Option<f32>,
    pub approach_rate: Option<f32>,
}

impl MapMetadata {
    /// Apply one `Key:Value` header line. Returns whether the key was
    /// recognized.
    pub fn apply(&mut self, key: &str, value: &str) -> bool {
        match key {
            "AudioFilename" => self.audio_filename = Some(value.to_string()),
            "PreviewTime" => self.preview_time = value.parse().ok(),
            "Title" => self.title = Some(value.to_string()),
            "Artist" => self.artist = Some(value.to_string()),
            "Creator" => self.creator = Some(value.to_string()),
            "Difficulty" => self.difficulty = Some(value.to_string()),
            "Source" => self.source = Some(value.to_string()),
            "Tags" => self.tags = value.split_whitespace().map(str::to_string).collect(),
            "LevelID" => self.level_id = value.parse().ok(),
            "HPDrainRate" => self.hp_drain_rate = value.parse().ok(),
            "OverallDifficulty" => self.overall_difficulty = value.parse().ok(),
            "ApproachRate" => self.approach_rate = value.parse().ok(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_recognized_keys() {
        let mut meta = MapMetadata::default();
        assert!(meta.apply("Title", "Test Song"));
        assert!(meta.apply("Artist", "Test Artist"));
        assert!(meta.apply("PreviewTime", "1500"));
        assert!(meta.apply("ApproachRate", "7.5"));

        assert_eq!(meta.title.as_deref(), Some("Test Song"));
        assert_eq!(meta.artist.as_deref(), Some("Test Artist"));
        assert_eq!(meta.preview_time, Some(1500));
        assert_eq!(meta.approach_rate, Some(7.5));
    }

    #[test]
    fn test_apply_unrecognized_key() {
        let mut meta = MapMetadata::default();
        assert!(!meta.apply("StackLeniency", "0.7"));
        assert_eq!(meta, MapMetadata::default());
    }

    #[test]
    fn test_apply_tags_split() {
        let mut meta = MapMetadata::default();
        meta.apply("Tags", "electronic  fast memory");
        assert_eq!(meta.tags, ["electronic", "fast", "memory"]);
    }

    #[test]
    fn test_numeric_parse_is_permissive() {
        let mut meta = MapMetadata::default();
        assert!(meta.apply("PreviewTime", "not-a-number"));
        assert_eq!(meta.preview_time, None);
    }

    #[test]
    fn test_recognized_key_list_matches_apply() {
        for key in RECOGNIZED_KEYS {
            let mut meta = MapMetadata::default();
            assert!(meta.apply(key, "1"), "key {key} should be recognized");
        }
    }
}
