use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::map::lines::{MapLine, Section, classify};
use crate::map::metadata::MapMetadata;
use crate::map::parser::TIMING_POINT_FIELDS;

/// Derived map statistics from the cheap cataloging pass.
///
/// This pass never materializes timing points or hit events; it streams the
/// file once, tracking the maximum raw beat value, the memory-segment
/// markers, and the first/last hit-event offsets. Numeric parse failures
/// yield zero: the derived fields are cosmetic catalog data, not gameplay
/// input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapSummary {
    pub metadata: MapMetadata,
    pub max_bpm: f32,
    pub map_length_ms: i32,
    pub memory_segments: u32,
}

impl MapSummary {
    /// Run the summary pass over a map file.
    pub fn scan<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Run the summary pass over in-memory map text. Infallible: malformed
    /// records degrade to zeroes or are skipped with a warning.
    pub fn parse(content: &str) -> Self {
        let mut metadata = MapMetadata::default();
        let mut section = Section::Header;
        let mut max_raw: i64 = 0;
        let mut memory_segments: u32 = 0;
        let mut start_offset: Option<i64> = None;
        let mut end_offset: i64 = 0;

        for raw in content.lines() {
            match classify(raw) {
                MapLine::Skip => {}
                MapLine::Switch(next) => section = next,
                MapLine::Record(line) => match section {
                    Section::Header => {
                        if let Some((key, value)) = line.split_once(':') {
                            metadata.apply(key.trim(), value.trim());
                        }
                    }
                    Section::TimingPoints => {
                        let fields: Vec<&str> = line.split(',').collect();
                        if fields.len() < TIMING_POINT_FIELDS {
                            warn!("skipping short timing-point record: {line}");
                            continue;
                        }
                        max_raw = max_raw.max(lenient_int(fields[1]));
                        if fields[4] == "1" || fields[4] == "-1" {
                            memory_segments += 1;
                        }
                    }
                    Section::HitEvents => {
                        // Only the offsets matter here: the first body line
                        // starts the map, the last one ends it.
                        let offset = lenient_int(fields_at(line, 1));
                        if start_offset.is_none() {
                            start_offset = Some(offset);
                        }
                        end_offset = offset;
                    }
                },
            }
        }

        let map_length_ms = match start_offset {
            Some(start) => (end_offset - start) as i32,
            None => 0,
        };

        MapSummary {
            metadata,
            max_bpm: max_raw as f32 / 1000.0 * 60.0,
            map_length_ms,
            memory_segments,
        }
    }

    pub fn map_length_display(&self) -> String {
        format_length_ms(self.map_length_ms as i64)
    }
}

/// Second comma-separated field of a record, or empty when absent.
fn fields_at(line: &str, index: usize) -> &str {
    line.split(',').nth(index).unwrap_or("")
}

/// Lossy-tolerant integer parse: failures yield zero.
fn lenient_int(field: &str) -> i64 {
    field.trim().parse().unwrap_or(0)
}

/// Render a millisecond length as `minutes:seconds`, seconds zero-padded.
pub fn format_length_ms(ms: i64) -> String {
    let total_secs = ms.max(0) / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_length_ms() {
        assert_eq!(format_length_ms(0), "0:00");
        assert_eq!(format_length_ms(187_000), "3:07");
        assert_eq!(format_length_ms(60_000), "1:00");
        assert_eq!(format_length_ms(-500), "0:00");
    }

    #[test]
    fn test_lenient_int() {
        assert_eq!(lenient_int("42"), 42);
        assert_eq!(lenient_int(" -7 "), -7);
        assert_eq!(lenient_int("abc"), 0);
        assert_eq!(lenient_int(""), 0);
    }
}
