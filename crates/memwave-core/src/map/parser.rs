//! The full structural pass.
//!
//! Unlike the summary pass this materializes every section-body record into
//! a typed value and fails fast on malformed input: a gameplay load must
//! surface a `MapFormat` error rather than hand the session a silently
//! truncated level.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::map::event::{HitEvent, HitFlags};
use crate::map::lines::{MapLine, Section, classify};
use crate::map::metadata::MapMetadata;
use crate::map::timing::{PlayMode, TimingPoint};

/// Field count of a timing-point record.
pub const TIMING_POINT_FIELDS: usize = 5;

/// Minimum field count of a hit-event record.
pub const HIT_EVENT_MIN_FIELDS: usize = 3;

/// Everything the structural pass extracts from one map file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedMap {
    pub metadata: MapMetadata,
    pub timing_points: Vec<TimingPoint>,
    pub hit_events: Vec<HitEvent>,
}

/// Structurally parse a map file.
pub fn parse_map<P: AsRef<Path>>(path: P) -> Result<ParsedMap> {
    let content = fs::read_to_string(path)?;
    parse_map_str(&content)
}

/// Structurally parse in-memory map text. Stateless: the same input always
/// yields the same `ParsedMap`.
pub fn parse_map_str(content: &str) -> Result<ParsedMap> {
    let mut map = ParsedMap::default();
    let mut section = Section::Header;

    for (index, raw) in content.lines().enumerate() {
        let line_no = index + 1;
        match classify(raw) {
            MapLine::Skip => {}
            MapLine::Switch(next) => section = next,
            MapLine::Record(line) => match section {
                Section::Header => {
                    let Some((key, value)) = line.split_once(':') else {
                        return Err(malformed(
                            line_no,
                            format!("expected `Key:Value` or a section header, got `{line}`"),
                        ));
                    };
                    map.metadata.apply(key.trim(), value.trim());
                }
                Section::TimingPoints => {
                    map.timing_points.push(parse_timing_point(line, line_no)?);
                }
                Section::HitEvents => {
                    map.hit_events.push(parse_hit_event(line, line_no)?);
                }
            },
        }
    }

    Ok(map)
}

fn parse_timing_point(line: &str, line_no: usize) -> Result<TimingPoint> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < TIMING_POINT_FIELDS {
        return Err(malformed(
            line_no,
            format!(
                "timing point needs {TIMING_POINT_FIELDS} fields, got {}",
                fields.len()
            ),
        ));
    }

    let raw_mode: i32 = parse_field(fields[4], line_no, "playmode")?;
    let play_mode = PlayMode::from_raw(raw_mode)
        .ok_or_else(|| malformed(line_no, format!("unknown playmode `{raw_mode}`")))?;

    Ok(TimingPoint {
        offset_ms: parse_field(fields[0], line_no, "offset")?,
        ms_per_beat: parse_field(fields[1], line_no, "msPerBeat")?,
        beats_per_measure: parse_field(fields[2], line_no, "beatsPerMeasure")?,
        volume: parse_field(fields[3], line_no, "volume")?,
        play_mode,
    })
}

fn parse_hit_event(line: &str, line_no: usize) -> Result<HitEvent> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < HIT_EVENT_MIN_FIELDS {
        return Err(malformed(
            line_no,
            format!(
                "hit event needs at least {HIT_EVENT_MIN_FIELDS} fields, got {}",
                fields.len()
            ),
        ));
    }

    let flags = HitFlags::from_raw(parse_field(fields[2], line_no, "flags")?);

    // Variable trailing semantics: 3 fields carry no tail, 4 carry a color
    // sequence, 5 or more carry the hold terminus then the color sequence.
    let (end_offset_ms, color_sequence) = match fields.len() {
        HIT_EVENT_MIN_FIELDS => (None, None),
        4 => (None, Some(parse_color_sequence(fields[3], line_no)?)),
        _ => (
            Some(parse_field(fields[3], line_no, "endOffset")?),
            Some(parse_color_sequence(fields[4], line_no)?),
        ),
    };

    Ok(HitEvent {
        lane: parse_field(fields[0], line_no, "lane")?,
        offset_ms: parse_field(fields[1], line_no, "offset")?,
        flags,
        end_offset_ms,
        color_sequence,
    })
}

/// Color sequences nest inside a comma-separated record, so they use `|` as
/// their own delimiter: `1|0|2`.
fn parse_color_sequence(field: &str, line_no: usize) -> Result<Vec<u8>> {
    field
        .split('|')
        .map(|color| parse_field(color.trim(), line_no, "color"))
        .collect()
}

fn parse_field<T: FromStr>(field: &str, line_no: usize, name: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    field
        .parse()
        .map_err(|err| malformed(line_no, format!("bad {name} `{field}`: {err}")))
}

fn malformed(line: usize, message: String) -> Error {
    Error::MapFormat { line, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timing_point_record() {
        let point = parse_timing_point("0,500,4,80,0", 1).unwrap();
        assert_eq!(point.offset_ms, 0);
        assert_eq!(point.ms_per_beat, 500.0);
        assert_eq!(point.beats_per_measure, 4);
        assert_eq!(point.volume, 80);
        assert_eq!(point.play_mode, PlayMode::Ring);
    }

    #[test]
    fn test_parse_timing_point_short_record() {
        let err = parse_timing_point("0,500,4,80", 7).unwrap_err();
        match err {
            Error::MapFormat { line, .. } => assert_eq!(line, 7),
            other => panic!("expected MapFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_timing_point_unknown_playmode() {
        assert!(parse_timing_point("0,500,4,80,3", 1).is_err());
    }

    #[test]
    fn test_parse_hit_event_variable_tail() {
        let bare = parse_hit_event("1,1000,1", 1).unwrap();
        assert_eq!(bare.end_offset_ms, None);
        assert_eq!(bare.color_sequence, None);

        let colored = parse_hit_event("1,1000,1,2|0|1", 1).unwrap();
        assert_eq!(colored.end_offset_ms, None);
        assert_eq!(colored.color_sequence, Some(vec![2, 0, 1]));

        let hold = parse_hit_event("1,1000,9,1500,2", 1).unwrap();
        assert_eq!(hold.end_offset_ms, Some(1500));
        assert_eq!(hold.color_sequence, Some(vec![2]));
        assert!(hold.flags.is_hold);
    }

    #[test]
    fn test_parse_hit_event_bad_number() {
        let err = parse_hit_event("1,abc,1", 12).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("line 12"), "got: {message}");
        assert!(message.contains("offset"), "got: {message}");
    }
}
