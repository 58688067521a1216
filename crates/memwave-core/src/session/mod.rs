use std::path::Path;

use crate::error::Result;
use crate::map::{HitEvent, TimingPoint, parse_map};

/// Caller-owned gameplay-session structure: the two ordered sequences the
/// game host drives real-time playback and scoring from.
///
/// Loads are batch, not streaming - an entire level is parsed before
/// gameplay starts, and a failed parse leaves the session untouched rather
/// than partially populated.
#[derive(Debug, Clone, Default)]
pub struct GameplaySession {
    pub timing_points: Vec<TimingPoint>,
    pub hit_events: Vec<HitEvent>,
}

impl GameplaySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Structurally parse `path` and append its sequences to this session.
    pub fn load_map<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let parsed = parse_map(path)?;
        self.timing_points.extend(parsed.timing_points);
        self.hit_events.extend(parsed.hit_events);
        Ok(())
    }

    /// Reset between songs.
    pub fn clear(&mut self) {
        self.timing_points.clear();
        self.hit_events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.timing_points.is_empty() && self.hit_events.is_empty()
    }

    /// The timing point governing `offset_ms`: the last one at or before it
    /// in file order.
    pub fn timing_point_at(&self, offset_ms: i32) -> Option<&TimingPoint> {
        self.timing_points
            .iter()
            .rev()
            .find(|point| point.offset_ms <= offset_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::PlayMode;
    use std::fs;
    use tempfile::TempDir;

    const MAP: &str = "\
Title:Session Test
[TimingPoints]
0,500,4,80,0
8000,400,4,80,1
[HitEvents]
1,1000,1
2,2000,9,2500,0
";

    fn write_map(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_map() {
        let dir = TempDir::new().unwrap();
        let path = write_map(&dir, "song.memw", MAP);

        let mut session = GameplaySession::new();
        session.load_map(&path).unwrap();

        assert_eq!(session.timing_points.len(), 2);
        assert_eq!(session.hit_events.len(), 2);
        assert_eq!(session.hit_events[1].end_offset_ms, Some(2500));
    }

    #[test]
    fn test_failed_load_leaves_session_untouched() {
        let dir = TempDir::new().unwrap();
        let good = write_map(&dir, "good.memw", MAP);
        let bad = write_map(&dir, "bad.memw", "[TimingPoints]\n0,oops,4,80,0\n");

        let mut session = GameplaySession::new();
        session.load_map(&good).unwrap();
        assert!(session.load_map(&bad).is_err());

        assert_eq!(session.timing_points.len(), 2);
        assert_eq!(session.hit_events.len(), 2);
    }

    #[test]
    fn test_clear() {
        let dir = TempDir::new().unwrap();
        let path = write_map(&dir, "song.memw", MAP);

        let mut session = GameplaySession::new();
        session.load_map(&path).unwrap();
        session.clear();
        assert!(session.is_empty());
    }

    #[test]
    fn test_timing_point_at() {
        let dir = TempDir::new().unwrap();
        let path = write_map(&dir, "song.memw", MAP);

        let mut session = GameplaySession::new();
        session.load_map(&path).unwrap();

        assert!(session.timing_point_at(-1).is_none());
        assert_eq!(session.timing_point_at(0).unwrap().play_mode, PlayMode::Ring);
        assert_eq!(session.timing_point_at(7999).unwrap().offset_ms, 0);
        assert_eq!(
            session.timing_point_at(8000).unwrap().play_mode,
            PlayMode::SimonSays
        );
    }
}
