use std::path::Path;
use std::time::Duration;

use crate::error::Result;

/// Audio-duration collaborator boundary.
///
/// The scanner only needs the playable length of a song's audio asset; how
/// that is obtained (a real decoder, a cache, a stub) is the caller's
/// choice, passed in explicitly rather than reached through a global.
pub trait AudioProbe {
    fn duration(&self, path: &Path) -> Result<Duration>;
}

/// Probe reporting the same duration for every asset. Stands in for a real
/// decoder in tests and in offline scans where song length does not matter.
#[derive(Debug, Clone, Copy)]
pub struct FixedDurationProbe(pub Duration);

impl AudioProbe for FixedDurationProbe {
    fn duration(&self, _path: &Path) -> Result<Duration> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_duration_probe() {
        let probe = FixedDurationProbe(Duration::from_secs(187));
        let duration = probe.duration(Path::new("anything.mp3")).unwrap();
        assert_eq!(duration, Duration::from_secs(187));
    }
}
