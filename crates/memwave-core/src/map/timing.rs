use serde::{Deserialize, Serialize};
use strum::{EnumString, FromRepr, IntoStaticStr};

/// Per-timing-point gameplay style selector.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    EnumString,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum PlayMode {
    #[strum(serialize = "ring")]
    Ring = 0,
    #[strum(serialize = "simon-says")]
    SimonSays = 1,
}

impl PlayMode {
    /// Decode the raw playmode column. `1` and `-1` both mark a simon-says
    /// timing point; the sign only matters to the memory-segment counter in
    /// the summary pass.
    pub fn from_raw(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Ring),
            1 | -1 => Some(Self::SimonSays),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for PlayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A tempo/measure boundary marker. File order is significant: each point
/// governs playback from its offset until the next point's offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingPoint {
    pub offset_ms: i32,
    pub ms_per_beat: f32,
    pub beats_per_measure: i32,
    pub volume: i32,
    pub play_mode: PlayMode,
}
