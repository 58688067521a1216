//! The `.memw` map format.
//!
//! This module contains the map data model and both parsing passes:
//! - `TimingPoint`, `PlayMode` - tempo/measure boundary markers
//! - `HitEvent`, `HitFlags` - interactive note/mine/hold events
//! - `MapMetadata` - the typed header key-value record
//! - `MapSummary` - the cheap cataloging pass (max BPM, map length, segments)
//! - `parse_map` - the full structural pass used for gameplay loads

mod event;
mod lines;
mod metadata;
mod parser;
mod summary;
mod timing;

pub use event::*;
pub use metadata::*;
pub use parser::*;
pub use summary::*;
pub use timing::*;
