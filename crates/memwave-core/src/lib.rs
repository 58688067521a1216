//! Song-library scanning and `.memw` map parsing.
//!
//! Two loosely coupled halves:
//! - `library` walks a songs directory (one subdirectory per song) and builds
//!   a catalog entry per song from its map, audio, and cover assets.
//! - `map` parses the line-oriented `.memw` map format, either as a cheap
//!   summary pass (catalog metadata) or as a full structural pass
//!   (timing points and hit events for a gameplay session).

pub mod error;
pub mod library;
pub mod map;
pub mod session;

pub use error::{Error, Result};
pub use library::{
    AssetKind, AudioProbe, Catalog, FixedDurationProbe, SongCatalogEntry, locate_single_asset,
    scan_library,
};
pub use map::{
    HitEvent, HitFlags, MapMetadata, MapSummary, ParsedMap, PlayMode, TimingPoint,
    format_length_ms, parse_map, parse_map_str,
};
pub use session::GameplaySession;
