//! Song-library scanning.
//!
//! This module contains the catalog side of the crate:
//! - `AssetKind`, `locate_single_asset` - exactly-one-file-per-type lookup
//! - `AudioProbe` - the audio-duration collaborator boundary
//! - `SongCatalogEntry`, `Catalog` - the typed per-song record and its list
//! - `scan_library` - the per-subdirectory scan with skip-and-warn policy

mod assets;
mod entry;
mod probe;
mod scanner;

pub use assets::*;
pub use entry::*;
pub use probe::*;
pub use scanner::*;
