use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::Result;
use crate::library::assets::{AssetKind, locate_single_asset};
use crate::library::entry::SongCatalogEntry;
use crate::library::probe::AudioProbe;
use crate::map::MapSummary;

/// The scanned song list plus the mutable currently-selected marker.
/// Entries are immutable after the scan.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<SongCatalogEntry>,
    selected: Option<usize>,
}

impl Catalog {
    pub fn entries(&self) -> &[SongCatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry by song directory name.
    pub fn find(&self, name: &str) -> Option<&SongCatalogEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Mark an entry as the current selection. Out-of-range indices clear
    /// nothing and return `None`.
    pub fn select(&mut self, index: usize) -> Option<&SongCatalogEntry> {
        let entry = self.entries.get(index)?;
        self.selected = Some(index);
        Some(entry)
    }

    pub fn selected(&self) -> Option<&SongCatalogEntry> {
        self.entries.get(self.selected?)
    }
}

/// Scan a library root, producing one catalog entry per immediate
/// subdirectory in name order.
///
/// A song directory that fails (missing or ambiguous asset, unreadable map,
/// failed audio probe) is skipped with a warning; one bad folder must not
/// block the rest of the library. Only an unreadable root is an error.
pub fn scan_library<P: AsRef<Path>>(root: P, probe: &dyn AudioProbe) -> Result<Catalog> {
    let root = root.as_ref();
    let mut dirs = Vec::new();
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();

    let mut entries = Vec::new();
    for dir in &dirs {
        match scan_song_dir(dir, probe) {
            Ok(entry) => {
                debug!("cataloged song {}", entry.name);
                entries.push(entry);
            }
            Err(err) => warn!("skipping song directory {}: {err}", dir.display()),
        }
    }

    Ok(Catalog {
        entries,
        selected: None,
    })
}

fn scan_song_dir(dir: &Path, probe: &dyn AudioProbe) -> Result<SongCatalogEntry> {
    let map_path = locate_single_asset(dir, AssetKind::Map)?;
    let audio_path = locate_single_asset(dir, AssetKind::Audio)?;
    let cover_path = locate_single_asset(dir, AssetKind::Cover)?;

    let song_length = probe.duration(&audio_path)?;
    let summary = MapSummary::scan(&map_path)?;

    let name = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(SongCatalogEntry {
        name,
        directory: dir.to_path_buf(),
        map_path,
        audio_path,
        cover_path,
        song_length,
        summary,
    })
}
