//! Scan command implementation.
//!
//! Walks the library root and prints one catalog line per song, or the JSON
//! serialization of the entries with `--json`.

use std::path::Path;

use anyhow::Result;
use memwave_core::scan_library;
use owo_colors::OwoColorize;
use tracing::info;

use crate::probe::DecoderProbe;

/// Run the scan command
pub fn run(root: &Path, json: bool) -> Result<()> {
    info!("scanning song library {}", root.display());
    let catalog = scan_library(root, &DecoderProbe)?;

    if json {
        println!("{}", serde_json::to_string_pretty(catalog.entries())?);
        return Ok(());
    }

    if catalog.is_empty() {
        println!("No songs found under {}", root.display());
        return Ok(());
    }

    println!("{} songs in {}", catalog.len(), root.display());
    println!();
    for entry in catalog.entries() {
        println!(
            "{}  {} // {}",
            entry.name.bold(),
            entry.title(),
            entry.artist()
        );
        println!(
            "    song {}  map {}  max {:.1} BPM  {} memory segments",
            entry.song_length_display(),
            entry.map_length_display(),
            entry.summary.max_bpm,
            entry.summary.memory_segments
        );
    }

    Ok(())
}
