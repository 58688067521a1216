//! Info command implementation.
//!
//! Prints the detail fields a song-select screen shows: lengths, max BPM,
//! memory segments, and the difficulty-tuning metadata.

use std::path::Path;

use anyhow::{Result, bail};
use memwave_core::scan_library;
use owo_colors::OwoColorize;

use crate::probe::DecoderProbe;

/// Run the info command
pub fn run(root: &Path, song: &str, json: bool) -> Result<()> {
    let catalog = scan_library(root, &DecoderProbe)?;
    let Some(entry) = catalog.find(song) else {
        bail!("song directory `{song}` not found in {}", root.display());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(entry)?);
        return Ok(());
    }

    let meta = &entry.summary.metadata;
    println!("{} // {}", entry.title().bold(), entry.artist());
    if !entry.creator().is_empty() {
        println!("Mapped by {}", entry.creator());
    }
    println!();
    println!("Song length:        {}", entry.song_length_display());
    println!("Map length:         {}", entry.map_length_display());
    println!("Max BPM:            {:.1}", entry.summary.max_bpm);
    println!("Memory segments:    {}", entry.summary.memory_segments);
    println!("HP drain:           {}", display_rate(meta.hp_drain_rate));
    println!(
        "Overall difficulty: {}",
        display_rate(meta.overall_difficulty)
    );
    println!("Scroll speed:       {}", display_rate(meta.approach_rate));
    if !meta.tags.is_empty() {
        println!("Tags:               {}", meta.tags.join(" "));
    }
    println!();
    println!("Map:   {}", entry.map_path.display());
    println!("Audio: {}", entry.audio_path.display());
    println!("Cover: {}", entry.cover_path.display());

    Ok(())
}

fn display_rate(value: Option<f32>) -> String {
    value.map_or_else(|| "-".to_string(), |rate| format!("{rate}"))
}
