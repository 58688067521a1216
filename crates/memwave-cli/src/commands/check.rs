//! Check command implementation.
//!
//! Runs the structural pass over one map file. A malformed record fails the
//! command (and the process exit code) with the line number, matching the
//! fail-fast contract a gameplay load relies on.

use std::path::Path;

use anyhow::{Result, bail};
use memwave_core::{MapSummary, parse_map};
use owo_colors::OwoColorize;

/// Run the check command
pub fn run(map: &Path, json: bool) -> Result<()> {
    let parsed = match parse_map(map) {
        Ok(parsed) => parsed,
        Err(err) => {
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "valid": false, "error": err.to_string() })
                );
            } else {
                println!("{} {}", "invalid:".red().bold(), err);
            }
            bail!("{} failed validation", map.display());
        }
    };

    // Summary stats come from the same text, so a valid map reports both views.
    let summary = MapSummary::scan(map)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "valid": true,
                "timing_points": parsed.timing_points.len(),
                "hit_events": parsed.hit_events.len(),
                "max_bpm": summary.max_bpm,
                "map_length_ms": summary.map_length_ms,
                "memory_segments": summary.memory_segments,
            })
        );
        return Ok(());
    }

    println!("{} {}", "valid:".green().bold(), map.display());
    if let Some(title) = &parsed.metadata.title {
        println!("Title:           {title}");
    }
    println!("Timing points:   {}", parsed.timing_points.len());
    println!("Hit events:      {}", parsed.hit_events.len());
    println!("Max BPM:         {:.1}", summary.max_bpm);
    println!("Map length:      {}", summary.map_length_display());
    println!("Memory segments: {}", summary.memory_segments);

    Ok(())
}
