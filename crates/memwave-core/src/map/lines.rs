//! Shared line grammar for both parsing passes.
//!
//! A `.memw` file is line-oriented: comment/blank lines, two literal section
//! headers, `Key:Value` metadata lines before the first header, and
//! comma-separated body records inside a section.

pub(crate) const TIMING_POINTS_HEADER: &str = "[TimingPoints]";
pub(crate) const HIT_EVENTS_HEADER: &str = "[HitEvents]";

/// Parser mode. Starts in `Header`; section headers are mutually exclusive
/// and last-seen wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    Header,
    TimingPoints,
    HitEvents,
}

pub(crate) enum MapLine<'a> {
    /// Blank after trim, or a `/` comment.
    Skip,
    Switch(Section),
    Record(&'a str),
}

pub(crate) fn classify(raw: &str) -> MapLine<'_> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('/') {
        return MapLine::Skip;
    }
    match line {
        TIMING_POINTS_HEADER => MapLine::Switch(Section::TimingPoints),
        HIT_EVENTS_HEADER => MapLine::Switch(Section::HitEvents),
        _ => MapLine::Record(line),
    }
}
