use serde::{Deserialize, Serialize};

/// Flags decoded from the third column of a hit-event record.
///
/// The column is an unsigned integer bitfield:
/// bit 0 = note, bit 1 = mine, bit 2 = flash-black, bit 3 = hold,
/// bits 4..8 = color index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitFlags {
    pub is_note: bool,
    pub is_mine: bool,
    pub flash_black: bool,
    pub is_hold: bool,
    pub color: u8,
}

impl HitFlags {
    pub const NOTE: u32 = 1 << 0;
    pub const MINE: u32 = 1 << 1;
    pub const FLASH_BLACK: u32 = 1 << 2;
    pub const HOLD: u32 = 1 << 3;

    const COLOR_SHIFT: u32 = 4;
    const COLOR_MASK: u32 = 0xF;

    pub fn from_raw(raw: u32) -> Self {
        Self {
            is_note: raw & Self::NOTE != 0,
            is_mine: raw & Self::MINE != 0,
            flash_black: raw & Self::FLASH_BLACK != 0,
            is_hold: raw & Self::HOLD != 0,
            color: ((raw >> Self::COLOR_SHIFT) & Self::COLOR_MASK) as u8,
        }
    }

    pub fn to_raw(self) -> u32 {
        let mut raw = 0;
        if self.is_note {
            raw |= Self::NOTE;
        }
        if self.is_mine {
            raw |= Self::MINE;
        }
        if self.flash_black {
            raw |= Self::FLASH_BLACK;
        }
        if self.is_hold {
            raw |= Self::HOLD;
        }
        raw | ((self.color as u32 & Self::COLOR_MASK) << Self::COLOR_SHIFT)
    }
}

/// A single interactive event: a note, mine, or hold at a given offset and
/// lane. The optional tail of the record carries the hold terminus and the
/// color sequence, depending on field count (see the structural parser).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitEvent {
    pub lane: u8,
    pub offset_ms: i32,
    pub flags: HitFlags,
    /// Hold-note terminus; only present on records with five or more fields.
    pub end_offset_ms: Option<i32>,
    /// Color indices for multi-color notes.
    pub color_sequence: Option<Vec<u8>>,
}

impl HitEvent {
    /// Hold length, when the record carried a terminus.
    pub fn hold_duration_ms(&self) -> Option<i32> {
        self.end_offset_ms.map(|end| end - self.offset_ms)
    }
}
