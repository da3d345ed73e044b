//! The built-in pastel palette.
//!
//! A fixed table of named target colors, immutable for the lifetime of the
//! process and safe for unsynchronized concurrent reads.

use crate::color::Hsv;

/// One preset target color.
#[derive(Clone, Copy, Debug)]
pub struct PaletteEntry {
    /// Stable key used in filenames and on the command line.
    pub name: &'static str,
    /// Display label used in captions.
    pub label: &'static str,
    pub hsv: Hsv,
}

pub static PALETTE: [PaletteEntry; 9] = [
    PaletteEntry {
        name: "pastel_cyan",
        label: "Aqua Dream",
        hsv: Hsv { h: 0.50, s: 0.30, v: 0.92 },
    },
    PaletteEntry {
        name: "pastel_pink",
        label: "Soft Blossom",
        hsv: Hsv { h: 0.92, s: 0.25, v: 0.95 },
    },
    PaletteEntry {
        name: "pastel_lavender",
        label: "Mystic Lavender",
        hsv: Hsv { h: 0.75, s: 0.20, v: 0.90 },
    },
    PaletteEntry {
        name: "pastel_mint",
        label: "Fresh Mint",
        hsv: Hsv { h: 0.40, s: 0.25, v: 0.92 },
    },
    PaletteEntry {
        name: "pastel_peach",
        label: "Warm Peach",
        hsv: Hsv { h: 0.08, s: 0.30, v: 0.95 },
    },
    PaletteEntry {
        name: "pastel_lemon",
        label: "Sunny Lemon",
        hsv: Hsv { h: 0.15, s: 0.25, v: 0.95 },
    },
    PaletteEntry {
        name: "pastel_coral",
        label: "Ocean Coral",
        hsv: Hsv { h: 0.02, s: 0.35, v: 0.90 },
    },
    PaletteEntry {
        name: "pastel_sky",
        label: "Sky Blue",
        hsv: Hsv { h: 0.55, s: 0.20, v: 0.95 },
    },
    PaletteEntry {
        name: "deep_blue",
        label: "Ocean Depths",
        hsv: Hsv { h: 0.62, s: 0.48, v: 0.85 },
    },
];

/// Look up a palette entry by its stable key.
pub fn find(name: &str) -> Option<&'static PaletteEntry> {
    PALETTE.iter().find(|entry| entry.name == name)
}
