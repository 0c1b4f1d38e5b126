//! Tag Color Resolver
//!
//! Maps a tag name to a palette colour. Related names ("creative", "art")
//! share a hue through the keyword table; everything else falls back to a
//! character-code checksum so the same name always gets the same colour.

use crate::domain::TagColor;

struct PaletteColor {
    name: &'static str,
    bg: &'static str,
    text: &'static str,
}

impl From<&PaletteColor> for TagColor {
    fn from(color: &PaletteColor) -> Self {
        TagColor::new(color.name, color.bg, color.text)
    }
}

const BLUE: PaletteColor = PaletteColor { name: "blue", bg: "bg-blue-100", text: "text-blue-800" };
const GREEN: PaletteColor = PaletteColor { name: "green", bg: "bg-green-100", text: "text-green-800" };
const PURPLE: PaletteColor = PaletteColor { name: "purple", bg: "bg-purple-100", text: "text-purple-800" };
const YELLOW: PaletteColor = PaletteColor { name: "yellow", bg: "bg-yellow-100", text: "text-yellow-800" };
const RED: PaletteColor = PaletteColor { name: "red", bg: "bg-red-100", text: "text-red-800" };
const INDIGO: PaletteColor = PaletteColor { name: "indigo", bg: "bg-indigo-100", text: "text-indigo-800" };
const PINK: PaletteColor = PaletteColor { name: "pink", bg: "bg-pink-100", text: "text-pink-800" };
const ORANGE: PaletteColor = PaletteColor { name: "orange", bg: "bg-orange-100", text: "text-orange-800" };
const TEAL: PaletteColor = PaletteColor { name: "teal", bg: "bg-teal-100", text: "text-teal-800" };
const GRAY: PaletteColor = PaletteColor { name: "gray", bg: "bg-gray-100", text: "text-gray-800" };

const PALETTE: [&PaletteColor; 10] = [
    &BLUE, &GREEN, &PURPLE, &YELLOW, &RED, &INDIGO, &PINK, &ORANGE, &TEAL, &GRAY,
];

/// Checked in order; the first keyword contained in the name wins
const KEYWORD_COLORS: &[(&str, &PaletteColor)] = &[
    ("creative", &PURPLE),
    ("art", &PURPLE),
    ("design", &PINK),
    ("story", &PINK),
    ("code", &BLUE),
    ("program", &BLUE),
    ("develop", &BLUE),
    ("tech", &INDIGO),
    ("data", &INDIGO),
    ("business", &GREEN),
    ("finance", &GREEN),
    ("market", &ORANGE),
    ("sales", &ORANGE),
    ("writ", &YELLOW),
    ("content", &YELLOW),
    ("research", &TEAL),
    ("science", &TEAL),
    ("learn", &TEAL),
    ("education", &TEAL),
    ("urgent", &RED),
    ("important", &RED),
];

/// All palette colours, in checksum order
pub fn palette() -> Vec<TagColor> {
    PALETTE.iter().map(|color| TagColor::from(*color)).collect()
}

pub fn resolve_tag_color(name: &str) -> TagColor {
    let lower = name.to_lowercase();

    if let Some((_, color)) = KEYWORD_COLORS.iter().find(|(keyword, _)| lower.contains(keyword)) {
        return TagColor::from(*color);
    }

    let sum: u64 = lower.chars().map(u64::from).sum();
    let index = (sum % PALETTE.len() as u64) as usize;
    TagColor::from(PALETTE[index])
}
