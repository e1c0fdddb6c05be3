use serde::{Deserialize, Serialize};

/// Light or dark rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl From<bool> for ColorMode {
    fn from(dark: bool) -> Self {
        if dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }
}

/// A color with a variant per mode, as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub light: &'static str,
    pub dark: &'static str,
}

impl ColorPair {
    pub const fn get(&self, mode: ColorMode) -> &'static str {
        match mode {
            ColorMode::Light => self.light,
            ColorMode::Dark => self.dark,
        }
    }
}

pub const BLUE: ColorPair = ColorPair { light: "#2563eb", dark: "#60a5fa" };
pub const PURPLE: ColorPair = ColorPair { light: "#9333ea", dark: "#c084fc" };

/// Fallback palette for branches outside the fixed table.
pub const PALETTE: [ColorPair; 6] = [
    ColorPair { light: "#16a34a", dark: "#4ade80" }, // green
    ColorPair { light: "#ea580c", dark: "#fb923c" }, // orange
    ColorPair { light: "#db2777", dark: "#f472b6" }, // pink
    ColorPair { light: "#ca8a04", dark: "#facc15" }, // yellow
    ColorPair { light: "#0891b2", dark: "#22d3ee" }, // cyan
    ColorPair { light: "#7c3aed", dark: "#a78bfa" }, // violet
];

fn fixed_color(name_lower: &str) -> Option<ColorPair> {
    match name_lower {
        "main" | "master" => Some(BLUE),
        "develop" | "development" => Some(PURPLE),
        _ => None,
    }
}

/// 32-bit string hash over UTF-16 code units: `h = c + ((h << 5) - h)`.
///
/// Case-sensitive, so `foo` and `Foo` hash differently.
pub fn branch_hash(name: &str) -> i32 {
    name.encode_utf16().fold(0i32, |hash, unit| {
        (unit as i32).wrapping_add((hash << 5).wrapping_sub(hash))
    })
}

pub fn palette_index(name: &str) -> usize {
    branch_hash(name).unsigned_abs() as usize % PALETTE.len()
}

/// Deterministic display color for a branch.
pub fn branch_color(name: &str, mode: ColorMode) -> &'static str {
    let pair = fixed_color(&name.to_lowercase()).unwrap_or(PALETTE[palette_index(name)]);
    pair.get(mode)
}
