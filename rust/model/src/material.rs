// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Material resolution with cascading per-element defaults
//!
//! Documents may attach an optional `material` object to most elements.
//! Resolution is permissive: a malformed hex color falls back to the
//! element default instead of raising.

use serde::{Deserialize, Serialize};

/// Element categories produced by the scene compiler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Floor,
    Wall,
    Window,
    Door,
    Roof,
}

impl ElementKind {
    /// Default color for elements of this kind
    pub fn default_color(&self) -> u32 {
        match self {
            ElementKind::Floor => 0x999999,
            ElementKind::Wall => 0xcccccc,
            ElementKind::Window => 0x88ccff,
            ElementKind::Door | ElementKind::Roof => 0x8b4513,
        }
    }

    /// Default opacity for elements of this kind
    pub fn default_opacity(&self) -> f32 {
        match self {
            ElementKind::Floor | ElementKind::Wall => 1.0,
            ElementKind::Window => 0.7,
            ElementKind::Door => 0.75,
            ElementKind::Roof => 0.75,
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ElementKind::Floor => "floor",
            ElementKind::Wall => "wall",
            ElementKind::Window => "window",
            ElementKind::Door => "door",
            ElementKind::Roof => "roof",
        };
        f.write_str(name)
    }
}

/// Optional material descriptor as it appears in the document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Hex color string, "#RRGGBB"
    pub color: Option<String>,
    /// Opacity in 0-1
    pub opacity: Option<f64>,
}

impl Material {
    /// Resolve against the defaults for `kind`
    pub fn resolve(material: Option<&Material>, kind: ElementKind) -> ResolvedMaterial {
        let color = material
            .and_then(|m| m.color.as_deref())
            .and_then(parse_hex_color)
            .unwrap_or_else(|| kind.default_color());
        let opacity = material
            .and_then(|m| m.opacity)
            .map(|o| o as f32)
            .unwrap_or_else(|| kind.default_opacity());
        ResolvedMaterial { color, opacity }
    }
}

/// Concrete color/opacity pair attached to every scene entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedMaterial {
    /// Packed 0xRRGGBB color
    pub color: u32,
    /// Opacity in 0-1; below 1.0 the renderer treats the solid as transparent
    pub opacity: f32,
}

/// Parse a "#RRGGBB" string; `None` for anything that does not parse
fn parse_hex_color(value: &str) -> Option<u32> {
    let digits = value.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}
