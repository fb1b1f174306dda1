// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Building document entities
//!
//! The shapes mirror the JSON the host supplies: a building is an ordered
//! list of floors, each with rooms, walls and openings. All lengths are
//! millimeters. Parsing is permissive; geometry that turns out to be
//! unusable is skipped later by the compiler, not rejected here.

use crate::error::{Error, Result};
use crate::material::Material;
use serde::{Deserialize, Deserializer};
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Default floor-to-floor height (mm)
pub const DEFAULT_FLOOR_HEIGHT: f64 = 3000.0;
/// Default wall and slab thickness (mm)
pub const DEFAULT_THICKNESS: f64 = 200.0;

/// Root of the input document
#[derive(Debug, Clone, Deserialize)]
pub struct BuildingDocument {
    pub building: Building,
}

impl BuildingDocument {
    /// Parse a document from JSON text.
    ///
    /// A missing `building` key is reported as [`Error::MissingBuilding`]
    /// rather than a generic JSON error, matching the compiler's
    /// structural-shape taxonomy.
    pub fn parse(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        if value.get("building").is_none() {
            return Err(Error::MissingBuilding);
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// Building: ordered floors plus an optional building-level roof
#[derive(Debug, Clone, Deserialize)]
pub struct Building {
    #[serde(default)]
    pub floors: Vec<Floor>,
    #[serde(default)]
    pub roof: Option<Roof>,
}

impl Building {
    /// Relocate a building-level roof onto the floor with the highest
    /// `level`; on a level tie the first such floor wins. At most one
    /// roof per building is meaningful; a roof the floor already
    /// declares is overridden by the building-level one.
    pub fn relocate_roof(&mut self) {
        let Some(roof) = self.roof.take() else {
            return;
        };
        let highest = self
            .floors
            .iter_mut()
            .enumerate()
            .max_by_key(|(index, floor)| {
                (floor.level.unwrap_or(*index as i32), Reverse(*index))
            });
        if let Some((_, floor)) = highest {
            floor.roof = Some(roof);
        } else {
            // No floors to carry it; put it back so the document round-trips
            self.roof = Some(roof);
        }
    }
}

/// One floor of the building
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Floor {
    /// Stacking order; defaults to the floor's array index
    #[serde(default)]
    pub level: Option<i32>,
    /// Floor-to-floor height (mm)
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub material: Option<Material>,
    #[serde(default)]
    pub roof: Option<Roof>,
    #[serde(default)]
    pub rooms: Vec<Room>,
}

impl Floor {
    /// Effective stacking level given the floor's array index
    #[inline]
    pub fn level_or(&self, index: usize) -> i32 {
        self.level.unwrap_or(index as i32)
    }

    /// Floor-to-floor height in millimeters
    #[inline]
    pub fn height_mm(&self) -> f64 {
        self.height.unwrap_or(DEFAULT_FLOOR_HEIGHT)
    }
}

/// A room: named footprint polygon plus its walls
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Room {
    #[serde(default)]
    pub name: String,
    /// Ordered 2D polygon (mm); only its bounding box is consumed
    #[serde(default)]
    pub footprint: Vec<[f64; 2]>,
    /// Per-room slab override
    #[serde(default)]
    pub floor: Option<FloorSlabSpec>,
    #[serde(default)]
    pub walls: Vec<Wall>,
}

impl Room {
    /// A footprint is usable when it has at least 4 points
    #[inline]
    pub fn has_footprint(&self) -> bool {
        self.footprint.len() >= 4
    }
}

/// Per-room floor slab override
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FloorSlabSpec {
    /// Slab thickness (mm)
    #[serde(default)]
    pub thickness: Option<f64>,
    #[serde(default)]
    pub material: Option<Material>,
}

impl FloorSlabSpec {
    #[inline]
    pub fn thickness_mm(&self) -> f64 {
        self.thickness.unwrap_or(DEFAULT_THICKNESS)
    }
}

/// A wall segment with its openings.
///
/// JSON compatibility: the singular `window` key and any additional key
/// matching `window<suffix>` (non-empty suffix, e.g. `window2`,
/// `windowEast`) are folded into the ordered `windows` list - primary
/// window first, then the extras in key order. There is no cardinality
/// limit.
#[derive(Debug, Clone, Default)]
pub struct Wall {
    pub start: Option<[f64; 2]>,
    pub end: Option<[f64; 2]>,
    /// Wall thickness (mm)
    pub thickness: Option<f64>,
    pub material: Option<Material>,
    pub windows: Vec<Opening>,
    pub door: Option<Opening>,
}

impl Wall {
    #[inline]
    pub fn thickness_mm(&self) -> f64 {
        self.thickness.unwrap_or(DEFAULT_THICKNESS)
    }
}

impl<'de> Deserialize<'de> for Wall {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawWall {
            #[serde(default)]
            start: Option<[f64; 2]>,
            #[serde(default)]
            end: Option<[f64; 2]>,
            #[serde(default)]
            thickness: Option<f64>,
            #[serde(default)]
            material: Option<Material>,
            #[serde(default)]
            door: Option<Opening>,
            // BTreeMap keeps extra window keys in deterministic sorted order
            #[serde(flatten)]
            extra: BTreeMap<String, serde_json::Value>,
        }

        let raw = RawWall::deserialize(deserializer)?;
        let mut windows = Vec::new();

        if let Some(value) = raw.extra.get("window") {
            if let Ok(opening) = serde_json::from_value::<Opening>(value.clone()) {
                windows.push(opening);
            }
        }
        for (key, value) in &raw.extra {
            if key.len() > "window".len() && key.starts_with("window") {
                // Fail soft on malformed entries, matching the source's
                // permissiveness for unknown window-like fields
                if let Ok(opening) = serde_json::from_value::<Opening>(value.clone()) {
                    windows.push(opening);
                }
            }
        }

        Ok(Wall {
            start: raw.start,
            end: raw.end,
            thickness: raw.thickness,
            material: raw.material,
            windows,
            door: raw.door,
        })
    }
}

/// A window or door embedded in a wall
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Opening {
    /// Opening width (mm)
    #[serde(default)]
    pub width: Option<f64>,
    /// Opening height (mm)
    #[serde(default)]
    pub height: Option<f64>,
    /// Opening depth (mm)
    #[serde(default)]
    pub depth: Option<f64>,
    /// Offset along the wall from its start (mm), clamped at build time
    #[serde(default)]
    pub position: Option<f64>,
    /// Height above the floor (mm); windows only, doors sit on the floor
    #[serde(default, rename = "verticalPosition")]
    pub vertical_position: Option<f64>,
    #[serde(default)]
    pub material: Option<Material>,
}

impl Opening {
    /// Width in millimeters (default 1000 for both windows and doors)
    #[inline]
    pub fn width_mm(&self) -> f64 {
        self.width.unwrap_or(1000.0)
    }

    /// Window height in millimeters (default 1000)
    #[inline]
    pub fn window_height_mm(&self) -> f64 {
        self.height.unwrap_or(1000.0)
    }

    /// Door height in millimeters (default 2000)
    #[inline]
    pub fn door_height_mm(&self) -> f64 {
        self.height.unwrap_or(2000.0)
    }

    /// Depth in millimeters (default 100)
    #[inline]
    pub fn depth_mm(&self) -> f64 {
        self.depth.unwrap_or(100.0)
    }

    #[inline]
    pub fn position_mm(&self) -> f64 {
        self.position.unwrap_or(0.0)
    }

    #[inline]
    pub fn vertical_position_mm(&self) -> f64 {
        self.vertical_position.unwrap_or(0.0)
    }
}

/// Roof geometry family
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoofKind {
    #[default]
    Gabled,
    Flat,
    Pitched,
}

impl RoofKind {
    /// Permissive parse; unrecognized names fall back to gabled
    pub fn from_name(name: &str) -> Self {
        match name {
            "flat" => RoofKind::Flat,
            "pitched" => RoofKind::Pitched,
            _ => RoofKind::Gabled,
        }
    }
}

/// Roof descriptor shared by all three geometry families
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Roof {
    #[serde(
        default,
        rename = "type",
        deserialize_with = "deserialize_roof_kind"
    )]
    pub kind: RoofKind,
    /// Base roof height (mm); gabled/pitched only
    #[serde(default)]
    pub height: Option<f64>,
    /// Eave overhang beyond the footprint (mm)
    #[serde(default)]
    pub overhang: Option<f64>,
    /// Slope in degrees; gabled/pitched only
    #[serde(default)]
    pub pitch: Option<f64>,
    /// Slab thickness (mm); flat only
    #[serde(default)]
    pub thickness: Option<f64>,
    #[serde(default)]
    pub material: Option<Material>,
}

impl Roof {
    #[inline]
    pub fn height_mm(&self) -> f64 {
        self.height.unwrap_or(1000.0)
    }

    #[inline]
    pub fn overhang_mm(&self) -> f64 {
        self.overhang.unwrap_or(300.0)
    }

    /// Pitch in degrees; the gabled default is steeper than pitched
    #[inline]
    pub fn pitch_deg(&self) -> f64 {
        let default = match self.kind {
            RoofKind::Pitched => 15.0,
            _ => 30.0,
        };
        self.pitch.unwrap_or(default)
    }

    #[inline]
    pub fn thickness_mm(&self) -> f64 {
        self.thickness.unwrap_or(DEFAULT_THICKNESS)
    }
}

fn deserialize_roof_kind<'de, D>(deserializer: D) -> std::result::Result<RoofKind, D::Error>
where
    D: Deserializer<'de>,
{
    let name = Option::<String>::deserialize(deserializer)?;
    Ok(name
        .map(|n| RoofKind::from_name(&n))
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_missing_building() {
        let err = BuildingDocument::parse(r#"{"floors": []}"#).unwrap_err();
        assert!(matches!(err, Error::MissingBuilding));
    }

    #[test]
    fn test_parse_minimal_document() {
        let doc = BuildingDocument::parse(
            r#"{"building": {"floors": [{"rooms": []}]}}"#,
        )
        .unwrap();
        assert_eq!(doc.building.floors.len(), 1);
    }

    #[test]
    fn test_wall_collects_window_suffix_keys() {
        let wall: Wall = serde_json::from_value(serde_json::json!({
            "start": [0, 0],
            "end": [5000, 0],
            "window": { "width": 1500, "position": 500 },
            "window2": { "width": 800, "position": 3000 },
            "windowEast": { "width": 600 },
            "windowless_field": "ignored",
            "door": { "width": 900 }
        }))
        .unwrap();

        // Primary window first, then suffixed keys in sorted order
        assert_eq!(wall.windows.len(), 3);
        assert_eq!(wall.windows[0].width_mm(), 1500.0);
        assert_eq!(wall.windows[1].width_mm(), 800.0);
        assert_eq!(wall.windows[2].width_mm(), 600.0);
        assert!(wall.door.is_some());
    }

    #[test]
    fn test_wall_without_geometry_still_parses() {
        let wall: Wall = serde_json::from_value(serde_json::json!({
            "thickness": 150
        }))
        .unwrap();
        assert!(wall.start.is_none());
        assert!(wall.end.is_none());
        assert_eq!(wall.thickness_mm(), 150.0);
    }

    #[test]
    fn test_roof_kind_fallback() {
        let roof: Roof =
            serde_json::from_value(serde_json::json!({ "type": "mansard" })).unwrap();
        assert_eq!(roof.kind, RoofKind::Gabled);

        let roof: Roof = serde_json::from_value(serde_json::json!({ "type": "flat" })).unwrap();
        assert_eq!(roof.kind, RoofKind::Flat);

        let roof: Roof = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(roof.kind, RoofKind::Gabled);
    }

    #[test]
    fn test_relocate_roof_to_highest_level() {
        let mut building: Building = serde_json::from_value(serde_json::json!({
            "floors": [
                { "level": 0, "rooms": [] },
                { "level": 2, "rooms": [] },
                { "level": 1, "rooms": [] }
            ],
            "roof": { "type": "flat" }
        }))
        .unwrap();

        building.relocate_roof();
        assert!(building.roof.is_none());
        assert!(building.floors[1].roof.is_some());
        assert!(building.floors[0].roof.is_none());
        assert!(building.floors[2].roof.is_none());
    }

    #[test]
    fn test_relocate_roof_tie_picks_first_floor() {
        let mut building: Building = serde_json::from_value(serde_json::json!({
            "floors": [
                { "level": 1, "rooms": [] },
                { "level": 1, "rooms": [] },
                { "level": 0, "rooms": [] }
            ],
            "roof": { "type": "flat" }
        }))
        .unwrap();

        building.relocate_roof();
        assert!(building.floors[0].roof.is_some());
        assert!(building.floors[1].roof.is_none());
    }

    #[test]
    fn test_relocate_roof_defaults_level_to_index() {
        let mut building: Building = serde_json::from_value(serde_json::json!({
            "floors": [
                { "rooms": [] },
                { "rooms": [] }
            ],
            "roof": {}
        }))
        .unwrap();

        building.relocate_roof();
        assert!(building.floors[1].roof.is_some());
    }

    #[test]
    fn test_opening_defaults() {
        let opening = Opening::default();
        assert_eq!(opening.width_mm(), 1000.0);
        assert_eq!(opening.window_height_mm(), 1000.0);
        assert_eq!(opening.door_height_mm(), 2000.0);
        assert_eq!(opening.depth_mm(), 100.0);
        assert_eq!(opening.position_mm(), 0.0);
    }
}
