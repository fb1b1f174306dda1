// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The scene compiler
//!
//! A single pass over the document produces everything downstream: the
//! tagged solids, their outline children, the room labels and the
//! aggregate statistics. Compilation is pure with respect to its inputs
//! and never aborts: unusable elements are skipped with a warning and
//! the rest of the scene still builds.

use crate::builders::{build_floor_slab, build_opening, build_wall, WallFrame};
use crate::entity::SceneEntity;
use crate::label::Label;
use crate::roof::synthesize_roof;
use crate::stats::SceneStats;
use loft_geometry::Point3;
use loft_model::{mm_to_m, BuildingDocument, ElementKind, Floor, Room};
use tracing::warn;

/// Everything one compile pass produces
#[derive(Debug, Clone, Default)]
pub struct CompiledScene {
    pub entities: Vec<SceneEntity>,
    pub labels: Vec<Label>,
    pub stats: SceneStats,
    /// Elements present in the document but skipped as unbuildable
    pub skipped: usize,
}

impl CompiledScene {
    /// Count of outline edge sets across all entities
    pub fn outline_count(&self) -> usize {
        self.entities
            .iter()
            .filter(|entity| entity.outline.is_some())
            .count()
    }
}

/// Compile a building document into a renderable scene.
///
/// Floors stack at `level * height`; each room contributes a slab, a
/// label and its walls with embedded openings; a floor-level roof (or
/// the building-level roof relocated to the highest floor) caps the
/// stack. Counters for floors, rooms and walls reflect the document;
/// window and door counters reflect what was actually built.
pub fn compile(mut document: BuildingDocument, outline_visible: bool) -> CompiledScene {
    document.building.relocate_roof();

    let mut scene = CompiledScene::default();
    scene.stats.total_floors = document.building.floors.len();

    for (floor_index, floor) in document.building.floors.iter().enumerate() {
        compile_floor(&mut scene, floor, floor_index, outline_visible);
    }

    scene.stats = std::mem::take(&mut scene.stats).finalize();
    scene
}

fn compile_floor(
    scene: &mut CompiledScene,
    floor: &Floor,
    floor_index: usize,
    outline_visible: bool,
) {
    let height_m = mm_to_m(floor.height_mm());
    let offset_m = f64::from(floor.level_or(floor_index)) * height_m;

    scene.stats.total_rooms += floor.rooms.len();
    for (room_index, room) in floor.rooms.iter().enumerate() {
        compile_room(
            scene,
            floor,
            room,
            room_index,
            offset_m,
            height_m,
            outline_visible,
        );
    }

    if let Some(roof) = &floor.roof {
        let footprint: Vec<[f64; 2]> = floor
            .rooms
            .iter()
            .flat_map(|room| room.footprint.iter().copied())
            .collect();
        match synthesize_roof(roof, &footprint, offset_m + height_m, outline_visible) {
            Ok(entities) => scene.entities.extend(entities),
            Err(error) => {
                warn!(floor = floor_index, %error, "skipping roof");
                scene.skipped += 1;
            }
        }
    }
}

fn compile_room(
    scene: &mut CompiledScene,
    floor: &Floor,
    room: &Room,
    room_index: usize,
    offset_m: f64,
    height_m: f64,
    outline_visible: bool,
) {
    if room.has_footprint() {
        match build_floor_slab(
            room,
            floor.material.as_ref(),
            format!("Floor_{}", room.name),
            offset_m,
            outline_visible,
        ) {
            Ok((entity, area)) => {
                // Label anchored at the room center, half a storey up
                if let Some(bounds) = loft_model::Bounds2D::of(&room.footprint) {
                    let (cx, cz) = bounds.center_m();
                    let text = if room.name.is_empty() {
                        format!("Room {}", room_index + 1)
                    } else {
                        room.name.clone()
                    };
                    scene.labels.push(Label::new(
                        text,
                        Point3::new(cx, offset_m + height_m / 2.0, cz),
                    ));
                }
                scene.stats.total_area += area;
                scene.entities.push(entity);
            }
            Err(error) => {
                warn!(room = %room.name, %error, "skipping floor slab");
                scene.skipped += 1;
            }
        }
    }

    scene.stats.total_walls += room.walls.len();
    for (wall_index, wall) in room.walls.iter().enumerate() {
        let Some(frame) = WallFrame::of(wall) else {
            warn!(
                room = %room.name,
                wall = wall_index,
                "skipping wall without a usable start/end segment"
            );
            scene.skipped += 1;
            continue;
        };

        match build_wall(
            wall,
            &frame,
            format!("Wall_{}_{}", wall_index, room.name),
            offset_m,
            floor.height_mm(),
            outline_visible,
        ) {
            Ok(entity) => scene.entities.push(entity),
            Err(error) => {
                warn!(room = %room.name, wall = wall_index, %error, "skipping wall");
                scene.skipped += 1;
                continue;
            }
        }

        for window in &wall.windows {
            match build_opening(
                window,
                ElementKind::Window,
                &frame,
                format!("Window_{}_{}", wall_index, room.name),
                offset_m,
                outline_visible,
            ) {
                Ok(entity) => {
                    scene.stats.total_windows += 1;
                    scene.entities.push(entity);
                }
                Err(error) => {
                    warn!(room = %room.name, wall = wall_index, %error, "skipping window");
                    scene.skipped += 1;
                }
            }
        }

        if let Some(door) = &wall.door {
            match build_opening(
                door,
                ElementKind::Door,
                &frame,
                format!("Door_{}_{}", wall_index, room.name),
                offset_m,
                outline_visible,
            ) {
                Ok(entity) => {
                    scene.stats.total_doors += 1;
                    scene.entities.push(entity);
                }
                Err(error) => {
                    warn!(room = %room.name, wall = wall_index, %error, "skipping door");
                    scene.skipped += 1;
                }
            }
        }
    }
}
