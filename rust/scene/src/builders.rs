// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element builders
//!
//! One function per structural element family: floor slab, wall segment,
//! embedded opening. Builders take document entities plus placement
//! context and return finished [`SceneEntity`] values with world-space
//! geometry baked in. They report unusable input as errors; the compiler
//! decides whether to skip or abort (it always skips).

use crate::entity::SceneEntity;
use crate::error::{Error, Result};
use loft_geometry::{apply_transform, box_mesh, yaw_translation, Point3};
use loft_model::{mm_to_m, Bounds2D, ElementKind, Material, Opening, Room, Wall};

/// Placement frame of one wall segment in plan space (mm)
#[derive(Debug, Clone, Copy)]
pub struct WallFrame {
    pub start: [f64; 2],
    pub end: [f64; 2],
    pub length_mm: f64,
    /// Plan heading, `atan2(dy, dx)` of the segment
    pub angle: f64,
}

impl WallFrame {
    /// Derive the frame of a wall; `None` when an endpoint is missing or
    /// the segment has zero length
    pub fn of(wall: &Wall) -> Option<Self> {
        let start = wall.start?;
        let end = wall.end?;
        let dx = end[0] - start[0];
        let dy = end[1] - start[1];
        let length_mm = (dx * dx + dy * dy).sqrt();
        if length_mm <= 0.0 {
            return None;
        }
        Some(Self {
            start,
            end,
            length_mm,
            angle: dy.atan2(dx),
        })
    }

    #[inline]
    pub fn length_m(&self) -> f64 {
        mm_to_m(self.length_mm)
    }

    /// Plan point (mm) at parameter `t` in [0, 1] along the segment
    #[inline]
    pub fn point_along(&self, t: f64) -> [f64; 2] {
        [
            self.start[0] + (self.end[0] - self.start[0]) * t,
            self.start[1] + (self.end[1] - self.start[1]) * t,
        ]
    }
}

/// Build a room's floor slab from its footprint bounding box.
///
/// Returns the entity together with the slab's plan area in square
/// meters, which the compiler accumulates into the total-area statistic.
pub fn build_floor_slab(
    room: &Room,
    floor_material: Option<&Material>,
    name: String,
    offset_m: f64,
    outline_visible: bool,
) -> Result<(SceneEntity, f64)> {
    let bounds = Bounds2D::of(&room.footprint).ok_or_else(|| {
        Error::StructuralShape(format!("room '{}' has an empty footprint", room.name))
    })?;

    let width_m = bounds.width_m();
    let depth_m = bounds.depth_m();
    let thickness_m = mm_to_m(
        room.floor
            .as_ref()
            .map(|slab| slab.thickness_mm())
            .unwrap_or(loft_model::DEFAULT_THICKNESS),
    );

    let mut mesh = box_mesh(width_m, thickness_m, depth_m)?;
    let (cx, cz) = bounds.center_m();
    // Slab center sits on the floor plane
    let transform = yaw_translation(0.0, Point3::new(cx, offset_m, cz));
    apply_transform(&mut mesh, &transform);

    let material = room
        .floor
        .as_ref()
        .and_then(|slab| slab.material.as_ref())
        .or(floor_material);
    let resolved = Material::resolve(material, ElementKind::Floor);

    let entity = SceneEntity::new(ElementKind::Floor, name, mesh, resolved, outline_visible);
    Ok((entity, width_m * depth_m))
}

/// Build one wall segment: a box spanning the full floor height, yawed
/// onto the plan heading at the segment midpoint.
pub fn build_wall(
    wall: &Wall,
    frame: &WallFrame,
    name: String,
    offset_m: f64,
    floor_height_mm: f64,
    outline_visible: bool,
) -> Result<SceneEntity> {
    let height_m = mm_to_m(floor_height_mm);
    let thickness_m = mm_to_m(wall.thickness_mm());

    let mut mesh = box_mesh(frame.length_m(), height_m, thickness_m)?;
    let mid = frame.point_along(0.5);
    let center = Point3::new(mm_to_m(mid[0]), offset_m + height_m / 2.0, mm_to_m(mid[1]));
    apply_transform(&mut mesh, &yaw_translation(frame.angle, center));

    let resolved = Material::resolve(wall.material.as_ref(), ElementKind::Wall);
    Ok(SceneEntity::new(
        ElementKind::Wall,
        name,
        mesh,
        resolved,
        outline_visible,
    ))
}

/// Build a window or door embedded in its host wall.
///
/// The opening's offset along the wall is clamped to
/// `[0, length - width]` before interpolating; the mesh center lands at
/// the clamped point. On a wall shorter than the opening the clamp pins
/// it to the start. Doors sit on the floor plane, windows float at
/// their sill height.
pub fn build_opening(
    opening: &Opening,
    kind: ElementKind,
    frame: &WallFrame,
    name: String,
    offset_m: f64,
    outline_visible: bool,
) -> Result<SceneEntity> {
    let width_m = mm_to_m(opening.width_mm());
    let height_m = mm_to_m(match kind {
        ElementKind::Door => opening.door_height_mm(),
        _ => opening.window_height_mm(),
    });
    let depth_m = mm_to_m(opening.depth_mm());

    let length_m = frame.length_m();
    let clamped_m = mm_to_m(opening.position_mm())
        .min(length_m - width_m)
        .max(0.0);
    let plan = frame.point_along(clamped_m / length_m);

    let center_y = match kind {
        ElementKind::Door => offset_m + height_m / 2.0,
        _ => offset_m + mm_to_m(opening.vertical_position_mm()) + height_m / 2.0,
    };
    let center = Point3::new(mm_to_m(plan[0]), center_y, mm_to_m(plan[1]));

    let mut mesh = box_mesh(width_m, height_m, depth_m)?;
    apply_transform(&mut mesh, &yaw_translation(frame.angle, center));

    let resolved = Material::resolve(opening.material.as_ref(), kind);
    Ok(SceneEntity::new(kind, name, mesh, resolved, outline_visible))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn frame(start: [f64; 2], end: [f64; 2]) -> WallFrame {
        WallFrame::of(&Wall {
            start: Some(start),
            end: Some(end),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_wall_frame_rejects_degenerate_segments() {
        assert!(WallFrame::of(&Wall::default()).is_none());
        assert!(WallFrame::of(&Wall {
            start: Some([1000.0, 1000.0]),
            end: Some([1000.0, 1000.0]),
            ..Default::default()
        })
        .is_none());
    }

    #[test]
    fn test_wall_frame_length_and_angle() {
        let f = frame([0.0, 0.0], [3000.0, 4000.0]);
        assert_relative_eq!(f.length_m(), 5.0);
        assert_relative_eq!(f.angle, (4.0f64 / 3.0).atan());
    }

    #[test]
    fn test_wall_spans_floor_height_at_midpoint() {
        let wall = Wall {
            start: Some([0.0, 0.0]),
            end: Some([10000.0, 0.0]),
            ..Default::default()
        };
        let f = WallFrame::of(&wall).unwrap();
        let entity =
            build_wall(&wall, &f, "Wall_0_Room".into(), 3.0, 3000.0, false).unwrap();

        let (min, max) = entity.mesh.bounds();
        assert_relative_eq!(min.y, 3.0, epsilon = 1e-6);
        assert_relative_eq!(max.y, 6.0, epsilon = 1e-6);
        assert_relative_eq!(min.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(max.x, 10.0, epsilon = 1e-6);
    }

    #[test]
    fn test_opening_center_lands_at_declared_position() {
        let f = frame([0.0, 0.0], [5000.0, 0.0]);
        let opening = Opening {
            width: Some(1000.0),
            position: Some(1000.0),
            ..Default::default()
        };
        let entity = build_opening(
            &opening,
            ElementKind::Window,
            &f,
            "Window_0_Room".into(),
            0.0,
            false,
        )
        .unwrap();

        // Mesh center interpolated at position / length
        let (min, max) = entity.mesh.bounds();
        assert_relative_eq!((min.x + max.x) / 2.0, 1.0, epsilon = 1e-6);
        assert_relative_eq!(min.x, 0.5, epsilon = 1e-6);
        assert_relative_eq!(max.x, 1.5, epsilon = 1e-6);
    }

    #[test]
    fn test_opening_position_clamps_to_wall_end() {
        let f = frame([0.0, 0.0], [5000.0, 0.0]);
        let opening = Opening {
            width: Some(1000.0),
            position: Some(20000.0),
            ..Default::default()
        };
        let entity = build_opening(
            &opening,
            ElementKind::Window,
            &f,
            "Window_0_Room".into(),
            0.0,
            false,
        )
        .unwrap();

        // Clamped to length - width: centered at 4 m on the 5 m wall
        let (min, max) = entity.mesh.bounds();
        assert_relative_eq!(min.x, 3.5, epsilon = 1e-6);
        assert_relative_eq!(max.x, 4.5, epsilon = 1e-6);
    }

    #[test]
    fn test_opening_position_clamps_to_wall_start() {
        let f = frame([0.0, 0.0], [800.0, 0.0]);
        let opening = Opening {
            width: Some(1000.0),
            position: Some(-500.0),
            ..Default::default()
        };
        let entity = build_opening(
            &opening,
            ElementKind::Door,
            &f,
            "Door_0_Room".into(),
            0.0,
            false,
        )
        .unwrap();

        // Wall shorter than the opening: centered on the wall start
        let (min, max) = entity.mesh.bounds();
        assert_relative_eq!((min.x + max.x) / 2.0, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_door_sits_on_floor_window_floats() {
        let f = frame([0.0, 0.0], [5000.0, 0.0]);
        let door = build_opening(
            &Opening::default(),
            ElementKind::Door,
            &f,
            "Door_0_Room".into(),
            3.0,
            false,
        )
        .unwrap();
        let (min, max) = door.mesh.bounds();
        assert_relative_eq!(min.y, 3.0, epsilon = 1e-6);
        assert_relative_eq!(max.y, 5.0, epsilon = 1e-6);

        let window = build_opening(
            &Opening {
                vertical_position: Some(900.0),
                ..Default::default()
            },
            ElementKind::Window,
            &f,
            "Window_0_Room".into(),
            3.0,
            false,
        )
        .unwrap();
        let (min, max) = window.mesh.bounds();
        assert_relative_eq!(min.y, 3.9, epsilon = 1e-6);
        assert_relative_eq!(max.y, 4.9, epsilon = 1e-6);
    }

    #[test]
    fn test_floor_slab_reports_bounding_box_area() {
        let room = Room {
            name: "Studio".into(),
            footprint: vec![
                [0.0, 0.0],
                [10000.0, 0.0],
                [10000.0, 8000.0],
                [0.0, 8000.0],
            ],
            ..Default::default()
        };
        let (entity, area) =
            build_floor_slab(&room, None, "Floor_Studio".into(), 0.0, false).unwrap();
        assert_relative_eq!(area, 80.0);
        assert_eq!(entity.kind, ElementKind::Floor);

        let (min, max) = entity.mesh.bounds();
        assert_relative_eq!(min.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(max.x, 10.0, epsilon = 1e-6);
        assert_relative_eq!(min.z, 0.0, epsilon = 1e-6);
        assert_relative_eq!(max.z, 8.0, epsilon = 1e-6);
    }

    #[test]
    fn test_floor_slab_rejects_empty_footprint() {
        let room = Room::default();
        let err = build_floor_slab(&room, None, "Floor_".into(), 0.0, false).unwrap_err();
        assert!(matches!(err, Error::StructuralShape(_)));
    }
}
