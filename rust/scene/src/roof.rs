// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Roof synthesis
//!
//! One floor gets at most one roof, sized from the bounding box of the
//! concatenated footprints of all its rooms and widened by the eave
//! overhang on every side. The three geometry families differ in entity
//! count: gabled emits two fan meshes, flat and pitched emit one solid
//! each.

use crate::entity::SceneEntity;
use crate::error::{Error, Result};
use loft_geometry::{
    apply_transform, box_mesh, compute_vertex_normals, extrude_profile, yaw_translation, Mesh,
    Point3, Profile2D, Vector3,
};
use loft_model::{mm_to_m, Bounds2D, ElementKind, Material, Roof, RoofKind};

/// Plan placement of a roof: overhang-widened extents and center
#[derive(Debug, Clone, Copy)]
struct RoofPlan {
    width_m: f64,
    depth_m: f64,
    center_x: f64,
    center_z: f64,
}

impl RoofPlan {
    fn of(roof: &Roof, footprint: &[[f64; 2]]) -> Result<Self> {
        let bounds = Bounds2D::of(footprint).ok_or_else(|| {
            Error::RoofInput("roof requested on a floor with no footprint points".into())
        })?;
        let overhang_m = mm_to_m(roof.overhang_mm());
        let (center_x, center_z) = bounds.center_m();
        Ok(Self {
            width_m: bounds.width_m() + 2.0 * overhang_m,
            depth_m: bounds.depth_m() + 2.0 * overhang_m,
            center_x,
            center_z,
        })
    }
}

/// Synthesize the roof entities of one floor.
///
/// `footprint` is the concatenation of the floor's room footprints and
/// `base_m` the world height of the floor's ceiling plane. Unknown roof
/// type names were already folded to gabled during parsing.
pub fn synthesize_roof(
    roof: &Roof,
    footprint: &[[f64; 2]],
    base_m: f64,
    outline_visible: bool,
) -> Result<Vec<SceneEntity>> {
    let plan = RoofPlan::of(roof, footprint)?;
    let material = Material::resolve(roof.material.as_ref(), ElementKind::Roof);

    match roof.kind {
        RoofKind::Gabled => {
            let apex_m =
                mm_to_m(roof.height_mm()) * roof.pitch_deg().to_radians().tan()
                    + mm_to_m(roof.height_mm());
            let front = gabled_fan(&plan, apex_m, base_m, false);
            let back = gabled_fan(&plan, apex_m, base_m, true);
            Ok(vec![
                SceneEntity::new(
                    ElementKind::Roof,
                    "Roof_Gabled_Front".into(),
                    front,
                    material,
                    outline_visible,
                ),
                SceneEntity::new(
                    ElementKind::Roof,
                    "Roof_Gabled_Back".into(),
                    back,
                    material,
                    outline_visible,
                ),
            ])
        }
        RoofKind::Flat => {
            let thickness_m = mm_to_m(roof.thickness_mm());
            let mut mesh = box_mesh(plan.width_m, thickness_m, plan.depth_m)?;
            let center = Point3::new(
                plan.center_x,
                base_m + thickness_m / 2.0,
                plan.center_z,
            );
            apply_transform(&mut mesh, &yaw_translation(0.0, center));
            Ok(vec![SceneEntity::new(
                ElementKind::Roof,
                "Roof_Flat".into(),
                mesh,
                material,
                outline_visible,
            )])
        }
        RoofKind::Pitched => {
            let rise_m = mm_to_m(roof.height_mm()) * roof.pitch_deg().to_radians().tan();
            let profile = Profile2D::rectangle(plan.width_m, rise_m);
            // Ridge-less wedge slab: the profile sweeps horizontally
            // across the footprint depth
            let transform = yaw_translation(
                0.0,
                Point3::new(plan.center_x, base_m, plan.center_z - plan.depth_m / 2.0),
            );
            let mesh = extrude_profile(&profile, plan.depth_m, Some(transform))?;
            Ok(vec![SceneEntity::new(
                ElementKind::Roof,
                "Roof_Pitched".into(),
                mesh,
                material,
                outline_visible,
            )])
        }
    }
}

/// One gabled half: a fan of four triangles from the eave rectangle to
/// the apex. The back half winds the other way so both faces of the
/// roof shell are front-facing from outside.
fn gabled_fan(plan: &RoofPlan, apex_m: f64, base_m: f64, reversed: bool) -> Mesh {
    let half_w = plan.width_m / 2.0;
    let half_d = plan.depth_m / 2.0;
    let corners = [
        Point3::new(-half_w, 0.0, -half_d),
        Point3::new(half_w, 0.0, -half_d),
        Point3::new(half_w, 0.0, half_d),
        Point3::new(-half_w, 0.0, half_d),
        Point3::new(0.0, apex_m, 0.0),
    ];

    let mut mesh = Mesh::with_capacity(corners.len(), 12);
    for corner in corners {
        mesh.add_vertex(corner, Vector3::zeros());
    }
    for i in 0..4u32 {
        let next = (i + 1) % 4;
        if reversed {
            mesh.add_triangle(i, 4, next);
        } else {
            mesh.add_triangle(i, next, 4);
        }
    }
    compute_vertex_normals(&mut mesh);

    let center = Point3::new(plan.center_x, base_m, plan.center_z);
    apply_transform(&mut mesh, &yaw_translation(0.0, center));
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const FOOTPRINT: [[f64; 2]; 4] = [
        [0.0, 0.0],
        [10000.0, 0.0],
        [10000.0, 8000.0],
        [0.0, 8000.0],
    ];

    fn roof_of(kind: RoofKind) -> Roof {
        Roof {
            kind,
            ..Default::default()
        }
    }

    #[test]
    fn test_gabled_emits_two_fans() {
        let entities =
            synthesize_roof(&roof_of(RoofKind::Gabled), &FOOTPRINT, 3.0, false).unwrap();
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].name, "Roof_Gabled_Front");
        assert_eq!(entities[1].name, "Roof_Gabled_Back");
        assert_eq!(entities[0].mesh.triangle_count(), 4);

        // Apex: default 1 m height, 30 degree pitch
        let (_, max) = entities[0].mesh.bounds();
        let expected = 1.0 * 30.0f64.to_radians().tan() + 1.0;
        assert_relative_eq!(max.y as f64, 3.0 + expected, epsilon = 1e-5);
    }

    #[test]
    fn test_flat_emits_one_slab_above_ceiling() {
        let entities =
            synthesize_roof(&roof_of(RoofKind::Flat), &FOOTPRINT, 3.0, false).unwrap();
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].name, "Roof_Flat");

        let (min, max) = entities[0].mesh.bounds();
        assert_relative_eq!(min.y, 3.0, epsilon = 1e-5);
        assert_relative_eq!(max.y, 3.2, epsilon = 1e-5);
        // 10 m footprint plus 0.3 m overhang on both sides
        assert_relative_eq!(max.x - min.x, 10.6, epsilon = 1e-5);
        assert_relative_eq!(max.z - min.z, 8.6, epsilon = 1e-5);
    }

    #[test]
    fn test_pitched_emits_one_wedge() {
        let entities =
            synthesize_roof(&roof_of(RoofKind::Pitched), &FOOTPRINT, 3.0, false).unwrap();
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].name, "Roof_Pitched");

        let (min, max) = entities[0].mesh.bounds();
        let rise = 1.0 * 15.0f64.to_radians().tan();
        assert_relative_eq!(min.y, 3.0, epsilon = 1e-5);
        assert_relative_eq!(max.y as f64, 3.0 + rise, epsilon = 1e-5);
        assert_relative_eq!(max.z - min.z, 8.6, epsilon = 1e-5);
    }

    #[test]
    fn test_empty_footprint_is_an_error() {
        let err = synthesize_roof(&roof_of(RoofKind::Gabled), &[], 3.0, false).unwrap_err();
        assert!(matches!(err, Error::RoofInput(_)));
    }
}
