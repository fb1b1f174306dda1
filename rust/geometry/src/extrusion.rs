// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Extrusion - converting 2D profiles to 3D meshes
//!
//! The profile lies in the XY plane and is extruded along +Z. In the
//! scene's Y-up world this leaves the extrusion axis horizontal, so the
//! single-slope roof needs nothing more than a translation.

use crate::error::{Error, Result};
use crate::mesh::Mesh;
use crate::profile::Profile2D;
use crate::transform::apply_transform;
use nalgebra::{Matrix4, Point2, Point3, Vector3};

/// Extrude a 2D profile along the Z axis
pub fn extrude_profile(
    profile: &Profile2D,
    depth: f64,
    transform: Option<Matrix4<f64>>,
) -> Result<Mesh> {
    if depth <= 0.0 {
        return Err(Error::InvalidExtrusion(
            "Depth must be positive".to_string(),
        ));
    }

    let cap_indices = profile.triangulate()?;

    let mut mesh = Mesh::with_capacity(
        profile.outer.len() * 2 + profile.outer.len() * 4,
        cap_indices.len() * 2 + profile.outer.len() * 6,
    );

    create_cap(profile, &cap_indices, 0.0, Vector3::new(0.0, 0.0, -1.0), &mut mesh);
    create_cap(profile, &cap_indices, depth, Vector3::new(0.0, 0.0, 1.0), &mut mesh);
    create_side_walls(&profile.outer, depth, &mut mesh);

    if let Some(mat) = transform {
        apply_transform(&mut mesh, &mat);
    }

    Ok(mesh)
}

/// Create a cap (top or bottom) from the profile triangulation
fn create_cap(
    profile: &Profile2D,
    cap_indices: &[usize],
    z: f64,
    normal: Vector3<f64>,
    mesh: &mut Mesh,
) {
    let base_index = mesh.vertex_count() as u32;

    for point in &profile.outer {
        mesh.add_vertex(Point3::new(point.x, point.y, z), normal);
    }

    for tri in cap_indices.chunks_exact(3) {
        let i0 = base_index + tri[0] as u32;
        let i1 = base_index + tri[1] as u32;
        let i2 = base_index + tri[2] as u32;

        // Reverse winding for the bottom cap
        if z == 0.0 {
            mesh.add_triangle(i0, i2, i1);
        } else {
            mesh.add_triangle(i0, i1, i2);
        }
    }
}

/// Create quad side walls along the profile boundary
fn create_side_walls(boundary: &[Point2<f64>], depth: f64, mesh: &mut Mesh) {
    let base_index = mesh.vertex_count() as u32;
    let mut quad_count = 0u32;

    for i in 0..boundary.len() {
        let j = (i + 1) % boundary.len();

        let p0 = &boundary[i];
        let p1 = &boundary[j];

        // try_normalize skips degenerate edges (duplicate consecutive points)
        let edge = Vector3::new(p1.x - p0.x, p1.y - p0.y, 0.0);
        let normal = match Vector3::new(-edge.y, edge.x, 0.0).try_normalize(1e-10) {
            Some(n) => n,
            None => continue,
        };

        let idx = base_index + quad_count * 4;
        mesh.add_vertex(Point3::new(p0.x, p0.y, 0.0), normal);
        mesh.add_vertex(Point3::new(p1.x, p1.y, 0.0), normal);
        mesh.add_vertex(Point3::new(p1.x, p1.y, depth), normal);
        mesh.add_vertex(Point3::new(p0.x, p0.y, depth), normal);

        mesh.add_triangle(idx, idx + 1, idx + 2);
        mesh.add_triangle(idx, idx + 2, idx + 3);

        quad_count += 1;
    }
}
