// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Box primitive and vertex-normal recomputation
//!
//! Walls, slabs and openings are all axis-aligned boxes in local space;
//! orientation and placement are baked in afterwards via
//! [`crate::transform::apply_transform`].

use crate::error::{Error, Result};
use crate::mesh::Mesh;
use nalgebra::{Point3, Vector3};

/// Build an axis-aligned box centered at the origin.
///
/// 24 vertices (4 per face) so each face carries its own flat normal.
pub fn box_mesh(width: f64, height: f64, depth: f64) -> Result<Mesh> {
    if width <= 0.0 || height <= 0.0 || depth <= 0.0 {
        return Err(Error::InvalidBox(format!(
            "non-positive dimensions {width} x {height} x {depth}"
        )));
    }

    let hx = width / 2.0;
    let hy = height / 2.0;
    let hz = depth / 2.0;

    // (normal, four corners counter-clockwise seen from outside)
    let faces: [(Vector3<f64>, [Point3<f64>; 4]); 6] = [
        (
            Vector3::z(),
            [
                Point3::new(-hx, -hy, hz),
                Point3::new(hx, -hy, hz),
                Point3::new(hx, hy, hz),
                Point3::new(-hx, hy, hz),
            ],
        ),
        (
            -Vector3::z(),
            [
                Point3::new(hx, -hy, -hz),
                Point3::new(-hx, -hy, -hz),
                Point3::new(-hx, hy, -hz),
                Point3::new(hx, hy, -hz),
            ],
        ),
        (
            Vector3::x(),
            [
                Point3::new(hx, -hy, hz),
                Point3::new(hx, -hy, -hz),
                Point3::new(hx, hy, -hz),
                Point3::new(hx, hy, hz),
            ],
        ),
        (
            -Vector3::x(),
            [
                Point3::new(-hx, -hy, -hz),
                Point3::new(-hx, -hy, hz),
                Point3::new(-hx, hy, hz),
                Point3::new(-hx, hy, -hz),
            ],
        ),
        (
            Vector3::y(),
            [
                Point3::new(-hx, hy, hz),
                Point3::new(hx, hy, hz),
                Point3::new(hx, hy, -hz),
                Point3::new(-hx, hy, -hz),
            ],
        ),
        (
            -Vector3::y(),
            [
                Point3::new(-hx, -hy, -hz),
                Point3::new(hx, -hy, -hz),
                Point3::new(hx, -hy, hz),
                Point3::new(-hx, -hy, hz),
            ],
        ),
    ];

    let mut mesh = Mesh::with_capacity(24, 36);
    for (normal, corners) in &faces {
        let base = mesh.vertex_count() as u32;
        for corner in corners {
            mesh.add_vertex(*corner, *normal);
        }
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base, base + 2, base + 3);
    }

    Ok(mesh)
}

/// Recompute per-vertex normals by accumulating area-weighted face
/// normals. Used by custom surfaces built from raw vertex fans.
pub fn compute_vertex_normals(mesh: &mut Mesh) {
    let vertex_count = mesh.vertex_count();
    if vertex_count == 0 {
        return;
    }

    let mut normals = vec![Vector3::zeros(); vertex_count];

    for tri in mesh.indices.chunks_exact(3) {
        let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);

        let v0 = mesh.position(i0);
        let v1 = mesh.position(i1);
        let v2 = mesh.position(i2);

        // Cross product magnitude weights by triangle area
        let normal = (v1 - v0).cross(&(v2 - v0));
        normals[i0] += normal;
        normals[i1] += normal;
        normals[i2] += normal;
    }

    mesh.normals.clear();
    mesh.normals.reserve(vertex_count * 3);
    for normal in normals {
        let normalized = normal.try_normalize(1e-12).unwrap_or_else(Vector3::y);
        mesh.normals.push(normalized.x as f32);
        mesh.normals.push(normalized.y as f32);
        mesh.normals.push(normalized.z as f32);
    }
}
