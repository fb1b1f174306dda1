// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sharp-edge outline extraction
//!
//! Produces the line-art edge set drawn on top of every solid: edges
//! whose adjacent faces meet at more than a threshold angle, plus open
//! boundary edges. Vertices are welded by quantized position first since
//! primitives duplicate corners per face for flat shading.

use crate::mesh::Mesh;
use nalgebra::Vector3;
use rustc_hash::FxHashMap;

/// Default crease threshold, matching the source's 30-degree edge filter
pub const DEFAULT_THRESHOLD_DEG: f64 = 30.0;

const WELD_SCALE: f64 = 1.0e5;

/// Extract outline segments from a mesh.
///
/// Returns flat line-segment data: six floats (two xyz endpoints) per
/// segment, in the same space as `mesh.positions`.
pub fn extract_outline(mesh: &Mesh, threshold_deg: f64) -> Vec<f32> {
    if mesh.is_empty() {
        return Vec::new();
    }

    // Weld duplicated vertices so per-face corners share one edge identity
    let mut keyed: FxHashMap<(i64, i64, i64), u32> = FxHashMap::default();
    let mut canonical = Vec::with_capacity(mesh.vertex_count());
    for i in 0..mesh.vertex_count() {
        let p = mesh.position(i);
        let key = (
            (p.x * WELD_SCALE).round() as i64,
            (p.y * WELD_SCALE).round() as i64,
            (p.z * WELD_SCALE).round() as i64,
        );
        let next = keyed.len() as u32;
        canonical.push(*keyed.entry(key).or_insert(next));
    }

    // Undirected edge -> (one endpoint pair, adjacent face normals)
    let mut edges: FxHashMap<(u32, u32), (usize, usize, Vec<Vector3<f64>>)> =
        FxHashMap::default();

    for tri in mesh.indices.chunks_exact(3) {
        let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let v0 = mesh.position(i0);
        let v1 = mesh.position(i1);
        let v2 = mesh.position(i2);

        let normal = match (v1 - v0).cross(&(v2 - v0)).try_normalize(1e-12) {
            Some(n) => n,
            None => continue, // degenerate triangle
        };

        for (a, b) in [(i0, i1), (i1, i2), (i2, i0)] {
            let (ca, cb) = (canonical[a], canonical[b]);
            if ca == cb {
                continue;
            }
            let key = if ca < cb { (ca, cb) } else { (cb, ca) };
            edges
                .entry(key)
                .or_insert_with(|| (a, b, Vec::new()))
                .2
                .push(normal);
        }
    }

    let cos_threshold = threshold_deg.to_radians().cos();
    let mut segments = Vec::new();

    for (_, (a, b, normals)) in edges {
        let sharp = match normals.len() {
            // Boundary edge: only one face touches it
            1 => true,
            _ => normals
                .iter()
                .enumerate()
                .any(|(i, n)| normals[i + 1..].iter().any(|m| n.dot(m) < cos_threshold)),
        };
        if !sharp {
            continue;
        }

        segments.extend_from_slice(&[
            mesh.positions[a * 3],
            mesh.positions[a * 3 + 1],
            mesh.positions[a * 3 + 2],
            mesh.positions[b * 3],
            mesh.positions[b * 3 + 1],
            mesh.positions[b * 3 + 2],
        ]);
    }

    segments
}
