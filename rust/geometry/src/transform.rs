// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh transforms
//!
//! Transforms are baked into mesh buffers; entities carry world-space
//! geometry rather than a transform hierarchy.

use crate::mesh::Mesh;
use nalgebra::{Matrix4, Point3, Rotation3, Translation3, Vector3};

/// Apply a transformation matrix to a mesh in place
pub fn apply_transform(mesh: &mut Mesh, transform: &Matrix4<f64>) {
    mesh.positions.chunks_exact_mut(3).for_each(|chunk| {
        let point = Point3::new(chunk[0] as f64, chunk[1] as f64, chunk[2] as f64);
        let transformed = transform.transform_point(&point);
        chunk[0] = transformed.x as f32;
        chunk[1] = transformed.y as f32;
        chunk[2] = transformed.z as f32;
    });

    // Normals use the inverse transpose, without translation
    let normal_matrix = transform.try_inverse().unwrap_or(*transform).transpose();
    mesh.normals.chunks_exact_mut(3).for_each(|chunk| {
        let normal = Vector3::new(chunk[0] as f64, chunk[1] as f64, chunk[2] as f64);
        let transformed = (normal_matrix * normal.to_homogeneous()).xyz().normalize();
        chunk[0] = transformed.x as f32;
        chunk[1] = transformed.y as f32;
        chunk[2] = transformed.z as f32;
    });
}

/// Yaw-then-translate matrix for placing plan-aligned solids.
///
/// Maps the local +X axis onto the horizontal plan direction `angle`
/// (radians, `atan2(dy, dx)` of the plan segment, where plan y is world
/// z), then moves the origin to `center`.
pub fn yaw_translation(angle: f64, center: Point3<f64>) -> Matrix4<f64> {
    let rotation = Rotation3::from_axis_angle(&Vector3::y_axis(), -angle);
    Translation3::from(center.coords).to_homogeneous() * rotation.to_homogeneous()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_yaw_translation_maps_x_to_plan_direction() {
        // A wall running along plan +y (world +z)
        let m = yaw_translation(std::f64::consts::FRAC_PI_2, Point3::origin());
        let p = m.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_yaw_translation_translates() {
        let m = yaw_translation(0.0, Point3::new(5.0, 1.5, -2.0));
        let p = m.transform_point(&Point3::origin());
        assert_relative_eq!(p.x, 5.0);
        assert_relative_eq!(p.y, 1.5);
        assert_relative_eq!(p.z, -2.0);
    }

    #[test]
    fn test_apply_transform_rotates_normals() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Point3::origin(), Vector3::x());
        let m = yaw_translation(std::f64::consts::FRAC_PI_2, Point3::origin());
        apply_transform(&mut mesh, &m);
        assert_relative_eq!(mesh.normals[0], 0.0, epsilon = 1e-6);
        assert_relative_eq!(mesh.normals[2], 1.0, epsilon = 1e-6);
    }
}
