// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Loft geometry kernel
//!
//! Triangle meshes, earcutr-based profile extrusion, box primitives and
//! sharp-edge outline extraction for the building scene compiler.

pub mod error;
pub mod extrusion;
pub mod mesh;
pub mod outline;
pub mod primitives;
pub mod profile;
pub mod transform;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix4, Point2, Point3, Vector3};

pub use error::{Error, Result};
pub use extrusion::extrude_profile;
pub use mesh::Mesh;
pub use outline::extract_outline;
pub use primitives::{box_mesh, compute_vertex_normals};
pub use profile::Profile2D;
pub use transform::{apply_transform, yaw_translation};
