// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Loft building document model
//!
//! Declarative description of a building (floors, rooms, walls, openings,
//! roof) in millimeter units, plus the unit/coordinate mapper and the
//! material resolver shared by the scene compiler.

pub mod document;
pub mod error;
pub mod fallback;
pub mod material;
pub mod units;

pub use document::{
    Building, BuildingDocument, Floor, FloorSlabSpec, Opening, Room, Roof, RoofKind, Wall,
    DEFAULT_FLOOR_HEIGHT, DEFAULT_THICKNESS,
};
pub use error::{Error, Result};
pub use fallback::{fallback_document, load_document};
pub use material::{ElementKind, Material, ResolvedMaterial};
pub use units::{mm_to_m, plan_to_world, Bounds2D};
