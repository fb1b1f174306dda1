// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Loft scene compiler
//!
//! Turns a declarative building document into a renderable scene: tagged
//! selectable solids, outline edge sets, room labels and aggregate
//! statistics. Compilation is a single synchronous pass; every document
//! change triggers a full teardown and rebuild via [`SceneManager`].

pub mod builders;
pub mod compile;
pub mod entity;
pub mod error;
pub mod label;
pub mod manager;
pub mod roof;
pub mod stats;

pub use compile::{compile, CompiledScene};
pub use entity::{OutlineEdgeSet, SceneEntity};
pub use error::{Error, Result};
pub use label::Label;
pub use manager::{BuildState, SceneManager};
pub use stats::SceneStats;

// Re-exported so hosts can consume the contract types from one crate
pub use loft_model::{ElementKind, ResolvedMaterial};
