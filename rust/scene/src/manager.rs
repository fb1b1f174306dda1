// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene lifecycle
//!
//! The manager owns the compiled scene and the two global visibility
//! flags. A rebuild is teardown-then-compile: the previous entities,
//! outlines and labels are dropped wholesale before the new document is
//! compiled, so entity count after N rebuilds equals the count after
//! one.

use crate::compile::{compile, CompiledScene};
use loft_model::BuildingDocument;
use tracing::info;

/// Rebuild lifecycle phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuildState {
    #[default]
    Idle,
    Building,
}

/// Owner of the compiled scene between rebuilds
#[derive(Debug, Default)]
pub struct SceneManager {
    scene: CompiledScene,
    outline_visible: bool,
    state: BuildState,
}

impl SceneManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tear down the previous scene and compile `document` in its place.
    ///
    /// Outlines inherit the manager's current visibility flag; labels
    /// always start hidden regardless of their state before the rebuild.
    pub fn rebuild(&mut self, document: BuildingDocument) -> &CompiledScene {
        self.state = BuildState::Building;
        // Wholesale replacement discards every previous entity, outline
        // and label
        self.scene = compile(document, self.outline_visible);
        info!(
            entities = self.scene.entities.len(),
            labels = self.scene.labels.len(),
            skipped = self.scene.skipped,
            "scene rebuilt"
        );
        self.state = BuildState::Idle;
        &self.scene
    }

    /// Flip outline visibility on every entity, and remember the flag
    /// for subsequent rebuilds
    pub fn set_outline_visibility(&mut self, visible: bool) {
        self.outline_visible = visible;
        for entity in &mut self.scene.entities {
            if let Some(outline) = &mut entity.outline {
                outline.visible = visible;
            }
        }
    }

    /// Flip visibility on every room label
    pub fn set_label_visibility(&mut self, visible: bool) {
        for label in &mut self.scene.labels {
            label.visible = visible;
        }
    }

    pub fn scene(&self) -> &CompiledScene {
        &self.scene
    }

    pub fn state(&self) -> BuildState {
        self.state
    }

    pub fn outline_visible(&self) -> bool {
        self.outline_visible
    }

    /// Number of live entities, the figure that must stay flat across
    /// repeated rebuilds
    pub fn live_entity_count(&self) -> usize {
        self.scene.entities.len()
    }
}
