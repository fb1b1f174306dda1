// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene entities and their outline children
//!
//! A [`SceneEntity`] is the contract boundary with the external
//! selection/transform subsystem: a tagged, selectable solid mesh that
//! optionally owns one outline edge set. Outlines are excluded from
//! pick-ray targeting by the external picker via their own tag.

use loft_geometry::{extract_outline, outline::DEFAULT_THRESHOLD_DEG, Mesh};
use loft_model::{ElementKind, ResolvedMaterial};
use serde::Serialize;

/// A generated solid with selection metadata and rendering flags
#[derive(Debug, Clone)]
pub struct SceneEntity {
    pub kind: ElementKind,
    pub name: String,
    /// Always true for generated solids; the picker filters on it
    pub selectable: bool,
    /// World-space geometry (transforms are baked in)
    pub mesh: Mesh,
    pub material: ResolvedMaterial,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    pub outline: Option<OutlineEdgeSet>,
}

impl SceneEntity {
    /// Wrap a finished mesh: tag it, attach its outline edge set and set
    /// the shadow flags for its kind (floor slabs only receive).
    pub fn new(
        kind: ElementKind,
        name: String,
        mesh: Mesh,
        material: ResolvedMaterial,
        outline_visible: bool,
    ) -> Self {
        let outline = OutlineEdgeSet::for_mesh(&mesh, kind, outline_visible);
        Self {
            kind,
            name,
            selectable: true,
            mesh,
            material,
            cast_shadow: kind != ElementKind::Floor,
            receive_shadow: true,
            outline: Some(outline),
        }
    }

    /// Selection metadata in the shape the picking collaborator consumes
    pub fn user_data(&self) -> EntityUserData<'_> {
        EntityUserData {
            kind: self.kind,
            selectable: self.selectable,
            name: &self.name,
        }
    }
}

/// Serialized tag carried by every generated solid
#[derive(Debug, Clone, Serialize)]
pub struct EntityUserData<'a> {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub selectable: bool,
    pub name: &'a str,
}

/// Sharp-edge line art attached as a child of one solid
#[derive(Debug, Clone)]
pub struct OutlineEdgeSet {
    /// Line segments, six floats (two xyz endpoints) each
    pub segments: Vec<f32>,
    pub parent_kind: ElementKind,
    /// Mirrors the global outline-visibility flag
    pub visible: bool,
}

impl OutlineEdgeSet {
    /// Extract the edge set of `mesh` at the default 30-degree crease
    /// threshold
    pub fn for_mesh(mesh: &Mesh, parent_kind: ElementKind, visible: bool) -> Self {
        Self {
            segments: extract_outline(mesh, DEFAULT_THRESHOLD_DEG),
            parent_kind,
            visible,
        }
    }

    /// Tag consumed by the picker to exclude outlines from ray targets
    pub fn user_data(&self) -> OutlineUserData {
        OutlineUserData {
            is_outline: true,
            parent_type: self.parent_kind,
        }
    }
}

/// Serialized tag carried by every outline child
#[derive(Debug, Clone, Serialize)]
pub struct OutlineUserData {
    #[serde(rename = "isOutline")]
    pub is_outline: bool,
    #[serde(rename = "parentType")]
    pub parent_type: ElementKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use loft_geometry::box_mesh;
    use loft_model::Material;

    fn sample_entity(kind: ElementKind) -> SceneEntity {
        SceneEntity::new(
            kind,
            format!("{kind}_test"),
            box_mesh(1.0, 1.0, 1.0).unwrap(),
            Material::resolve(None, kind),
            true,
        )
    }

    #[test]
    fn test_entity_user_data_contract() {
        let entity = sample_entity(ElementKind::Wall);
        let json = serde_json::to_value(entity.user_data()).unwrap();
        assert_eq!(json["type"], "wall");
        assert_eq!(json["selectable"], true);
        assert_eq!(json["name"], "wall_test");
    }

    #[test]
    fn test_outline_user_data_contract() {
        let entity = sample_entity(ElementKind::Roof);
        let outline = entity.outline.as_ref().unwrap();
        let json = serde_json::to_value(outline.user_data()).unwrap();
        assert_eq!(json["isOutline"], true);
        assert_eq!(json["parentType"], "roof");
    }

    #[test]
    fn test_floor_slabs_do_not_cast_shadows() {
        let floor = sample_entity(ElementKind::Floor);
        assert!(!floor.cast_shadow);
        assert!(floor.receive_shadow);

        let wall = sample_entity(ElementKind::Wall);
        assert!(wall.cast_shadow);
        assert!(wall.receive_shadow);
    }

    #[test]
    fn test_entities_carry_outline_segments() {
        let entity = sample_entity(ElementKind::Door);
        let outline = entity.outline.as_ref().unwrap();
        assert!(!outline.segments.is_empty());
        assert!(outline.visible);
    }
}
