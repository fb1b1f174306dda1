// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Default fallback document
//!
//! Used when the host supplies no document and the fallback file is
//! unreachable: one floor, one room, four walls, one window, one door,
//! gabled roof.

use crate::document::{
    Building, BuildingDocument, Floor, Opening, Room, Roof, RoofKind, Wall,
};
use std::path::Path;
use tracing::warn;

/// Build the minimal one-room fallback structure
pub fn fallback_document() -> BuildingDocument {
    let footprint = vec![[0.0, 0.0], [10000.0, 0.0], [10000.0, 8000.0], [0.0, 8000.0]];

    let window = Opening {
        width: Some(1500.0),
        height: Some(1200.0),
        position: Some(1000.0),
        vertical_position: Some(900.0),
        ..Opening::default()
    };
    let door = Opening {
        width: Some(900.0),
        height: Some(2100.0),
        position: Some(1000.0),
        ..Opening::default()
    };

    let segments: [([f64; 2], [f64; 2]); 4] = [
        ([0.0, 0.0], [10000.0, 0.0]),
        ([10000.0, 0.0], [10000.0, 8000.0]),
        ([10000.0, 8000.0], [0.0, 8000.0]),
        ([0.0, 8000.0], [0.0, 0.0]),
    ];
    let mut walls: Vec<Wall> = segments
        .iter()
        .map(|(start, end)| Wall {
            start: Some(*start),
            end: Some(*end),
            thickness: Some(200.0),
            ..Wall::default()
        })
        .collect();
    walls[0].windows.push(window);
    walls[1].door = Some(door);

    BuildingDocument {
        building: Building {
            floors: vec![Floor {
                level: Some(0),
                height: Some(3000.0),
                rooms: vec![Room {
                    name: "Room".to_string(),
                    footprint,
                    walls,
                    ..Room::default()
                }],
                ..Floor::default()
            }],
            roof: Some(Roof {
                kind: RoofKind::Gabled,
                ..Roof::default()
            }),
        },
    }
}

/// Load a document from a JSON file, falling back to
/// [`fallback_document`] when the file is unreachable or malformed.
pub fn load_document(path: &Path) -> BuildingDocument {
    match std::fs::read_to_string(path) {
        Ok(text) => match BuildingDocument::parse(&text) {
            Ok(document) => document,
            Err(error) => {
                warn!(path = %path.display(), %error, "invalid document, using fallback");
                fallback_document()
            }
        },
        Err(error) => {
            warn!(path = %path.display(), %error, "unreadable document, using fallback");
            fallback_document()
        }
    }
}
