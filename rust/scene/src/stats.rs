// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Aggregate scene statistics
//!
//! Counters accumulated during a compile pass and published as a single
//! summary object. Area is the sum of per-room bounding-box areas, an
//! intentional approximation that overestimates non-rectangular rooms,
//! rounded to the nearest square meter at publish time.

use serde::Serialize;

/// Summary published after every rebuild
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneStats {
    /// Sum of room bounding-box areas in square meters, rounded
    pub total_area: f64,
    pub total_floors: usize,
    pub total_rooms: usize,
    pub total_walls: usize,
    pub total_windows: usize,
    pub total_doors: usize,
}

impl SceneStats {
    /// Round the accumulated area for publication
    pub fn finalize(mut self) -> Self {
        self.total_area = self.total_area.round();
        self
    }
}
