// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! 2D profile definitions and triangulation

use crate::error::{Error, Result};
use nalgebra::Point2;

/// Simple 2D profile, outer boundary only (counter-clockwise)
#[derive(Debug, Clone)]
pub struct Profile2D {
    pub outer: Vec<Point2<f64>>,
}

impl Profile2D {
    /// Create a new profile
    pub fn new(outer: Vec<Point2<f64>>) -> Self {
        Self { outer }
    }

    /// Axis-aligned rectangle centered on the X axis, seated at y = 0
    pub fn rectangle(width: f64, height: f64) -> Self {
        let half = width / 2.0;
        Self::new(vec![
            Point2::new(-half, 0.0),
            Point2::new(half, 0.0),
            Point2::new(half, height),
            Point2::new(-half, height),
        ])
    }

    /// Triangulate the profile using earcutr.
    /// Returns triangle indices into `outer`.
    pub fn triangulate(&self) -> Result<Vec<usize>> {
        if self.outer.len() < 3 {
            return Err(Error::InvalidProfile(
                "Profile must have at least 3 vertices".to_string(),
            ));
        }

        let mut vertices = Vec::with_capacity(self.outer.len() * 2);
        for p in &self.outer {
            vertices.push(p.x);
            vertices.push(p.y);
        }

        earcutr::earcut(&vertices, &[], 2)
            .map_err(|e| Error::TriangulationError(format!("{:?}", e)))
    }
}
