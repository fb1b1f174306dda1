// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Unit conversion and plan-to-world coordinate mapping
//!
//! Documents carry integer-ish millimeter values; the scene works in
//! meters. The 2D footprint plane (x, y) maps onto the horizontal world
//! plane (x, z), leaving world y for vertical floor stacking.

/// Millimeters per meter, the document's only unit scale
pub const MM_PER_M: f64 = 1000.0;

/// Convert a millimeter scalar to meters
#[inline]
pub fn mm_to_m(value: f64) -> f64 {
    value / MM_PER_M
}

/// Map a 2D plan point (mm) to a world position (m) at the given
/// vertical offset. Plan x stays x, plan y becomes world z.
#[inline]
pub fn plan_to_world(point: [f64; 2], vertical_offset: f64) -> [f64; 3] {
    [mm_to_m(point[0]), vertical_offset, mm_to_m(point[1])]
}

/// Axis-aligned bounding box of a 2D footprint, in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2D {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds2D {
    /// Compute the bounding box of a point set; `None` when empty
    pub fn of(points: &[[f64; 2]]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = Self {
            min_x: first[0],
            min_y: first[1],
            max_x: first[0],
            max_y: first[1],
        };
        for p in &points[1..] {
            bounds.min_x = bounds.min_x.min(p[0]);
            bounds.min_y = bounds.min_y.min(p[1]);
            bounds.max_x = bounds.max_x.max(p[0]);
            bounds.max_y = bounds.max_y.max(p[1]);
        }
        Some(bounds)
    }

    /// Width in meters
    #[inline]
    pub fn width_m(&self) -> f64 {
        mm_to_m(self.max_x - self.min_x)
    }

    /// Depth in meters
    #[inline]
    pub fn depth_m(&self) -> f64 {
        mm_to_m(self.max_y - self.min_y)
    }

    /// Horizontal center in world meters (x, z)
    #[inline]
    pub fn center_m(&self) -> (f64, f64) {
        (
            mm_to_m((self.min_x + self.max_x) / 2.0),
            mm_to_m((self.min_y + self.max_y) / 2.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mm_to_m() {
        assert_relative_eq!(mm_to_m(3000.0), 3.0);
        assert_relative_eq!(mm_to_m(150.0), 0.15);
        assert_relative_eq!(mm_to_m(0.0), 0.0);
    }

    #[test]
    fn test_plan_to_world_maps_y_to_z() {
        let world = plan_to_world([10000.0, 8000.0], 3.0);
        assert_relative_eq!(world[0], 10.0);
        assert_relative_eq!(world[1], 3.0);
        assert_relative_eq!(world[2], 8.0);
    }

    #[test]
    fn test_bounds_of_footprint() {
        let footprint = [[0.0, 0.0], [10000.0, 0.0], [10000.0, 8000.0], [0.0, 8000.0]];
        let bounds = Bounds2D::of(&footprint).unwrap();
        assert_relative_eq!(bounds.width_m(), 10.0);
        assert_relative_eq!(bounds.depth_m(), 8.0);
        let (cx, cz) = bounds.center_m();
        assert_relative_eq!(cx, 5.0);
        assert_relative_eq!(cz, 4.0);
    }

    #[test]
    fn test_bounds_of_empty() {
        assert!(Bounds2D::of(&[]).is_none());
    }
}
