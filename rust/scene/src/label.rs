// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Billboard room labels
//!
//! The compiler emits label descriptors only. Rasterizing the text onto
//! a canvas texture is the renderer's job; here we fix the text, the
//! anchor point and the sprite sizing so every frontend draws the same
//! label.

use nalgebra::Point3;

/// Texture canvas width in pixels
pub const CANVAS_WIDTH: u32 = 512;
/// Texture canvas height in pixels
pub const CANVAS_HEIGHT: u32 = 128;
/// World-space sprite scale, matches the 4:1 canvas aspect
pub const SPRITE_SCALE: [f64; 3] = [8.0, 2.0, 1.0];

/// A camera-facing text sprite anchored at a room's center
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    /// Anchor at the room footprint center, half a storey up
    pub position: Point3<f64>,
    pub scale: [f64; 3],
    /// Backing texture dimensions in pixels
    pub canvas: (u32, u32),
    /// Labels start hidden on every rebuild
    pub visible: bool,
}

impl Label {
    pub fn new(text: impl Into<String>, position: Point3<f64>) -> Self {
        Self {
            text: text.into(),
            position,
            scale: SPRITE_SCALE,
            canvas: (CANVAS_WIDTH, CANVAS_HEIGHT),
            visible: false,
        }
    }
}
