// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for scene construction
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building individual scene elements.
///
/// Nothing here is fatal to a compile pass: the compiler logs the error,
/// skips the malformed sub-element and continues with the rest of the
/// building.
#[derive(Error, Debug)]
pub enum Error {
    #[error("structural shape: {0}")]
    StructuralShape(String),

    #[error("roof input: {0}")]
    RoofInput(String),

    #[error("geometry: {0}")]
    Geometry(#[from] loft_geometry::Error),
}
