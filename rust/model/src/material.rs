// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Material associations carried on model objects.

/// Material associated with an object.
///
/// The conversion engine derives scene appearances from these; a missing
/// association falls back to the engine's unlit default.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Material {
    pub name: String,
    /// Diffuse RGB color, each channel in [0, 1].
    pub diffuse: [f32; 3],
    /// Optional texture path, possibly relative; resolved against the
    /// mapping's base context when appearances are derived.
    pub texture: Option<String>,
}

impl Material {
    pub fn new(name: impl Into<String>, diffuse: [f32; 3]) -> Self {
        Self {
            name: name.into(),
            diffuse,
            texture: None,
        }
    }
}
