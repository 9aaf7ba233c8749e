// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Appearance derivation and the ambient "current appearance" slot.
//!
//! The current appearance propagates *forward* through the recursion:
//! each object builder installs its own appearance before descending and
//! never restores the previous one, so representation geometry inherits
//! the nearest preceding object's material rather than a lexically
//! scoped one. Installing a new appearance drops the previous `Arc`,
//! which frees it once no completed shape still references it.

use std::sync::Arc;

use ifc_scenemap_model::Material;

/// Appearance paired with geometry in a shape node.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    pub name: String,
    /// Diffuse RGB color, each channel in [0, 1].
    pub diffuse: [f32; 3],
    /// Fully resolved texture URL, if the source material carried one.
    pub texture_url: Option<String>,
}

impl Appearance {
    /// Default unlit-friendly appearance used when an object has no
    /// usable material association.
    pub fn unlit_default() -> Self {
        Self {
            name: String::new(),
            diffuse: [0.8, 0.8, 0.8],
            texture_url: None,
        }
    }

    /// Derive an appearance from a material association, resolving a
    /// relative texture path against the base context.
    pub fn from_material(material: &Material, base_context: &str) -> Self {
        let texture_url = material
            .texture
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(|t| resolve_resource(base_context, t));
        Self {
            name: material.name.clone(),
            diffuse: material.diffuse,
            texture_url,
        }
    }
}

/// The single mutable "current appearance" slot visible to all geometry
/// item builders during a build.
#[derive(Debug, Clone)]
pub struct AmbientAppearance {
    current: Arc<Appearance>,
}

impl AmbientAppearance {
    /// Start a build with the unlit default installed.
    pub fn new() -> Self {
        Self {
            current: Arc::new(Appearance::unlit_default()),
        }
    }

    /// Replace the current appearance. The previous `Arc` is released
    /// here and freed once the shapes built under it are gone.
    pub fn install(&mut self, appearance: Appearance) {
        self.current = Arc::new(appearance);
    }

    /// The appearance active right now; shapes clone this handle.
    pub fn current(&self) -> Arc<Appearance> {
        Arc::clone(&self.current)
    }
}

impl Default for AmbientAppearance {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a possibly relative resource reference against the base
/// context. Absolute references (scheme or absolute path) pass through.
fn resolve_resource(base_context: &str, reference: &str) -> String {
    let is_absolute = reference.contains("://") || reference.starts_with('/');
    if is_absolute || base_context.is_empty() {
        return reference.to_string();
    }
    if base_context.ends_with('/') {
        format!("{base_context}{reference}")
    } else {
        format!("{base_context}/{reference}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_from_material_with_relative_texture() {
        let mut material = Material::new("Concrete", [0.6, 0.6, 0.58]);
        material.texture = Some("textures/concrete.png".to_string());

        let appearance = Appearance::from_material(&material, "https://example.org/assets");
        assert_eq!(appearance.name, "Concrete");
        assert_eq!(
            appearance.texture_url.as_deref(),
            Some("https://example.org/assets/textures/concrete.png")
        );
    }

    #[test]
    fn absolute_texture_passes_through() {
        let mut material = Material::new("Steel", [0.4, 0.4, 0.45]);
        material.texture = Some("https://cdn.example.org/steel.png".to_string());

        let appearance = Appearance::from_material(&material, "https://example.org/assets");
        assert_eq!(
            appearance.texture_url.as_deref(),
            Some("https://cdn.example.org/steel.png")
        );
    }

    #[test]
    fn install_replaces_current() {
        let mut ambient = AmbientAppearance::new();
        let before = ambient.current();
        ambient.install(Appearance::from_material(
            &Material::new("Brick", [0.7, 0.3, 0.2]),
            "",
        ));
        let after = ambient.current();
        assert_ne!(before.name, after.name);
        assert_eq!(after.name, "Brick");
    }
}
