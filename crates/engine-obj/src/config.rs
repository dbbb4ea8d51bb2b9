//! Codec configuration.

use crate::types::{Rgba, DEFAULT_VERTEX_COLOR};

/// Name of the material the host creates for its annotation tool.
pub const ANNOTATION_MATERIAL: &str = "Dots Stroke";

/// Settings shared by export and import.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "config",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct CodecConfig {
    /// Host materials that are never written to the MTL file.
    pub skip_materials: Vec<String>,

    /// Color assigned to `v` lines that omit their color components.
    pub default_color: Rgba,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            skip_materials: vec![ANNOTATION_MATERIAL.to_string()],
            default_color: DEFAULT_VERTEX_COLOR,
        }
    }
}

impl CodecConfig {
    /// Whether export should leave `name` out of the MTL file.
    pub fn skips_material(&self, name: &str) -> bool {
        self.skip_materials.iter().any(|s| s == name)
    }
}

#[cfg(feature = "config")]
impl CodecConfig {
    /// Parse a configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Serialize the configuration to TOML text.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
