//! Identifier validation for object, material and texture names.
//!
//! The engine only accepts names matching `^[a-z_][a-z_0-9]*$`. Every name
//! that crosses the codec boundary goes through [`Identifier::new`].

use std::fmt;
use std::path::Path;

use thiserror::Error;

/// What a validated name is used for. Only affects error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierRole {
    Object,
    Material,
    Texture,
    Library,
}

impl IdentifierRole {
    fn describe(self) -> &'static str {
        match self {
            IdentifierRole::Object => "object names",
            IdentifierRole::Material => "material names",
            IdentifierRole::Texture => "texture file names",
            IdentifierRole::Library => "material library file names",
        }
    }
}

/// A name that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "{} should be lower case, start with a letter or underscore, followed by only letters, digits and/or underscores (\"{name}\")",
    .role.describe()
)]
pub struct InvalidIdentifier {
    pub role: IdentifierRole,
    pub name: String,
}

/// A validated engine identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// Validate `name` for the given role.
    pub fn new(name: &str, role: IdentifierRole) -> Result<Self, InvalidIdentifier> {
        if is_identifier(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(InvalidIdentifier {
                role,
                name: name.to_string(),
            })
        }
    }

    /// Validate the file stem of a texture path (extension stripped).
    pub fn from_texture_path(path: &Path) -> Result<Self, InvalidIdentifier> {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(&stem, IdentifierRole::Texture)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Check `name` against `^[a-z_][a-z_0-9]*$`.
pub fn is_identifier(name: &str) -> bool {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_lowercase() || b == b'_' => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}
