//! Error types for codec operations.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::identifier::InvalidIdentifier;
use crate::index::IndexError;

/// Result type alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Which text format a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Obj,
    Mtl,
}

impl fmt::Display for TextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextFormat::Obj => f.write_str("an OBJ"),
            TextFormat::Mtl => f.write_str("a MTL"),
        }
    }
}

/// Kind of named definition that may only appear once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionKind {
    Object,
    Material,
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionKind::Object => f.write_str("object"),
            DefinitionKind::Material => f.write_str("material"),
        }
    }
}

/// Which half of a face corner an index belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexComponent {
    Vertex,
    TextureCoordinate,
}

impl fmt::Display for IndexComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexComponent::Vertex => f.write_str("vertex"),
            IndexComponent::TextureCoordinate => f.write_str("texture coordinate"),
        }
    }
}

/// A required attribute that is absent or ambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MissingAttribute {
    #[error("does not have any UV layers")]
    NoUvLayer,

    #[error("has multiple UV layers")]
    MultipleUvLayers,

    #[error("does not have any color layers")]
    NoColorLayer,

    #[error("has multiple color layers")]
    MultipleColorLayers,

    #[error("contains faces without materials")]
    FaceWithoutMaterial,

    #[error("has a UV layer with {found} entries for {expected} face corners")]
    IncompleteUvLayer { expected: usize, found: usize },

    #[error("has a color layer with {found} entries for {expected} face corners")]
    IncompleteColorLayer { expected: usize, found: usize },

    #[error("has face corners without texture coordinates")]
    CornerWithoutTextureCoordinate,
}

/// Geometry the engine format cannot represent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnsupportedGeometry {
    #[error("is not a mesh")]
    NotAMesh,

    #[error("has a non-identity transform")]
    NonIdentityTransform,

    #[error("has modifiers ({})", .0.join(", "))]
    Modifiers(Vec<String>),

    #[error("has a polygon with {corners} corners")]
    DegeneratePolygon { corners: usize },

    #[error("references vertex {index} of {len}")]
    VertexOutOfRange { index: u32, len: usize },

    #[error("has a non-finite value at face corner {corner}")]
    NonFiniteValue { corner: usize },
}

/// Violations of the `newmtl`/`map_Kd` block sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaterialStateError {
    #[error("material \"{material}\" lacks a texture map")]
    LacksTextureMap { material: String },

    #[error("cannot specify a texture map outside of a material")]
    OutsideMaterial,

    #[error("cannot specify multiple texture maps for material \"{material}\"")]
    MultipleTextureMaps { material: String },
}

/// Errors that can occur while encoding or decoding.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A name failed identifier validation.
    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidIdentifier),

    /// An object or material name was defined twice.
    #[error("{kind} \"{name}\" is defined multiple times")]
    DuplicateDefinition { kind: DefinitionKind, name: String },

    /// A face corner index could not be resolved.
    #[error("line {line}: invalid {component} index: {source}")]
    Index {
        line: usize,
        component: IndexComponent,
        #[source]
        source: IndexError,
    },

    /// A required attribute is missing or ambiguous.
    #[error("{context} {problem}")]
    MissingAttribute {
        context: String,
        problem: MissingAttribute,
    },

    /// The host object cannot be written as-is.
    #[error("object \"{object}\" {reason}")]
    UnsupportedGeometry {
        object: String,
        reason: UnsupportedGeometry,
    },

    /// A line matched none of the directive grammars.
    #[error("line {line}: failed to parse \"{text}\" as {format} instruction")]
    MalformedLine {
        format: TextFormat,
        line: usize,
        text: String,
    },

    /// `newmtl`/`map_Kd` sequencing violation.
    #[error("line {line}: {error}")]
    MaterialState {
        line: usize,
        error: MaterialStateError,
    },

    /// `usemtl` named a material no library defined.
    #[error("undefined material \"{name}\"")]
    UndefinedReference { name: String },

    /// A face appeared before any `o` line.
    #[error("line {line}: face outside of object")]
    FaceOutsideObject { line: usize },

    /// Error reading from a file.
    #[error("failed to read {path}: {source}")]
    IoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error writing to a file.
    #[error("failed to write {path}: {source}")]
    IoWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CodecError {
    pub(crate) fn malformed(format: TextFormat, line: usize, text: &str) -> Self {
        CodecError::MalformedLine {
            format,
            line,
            text: text.trim_end().to_string(),
        }
    }

    pub(crate) fn missing(context: impl Into<String>, problem: MissingAttribute) -> Self {
        CodecError::MissingAttribute {
            context: context.into(),
            problem,
        }
    }

    pub(crate) fn unsupported(object: &str, reason: UnsupportedGeometry) -> Self {
        CodecError::UnsupportedGeometry {
            object: object.to_string(),
            reason,
        }
    }
}
