//! OBJ/MTL codec for the engine's restricted asset dialect.
//!
//! The dialect is a strict subset of Wavefront OBJ: every face corner carries
//! a texture coordinate and a vertex color, every material has exactly one
//! `.tga` diffuse map, and all names are lower-case identifiers.
//!
//! - **Export**: [`export_scene`] writes a host scene as an `.obj` plus its
//!   sibling `.mtl`
//! - **Import**: [`import_scene`] reads them back, welding coincident
//!   positions and resolving materials through the host
//! - **Reporting**: [`export_reported`] / [`import_reported`] turn failures
//!   into messages for a [`Reporter`]
//!
//! # Example
//!
//! ```no_run
//! use engine_obj::{import_scene, export_scene, CodecConfig, MemoryScene};
//! use std::path::Path;
//!
//! let config = CodecConfig::default();
//! let mut scene = MemoryScene::new();
//!
//! import_scene(&mut scene, Path::new("level.obj"), &config).unwrap();
//! export_scene(&scene, Path::new("normalized.obj"), &config).unwrap();
//! ```

mod error;
mod text;
mod types;

pub mod config;
pub mod host;
pub mod identifier;
pub mod index;
pub mod io;
pub mod mtl;
pub mod numeric;
pub mod obj;
pub mod scene;
pub mod weld;

// Re-export core types at crate root
pub use error::{
    CodecError, CodecResult, DefinitionKind, IndexComponent, MaterialStateError, MissingAttribute,
    TextFormat, UnsupportedGeometry,
};
pub use types::{Corner, Face, MeshObject, Rgba, DEFAULT_VERTEX_COLOR};

pub use config::CodecConfig;
pub use host::{
    report_outcome, CollectingReporter, HostMaterial, HostMesh, HostObject, HostPolygon, MaterialId,
    Outcome, Reporter, SceneSink, SceneSource, Severity, TracingReporter,
};
pub use identifier::{is_identifier, Identifier, IdentifierRole, InvalidIdentifier};
pub use index::{resolve, IndexError};
pub use io::{
    export_reported, export_scene, import_reported, import_scene, mtl_path_for, DirectoryLibraries,
    ExportSummary, ImportSummary,
};
pub use mtl::{add_texture_material, decode_mtl, encode_mtl, MtlLibrary};
pub use obj::{decode_obj, encode_obj, DecodeStats, EncodeStats, LibraryLoader, LoadedLibrary};
pub use scene::MemoryScene;
pub use weld::{weld_positions, Weld};
