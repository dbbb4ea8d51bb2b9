//! MTL material library encoding and decoding.
//!
//! The dialect is one `newmtl <name>` followed by exactly one
//! `map_Kd <path>.tga` per material. `Ns`, `Ka`, `Ks`, `Ke`, `Ni`, `d` and
//! `illum` are accepted and ignored when they carry arguments; anything else
//! is an error.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::CodecConfig;
use crate::error::{CodecError, CodecResult, DefinitionKind, MaterialStateError, TextFormat};
use crate::host::{SceneSink, SceneSource};
use crate::identifier::{Identifier, IdentifierRole};
use crate::text::{directive, strip_comment};

/// Directives that carry no information for the engine.
const IGNORED_DIRECTIVES: [&str; 7] = ["Ns", "Ka", "Ks", "Ke", "Ni", "d", "illum"];

/// One `newmtl`/`map_Kd` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialEntry {
    pub name: Identifier,

    /// Texture path as written, relative to the library's directory.
    pub texture: PathBuf,
}

/// A decoded material library, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MtlLibrary {
    pub entries: Vec<MaterialEntry>,
}

impl MtlLibrary {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find an entry by material name.
    pub fn get(&self, name: &str) -> Option<&MaterialEntry> {
        self.entries.iter().find(|e| e.name.as_str() == name)
    }

    /// Resolve every entry to a host material, textures taken relative to
    /// `texture_root`. Returns `(name, handle)` pairs in file order.
    pub fn bind<S>(&self, sink: &mut S, texture_root: &Path) -> Vec<(Identifier, S::Material)>
    where
        S: SceneSink + ?Sized,
    {
        self.entries
            .iter()
            .map(|entry| {
                let texture = texture_root.join(&entry.texture);
                debug!("Binding material '{}' to {:?}", entry.name, texture);
                let handle = sink.resolve_or_create_material(&entry.name, &texture);
                (entry.name.clone(), handle)
            })
            .collect()
    }
}

/// State of the block currently being read.
#[derive(Debug)]
enum BlockState {
    /// No `newmtl` seen yet.
    Idle,
    /// `newmtl` seen, waiting for its `map_Kd`.
    AwaitingTexture(Identifier),
    /// The last block received its texture.
    Complete(Identifier),
}

/// Decode MTL text into a material library.
pub fn decode_mtl(text: &str) -> CodecResult<MtlLibrary> {
    let mut library = MtlLibrary::default();
    let mut state = BlockState::Idle;
    let mut line_count = 0;

    for (number, raw) in text.lines().enumerate() {
        let line_number = number + 1;
        line_count = line_number;

        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }

        let (keyword, rest) = directive(line);
        if IGNORED_DIRECTIVES.contains(&keyword) {
            if rest.is_empty() {
                return Err(CodecError::malformed(TextFormat::Mtl, line_number, raw));
            }
            continue;
        }

        match keyword {
            "newmtl" => {
                let mut args = rest.split_whitespace();
                let (Some(name), None) = (args.next(), args.next()) else {
                    return Err(CodecError::malformed(TextFormat::Mtl, line_number, raw));
                };
                let name = Identifier::new(name, IdentifierRole::Material)?;

                if let BlockState::AwaitingTexture(previous) = &state {
                    return Err(CodecError::MaterialState {
                        line: line_number,
                        error: MaterialStateError::LacksTextureMap {
                            material: previous.to_string(),
                        },
                    });
                }
                if library.get(name.as_str()).is_some() {
                    return Err(CodecError::DuplicateDefinition {
                        kind: DefinitionKind::Material,
                        name: name.into_string(),
                    });
                }

                state = BlockState::AwaitingTexture(name);
            }
            "map_Kd" => {
                if !rest.ends_with(".tga") {
                    return Err(CodecError::malformed(TextFormat::Mtl, line_number, raw));
                }

                state = match state {
                    BlockState::AwaitingTexture(name) => {
                        library.entries.push(MaterialEntry {
                            name: name.clone(),
                            texture: PathBuf::from(rest),
                        });
                        BlockState::Complete(name)
                    }
                    BlockState::Idle => {
                        return Err(CodecError::MaterialState {
                            line: line_number,
                            error: MaterialStateError::OutsideMaterial,
                        });
                    }
                    BlockState::Complete(name) => {
                        return Err(CodecError::MaterialState {
                            line: line_number,
                            error: MaterialStateError::MultipleTextureMaps {
                                material: name.into_string(),
                            },
                        });
                    }
                };
            }
            _ => return Err(CodecError::malformed(TextFormat::Mtl, line_number, raw)),
        }
    }

    if let BlockState::AwaitingTexture(name) = state {
        return Err(CodecError::MaterialState {
            line: line_count,
            error: MaterialStateError::LacksTextureMap {
                material: name.into_string(),
            },
        });
    }

    debug!("Decoded material library with {} materials", library.len());

    Ok(library)
}

/// Encode the host's materials as MTL text.
///
/// `mtl_dir` is the directory the MTL file will live in; texture paths
/// under it are written relative to it.
pub fn encode_mtl<S>(
    source: &S,
    config: &CodecConfig,
    mtl_dir: Option<&Path>,
) -> CodecResult<String>
where
    S: SceneSource + ?Sized,
{
    let mut out = String::new();
    let mut first = true;

    for material in source.materials() {
        if config.skips_material(&material.name) {
            debug!("Skipping material '{}'", material.name);
            continue;
        }

        let name = Identifier::new(&material.name, IdentifierRole::Material)?;

        if !first {
            out.push('\n');
        }
        first = false;

        out.push_str(&format!("newmtl {}\n", name));

        match material.textures.as_slice() {
            [texture] => {
                if !texture.ends_with(".tga") {
                    warn!("Material '{}' uses a non-TGA texture: {}", name, texture);
                }
                let path = relative_texture_path(texture, mtl_dir);
                out.push_str(&format!("map_Kd {}\n", path));
            }
            [] => warn!("Material '{}' has no image texture, writing no map_Kd", name),
            textures => warn!(
                "Material '{}' has {} image textures, writing no map_Kd",
                name,
                textures.len()
            ),
        }
    }

    Ok(out)
}

/// Texture path as written to `map_Kd`.
fn relative_texture_path(texture: &str, mtl_dir: Option<&Path>) -> String {
    if let Some(dir) = mtl_dir.filter(|d| !d.as_os_str().is_empty()) {
        if let Ok(relative) = Path::new(texture).strip_prefix(dir) {
            return relative.to_string_lossy().into_owned();
        }
    }
    texture.trim_start_matches('/').to_string()
}

/// Resolve or create the material for a texture file, named after the
/// file's stem.
pub fn add_texture_material<S>(sink: &mut S, texture_path: &Path) -> CodecResult<S::Material>
where
    S: SceneSink + ?Sized,
{
    let name = Identifier::from_texture_path(texture_path)?;
    Ok(sink.resolve_or_create_material(&name, texture_path))
}
