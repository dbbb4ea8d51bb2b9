//! OBJ decoding.
//!
//! A single forward pass over the text. Each non-blank line is matched
//! against the directives in a fixed order (`o`, `mtllib`, `usemtl`, `v`,
//! `vn`, `vt`, `s`, `f`); a line matching none of them is an error.
//!
//! Vertex and texture coordinate lists span the whole stream, so indices
//! resolve against everything seen so far. Faces are collected per object
//! and welded when the object closes.

use std::path::PathBuf;

use hashbrown::{HashMap, HashSet};
use nalgebra::{Point2, Point3};
use tracing::debug;

use crate::config::CodecConfig;
use crate::error::{
    CodecError, CodecResult, DefinitionKind, IndexComponent, MissingAttribute, TextFormat,
};
use crate::host::SceneSink;
use crate::identifier::{Identifier, IdentifierRole};
use crate::index::resolve;
use crate::mtl::MtlLibrary;
use crate::numeric::{parse_decimal, parse_integer, parse_unsigned};
use crate::text::{directive, strip_comment};
use crate::types::{Corner, Face, MeshObject, Rgba};
use crate::weld::weld_positions;

/// A material library together with the directory its textures are
/// relative to.
#[derive(Debug, Clone)]
pub struct LoadedLibrary {
    pub library: MtlLibrary,
    pub texture_root: PathBuf,
}

/// Supplies the material libraries named by `mtllib` lines.
pub trait LibraryLoader {
    /// Load and decode the library `<name>.mtl`.
    fn load_library(&mut self, name: &Identifier) -> CodecResult<LoadedLibrary>;
}

impl<F> LibraryLoader for F
where
    F: FnMut(&Identifier) -> CodecResult<LoadedLibrary>,
{
    fn load_library(&mut self, name: &Identifier) -> CodecResult<LoadedLibrary> {
        self(name)
    }
}

/// Counts gathered while decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeStats {
    pub objects: usize,
    pub faces: usize,
    pub corners: usize,
    /// Positions after welding, summed over objects.
    pub positions: usize,
    pub materials: usize,
}

/// A `v` line.
#[derive(Debug, Clone, Copy)]
struct VertexRecord {
    position: Point3<f64>,
    color: Rgba,
}

/// One face corner before welding.
#[derive(Debug, Clone, Copy)]
struct CornerRecord {
    position: Point3<f64>,
    color: Rgba,
    uv: Point2<f64>,
}

#[derive(Debug)]
struct PendingFace<M> {
    corners: Vec<CornerRecord>,
    material: M,
}

#[derive(Debug)]
struct OpenObject<M> {
    name: Identifier,
    faces: Vec<PendingFace<M>>,
}

/// A face corner token before index resolution.
#[derive(Debug, Clone, Copy)]
struct CornerToken {
    vertex: i64,
    texture_coordinate: i64,
}

struct ObjDecoder<'a, S: SceneSink + ?Sized, L: ?Sized> {
    sink: &'a mut S,
    loader: &'a mut L,
    config: &'a CodecConfig,

    vertices: Vec<VertexRecord>,
    texture_coordinates: Vec<Point2<f64>>,
    materials: HashMap<Identifier, S::Material>,
    active_material: Option<S::Material>,
    current: Option<OpenObject<S::Material>>,
    object_names: HashSet<Identifier>,
    stats: DecodeStats,
}

/// Decode OBJ text, creating objects and materials through `sink`.
pub fn decode_obj<S, L>(
    text: &str,
    sink: &mut S,
    loader: &mut L,
    config: &CodecConfig,
) -> CodecResult<DecodeStats>
where
    S: SceneSink + ?Sized,
    L: LibraryLoader + ?Sized,
{
    let mut decoder = ObjDecoder {
        sink,
        loader,
        config,
        vertices: Vec::new(),
        texture_coordinates: Vec::new(),
        materials: HashMap::new(),
        active_material: None,
        current: None,
        object_names: HashSet::new(),
        stats: DecodeStats::default(),
    };

    for (number, raw) in text.lines().enumerate() {
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }
        decoder.line(number + 1, raw, line)?;
    }

    decoder.finish_object();
    decoder.stats.materials = decoder.materials.len();

    Ok(decoder.stats)
}

impl<S, L> ObjDecoder<'_, S, L>
where
    S: SceneSink + ?Sized,
    L: LibraryLoader + ?Sized,
{
    fn line(&mut self, number: usize, raw: &str, line: &str) -> CodecResult<()> {
        let malformed = || CodecError::malformed(TextFormat::Obj, number, raw);
        let (keyword, rest) = directive(line);
        let args: Vec<&str> = rest.split_whitespace().collect();

        match keyword {
            "o" => match args.as_slice() {
                [name] => self.object(name),
                _ => Err(malformed()),
            },
            "mtllib" => match args.as_slice() {
                [file] => {
                    let stem = file.strip_suffix(".mtl").ok_or_else(malformed)?;
                    self.mtllib(stem)
                }
                _ => Err(malformed()),
            },
            "usemtl" => match args.as_slice() {
                [name] => self.usemtl(name),
                _ => Err(malformed()),
            },
            "v" => {
                let values = args
                    .iter()
                    .map(|a| parse_decimal(a))
                    .collect::<Option<Vec<_>>>()
                    .ok_or_else(malformed)?;
                self.vertex(&values).ok_or_else(malformed)
            }
            "vn" | "s" if !args.is_empty() => Ok(()),
            "vt" => match args.as_slice() {
                [u, v] => {
                    let (u, v) = parse_decimal(u).zip(parse_decimal(v)).ok_or_else(malformed)?;
                    self.texture_coordinates.push(Point2::new(u, v));
                    Ok(())
                }
                _ => Err(malformed()),
            },
            "f" => {
                let corners = parse_corners(&args, number, raw)?;
                self.face(number, &corners)
            }
            _ => Err(malformed()),
        }
    }

    fn object(&mut self, name: &str) -> CodecResult<()> {
        let name = Identifier::new(name, IdentifierRole::Object)?;
        if self.object_names.contains(&name) {
            return Err(CodecError::DuplicateDefinition {
                kind: DefinitionKind::Object,
                name: name.into_string(),
            });
        }

        self.finish_object();
        self.object_names.insert(name.clone());
        self.current = Some(OpenObject {
            name,
            faces: Vec::new(),
        });
        Ok(())
    }

    fn mtllib(&mut self, stem: &str) -> CodecResult<()> {
        let name = Identifier::new(stem, IdentifierRole::Library)?;
        let loaded = self.loader.load_library(&name)?;

        if let Some(duplicate) = loaded
            .library
            .entries
            .iter()
            .find(|e| self.materials.contains_key(&e.name))
        {
            return Err(CodecError::DuplicateDefinition {
                kind: DefinitionKind::Material,
                name: duplicate.name.to_string(),
            });
        }

        debug!(
            "Material library '{}.mtl': {} materials",
            name,
            loaded.library.len()
        );

        for (material, handle) in loaded.library.bind(&mut *self.sink, &loaded.texture_root) {
            self.materials.insert(material, handle);
        }
        Ok(())
    }

    fn usemtl(&mut self, name: &str) -> CodecResult<()> {
        let name = Identifier::new(name, IdentifierRole::Material)?;
        match self.materials.get(&name) {
            Some(handle) => {
                self.active_material = Some(handle.clone());
                Ok(())
            }
            None => Err(CodecError::UndefinedReference {
                name: name.into_string(),
            }),
        }
    }

    /// Append a `v` record. `None` if the field count is not 3, 6 or 7.
    fn vertex(&mut self, values: &[f64]) -> Option<()> {
        let mut color = self.config.default_color;
        let (position, given) = match values {
            [x, y, z] => (Point3::new(*x, *y, *z), &[][..]),
            [x, y, z, rest @ ..] if rest.len() == 3 || rest.len() == 4 => {
                (Point3::new(*x, *y, *z), rest)
            }
            _ => return None,
        };
        color[..given.len()].copy_from_slice(given);

        self.vertices.push(VertexRecord { position, color });
        Some(())
    }

    fn face(&mut self, line: usize, tokens: &[CornerToken]) -> CodecResult<()> {
        let Some(material) = self.active_material.clone() else {
            return Err(CodecError::missing(
                format!("line {}:", line),
                MissingAttribute::FaceWithoutMaterial,
            ));
        };
        if self.current.is_none() {
            return Err(CodecError::FaceOutsideObject { line });
        }

        let mut corners = Vec::with_capacity(tokens.len());
        for token in tokens {
            let vertex = resolve(token.vertex, self.vertices.len()).map_err(|source| {
                CodecError::Index {
                    line,
                    component: IndexComponent::Vertex,
                    source,
                }
            })?;
            let texture_coordinate =
                resolve(token.texture_coordinate, self.texture_coordinates.len()).map_err(
                    |source| CodecError::Index {
                        line,
                        component: IndexComponent::TextureCoordinate,
                        source,
                    },
                )?;

            let record = self.vertices[vertex];
            corners.push(CornerRecord {
                position: record.position,
                color: record.color,
                uv: self.texture_coordinates[texture_coordinate],
            });
        }

        if let Some(object) = self.current.as_mut() {
            object.faces.push(PendingFace { corners, material });
        }
        Ok(())
    }

    /// Weld the open object, if any, and hand it to the sink.
    fn finish_object(&mut self) {
        let Some(open) = self.current.take() else {
            return;
        };

        let weld = weld_positions(
            open.faces
                .iter()
                .flat_map(|f| f.corners.iter().map(|c| c.position)),
        );

        let mut object = MeshObject::new(open.name);
        let mut welded = weld.indices.iter().copied();

        for pending in open.faces {
            let material = match object.materials.iter().position(|m| *m == pending.material) {
                Some(index) => index,
                None => {
                    object.materials.push(pending.material);
                    object.materials.len() - 1
                }
            };

            let corners = pending
                .corners
                .iter()
                .zip(welded.by_ref())
                .map(|(c, position)| Corner {
                    position,
                    uv: c.uv,
                    color: c.color,
                })
                .collect();

            object.faces.push(Face { corners, material });
        }
        object.positions = weld.positions;

        debug!(
            "Object '{}': {} faces, {} corners welded to {} positions",
            object.name,
            object.face_count(),
            object.corner_count(),
            object.vertex_count()
        );

        self.stats.objects += 1;
        self.stats.faces += object.face_count();
        self.stats.corners += object.corner_count();
        self.stats.positions += object.vertex_count();

        self.sink.create_mesh_object(object);
    }
}

/// Parse the corner tokens of an `f` line.
fn parse_corners(args: &[&str], line: usize, raw: &str) -> CodecResult<Vec<CornerToken>> {
    let malformed = || CodecError::malformed(TextFormat::Obj, line, raw);

    if args.len() < 3 {
        return Err(malformed());
    }

    args.iter()
        .map(|token| {
            let parts: Vec<&str> = token.split('/').collect();
            match parts.as_slice() {
                [_] | [_, ""] | [_, "", _] => Err(CodecError::missing(
                    format!("line {}:", line),
                    MissingAttribute::CornerWithoutTextureCoordinate,
                )),
                [v, vt] | [v, vt, _] => {
                    if let [_, _, vn] = parts.as_slice() {
                        parse_unsigned(vn).ok_or_else(malformed)?;
                    }
                    Ok(CornerToken {
                        vertex: parse_integer(v).ok_or_else(malformed)?,
                        texture_coordinate: parse_integer(vt).ok_or_else(malformed)?,
                    })
                }
                _ => Err(malformed()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MaterialId, SceneSource};
    use crate::index::IndexError;
    use crate::mtl::decode_mtl;
    use crate::scene::MemoryScene;
    use crate::types::DEFAULT_VERTEX_COLOR;

    const LIBRARY: &str = "newmtl stone\nmap_Kd stone.tga\n\nnewmtl grass\nmap_Kd grass.tga\n";

    fn loader(name: &Identifier) -> CodecResult<LoadedLibrary> {
        assert_eq!(name.as_str(), "level");
        Ok(LoadedLibrary {
            library: decode_mtl(LIBRARY)?,
            texture_root: PathBuf::from("/assets"),
        })
    }

    fn decode(text: &str) -> CodecResult<(MemoryScene, DecodeStats)> {
        let mut scene = MemoryScene::new();
        let stats = decode_obj(text, &mut scene, &mut loader, &CodecConfig::default())?;
        Ok((scene, stats))
    }

    const TRIANGLE: &str = "\
mtllib level.mtl
o tri
usemtl stone
v 0.000000 0.000000 0.000000 1.000000 0.500000 0.250000 1.000000
vt 0.000000 0.000000
v 1.000000 0.000000 0.000000 1.000000 0.500000 0.250000 1.000000
vt 1.000000 0.000000
v 0.000000 1.000000 0.000000 1.000000 0.500000 0.250000 1.000000
vt 0.000000 1.000000
f -3/-3 -2/-2 -1/-1
";

    #[test]
    fn test_single_triangle() {
        let (scene, stats) = decode(TRIANGLE).unwrap();

        assert_eq!(stats.objects, 1);
        assert_eq!(stats.faces, 1);
        assert_eq!(stats.corners, 3);
        assert_eq!(stats.positions, 3);
        assert_eq!(stats.materials, 2);

        let object = scene.object("tri").unwrap();
        let mesh = object.mesh.as_ref().unwrap();
        assert_eq!(mesh.positions.len(), 3);
        assert_eq!(mesh.polygons.len(), 1);
        assert_eq!(mesh.polygons[0].vertices, vec![0, 1, 2]);
        assert_eq!(mesh.uv_layers[0][1], Point2::new(1.0, 0.0));
        assert_eq!(mesh.color_layers[0][2], [1.0, 0.5, 0.25, 1.0]);

        let material = scene.material(mesh.material_slots[0].unwrap()).unwrap();
        assert_eq!(material.name, "stone");
        assert_eq!(material.textures, vec!["/assets/stone.tga".to_string()]);
    }

    #[test]
    fn test_shared_positions_weld_but_keep_corner_attributes() {
        let text = "\
mtllib level.mtl
o quad
usemtl stone
v 0 0 0
vt 0 0
v 1 0 0
vt 1 0
v 1 1 0
vt 1 1
f -3/-3 -2/-2 -1/-1
usemtl grass
v 0 0 0 0.1 0.2 0.3
vt 0.5 0.5
v 1 1 0
vt 0.25 0.25
v 0 1 0
vt 0 1
f -3/-3 -2/-2 -1/-1
";
        let (scene, stats) = decode(text).unwrap();
        assert_eq!(stats.corners, 6);
        assert_eq!(stats.positions, 4);

        let mesh = scene.object("quad").unwrap().mesh.as_ref().unwrap();
        assert_eq!(mesh.polygons[0].vertices, vec![0, 1, 2]);
        assert_eq!(mesh.polygons[1].vertices, vec![0, 2, 3]);
        assert_eq!(mesh.polygons[1].material_index, 1);
        assert_eq!(mesh.material_slots.len(), 2);

        // Corner 3 shares position 0 with corner 0 but keeps its own uv and color.
        assert_eq!(mesh.uv_layers[0][3], Point2::new(0.5, 0.5));
        assert_eq!(mesh.color_layers[0][0], DEFAULT_VERTEX_COLOR);
        assert_eq!(mesh.color_layers[0][3], [0.1, 0.2, 0.3, 1.0]);
    }

    #[test]
    fn test_absolute_indices_span_objects() {
        let text = "\
mtllib level.mtl
usemtl stone
v 0 0 0
v 1 0 0
v 0 1 0
vt 0 0
o first
f 1/1 2/1 3/1
o second
v 5 5 5
f 1/1 3/1 4/-1
";
        let (scene, stats) = decode(text).unwrap();
        assert_eq!(stats.objects, 2);

        let second = scene.object("second").unwrap().mesh.as_ref().unwrap();
        assert_eq!(second.positions.len(), 3);
        assert_eq!(second.positions[2], Point3::new(5.0, 5.0, 5.0));
    }

    #[test]
    fn test_material_order_is_first_seen() {
        let text = "\
mtllib level.mtl
o tri
v 0 0 0
v 1 0 0
v 0 1 0
vt 0 0
usemtl grass
f 1/1 2/1 3/1
usemtl stone
f 3/1 2/1 1/1
usemtl grass
f 1/1 3/1 2/1
";
        let (scene, _) = decode(text).unwrap();
        let mesh = scene.object("tri").unwrap().mesh.as_ref().unwrap();
        let names: Vec<_> = mesh
            .material_slots
            .iter()
            .map(|slot| scene.material(slot.unwrap()).unwrap().name.as_str())
            .collect();
        assert_eq!(names, vec!["grass", "stone"]);
        let indices: Vec<_> = mesh.polygons.iter().map(|p| p.material_index).collect();
        assert_eq!(indices, vec![0, 1, 0]);
    }

    #[test]
    fn test_ignored_directives_and_comments() {
        let text = "\
# header comment
mtllib level.mtl   # trailing
o tri
s off
vn 0 0 1
usemtl stone

v 0 0 0
v 1 0 0
v 0 1 0
vt 0 0
f 1/1/1 2/1/1 3/1/1
";
        let (_, stats) = decode(text).unwrap();
        assert_eq!(stats.faces, 1);
    }

    #[test]
    fn test_vertex_field_counts() {
        let mut scene = MemoryScene::new();
        let config = CodecConfig::default();
        for bad in [
            "v 1 2",
            "v 1 2 3 4",
            "v 1 2 3 4 5",
            "v 1 2 3 4 5 6 7 8",
            "v 1 2 x",
            "v 1e3 0 0",
        ] {
            let err = decode_obj(bad, &mut scene, &mut loader, &config).unwrap_err();
            assert!(
                matches!(err, CodecError::MalformedLine { format: TextFormat::Obj, line: 1, .. }),
                "{bad:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_texture_coordinate_field_counts() {
        let mut scene = MemoryScene::new();
        let config = CodecConfig::default();
        for bad in ["vt 1", "vt 1 2 3", "vt x 0", "vt 0.5 -", "vt"] {
            let err = decode_obj(bad, &mut scene, &mut loader, &config).unwrap_err();
            assert!(
                matches!(err, CodecError::MalformedLine { format: TextFormat::Obj, line: 1, .. }),
                "{bad:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_ignored_directives_need_arguments() {
        let mut scene = MemoryScene::new();
        let config = CodecConfig::default();
        for bad in ["s", "vn", "s   # smoothing"] {
            let err = decode_obj(bad, &mut scene, &mut loader, &config).unwrap_err();
            assert!(
                matches!(err, CodecError::MalformedLine { line: 1, .. }),
                "{bad:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_corner_without_texture_coordinate() {
        for face in ["f 1 2 3", "f 1//1 2//1 3//1"] {
            let text = format!(
                "mtllib level.mtl\no tri\nusemtl stone\n\
                 v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\n{face}\n"
            );
            let err = decode(&text).unwrap_err();
            assert!(
                matches!(
                    err,
                    CodecError::MissingAttribute {
                        problem: MissingAttribute::CornerWithoutTextureCoordinate,
                        ..
                    }
                ),
                "{face:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_face_before_usemtl() {
        let text = "mtllib level.mtl\no tri\nv 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nf 1/1 2/1 3/1\n";
        let err = decode(text).unwrap_err();
        assert!(matches!(
            err,
            CodecError::MissingAttribute {
                problem: MissingAttribute::FaceWithoutMaterial,
                ..
            }
        ));
    }

    #[test]
    fn test_face_outside_object() {
        let text = "mtllib level.mtl\nusemtl stone\n\
                    v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nf 1/1 2/1 3/1\n";
        let err = decode(text).unwrap_err();
        assert!(matches!(err, CodecError::FaceOutsideObject { line: 7 }));
    }

    #[test]
    fn test_zero_and_out_of_range_indices() {
        let prefix = "mtllib level.mtl\no tri\nusemtl stone\nv 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\n";

        let err = decode(&format!("{prefix}f 0/1 2/1 3/1\n")).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Index {
                line: 8,
                component: IndexComponent::Vertex,
                source: IndexError::Zero,
            }
        ));

        let err = decode(&format!("{prefix}f 1/1 2/0 3/1\n")).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Index {
                component: IndexComponent::TextureCoordinate,
                source: IndexError::Zero,
                ..
            }
        ));

        let err = decode(&format!("{prefix}f 1/1 2/1 4/1\n")).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Index {
                component: IndexComponent::Vertex,
                source: IndexError::OutOfRange { index: 4, len: 3 },
                ..
            }
        ));

        let err = decode(&format!("{prefix}f 1/1 2/1 3/-2\n")).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Index {
                component: IndexComponent::TextureCoordinate,
                source: IndexError::OutOfRange { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_indices_resolve_against_elements_seen_so_far() {
        // Vertex 4 exists by the end of the file but not at the face line.
        let text = "mtllib level.mtl\no tri\nusemtl stone\nv 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\n\
                    f 1/1 2/1 4/1\nv 1 1 1\n";
        assert!(matches!(
            decode(text).unwrap_err(),
            CodecError::Index { source: IndexError::OutOfRange { .. }, .. }
        ));
    }

    #[test]
    fn test_duplicate_object_names() {
        let text = "mtllib level.mtl\no same_name\nusemtl stone\n\
                    v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nf 1/1 2/1 3/1\n\
                    o same_name\nf 1/1 2/1 3/1\n";
        let mut scene = MemoryScene::new();
        let err = decode_obj(text, &mut scene, &mut loader, &CodecConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            CodecError::DuplicateDefinition {
                kind: DefinitionKind::Object,
                ref name,
            } if name == "same_name"
        ));
        assert!(scene.objects.is_empty());
    }

    #[test]
    fn test_undefined_material() {
        let err = decode("mtllib level.mtl\no tri\nusemtl brick\n").unwrap_err();
        assert!(matches!(err, CodecError::UndefinedReference { ref name } if name == "brick"));
    }

    #[test]
    fn test_unrecognized_line() {
        let err = decode("mtllib level.mtl\ng group\n").unwrap_err();
        match err {
            CodecError::MalformedLine { line, text, .. } => {
                assert_eq!(line, 2);
                assert_eq!(text, "g group");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_invalid_names() {
        let err = decode("o Cube\n").unwrap_err();
        assert!(matches!(
            err,
            CodecError::InvalidIdentifier(ref e) if e.role == IdentifierRole::Object
        ));

        let err = decode("mtllib Level.mtl\n").unwrap_err();
        assert!(matches!(
            err,
            CodecError::InvalidIdentifier(ref e) if e.role == IdentifierRole::Library
        ));

        let err = decode("mtllib level.txt\n").unwrap_err();
        assert!(matches!(err, CodecError::MalformedLine { .. }));
    }

    #[test]
    fn test_library_loaded_twice_is_duplicate() {
        let err = decode("mtllib level.mtl\nmtllib level.mtl\n").unwrap_err();
        assert!(matches!(
            err,
            CodecError::DuplicateDefinition { kind: DefinitionKind::Material, .. }
        ));
    }

    #[test]
    fn test_empty_object_is_created() {
        let (scene, stats) = decode("o empty\n").unwrap();
        assert_eq!(stats.objects, 1);
        let mesh = scene.object("empty").unwrap().mesh.as_ref().unwrap();
        assert!(mesh.positions.is_empty());
        assert!(mesh.polygons.is_empty());
    }

    #[test]
    fn test_default_color_from_config() {
        let config = CodecConfig {
            default_color: [0.0, 0.0, 0.0, 0.5],
            ..CodecConfig::default()
        };
        let text = "mtllib level.mtl\no tri\nusemtl stone\n\
                    v 0 0 0\nv 1 0 0 1 1 1\nv 0 1 0\nvt 0 0\nf 1/1 2/1 3/1\n";
        let mut scene = MemoryScene::new();
        decode_obj(text, &mut scene, &mut loader, &config).unwrap();

        let mesh = scene.object("tri").unwrap().mesh.as_ref().unwrap();
        assert_eq!(mesh.color_layers[0][0], [0.0, 0.0, 0.0, 0.5]);
        assert_eq!(mesh.color_layers[0][1], [1.0, 1.0, 1.0, 0.5]);
    }

    #[test]
    fn test_materials_shared_across_objects() {
        let text = "\
mtllib level.mtl
v 0 0 0
v 1 0 0
v 0 1 0
vt 0 0
usemtl stone
o a
f 1/1 2/1 3/1
o b
f 1/1 2/1 3/1
";
        let (scene, _) = decode(text).unwrap();
        let slot = |name: &str| {
            scene.object(name).unwrap().mesh.as_ref().unwrap().material_slots[0]
        };
        assert_eq!(slot("a"), slot("b"));
        assert_eq!(slot("a"), Some(MaterialId(0)));
    }
}
