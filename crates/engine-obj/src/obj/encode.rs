//! OBJ encoding.
//!
//! Every polygon is written as a self-contained block: a `usemtl` line, one
//! `v`/`vt` pair per corner, then an `f` line that references only those
//! corners through negative indices.

use nalgebra::Matrix4;
use tracing::debug;

use crate::error::{CodecError, CodecResult, MissingAttribute, UnsupportedGeometry};
use crate::host::{HostMesh, HostObject, SceneSource};
use crate::identifier::{Identifier, IdentifierRole};
use crate::numeric::Fixed;

/// Counts gathered while encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeStats {
    pub objects: usize,
    pub polygons: usize,
    pub corners: usize,
}

/// Encode the host scene as OBJ text referencing the library `mtllib`.
pub fn encode_obj<S>(source: &S, mtllib: &str) -> CodecResult<(String, EncodeStats)>
where
    S: SceneSource + ?Sized,
{
    let mut out = String::new();
    let mut stats = EncodeStats::default();

    out.push_str(&format!("mtllib {}\n", mtllib));

    for object in source.objects() {
        let name = Identifier::new(&object.name, IdentifierRole::Object)?;
        let mesh = check_object(object)?;

        debug!(
            "Encoding object '{}': {} polygons",
            name,
            mesh.polygons.len()
        );

        out.push_str(&format!("o {}\n", name));
        encode_mesh(source, &name, mesh, &mut out, &mut stats)?;
        stats.objects += 1;
    }

    Ok((out, stats))
}

/// Reject objects the engine format cannot carry as they are.
fn check_object(object: &HostObject) -> CodecResult<&HostMesh> {
    let mesh = object
        .mesh
        .as_ref()
        .ok_or_else(|| CodecError::unsupported(&object.name, UnsupportedGeometry::NotAMesh))?;

    if object.transform != Matrix4::identity() {
        return Err(CodecError::unsupported(
            &object.name,
            UnsupportedGeometry::NonIdentityTransform,
        ));
    }
    if !object.modifiers.is_empty() {
        return Err(CodecError::unsupported(
            &object.name,
            UnsupportedGeometry::Modifiers(object.modifiers.clone()),
        ));
    }

    let context = || format!("object \"{}\"", object.name);

    match mesh.uv_layers.len() {
        0 => return Err(CodecError::missing(context(), MissingAttribute::NoUvLayer)),
        1 => {}
        _ => return Err(CodecError::missing(context(), MissingAttribute::MultipleUvLayers)),
    }
    match mesh.color_layers.len() {
        0 => return Err(CodecError::missing(context(), MissingAttribute::NoColorLayer)),
        1 => {}
        _ => {
            return Err(CodecError::missing(
                context(),
                MissingAttribute::MultipleColorLayers,
            ))
        }
    }

    let corners = mesh.corner_count();
    if mesh.uv_layers[0].len() != corners {
        return Err(CodecError::missing(
            context(),
            MissingAttribute::IncompleteUvLayer {
                expected: corners,
                found: mesh.uv_layers[0].len(),
            },
        ));
    }
    if mesh.color_layers[0].len() != corners {
        return Err(CodecError::missing(
            context(),
            MissingAttribute::IncompleteColorLayer {
                expected: corners,
                found: mesh.color_layers[0].len(),
            },
        ));
    }

    Ok(mesh)
}

fn encode_mesh<S>(
    source: &S,
    name: &Identifier,
    mesh: &HostMesh,
    out: &mut String,
    stats: &mut EncodeStats,
) -> CodecResult<()>
where
    S: SceneSource + ?Sized,
{
    let uvs = &mesh.uv_layers[0];
    let colors = &mesh.color_layers[0];
    let mut corner = 0usize;

    for polygon in &mesh.polygons {
        let count = polygon.vertices.len();
        if count < 3 {
            return Err(CodecError::unsupported(
                name.as_str(),
                UnsupportedGeometry::DegeneratePolygon { corners: count },
            ));
        }

        let material = mesh
            .material_slots
            .get(polygon.material_index)
            .copied()
            .flatten()
            .and_then(|id| source.material(id))
            .ok_or_else(|| {
                CodecError::missing(
                    format!("object \"{}\"", name),
                    MissingAttribute::FaceWithoutMaterial,
                )
            })?;
        let material = Identifier::new(&material.name, IdentifierRole::Material)?;

        out.push_str(&format!("usemtl {}\n", material));

        for &vertex in &polygon.vertices {
            let p = mesh.positions.get(vertex as usize).ok_or_else(|| {
                CodecError::unsupported(
                    name.as_str(),
                    UnsupportedGeometry::VertexOutOfRange {
                        index: vertex,
                        len: mesh.positions.len(),
                    },
                )
            })?;
            let uv = uvs[corner];
            let [r, g, b, a] = colors[corner];
            let values = [p.x, p.y, p.z, r, g, b, a, uv.x, uv.y];
            if !values.iter().all(|v| v.is_finite()) {
                return Err(CodecError::unsupported(
                    name.as_str(),
                    UnsupportedGeometry::NonFiniteValue { corner },
                ));
            }
            corner += 1;

            out.push_str(&format!(
                "v {} {} {} {} {} {} {}\n",
                Fixed(p.x),
                Fixed(p.y),
                Fixed(p.z),
                Fixed(r),
                Fixed(g),
                Fixed(b),
                Fixed(a)
            ));
            out.push_str(&format!("vt {} {}\n", Fixed(uv.x), Fixed(uv.y)));
        }

        out.push('f');
        for k in (1..=count).rev() {
            out.push_str(&format!(" -{}/-{}", k, k));
        }
        out.push('\n');

        stats.polygons += 1;
        stats.corners += count;
    }

    Ok(())
}
