//! In-memory host scene.
//!
//! [`MemoryScene`] stands in for the host application: it can be exported
//! from and imported into, so a decoded scene can be written back out
//! unchanged.

use std::path::Path;

use nalgebra::Matrix4;
use tracing::debug;

use crate::host::{
    HostMaterial, HostMesh, HostObject, HostPolygon, MaterialId, SceneSink, SceneSource,
};
use crate::identifier::Identifier;
use crate::types::MeshObject;

/// A host scene held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryScene {
    pub materials: Vec<HostMaterial>,
    pub objects: Vec<HostObject>,
}

impl MemoryScene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material, returning its id. The name is used as given.
    pub fn add_material(&mut self, name: impl Into<String>, textures: Vec<String>) -> MaterialId {
        let id = MaterialId(self.materials.len());
        self.materials.push(HostMaterial {
            id,
            name: name.into(),
            textures,
        });
        id
    }

    /// Find an object by name.
    pub fn object(&self, name: &str) -> Option<&HostObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Find a material by name.
    pub fn material_named(&self, name: &str) -> Option<&HostMaterial> {
        self.materials.iter().find(|m| m.name == name)
    }

    /// `base`, or `base_2`, `base_3`, ... whichever is free first.
    fn unique_material_name(&self, base: &str) -> String {
        if self.material_named(base).is_none() {
            return base.to_string();
        }
        (2..)
            .map(|n| format!("{}_{}", base, n))
            .find(|candidate| self.material_named(candidate).is_none())
            .unwrap_or_else(|| base.to_string())
    }
}

impl SceneSource for MemoryScene {
    fn materials(&self) -> &[HostMaterial] {
        &self.materials
    }

    fn objects(&self) -> &[HostObject] {
        &self.objects
    }
}

impl SceneSink for MemoryScene {
    type Material = MaterialId;

    fn resolve_or_create_material(&mut self, name: &Identifier, texture_path: &Path) -> MaterialId {
        let texture = texture_path.to_string_lossy().into_owned();

        if let Some(existing) = self.materials.iter().find(|m| m.textures.contains(&texture)) {
            debug!(
                "Reusing material '{}' for '{}' ({})",
                existing.name, name, texture
            );
            return existing.id;
        }

        let unique = self.unique_material_name(name.as_str());
        debug!("Creating material '{}' for {}", unique, texture);
        self.add_material(unique, vec![texture])
    }

    fn create_mesh_object(&mut self, object: MeshObject<MaterialId>) {
        let corner_count = object.corner_count();
        let mut uvs = Vec::with_capacity(corner_count);
        let mut colors = Vec::with_capacity(corner_count);
        let mut polygons = Vec::with_capacity(object.faces.len());

        for face in &object.faces {
            let mut vertices = Vec::with_capacity(face.corners.len());
            for corner in &face.corners {
                vertices.push(corner.position);
                uvs.push(corner.uv);
                colors.push(corner.color);
            }
            polygons.push(HostPolygon {
                vertices,
                material_index: face.material,
            });
        }

        debug!(
            "Created object '{}': {} positions, {} polygons",
            object.name,
            object.positions.len(),
            polygons.len()
        );

        self.objects.push(HostObject {
            name: object.name.into_string(),
            transform: Matrix4::identity(),
            modifiers: Vec::new(),
            mesh: Some(HostMesh {
                positions: object.positions,
                polygons,
                uv_layers: vec![uvs],
                color_layers: vec![colors],
                material_slots: object.materials.into_iter().map(Some).collect(),
            }),
        });
    }
}
