//! `info`: describe the objects and materials in a file.

use std::path::Path;

use anyhow::{Context, Result};
use engine_obj::{import_scene, CodecConfig, HostObject, MemoryScene, SceneSource};
use serde::Serialize;

use crate::output::Output;

#[derive(Debug, Serialize)]
pub struct InfoReport {
    pub path: String,
    pub objects: Vec<ObjectInfo>,
    pub materials: Vec<MaterialInfo>,
}

#[derive(Debug, Serialize)]
pub struct ObjectInfo {
    pub name: String,
    pub positions: usize,
    pub faces: usize,
    pub corners: usize,
    pub materials: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MaterialInfo {
    pub name: String,
    pub texture: Option<String>,
}

pub fn run(input: &Path, config: &CodecConfig, out: &Output) -> Result<()> {
    let mut scene = MemoryScene::new();
    import_scene(&mut scene, input, config)
        .with_context(|| format!("Failed to import {}", input.display()))?;

    let report = describe(input, &scene);
    out.print(&report);

    if out.is_text() {
        out.info(&report.path);
        out.info(&format!(
            "  {} objects, {} materials",
            report.objects.len(),
            report.materials.len()
        ));
        for object in &report.objects {
            out.info(&format!(
                "  o {:<24} {:>6} positions {:>6} faces  [{}]",
                object.name,
                object.positions,
                object.faces,
                object.materials.join(", ")
            ));
        }
        for material in &report.materials {
            out.info(&format!(
                "  m {:<24} {}",
                material.name,
                material.texture.as_deref().unwrap_or("-")
            ));
        }
    }

    Ok(())
}

fn describe(input: &Path, scene: &MemoryScene) -> InfoReport {
    InfoReport {
        path: input.display().to_string(),
        objects: scene.objects.iter().map(|o| describe_object(scene, o)).collect(),
        materials: scene
            .materials
            .iter()
            .map(|m| MaterialInfo {
                name: m.name.clone(),
                texture: m.textures.first().cloned(),
            })
            .collect(),
    }
}

fn describe_object(scene: &MemoryScene, object: &HostObject) -> ObjectInfo {
    let Some(mesh) = &object.mesh else {
        return ObjectInfo {
            name: object.name.clone(),
            positions: 0,
            faces: 0,
            corners: 0,
            materials: Vec::new(),
        };
    };

    ObjectInfo {
        name: object.name.clone(),
        positions: mesh.positions.len(),
        faces: mesh.polygons.len(),
        corners: mesh.corner_count(),
        materials: mesh
            .material_slots
            .iter()
            .flatten()
            .filter_map(|id| scene.material(*id))
            .map(|m| m.name.clone())
            .collect(),
    }
}
