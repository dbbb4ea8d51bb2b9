//! `convert`: import a file and write it back in the exporter's form.

use std::path::Path;

use anyhow::{Context, Result};
use engine_obj::{export_scene, import_scene, CodecConfig, MemoryScene};
use serde::Serialize;

use crate::output::Output;

#[derive(Debug, Serialize)]
pub struct ConvertReport {
    pub input: String,
    pub output: String,
    pub library: String,
    pub objects: usize,
    pub polygons: usize,
    pub materials: usize,
}

pub fn run(input: &Path, output: &Path, config: &CodecConfig, out: &Output) -> Result<()> {
    let mut scene = MemoryScene::new();
    let imported = import_scene(&mut scene, input, config)
        .with_context(|| format!("Failed to import {}", input.display()))?;

    if imported.stats.positions < imported.stats.corners {
        out.info(&format!(
            "Welded {} corners into {} positions",
            imported.stats.corners, imported.stats.positions
        ));
    }

    let merged = merged_materials(imported.stats.materials, &scene);
    if merged > 0 {
        out.warning(&format!(
            "{} materials share a texture with another material and are written under its name",
            merged
        ));
    }

    let exported = export_scene(&scene, output, config)
        .with_context(|| format!("Failed to export {}", output.display()))?;

    let report = ConvertReport {
        input: input.display().to_string(),
        output: exported.obj_path.display().to_string(),
        library: exported.mtl_path.display().to_string(),
        objects: exported.objects,
        polygons: exported.polygons,
        materials: exported.materials,
    };
    out.print(&report);
    out.success(&format!(
        "Wrote {} ({} objects, {} polygons) and {}",
        report.output, report.objects, report.polygons, report.library
    ));

    Ok(())
}

/// Material names from the libraries that collapsed into an existing host
/// material because they bind the same texture.
fn merged_materials(library_names: usize, scene: &MemoryScene) -> usize {
    library_names.saturating_sub(scene.materials.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_convert_normalizes() {
        let dir = TempDir::new().unwrap();
        let library = "newmtl stone\nNs 10\nmap_Kd stone.tga\n";
        std::fs::write(dir.path().join("lib.mtl"), library).unwrap();
        let input = dir.path().join("hand.obj");
        std::fs::write(
            &input,
            "# hand written\nmtllib lib.mtl\nv 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvt 1 0\nvt 0 1\n\
             o rock\nusemtl stone\nf 1/1 2/2 3/3\n",
        )
        .unwrap();
        let output = dir.path().join("out.obj");

        let out = Output::new(OutputFormat::Text, true);
        run(&input, &output, &CodecConfig::default(), &out).unwrap();

        let obj = std::fs::read_to_string(&output).unwrap();
        assert!(obj.starts_with("mtllib out.mtl\no rock\nusemtl stone\n"));
        let last_vertex = "v 0.000000 1.000000 0.000000 21.260000 71.520000 7.220000 1.000000\n";
        assert!(obj.contains(last_vertex));
        assert!(obj.ends_with("f -3/-3 -2/-2 -1/-1\n"));

        let mtl = std::fs::read_to_string(dir.path().join("out.mtl")).unwrap();
        assert_eq!(mtl, "newmtl stone\nmap_Kd stone.tga\n");
    }

    #[test]
    fn test_shared_textures_are_merged() {
        let dir = TempDir::new().unwrap();
        let library = "newmtl stone\nmap_Kd rock.tga\n\nnewmtl cliff\nmap_Kd rock.tga\n";
        std::fs::write(dir.path().join("lib.mtl"), library).unwrap();
        let input = dir.path().join("cliffs.obj");
        std::fs::write(
            &input,
            "mtllib lib.mtl\nv 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\n\
             o wall\nusemtl cliff\nf 1/1 2/1 3/1\n",
        )
        .unwrap();

        let mut scene = MemoryScene::new();
        let imported = import_scene(&mut scene, &input, &CodecConfig::default()).unwrap();
        assert_eq!(merged_materials(imported.stats.materials, &scene), 1);

        let output = dir.path().join("out.obj");
        let out = Output::new(OutputFormat::Text, true);
        run(&input, &output, &CodecConfig::default(), &out).unwrap();

        let obj = std::fs::read_to_string(&output).unwrap();
        assert!(obj.contains("usemtl stone\n"));
        assert!(!obj.contains("usemtl cliff\n"));
    }
}
