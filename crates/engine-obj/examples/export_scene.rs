//! Example: build a scene in memory, export it, and read it back.
//!
//! Run with: `cargo run --example export_scene`

use engine_obj::{
    export_scene, import_scene, CodecConfig, HostMesh, HostObject, HostPolygon, MemoryScene,
};
use nalgebra::{Point2, Point3};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::temp_dir().join("engine_obj_example");
    std::fs::create_dir_all(&dir)?;

    // =========================================================================
    // 1. A unit quad with one textured material
    // =========================================================================

    let mut scene = MemoryScene::new();
    let floor = scene.add_material(
        "floor",
        vec![dir.join("textures").join("floor.tga").to_string_lossy().into_owned()],
    );

    scene.objects.push(HostObject::mesh(
        "ground",
        HostMesh {
            positions: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 1.0),
                Point3::new(0.0, 0.0, 1.0),
            ],
            polygons: vec![HostPolygon {
                vertices: vec![0, 1, 2, 3],
                material_index: 0,
            }],
            uv_layers: vec![vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(0.0, 1.0),
            ]],
            color_layers: vec![vec![[1.0, 1.0, 1.0, 1.0]; 4]],
            material_slots: vec![Some(floor)],
        },
    ));

    // =========================================================================
    // 2. Export
    // =========================================================================

    let config = CodecConfig::default();
    let obj_path = dir.join("level.obj");
    let summary = export_scene(&scene, &obj_path, &config)?;

    println!("=== {} ===", summary.mtl_path.display());
    println!("{}", std::fs::read_to_string(&summary.mtl_path)?);
    println!("=== {} ===", summary.obj_path.display());
    println!("{}", std::fs::read_to_string(&summary.obj_path)?);

    // =========================================================================
    // 3. Import into a fresh scene
    // =========================================================================

    let mut imported = MemoryScene::new();
    let loaded = import_scene(&mut imported, &obj_path, &config)?;

    println!(
        "Imported {} objects: {} corners welded to {} positions",
        loaded.stats.objects, loaded.stats.corners, loaded.stats.positions
    );
    for material in &imported.materials {
        println!("  {} -> {:?}", material.name, material.textures);
    }

    Ok(())
}
