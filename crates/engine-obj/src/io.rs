//! File-level export and import of `.obj` + `.mtl` pairs.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::CodecConfig;
use crate::error::{CodecError, CodecResult};
use crate::host::{report_outcome, Outcome, Reporter, SceneSink, SceneSource, Severity};
use crate::identifier::{is_identifier, Identifier};
use crate::mtl::{decode_mtl, encode_mtl};
use crate::obj::{decode_obj, encode_obj, DecodeStats, LibraryLoader, LoadedLibrary};

/// Sibling MTL path for an OBJ path: `.obj` is replaced, anything else gets
/// `.mtl` appended.
pub fn mtl_path_for(obj_path: &Path) -> PathBuf {
    let text = obj_path.as_os_str().to_string_lossy();
    match text.strip_suffix(".obj") {
        Some(stem) => PathBuf::from(format!("{}.mtl", stem)),
        None => PathBuf::from(format!("{}.mtl", text)),
    }
}

/// What an export wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub obj_path: PathBuf,
    pub mtl_path: PathBuf,
    pub materials: usize,
    pub objects: usize,
    pub polygons: usize,
    pub corners: usize,
}

/// What an import read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub obj_path: PathBuf,
    pub stats: DecodeStats,
}

/// Serves `mtllib` lines from the directory holding the OBJ file.
#[derive(Debug, Clone)]
pub struct DirectoryLibraries {
    dir: PathBuf,
}

impl DirectoryLibraries {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Libraries next to `obj_path`.
    pub fn beside(obj_path: &Path) -> Self {
        Self::new(obj_path.parent().unwrap_or_else(|| Path::new("")))
    }
}

impl LibraryLoader for DirectoryLibraries {
    fn load_library(&mut self, name: &Identifier) -> CodecResult<LoadedLibrary> {
        let path = self.dir.join(format!("{}.mtl", name));
        debug!("Loading material library {:?}", path);

        let text = read_text(&path)?;
        Ok(LoadedLibrary {
            library: decode_mtl(&text)?,
            texture_root: self.dir.clone(),
        })
    }
}

/// Export the host scene to `obj_path` and its sibling MTL file.
///
/// Both texts are encoded before anything is written; a write failure can
/// still leave the MTL file behind.
pub fn export_scene<S>(
    source: &S,
    obj_path: &Path,
    config: &CodecConfig,
) -> CodecResult<ExportSummary>
where
    S: SceneSource + ?Sized,
{
    let mtl_path = mtl_path_for(obj_path);
    info!("Exporting scene to {:?} (materials: {:?})", obj_path, mtl_path);

    let mtllib = mtl_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if !mtllib.strip_suffix(".mtl").map_or(false, is_identifier) {
        warn!("Material library name {:?} will not be accepted on import", mtllib);
    }

    let mtl_text = encode_mtl(source, config, mtl_path.parent())?;
    let (obj_text, stats) = encode_obj(source, &mtllib)?;

    write_text(&mtl_path, &mtl_text)?;
    write_text(obj_path, &obj_text)?;

    let summary = ExportSummary {
        obj_path: obj_path.to_path_buf(),
        mtl_path,
        materials: mtl_text.lines().filter(|l| l.starts_with("newmtl ")).count(),
        objects: stats.objects,
        polygons: stats.polygons,
        corners: stats.corners,
    };

    info!(
        "Exported {} objects ({} polygons, {} corners) and {} materials",
        summary.objects, summary.polygons, summary.corners, summary.materials
    );

    Ok(summary)
}

/// Import `obj_path` into the host scene. `mtllib` lines are read from the
/// OBJ file's directory.
pub fn import_scene<S>(
    sink: &mut S,
    obj_path: &Path,
    config: &CodecConfig,
) -> CodecResult<ImportSummary>
where
    S: SceneSink + ?Sized,
{
    info!("Importing scene from {:?}", obj_path);

    let text = read_text(obj_path)?;
    let mut libraries = DirectoryLibraries::beside(obj_path);
    let stats = decode_obj(&text, sink, &mut libraries, config)?;

    info!(
        "Imported {} objects: {} faces, {} corners welded to {} positions, {} materials",
        stats.objects, stats.faces, stats.corners, stats.positions, stats.materials
    );

    Ok(ImportSummary {
        obj_path: obj_path.to_path_buf(),
        stats,
    })
}

/// [`export_scene`], with failures reported instead of returned.
pub fn export_reported<S, R>(
    source: &S,
    obj_path: &Path,
    config: &CodecConfig,
    reporter: &mut R,
) -> Outcome
where
    S: SceneSource + ?Sized,
    R: Reporter + ?Sized,
{
    let result = export_scene(source, obj_path, config);
    if let Ok(summary) = &result {
        reporter.report(
            Severity::Info,
            &format!("Exported {} objects to {}", summary.objects, obj_path.display()),
        );
    }
    report_outcome(reporter, result)
}

/// [`import_scene`], with failures reported instead of returned.
pub fn import_reported<S, R>(
    sink: &mut S,
    obj_path: &Path,
    config: &CodecConfig,
    reporter: &mut R,
) -> Outcome
where
    S: SceneSink + ?Sized,
    R: Reporter + ?Sized,
{
    let result = import_scene(sink, obj_path, config);
    if let Ok(summary) = &result {
        reporter.report(
            Severity::Info,
            &format!("Imported {} objects from {}", summary.stats.objects, obj_path.display()),
        );
    }
    report_outcome(reporter, result)
}

fn read_text(path: &Path) -> CodecResult<String> {
    let file = File::open(path).map_err(|e| CodecError::IoRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = BufReader::new(file);

    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(|e| CodecError::IoRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(text)
}

fn write_text(path: &Path, text: &str) -> CodecResult<()> {
    let io_write = |e| CodecError::IoWrite {
        path: path.to_path_buf(),
        source: e,
    };

    let file = File::create(path).map_err(io_write)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes()).map_err(io_write)?;
    writer.flush().map_err(io_write)?;

    debug!("Wrote {} bytes to {:?}", text.len(), path);
    Ok(())
}
