//! Boundary between the codec and the host application.
//!
//! Export reads a [`SceneSource`]; import writes into a [`SceneSink`].
//! Fatal conditions are surfaced through a [`Reporter`] by
//! [`report_outcome`], so callers that want host-style "completed with
//! error" semantics never see a raw `Err`.

use std::fmt;
use std::path::Path;

use nalgebra::{Matrix4, Point2, Point3};
use tracing::{error, info, warn};

use crate::error::CodecResult;
use crate::identifier::Identifier;
use crate::types::{MeshObject, Rgba};

/// Host material identity. Two materials are the same material only when
/// their ids are equal, whatever their names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub usize);

/// A material as the host exposes it for export.
#[derive(Debug, Clone, PartialEq)]
pub struct HostMaterial {
    pub id: MaterialId,
    pub name: String,

    /// Image texture bindings, as host paths.
    pub textures: Vec<String>,
}

/// A polygon of a host mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct HostPolygon {
    /// Indices into [`HostMesh::positions`].
    pub vertices: Vec<u32>,

    /// Index into [`HostMesh::material_slots`].
    pub material_index: usize,
}

/// Mesh data of a host object.
///
/// UV and color layers hold one entry per face corner, in polygon order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostMesh {
    pub positions: Vec<Point3<f64>>,
    pub polygons: Vec<HostPolygon>,
    pub uv_layers: Vec<Vec<Point2<f64>>>,
    pub color_layers: Vec<Vec<Rgba>>,
    pub material_slots: Vec<Option<MaterialId>>,
}

impl HostMesh {
    /// Total number of polygon corners.
    pub fn corner_count(&self) -> usize {
        self.polygons.iter().map(|p| p.vertices.len()).sum()
    }
}

/// A scene object as the host exposes it for export.
#[derive(Debug, Clone, PartialEq)]
pub struct HostObject {
    pub name: String,
    pub transform: Matrix4<f64>,

    /// Names of modifiers applied to the object.
    pub modifiers: Vec<String>,

    /// `None` for non-mesh objects (cameras, lights, ...).
    pub mesh: Option<HostMesh>,
}

impl HostObject {
    /// An untransformed, unmodified mesh object.
    pub fn mesh(name: impl Into<String>, mesh: HostMesh) -> Self {
        Self {
            name: name.into(),
            transform: Matrix4::identity(),
            modifiers: Vec::new(),
            mesh: Some(mesh),
        }
    }
}

/// Read access to the host scene, used by export.
pub trait SceneSource {
    /// All materials known to the host, in host order.
    fn materials(&self) -> &[HostMaterial];

    /// Scene objects, in scene order.
    fn objects(&self) -> &[HostObject];

    /// Look up a material by id.
    fn material(&self, id: MaterialId) -> Option<&HostMaterial> {
        self.materials().iter().find(|m| m.id == id)
    }
}

/// Write access to the host scene, used by import.
pub trait SceneSink {
    /// Host handle for a material.
    type Material: Clone + PartialEq + fmt::Debug;

    /// Return the material already bound to `texture_path`, or create one
    /// named after `name` bound to it.
    fn resolve_or_create_material(&mut self, name: &Identifier, texture_path: &Path)
        -> Self::Material;

    /// Insert a decoded object into the host scene.
    fn create_mesh_object(&mut self, object: MeshObject<Self::Material>);
}

/// Severity of a reported message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Sink for messages shown to the user.
pub trait Reporter {
    fn report(&mut self, severity: Severity, message: &str);
}

/// Forwards reports to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => info!("{}", message),
            Severity::Warning => warn!("{}", message),
            Severity::Error => error!("{}", message),
        }
    }
}

/// Records every report, in order.
#[derive(Debug, Clone, Default)]
pub struct CollectingReporter {
    pub messages: Vec<(Severity, String)>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages reported at [`Severity::Error`].
    pub fn errors(&self) -> impl Iterator<Item = &str> + '_ {
        self.messages
            .iter()
            .filter(|(s, _)| *s == Severity::Error)
            .map(|(_, m)| m.as_str())
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, severity: Severity, message: &str) {
        self.messages.push((severity, message.to_string()));
    }
}

/// How a reported operation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    CompletedWithError,
}

impl Outcome {
    pub fn is_error(self) -> bool {
        self == Outcome::CompletedWithError
    }
}

/// Report a failed result through `reporter` and fold it into an [`Outcome`].
pub fn report_outcome<T, R>(reporter: &mut R, result: CodecResult<T>) -> Outcome
where
    R: Reporter + ?Sized,
{
    match result {
        Ok(_) => Outcome::Completed,
        Err(e) => {
            reporter.report(Severity::Error, &e.to_string());
            Outcome::CompletedWithError
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CodecError, DefinitionKind};

    #[test]
    fn test_report_outcome_success() {
        let mut reporter = CollectingReporter::new();
        let outcome = report_outcome(&mut reporter, Ok(3));
        assert_eq!(outcome, Outcome::Completed);
        assert!(reporter.messages.is_empty());
    }

    #[test]
    fn test_report_outcome_error() {
        let mut reporter = CollectingReporter::new();
        let result: CodecResult<()> = Err(CodecError::DuplicateDefinition {
            kind: DefinitionKind::Object,
            name: "crate_box".into(),
        });

        let outcome = report_outcome(&mut reporter, result);
        assert!(outcome.is_error());
        assert!(reporter.has_errors());
        assert_eq!(
            reporter.errors().collect::<Vec<_>>(),
            vec!["object \"crate_box\" is defined multiple times"]
        );
    }

    #[test]
    fn test_corner_count() {
        let mesh = HostMesh {
            polygons: vec![
                HostPolygon {
                    vertices: vec![0, 1, 2],
                    material_index: 0,
                },
                HostPolygon {
                    vertices: vec![0, 2, 3, 4],
                    material_index: 0,
                },
            ],
            ..Default::default()
        };
        assert_eq!(mesh.corner_count(), 7);
    }
}
