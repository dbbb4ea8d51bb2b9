//! Core mesh data types produced by import.

use nalgebra::{Point2, Point3};

use crate::identifier::Identifier;

/// Per-corner vertex color, RGBA.
pub type Rgba = [f64; 4];

/// Color assigned to a `v` line that omits its color components.
pub const DEFAULT_VERTEX_COLOR: Rgba = [21.26, 71.52, 7.22, 1.0];

/// One corner of a face after welding.
///
/// Only `position` is shared between corners; texture coordinate and color
/// stay attached to the corner that carried them in the file.
#[derive(Debug, Clone, PartialEq)]
pub struct Corner {
    /// Index into [`MeshObject::positions`].
    pub position: u32,

    /// Texture coordinate (u, v).
    pub uv: Point2<f64>,

    /// Vertex color.
    pub color: Rgba,
}

/// A polygon of three or more corners sharing one material.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Corners in winding order.
    pub corners: Vec<Corner>,

    /// Index into [`MeshObject::materials`].
    pub material: usize,
}

/// A decoded mesh object, ready to hand to the host.
///
/// `M` is the host's material handle type.
#[derive(Debug, Clone)]
pub struct MeshObject<M> {
    pub name: Identifier,

    /// Distinct positions in first-seen order.
    pub positions: Vec<Point3<f64>>,

    pub faces: Vec<Face>,

    /// Materials used by the faces, in first-seen order.
    pub materials: Vec<M>,
}

impl<M> MeshObject<M> {
    /// Create an empty object.
    pub fn new(name: Identifier) -> Self {
        Self {
            name,
            positions: Vec::new(),
            faces: Vec::new(),
            materials: Vec::new(),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Total number of face corners.
    pub fn corner_count(&self) -> usize {
        self.faces.iter().map(|f| f.corners.len()).sum()
    }
}
