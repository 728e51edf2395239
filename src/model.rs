//! Triangle models: a vertex list plus a flat index list.
//!
//! A [`Model`] is validated once at construction so the rasterizers can
//! index into it without further checks. Wavefront OBJ files are read with
//! `tobj`; every object and group in a file is merged into one model.

use std::io::BufRead;
use std::path::Path;

use thiserror::Error;

use crate::math::Vec3;

/// Number of indices that make up one face.
pub const FACE_SIZE: usize = 3;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("index count {0} is not a multiple of 3")]
    IndexCount(usize),

    #[error("face index {index} refers to a missing vertex (model has {vertex_count})")]
    IndexOutOfRange { index: usize, vertex_count: usize },

    #[error("failed to load OBJ: {0}")]
    Obj(#[from] tobj::LoadError),
}

/// A triangle mesh in model space.
///
/// Every three consecutive indices name one face. Construction guarantees the
/// index count is a multiple of three and every index is in range.
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    vertices: Vec<Vec3>,
    indices: Vec<usize>,
}

impl Model {
    /// Build a model from raw data, rejecting malformed index lists.
    pub fn new(vertices: Vec<Vec3>, indices: Vec<usize>) -> Result<Self, ModelError> {
        if indices.len() % FACE_SIZE != 0 {
            return Err(ModelError::IndexCount(indices.len()));
        }
        if let Some(&index) = indices.iter().find(|&&i| i >= vertices.len()) {
            return Err(ModelError::IndexOutOfRange {
                index,
                vertex_count: vertices.len(),
            });
        }
        Ok(Self { vertices, indices })
    }

    /// Load a model from an OBJ file. Polygons are triangulated; normals,
    /// texture coordinates and materials are ignored.
    pub fn from_obj<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let (models, _materials) = tobj::load_obj(path, &Self::load_options())?;
        let model = Self::merge(models)?;
        log::debug!(
            "loaded {}: {} vertices, {} faces",
            path.display(),
            model.vertices.len(),
            model.face_count()
        );
        Ok(model)
    }

    /// Parse OBJ text from any buffered reader. Material libraries are not loaded.
    pub fn from_obj_reader<R: BufRead>(reader: &mut R) -> Result<Self, ModelError> {
        let (models, _materials) = tobj::load_obj_buf(reader, &Self::load_options(), |_| {
            Err(tobj::LoadError::OpenFileFailed)
        })?;
        Self::merge(models)
    }

    fn load_options() -> tobj::LoadOptions {
        tobj::LoadOptions {
            single_index: true,
            triangulate: true,
            ignore_points: true,
            ignore_lines: true,
            ..Default::default()
        }
    }

    /// Concatenate tobj meshes into one vertex/index list.
    fn merge(models: Vec<tobj::Model>) -> Result<Self, ModelError> {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();

        for model in models {
            let offset = vertices.len();
            vertices.extend(
                model
                    .mesh
                    .positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0], p[1], p[2])),
            );
            indices.extend(model.mesh.indices.iter().map(|&i| i as usize + offset));
        }

        Self::new(vertices, indices)
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn face_count(&self) -> usize {
        self.indices.len() / FACE_SIZE
    }

    /// The three vertices of face `index`, or None past the last face.
    pub fn face(&self, index: usize) -> Option<[Vec3; 3]> {
        let base = index.checked_mul(FACE_SIZE)?;
        let face = self.indices.get(base..base + FACE_SIZE)?;
        Some([
            self.vertices[face[0]],
            self.vertices[face[1]],
            self.vertices[face[2]],
        ])
    }

    /// Iterate over all faces in index order.
    pub fn faces(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices
            .chunks_exact(FACE_SIZE)
            .map(|face| [self.vertices[face[0]], self.vertices[face[1]], self.vertices[face[2]]])
    }

    /// Component-wise minimum and maximum over all vertices.
    ///
    /// None for a model without vertices.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        if self.vertices.is_empty() {
            return None;
        }
        Some(
            self.vertices
                .iter()
                .fold((Vec3::MAX, Vec3::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        )
    }
}
