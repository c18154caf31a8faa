//! CPU-side model representation: attribute pools, face records and the
//! assembly step that resolves them into renderer-ready triangles.

use std::path::{Path, PathBuf};

use crate::error::{AddressingError, AttributeKind};

/// One vertex reference within a face. Indices are 0-based into the owning
/// model's pools; `None` marks a slot the face never declared, which is a
/// different thing from index 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Corner {
    pub position: usize,
    pub texture: Option<usize>,
    pub normal: Option<usize>,
}

/// A pre-triangulated face: exactly three corners, winding order as declared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceRecord {
    pub corners: [Corner; 3],
}

/// Vertex with every attribute dereferenced and copied out of the pools.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResolvedVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Three resolved vertices in the face's declared corner order. The order is
/// a contract with the renderer's backface culling; nothing reorders it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [ResolvedVertex; 3],
}

/// What role a model plays in the scene. Stored on the model verbatim;
/// only the flattening step downstream gives it meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    Terrain,
    Character,
    Obstacle,
}

/// The result of parsing one geometry file. Pools are append-only during
/// the parse and immutable afterwards; faces hold indices into them.
#[derive(Clone, Debug)]
pub struct Model {
    pub positions: Vec<[f32; 3]>,
    pub texcoords: Vec<[f32; 2]>,
    pub normals: Vec<[f32; 3]>,
    pub faces: Vec<FaceRecord>,
    /// Diffuse texture resolved from the material library, relative to the
    /// geometry file's directory. Empty when the model has none.
    pub texture_path: PathBuf,
    pub classification: Classification,
}

impl Model {
    /// The diffuse texture hand-off: `None` means "no texture", which the
    /// texture-loading collaborator treats as a no-op.
    pub fn texture_path(&self) -> Option<&Path> {
        if self.texture_path.as_os_str().is_empty() {
            None
        } else {
            Some(&self.texture_path)
        }
    }

    /// Resolve every face into a triangle with by-value attributes.
    ///
    /// Pure function of the model: each call builds a fresh list, so callers
    /// may regenerate geometry whenever instance modifiers change. Fails fast
    /// on the first corner whose position, texture or normal slot cannot be
    /// resolved; a failed model yields zero triangles, never a partial mesh.
    pub fn assemble(&self) -> Result<Vec<Triangle>, AddressingError> {
        let mut triangles = Vec::with_capacity(self.faces.len());

        for (face, record) in self.faces.iter().enumerate() {
            let mut vertices = [ResolvedVertex::default(); 3];
            for (corner, reference) in record.corners.iter().enumerate() {
                let position = self
                    .positions
                    .get(reference.position)
                    .copied()
                    .ok_or(AddressingError {
                        kind: AttributeKind::Position,
                        face,
                        corner,
                    })?;
                let uv = reference
                    .texture
                    .and_then(|i| self.texcoords.get(i))
                    .copied()
                    .ok_or(AddressingError {
                        kind: AttributeKind::TextureCoordinate,
                        face,
                        corner,
                    })?;
                let normal = reference
                    .normal
                    .and_then(|i| self.normals.get(i))
                    .copied()
                    .ok_or(AddressingError {
                        kind: AttributeKind::Normal,
                        face,
                        corner,
                    })?;
                vertices[corner] = ResolvedVertex {
                    position,
                    normal,
                    uv,
                };
            }
            triangles.push(Triangle { vertices });
        }

        Ok(triangles)
    }
}
