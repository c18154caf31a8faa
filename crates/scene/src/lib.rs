//! Vertex-buffer generation: flatten assembled triangles into the
//! renderer's interleaved layout, applying per-instance modifiers.
//!
//! The assembler hands over canonical, modifier-free geometry; scroll and
//! offset effects are applied here so the same model can be re-flattened
//! every frame without re-parsing.

use bytemuck::{Pod, Zeroable};

use asset::mesh::Triangle;

/// Interleaved vertex exactly as the renderer consumes it:
/// position (3 floats), normal (3), texture coordinate (2).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct PackedVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl PackedVertex {
    /// Stride of the interleave, in floats. 24 per triangle.
    pub const FLOATS_PER_VERTEX: usize = 8;
}

/// Per-model-instance channels the game loop drives each frame. Additive on
/// position x/y; `scroll_u` subtracts from u and `palette_u` adds to it,
/// matching the background-scroll and palette-swap effects.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InstanceModifiers {
    pub offset_x: f32,
    pub offset_y: f32,
    pub scroll_u: f32,
    pub palette_u: f32,
}

/// Flatten triangles into the interleaved layout, modifiers applied.
///
/// Ordering is stable: triangles in input order, corners in declared winding
/// order. The renderer keys per-frame transforms off that stability, so it
/// must hold across repeated calls.
pub fn flatten(triangles: &[Triangle], modifiers: &InstanceModifiers) -> Vec<PackedVertex> {
    log::trace!("flattening {} triangles", triangles.len());
    let mut out = Vec::with_capacity(triangles.len() * 3);
    for triangle in triangles {
        for vertex in &triangle.vertices {
            out.push(PackedVertex {
                position: [
                    vertex.position[0] + modifiers.offset_x,
                    vertex.position[1] + modifiers.offset_y,
                    vertex.position[2],
                ],
                normal: vertex.normal,
                uv: [
                    vertex.uv[0] - modifiers.scroll_u + modifiers.palette_u,
                    vertex.uv[1],
                ],
            });
        }
    }
    out
}

/// View the packed vertices as a raw float slice for buffer upload.
pub fn as_floats(vertices: &[PackedVertex]) -> &[f32] {
    bytemuck::cast_slice(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use asset::mesh::ResolvedVertex;

    fn triangle() -> Triangle {
        let mut vertices = [ResolvedVertex::default(); 3];
        for (i, vertex) in vertices.iter_mut().enumerate() {
            let f = i as f32;
            *vertex = ResolvedVertex {
                position: [f, 10.0 + f, 20.0 + f],
                normal: [0.0, 0.0, 1.0],
                uv: [0.5, 0.25],
            };
        }
        Triangle { vertices }
    }

    #[test]
    fn packed_vertex_is_eight_floats() {
        assert_eq!(
            std::mem::size_of::<PackedVertex>(),
            PackedVertex::FLOATS_PER_VERTEX * std::mem::size_of::<f32>()
        );
    }

    #[test]
    fn interleave_order_is_position_normal_uv() {
        let flat = flatten(&[triangle()], &InstanceModifiers::default());
        assert_eq!(flat.len(), 3);
        let floats = as_floats(&flat);
        assert_eq!(floats.len(), 24);
        // First vertex: x y z nx ny nz u v.
        assert_eq!(&floats[..8], &[0.0, 10.0, 20.0, 0.0, 0.0, 1.0, 0.5, 0.25]);
        // Second vertex starts one stride later.
        assert_eq!(floats[8], 1.0);
    }

    #[test]
    fn modifiers_shift_position_and_scroll_uv() {
        let modifiers = InstanceModifiers {
            offset_x: 0.5,
            offset_y: -1.0,
            scroll_u: 0.2,
            palette_u: 0.05,
        };
        let flat = flatten(&[triangle()], &modifiers);
        let first = flat[0];
        assert_eq!(first.position, [0.5, 9.0, 20.0]);
        assert_eq!(first.normal, [0.0, 0.0, 1.0]);
        assert!((first.uv[0] - 0.35).abs() < 1e-6);
        assert_eq!(first.uv[1], 0.25);
    }

    #[test]
    fn flatten_output_is_canonical_without_modifiers() {
        let a = flatten(&[triangle(), triangle()], &InstanceModifiers::default());
        let b = flatten(&[triangle(), triangle()], &InstanceModifiers::default());
        assert_eq!(a, b);
        assert_eq!(a.len(), 6);
    }
}
