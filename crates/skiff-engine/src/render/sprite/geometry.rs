use bytemuck::{Pod, Zeroable};

use crate::coords::{Rect, Vec2};

use super::DrawOptions;

/// Sprite vertex: screen position (logical px), texture coordinate, tint.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SpriteVertex {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

impl SpriteVertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x2, // uv
        2 => Float32x4  // color
    ];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// One textured quad, vertices ordered top-left, bottom-left, bottom-right,
/// top-right (before rotation).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quad {
    pub vertices: [SpriteVertex; 4],
}

impl Quad {
    pub const TOP_LEFT: usize = 0;
    pub const BOTTOM_LEFT: usize = 1;
    pub const BOTTOM_RIGHT: usize = 2;
    pub const TOP_RIGHT: usize = 3;

    /// Two triangles over the vertex order above.
    pub const INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

    #[inline]
    pub fn position(&self, corner: usize) -> Vec2 {
        let [x, y] = self.vertices[corner].pos;
        Vec2::new(x, y)
    }

    #[inline]
    pub fn uv(&self, corner: usize) -> Vec2 {
        let [u, v] = self.vertices[corner].uv;
        Vec2::new(u, v)
    }
}

/// Converts a source rect in texture pixels into normalized `[0, 1]` space.
///
/// `None` selects the whole texture.
pub fn normalize_source(source: Option<Rect>, texture_size: (u32, u32)) -> Rect {
    let Some(src) = source else {
        return Rect::new(0.0, 0.0, 1.0, 1.0);
    };

    let tw = texture_size.0 as f32;
    let th = texture_size.1 as f32;
    Rect::new(src.x() / tw, src.y() / th, src.width() / tw, src.height() / th)
}

/// Builds the quad that maps `options.source` of a texture onto `target`.
///
/// Rotation turns the four screen positions about the pivot; texture
/// coordinates are left untouched.
pub fn build_quad(texture_size: (u32, u32), target: Rect, options: &DrawOptions) -> Quad {
    let uv = normalize_source(options.source, texture_size);
    let pivot = target.origin + options.pivot.unwrap_or(target.size / 2.0);
    let color = options.tint.to_array();

    let corners = [
        (Vec2::new(target.left(), target.top()), Vec2::new(uv.left(), uv.top())),
        (Vec2::new(target.left(), target.bottom()), Vec2::new(uv.left(), uv.bottom())),
        (Vec2::new(target.right(), target.bottom()), Vec2::new(uv.right(), uv.bottom())),
        (Vec2::new(target.right(), target.top()), Vec2::new(uv.right(), uv.top())),
    ];

    let vertices = corners.map(|(pos, uv)| {
        let pos = pos.rotated_about(pivot, options.rotation_degrees);
        SpriteVertex {
            pos: [pos.x, pos.y],
            uv: [uv.x, uv.y],
            color,
        }
    });

    Quad { vertices }
}

/// Index list for `quads` consecutive quads sharing one vertex buffer.
pub(crate) fn quad_indices(quads: usize) -> Vec<u32> {
    (0..quads as u32)
        .flat_map(|q| Quad::INDICES.map(|i| q * 4 + i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    const EPS: f32 = 1e-4;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    // ── source normalization ──────────────────────────────────────────────

    #[test]
    fn absent_source_is_unit_square() {
        assert_eq!(normalize_source(None, (200, 100)), Rect::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn source_is_divided_by_texture_size() {
        let n = normalize_source(Some(Rect::new(50.0, 25.0, 50.0, 25.0)), (200, 100));
        assert_eq!(n, Rect::new(0.25, 0.25, 0.25, 0.25));
    }

    // ── default quad ──────────────────────────────────────────────────────

    #[test]
    fn default_quad_spans_whole_texture_in_vertex_order() {
        let q = build_quad((64, 32), Rect::new(10.0, 20.0, 30.0, 40.0), &DrawOptions::default());

        assert_eq!(q.position(Quad::TOP_LEFT), Vec2::new(10.0, 20.0));
        assert_eq!(q.position(Quad::BOTTOM_LEFT), Vec2::new(10.0, 60.0));
        assert_eq!(q.position(Quad::BOTTOM_RIGHT), Vec2::new(40.0, 60.0));
        assert_eq!(q.position(Quad::TOP_RIGHT), Vec2::new(40.0, 20.0));

        assert_eq!(q.uv(Quad::TOP_LEFT), Vec2::new(0.0, 0.0));
        assert_eq!(q.uv(Quad::BOTTOM_LEFT), Vec2::new(0.0, 1.0));
        assert_eq!(q.uv(Quad::BOTTOM_RIGHT), Vec2::new(1.0, 1.0));
        assert_eq!(q.uv(Quad::TOP_RIGHT), Vec2::new(1.0, 0.0));

        assert!(q.vertices.iter().all(|v| v.color == [1.0; 4]));
    }

    #[test]
    fn source_region_maps_to_uv_corners() {
        let opts = DrawOptions::default().with_source(Rect::new(50.0, 25.0, 50.0, 25.0));
        let q = build_quad((200, 100), Rect::new(0.0, 0.0, 10.0, 10.0), &opts);

        assert_eq!(q.uv(Quad::TOP_LEFT), Vec2::new(0.25, 0.25));
        assert_eq!(q.uv(Quad::BOTTOM_RIGHT), Vec2::new(0.5, 0.5));
    }

    // ── rotation ──────────────────────────────────────────────────────────

    #[test]
    fn quarter_turn_moves_top_left_to_top_right() {
        let target = Rect::new(0.0, 0.0, 10.0, 10.0);
        let plain = build_quad((8, 8), target, &DrawOptions::default());
        let turned = build_quad((8, 8), target, &DrawOptions::default().rotated(90.0));

        assert!(close(turned.position(Quad::TOP_LEFT), plain.position(Quad::TOP_RIGHT)));
        assert!(close(turned.position(Quad::TOP_RIGHT), plain.position(Quad::BOTTOM_RIGHT)));
        // Texture mapping is unaffected.
        assert_eq!(turned.uv(Quad::TOP_LEFT), plain.uv(Quad::TOP_LEFT));
    }

    #[test]
    fn explicit_pivot_is_local_to_target() {
        // Pivot at the target's own top-left: that corner stays put.
        let target = Rect::new(100.0, 100.0, 10.0, 20.0);
        let opts = DrawOptions::default().rotated(90.0).with_pivot(0.0, 0.0);
        let q = build_quad((8, 8), target, &opts);

        assert!(close(q.position(Quad::TOP_LEFT), Vec2::new(100.0, 100.0)));
        assert!(close(q.position(Quad::TOP_RIGHT), Vec2::new(100.0, 110.0)));
    }

    #[test]
    fn pivot_is_honoured_together_with_tint() {
        let target = Rect::new(0.0, 0.0, 10.0, 10.0);
        let opts = DrawOptions::default()
            .rotated(180.0)
            .with_pivot(0.0, 0.0)
            .tinted_argb(0x80FF0000);
        let q = build_quad((8, 8), target, &opts);

        assert!(close(q.position(Quad::BOTTOM_RIGHT), Vec2::new(-10.0, -10.0)));
        assert_eq!(q.vertices[0].color, Color::from_argb(0x80FF0000).to_array());
    }

    // ── tint ──────────────────────────────────────────────────────────────

    #[test]
    fn tint_is_uniform_across_vertices() {
        let opts = DrawOptions::default().tinted_argb(0xFF00FF00);
        let q = build_quad((1, 1), Rect::new(0.0, 0.0, 1.0, 1.0), &opts);
        assert!(q.vertices.iter().all(|v| v.color == [0.0, 1.0, 0.0, 1.0]));
    }

    // ── indices ───────────────────────────────────────────────────────────

    #[test]
    fn indices_offset_per_quad() {
        assert_eq!(quad_indices(2), vec![0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7]);
        assert!(quad_indices(0).is_empty());
    }
}
