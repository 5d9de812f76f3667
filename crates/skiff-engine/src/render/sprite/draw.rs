use crate::coords::Rect;
use crate::texture::{Texture, TextureId};

use super::{build_quad, DrawOptions, Quad};

/// What the draw primitive needs to know about a texture.
pub trait SpriteTexture {
    fn id(&self) -> TextureId;

    /// `(width, height)` in pixels.
    fn size(&self) -> (u32, u32);
}

impl SpriteTexture for Texture {
    #[inline]
    fn id(&self) -> TextureId {
        Texture::id(self)
    }

    #[inline]
    fn size(&self) -> (u32, u32) {
        Texture::size(self)
    }
}

/// Receiver of finished quads (the frame's `SpriteBatch` at runtime).
pub trait QuadSink<T: ?Sized> {
    fn push_quad(&mut self, texture: &T, quad: Quad);
}

/// Draws `texture` mapped onto `target` (screen space, logical px).
///
/// A missing texture or target makes the call a no-op: nothing reaches the
/// sink. Otherwise exactly one quad is emitted.
pub fn draw_texture<T, S>(
    sink: &mut S,
    texture: Option<&T>,
    target: Option<Rect>,
    options: &DrawOptions,
) where
    T: SpriteTexture + ?Sized,
    S: QuadSink<T> + ?Sized,
{
    let (Some(texture), Some(target)) = (texture, target) else {
        return;
    };

    let quad = build_quad(texture.size(), target, options);
    sink.push_quad(texture, quad);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    struct FakeTexture {
        id: TextureId,
        size: (u32, u32),
    }

    impl FakeTexture {
        fn new(w: u32, h: u32) -> Self {
            Self { id: TextureId::next(), size: (w, h) }
        }
    }

    impl SpriteTexture for FakeTexture {
        fn id(&self) -> TextureId {
            self.id
        }
        fn size(&self) -> (u32, u32) {
            self.size
        }
    }

    #[derive(Default)]
    struct SpySink {
        calls: Vec<(TextureId, Quad)>,
    }

    impl QuadSink<FakeTexture> for SpySink {
        fn push_quad(&mut self, texture: &FakeTexture, quad: Quad) {
            self.calls.push((texture.id(), quad));
        }
    }

    #[test]
    fn missing_texture_is_a_no_op() {
        let mut spy = SpySink::default();
        draw_texture::<FakeTexture, _>(
            &mut spy,
            None,
            Some(Rect::new(0.0, 0.0, 1.0, 1.0)),
            &DrawOptions::default(),
        );
        assert!(spy.calls.is_empty());
    }

    #[test]
    fn missing_target_is_a_no_op() {
        let mut spy = SpySink::default();
        let tex = FakeTexture::new(4, 4);
        draw_texture(&mut spy, Some(&tex), None, &DrawOptions::default().rotated(45.0));
        assert!(spy.calls.is_empty());
    }

    #[test]
    fn each_call_emits_one_quad() {
        let mut spy = SpySink::default();
        let a = FakeTexture::new(4, 4);
        let b = FakeTexture::new(8, 8);

        draw_texture(&mut spy, Some(&a), Some(Rect::new(0.0, 0.0, 4.0, 4.0)), &DrawOptions::default());
        draw_texture(&mut spy, Some(&b), Some(Rect::new(5.0, 5.0, 8.0, 8.0)), &DrawOptions::default());

        assert_eq!(spy.calls.len(), 2);
        assert_eq!(spy.calls[0].0, a.id());
        assert_eq!(spy.calls[1].0, b.id());
        assert_eq!(spy.calls[1].1.position(Quad::TOP_LEFT), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn source_uses_the_texture_size() {
        let mut spy = SpySink::default();
        let tex = FakeTexture::new(200, 100);
        let opts = DrawOptions::default().with_source(Rect::new(50.0, 25.0, 50.0, 25.0));

        draw_texture(&mut spy, Some(&tex), Some(Rect::new(0.0, 0.0, 10.0, 10.0)), &opts);

        let (_, quad) = spy.calls[0];
        assert_eq!(quad.uv(Quad::TOP_LEFT), Vec2::new(0.25, 0.25));
    }

    #[test]
    fn default_draw_is_untinted() {
        let mut spy = SpySink::default();
        let tex = FakeTexture::new(2, 2);

        draw_texture(&mut spy, Some(&tex), Some(Rect::new(0.0, 0.0, 2.0, 2.0)), &DrawOptions::default());

        let (_, quad) = spy.calls[0];
        assert!(quad.vertices.iter().all(|v| v.color == [1.0, 1.0, 1.0, 1.0]));
    }
}
