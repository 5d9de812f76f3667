use std::ops::Range;
use std::rc::Rc;

use crate::texture::{Texture, TextureId};

use super::{Quad, QuadSink, SpriteVertex};

struct BatchedQuad {
    texture: TextureId,
    bind_group: Rc<wgpu::BindGroup>,
    quad: Quad,
}

/// Quads recorded during one frame, in call order.
///
/// Cleared by the runtime before each `Game::render`. Holds a reference to
/// each texture's bind group only until then.
#[derive(Default)]
pub struct SpriteBatch {
    items: Vec<BatchedQuad>,
}

impl SpriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded quads. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Vertices of all quads, four per quad, in recording order.
    pub(crate) fn vertices(&self) -> Vec<SpriteVertex> {
        self.items.iter().flat_map(|item| item.quad.vertices).collect()
    }

    /// Consecutive quads sampling the same texture, with that texture's bind group.
    pub(crate) fn runs(&self) -> impl Iterator<Item = (&wgpu::BindGroup, Range<u32>)> + '_ {
        texture_runs(self.items.iter().map(|item| item.texture))
            .into_iter()
            .map(move |range| (&*self.items[range.start as usize].bind_group, range))
    }
}

impl QuadSink<Texture> for SpriteBatch {
    fn push_quad(&mut self, texture: &Texture, quad: Quad) {
        self.items.push(BatchedQuad {
            texture: texture.id(),
            bind_group: Rc::clone(texture.bind_group()),
            quad,
        });
    }
}

/// Splits a sequence of texture ids into ranges of equal consecutive ids.
///
/// Paint order is preserved: `A A B A` yields three runs, not two.
fn texture_runs(ids: impl IntoIterator<Item = TextureId>) -> Vec<Range<u32>> {
    let mut runs: Vec<Range<u32>> = Vec::new();
    let mut current: Option<TextureId> = None;

    for (i, id) in ids.into_iter().enumerate() {
        let i = i as u32;
        match runs.last_mut() {
            Some(run) if current == Some(id) => run.end = i + 1,
            _ => {
                runs.push(i..i + 1);
                current = Some(id);
            }
        }
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_runs() {
        assert!(texture_runs(std::iter::empty()).is_empty());
    }

    #[test]
    fn consecutive_ids_merge() {
        let a = TextureId::next();
        let b = TextureId::next();
        assert_eq!(texture_runs([a, a, a, b, b]), vec![0..3, 3..5]);
    }

    #[test]
    fn interleaved_ids_keep_paint_order() {
        let a = TextureId::next();
        let b = TextureId::next();
        assert_eq!(texture_runs([a, a, b, a]), vec![0..2, 2..3, 3..4]);
    }
}
