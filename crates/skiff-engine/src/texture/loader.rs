/// Device handles needed to create sprite textures.
///
/// Handed to games through `core::InitCtx`. The bind-group layout is the one
/// the sprite pipeline samples from, so every texture built here can be
/// drawn by `render::SpriteRenderer`.
pub struct TextureLoader<'a> {
    pub(super) device: &'a wgpu::Device,
    pub(super) queue: &'a wgpu::Queue,
    pub(super) layout: &'a wgpu::BindGroupLayout,
    clamp_to_border: bool,
}

impl<'a> TextureLoader<'a> {
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        layout: &'a wgpu::BindGroupLayout,
        clamp_to_border: bool,
    ) -> Self {
        Self {
            device,
            queue,
            layout,
            clamp_to_border,
        }
    }

    pub(super) fn create_sampler(&self) -> wgpu::Sampler {
        let (address_mode, border_color) = sampler_addressing(self.clamp_to_border);

        self.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("skiff sprite sampler"),
            address_mode_u: address_mode,
            address_mode_v: address_mode,
            address_mode_w: address_mode,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            border_color,
            ..Default::default()
        })
    }
}

/// Border clamp with a transparent border when the device supports it,
/// edge clamp otherwise.
fn sampler_addressing(
    clamp_to_border: bool,
) -> (wgpu::AddressMode, Option<wgpu::SamplerBorderColor>) {
    if clamp_to_border {
        (
            wgpu::AddressMode::ClampToBorder,
            Some(wgpu::SamplerBorderColor::TransparentBlack),
        )
    } else {
        (wgpu::AddressMode::ClampToEdge, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_clamp_uses_transparent_border() {
        assert_eq!(
            sampler_addressing(true),
            (
                wgpu::AddressMode::ClampToBorder,
                Some(wgpu::SamplerBorderColor::TransparentBlack)
            )
        );
    }

    #[test]
    fn falls_back_to_edge_clamp() {
        assert_eq!(sampler_addressing(false), (wgpu::AddressMode::ClampToEdge, None));
    }
}
