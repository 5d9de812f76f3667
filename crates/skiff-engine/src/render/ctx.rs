use crate::coords::Viewport;

/// GPU handles and per-frame transform shared by the sprite renderer.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Column-major logical-pixel to clip-space matrix for this frame.
    pub projection: [[f32; 4]; 4],
}

impl<'a> RenderCtx<'a> {
    /// Context for a frame whose drawable area is `viewport` (logical px).
    pub fn for_viewport(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        viewport: Viewport,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            projection: viewport.ortho_projection(),
        }
    }
}

/// The acquired surface view plus the frame's command encoder.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub view: &'a wgpu::TextureView,
}
