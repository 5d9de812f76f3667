/// One acquired surface frame.
///
/// Holding the surface texture blocks acquisition of the next frame, so the
/// runtime submits it within the same redraw.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
