use anyhow::{Result, ensure};

use crate::device::GraphicsError;

/// A depth-stencil texture sized to the window.
///
/// The sample count **must** match the color attachment's sample count;
/// otherwise the GPU validation layer will reject the render pass.
pub struct DepthTarget {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sample_count: u32,
}

impl DepthTarget {
    /// 24-bit depth + 8-bit stencil, the format the depth-stencil state
    /// tables in [`crate::state`] are built for.
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24PlusStencil8;

    pub fn new(device: &wgpu::Device, width: u32, height: u32, sample_count: u32) -> Result<Self> {
        let (texture, view) = Self::make(device, width, height, sample_count)?;
        Ok(Self {
            texture,
            view,
            sample_count,
        })
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) -> Result<()> {
        let (texture, view) = Self::make(device, width, height, self.sample_count)?;
        self.texture = texture;
        self.view = view;
        Ok(())
    }

    fn make(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        sample_count: u32,
    ) -> Result<(wgpu::Texture, wgpu::TextureView)> {
        ensure!(
            width > 0 && height > 0,
            GraphicsError::ViewCreation
        );

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth-stencil target"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Ok((texture, view))
    }
}
