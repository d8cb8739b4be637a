use anyhow::{Result, ensure};

use crate::device::GraphicsError;

/// Off-screen shadow-map target.
///
/// A single-channel floating-point texture at window size, carrying two
/// views over the same backing store: one to render depth-like values
/// into, one for the later sampling pass to read. This target is never
/// presented.
pub struct ShadowTarget {
    pub texture: wgpu::Texture,
    /// Draw destination view.
    pub render_view: wgpu::TextureView,
    /// Shader-readable view over the same texture.
    pub sampled_view: wgpu::TextureView,
}

impl ShadowTarget {
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::R32Float;

    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Result<Self> {
        let (texture, render_view, sampled_view) = Self::make(device, width, height)?;
        Ok(Self {
            texture,
            render_view,
            sampled_view,
        })
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) -> Result<()> {
        let (texture, render_view, sampled_view) = Self::make(device, width, height)?;
        self.texture = texture;
        self.render_view = render_view;
        self.sampled_view = sampled_view;
        Ok(())
    }

    fn make(
        device: &wgpu::Device,
        width: u32,
        height: u32,
    ) -> Result<(wgpu::Texture, wgpu::TextureView, wgpu::TextureView)> {
        ensure!(
            width > 0 && height > 0,
            GraphicsError::ViewCreation
        );

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("shadow map"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            // The shadow map is sampled later, so it never carries MSAA.
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });

        let render_view = texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some("shadow map render view"),
            ..Default::default()
        });
        let sampled_view = texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some("shadow map sampled view"),
            ..Default::default()
        });

        Ok((texture, render_view, sampled_view))
    }
}
