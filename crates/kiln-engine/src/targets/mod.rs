//! Render targets and the depth-stencil surface.
//!
//! The back buffer is acquired from the surface each frame; the shadow
//! map and depth-stencil target are owned textures sized to the window.
//! All surface-dependent targets are recreated together on resize so
//! that no stale view can be bound afterwards.

mod depth;
mod shadow;
mod viewport;

use anyhow::Result;

pub use depth::DepthTarget;
pub use shadow::ShadowTarget;
pub use viewport::Viewport;

/// Fixed clear color for the back buffer.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.125,
    b: 0.3,
    a: 1.0,
};

/// Indexed set of drawable targets.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RenderTargetKind {
    /// The presentable surface texture.
    BackBuffer,
    /// Off-screen render-to-texture target sampled by a later pass.
    ShadowMap,
}

impl RenderTargetKind {
    pub const COUNT: usize = 2;

    /// Validates a raw index into the target set.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::BackBuffer),
            1 => Some(Self::ShadowMap),
            _ => None,
        }
    }
}

/// Owns every window-sized target except the back buffer itself.
pub struct RenderTargets {
    pub shadow: ShadowTarget,
    pub depth: DepthTarget,
}

impl RenderTargets {
    pub fn new(device: &wgpu::Device, width: u32, height: u32, sample_count: u32) -> Result<Self> {
        let shadow = ShadowTarget::new(device, width, height)?;
        let depth = DepthTarget::new(device, width, height, sample_count)?;
        log::info!("render targets created at {width}x{height}");
        Ok(Self { shadow, depth })
    }

    /// Rebuilds the shadow and depth targets for a new surface size.
    ///
    /// Both are replaced in the same call; a caller holding views from
    /// before the resize must re-fetch them.
    pub fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) -> Result<()> {
        self.shadow.resize(device, width, height)?;
        self.depth.resize(device, width, height)?;
        log::info!("render targets recreated at {width}x{height}");
        Ok(())
    }
}
