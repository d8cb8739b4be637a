//! Fixed-function state tables and sampler objects.
//!
//! wgpu bakes rasterizer, blend and depth-stencil state into pipeline
//! descriptors, so those three families live here as immutable lookup
//! tables indexed by small enums — callers feed the returned descriptors
//! into their pipelines. Samplers are real device objects and are built
//! once at bring-up, never rebuilt until the next bring-up.
//!
//! Every enum validates raw indices through `from_index`; a caller
//! supplied index is never trusted.

mod blend;
mod depth_stencil;
mod rasterizer;
mod sampler;

pub use blend::{BlendKind, blend_state, color_target};
pub use depth_stencil::{DepthStencilKind, depth_stencil_state};
pub use rasterizer::{RasterizerKind, primitive_state};
pub use sampler::SamplerKind;

/// Programmable stage a sampler can be bound to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Compute,
}

impl ShaderStage {
    pub fn to_wgpu(self) -> wgpu::ShaderStages {
        match self {
            Self::Vertex => wgpu::ShaderStages::VERTEX,
            Self::Fragment => wgpu::ShaderStages::FRAGMENT,
            Self::Compute => wgpu::ShaderStages::COMPUTE,
        }
    }
}

/// Bind-group-layout entry for one sampler at a register slot, visible
/// to the given stage.
pub fn sampler_layout_entry(slot: u32, stage: ShaderStage) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding: slot,
        visibility: stage.to_wgpu(),
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    }
}

/// Bind-group-layout entry for one sampled texture at a register slot,
/// visible to the given stage. Pairs with [`texture_bind_entry`].
pub fn texture_layout_entry(slot: u32, stage: ShaderStage) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding: slot,
        visibility: stage.to_wgpu(),
        ty: wgpu::BindingType::Texture {
            sample_type: wgpu::TextureSampleType::Float { filterable: false },
            view_dimension: wgpu::TextureViewDimension::D2,
            multisampled: false,
        },
        count: None,
    }
}

/// Bind-group entry binding a shader-readable view (for example the
/// shadow map's sampled view) at a register slot.
pub fn texture_bind_entry<'a>(slot: u32, view: &'a wgpu::TextureView) -> wgpu::BindGroupEntry<'a> {
    wgpu::BindGroupEntry {
        binding: slot,
        resource: wgpu::BindingResource::TextureView(view),
    }
}

/// Owns the default sampler objects.
///
/// Built once during bring-up; entries are immutable afterwards. The
/// descriptor tables for rasterizer/blend/depth-stencil state are free
/// functions in this module and need no storage.
pub struct StateCache {
    samplers: [wgpu::Sampler; SamplerKind::COUNT],
}

impl StateCache {
    pub fn new(device: &wgpu::Device) -> Self {
        let samplers = SamplerKind::ALL.map(|kind| device.create_sampler(&sampler::descriptor(kind)));
        log::info!("state cache created ({} samplers)", samplers.len());
        Self { samplers }
    }

    /// Returns the sampler for a state kind.
    pub fn sampler(&self, kind: SamplerKind) -> &wgpu::Sampler {
        &self.samplers[kind as usize]
    }

    /// Index-validated sampler lookup.
    pub fn sampler_by_index(&self, index: usize) -> Option<&wgpu::Sampler> {
        SamplerKind::from_index(index).map(|kind| self.sampler(kind))
    }

    /// Bind-group entry binding a sampler at a register slot, paired
    /// with [`sampler_layout_entry`] on the layout side.
    pub fn sampler_bind_entry(&self, slot: u32, kind: SamplerKind) -> wgpu::BindGroupEntry<'_> {
        wgpu::BindGroupEntry {
            binding: slot,
            resource: wgpu::BindingResource::Sampler(self.sampler(kind)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_stages_map_to_wgpu() {
        assert_eq!(ShaderStage::Vertex.to_wgpu(), wgpu::ShaderStages::VERTEX);
        assert_eq!(
            ShaderStage::Fragment.to_wgpu(),
            wgpu::ShaderStages::FRAGMENT
        );
        assert_eq!(ShaderStage::Compute.to_wgpu(), wgpu::ShaderStages::COMPUTE);
    }

    #[test]
    fn sampler_layout_entry_carries_slot_and_visibility() {
        let entry = sampler_layout_entry(3, ShaderStage::Fragment);
        assert_eq!(entry.binding, 3);
        assert_eq!(entry.visibility, wgpu::ShaderStages::FRAGMENT);
        assert!(matches!(
            entry.ty,
            wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering)
        ));
    }
}
