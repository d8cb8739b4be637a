/// Default sampler states.
///
/// `Wrap` and `LinearWrap` share a descriptor; both slots exist so
/// callers can address them independently. Anisotropy stays at 1.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SamplerKind {
    /// Nearest-neighbor filtering, clamped addressing.
    Point,
    /// Linear filtering, clamped addressing.
    LinearClamp,
    /// Linear filtering, wrapped addressing on all axes.
    LinearWrap,
    /// Linear filtering, wrapped addressing.
    Wrap,
}

impl SamplerKind {
    pub const COUNT: usize = 4;

    pub const ALL: [Self; Self::COUNT] =
        [Self::Point, Self::LinearClamp, Self::LinearWrap, Self::Wrap];

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Point),
            1 => Some(Self::LinearClamp),
            2 => Some(Self::LinearWrap),
            3 => Some(Self::Wrap),
            _ => None,
        }
    }
}

pub(crate) fn descriptor(kind: SamplerKind) -> wgpu::SamplerDescriptor<'static> {
    let (label, filter, address) = match kind {
        SamplerKind::Point => (
            "point sampler",
            wgpu::FilterMode::Nearest,
            wgpu::AddressMode::ClampToEdge,
        ),
        SamplerKind::LinearClamp => (
            "linear clamp sampler",
            wgpu::FilterMode::Linear,
            wgpu::AddressMode::ClampToEdge,
        ),
        SamplerKind::LinearWrap => (
            "linear wrap sampler",
            wgpu::FilterMode::Linear,
            wgpu::AddressMode::Repeat,
        ),
        SamplerKind::Wrap => (
            "wrap sampler",
            wgpu::FilterMode::Linear,
            wgpu::AddressMode::Repeat,
        ),
    };

    wgpu::SamplerDescriptor {
        label: Some(label),
        address_mode_u: address,
        address_mode_v: address,
        address_mode_w: address,
        mag_filter: filter,
        min_filter: filter,
        mipmap_filter: match filter {
            wgpu::FilterMode::Nearest => wgpu::MipmapFilterMode::Nearest,
            wgpu::FilterMode::Linear => wgpu::MipmapFilterMode::Linear,
        },
        lod_min_clamp: 0.0,
        lod_max_clamp: f32::MAX,
        compare: None,
        anisotropy_clamp: 1,
        border_color: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_is_nearest_and_clamped() {
        let d = descriptor(SamplerKind::Point);
        assert_eq!(d.mag_filter, wgpu::FilterMode::Nearest);
        assert_eq!(d.address_mode_u, wgpu::AddressMode::ClampToEdge);
    }

    #[test]
    fn wrap_variants_repeat_on_all_axes() {
        for kind in [SamplerKind::LinearWrap, SamplerKind::Wrap] {
            let d = descriptor(kind);
            assert_eq!(d.mag_filter, wgpu::FilterMode::Linear);
            assert_eq!(d.address_mode_u, wgpu::AddressMode::Repeat);
            assert_eq!(d.address_mode_v, wgpu::AddressMode::Repeat);
            assert_eq!(d.address_mode_w, wgpu::AddressMode::Repeat);
        }
    }

    #[test]
    fn all_lists_each_kind_once() {
        for i in 0..SamplerKind::COUNT {
            assert_eq!(Some(SamplerKind::ALL[i]), SamplerKind::from_index(i));
        }
        assert_eq!(SamplerKind::from_index(SamplerKind::COUNT), None);
    }

    #[test]
    fn anisotropy_is_left_at_one() {
        for kind in SamplerKind::ALL {
            assert_eq!(descriptor(kind).anisotropy_clamp, 1);
        }
    }
}
