/// Default blend states over a single render-target slot.
///
/// Each entry is a distinct source/destination factor and operation
/// combination; all of them write every color channel.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BlendKind {
    /// Blending off; source replaces destination.
    Disabled,
    /// `src * 1 + dst * 1`, alpha takes the minimum.
    Additive,
    /// `src * src_alpha + dst * 1`.
    Alpha,
    /// `dst * 1 - src * src_alpha`.
    Subtract,
    /// `dst * src` color modulation.
    Multiply,
    /// Classic `src_alpha / 1 - src_alpha` over-compositing.
    Alignment,
}

impl BlendKind {
    pub const COUNT: usize = 6;

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Disabled),
            1 => Some(Self::Additive),
            2 => Some(Self::Alpha),
            3 => Some(Self::Subtract),
            4 => Some(Self::Multiply),
            5 => Some(Self::Alignment),
            _ => None,
        }
    }
}

/// Blend state for a kind; `None` means blending disabled.
pub fn blend_state(kind: BlendKind) -> Option<wgpu::BlendState> {
    use wgpu::{BlendComponent, BlendFactor, BlendOperation, BlendState};

    // Alpha channel: keep the source alpha except where noted.
    let pass_through_alpha = BlendComponent {
        src_factor: BlendFactor::One,
        dst_factor: BlendFactor::Zero,
        operation: BlendOperation::Add,
    };

    match kind {
        BlendKind::Disabled => None,
        BlendKind::Additive => Some(BlendState {
            color: BlendComponent {
                src_factor: BlendFactor::One,
                dst_factor: BlendFactor::One,
                operation: BlendOperation::Add,
            },
            // Min requires both factors fixed at one.
            alpha: BlendComponent {
                src_factor: BlendFactor::One,
                dst_factor: BlendFactor::One,
                operation: BlendOperation::Min,
            },
        }),
        BlendKind::Alpha => Some(BlendState {
            color: BlendComponent {
                src_factor: BlendFactor::SrcAlpha,
                dst_factor: BlendFactor::One,
                operation: BlendOperation::Add,
            },
            alpha: pass_through_alpha,
        }),
        BlendKind::Subtract => Some(BlendState {
            color: BlendComponent {
                src_factor: BlendFactor::SrcAlpha,
                dst_factor: BlendFactor::One,
                operation: BlendOperation::ReverseSubtract,
            },
            alpha: pass_through_alpha,
        }),
        BlendKind::Multiply => Some(BlendState {
            color: BlendComponent {
                src_factor: BlendFactor::Zero,
                dst_factor: BlendFactor::Src,
                operation: BlendOperation::Add,
            },
            alpha: pass_through_alpha,
        }),
        BlendKind::Alignment => Some(BlendState {
            color: BlendComponent {
                src_factor: BlendFactor::SrcAlpha,
                dst_factor: BlendFactor::OneMinusSrcAlpha,
                operation: BlendOperation::Add,
            },
            alpha: pass_through_alpha,
        }),
    }
}

/// Color-target descriptor for a surface format and blend kind, writing
/// all channels of a single render-target slot.
pub fn color_target(format: wgpu::TextureFormat, kind: BlendKind) -> wgpu::ColorTargetState {
    wgpu::ColorTargetState {
        format,
        blend: blend_state(kind),
        write_mask: wgpu::ColorWrites::ALL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{BlendFactor, BlendOperation};

    #[test]
    fn disabled_means_no_blend_state() {
        assert_eq!(blend_state(BlendKind::Disabled), None);
    }

    #[test]
    fn additive_sums_colors_and_takes_min_alpha() {
        let s = blend_state(BlendKind::Additive).unwrap();
        assert_eq!(s.color.src_factor, BlendFactor::One);
        assert_eq!(s.color.dst_factor, BlendFactor::One);
        assert_eq!(s.color.operation, BlendOperation::Add);
        assert_eq!(s.alpha.operation, BlendOperation::Min);
    }

    #[test]
    fn subtract_reverse_subtracts_from_destination() {
        let s = blend_state(BlendKind::Subtract).unwrap();
        assert_eq!(s.color.src_factor, BlendFactor::SrcAlpha);
        assert_eq!(s.color.operation, BlendOperation::ReverseSubtract);
    }

    #[test]
    fn multiply_modulates_by_source_color() {
        let s = blend_state(BlendKind::Multiply).unwrap();
        assert_eq!(s.color.src_factor, BlendFactor::Zero);
        assert_eq!(s.color.dst_factor, BlendFactor::Src);
    }

    #[test]
    fn alignment_is_over_compositing() {
        let s = blend_state(BlendKind::Alignment).unwrap();
        assert_eq!(s.color.src_factor, BlendFactor::SrcAlpha);
        assert_eq!(s.color.dst_factor, BlendFactor::OneMinusSrcAlpha);
    }

    #[test]
    fn color_targets_write_all_channels() {
        for i in 0..BlendKind::COUNT {
            let kind = BlendKind::from_index(i).unwrap();
            let target = color_target(wgpu::TextureFormat::Bgra8UnormSrgb, kind);
            assert_eq!(target.write_mask, wgpu::ColorWrites::ALL);
        }
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert_eq!(BlendKind::from_index(BlendKind::COUNT), None);
    }
}
