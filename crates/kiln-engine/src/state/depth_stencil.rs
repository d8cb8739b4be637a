use crate::targets::DepthTarget;

/// Default depth-stencil states.
///
/// The stencil side implements a basic outline/shadow-volume technique:
/// front faces increment on depth-fail, back faces decrement on
/// depth-fail, nothing else touches the stencil buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DepthStencilKind {
    /// Depth test + write and stencil enabled.
    ReadWrite,
    /// Depth and stencil both off.
    Disabled,
    /// Depth test + write only, stencil masked out.
    DepthOnly,
    /// Stencil only, depth neither tested nor written.
    StencilOnly,
    /// Depth tested but not written, stencil enabled.
    DepthTestOnly,
}

impl DepthStencilKind {
    pub const COUNT: usize = 5;

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::ReadWrite),
            1 => Some(Self::Disabled),
            2 => Some(Self::DepthOnly),
            3 => Some(Self::StencilOnly),
            4 => Some(Self::DepthTestOnly),
            _ => None,
        }
    }
}

const STENCIL_FRONT: wgpu::StencilFaceState = wgpu::StencilFaceState {
    compare: wgpu::CompareFunction::Always,
    fail_op: wgpu::StencilOperation::Keep,
    depth_fail_op: wgpu::StencilOperation::IncrementClamp,
    pass_op: wgpu::StencilOperation::Keep,
};

const STENCIL_BACK: wgpu::StencilFaceState = wgpu::StencilFaceState {
    compare: wgpu::CompareFunction::Less,
    fail_op: wgpu::StencilOperation::Keep,
    depth_fail_op: wgpu::StencilOperation::DecrementClamp,
    pass_op: wgpu::StencilOperation::Keep,
};

/// Depth-stencil state for a kind, over the engine depth format.
///
/// The depth attachment is always bound, so "disabled" is expressed as
/// an always-passing, non-writing configuration with zeroed stencil
/// masks rather than a missing state.
pub fn depth_stencil_state(kind: DepthStencilKind) -> wgpu::DepthStencilState {
    let (depth_write, depth_compare, stencil_enabled) = match kind {
        DepthStencilKind::ReadWrite => (true, wgpu::CompareFunction::LessEqual, true),
        DepthStencilKind::Disabled => (false, wgpu::CompareFunction::Always, false),
        DepthStencilKind::DepthOnly => (true, wgpu::CompareFunction::LessEqual, false),
        DepthStencilKind::StencilOnly => (false, wgpu::CompareFunction::Always, true),
        DepthStencilKind::DepthTestOnly => (false, wgpu::CompareFunction::LessEqual, true),
    };

    let mask: u32 = if stencil_enabled { 0xFF } else { 0x00 };

    wgpu::DepthStencilState {
        format: DepthTarget::FORMAT,
        depth_write_enabled: depth_write,
        depth_compare,
        stencil: wgpu::StencilState {
            front: STENCIL_FRONT,
            back: STENCIL_BACK,
            read_mask: mask,
            write_mask: mask,
        },
        bias: wgpu::DepthBiasState::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_write_tests_and_writes_depth() {
        let s = depth_stencil_state(DepthStencilKind::ReadWrite);
        assert!(s.depth_write_enabled);
        assert_eq!(s.depth_compare, wgpu::CompareFunction::LessEqual);
        assert_eq!(s.stencil.write_mask, 0xFF);
    }

    #[test]
    fn disabled_passes_everything_and_writes_nothing() {
        let s = depth_stencil_state(DepthStencilKind::Disabled);
        assert!(!s.depth_write_enabled);
        assert_eq!(s.depth_compare, wgpu::CompareFunction::Always);
        assert_eq!(s.stencil.read_mask, 0x00);
        assert_eq!(s.stencil.write_mask, 0x00);
    }

    #[test]
    fn depth_test_only_never_writes_depth() {
        let s = depth_stencil_state(DepthStencilKind::DepthTestOnly);
        assert!(!s.depth_write_enabled);
        assert_eq!(s.depth_compare, wgpu::CompareFunction::LessEqual);
    }

    #[test]
    fn stencil_ops_implement_the_volume_technique() {
        let s = depth_stencil_state(DepthStencilKind::ReadWrite);
        assert_eq!(
            s.stencil.front.depth_fail_op,
            wgpu::StencilOperation::IncrementClamp
        );
        assert_eq!(
            s.stencil.back.depth_fail_op,
            wgpu::StencilOperation::DecrementClamp
        );
        assert_eq!(s.stencil.front.compare, wgpu::CompareFunction::Always);
        assert_eq!(s.stencil.back.compare, wgpu::CompareFunction::Less);
    }

    #[test]
    fn every_kind_shares_the_depth_format() {
        for i in 0..DepthStencilKind::COUNT {
            let kind = DepthStencilKind::from_index(i).unwrap();
            assert_eq!(depth_stencil_state(kind).format, DepthTarget::FORMAT);
        }
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert_eq!(DepthStencilKind::from_index(DepthStencilKind::COUNT), None);
    }
}
