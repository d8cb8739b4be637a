/// Default rasterizer states.
///
/// All entries keep depth clipping enabled and clockwise front faces.
/// `WireFrame` requires `Features::POLYGON_MODE_LINE`; the device is
/// requested with that feature whenever the adapter offers it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RasterizerKind {
    WireFrame,
    CullNone,
    CullBack,
    CullFront,
}

impl RasterizerKind {
    pub const COUNT: usize = 4;

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::WireFrame),
            1 => Some(Self::CullNone),
            2 => Some(Self::CullBack),
            3 => Some(Self::CullFront),
            _ => None,
        }
    }
}

/// Primitive state for a rasterizer kind, ready to drop into a
/// `wgpu::RenderPipelineDescriptor`.
pub fn primitive_state(kind: RasterizerKind) -> wgpu::PrimitiveState {
    let (polygon_mode, cull_mode) = match kind {
        RasterizerKind::WireFrame => (wgpu::PolygonMode::Line, None),
        RasterizerKind::CullNone => (wgpu::PolygonMode::Fill, None),
        RasterizerKind::CullBack => (wgpu::PolygonMode::Fill, Some(wgpu::Face::Back)),
        RasterizerKind::CullFront => (wgpu::PolygonMode::Fill, Some(wgpu::Face::Front)),
    };

    wgpu::PrimitiveState {
        topology: wgpu::PrimitiveTopology::TriangleList,
        strip_index_format: None,
        front_face: wgpu::FrontFace::Cw,
        cull_mode,
        unclipped_depth: false,
        polygon_mode,
        conservative: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wireframe_uses_line_polygons_without_culling() {
        let state = primitive_state(RasterizerKind::WireFrame);
        assert_eq!(state.polygon_mode, wgpu::PolygonMode::Line);
        assert_eq!(state.cull_mode, None);
    }

    #[test]
    fn cull_modes_match_their_kind() {
        assert_eq!(primitive_state(RasterizerKind::CullNone).cull_mode, None);
        assert_eq!(
            primitive_state(RasterizerKind::CullBack).cull_mode,
            Some(wgpu::Face::Back)
        );
        assert_eq!(
            primitive_state(RasterizerKind::CullFront).cull_mode,
            Some(wgpu::Face::Front)
        );
    }

    #[test]
    fn depth_clipping_stays_enabled_everywhere() {
        for i in 0..RasterizerKind::COUNT {
            let kind = RasterizerKind::from_index(i).unwrap();
            assert!(!primitive_state(kind).unclipped_depth);
        }
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert_eq!(RasterizerKind::from_index(RasterizerKind::COUNT), None);
    }
}
