/// Initialization parameters for the graphics layer.
///
/// Keep this structure stable and minimal. Add configuration flags only
/// when a concrete platform or backend requirement exists.
#[derive(Debug, Clone)]
pub struct GraphicsConfig {
    /// Requested client width in physical pixels.
    ///
    /// Subject to display-mode fallback: when no enumerated mode matches
    /// the requested resolution, the selected mode's size wins.
    pub width: u32,

    /// Requested client height in physical pixels.
    pub height: u32,

    /// Gate presentation on vertical sync.
    ///
    /// Selects the present mode: FIFO when enabled, immediate (or
    /// mailbox) when disabled.
    pub vsync: bool,

    /// Start in borderless fullscreen.
    pub fullscreen: bool,

    /// Prefer an sRGB surface format when available.
    pub prefer_srgb: bool,

    /// Desired maximum frame latency for the surface.
    ///
    /// The surface keeps `latency + 1` buffers in flight; the default of
    /// 2 gives triple buffering. This value is a hint; support depends
    /// on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GraphicsConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            vsync: true,
            fullscreen: false,
            prefer_srgb: true,
            desired_maximum_frame_latency: 2,
        }
    }
}
