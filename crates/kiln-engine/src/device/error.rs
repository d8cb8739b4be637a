use thiserror::Error;

/// Failure taxonomy for staged graphics bring-up and resize.
///
/// Fallible entry points return `anyhow::Result` with one of these
/// variants attached as context, so callers can both print a readable
/// chain and `downcast_ref::<GraphicsError>()` to branch on the failing
/// stage.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum GraphicsError {
    /// No adapter (physical GPU) could be selected.
    #[error("no suitable graphics adapter")]
    Adapter,

    /// Display-mode enumeration produced no usable modes.
    #[error("display mode enumeration produced no modes")]
    DisplayMode,

    /// Device, queue or presentation surface creation failed.
    #[error("device or presentation surface creation failed")]
    DeviceCreation,

    /// A render-target or depth-stencil view could not be created.
    #[error("render target or depth-stencil view creation failed")]
    ViewCreation,

    /// A resize was attempted with an unusable target size.
    #[error("surface resize rejected")]
    Resize,
}

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}
