//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - display-mode selection against the window's monitor
//! - creating & configuring the Surface (swapchain)
//! - acquiring frames and providing encoders/views for rendering
//!
//! Bring-up is staged: adapter selection, display-mode selection, then
//! device + surface creation. Each stage logs on failure and aborts the
//! remaining stages; the caller drops the partially built value.

mod config;
mod context;
mod display;
mod error;
mod frame;
pub(crate) mod surface;

pub use config::GraphicsConfig;
pub use context::GraphicsContext;
pub use display::{DisplayMode, select_display_mode};
pub use error::{GraphicsError, SurfaceErrorAction};
pub use frame::Frame;
