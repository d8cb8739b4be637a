//! Kiln engine crate.
//!
//! This crate owns the GPU device/resource lifecycle and the
//! component-based entity framework used by higher layers.
//!
//! Subsystems:
//! - [`device`] — wgpu instance/adapter/device/surface bring-up and teardown
//! - [`targets`] — render targets, depth-stencil surface, viewport
//! - [`state`] — fixed-function state tables and sampler objects
//! - [`entity`] — entities and type-keyed component storage
//! - [`graphics`] — the frame/resize controller tying the above together

pub mod device;
pub mod entity;
pub mod graphics;
pub mod logging;
pub mod state;
pub mod targets;

pub use graphics::Graphics;
