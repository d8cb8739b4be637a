//! Frame/resize controller.
//!
//! [`Graphics`] owns the device context, the render targets and the
//! state cache, and coordinates them for the per-frame clear/present
//! cycle, window resizes and fullscreen toggling. All methods must be
//! called from the single render thread that owns the value.

use anyhow::{Context as _, Result, bail};
use winit::dpi::PhysicalSize;
use winit::window::{Fullscreen, Window};

use crate::device::{
    Frame, GraphicsConfig, GraphicsContext, GraphicsError, SurfaceErrorAction,
};
use crate::state::StateCache;
use crate::targets::{CLEAR_COLOR, RenderTargetKind, RenderTargets, Viewport};

/// Top-level graphics system.
///
/// Constructed once per window by [`initialize`](Self::initialize);
/// destroying it releases every GPU object. Not `Clone` — exactly one
/// instance owns the device at a time.
pub struct Graphics<'w> {
    targets: RenderTargets,
    states: StateCache,
    viewport: Viewport,
    // Dropped last so views and samplers die before the device.
    context: GraphicsContext<'w>,
}

impl<'w> Graphics<'w> {
    /// Full staged bring-up: device + surface, render targets, state
    /// cache, viewport. The first failing stage logs, aborts the rest
    /// and bubbles its error; partially created objects are released by
    /// drop.
    pub async fn initialize(window: &'w Window, config: GraphicsConfig) -> Result<Graphics<'w>> {
        let context = GraphicsContext::new(window, &config)
            .await
            .inspect_err(|e| log::error!("graphics bring-up failed: {e:#}"))?;

        let size = context.size();
        let targets = RenderTargets::new(
            context.device(),
            size.width,
            size.height,
            context.sample_count(),
        )
        .inspect_err(|e| log::error!("render target creation failed: {e:#}"))?;

        let states = StateCache::new(context.device());
        let viewport = Viewport::full(size.width, size.height);

        log::info!("graphics system initialized");

        Ok(Self {
            targets,
            states,
            viewport,
            context,
        })
    }

    /// Synchronous wrapper around [`initialize`](Self::initialize).
    pub fn initialize_blocking(window: &'w Window, config: GraphicsConfig) -> Result<Graphics<'w>> {
        pollster::block_on(Self::initialize(window, config))
    }

    /// Teardown. Reports still-live objects (debug builds), then
    /// releases targets, state objects, surface, device, adapter and
    /// instance in that order. Consuming `self` makes a second call
    /// unrepresentable; a fresh [`initialize`](Self::initialize)
    /// afterwards produces an equivalent context.
    pub fn finalize(self) {
        self.context.report_live_objects("finalize requested");
        drop(self);
        log::info!("graphics system finalized");
    }

    // ── frame bracket ─────────────────────────────────────────────────────

    /// Starts a frame: acquires the back buffer and records a clear of
    /// the back buffer (fixed clear color) and the depth-stencil
    /// surface (depth 1.0, stencil 0).
    ///
    /// Must be paired with [`end_frame`](Self::end_frame) once per
    /// presented frame.
    pub fn begin_frame(&mut self) -> std::result::Result<Frame, wgpu::SurfaceError> {
        let mut frame = self.context.begin_frame()?;
        frame.push_annotation("kiln frame");

        {
            let mut pass = frame
                .encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("frame clear"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &frame.view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                        view: &self.targets.depth.view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(0),
                            store: wgpu::StoreOp::Store,
                        }),
                    }),
                    timestamp_writes: None,
                    occlusion_query_set: None,
                    multiview_mask: None,
                });
            self.viewport.apply(&mut pass);
        }

        Ok(frame)
    }

    /// Ends a frame: submits the encoder and presents the back buffer
    /// (vsync-gated by the present mode fixed at bring-up). Pass and
    /// encoder scoping guarantee that no pipeline or binding state
    /// survives into the next frame.
    pub fn end_frame(&mut self, mut frame: Frame) {
        frame.pop_annotation();
        self.context.submit(frame);
    }

    /// Converts a surface acquisition error into a recovery action.
    pub fn handle_surface_error(&mut self, err: wgpu::SurfaceError) -> SurfaceErrorAction {
        self.context.handle_surface_error(err)
    }

    // ── resize / mode change ──────────────────────────────────────────────

    /// Resizes the presentation surface and rebuilds every
    /// surface-dependent target.
    ///
    /// `(0, 0)` is the sentinel for "keep the current client size",
    /// resolved from the window. A resolved zero dimension (minimized
    /// window) is rejected with [`GraphicsError::Resize`] and mutates
    /// nothing.
    pub fn change_window_size(&mut self, width: u32, height: u32) -> Result<()> {
        let size = if width == 0 || height == 0 {
            self.context.window().inner_size()
        } else {
            PhysicalSize::new(width, height)
        };

        if size.width == 0 || size.height == 0 {
            log::warn!("resize rejected: target size {}x{}", size.width, size.height);
            bail!(GraphicsError::Resize);
        }

        self.context.resize(size);
        self.targets
            .recreate(self.context.device(), size.width, size.height)
            .context(GraphicsError::Resize)?;
        self.viewport = Viewport::full(size.width, size.height);

        log::info!("surface resized to {}x{}", size.width, size.height);
        Ok(())
    }

    /// Toggles borderless fullscreen, re-shows the window and resizes
    /// to the resulting client size.
    pub fn change_window_mode(&mut self) -> Result<()> {
        let window = self.context.window();
        let fullscreen = window.fullscreen().is_some();

        if fullscreen {
            window.set_fullscreen(None);
            log::info!("leaving fullscreen");
        } else {
            window.set_fullscreen(Some(Fullscreen::Borderless(None)));
            log::info!("entering fullscreen");
        }
        window.set_visible(true);

        self.change_window_size(0, 0)
    }

    // ── binding primitives ────────────────────────────────────────────────

    /// Opens a render pass targeting `target` with the depth-stencil
    /// surface attached, loading previous contents. The configured
    /// viewport is pre-applied.
    pub fn render_pass<'e>(
        &'e self,
        frame: &'e mut Frame,
        target: RenderTargetKind,
    ) -> wgpu::RenderPass<'e> {
        let mut pass = frame
            .encoder
            .begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("kiln pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: self.color_view(target, &frame.view),
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    }),
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        self.viewport.apply(&mut pass);
        pass
    }

    /// Records a clear of one render target to an explicit color.
    pub fn clear_render_target(
        &self,
        frame: &mut Frame,
        target: RenderTargetKind,
        color: [f64; 4],
    ) {
        let _pass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("target clear"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: self.color_view(target, &frame.view),
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: color[0],
                        g: color[1],
                        b: color[2],
                        a: color[3],
                    }),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });
    }

    /// Records a clear of the depth-stencil surface (depth 1.0,
    /// stencil 0) without touching any color target.
    pub fn clear_depth_stencil(&self, frame: &mut Frame) {
        let _pass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("depth-stencil clear"),
            color_attachments: &[],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.targets.depth.view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(0),
                    store: wgpu::StoreOp::Store,
                }),
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });
    }

    fn color_view<'a>(
        &'a self,
        target: RenderTargetKind,
        back_buffer: &'a wgpu::TextureView,
    ) -> &'a wgpu::TextureView {
        match target {
            RenderTargetKind::BackBuffer => back_buffer,
            RenderTargetKind::ShadowMap => &self.targets.shadow.render_view,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────────

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Overrides the bound viewport until the next resize.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Shader-readable view over the shadow map, for sampling passes.
    pub fn shadow_resource(&self) -> &wgpu::TextureView {
        &self.targets.shadow.sampled_view
    }

    pub fn targets(&self) -> &RenderTargets {
        &self.targets
    }

    pub fn states(&self) -> &StateCache {
        &self.states
    }

    pub fn context(&self) -> &GraphicsContext<'w> {
        &self.context
    }

    pub fn device(&self) -> &wgpu::Device {
        self.context.device()
    }

    pub fn queue(&self) -> &wgpu::Queue {
        self.context.queue()
    }

    /// The window this system presents to, for collaborators that must
    /// issue their own platform calls.
    pub fn window_handle(&self) -> &Window {
        self.context.window()
    }
}
