use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;
use winit::window::{Fullscreen, Window};

use super::surface;
use super::{DisplayMode, Frame, GraphicsConfig, GraphicsError, SurfaceErrorAction, display};

/// Owns wgpu core objects and the surface configuration.
///
/// This type is the low-level rendering context:
/// - selects the adapter and a display mode for the requested resolution
/// - creates and stores Instance/Adapter/Device/Queue
/// - creates and configures the Surface (swapchain)
/// - acquires frames and provides an encoder + view for rendering
///
/// Exactly one context exists per window; it is not `Clone`, and all
/// mutation must happen on the render thread that owns it.
pub struct GraphicsContext<'w> {
    /// Mode selected at bring-up. Its size is authoritative when the
    /// requested resolution matched no enumerated mode.
    display_mode: DisplayMode,

    /// Adapter description captured at bring-up (name, backend, type).
    adapter_info: wgpu::AdapterInfo,

    /// Active surface configuration.
    config: wgpu::SurfaceConfiguration,

    /// Current drawable size in physical pixels.
    size: PhysicalSize<u32>,

    vsync: bool,

    /// Multisample count for the depth buffer and pipelines.
    ///
    /// Fixed at 1: multisampled back buffers are currently disabled, so
    /// sample negotiation is skipped entirely.
    sample_count: u32,

    // Teardown releases the surface before the device, and the device
    // before the adapter and instance; field order below is load-bearing.
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    adapter: wgpu::Adapter,
    instance: wgpu::Instance,

    window: &'w Window,
}

impl<'w> GraphicsContext<'w> {
    /// Creates a graphics context bound to a window.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu; see
    /// [`new_blocking`](Self::new_blocking) for synchronous callers.
    pub async fn new(window: &'w Window, config: &GraphicsConfig) -> Result<Self> {
        // Validation layers ride on the build configuration: debug
        // builds get DEBUG | VALIDATION, release builds get none.
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            flags: wgpu::InstanceFlags::from_build_config(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context(GraphicsError::DeviceCreation)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context(GraphicsError::Adapter)?;

        let adapter_info = adapter.get_info();
        log::info!(
            "adapter selected: {} ({:?}, {:?})",
            adapter_info.name,
            adapter_info.backend,
            adapter_info.device_type,
        );

        let display_mode = Self::resolve_display_mode(window, config)?;
        log::info!(
            "display mode: {}x{} @ {} Hz",
            display_mode.width,
            display_mode.height,
            display_mode.refresh_hz(),
        );

        // The wire-frame rasterizer entry needs line polygon mode; ask
        // for it only when the adapter actually offers it.
        let features = adapter.features() & wgpu::Features::POLYGON_MODE_LINE;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("kiln-engine device"),
                required_features: features,
                required_limits: wgpu::Limits::default(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context(GraphicsError::DeviceCreation)?;

        if cfg!(debug_assertions) {
            device.on_uncaptured_error(std::sync::Arc::new(|e| {
                log::error!("uncaptured wgpu error: {e}");
            }));
        }

        if config.fullscreen {
            window.set_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let caps = surface.get_capabilities(&adapter);
        let format = surface::choose_surface_format(&caps.formats, config.prefer_srgb)
            .context(GraphicsError::DeviceCreation)?;
        let present_mode = surface::choose_present_mode(&caps.present_modes, config.vsync);
        let alpha_mode = surface::choose_alpha_mode(&caps.alpha_modes, None);

        let size = PhysicalSize::new(display_mode.width.max(1), display_mode.height.max(1));
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: config.desired_maximum_frame_latency,
        };
        surface.configure(&device, &surface_config);

        log::info!(
            "device and surface ready: {format:?}, {present_mode:?}, {}x{}",
            size.width,
            size.height,
        );

        Ok(Self {
            display_mode,
            adapter_info,
            config: surface_config,
            size,
            vsync: config.vsync,
            sample_count: 1,
            surface,
            device,
            queue,
            adapter,
            instance,
            window,
        })
    }

    /// Synchronous wrapper around [`new`](Self::new).
    pub fn new_blocking(window: &'w Window, config: &GraphicsConfig) -> Result<Self> {
        pollster::block_on(Self::new(window, config))
    }

    /// Selects a display mode for the requested resolution.
    ///
    /// Enumeration runs against the window's current monitor. A window
    /// with no detectable monitor (headless compositors) falls back to
    /// the requested size with an unknown refresh rate; a monitor whose
    /// mode list is empty is an error.
    fn resolve_display_mode(window: &Window, config: &GraphicsConfig) -> Result<DisplayMode> {
        let Some(monitor) = window.current_monitor() else {
            log::warn!("no monitor detected; keeping requested {}x{}", config.width, config.height);
            return Ok(DisplayMode {
                width: config.width,
                height: config.height,
                refresh_numerator: 0,
                refresh_denominator: 1,
            });
        };

        let modes = display::enumerate_modes(&monitor);
        let selected = display::select_display_mode(&modes, config.width, config.height)
            .context(GraphicsError::DisplayMode)?;

        if (selected.width, selected.height) != (config.width, config.height) {
            log::warn!(
                "no mode matches {}x{}; falling back to {}x{}",
                config.width,
                config.height,
                selected.width,
                selected.height,
            );
        }

        Ok(selected)
    }

    // ── accessors ─────────────────────────────────────────────────────────

    /// Returns the active surface format.
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Returns the current drawable size (physical pixels).
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// Returns a reference to the logical device.
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    /// Returns a reference to the command queue.
    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Returns the window this context presents to.
    pub fn window(&self) -> &Window {
        self.window
    }

    /// Returns the adapter description captured at bring-up.
    pub fn adapter_info(&self) -> &wgpu::AdapterInfo {
        &self.adapter_info
    }

    /// Returns the selected adapter.
    pub fn adapter(&self) -> &wgpu::Adapter {
        &self.adapter
    }

    /// Returns the wgpu instance the context was built from.
    pub fn instance(&self) -> &wgpu::Instance {
        &self.instance
    }

    /// Returns the display mode selected at bring-up.
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn vsync(&self) -> bool {
        self.vsync
    }

    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    // ── frame + resize ────────────────────────────────────────────────────

    /// Acquires the next surface texture and creates an encoder.
    pub fn begin_frame(&self) -> std::result::Result<Frame, wgpu::SurfaceError> {
        let surface_texture = self.surface.get_current_texture()?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("kiln frame encoder"),
            });

        Ok(Frame {
            surface_texture,
            view,
            encoder,
        })
    }

    /// Submits the recorded commands and presents the back buffer.
    pub fn submit(&self, frame: Frame) {
        self.queue.submit(std::iter::once(frame.encoder.finish()));
        drop(frame.view);
        frame.surface_texture.present();
    }

    /// Reconfigures the surface after a resize.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        surface::apply_resize(
            &self.surface,
            &self.device,
            &mut self.config,
            &mut self.size,
            new_size,
        );
    }

    /// Converts a `SurfaceError` into a higher-level action.
    pub fn handle_surface_error(&mut self, err: wgpu::SurfaceError) -> SurfaceErrorAction {
        surface::map_surface_error(&self.surface, &self.device, &self.config, self.size, err)
    }

    // ── diagnostics ───────────────────────────────────────────────────────

    /// Diagnostic dump of outstanding GPU work and the owning adapter,
    /// invoked at teardown to surface leaks. No-op in release builds.
    pub fn report_live_objects(&self, note: &str) {
        if !cfg!(debug_assertions) {
            return;
        }

        if !note.is_empty() {
            log::info!("{note}");
        }

        // Draining the queue forces destruction of every resource whose
        // last reference was already dropped; anything reported by the
        // validation layer after this point is genuinely still alive.
        if let Err(e) = self.device.poll(wgpu::PollType::wait_indefinitely()) {
            log::warn!("device poll during live-object report failed: {e:?}");
        }

        log::info!(
            "live-object report for {} ({:?}) complete",
            self.adapter_info.name,
            self.adapter_info.backend,
        );
    }
}
