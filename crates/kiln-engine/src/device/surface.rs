use winit::dpi::PhysicalSize;

use super::SurfaceErrorAction;

/// Picks the surface color format from the capability list.
///
/// The engine targets 32-bit color; with `prefer_srgb` the sRGB
/// variants are tried first, otherwise (or when neither is offered) the
/// first supported format wins.
pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if formats.is_empty() {
        return None;
    }

    if prefer_srgb {
        let preferred = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        for f in preferred {
            if formats.contains(&f) {
                return Some(f);
            }
        }
    }

    Some(formats[0])
}

/// Maps the vsync flag onto a supported present mode.
///
/// Vsync on → FIFO (always supported). Vsync off → immediate if the
/// surface offers it, else mailbox, else FIFO again.
pub(crate) fn choose_present_mode(
    available: &[wgpu::PresentMode],
    vsync: bool,
) -> wgpu::PresentMode {
    if vsync {
        return wgpu::PresentMode::Fifo;
    }

    [wgpu::PresentMode::Immediate, wgpu::PresentMode::Mailbox]
        .into_iter()
        .find(|m| available.contains(m))
        .unwrap_or(wgpu::PresentMode::Fifo)
}

pub(crate) fn choose_alpha_mode(
    available: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| available.contains(m))
        .or_else(|| available.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Reconfigures the surface in place for a new size.
///
/// Buffer format, usage and latency are preserved; only the extent
/// changes. A zero-sized request updates internal state only, since the
/// surface cannot be configured at 0x0.
pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) {
    if new_size.width == 0 || new_size.height == 0 {
        *size = new_size;
        return;
    }

    *size = new_size;
    config.width = new_size.width;
    config.height = new_size.height;

    surface.configure(device, config);
}

/// Converts a `SurfaceError` into a higher-level action.
pub(crate) fn map_surface_error(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    err: wgpu::SurfaceError,
) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            if size.width > 0 && size.height > 0 {
                surface.configure(device, config);
            }
            SurfaceErrorAction::Reconfigured
        }
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout => SurfaceErrorAction::SkipFrame,
        wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── surface format ────────────────────────────────────────────────────

    #[test]
    fn srgb_format_preferred_when_offered() {
        let formats = [
            wgpu::TextureFormat::Rgba8Unorm,
            wgpu::TextureFormat::Bgra8UnormSrgb,
        ];
        assert_eq!(
            choose_surface_format(&formats, true),
            Some(wgpu::TextureFormat::Bgra8UnormSrgb)
        );
    }

    #[test]
    fn first_format_wins_without_srgb_preference() {
        let formats = [
            wgpu::TextureFormat::Rgba8Unorm,
            wgpu::TextureFormat::Bgra8UnormSrgb,
        ];
        assert_eq!(
            choose_surface_format(&formats, false),
            Some(wgpu::TextureFormat::Rgba8Unorm)
        );
    }

    #[test]
    fn no_formats_is_none() {
        assert_eq!(choose_surface_format(&[], true), None);
    }

    // ── present mode ──────────────────────────────────────────────────────

    #[test]
    fn vsync_always_selects_fifo() {
        let available = [wgpu::PresentMode::Immediate, wgpu::PresentMode::Fifo];
        assert_eq!(
            choose_present_mode(&available, true),
            wgpu::PresentMode::Fifo
        );
    }

    #[test]
    fn no_vsync_prefers_immediate() {
        let available = [
            wgpu::PresentMode::Fifo,
            wgpu::PresentMode::Mailbox,
            wgpu::PresentMode::Immediate,
        ];
        assert_eq!(
            choose_present_mode(&available, false),
            wgpu::PresentMode::Immediate
        );
    }

    #[test]
    fn no_vsync_falls_back_to_mailbox_then_fifo() {
        let mailbox_only = [wgpu::PresentMode::Fifo, wgpu::PresentMode::Mailbox];
        assert_eq!(
            choose_present_mode(&mailbox_only, false),
            wgpu::PresentMode::Mailbox
        );

        let fifo_only = [wgpu::PresentMode::Fifo];
        assert_eq!(
            choose_present_mode(&fifo_only, false),
            wgpu::PresentMode::Fifo
        );
    }

    // ── alpha mode ────────────────────────────────────────────────────────

    #[test]
    fn requested_alpha_mode_used_when_supported() {
        let available = [
            wgpu::CompositeAlphaMode::Opaque,
            wgpu::CompositeAlphaMode::PreMultiplied,
        ];
        assert_eq!(
            choose_alpha_mode(&available, Some(wgpu::CompositeAlphaMode::PreMultiplied)),
            wgpu::CompositeAlphaMode::PreMultiplied
        );
    }

    #[test]
    fn unsupported_request_falls_back_to_first_available() {
        let available = [wgpu::CompositeAlphaMode::Opaque];
        assert_eq!(
            choose_alpha_mode(&available, Some(wgpu::CompositeAlphaMode::PostMultiplied)),
            wgpu::CompositeAlphaMode::Opaque
        );
    }

    #[test]
    fn empty_capabilities_default_to_auto() {
        assert_eq!(
            choose_alpha_mode(&[], None),
            wgpu::CompositeAlphaMode::Auto
        );
    }
}
