use winit::monitor::MonitorHandle;

use super::GraphicsError;

/// Color depth the mode list is filtered to, in bits per pixel.
pub(crate) const COLOR_BIT_DEPTH: u16 = 32;

/// One enumerated display mode of the primary monitor.
///
/// The refresh rate is kept as a numerator/denominator pair; winit
/// reports millihertz, so enumeration produces `(millihertz, 1000)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DisplayMode {
    pub width: u32,
    pub height: u32,
    pub refresh_numerator: u32,
    pub refresh_denominator: u32,
}

impl DisplayMode {
    /// Refresh rate in hertz, rounded down.
    pub fn refresh_hz(&self) -> u32 {
        if self.refresh_denominator == 0 {
            return 0;
        }
        self.refresh_numerator / self.refresh_denominator
    }
}

/// Enumerates the monitor's video modes at 32-bit color depth.
pub(crate) fn enumerate_modes(monitor: &MonitorHandle) -> Vec<DisplayMode> {
    monitor
        .video_modes()
        .filter(|m| m.bit_depth() == COLOR_BIT_DEPTH)
        .map(|m| DisplayMode {
            width: m.size().width,
            height: m.size().height,
            refresh_numerator: m.refresh_rate_millihertz(),
            refresh_denominator: 1000,
        })
        .collect()
}

/// Selects the display mode for a requested resolution.
///
/// Policy:
/// - an exact `(width, height)` match wins and its refresh rate is used;
/// - when nothing matches, the mode at the midpoint of the list is
///   adopted wholesale — width, height and refresh rate all come from
///   that entry. A mismatched resolution therefore never fails bring-up;
///   callers must read the returned mode's size back instead of assuming
///   the requested one.
/// - an empty list is an error; there is no mode to fall back to.
pub fn select_display_mode(
    modes: &[DisplayMode],
    width: u32,
    height: u32,
) -> Result<DisplayMode, GraphicsError> {
    if modes.is_empty() {
        return Err(GraphicsError::DisplayMode);
    }

    if let Some(exact) = modes
        .iter()
        .find(|m| m.width == width && m.height == height)
    {
        return Ok(*exact);
    }

    Ok(modes[modes.len() / 2])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode(w: u32, h: u32, hz: u32) -> DisplayMode {
        DisplayMode {
            width: w,
            height: h,
            refresh_numerator: hz * 1000,
            refresh_denominator: 1000,
        }
    }

    // ── exact match ───────────────────────────────────────────────────────

    #[test]
    fn exact_match_keeps_requested_size_and_its_refresh() {
        let modes = [
            mode(1280, 720, 60),
            mode(1920, 1080, 144),
            mode(2560, 1440, 60),
        ];
        let m = select_display_mode(&modes, 1920, 1080).unwrap();
        assert_eq!((m.width, m.height), (1920, 1080));
        assert_eq!(m.refresh_numerator, 144_000);
        assert_eq!(m.refresh_denominator, 1000);
    }

    #[test]
    fn first_exact_match_wins_among_duplicates() {
        let modes = [mode(1920, 1080, 60), mode(1920, 1080, 144)];
        let m = select_display_mode(&modes, 1920, 1080).unwrap();
        assert_eq!(m.refresh_hz(), 60);
    }

    // ── midpoint fallback ─────────────────────────────────────────────────

    #[test]
    fn no_match_adopts_midpoint_entry_wholesale() {
        let modes = [
            mode(640, 480, 60),
            mode(800, 600, 60),
            mode(1280, 720, 75),
            mode(1920, 1080, 60),
            mode(2560, 1440, 60),
        ];
        // 1366x768 matches nothing; len/2 == 2 → 1280x720@75.
        let m = select_display_mode(&modes, 1366, 768).unwrap();
        assert_eq!((m.width, m.height), (1280, 720));
        assert_eq!(m.refresh_hz(), 75);
    }

    #[test]
    fn midpoint_of_even_length_list_rounds_up() {
        let modes = [mode(640, 480, 60), mode(800, 600, 60)];
        let m = select_display_mode(&modes, 1024, 768).unwrap();
        assert_eq!((m.width, m.height), (800, 600));
    }

    // ── empty list guard ──────────────────────────────────────────────────

    #[test]
    fn empty_mode_list_is_an_error() {
        let err = select_display_mode(&[], 1920, 1080).unwrap_err();
        assert_eq!(err, GraphicsError::DisplayMode);
    }

    // ── refresh_hz ────────────────────────────────────────────────────────

    #[test]
    fn refresh_hz_handles_zero_denominator() {
        let m = DisplayMode {
            width: 1,
            height: 1,
            refresh_numerator: 60_000,
            refresh_denominator: 0,
        };
        assert_eq!(m.refresh_hz(), 0);
    }
}
