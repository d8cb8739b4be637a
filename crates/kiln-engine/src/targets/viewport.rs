/// Viewport rectangle bound to every render pass the controller opens.
///
/// Updated on resize, otherwise constant. Depth range is the full
/// `[0, 1]` interval.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Full-surface viewport for the given drawable size.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: width as f32,
            height: height as f32,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.width > 0.0
            && self.height > 0.0
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// Binds this viewport on an open render pass.
    pub fn apply(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_viewport(
            self.x,
            self.y,
            self.width,
            self.height,
            self.min_depth,
            self.max_depth,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_covers_the_surface() {
        let vp = Viewport::full(1920, 1080);
        assert_eq!((vp.x, vp.y), (0.0, 0.0));
        assert_eq!((vp.width, vp.height), (1920.0, 1080.0));
        assert_eq!((vp.min_depth, vp.max_depth), (0.0, 1.0));
        assert!(vp.is_valid());
    }

    #[test]
    fn zero_sized_viewport_is_invalid() {
        assert!(!Viewport::full(0, 1080).is_valid());
        assert!(!Viewport::full(1920, 0).is_valid());
    }
}
