/// Represents a single acquired frame.
///
/// This object is short-lived and must be finalized promptly. Holding
/// the surface texture prevents acquisition of subsequent frames.
pub struct Frame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

impl Frame {
    /// Opens a named annotation scope on the frame encoder.
    ///
    /// Scopes show up in graphics debuggers (RenderDoc, PIX). No-op in
    /// release builds. Every push must be paired with
    /// [`pop_annotation`](Self::pop_annotation) before the frame ends.
    pub fn push_annotation(&mut self, label: &str) {
        if cfg!(debug_assertions) {
            self.encoder.push_debug_group(label);
        }
    }

    /// Closes the innermost annotation scope. No-op in release builds.
    pub fn pop_annotation(&mut self) {
        if cfg!(debug_assertions) {
            self.encoder.pop_debug_group();
        }
    }
}
