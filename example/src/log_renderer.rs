use lucent_components::{GlassPanel, GlassRenderer, LensDecoration, RenderCapabilities};

/// Logs every panel it is asked to draw.
#[derive(Debug, Default)]
pub struct LogRenderer {
    pub capabilities: RenderCapabilities,
    pub drawn: usize,
}

impl LogRenderer {
    pub fn draw_lens(&mut self, (panel, decoration): (GlassPanel, LensDecoration)) {
        self.draw_panel(&panel);
        tracing::info!(
            rotation = decoration.gradient_rotation,
            iridescent = decoration.iridescent,
            "lens decoration"
        );
    }
}

impl GlassRenderer for LogRenderer {
    fn capabilities(&self) -> RenderCapabilities {
        self.capabilities
    }

    fn draw_panel(&mut self, panel: &GlassPanel) {
        self.drawn += 1;
        let frame = panel.frame;
        tracing::info!(
            x = frame.x,
            y = frame.y,
            w = frame.width,
            h = frame.height,
            radius = panel.corner_radius,
            scale = panel.transform.scale.x,
            highlight = panel.highlight_opacity,
            opacity = panel.opacity,
            blur = panel.blur.is_some(),
            "draw panel"
        );
    }
}
