use crate::viewport::ViewportState;
use std::time::Duration;

/// Anything the [`AnimationLoop`](crate::AnimationLoop) can drive: one
/// `tick` followed by one `render` per display refresh.
pub trait Animation {
    /// Advance the simulation by one frame. `dt` is the wall time since the
    /// previous frame; the hero engines step per frame and ignore it.
    fn tick(&mut self, viewport: &ViewportState, dt: Duration);

    /// Draw the current state. Errors are reported to the loop, which logs
    /// them and keeps going.
    fn render(&mut self, viewport: &ViewportState) -> anyhow::Result<()>;

    /// Bounded animations return `true` once there is nothing left to draw;
    /// the loop then stops scheduling frames.
    fn is_finished(&self) -> bool {
        false
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineKind {
    Gpu,
    Canvas,
}

/// Shared contract of the two hero renderers.
///
/// Construction is variant specific (the GPU engine needs a device, the
/// Canvas2D engine an image pool), so `create` lives on each implementation.
/// The particle set is fixed at creation: `particle_count` never changes
/// until `dispose`.
pub trait ParticleEngine: Animation {
    fn kind(&self) -> EngineKind;

    fn particle_count(&self) -> usize;

    /// Scroll-time performance mode. Engines without one ignore it.
    fn set_reduced_activity(&mut self, _reduced: bool) {}

    /// Release graphics resources and drop the particle set.
    fn dispose(&mut self);
}

/// Which hero renderer to try, read from the canvas `data-renderer` attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RendererChoice {
    #[default]
    Auto,
    Gpu,
    Canvas,
}

impl RendererChoice {
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("gpu") | Some("webgpu") | Some("webgl") => Self::Gpu,
            Some("canvas") | Some("2d") | Some("cpu") => Self::Canvas,
            _ => Self::Auto,
        }
    }

    /// Engine variants in the order they should be attempted.
    pub fn candidates(self) -> &'static [EngineKind] {
        match self {
            Self::Auto => &[EngineKind::Gpu, EngineKind::Canvas],
            Self::Gpu => &[EngineKind::Gpu],
            Self::Canvas => &[EngineKind::Canvas],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_choice_parses_attribute_values() {
        assert_eq!(RendererChoice::from_attr(None), RendererChoice::Auto);
        assert_eq!(RendererChoice::from_attr(Some("auto")), RendererChoice::Auto);
        assert_eq!(RendererChoice::from_attr(Some(" GPU ")), RendererChoice::Gpu);
        assert_eq!(RendererChoice::from_attr(Some("canvas")), RendererChoice::Canvas);
        assert_eq!(RendererChoice::from_attr(Some("bogus")), RendererChoice::Auto);
    }

    #[test]
    fn auto_tries_gpu_before_canvas() {
        assert_eq!(
            RendererChoice::Auto.candidates(),
            &[EngineKind::Gpu, EngineKind::Canvas]
        );
        assert_eq!(RendererChoice::Canvas.candidates(), &[EngineKind::Canvas]);
    }
}
