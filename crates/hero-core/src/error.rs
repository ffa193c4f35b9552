use thiserror::Error;

/// Failures that stop an engine from reaching a render-capable state.
///
/// None of these are fatal to the page: the caller falls back to the next
/// engine variant (GPU → Canvas2D) or skips the effect.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no graphics adapter available (tried {tried})")]
    NoGraphicsAdapter { tried: &'static str },
    #[error("surface error: {0}")]
    Surface(String),
    #[error("device request failed: {0}")]
    Device(String),
    #[error("shader validation failed: {0}")]
    Shader(String),
    #[error("asset error: {0}")]
    Asset(String),
    #[error("frame scheduling failed: {0}")]
    Scheduler(String),
}
