//! Platform-independent core of the hero particle effects.
//!
//! Nothing in here touches the browser: the web front-end feeds viewport,
//! pointer, scroll and visibility signals in, and draws what the fields
//! describe. That keeps the physics and the loop logic testable on the host.

pub mod animation;
pub mod assets;
pub mod clock;
pub mod confetti;
pub mod constants;
pub mod drift;
pub mod engine;
pub mod error;
pub mod fallback;
pub mod homing;
pub mod scroll;
pub mod viewport;
pub mod visibility;

pub use animation::{AnimationLoop, FrameOutcome, FrameScheduler, FrameToken, LoopState};
pub use assets::{AssetTracker, Readiness};
pub use clock::FrameClock;
pub use confetti::{ConfettiBurst, ConfettiPiece};
pub use drift::{DriftField, DriftParticle};
pub use engine::{Animation, EngineKind, ParticleEngine, RendererChoice};
pub use error::EngineError;
pub use fallback::Bitmap;
pub use homing::{HomingField, HomingParticle, ParticleInstance};
pub use scroll::ScrollDebounce;
pub use viewport::ViewportState;
pub use visibility::{GateTransition, VisibilityGate};
