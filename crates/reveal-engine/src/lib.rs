pub mod api;
pub mod core;
pub mod extensions;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::{AnimatorOptions, DeviceClass, RevealConfig, RevealMode};
pub use api::controls::{sanitize_text, RawControls, Readouts, DEFAULT_TITLE};
pub use api::error::RevealError;
pub use api::types::{AnimatorEvent, Phase};
pub use core::animator::{AnimationState, Animator};
pub use core::scheduler::{FrameHandle, FrameScheduler, ManualScheduler};
pub use renderer::recording::{DrawCommand, RecordingSurface};
pub use renderer::traits::{ColorStop, FontSpec, Hsla, LinearGradient, Rgba, Surface};
pub use systems::layout::{TextLayout, Unit};
pub use systems::particles::{ConstantRandom, Particle, ParticlePool, RandomSource, Rng};
pub use systems::reveal::RevealWindow;

// Extensions: page-level motion math, used by the web host
pub use extensions::{
    clamp, ease_in_out_cubic, ease_out_cubic, nudge_keyframes, ScrollMotion,
    map_shift_v, ShiftVars, ShiftZone,
    reveal_delays, PlacedNode, RevealMotion, SectionDef, Travel, SECTIONS,
};
