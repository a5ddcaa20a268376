pub mod animator;
pub mod scheduler;
pub mod time;

pub use animator::{AnimationState, Animator};
pub use scheduler::{FrameHandle, FrameScheduler, ManualScheduler};
pub use time::{frame_delta, run_progress, FALLBACK_FRAME_DT_MS, MAX_FRAME_DT_MS};
