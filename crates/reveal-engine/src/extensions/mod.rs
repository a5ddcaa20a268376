// extensions/mod.rs
//
// Pure math shared by the animator and the page around it.
// Nothing here touches a surface or a scheduler.

pub mod chrome;
pub mod easing;
pub mod scroll;
pub mod stagger;

pub use chrome::{nudge_keyframes, ScrollMotion};
pub use easing::{clamp, ease_in_out_cubic, ease_out_cubic};
pub use scroll::{map_shift_v, ShiftVars, ShiftZone};
pub use stagger::{reveal_delays, PlacedNode, RevealMotion, SectionDef, Travel, SECTIONS};
