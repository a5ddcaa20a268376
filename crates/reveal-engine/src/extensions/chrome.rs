// extensions/chrome.rs
//
// Timing and motion constants for the page chrome: intro overlay, reload
// scroll reset, call-to-action scrolling and the card nudge.

/// How long the intro overlay stays on after load.
pub const INTRO_DURATION_MS: u32 = 1700;

/// Delays of the extra scroll-to-top retries after a strong reset.
pub const TOP_RESET_RETRY_MS: [i32; 2] = [60, 220];

/// Duration of the click nudge on the legacy video card.
pub const NUDGE_DURATION_MS: f64 = 260.0;

/// Easing handed to the Web Animations API for the nudge.
pub const NUDGE_EASE: &str = "cubic-bezier(.2,.8,.2,1)";

/// Vertical lift at the midpoint of the nudge, in CSS px.
pub const NUDGE_LIFT_PX: f32 = 2.0;

/// Transform keyframes for the nudge: rest, lifted, rest.
pub fn nudge_keyframes() -> [String; 3] {
    [
        "translateY(0px)".to_string(),
        format!("translateY({}px)", -NUDGE_LIFT_PX),
        "translateY(0px)".to_string(),
    ]
}

/// Scroll behavior for programmatic page scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollMotion {
    #[default]
    Smooth,
    /// Jump straight to the target.
    Instant,
}

impl ScrollMotion {
    pub fn for_reduced_motion(reduced_motion: bool) -> Self {
        if reduced_motion {
            ScrollMotion::Instant
        } else {
            ScrollMotion::Smooth
        }
    }

    /// CSS `scroll-behavior` keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            ScrollMotion::Smooth => "smooth",
            ScrollMotion::Instant => "auto",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nudge_rests_at_both_ends() {
        let frames = nudge_keyframes();
        assert_eq!(frames[0], "translateY(0px)");
        assert_eq!(frames[1], "translateY(-2px)");
        assert_eq!(frames[2], frames[0]);
    }

    #[test]
    fn reduced_motion_scrolls_instantly() {
        assert_eq!(ScrollMotion::for_reduced_motion(true).as_str(), "auto");
        assert_eq!(ScrollMotion::for_reduced_motion(false).as_str(), "smooth");
    }

    #[test]
    fn retries_are_ordered() {
        assert!(TOP_RESET_RETRY_MS.windows(2).all(|w| w[0] < w[1]));
        assert!(INTRO_DURATION_MS > TOP_RESET_RETRY_MS[1] as u32);
    }
}
