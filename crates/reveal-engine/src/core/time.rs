use crate::extensions::easing::clamp;

/// Largest simulation step a single frame may take, in ms.
/// A stalled tab resumes with one capped step instead of a huge jump.
pub const MAX_FRAME_DT_MS: f32 = 42.0;

/// Step used when the clock did not advance between frames.
pub const FALLBACK_FRAME_DT_MS: f32 = 16.0;

/// Simulation step for a frame at `now` following one at `last`.
pub fn frame_delta(now: f64, last: f64) -> f32 {
    let elapsed = now - last;
    if elapsed > 0.0 {
        (elapsed as f32).min(MAX_FRAME_DT_MS)
    } else {
        FALLBACK_FRAME_DT_MS
    }
}

/// Largest progress a run reports before its full duration has elapsed.
const LAST_PARTIAL_PROGRESS: f32 = 1.0 - f32::EPSILON / 2.0;

/// Normalized progress of a run that started at `start` and lasts `duration` ms.
///
/// Exactly 1 once `now - start >= duration`, strictly below 1 before. The
/// comparison happens in f64 so rounding to f32 cannot finish a run early.
pub fn run_progress(now: f64, start: f64, duration: f64) -> f32 {
    let elapsed = now - start;
    if elapsed >= duration {
        return 1.0;
    }
    clamp((elapsed / duration) as f32, 0.0, LAST_PARTIAL_PROGRESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_passes_through_normal_frames() {
        assert_eq!(frame_delta(1016.0, 1000.0), 16.0);
    }

    #[test]
    fn delta_caps_after_stall() {
        assert_eq!(frame_delta(9000.0, 1000.0), MAX_FRAME_DT_MS);
    }

    #[test]
    fn delta_falls_back_when_clock_stands_still() {
        assert_eq!(frame_delta(1000.0, 1000.0), FALLBACK_FRAME_DT_MS);
        assert_eq!(frame_delta(990.0, 1000.0), FALLBACK_FRAME_DT_MS);
    }

    #[test]
    fn progress_hits_one_exactly_at_duration() {
        assert_eq!(run_progress(100.0, 100.0, 2600.0), 0.0);
        assert_eq!(run_progress(1400.0, 100.0, 2600.0), 0.5);
        assert!(run_progress(2699.0, 100.0, 2600.0) < 1.0);
        assert_eq!(run_progress(2700.0, 100.0, 2600.0), 1.0);
        assert_eq!(run_progress(99_999.0, 100.0, 2600.0), 1.0);
    }

    #[test]
    fn progress_stays_below_one_until_duration_elapses() {
        // 2599.99995 / 2600 rounds to 1.0 as an f32
        let p = run_progress(2599.99995, 0.0, 2600.0);
        assert!(p < 1.0, "finished early: {}", p);
        assert_eq!(run_progress(2600.0, 0.0, 2600.0), 1.0);
    }

    #[test]
    fn progress_clamps_before_start() {
        assert_eq!(run_progress(50.0, 100.0, 2600.0), 0.0);
    }
}
