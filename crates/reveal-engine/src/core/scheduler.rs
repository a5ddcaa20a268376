/// Opaque handle for a requested frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Source of frame callbacks and timestamps.
///
/// A request registers one callback that the host later delivers by calling
/// `Animator::frame(now)`. The animator keeps at most one request pending and
/// always cancels before requesting again, so implementors never need to
/// de-duplicate.
pub trait FrameScheduler {
    /// Current time in ms on the same clock frames are stamped with.
    fn now(&self) -> f64;

    /// Ask for one frame callback.
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraw a request. Cancelling an already-delivered handle is a no-op.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Scheduler driven by hand: time only moves when told to, and requested
/// frames sit in a queue until the host delivers them.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    now: f64,
    next_id: i32,
    pending: Vec<FrameHandle>,
    /// Total `request_frame` calls.
    pub requested: u32,
    /// Total `cancel_frame` calls that withdrew a pending request.
    pub cancelled: u32,
}

impl ManualScheduler {
    pub fn new(now: f64) -> Self {
        Self {
            now,
            ..Self::default()
        }
    }

    /// Move the clock forward and return the new time.
    pub fn advance(&mut self, ms: f64) -> f64 {
        self.now += ms;
        self.now
    }

    /// Requests not yet delivered or cancelled.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Pop the oldest pending request, as the host does when delivering it.
    pub fn take_pending(&mut self) -> Option<FrameHandle> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn now(&self) -> f64 {
        self.now
    }

    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push(handle);
        self.requested += 1;
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(idx) = self.pending.iter().position(|h| *h == handle) {
            self.pending.remove(idx);
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_and_take() {
        let mut s = ManualScheduler::new(0.0);
        let a = s.request_frame();
        let b = s.request_frame();
        assert_ne!(a, b);
        assert_eq!(s.pending_count(), 2);
        assert_eq!(s.take_pending(), Some(a));
        assert_eq!(s.take_pending(), Some(b));
        assert_eq!(s.take_pending(), None);
    }

    #[test]
    fn cancel_removes_only_pending() {
        let mut s = ManualScheduler::new(0.0);
        let a = s.request_frame();
        s.cancel_frame(a);
        s.cancel_frame(a);
        assert_eq!(s.pending_count(), 0);
        assert_eq!(s.cancelled, 1);
    }

    #[test]
    fn clock_advances() {
        let mut s = ManualScheduler::new(100.0);
        assert_eq!(s.advance(16.0), 116.0);
        assert_eq!(s.now(), 116.0);
    }
}
