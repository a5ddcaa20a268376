/// Lifecycle signal emitted by the animator for the host page.
/// The host drains these after each call and updates its start control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorEvent {
    /// A run began; the start control should be disabled.
    Started,
    /// The final frame was drawn; the start control can be re-enabled.
    Finished,
}

/// Coarse lifecycle phase of the animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Mounted, nothing started yet.
    #[default]
    Idle,
    /// Frames are being produced.
    Running,
    /// Running, but frame scheduling is paused (page hidden).
    Suspended,
    /// The last run completed (or the static frame was drawn).
    Finished,
}
