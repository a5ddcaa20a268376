//! Animation driver for the particle text reveal.
//!
//! Owns the per-run state, the particle pool and the text layout, and turns
//! frame callbacks into pixels:
//!
//! ```text
//!  idle ──start──▶ running ──progress ≥ 1 && pool empty──▶ finished
//!                   │  ▲
//!          suspend  ▼  │ resume
//!                 suspended
//! ```
//!
//! Under reduced motion the frame loop never runs: mount and start draw the
//! fully revealed text once and go straight to finished.

use glam::Vec2;

use crate::api::config::{AnimatorOptions, RevealConfig};
use crate::api::controls::sanitize_text;
use crate::api::types::{AnimatorEvent, Phase};
use crate::core::scheduler::{FrameHandle, FrameScheduler};
use crate::core::time::{frame_delta, run_progress};
use crate::renderer::traits::{FontSpec, Surface};
use crate::systems::layout::{build_layout, fit_font_size, TextLayout, BASELINE_RATIO};
use crate::systems::particles::{burst_count, ParticlePool, RandomSource, Rng, SpawnCarry};
use crate::systems::reveal::{draw_backdrop, draw_revealed_text};

/// Mutable state of one run. Reset by every start.
#[derive(Debug, Clone, Default)]
pub struct AnimationState {
    /// Reveal progress in [0, 1]; never decreases within a run.
    pub progress: f32,
    pub running: bool,
    pub finished: bool,
    pub start_at: f64,
    pub last_at: f64,
    pub spawn_carry: SpawnCarry,
}

pub struct Animator<S: Surface, F: FrameScheduler, R: RandomSource = Rng> {
    surface: S,
    scheduler: F,
    rng: R,
    options: AnimatorOptions,
    config: RevealConfig,
    text: String,
    font: FontSpec,
    baseline_y: f32,
    layout: TextLayout,
    pool: ParticlePool,
    state: AnimationState,
    pending: Option<FrameHandle>,
    suspended: bool,
    events: Vec<AnimatorEvent>,
}

impl<S: Surface, F: FrameScheduler, R: RandomSource> Animator<S, F, R> {
    /// Create an idle animator. Nothing is drawn or scheduled until
    /// [`mount`](Self::mount) or [`start`](Self::start).
    pub fn new(surface: S, scheduler: F, rng: R, options: AnimatorOptions) -> Self {
        let pool = ParticlePool::new(options.max_particles);
        Self {
            surface,
            scheduler,
            rng,
            options,
            config: RevealConfig::default(),
            text: sanitize_text(""),
            font: FontSpec::title(0.0),
            baseline_y: 0.0,
            layout: TextLayout::default(),
            pool,
            state: AnimationState::default(),
            pending: None,
            suspended: false,
            events: Vec::new(),
        }
    }

    /// Lay out `text` and either start the first run or, under reduced
    /// motion, draw the final frame straight away.
    pub fn mount(&mut self, config: RevealConfig, text: &str) {
        self.config = config;
        self.text = sanitize_text(text);
        self.refresh_metrics();

        if self.options.reduced_motion {
            log::info!("reveal: reduced motion, rendering static title");
            self.render_static();
        } else {
            let config = self.config.clone();
            let text = self.text.clone();
            self.start(config, &text);
        }
    }

    /// Begin a new run with `config` and `text`, discarding any run in flight.
    pub fn start(&mut self, config: RevealConfig, text: &str) {
        self.config = config;
        self.text = sanitize_text(text);
        self.refresh_metrics();

        self.cancel_pending();
        self.pool.clear();
        self.state = AnimationState::default();
        self.suspended = false;

        if self.options.reduced_motion {
            self.render_static();
            return;
        }

        let now = self.scheduler.now();
        self.state.running = true;
        self.state.start_at = now;
        self.state.last_at = now;
        self.events.push(AnimatorEvent::Started);
        log::info!(
            "reveal: start \"{}\" ({} units, {:.0} ms)",
            self.text,
            self.layout.len(),
            self.config.duration_ms()
        );
        self.schedule();
    }

    /// Frame callback. Advances the run to `now`, draws, and schedules the
    /// next frame unless the run just finished.
    pub fn frame(&mut self, now: f64) {
        // The request that brought us here has been delivered.
        self.pending = None;
        if !self.state.running || self.suspended {
            return;
        }

        let dt = frame_delta(now, self.state.last_at);
        self.state.last_at = now;

        let progress = run_progress(now, self.state.start_at, self.config.duration_ms());
        self.state.progress = self.state.progress.max(progress);

        self.surface.clear();
        draw_backdrop(&mut self.surface);
        let lead = draw_revealed_text(
            &mut self.surface,
            &self.layout,
            self.state.progress,
            &self.config,
            &self.font,
            self.baseline_y,
        );

        if self.state.progress < 1.0 {
            self.emit(lead, dt);
        }

        self.pool.step(dt, &self.config, &mut self.surface);

        if self.state.progress >= 1.0 && self.pool.is_empty() {
            self.finish();
            return;
        }

        self.schedule();
    }

    /// Draw the fully revealed title with no particles and mark the run
    /// finished. Safe to call any number of times.
    pub fn render_static(&mut self) {
        self.cancel_pending();
        self.surface.clear();
        draw_backdrop(&mut self.surface);
        draw_revealed_text(
            &mut self.surface,
            &self.layout,
            1.0,
            &self.config,
            &self.font,
            self.baseline_y,
        );
        self.state.progress = 1.0;
        self.finish();
    }

    /// Page hidden: stop scheduling without touching run state.
    pub fn suspend(&mut self) {
        self.cancel_pending();
        if self.state.running {
            self.suspended = true;
        }
    }

    /// Page visible again: resume a running animation from now, so the
    /// hidden interval does not turn into one huge step.
    pub fn resume(&mut self) {
        if !self.state.running || self.options.reduced_motion {
            return;
        }
        self.suspended = false;
        self.state.last_at = self.scheduler.now();
        self.schedule();
    }

    /// The surface changed size. Refit and relayout; a run in progress keeps
    /// its progress and particles, otherwise the static frame is redrawn.
    pub fn resize(&mut self) {
        self.refresh_metrics();
        if self.options.reduced_motion || !self.state.running {
            self.render_static();
        }
    }

    /// Lifecycle events since the last drain.
    pub fn drain_events(&mut self) -> Vec<AnimatorEvent> {
        std::mem::take(&mut self.events)
    }

    // -- Accessors --

    pub fn phase(&self) -> Phase {
        if self.state.running {
            if self.suspended { Phase::Suspended } else { Phase::Running }
        } else if self.state.finished {
            Phase::Finished
        } else {
            Phase::Idle
        }
    }

    pub fn progress(&self) -> f32 {
        self.state.progress
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn is_finished(&self) -> bool {
        self.state.finished
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn particles(&self) -> &ParticlePool {
        &self.pool
    }

    pub fn layout(&self) -> &TextLayout {
        &self.layout
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    pub fn baseline_y(&self) -> f32 {
        self.baseline_y
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    // -- Internals --

    /// Carry-based spawns plus the flat burst, all at the lead point.
    fn emit(&mut self, lead: Vec2, dt: f32) {
        let density = self.config.density;
        let carried = self.state.spawn_carry.accumulate(density, dt);
        self.pool.spawn(lead, carried, &self.config, &mut self.rng);
        self.pool.spawn(lead, burst_count(density), &self.config, &mut self.rng);
    }

    fn finish(&mut self) {
        self.state.running = false;
        self.state.finished = true;
        self.suspended = false;
        self.events.push(AnimatorEvent::Finished);
        log::debug!("reveal: finished");
    }

    /// Recompute font size, baseline and layout from the surface size.
    fn refresh_metrics(&mut self) {
        let size = self.surface.size();
        self.baseline_y = size.y * BASELINE_RATIO;
        let font_px = fit_font_size(&mut self.surface, &self.text, size.x);
        self.font = FontSpec::title(font_px);
        self.layout = build_layout(&mut self.surface, &self.text, self.config.mode, &self.font, size.x);
    }

    fn schedule(&mut self) {
        self.cancel_pending();
        self.pending = Some(self.scheduler.request_frame());
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::RevealMode;
    use crate::core::scheduler::ManualScheduler;
    use crate::renderer::recording::RecordingSurface;
    use crate::systems::particles::ConstantRandom;

    type TestAnimator = Animator<RecordingSurface, ManualScheduler, Rng>;

    fn animator(options: AnimatorOptions) -> TestAnimator {
        Animator::new(
            RecordingSurface::new(800.0, 400.0),
            ManualScheduler::new(1000.0),
            Rng::new(42),
            options,
        )
    }

    /// Deliver the pending frame `ms` after the previous one.
    fn pump(anim: &mut TestAnimator, ms: f64) -> bool {
        let now = anim.scheduler_mut().advance(ms);
        if anim.scheduler_mut().take_pending().is_none() {
            return false;
        }
        anim.frame(now);
        true
    }

    fn run_to_end(anim: &mut TestAnimator) -> usize {
        let mut frames = 0;
        while pump(anim, 16.0) {
            frames += 1;
            assert!(frames < 10_000, "animation never finished");
        }
        frames
    }

    #[test]
    fn mount_starts_a_run() {
        let mut anim = animator(AnimatorOptions::default());
        anim.mount(RevealConfig::default(), "Hello");
        assert_eq!(anim.phase(), Phase::Running);
        assert!(anim.has_pending_frame());
        assert_eq!(anim.scheduler().pending_count(), 1);
        assert_eq!(anim.drain_events(), vec![AnimatorEvent::Started]);
        assert_eq!(anim.progress(), 0.0);
    }

    #[test]
    fn reduced_motion_mount_is_static_and_finished() {
        let mut anim = animator(AnimatorOptions::default().with_reduced_motion(true));
        anim.mount(RevealConfig::default(), "Proof");

        assert!(anim.is_finished());
        assert!(!anim.is_running());
        assert_eq!(anim.phase(), Phase::Finished);
        assert_eq!(anim.surface().visible_text(), "Proof");
        assert_eq!(anim.particles().len(), 0);
        assert_eq!(anim.surface().circle_count(), 0);
        assert_eq!(anim.scheduler().requested, 0);
        assert!(!anim.has_pending_frame());
        assert_eq!(anim.drain_events(), vec![AnimatorEvent::Finished]);
    }

    #[test]
    fn reduced_motion_start_stays_static() {
        let mut anim = animator(AnimatorOptions::default().with_reduced_motion(true));
        anim.mount(RevealConfig::default(), "One");
        anim.start(RevealConfig::default(), "Two");
        assert_eq!(anim.surface().visible_text(), "Two");
        assert_eq!(anim.scheduler().requested, 0);
    }

    #[test]
    fn static_render_is_idempotent() {
        let mut anim = animator(AnimatorOptions::default());
        anim.mount(RevealConfig::default(), "Twice");
        anim.render_static();
        let first = anim.surface().commands.clone();
        anim.render_static();
        assert_eq!(anim.surface().commands, first);
        assert_eq!(anim.surface().visible_text(), "Twice");
        assert_eq!(anim.particles().len(), 0);
        assert_eq!(anim.surface().circle_count(), 0);
        assert!(anim.is_finished());
    }

    #[test]
    fn run_finishes_after_duration_and_particles_drain() {
        let mut anim = animator(AnimatorOptions::default());
        anim.mount(RevealConfig::default(), "Hi");
        anim.drain_events();

        run_to_end(&mut anim);

        assert!(anim.is_finished());
        assert!(!anim.is_running());
        assert!(anim.particles().is_empty());
        assert_eq!(anim.progress(), 1.0);
        assert!(!anim.has_pending_frame());
        assert_eq!(anim.drain_events(), vec![AnimatorEvent::Finished]);
        // Elapsed time covers the reveal plus the longest particle life.
        let elapsed = anim.scheduler().now() - anim.state().start_at;
        assert!(elapsed >= 2600.0);
    }

    #[test]
    fn json_config_with_zero_speed_still_finishes() {
        let config = RevealConfig::from_json(r#"{"textSpeed":0,"overlap":1.5,"density":-3}"#).unwrap();
        let mut anim = animator(AnimatorOptions::default());
        anim.mount(config, "AB");
        anim.drain_events();

        run_to_end(&mut anim);

        assert!(anim.is_finished());
        assert_eq!(anim.surface().visible_text(), "AB");
        assert_eq!(anim.drain_events(), vec![AnimatorEvent::Finished]);
    }

    #[test]
    fn progress_is_monotonic_and_hits_one_at_duration() {
        let mut anim = animator(AnimatorOptions::default());
        let config = RevealConfig { text_speed: 2.0, ..RevealConfig::default() };
        anim.mount(config, "Monotone");
        let start = anim.state().start_at;

        let mut prev = 0.0;
        loop {
            let before = anim.scheduler().now();
            if !pump(&mut anim, 10.0) {
                break;
            }
            let now = before + 10.0;
            let p = anim.progress();
            assert!(p >= prev, "progress went backwards: {} → {}", prev, p);
            if now - start >= 1300.0 {
                assert_eq!(p, 1.0);
            } else {
                assert!(p < 1.0, "progress hit 1 early at {} ms", now - start);
            }
            prev = p;
        }
    }

    #[test]
    fn zero_density_never_spawns() {
        let mut anim = animator(AnimatorOptions::default());
        let config = RevealConfig { density: 0.0, ..RevealConfig::default() };
        anim.mount(config, "Quiet");
        while pump(&mut anim, 16.0) {
            assert_eq!(anim.particles().len(), 0);
            assert_eq!(anim.surface().circle_count(), 0);
        }
        assert!(anim.is_finished());
    }

    #[test]
    fn particles_spawn_at_lead_point() {
        let mut anim = Animator::new(
            RecordingSurface::new(800.0, 400.0),
            ManualScheduler::new(0.0),
            ConstantRandom::new(0.5),
            AnimatorOptions::default(),
        );
        anim.mount(RevealConfig::default(), "AB");
        let now = anim.scheduler_mut().advance(16.0);
        anim.scheduler_mut().take_pending();
        anim.frame(now);
        // carry: 16 × 16 / 220 → 1, burst: round(16/9) → 2
        assert_eq!(anim.particles().len(), 3);
        let baseline = anim.baseline_y();
        for p in anim.particles().iter() {
            // Spawned at the lead point then stepped once, moving up.
            assert!(p.position.y < baseline);
            assert!(p.position.x >= anim.layout().x);
        }
    }

    #[test]
    fn pool_respects_device_cap() {
        let mut anim = animator(AnimatorOptions::default().with_max_particles(25));
        let config = RevealConfig { density: 240.0, lifespan: 10_000.0, ..RevealConfig::default() };
        anim.mount(config, "Capped");
        for _ in 0..50 {
            pump(&mut anim, 16.0);
            assert!(anim.particles().len() <= 25);
        }
        assert_eq!(anim.particles().len(), 25);
    }

    #[test]
    fn stall_is_capped_to_one_step() {
        let mut anim = animator(AnimatorOptions::default());
        // Slow enough that the 5 s gap below leaves the reveal unfinished.
        let config = RevealConfig { text_speed: 0.1, ..RevealConfig::default() };
        anim.mount(config, "Stall");
        pump(&mut anim, 16.0);
        let carry_before = anim.state().spawn_carry.value();
        let count_before = anim.particles().len();
        // 5 s without frames: one capped 42 ms step worth of carry
        pump(&mut anim, 5000.0);
        let expected_carry = carry_before + 16.0 * 42.0 / 220.0;
        let carried = expected_carry.floor() as usize;
        assert!((anim.state().spawn_carry.value() - (expected_carry - carried as f32)).abs() < 1e-4);
        assert!(anim.particles().len() <= count_before + carried + 2);
    }

    #[test]
    fn suspend_cancels_and_resume_resets_clock() {
        let mut anim = animator(AnimatorOptions::default());
        anim.mount(RevealConfig::default(), "Tabs");
        pump(&mut anim, 16.0);
        let progress = anim.progress();
        let particles = anim.particles().len();

        anim.suspend();
        assert_eq!(anim.phase(), Phase::Suspended);
        assert!(!anim.has_pending_frame());
        assert_eq!(anim.scheduler().pending_count(), 0);
        assert_eq!(anim.progress(), progress);
        assert_eq!(anim.particles().len(), particles);

        let now = anim.scheduler_mut().advance(60_000.0);
        anim.resume();
        assert_eq!(anim.phase(), Phase::Running);
        assert_eq!(anim.state().last_at, now);
        assert_eq!(anim.scheduler().pending_count(), 1);
    }

    #[test]
    fn resume_when_finished_does_nothing() {
        let mut anim = animator(AnimatorOptions::default().with_reduced_motion(true));
        anim.mount(RevealConfig::default(), "Done");
        anim.suspend();
        anim.resume();
        assert_eq!(anim.scheduler().requested, 0);
        assert_eq!(anim.phase(), Phase::Finished);
    }

    #[test]
    fn restart_cancels_in_flight_frame() {
        let mut anim = animator(AnimatorOptions::default());
        anim.mount(RevealConfig::default(), "First");
        pump(&mut anim, 16.0);
        anim.start(RevealConfig::default(), "Second");
        assert_eq!(anim.scheduler().pending_count(), 1);
        assert!(anim.scheduler().cancelled >= 1);
        assert_eq!(anim.progress(), 0.0);
        assert!(anim.particles().is_empty());
        assert_eq!(anim.state().spawn_carry.value(), 0.0);
        assert_eq!(anim.text(), "Second");
    }

    #[test]
    fn resize_during_run_keeps_progress_and_particles() {
        let mut anim = animator(AnimatorOptions::default());
        anim.mount(RevealConfig::default(), "Resize me");
        for _ in 0..20 {
            pump(&mut anim, 16.0);
        }
        let progress = anim.progress();
        let particles = anim.particles().len();
        let old_x = anim.layout().x;
        assert!(particles > 0);

        anim.surface_mut().resize(1200.0, 500.0);
        anim.resize();

        assert_eq!(anim.progress(), progress);
        assert_eq!(anim.particles().len(), particles);
        assert!(anim.is_running());
        assert_ne!(anim.layout().x, old_x);
        assert_eq!(anim.baseline_y(), 500.0 * BASELINE_RATIO);
        assert_eq!(anim.scheduler().pending_count(), 1);
    }

    #[test]
    fn resize_when_idle_redraws_static_frame() {
        let mut anim = animator(AnimatorOptions::default());
        anim.mount(RevealConfig::default(), "Static");
        run_to_end(&mut anim);
        anim.surface_mut().resize(600.0, 300.0);
        anim.resize();
        assert_eq!(anim.surface().visible_text(), "Static");
        assert!(!anim.has_pending_frame());
        assert!(anim.is_finished());
    }

    #[test]
    fn word_mode_reveals_by_token() {
        let mut anim = animator(AnimatorOptions::default());
        let config = RevealConfig { mode: RevealMode::Word, ..RevealConfig::default() };
        anim.mount(config, "  From   Presentation ");
        assert_eq!(anim.text(), "From Presentation");
        let units: Vec<&str> = anim.layout().units.iter().map(|u| u.text.as_str()).collect();
        assert_eq!(units, vec!["From", " ", "Presentation"]);
    }

    #[test]
    fn stale_frame_after_finish_is_ignored() {
        let mut anim = animator(AnimatorOptions::default());
        anim.mount(RevealConfig::default(), "X");
        run_to_end(&mut anim);
        let frames = anim.surface().frames;
        anim.frame(anim.scheduler().now() + 16.0);
        assert_eq!(anim.surface().frames, frames);
        assert!(!anim.has_pending_frame());
    }
}
