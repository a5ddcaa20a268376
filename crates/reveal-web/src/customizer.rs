use std::cell::RefCell;

use reveal_engine::{
    Animator, AnimatorEvent, AnimatorOptions, DeviceClass, RawControls, Readouts, RevealConfig,
    RevealError, Rng,
};
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, Window};

use crate::canvas::CanvasSurface;
use crate::controls::ControlForm;
use crate::dom;
use crate::scheduler::RafScheduler;

pub type PageAnimator = Animator<CanvasSurface, RafScheduler, Rng>;

/// The mounted particle customizer: animator plus the form driving it.
pub struct Customizer {
    animator: PageAnimator,
    controls: ControlForm,
    window: Window,
}

thread_local! {
    static CUSTOMIZER: RefCell<Option<Customizer>> = RefCell::new(None);
}

/// Run `f` against the mounted customizer. `None` if nothing is mounted.
pub fn with_customizer<R>(f: impl FnOnce(&mut Customizer) -> R) -> Option<R> {
    CUSTOMIZER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Mount the customizer if the page has a particle stage.
///
/// Returns `Ok(false)` when there is no stage. Any other missing piece is an
/// error and nothing is mounted.
pub fn mount(window: &Window, document: &Document) -> Result<bool, RevealError> {
    if document.get_element_by_id("particleStage").is_none() {
        log::info!("reveal: no particle stage on this page");
        return Ok(false);
    }
    let stage: HtmlElement = dom::by_id(document, "particleStage")?;

    let canvas: HtmlCanvasElement = dom::by_id(document, "particleCanvas")?;
    let preview: HtmlElement = dom::by_id(document, "particlePreviewText")?;
    let controls = ControlForm::query(document)?;
    wire_events(window, document, &controls)?;

    let mut surface = CanvasSurface::new(canvas, stage)?;
    surface.fit_to_stage(window);

    // The canvas draws the title; the text node stays for screen readers.
    dom::set_style(&preview, "opacity", "0");
    if let Err(err) = preview.set_attribute("aria-hidden", "true") {
        log::warn!("aria-hidden: {:?}", err);
    }

    let device = DeviceClass::from_user_agent(&dom::user_agent(window));
    let options = AnimatorOptions::for_device(device)
        .with_reduced_motion(dom::prefers_reduced_motion(window));
    log::info!(
        "reveal: mounting ({:?}, cap {}, reduced motion {})",
        device,
        options.max_particles,
        options.reduced_motion
    );

    let on_frame = Closure::wrap(Box::new(|now: f64| {
        with_customizer(|c| c.on_frame(now));
    }) as Box<dyn FnMut(f64)>);
    let scheduler = RafScheduler::new(window.clone(), on_frame);
    let seed = (js_sys::Math::random() * (1u64 << 53) as f64) as u64;

    let mut customizer = Customizer {
        animator: Animator::new(surface, scheduler, Rng::new(seed), options),
        controls,
        window: window.clone(),
    };
    customizer.mount_animator();
    CUSTOMIZER.with(|cell| *cell.borrow_mut() = Some(customizer));
    Ok(true)
}

fn wire_events(window: &Window, document: &Document, controls: &ControlForm) -> Result<(), RevealError> {
    for input in controls.inputs() {
        dom::listen(input, "input", |_| {
            with_customizer(|c| c.on_control_input());
        })?;
    }

    dom::listen(&controls.form, "submit", |event| {
        event.prevent_default();
        with_customizer(|c| c.restart());
    })?;

    let doc = document.clone();
    dom::listen(document, "visibilitychange", move |_| {
        let hidden = doc.hidden();
        with_customizer(|c| c.on_visibility(hidden));
    })?;

    dom::listen(window, "resize", |_| {
        with_customizer(|c| c.on_resize());
    })?;

    Ok(())
}

impl Customizer {
    pub fn animator(&self) -> &PageAnimator {
        &self.animator
    }

    fn mount_animator(&mut self) {
        let (config, text) = self.read_form();
        self.animator.mount(config, &text);
        self.controls.set_text(self.animator.text());
        self.sync_controls();
    }

    /// Start a new run from whatever the form holds now.
    pub fn restart(&mut self) {
        let (config, text) = self.read_form();
        self.animator.start(config, &text);
        self.controls.set_text(self.animator.text());
        self.sync_controls();
    }

    /// Start a new run from a JSON control payload instead of the form.
    /// The form takes the sanitized values, so a later restart repeats this run.
    pub fn restart_with(&mut self, raw: &RawControls) {
        let config = raw.sanitize();
        self.controls.write(&RawControls::from(&config));
        self.controls.show_readouts(&Readouts::from_config(&config));
        let text = self.controls.text();
        self.animator.start(config, &text);
        self.controls.set_text(self.animator.text());
        self.sync_controls();
    }

    fn on_frame(&mut self, now: f64) {
        self.animator.frame(now);
        self.sync_controls();
    }

    /// Readouts follow the form live; the values apply at the next start.
    fn on_control_input(&mut self) {
        let config = self.controls.read().sanitize();
        self.controls.show_readouts(&Readouts::from_config(&config));
    }

    fn on_visibility(&mut self, hidden: bool) {
        if hidden {
            self.animator.suspend();
        } else {
            self.animator.resume();
        }
    }

    fn on_resize(&mut self) {
        self.animator.surface_mut().fit_to_stage(&self.window);
        self.animator.resize();
        self.sync_controls();
    }

    fn read_form(&self) -> (RevealConfig, String) {
        let config = self.controls.read().sanitize();
        self.controls.show_readouts(&Readouts::from_config(&config));
        (config, self.controls.text())
    }

    fn sync_controls(&mut self) {
        for event in self.animator.drain_events() {
            match event {
                AnimatorEvent::Started => self.controls.set_running(true),
                AnimatorEvent::Finished => self.controls.set_running(false),
            }
        }
    }
}
