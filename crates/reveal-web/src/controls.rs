//! The customizer's control form.
//!
//! Reads the inputs into [`RawControls`] (the engine does the clamping) and
//! writes readouts and the start button state back.

use reveal_engine::{RawControls, Readouts, RevealError};
use web_sys::{
    Document, Element, EventTarget, HtmlButtonElement, HtmlInputElement, HtmlSelectElement,
};

use crate::dom::by_id;

pub struct ControlForm {
    pub form: Element,
    pub play: HtmlButtonElement,
    pub text_input: HtmlInputElement,
    mode: HtmlSelectElement,
    fade_in: HtmlInputElement,
    overlap: HtmlInputElement,
    text_speed: HtmlInputElement,
    particle_speed: HtmlInputElement,
    density: HtmlInputElement,
    lifespan: HtmlInputElement,
    size: HtmlInputElement,
    opacity: HtmlInputElement,
    overlap_val: Element,
    text_speed_val: Element,
    particle_speed_val: Element,
    density_val: Element,
    lifespan_val: Element,
    size_val: Element,
    opacity_val: Element,
}

impl ControlForm {
    /// Look up every control. Fails on the first missing element.
    pub fn query(document: &Document) -> Result<Self, RevealError> {
        Ok(Self {
            form: by_id(document, "particleControls")?,
            play: by_id(document, "particlePlay")?,
            text_input: by_id(document, "particleTextInput")?,
            mode: by_id(document, "revealMode")?,
            fade_in: by_id(document, "fadeInToggle")?,
            overlap: by_id(document, "overlapAmount")?,
            text_speed: by_id(document, "textSpeed")?,
            particle_speed: by_id(document, "particleSpeed")?,
            density: by_id(document, "particleDensity")?,
            lifespan: by_id(document, "particleLife")?,
            size: by_id(document, "particleSize")?,
            opacity: by_id(document, "particleOpacity")?,
            overlap_val: by_id(document, "overlapVal")?,
            text_speed_val: by_id(document, "textSpeedVal")?,
            particle_speed_val: by_id(document, "particleSpeedVal")?,
            density_val: by_id(document, "particleDensityVal")?,
            lifespan_val: by_id(document, "particleLifeVal")?,
            size_val: by_id(document, "particleSizeVal")?,
            opacity_val: by_id(document, "particleOpacityVal")?,
        })
    }

    /// Current form values, unvalidated. Unparseable numbers come through as NaN.
    pub fn read(&self) -> RawControls {
        RawControls {
            mode: self.mode.value(),
            fade_in: self.fade_in.checked(),
            overlap: self.overlap.value_as_number() as f32,
            text_speed: self.text_speed.value_as_number() as f32,
            particle_speed: self.particle_speed.value_as_number() as f32,
            density: self.density.value_as_number() as f32,
            lifespan: self.lifespan.value_as_number() as f32,
            size: self.size.value_as_number() as f32,
            opacity: self.opacity.value_as_number() as f32,
        }
    }

    /// Put `raw` back into the inputs, so the next `read` returns it.
    pub fn write(&self, raw: &RawControls) {
        self.mode.set_value(&raw.mode);
        self.fade_in.set_checked(raw.fade_in);
        let ranges = [
            (&self.overlap, raw.overlap),
            (&self.text_speed, raw.text_speed),
            (&self.particle_speed, raw.particle_speed),
            (&self.density, raw.density),
            (&self.lifespan, raw.lifespan),
            (&self.size, raw.size),
            (&self.opacity, raw.opacity),
        ];
        for (input, value) in ranges {
            input.set_value(&value.to_string());
        }
    }

    pub fn show_readouts(&self, readouts: &Readouts) {
        let pairs = [
            (&self.overlap_val, &readouts.overlap),
            (&self.text_speed_val, &readouts.text_speed),
            (&self.particle_speed_val, &readouts.particle_speed),
            (&self.density_val, &readouts.density),
            (&self.lifespan_val, &readouts.lifespan),
            (&self.size_val, &readouts.size),
            (&self.opacity_val, &readouts.opacity),
        ];
        for (el, text) in pairs {
            el.set_text_content(Some(text.as_str()));
        }
    }

    pub fn text(&self) -> String {
        self.text_input.value()
    }

    pub fn set_text(&self, text: &str) {
        self.text_input.set_value(text);
    }

    /// Disable the start button while a run is in flight.
    pub fn set_running(&self, running: bool) {
        self.play.set_disabled(running);
    }

    /// Inputs whose `input` event should refresh the readouts.
    pub fn inputs(&self) -> [&EventTarget; 9] {
        [
            &self.mode,
            &self.fade_in,
            &self.overlap,
            &self.text_speed,
            &self.particle_speed,
            &self.density,
            &self.lifespan,
            &self.size,
            &self.opacity,
        ]
    }
}
