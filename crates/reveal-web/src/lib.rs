//! Browser host for the reveal engine.
//!
//! `reveal_init` wires the whole page: top-on-reload, intro flag, scroll
//! shift, CTA scrolling, section stagger, the card nudge and the particle
//! customizer. Each piece mounts independently; one
//! that cannot find its elements logs a warning and leaves the rest running.

pub mod canvas;
pub mod controls;
pub mod customizer;
pub mod dom;
pub mod page;
pub mod scheduler;

pub use canvas::CanvasSurface;
pub use customizer::{with_customizer, Customizer, PageAnimator};
pub use scheduler::RafScheduler;

use reveal_engine::{RawControls, RevealError};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn reveal_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if let Err(err) = init_page() {
        log::warn!("reveal: page not initialized: {}", err);
        return;
    }
    log::info!("reveal: initialized");
}

fn init_page() -> Result<(), RevealError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let reduced_motion = dom::prefers_reduced_motion(&window);

    let steps: [(&str, Result<(), RevealError>); 6] = [
        ("top on reload", page::init_top_on_reload(&window)),
        ("intro", page::init_intro(&window, &document, reduced_motion)),
        ("scroll shift", page::init_scroll_shift(&window, &document)),
        ("calls to action", page::init_ctas(&window, &document, reduced_motion)),
        ("section motion", page::init_section_motion(&window, &document, reduced_motion)),
        ("video nudge", page::init_video_nudge(&document)),
    ];
    for (name, result) in steps {
        if let Err(err) = result {
            log::warn!("reveal: skipping {}: {}", name, err);
        }
    }

    if let Err(err) = customizer::mount(&window, &document) {
        log::warn!("reveal: customizer not mounted: {}", err);
    }
    Ok(())
}

/// Restart the title animation from the current form values.
#[wasm_bindgen]
pub fn reveal_restart() {
    with_customizer(|c| c.restart());
}

/// Restart the title animation from a JSON control payload
/// (`{"mode":"word","density":40,...}`; missing fields take defaults).
#[wasm_bindgen]
pub fn reveal_configure(json: &str) -> Result<(), JsValue> {
    let raw = RawControls::from_json(json).map_err(dom::to_js)?;
    with_customizer(|c| c.restart_with(&raw))
        .ok_or_else(|| dom::to_js(RevealError::MissingElement("#particleStage".into())))
}

/// Reveal progress of the current run, in [0, 1]. 0 when not mounted.
#[wasm_bindgen]
pub fn reveal_progress() -> f32 {
    with_customizer(|c| c.animator().progress()).unwrap_or(0.0)
}

/// Live particle count. 0 when not mounted.
#[wasm_bindgen]
pub fn reveal_particle_count() -> u32 {
    with_customizer(|c| c.animator().particles().len() as u32).unwrap_or(0)
}
