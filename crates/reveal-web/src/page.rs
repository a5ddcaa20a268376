//! Page-level motion around the customizer: scroll-driven CSS variables,
//! staggered section reveals, the intro overlay flag and the small chrome
//! behaviors (top-on-reload, CTA scrolling, card nudge).

use std::cell::Cell;
use std::rc::Rc;

use reveal_engine::extensions::chrome::{
    INTRO_DURATION_MS, NUDGE_DURATION_MS, NUDGE_EASE, TOP_RESET_RETRY_MS,
};
use reveal_engine::extensions::stagger::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use reveal_engine::{
    nudge_keyframes, reveal_delays, PlacedNode, RevealError, RevealMotion, ScrollMotion, ShiftVars,
    ShiftZone, SECTIONS,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyframeAnimationOptions, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, ScrollRestoration, ScrollToOptions, Window,
};

use crate::dom;

fn scroll_behavior(motion: ScrollMotion) -> ScrollBehavior {
    match motion {
        ScrollMotion::Smooth => ScrollBehavior::Smooth,
        ScrollMotion::Instant => ScrollBehavior::Auto,
    }
}

fn scroll_to_top(window: &Window, behavior: ScrollBehavior) {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_left(0.0);
    options.set_behavior(behavior);
    window.scroll_to_with_scroll_to_options(&options);
}

// ---- Top on reload ----

/// Always open the page at the top, including reloads and back/forward
/// cache restores. A strong reset repeats on the next frame and again after
/// short delays.
pub fn init_top_on_reload(window: &Window) -> Result<(), RevealError> {
    if let Err(err) = window
        .history()
        .and_then(|history| history.set_scroll_restoration(ScrollRestoration::Manual))
    {
        log::debug!("scrollRestoration: {:?}", err);
    }

    let reset = {
        let window = window.clone();
        dom::callback(move || scroll_to_top(&window, ScrollBehavior::Auto))
    };
    let retry = {
        let window = window.clone();
        dom::callback(move || {
            scroll_to_top(&window, ScrollBehavior::Auto);
            for delay in TOP_RESET_RETRY_MS {
                if let Err(err) = window.set_timeout_with_callback_and_timeout_and_arguments_0(&reset, delay) {
                    log::warn!("top reset timeout: {:?}", err);
                }
            }
        })
    };
    let reset_strong = {
        let window = window.clone();
        move || {
            scroll_to_top(&window, ScrollBehavior::Auto);
            if let Err(err) = window.request_animation_frame(&retry) {
                log::warn!("top reset frame: {:?}", err);
            }
        }
    };

    let unload_window = window.clone();
    dom::listen(window, "beforeunload", move |_| {
        scroll_to_top(&unload_window, ScrollBehavior::Auto)
    })?;
    for event in ["load", "pageshow"] {
        let reset_strong = reset_strong.clone();
        dom::listen(window, event, move |_| reset_strong())?;
    }
    reset_strong();
    Ok(())
}

// ---- Calls to action ----

/// `#ctaScroll` brings the shift zone to the top of the viewport;
/// `#restart` returns to the top of the page.
pub fn init_ctas(window: &Window, document: &Document, reduced_motion: bool) -> Result<(), RevealError> {
    let behavior = scroll_behavior(ScrollMotion::for_reduced_motion(reduced_motion));
    let cta: Element = dom::by_id(document, "ctaScroll")?;
    let zone: Element = dom::by_id(document, "shift-zone")?;
    let restart: Element = dom::by_id(document, "restart")?;

    dom::listen(&cta, "click", move |_| {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(behavior);
        options.set_block(ScrollLogicalPosition::Start);
        zone.scroll_into_view_with_scroll_into_view_options(&options);
    })?;

    let window = window.clone();
    dom::listen(&restart, "click", move |_| scroll_to_top(&window, behavior))?;
    Ok(())
}

// ---- Video card nudge ----

/// Give the legacy video card a small lift when clicked. Pages without the
/// card are left alone.
pub fn init_video_nudge(document: &Document) -> Result<(), RevealError> {
    let Some(card) = document
        .query_selector(".legacyLane .videoStub")
        .map_err(dom::host_error)?
    else {
        return Ok(());
    };

    let frames = js_sys::Array::new();
    for transform in nudge_keyframes() {
        let frame = js_sys::Object::new();
        js_sys::Reflect::set(&frame, &JsValue::from_str("transform"), &JsValue::from_str(&transform))
            .map_err(dom::host_error)?;
        frames.push(&frame);
    }
    let options = KeyframeAnimationOptions::new();
    options.set_duration(NUDGE_DURATION_MS);
    options.set_easing(NUDGE_EASE);

    let target = card.clone();
    dom::listen(&card, "click", move |_| {
        let keyframes: &js_sys::Object = &frames;
        let _ = target.animate_with_keyframe_animation_options(Some(keyframes), &options);
    })?;
    Ok(())
}

// ---- Intro overlay ----

/// Hold `data-intro="on"` on the root for the intro duration.
pub fn init_intro(window: &Window, document: &Document, reduced_motion: bool) -> Result<(), RevealError> {
    if reduced_motion {
        return Ok(());
    }
    let root = dom::root_element(document)?;
    dom::set_data(&root, "intro", "on");

    let done = Closure::once_into_js(move || dom::set_data(&root, "intro", "off"));
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            done.unchecked_ref(),
            INTRO_DURATION_MS as i32,
        )
        .map_err(dom::host_error)?;
    Ok(())
}

// ---- Scroll shift ----

struct ScrollShift {
    window: Window,
    document: Document,
    root: HtmlElement,
    zone_el: HtmlElement,
    zone: Cell<ShiftZone>,
    frame_pending: Cell<bool>,
}

impl ScrollShift {
    fn recalc(&self) {
        self.zone.set(ShiftZone::measure(
            self.zone_el.offset_top() as f32,
            self.zone_el.offset_height() as f32,
            dom::viewport_height(&self.window) as f32,
        ));
    }

    fn update(&self) {
        let scroll_height = self.document.body().map_or(0, |b| b.scroll_height());
        let vars = ShiftVars::compute(
            &self.zone.get(),
            dom::scroll_y(&self.window) as f32,
            scroll_height as f32,
            dom::viewport_height(&self.window) as f32,
        );
        for (name, value) in vars.css_properties() {
            dom::set_style(&self.root, name, &value);
        }
        dom::set_data(&self.root, "proof", vars.proof_flag());
    }
}

/// Keep the root's shift variables in step with the scroll position.
/// Scroll events are coalesced to one update per animation frame.
pub fn init_scroll_shift(window: &Window, document: &Document) -> Result<(), RevealError> {
    let shift = Rc::new(ScrollShift {
        window: window.clone(),
        document: document.clone(),
        root: dom::root_element(document)?,
        zone_el: dom::query(document, "[data-shift-zone]")?,
        zone: Cell::new(ShiftZone::default()),
        frame_pending: Cell::new(false),
    });

    let tick_fn = {
        let shift = Rc::clone(&shift);
        dom::callback(move || {
            shift.frame_pending.set(false);
            shift.update();
        })
    };

    {
        let shift = Rc::clone(&shift);
        dom::listen(window, "scroll", move |_| {
            if shift.frame_pending.get() {
                return;
            }
            match shift.window.request_animation_frame(&tick_fn) {
                Ok(_) => shift.frame_pending.set(true),
                Err(err) => log::warn!("scroll frame: {:?}", err),
            }
        })?;
    }
    {
        let shift = Rc::clone(&shift);
        dom::listen(window, "resize", move |_| {
            shift.recalc();
            shift.update();
        })?;
    }

    shift.recalc();
    shift.update();
    Ok(())
}

// ---- Section stagger ----

/// Tag every section node for a staggered reveal and flip each to `inview`
/// as it scrolls into view. Without motion or observer support everything is
/// shown at once.
pub fn init_section_motion(window: &Window, document: &Document, reduced_motion: bool) -> Result<(), RevealError> {
    let scroll_y = dom::scroll_y(window) as f32;
    let mut nodes: Vec<Element> = Vec::new();
    let mut placed: Vec<PlacedNode> = Vec::new();

    for section_def in SECTIONS {
        let Some(section) = document.get_element_by_id(section_def.id) else {
            continue;
        };

        let mut ordered: Vec<Element> = Vec::new();
        for selector in section_def.selectors {
            for node in dom::query_all(&section, selector)? {
                if !ordered.iter().any(|seen| seen.is_same_node(Some(node.as_ref()))) {
                    ordered.push(node);
                }
            }
        }

        for (index, node) in ordered.into_iter().enumerate() {
            dom::add_class(&node, "reveal");
            if let Some(el) = node.dyn_ref::<HtmlElement>() {
                let motion = RevealMotion::for_node(section_def.id, index, section_def.travel);
                for (name, value) in motion.css_properties() {
                    dom::set_style(el, name, &value);
                }
            }
            let top = node.get_bounding_client_rect().top() as f32 + scroll_y;
            placed.push(PlacedNode { top, index });
            nodes.push(node);
        }
    }

    for (node, delay) in nodes.iter().zip(reveal_delays(&placed)) {
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            dom::set_style(el, "--reveal-delay", &format!("{}ms", delay));
        }
    }
    log::debug!("reveal: {} section nodes staged", nodes.len());

    let has_observer = js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
    if reduced_motion || !has_observer {
        for node in &nodes {
            dom::add_class(node, "inview");
        }
        return Ok(());
    }

    let on_intersect = Closure::wrap(Box::new(|entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            dom::add_class(&target, "inview");
            observer.unobserve(&target);
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init)
        .map_err(dom::host_error)?;
    on_intersect.forget();

    for node in &nodes {
        observer.observe(node);
    }
    Ok(())
}
