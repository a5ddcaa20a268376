use reveal_engine::{FrameHandle, FrameScheduler};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// [`FrameScheduler`] over `requestAnimationFrame`.
///
/// Every request reuses the one callback given at construction; the callback
/// is expected to route the timestamp back to `Animator::frame`.
pub struct RafScheduler {
    window: Window,
    callback: Closure<dyn FnMut(f64)>,
}

impl RafScheduler {
    pub fn new(window: Window, callback: Closure<dyn FnMut(f64)>) -> Self {
        Self { window, callback }
    }
}

impl FrameScheduler for RafScheduler {
    fn now(&self) -> f64 {
        self.window.performance().map_or(0.0, |p| p.now())
    }

    fn request_frame(&mut self) -> FrameHandle {
        match self
            .window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
        {
            Ok(id) => FrameHandle(id),
            Err(err) => {
                log::warn!("requestAnimationFrame failed: {:?}", err);
                FrameHandle(0)
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if handle.0 == 0 {
            return;
        }
        let _ = self.window.cancel_animation_frame(handle.0);
    }
}
