//! One-shot `requestAnimationFrame` handles.

use crate::prelude::*;

use crate::window;
use crate::Result;

use wasm_bindgen::closure::Closure;
use web_sys::Window;



// ======================
// === AnimationFrame ===
// ======================

/// A callback scheduled for the next animation frame. Dropping the handle cancels the callback if
/// it did not fire yet.
#[derive(Debug)]
pub struct AnimationFrame {
    id      : i32,
    window  : Window,
    closure : Closure<dyn FnMut(f64)>,
}

impl AnimationFrame {
    /// Schedule `f` to run before the next repaint.
    pub fn request(f:impl FnOnce() + 'static) -> Result<Self> {
        let window  = window()?;
        let closure : Closure<dyn FnMut(f64)> = Closure::once(move |_time:f64| f());
        let id = window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        Ok(Self {id,window,closure})
    }
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        // Cancelling a frame which already fired is a no-op.
        let _ = self.window.cancel_animation_frame(self.id);
    }
}
