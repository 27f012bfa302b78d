//! Sensor configuration: the component props and the backend selection switches.

use crate::prelude::*;



// ================
// === Callback ===
// ================

/// Function called with the new `(width, height)` of the observed element.
pub type Callback = Rc<dyn Fn(i32,i32)>;

/// Callback used when none was provided.
pub fn noop_callback() -> Callback {
    Rc::new(|_,_| {})
}



// =============
// === Props ===
// =============

/// Component props.
#[derive(Clone,Default,Derivative)]
#[derivative(Debug)]
pub struct Props {
    /// Called after every detected size change. When missing, size changes are tracked but not
    /// reported.
    #[derivative(Debug="ignore")]
    pub on_resize : Option<Callback>,
}

impl Props {
    /// Props without a callback.
    pub fn new() -> Self {
        default()
    }

    /// Set the resize callback.
    pub fn on_resize(mut self, f:impl Fn(i32,i32) + 'static) -> Self {
        self.on_resize = Some(Rc::new(f));
        self
    }
}



// ==============
// === Config ===
// ==============

/// Backend selection switches.
#[derive(Clone,Copy,Debug)]
pub struct Config {
    /// Use the native `onresize` notification of old Internet Explorer when the browser supports
    /// it, instead of the scroll triggers.
    pub legacy_fallback : bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {legacy_fallback:true}
    }
}

fn default<T:Default>() -> T {
    T::default()
}
