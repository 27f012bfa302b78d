use crate::prelude::*;

use crate::event::Event;
use crate::Result;

use wasm_bindgen::closure::Closure;
use web_sys::EventTarget;



// ============
// === Slot ===
// ============

/// A single event listener slot.
///
/// Stores a closure that can be registered as an event listener. The listener is registered once
/// a callback is set and unregistered when the slot is dropped.
///
/// Caveat: this listener holds a reference to the target while it is registered.
/// Be sure not to leak this value nor have it dependent on target destruction.
#[derive(Derivative)]
#[derivative(Debug(bound=""))]
pub struct Slot<E:Event> {
    logger     : Logger,
    target     : EventTarget,
    js_closure : Option<Closure<dyn FnMut(E::Interface)>>,
}

impl<E:Event> Slot<E> {
    /// Create a new `Slot`. The listener is registered once it gets a callback
    /// (see [[set_callback]]).
    pub fn new(target:&EventTarget, logger:&Logger) -> Self {
        Self {
            logger     : logger.sub(E::NAME),
            target     : target.clone(),
            js_closure : None,
        }
    }

    /// Register the event listener if the callback is set.
    fn add_if_active(&self) -> Result<()> {
        if let Some(closure) = &self.js_closure {
            debug!(self.logger,"Attaching the callback.");
            E::add_listener(&self.target,closure.as_ref().unchecked_ref())?;
        }
        Ok(())
    }

    /// Unregister the event listener if the callback is set.
    fn remove_if_active(&self) -> Result<()> {
        if let Some(closure) = &self.js_closure {
            debug!(self.logger,"Detaching the callback.");
            E::remove_listener(&self.target,closure.as_ref().unchecked_ref())?;
        }
        Ok(())
    }

    /// Assign a new event callback closure and register it in the target.
    ///
    /// If the listener was registered with the previous closure, it will unregister first.
    pub fn set_callback(&mut self, f:impl FnMut(E::Interface) + 'static) -> Result<()> {
        self.remove_if_active()?;
        self.js_closure = Some(Closure::wrap(Box::new(f) as Box<dyn FnMut(E::Interface)>));
        self.add_if_active()
    }
}

/// Unregister listener on drop.
impl<E:Event> Drop for Slot<E> {
    fn drop(&mut self) {
        if let Err(err) = self.remove_if_active() {
            warning!(self.logger,"Failed to detach the callback: {}",err);
        }
    }
}
