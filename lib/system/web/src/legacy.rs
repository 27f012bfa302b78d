//! Bridge to the non-standard `attachEvent` / `detachEvent` API of old Internet Explorer. Element
//! resize notifications (`onresize`) are only available through it.

use crate::prelude::*;

use crate::document;
use crate::Error;
use crate::Result;

use js_sys::Function;
use js_sys::Reflect;
use wasm_bindgen::closure::Closure;



// =================
// === Detection ===
// =================

/// Checks whether the document supports `attachEvent`. Probed once per thread; outside of a
/// browser this is always `false`.
pub fn is_supported() -> bool {
    thread_local! {
        static SUPPORTED : bool = probe();
    }
    SUPPORTED.with(|t| *t)
}

fn probe() -> bool {
    match document() {
        Ok(document) => Reflect::has(document.as_ref(),&JsValue::from_str("attachEvent")).unwrap_or(false),
        Err(_)       => false,
    }
}

fn call(target:&JsValue, method:&str, event:&str, listener:&Function) -> Result<()> {
    let method = Reflect::get(target,&JsValue::from_str(method))?;
    let method = method.dyn_into::<Function>().map_err(|_| Error::TypeMismatch("Function"))?;
    method.call2(target,&JsValue::from_str(event),listener)?;
    Ok(())
}



// ============
// === Slot ===
// ============

/// A listener registered with `attachEvent`. Detached when dropped.
#[derive(Debug)]
pub struct Slot {
    logger     : Logger,
    target     : JsValue,
    event      : &'static str,
    js_closure : Closure<dyn FnMut()>,
}

impl Slot {
    /// Attach `f` as the `event` handler (e.g. `"onresize"`) of `target`.
    pub fn new
    (target:&JsValue, event:&'static str, f:impl FnMut() + 'static, logger:&Logger) -> Result<Self> {
        let logger     = logger.sub(event);
        let target     = target.clone();
        let js_closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        debug!(logger,"Attaching the callback.");
        call(&target,"attachEvent",event,js_closure.as_ref().unchecked_ref())?;
        Ok(Self {logger,target,event,js_closure})
    }
}

impl Drop for Slot {
    fn drop(&mut self) {
        debug!(self.logger,"Detaching the callback.");
        let listener = self.js_closure.as_ref().unchecked_ref();
        if let Err(err) = call(&self.target,"detachEvent",self.event,listener) {
            warning!(self.logger,"Failed to detach the callback: {}",err);
        }
    }
}

#[cfg(test)]
#[cfg(not(target_arch = "wasm32"))]
mod tests {
    use super::*;

    #[test]
    fn unsupported_outside_of_browser() {
        assert!(!is_supported());
    }
}
