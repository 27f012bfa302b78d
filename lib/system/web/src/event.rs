//! Utilities for DOM events.

pub mod listener;

use crate::prelude::*;
use crate::Result;

use js_sys::Function;
use js_sys::Reflect;
use wasm_bindgen::convert::FromWasmAbi;
use web_sys::EventTarget;



// =============
// === Event ===
// =============

/// This trait represents a kind of event that may fire from some DOM object.
///
/// For example, `scroll` is such an event.
pub trait Event {
    /// The type of the event, the type of value passed to the event listeners.
    type Interface : AsRef<web_sys::Event> + FromWasmAbi + 'static;

    /// The name of the event. For example `"scroll"`.
    const NAME:&'static str;

    /// Whether listeners are registered for the capturing phase. Needed for events that do not
    /// bubble, like `scroll`, to be observed on an ancestor.
    const CAPTURE:bool = false;

    /// Adds a given function to the event's target as an event listener. It will be called each
    /// time event occurs until listener is removed through `remove_listener`.
    fn add_listener(target:&EventTarget, listener:&Function) -> Result<()> {
        target.add_event_listener_with_callback_and_bool(Self::NAME,listener,Self::CAPTURE)?;
        Ok(())
    }

    /// Remove the event listener. The `add_listener` method should have been called before with
    /// the very same function argument.
    fn remove_listener(target:&EventTarget, listener:&Function) -> Result<()> {
        target.remove_event_listener_with_callback_and_bool(Self::NAME,listener,Self::CAPTURE)?;
        Ok(())
    }
}



// ==============
// === Events ===
// ==============

/// The `scroll` event, listened to in the capturing phase.
#[derive(Clone,Copy,Debug)]
pub struct Scroll;
impl Event for Scroll {
    type Interface = web_sys::Event;
    const NAME:&'static str = "scroll";
    const CAPTURE:bool = true;
}

/// The standard `animationstart` event.
#[derive(Clone,Copy,Debug)]
pub struct AnimationStart;
impl Event for AnimationStart {
    type Interface = web_sys::Event;
    const NAME:&'static str = "animationstart";
}

/// The `animationstart` event of WebKit-based browsers.
#[derive(Clone,Copy,Debug)]
pub struct WebkitAnimationStart;
impl Event for WebkitAnimationStart {
    type Interface = web_sys::Event;
    const NAME:&'static str = "webkitAnimationStart";
}

/// The `animationstart` event of Presto-based Opera.
#[derive(Clone,Copy,Debug)]
pub struct OAnimationStart;
impl Event for OAnimationStart {
    type Interface = web_sys::Event;
    const NAME:&'static str = "oAnimationStart";
}

/// The `animationstart` event of Internet Explorer 10.
#[derive(Clone,Copy,Debug)]
pub struct MsAnimationStart;
impl Event for MsAnimationStart {
    type Interface = web_sys::Event;
    const NAME:&'static str = "MSAnimationStart";
}

/// Reads the `animationName` field of an animation event. Vendor-prefixed events are not always
/// instances of `AnimationEvent`, so the field is accessed reflectively.
pub fn animation_name(event:&web_sys::Event) -> Option<String> {
    Reflect::get(event.as_ref(),&JsValue::from_str("animationName")).ok()?.as_string()
}
