//! The DOM capabilities the sensor relies on.

#[cfg(any(test,feature="mock"))]
pub mod mock;
pub mod web;

use crate::prelude::*;

use crate::Dimensions;
use crate::Result;



// ==============
// === Vendor ===
// ==============

/// Browser families with their own name of the `animationstart` event.
#[derive(Clone,Copy,Debug,PartialEq,Eq,Hash)]
#[allow(missing_docs)]
pub enum Vendor {
    Webkit,
    Standard,
    Opera,
    Microsoft,
}

impl Vendor {
    /// All vendors, in the order their listeners are attached.
    pub const ALL : [Vendor;4] = [Vendor::Webkit,Vendor::Standard,Vendor::Opera,Vendor::Microsoft];

    /// Name of this vendor's `animationstart` event.
    pub fn animation_start_event(self) -> &'static str {
        match self {
            Vendor::Webkit    => "webkitAnimationStart",
            Vendor::Standard  => "animationstart",
            Vendor::Opera     => "oAnimationStart",
            Vendor::Microsoft => "MSAnimationStart",
        }
    }
}



// =================
// === EventKind ===
// =================

/// DOM events observed by the sensor.
#[derive(Clone,Copy,Debug,PartialEq,Eq,Hash)]
pub enum EventKind {
    /// `scroll` of the overlay or any of its descendants, observed in the capturing phase.
    Scroll,
    /// Start of a CSS animation of the overlay or any of its descendants.
    AnimationStart(Vendor),
    /// The `onresize` notification of old Internet Explorer, registered with `attachEvent`.
    LegacyResize,
}

impl EventKind {
    /// The DOM name of the event.
    pub fn name(self) -> &'static str {
        match self {
            EventKind::Scroll                 => "scroll",
            EventKind::AnimationStart(vendor) => vendor.animation_start_event(),
            EventKind::LegacyResize           => "onresize",
        }
    }

    /// Whether the listener is registered for the capturing phase.
    pub fn capture(self) -> bool {
        self == EventKind::Scroll
    }

    /// Whether the event propagates from its target up to the ancestors.
    pub fn bubbles(self) -> bool {
        matches!(self, EventKind::AnimationStart(_))
    }
}



// ==============
// === Signal ===
// ==============

/// What a listener learns when its event fires.
#[derive(Clone,Debug,PartialEq,Eq)]
pub enum Signal {
    /// Some trigger scrolled.
    Scroll,
    /// An animation named `animation_name` started.
    AnimationStart {
        /// The `animationName` of the event.
        animation_name : String,
    },
    /// The element changed its size (legacy notification).
    Resize,
}

/// Listener callback.
pub type Handler = Box<dyn Fn(Signal)>;



// ===========
// === Dom ===
// ===========

/// The DOM operations used by the sensor.
///
/// Listener and frame handles are RAII guards: dropping a listener detaches it and dropping a
/// frame cancels it unless it already fired.
pub trait Dom : Debug + 'static {
    /// A DOM element.
    type Element : Clone + Debug + 'static;
    /// A registered event listener.
    type Listener : Debug;
    /// A scheduled animation frame callback.
    type Frame : Debug;

    /// Checks whether a browser DOM is reachable at all. Never panics.
    fn is_available(&self) -> bool;

    /// Checks whether the legacy `attachEvent('onresize')` notification is supported.
    fn supports_legacy_resize(&self) -> bool;

    /// Create a detached `<div>` with the given class.
    fn create_div(&self, class_name:&str) -> Result<Self::Element>;

    /// Append `child` to `parent`.
    fn append_child(&self, parent:&Self::Element, child:&Self::Element) -> Result<()>;

    /// Remove `child` from `parent`.
    fn remove_child(&self, parent:&Self::Element, child:&Self::Element) -> Result<()>;

    /// Add a stylesheet to the document.
    fn insert_style(&self, css:&str) -> Result<()>;

    /// `offsetWidth` and `offsetHeight`.
    fn offset_size(&self, element:&Self::Element) -> Dimensions;

    /// `scrollWidth` and `scrollHeight`.
    fn scroll_size(&self, element:&Self::Element) -> Dimensions;

    /// Set `scrollLeft` and `scrollTop`. Browsers clamp them to the scrollable range.
    fn set_scroll_position(&self, element:&Self::Element, left:i32, top:i32);

    /// Set the inline `width` and `height` style, in pixels.
    fn set_size(&self, element:&Self::Element, size:Dimensions) -> Result<()>;

    /// Call `handler` whenever `kind` fires on `element`.
    fn listen(&self, element:&Self::Element, kind:EventKind, handler:Handler)
        -> Result<Self::Listener>;

    /// Call `f` before the next repaint.
    fn request_animation_frame(&self, f:Box<dyn FnOnce()>) -> Result<Self::Frame>;
}



// =============
// === Tests ===
// =============

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names() {
        let names : Vec<_> = Vendor::ALL.iter().map(|v| EventKind::AnimationStart(*v).name()).collect();
        assert_eq!(names, vec!["webkitAnimationStart","animationstart","oAnimationStart","MSAnimationStart"]);
        assert_eq!(EventKind::Scroll.name(), "scroll");
        assert!(EventKind::Scroll.capture());
        assert!(!EventKind::Scroll.bubbles());
        assert!(EventKind::AnimationStart(Vendor::Standard).bubbles());
        assert!(!EventKind::LegacyResize.bubbles());
    }
}
