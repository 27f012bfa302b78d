//! [`Dom`] implementation for the browser.

use crate::prelude::*;

use crate::dom::Dom;
use crate::dom::EventKind;
use crate::dom::Handler;
use crate::dom::Signal;
use crate::dom::Vendor;
use crate::Dimensions;
use crate::Result;

use resize_sensor_web as web;
use web::animation_frame::AnimationFrame;
use web::event;
use web::event::listener::Slot;
use web::legacy;
use wasm_bindgen::JsCast;
use web_sys::Document;
use web_sys::EventTarget;
use web_sys::HtmlElement;



// ===================
// === WebListener ===
// ===================

/// Listener registered in the browser. Detached when dropped.
#[derive(Debug)]
#[allow(missing_docs)]
pub enum WebListener {
    Scroll               (Slot<event::Scroll>),
    AnimationStart       (Slot<event::AnimationStart>),
    WebkitAnimationStart (Slot<event::WebkitAnimationStart>),
    OAnimationStart      (Slot<event::OAnimationStart>),
    MsAnimationStart     (Slot<event::MsAnimationStart>),
    Legacy               (legacy::Slot),
}



// ==============
// === WebDom ===
// ==============

/// The browser DOM. Outside of a browser the instance is inert: [`Dom::is_available`] is `false`
/// and every fallible operation returns [`crate::Error::Unavailable`].
#[derive(Clone,Debug)]
pub struct WebDom {
    logger   : Logger,
    document : Option<Document>,
}

impl Default for WebDom {
    fn default() -> Self {
        Self::new()
    }
}

impl WebDom {
    /// Connect to the global `document`, if there is one.
    pub fn new() -> Self {
        let logger   = Logger::new("WebDom");
        let document = if web::is_browser() { web::document().ok() } else { None };
        if document.is_some() {
            web::set_panic_hook();
        } else {
            info!(logger,"No browser document found, the DOM will stay inert.");
        }
        Self {logger,document}
    }

    /// The connected document.
    pub fn document(&self) -> Result<&Document> {
        self.document.as_ref().ok_or_else(|| web::Error::NotInBrowser.into())
    }

    fn slot<E>(&self, target:&EventTarget, f:impl FnMut(web_sys::Event) + 'static) -> Result<Slot<E>>
    where E:event::Event<Interface=web_sys::Event> {
        let mut slot = Slot::new(target,&self.logger);
        slot.set_callback(f)?;
        Ok(slot)
    }
}

impl Dom for WebDom {
    type Element  = HtmlElement;
    type Listener = WebListener;
    type Frame    = AnimationFrame;

    fn is_available(&self) -> bool {
        self.document.is_some()
    }

    fn supports_legacy_resize(&self) -> bool {
        self.is_available() && legacy::is_supported()
    }

    fn create_div(&self, class_name:&str) -> Result<HtmlElement> {
        let element = self.document()?.create_element("div")?;
        element.set_class_name(class_name);
        let element = element.dyn_into::<HtmlElement>();
        Ok(element.map_err(|_| web::Error::TypeMismatch("HtmlElement"))?)
    }

    fn append_child(&self, parent:&HtmlElement, child:&HtmlElement) -> Result<()> {
        parent.append_child(child)?;
        Ok(())
    }

    fn remove_child(&self, parent:&HtmlElement, child:&HtmlElement) -> Result<()> {
        parent.remove_child(child)?;
        Ok(())
    }

    fn insert_style(&self, css:&str) -> Result<()> {
        web::style::insert_css(self.document()?,css)?;
        Ok(())
    }

    fn offset_size(&self, element:&HtmlElement) -> Dimensions {
        Dimensions::new(element.offset_width(),element.offset_height())
    }

    fn scroll_size(&self, element:&HtmlElement) -> Dimensions {
        Dimensions::new(element.scroll_width(),element.scroll_height())
    }

    fn set_scroll_position(&self, element:&HtmlElement, left:i32, top:i32) {
        element.set_scroll_left(left);
        element.set_scroll_top(top);
    }

    fn set_size(&self, element:&HtmlElement, size:Dimensions) -> Result<()> {
        let style = element.style();
        style.set_property("width" ,&format!("{}px",size.width))?;
        style.set_property("height",&format!("{}px",size.height))?;
        Ok(())
    }

    fn listen(&self, element:&HtmlElement, kind:EventKind, handler:Handler) -> Result<WebListener> {
        let target : &EventTarget = element.as_ref();
        let listener = match kind {
            EventKind::Scroll => {
                let f = move |_:web_sys::Event| handler(Signal::Scroll);
                WebListener::Scroll(self.slot(target,f)?)
            }
            EventKind::AnimationStart(vendor) => {
                let f = move |event:web_sys::Event| {
                    let animation_name = event::animation_name(&event).unwrap_or_default();
                    handler(Signal::AnimationStart {animation_name})
                };
                match vendor {
                    Vendor::Standard  => WebListener::AnimationStart(self.slot(target,f)?),
                    Vendor::Webkit    => WebListener::WebkitAnimationStart(self.slot(target,f)?),
                    Vendor::Opera     => WebListener::OAnimationStart(self.slot(target,f)?),
                    Vendor::Microsoft => WebListener::MsAnimationStart(self.slot(target,f)?),
                }
            }
            EventKind::LegacyResize => {
                let f = move || handler(Signal::Resize);
                WebListener::Legacy(legacy::Slot::new(element.as_ref(),"onresize",f,&self.logger)?)
            }
        };
        Ok(listener)
    }

    fn request_animation_frame(&self, f:Box<dyn FnOnce()>) -> Result<AnimationFrame> {
        Ok(AnimationFrame::request(f)?)
    }
}



// =============
// === Tests ===
// =============

#[cfg(test)]
#[cfg(not(target_arch = "wasm32"))]
mod tests {
    use super::*;

    use crate::Error;

    #[test]
    fn inert_outside_of_browser() {
        let dom = WebDom::new();
        assert!(!dom.is_available());
        assert!(!dom.supports_legacy_resize());
        assert_eq!(dom.create_div("x").err(), Some(Error::Unavailable));
        assert_eq!(dom.insert_style("").err(), Some(Error::Unavailable));
    }
}
