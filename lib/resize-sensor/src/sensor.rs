//! The resize sensor component.

use crate::prelude::*;

use crate::component::Component;
use crate::config;
use crate::config::Callback;
use crate::config::Config;
use crate::config::Props;
use crate::dom::Dom;
use crate::dom::EventKind;
use crate::dom::Signal;
use crate::dom::Vendor;
use crate::markup;
use crate::style;
use crate::Dimensions;
use crate::Result;

use std::mem;



// ================
// === Triggers ===
// ================

/// Elements of a mounted sensor.
#[derive(Clone,Debug)]
struct Triggers<Element> {
    host         : Element,
    root         : Element,
    expand       : Element,
    expand_child : Element,
    contract     : Element,
}



// =============
// === Model ===
// =============

#[derive(Derivative)]
#[derivative(Debug(bound=""))]
struct Model<D:Dom> {
    logger     : Logger,
    dom        : D,
    config     : Config,
    dimensions : Cell<Dimensions>,
    #[derivative(Debug="ignore")]
    on_resize  : RefCell<Callback>,
    triggers   : RefCell<Option<Triggers<D::Element>>>,
    listeners  : RefCell<Vec<D::Listener>>,
    pending    : RefCell<Option<D::Frame>>,
}

impl<D:Dom> Model<D> {
    fn new(dom:D, props:Props, config:Config) -> Self {
        let logger     = Logger::new("ResizeSensor");
        let dimensions = default();
        let on_resize  = RefCell::new(props.on_resize.unwrap_or_else(config::noop_callback));
        let triggers   = default();
        let listeners  = default();
        let pending    = default();
        Self {logger,dom,config,dimensions,on_resize,triggers,listeners,pending}
    }

    fn is_mounted(&self) -> bool {
        self.triggers.borrow().is_some()
    }

    fn uses_legacy_resize(&self) -> bool {
        self.config.legacy_fallback && self.dom.supports_legacy_resize()
    }
}


// === Lifecycle ===

impl<D:Dom> Model<D> {
    fn mount(self:&Rc<Self>, host:&D::Element) -> Result<()> {
        if self.is_mounted() {
            warning!(self.logger,"The sensor is already mounted, ignoring.");
            return Ok(())
        }
        if !self.dom.is_available() {
            info!(self.logger,"The DOM is not available, the sensor stays inert.");
            return Ok(())
        }
        if style::ensure_injected(&self.dom)? {
            debug!(self.logger,"Inserted the shared stylesheet.");
        }
        let triggers = self.build_scaffold(host)?;
        let root     = triggers.root.clone();
        *self.triggers.borrow_mut() = Some(triggers);
        let attached = if self.uses_legacy_resize() {
            debug!(self.logger,"Using the legacy resize notification.");
            self.attach_legacy_listener(&root)
        } else {
            self.attach_listeners(&root).map(|_| self.reset_triggers())
        };
        if attached.is_err() {
            self.unmount();
        }
        attached
    }

    fn build_scaffold(&self, host:&D::Element) -> Result<Triggers<D::Element>> {
        let dom            = &self.dom;
        let root           = dom.create_div(style::ROOT_CLASS)?;
        let expand         = dom.create_div(style::EXPAND_CLASS)?;
        let expand_child   = dom.create_div(style::EXPAND_CHILD_CLASS)?;
        let contract       = dom.create_div(style::CONTRACT_CLASS)?;
        let contract_child = dom.create_div(style::CONTRACT_CHILD_CLASS)?;
        dom.append_child(&expand,&expand_child)?;
        dom.append_child(&contract,&contract_child)?;
        dom.append_child(&root,&expand)?;
        dom.append_child(&root,&contract)?;
        dom.append_child(host,&root)?;
        let host = host.clone();
        Ok(Triggers {host,root,expand,expand_child,contract})
    }

    fn attach_listeners(self:&Rc<Self>, root:&D::Element) -> Result<()> {
        let weak      = Rc::downgrade(self);
        let on_scroll = Box::new(move |_:Signal| {
            if let Some(model) = weak.upgrade() { model.handle_scroll_signal() }
        });
        let listener = self.dom.listen(root,EventKind::Scroll,on_scroll)?;
        self.listeners.borrow_mut().push(listener);
        for vendor in Vendor::ALL.iter() {
            let weak  = Rc::downgrade(self);
            let on_animation_start = Box::new(move |signal:Signal| {
                if let (Some(model),Signal::AnimationStart{animation_name}) = (weak.upgrade(),signal) {
                    model.handle_visibility_signal(&animation_name)
                }
            });
            let kind     = EventKind::AnimationStart(*vendor);
            let listener = self.dom.listen(root,kind,on_animation_start)?;
            self.listeners.borrow_mut().push(listener);
        }
        Ok(())
    }

    fn attach_legacy_listener(self:&Rc<Self>, root:&D::Element) -> Result<()> {
        let weak      = Rc::downgrade(self);
        let on_resize = Box::new(move |_:Signal| {
            if let Some(model) = weak.upgrade() { model.check_and_report() }
        });
        let listener = self.dom.listen(root,EventKind::LegacyResize,on_resize)?;
        self.listeners.borrow_mut().push(listener);
        Ok(())
    }

    fn unmount(&self) {
        let triggers  = self.triggers.borrow_mut().take();
        let listeners = mem::take(&mut *self.listeners.borrow_mut());
        let pending   = self.pending.borrow_mut().take();
        drop(listeners);
        drop(pending);
        self.dimensions.set(Dimensions::ZERO);
        if let Some(triggers) = triggers {
            debug!(self.logger,"Unmounting.");
            if let Err(err) = self.dom.remove_child(&triggers.host,&triggers.root) {
                warning!(self.logger,"Cannot remove the sensor from its host: {}",err);
            }
        }
    }

    fn set_on_resize(&self, callback:Callback) {
        *self.on_resize.borrow_mut() = callback;
    }
}


// === Signals ===

impl<D:Dom> Model<D> {
    fn handle_scroll_signal(self:&Rc<Self>) {
        if !self.is_mounted() { return }
        self.reset_triggers();
        let previous = self.pending.borrow_mut().take();
        drop(previous);
        let weak  = Rc::downgrade(self);
        let check = Box::new(move || {
            if let Some(model) = weak.upgrade() { model.check_and_report() }
        });
        match self.dom.request_animation_frame(check) {
            Ok(frame) => *self.pending.borrow_mut() = Some(frame),
            Err(err)  => warning!(self.logger,"Cannot schedule the size check: {}",err),
        }
    }

    fn handle_visibility_signal(&self, animation_name:&str) {
        if animation_name == style::ANIMATION_NAME {
            self.reset_triggers();
        }
    }

    /// Scroll both triggers to their bottom-right corner, so that the next size change in any
    /// direction moves a scroll position.
    fn reset_triggers(&self) {
        let triggers = self.triggers.borrow();
        let triggers = match triggers.as_ref() {
            Some(triggers) => triggers,
            None           => return,
        };
        let dom      = &self.dom;
        let contract = dom.scroll_size(&triggers.contract);
        dom.set_scroll_position(&triggers.contract,contract.width,contract.height);
        let expand   = dom.offset_size(&triggers.expand);
        let child    = Dimensions::new(expand.width + 1, expand.height + 1);
        if let Err(err) = dom.set_size(&triggers.expand_child,child) {
            warning!(self.logger,"Cannot resize the expand trigger: {}",err);
        }
        let expand   = dom.scroll_size(&triggers.expand);
        dom.set_scroll_position(&triggers.expand,expand.width,expand.height);
    }

    fn check_and_report(&self) {
        let current = match self.triggers.borrow().as_ref() {
            Some(triggers) => self.dom.offset_size(&triggers.root),
            None           => return,
        };
        let previous = self.dimensions.get();
        if current.is_resized_from(previous) {
            debug!(self.logger,"Resized from {} to {}.",previous,current);
            self.dimensions.set(current);
            let on_resize = self.on_resize.borrow().clone();
            on_resize(current.width,current.height);
        }
    }
}

impl<D:Dom> Drop for Model<D> {
    fn drop(&mut self) {
        self.unmount();
    }
}



// ====================
// === ResizeSensor ===
// ====================

/// Reports size changes of the element it is mounted in.
///
/// The sensor renders an invisible overlay filling its host. `on_resize` is called with the new
/// size at most once per animation frame, and only if the size differs from the last reported one.
/// The first report happens right after mounting, once the host has a non-zero size.
///
/// Handles are cheap to clone. Dropping the last handle unmounts the sensor.
#[derive(Derivative)]
#[derivative(Clone(bound=""),Debug(bound=""))]
pub struct ResizeSensor<D:Dom> {
    model : Rc<Model<D>>,
}

impl<D:Dom> ResizeSensor<D> {
    /// Constructor. The sensor does nothing until mounted.
    pub fn new(dom:D, props:Props) -> Self {
        Self::with_config(dom,props,default())
    }

    /// Constructor with non-default backend selection.
    pub fn with_config(dom:D, props:Props, config:Config) -> Self {
        let model = Rc::new(Model::new(dom,props,config));
        Self {model}
    }

    /// The DOM the sensor operates on.
    pub fn dom(&self) -> &D {
        &self.model.dom
    }

    /// The last reported size. `(0,0)` before the first report of the current mount.
    pub fn dimensions(&self) -> Dimensions {
        self.model.dimensions.get()
    }

    /// Checks whether the sensor is mounted and wired to DOM events.
    pub fn is_mounted(&self) -> bool {
        self.model.is_mounted()
    }

    /// Checks whether the sensor relies on the legacy resize notification instead of scroll
    /// triggers.
    pub fn uses_legacy_resize(&self) -> bool {
        self.model.uses_legacy_resize()
    }

    /// Replace the resize callback. Takes effect from the next detected change.
    pub fn set_on_resize(&self, f:impl Fn(i32,i32) + 'static) {
        self.model.set_on_resize(Rc::new(f))
    }

    /// React to a trigger scrolling: re-arm the triggers and schedule a size check on the next
    /// animation frame, replacing the check scheduled before.
    pub fn handle_scroll_signal(&self) {
        self.model.handle_scroll_signal()
    }

    /// React to an animation start. The sensor's own animation starts whenever the overlay gets
    /// rendered, which re-arms the triggers. Other animations are ignored.
    pub fn handle_visibility_signal(&self, animation_name:&str) {
        self.model.handle_visibility_signal(animation_name)
    }

    /// Scroll both triggers to their bottom-right corner.
    pub fn reset_triggers(&self) {
        self.model.reset_triggers()
    }

    /// Measure the overlay and report the size if it changed. Does nothing when unmounted.
    pub fn check_and_report(&self) {
        self.model.check_and_report()
    }
}

impl<D:Dom> Component for ResizeSensor<D> {
    type Host  = D::Element;
    type Props = Props;

    fn mount(&self, host:&D::Element) -> Result<()> {
        self.model.mount(host)
    }

    fn update(&self, props:Props) {
        if let Some(on_resize) = props.on_resize {
            self.model.set_on_resize(on_resize)
        }
    }

    fn unmount(&self) {
        self.model.unmount()
    }

    fn render_to_string(&self) -> String {
        markup::render_to_string()
    }
}

fn default<T:Default>() -> T {
    T::default()
}



// =============
// === Tests ===
// =============

#[cfg(test)]
mod tests {
    use super::*;

    use crate::dom::mock::MockDom;

    #[test]
    fn mount_arms_triggers() {
        let dom    = MockDom::new();
        let host   = dom.create_host(Dimensions::new(100,50));
        let sensor = ResizeSensor::new(dom.clone(),Props::new());
        sensor.mount(&host).unwrap();

        let root         = dom.find(host,style::ROOT_CLASS).unwrap();
        let contract     = dom.find(root,style::CONTRACT_CLASS).unwrap();
        let expand       = dom.find(root,style::EXPAND_CLASS).unwrap();
        let expand_child = dom.find(expand,style::EXPAND_CHILD_CLASS).unwrap();
        assert_eq!(dom.scroll_position(contract), Dimensions::new(100,50));
        assert_eq!(dom.inline_size(expand_child), Some(Dimensions::new(101,51)));
        assert_eq!(dom.scroll_position(expand), Dimensions::new(1,1));
        assert!(dom.find(contract,style::CONTRACT_CHILD_CLASS).is_some());
    }

    #[test]
    fn standard_listeners() {
        let dom    = MockDom::new();
        let host   = dom.create_host(Dimensions::new(100,50));
        let sensor = ResizeSensor::new(dom.clone(),Props::new());
        sensor.mount(&host).unwrap();
        let root   = dom.find(host,style::ROOT_CLASS).unwrap();
        let counts = dom.listeners_of(root);
        assert_eq!(counts.get(&EventKind::Scroll), Some(&1));
        for vendor in Vendor::ALL.iter() {
            assert_eq!(counts.get(&EventKind::AnimationStart(*vendor)), Some(&1));
        }
        assert_eq!(dom.listener_count(), 5);
        assert!(!sensor.uses_legacy_resize());
    }

    #[test]
    fn mounting_twice_is_ignored() {
        let dom    = MockDom::new();
        let host   = dom.create_host(Dimensions::new(100,50));
        let sensor = ResizeSensor::new(dom.clone(),Props::new());
        sensor.mount(&host).unwrap();
        sensor.mount(&host).unwrap();
        assert_eq!(dom.children(host).len(), 1);
        assert_eq!(dom.listener_count(), 5);
    }

    #[test]
    fn signals_after_unmount_are_ignored() {
        let dom    = MockDom::new();
        let host   = dom.create_host(Dimensions::new(100,50));
        let calls  = Rc::new(Cell::new(0));
        let count  = calls.clone();
        let props  = Props::new().on_resize(move |_,_| count.set(count.get() + 1));
        let sensor = ResizeSensor::new(dom.clone(),props);
        sensor.mount(&host).unwrap();
        sensor.unmount();
        sensor.handle_scroll_signal();
        sensor.handle_visibility_signal(style::ANIMATION_NAME);
        sensor.check_and_report();
        assert_eq!(dom.pending_frames(), 0);
        assert_eq!(calls.get(), 0);
        assert_eq!(sensor.dimensions(), Dimensions::ZERO);
    }
}
