//! A simulated DOM for testing the sensor without a browser.
//!
//! Only the layout rules of the sensor's own stylesheet are simulated: the overlay and both
//! triggers fill their parent, the contract child is twice as large as its trigger, and any other
//! element uses its inline size (or, without one, its parent's width and no height). Hosts have an
//! explicit size set by the test.
//!
//! Time advances in frames. Scroll, animation and legacy resize events caused by DOM mutations are
//! queued and dispatched at the beginning of [`MockDom::run_frame`], followed by the animation
//! frame callbacks requested up to that point, in the order browsers run them.

use crate::prelude::*;

use crate::dom::Dom;
use crate::dom::EventKind;
use crate::dom::Handler;
use crate::dom::Signal;
use crate::dom::Vendor;
use crate::style;
use crate::Dimensions;
use crate::Error;
use crate::Result;

use std::collections::HashMap;
use std::mem;



// =================
// === Constants ===
// =================

/// Upper bound of frames run by [`MockDom::settle`]. A correct sensor settles in a few frames.
pub const MAX_SETTLE_FRAMES : usize = 64;



// ===================
// === MockElement ===
// ===================

/// Handle to an element of a [`MockDom`].
#[derive(Clone,Copy,Debug,PartialEq,Eq,Hash)]
pub struct MockElement(usize);



// ============
// === Node ===
// ============

#[derive(Clone,Debug,Default)]
struct Node {
    class_name  : String,
    parent      : Option<usize>,
    children    : Vec<usize>,
    host_size   : Option<Dimensions>,
    inline_size : Option<Dimensions>,
    scroll      : Dimensions,
    visible     : bool,
}

#[derive(Derivative)]
#[derivative(Debug)]
struct Listener {
    id      : usize,
    element : usize,
    kind    : EventKind,
    #[derivative(Debug="ignore")]
    handler : Rc<dyn Fn(Signal)>,
}

#[derive(Clone,Debug)]
struct QueuedEvent {
    target         : usize,
    kind           : EventKind,
    animation_name : Option<String>,
}

impl QueuedEvent {
    fn signal(&self) -> Signal {
        match self.kind {
            EventKind::Scroll            => Signal::Scroll,
            EventKind::LegacyResize      => Signal::Resize,
            EventKind::AnimationStart(_) => {
                let animation_name = self.animation_name.clone().unwrap_or_default();
                Signal::AnimationStart {animation_name}
            }
        }
    }
}



// =============
// === State ===
// =============

#[derive(Derivative,Default)]
#[derivative(Debug)]
struct State {
    available        : bool,
    legacy           : bool,
    nodes            : Vec<Node>,
    listeners        : Vec<Listener>,
    next_listener_id : usize,
    events           : Vec<QueuedEvent>,
    #[derivative(Debug="ignore")]
    frames           : Vec<(usize,Box<dyn FnOnce()>)>,
    next_frame_id    : usize,
    styles           : Vec<String>,
}

/// What the layout looked like before a mutation, to derive the events the mutation causes.
struct Snapshot {
    sizes    : Vec<Dimensions>,
    rendered : Vec<bool>,
}


// === Layout ===

impl State {
    fn is_rendered(&self, id:usize) -> bool {
        let node = &self.nodes[id];
        if !node.visible { return false }
        match node.parent {
            Some(parent) => self.is_rendered(parent),
            None         => node.host_size.is_some(),
        }
    }

    fn size(&self, id:usize) -> Dimensions {
        if !self.is_rendered(id) { return Dimensions::ZERO }
        let node = &self.nodes[id];
        if let Some(size) = node.host_size { return size }
        let parent = node.parent.map(|parent| self.size(parent)).unwrap_or_default();
        match node.class_name.as_str() {
            style::CONTRACT_CHILD_CLASS => parent.scale(2),
            style::ROOT_CLASS | style::EXPAND_CLASS | style::CONTRACT_CLASS => parent,
            _ => node.inline_size.unwrap_or_else(|| Dimensions::new(parent.width,0)),
        }
    }

    fn scroll_size(&self, id:usize) -> Dimensions {
        let children = self.nodes[id].children.iter().map(|child| self.size(*child));
        children.fold(self.size(id),Dimensions::max)
    }

    fn max_scroll(&self, id:usize) -> Dimensions {
        self.scroll_size(id).saturating_sub(self.size(id))
    }

    fn snapshot(&self) -> Snapshot {
        let ids      = 0..self.nodes.len();
        let sizes    = ids.clone().map(|id| self.size(id)).collect();
        let rendered = ids.map(|id| self.is_rendered(id)).collect();
        Snapshot {sizes,rendered}
    }
}


// === Events ===

impl State {
    /// Scroll events are coalesced per target until dispatched, like browsers do within a frame.
    /// Elements without a layout box do not scroll.
    fn queue_scroll(&mut self, target:usize) {
        let kind      = EventKind::Scroll;
        let queued    = self.events.iter().any(|e| e.target == target && e.kind == kind);
        if !queued && self.is_rendered(target) {
            self.events.push(QueuedEvent {target,kind,animation_name:None});
        }
    }

    fn set_scroll(&mut self, id:usize, left:i32, top:i32) {
        let max     = self.max_scroll(id);
        let clamped = Dimensions::new(left.max(0).min(max.width), top.max(0).min(max.height));
        if clamped != self.nodes[id].scroll {
            self.nodes[id].scroll = clamped;
            self.queue_scroll(id);
        }
    }

    /// Queue the events caused by the layout changing since `before`.
    fn relayout(&mut self, before:Snapshot) {
        for id in 0..self.nodes.len() {
            let scroll = self.nodes[id].scroll;
            self.set_scroll(id,scroll.width,scroll.height);
            let rendered     = self.is_rendered(id);
            let was_rendered = before.rendered.get(id).copied().unwrap_or(false);
            let old_size     = before.sizes.get(id).copied().unwrap_or_default();
            if self.legacy && self.size(id) != old_size {
                let kind = EventKind::LegacyResize;
                self.events.push(QueuedEvent {target:id,kind,animation_name:None});
            }
            if rendered && !was_rendered && self.nodes[id].class_name == style::ROOT_CLASS {
                let kind           = EventKind::AnimationStart(Vendor::Standard);
                let animation_name = Some(style::ANIMATION_NAME.to_string());
                self.events.push(QueuedEvent {target:id,kind,animation_name});
            }
        }
    }

    /// Listeners to call for `event`, in propagation order: capturing listeners of the ancestors
    /// from the top, then the target's own listeners, then bubbling listeners of the ancestors.
    fn route(&self, event:&QueuedEvent) -> Vec<(usize,Rc<dyn Fn(Signal)>)> {
        let mut ancestors = Vec::new();
        let mut current   = self.nodes[event.target].parent;
        while let Some(id) = current {
            ancestors.push(id);
            current = self.nodes[id].parent;
        }
        let listeners_of = |element:usize| self.listeners.iter()
            .filter(move |l| l.element == element && l.kind == event.kind)
            .map(|l| (l.id,l.handler.clone()));
        let mut route = Vec::new();
        if event.kind.capture() {
            for ancestor in ancestors.iter().rev() {
                route.extend(listeners_of(*ancestor));
            }
        }
        route.extend(listeners_of(event.target));
        if event.kind.bubbles() {
            for ancestor in &ancestors {
                route.extend(listeners_of(*ancestor));
            }
        }
        route
    }
}



// ===============
// === MockDom ===
// ===============

/// Simulated single-threaded DOM. Cloning creates another handle to the same document.
#[derive(Clone,Debug)]
pub struct MockDom {
    state : Rc<RefCell<State>>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}


// === Constructors ===

impl MockDom {
    /// A browser supporting the standard events.
    pub fn new() -> Self {
        Self::with(|state| state.available = true)
    }

    /// A non-browser environment, like server-side rendering. Every DOM operation fails.
    pub fn server() -> Self {
        Self::with(|_| {})
    }

    /// A browser supporting the legacy `attachEvent('onresize')` notification.
    pub fn legacy() -> Self {
        Self::with(|state| {
            state.available = true;
            state.legacy    = true;
        })
    }

    fn with(f:impl FnOnce(&mut State)) -> Self {
        let mut state = State::default();
        f(&mut state);
        let state = Rc::new(RefCell::new(state));
        Self {state}
    }

    fn check_available(&self) -> Result<()> {
        if self.state.borrow().available { Ok(()) } else { Err(Error::Unavailable) }
    }

    fn mutate<T>(&self, f:impl FnOnce(&mut State) -> T) -> T {
        let mut state = self.state.borrow_mut();
        let before    = state.snapshot();
        let out       = f(&mut state);
        state.relayout(before);
        out
    }
}


// === Test Controls ===

impl MockDom {
    /// Create a visible element with an explicit size, standing for an element laid out by the
    /// page.
    pub fn create_host(&self, size:Dimensions) -> MockElement {
        self.mutate(|state| {
            let id   = state.nodes.len();
            let node = Node {host_size:Some(size), visible:true, ..default()};
            state.nodes.push(node);
            MockElement(id)
        })
    }

    /// Change the size of a host created with [`MockDom::create_host`].
    pub fn resize(&self, host:MockElement, size:Dimensions) {
        self.mutate(|state| {
            if let Some(host_size) = state.nodes[host.0].host_size.as_mut() {
                *host_size = size;
            }
        })
    }

    /// Show or hide (`display:none`) an element.
    pub fn set_visible(&self, element:MockElement, visible:bool) {
        self.mutate(|state| state.nodes[element.0].visible = visible)
    }

    /// Synchronously dispatch an event without a payload to `target`.
    pub fn dispatch(&self, target:MockElement, kind:EventKind) {
        self.dispatch_event(QueuedEvent {target:target.0,kind,animation_name:None})
    }

    /// Synchronously dispatch an `animationstart` event to `target`.
    pub fn dispatch_animation_start(&self, target:MockElement, vendor:Vendor, animation_name:&str) {
        let kind           = EventKind::AnimationStart(vendor);
        let animation_name = Some(animation_name.to_string());
        self.dispatch_event(QueuedEvent {target:target.0,kind,animation_name})
    }

    fn dispatch_event(&self, event:QueuedEvent) {
        let route  = self.state.borrow().route(&event);
        let signal = event.signal();
        for (id,handler) in route {
            // Listeners removed by an earlier listener of the same event are skipped.
            let active = self.state.borrow().listeners.iter().any(|l| l.id == id);
            if active {
                handler(signal.clone());
            }
        }
    }

    /// Advance time by one frame: dispatch the queued events, then run the animation frame
    /// callbacks. Returns the number of callbacks run.
    pub fn run_frame(&self) -> usize {
        let events = mem::take(&mut self.state.borrow_mut().events);
        for event in events {
            self.dispatch_event(event);
        }
        let frames = mem::take(&mut self.state.borrow_mut().frames);
        let count  = frames.len();
        for (_,callback) in frames {
            callback();
        }
        count
    }

    /// Run frames until no events or callbacks are pending. Returns the number of frames run.
    pub fn settle(&self) -> usize {
        let mut frames = 0;
        while self.is_busy() && frames < MAX_SETTLE_FRAMES {
            self.run_frame();
            frames += 1;
        }
        frames
    }

    fn is_busy(&self) -> bool {
        let state = self.state.borrow();
        !state.events.is_empty() || !state.frames.is_empty()
    }
}


// === Inspection ===

impl MockDom {
    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Number of listeners registered on `element`, per event kind.
    pub fn listeners_of(&self, element:MockElement) -> HashMap<EventKind,usize> {
        let mut counts = HashMap::new();
        for listener in self.state.borrow().listeners.iter().filter(|l| l.element == element.0) {
            *counts.entry(listener.kind).or_insert(0) += 1;
        }
        counts
    }

    /// Number of animation frame callbacks waiting for the next frame.
    pub fn pending_frames(&self) -> usize {
        self.state.borrow().frames.len()
    }

    /// Inserted stylesheets, in insertion order.
    pub fn styles(&self) -> Vec<String> {
        self.state.borrow().styles.clone()
    }

    /// Children of `element`.
    pub fn children(&self, element:MockElement) -> Vec<MockElement> {
        self.state.borrow().nodes[element.0].children.iter().copied().map(MockElement).collect()
    }

    /// Class of `element`.
    pub fn class_name(&self, element:MockElement) -> String {
        self.state.borrow().nodes[element.0].class_name.clone()
    }

    /// The first descendant of `element` having the given class.
    pub fn find(&self, element:MockElement, class_name:&str) -> Option<MockElement> {
        self.children(element).into_iter().find_map(|child| {
            if self.class_name(child) == class_name { Some(child) } else {
                self.find(child,class_name)
            }
        })
    }

    /// `scrollLeft` and `scrollTop` of `element`.
    pub fn scroll_position(&self, element:MockElement) -> Dimensions {
        self.state.borrow().nodes[element.0].scroll
    }

    /// Inline size of `element`, if any was set.
    pub fn inline_size(&self, element:MockElement) -> Option<Dimensions> {
        self.state.borrow().nodes[element.0].inline_size
    }
}



// ===================
// === Dom Handles ===
// ===================

/// Listener registered in a [`MockDom`]. Detached when dropped.
#[derive(Debug)]
pub struct MockListener {
    id    : usize,
    state : Weak<RefCell<State>>,
}

impl Drop for MockListener {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            if let Ok(mut state) = state.try_borrow_mut() {
                state.listeners.retain(|l| l.id != self.id);
            }
        }
    }
}

/// Animation frame callback scheduled in a [`MockDom`]. Cancelled when dropped.
#[derive(Debug)]
pub struct MockFrame {
    id    : usize,
    state : Weak<RefCell<State>>,
}

impl Drop for MockFrame {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            if let Ok(mut state) = state.try_borrow_mut() {
                state.frames.retain(|(id,_)| *id != self.id);
            }
        }
    }
}

impl Dom for MockDom {
    type Element  = MockElement;
    type Listener = MockListener;
    type Frame    = MockFrame;

    fn is_available(&self) -> bool {
        self.state.borrow().available
    }

    fn supports_legacy_resize(&self) -> bool {
        self.state.borrow().legacy
    }

    fn create_div(&self, class_name:&str) -> Result<MockElement> {
        self.check_available()?;
        let mut state  = self.state.borrow_mut();
        let id         = state.nodes.len();
        let class_name = class_name.to_string();
        state.nodes.push(Node {class_name, visible:true, ..default()});
        Ok(MockElement(id))
    }

    fn append_child(&self, parent:&MockElement, child:&MockElement) -> Result<()> {
        self.check_available()?;
        self.mutate(|state| {
            if let Some(old_parent) = state.nodes[child.0].parent {
                state.nodes[old_parent].children.retain(|id| *id != child.0);
            }
            state.nodes[child.0].parent = Some(parent.0);
            state.nodes[parent.0].children.push(child.0);
        });
        Ok(())
    }

    fn remove_child(&self, parent:&MockElement, child:&MockElement) -> Result<()> {
        self.check_available()?;
        if self.state.borrow().nodes[child.0].parent != Some(parent.0) {
            return Err(Error::Dom("The node to be removed is not a child of this node.".into()))
        }
        self.mutate(|state| {
            state.nodes[parent.0].children.retain(|id| *id != child.0);
            state.nodes[child.0].parent = None;
        });
        Ok(())
    }

    fn insert_style(&self, css:&str) -> Result<()> {
        self.check_available()?;
        self.state.borrow_mut().styles.push(css.to_string());
        Ok(())
    }

    fn offset_size(&self, element:&MockElement) -> Dimensions {
        self.state.borrow().size(element.0)
    }

    fn scroll_size(&self, element:&MockElement) -> Dimensions {
        self.state.borrow().scroll_size(element.0)
    }

    fn set_scroll_position(&self, element:&MockElement, left:i32, top:i32) {
        self.state.borrow_mut().set_scroll(element.0,left,top)
    }

    fn set_size(&self, element:&MockElement, size:Dimensions) -> Result<()> {
        self.check_available()?;
        self.mutate(|state| state.nodes[element.0].inline_size = Some(size));
        Ok(())
    }

    fn listen(&self, element:&MockElement, kind:EventKind, handler:Handler) -> Result<MockListener> {
        self.check_available()?;
        if kind == EventKind::LegacyResize && !self.supports_legacy_resize() {
            return Err(Error::Dom("attachEvent is not supported.".into()))
        }
        let mut state = self.state.borrow_mut();
        let id        = state.next_listener_id;
        let handler   = Rc::from(handler);
        state.next_listener_id += 1;
        state.listeners.push(Listener {id,element:element.0,kind,handler});
        Ok(MockListener {id,state:Rc::downgrade(&self.state)})
    }

    fn request_animation_frame(&self, f:Box<dyn FnOnce()>) -> Result<MockFrame> {
        self.check_available()?;
        let mut state = self.state.borrow_mut();
        let id        = state.next_frame_id;
        state.next_frame_id += 1;
        state.frames.push((id,f));
        Ok(MockFrame {id,state:Rc::downgrade(&self.state)})
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

    fn sensor_tree(dom:&MockDom, host:MockElement) -> (MockElement,MockElement,MockElement) {
        let root           = dom.create_div(style::ROOT_CLASS).unwrap();
        let expand         = dom.create_div(style::EXPAND_CLASS).unwrap();
        let contract       = dom.create_div(style::CONTRACT_CLASS).unwrap();
        let contract_child = dom.create_div(style::CONTRACT_CHILD_CLASS).unwrap();
        dom.append_child(&contract,&contract_child).unwrap();
        dom.append_child(&root,&expand).unwrap();
        dom.append_child(&root,&contract).unwrap();
        dom.append_child(&host,&root).unwrap();
        (root,expand,contract)
    }

    #[test]
    fn stylesheet_layout() {
        let dom  = MockDom::new();
        let host = dom.create_host(Dimensions::new(100,50));
        let (root,expand,contract) = sensor_tree(&dom,host);
        assert_eq!(dom.offset_size(&root), Dimensions::new(100,50));
        assert_eq!(dom.offset_size(&expand), Dimensions::new(100,50));
        assert_eq!(dom.scroll_size(&contract), Dimensions::new(200,100));
        assert_eq!(dom.scroll_size(&expand), Dimensions::new(100,50));
        dom.set_visible(host,false);
        assert_eq!(dom.offset_size(&root), Dimensions::ZERO);
    }

    #[test]
    fn scroll_is_clamped_and_signalled() {
        let dom      = MockDom::new();
        let host     = dom.create_host(Dimensions::new(100,50));
        let (_,_,contract) = sensor_tree(&dom,host);
        let _ = dom.run_frame();
        dom.set_scroll_position(&contract,1000,1000);
        assert_eq!(dom.scroll_position(contract), Dimensions::new(100,50));
        let fired    = Rc::new(Cell::new(0));
        let counter  = fired.clone();
        let _handle  = dom.listen(&contract,EventKind::Scroll,Box::new(move |_:Signal| {
            counter.set(counter.get() + 1)
        })).unwrap();
        dom.run_frame();
        assert_eq!(fired.get(), 1);

        dom.resize(host,Dimensions::new(80,50));
        assert_eq!(dom.scroll_position(contract), Dimensions::new(80,50));
        dom.run_frame();
        assert_eq!(fired.get(), 2);

        dom.resize(host,Dimensions::new(120,60));
        dom.run_frame();
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn capturing_listener_on_ancestor() {
        let dom   = MockDom::new();
        let host  = dom.create_host(Dimensions::new(10,10));
        let (root,expand,_) = sensor_tree(&dom,host);
        let log   = Rc::new(RefCell::new(Vec::new()));
        let log1  = log.clone();
        let log2  = log.clone();
        let _on_root = dom.listen(&root,EventKind::Scroll,Box::new(move |_:Signal| {
            log1.borrow_mut().push("root")
        })).unwrap();
        let _on_host = dom.listen(&host,EventKind::Scroll,Box::new(move |_:Signal| {
            log2.borrow_mut().push("host")
        })).unwrap();
        dom.dispatch(expand,EventKind::Scroll);
        assert_eq!(*log.borrow(), vec!["host","root"]);
    }

    #[test]
    fn dropped_handles_detach() {
        let dom      = MockDom::new();
        let host     = dom.create_host(Dimensions::new(10,10));
        let listener = dom.listen(&host,EventKind::Scroll,Box::new(|_:Signal| {})).unwrap();
        let frame    = dom.request_animation_frame(Box::new(|| panic!("Cancelled frame fired."))).unwrap();
        assert_eq!(dom.listener_count(), 1);
        assert_eq!(dom.pending_frames(), 1);
        drop(listener);
        drop(frame);
        assert_eq!(dom.listener_count(), 0);
        assert_eq!(dom.run_frame(), 0);
    }

    #[test]
    fn animation_starts_when_rendered() {
        let dom     = MockDom::new();
        let host    = dom.create_host(Dimensions::new(10,10));
        dom.set_visible(host,false);
        let (root,_,_) = sensor_tree(&dom,host);
        let names   = Rc::new(RefCell::new(Vec::new()));
        let names2  = names.clone();
        let kind    = EventKind::AnimationStart(Vendor::Standard);
        let _handle = dom.listen(&root,kind,Box::new(move |signal:Signal| {
            names2.borrow_mut().push(signal)
        })).unwrap();
        dom.settle();
        assert!(names.borrow().is_empty());
        dom.set_visible(host,true);
        dom.settle();
        let animation_name = style::ANIMATION_NAME.to_string();
        assert_eq!(*names.borrow(), vec![Signal::AnimationStart {animation_name}]);
    }

    #[test]
    fn server_rejects_everything() {
        let dom = MockDom::server();
        assert!(!dom.is_available());
        assert_eq!(dom.create_div("x").err(), Some(Error::Unavailable));
        assert_eq!(dom.insert_style("").err(), Some(Error::Unavailable));
    }
}
