#![cfg(target_arch = "wasm32")]

use resize_sensor_web::*;
use resize_sensor_web::event::Scroll;
use resize_sensor_web::event::listener::Slot;
use resize_sensor_web::prelude::*;

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::EventTarget;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn browser_is_detected() {
    assert!(is_browser());
    assert!(!legacy::is_supported());
}

#[wasm_bindgen_test]
fn css_lands_in_head() {
    let document = document().unwrap();
    let style    = style::insert_css(&document,".probe{color:red;}").unwrap();
    let head     = document.head().unwrap();
    let node     : &web_sys::Node = style.as_ref();
    assert!(head.contains(Some(node)));
    assert_eq!(style.text_content().unwrap(), ".probe{color:red;}");
}

#[wasm_bindgen_test]
fn slot_detaches_on_drop() {
    let document = document().unwrap();
    let element  = document.create_element("div").unwrap();
    let target   : &EventTarget = element.as_ref();
    let fired    = Rc::new(Cell::new(0));
    let logger   = Logger::new("test");
    let mut slot = Slot::<Scroll>::new(target,&logger);
    let counter  = fired.clone();
    slot.set_callback(move |_| counter.set(counter.get() + 1)).unwrap();

    let event = web_sys::Event::new("scroll").unwrap();
    target.dispatch_event(&event).unwrap();
    assert_eq!(fired.get(), 1);

    drop(slot);
    target.dispatch_event(&event).unwrap();
    assert_eq!(fired.get(), 1);
}

#[wasm_bindgen_test]
fn css_lands_in_body_without_head() {
    let document = document().unwrap();
    let root     = document.document_element().unwrap();
    let head     = document.head().unwrap();
    let body     = document.body().unwrap();
    root.remove_child(&head).unwrap();
    assert!(document.head().is_none());

    let style    = style::insert_css(&document,".headless{color:red;}").unwrap();
    let node     : &web_sys::Node = style.as_ref();
    assert!(body.contains(Some(node)));

    let body_node : &web_sys::Node = body.as_ref();
    root.insert_before(&head,Some(body_node)).unwrap();
    assert!(document.head().is_some());
}

/// Resolves on the next animation frame.
async fn next_frame() {
    let mut frame = None;
    let promise   = js_sys::Promise::new(&mut |resolve,_| {
        frame = animation_frame::AnimationFrame::request(move || {
            let _ = resolve.call0(&JsValue::NULL);
        }).ok();
    });
    JsFuture::from(promise).await.unwrap();
    drop(frame);
}

#[wasm_bindgen_test]
async fn dropped_frame_never_fires() {
    let fired = Rc::new(Cell::new(false));
    let flag  = fired.clone();
    let frame = animation_frame::AnimationFrame::request(move || flag.set(true)).unwrap();
    drop(frame);
    next_frame().await;
    next_frame().await;
    assert!(!fired.get());
}
