#![cfg(target_arch = "wasm32")]

use resize_sensor::*;
use resize_sensor::dom::Dom;
use resize_sensor::dom::web::WebDom;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);



// =================
// === Utilities ===
// =================

fn create_host(width:i32, height:i32) -> HtmlElement {
    let document = resize_sensor_web::document().unwrap();
    let host     = document.create_element("div").unwrap().dyn_into::<HtmlElement>().unwrap();
    host.style().set_property("position","relative").unwrap();
    set_host_size(&host,width,height);
    document.body().unwrap().append_child(&host).unwrap();
    host
}

fn set_host_size(host:&HtmlElement, width:i32, height:i32) {
    host.style().set_property("width" ,&format!("{}px",width)).unwrap();
    host.style().set_property("height",&format!("{}px",height)).unwrap();
}

/// Resolves with the size passed to the next `on_resize` call.
async fn next_resize(sensor:&ResizeSensor<WebDom>) -> (i32,i32) {
    let promise = js_sys::Promise::new(&mut |resolve,_| {
        sensor.set_on_resize(move |width,height| {
            let size = js_sys::Array::of2(&width.into(),&height.into());
            let _    = resolve.call1(&JsValue::NULL,&size);
        });
    });
    let size = js_sys::Array::from(&JsFuture::from(promise).await.unwrap());
    let dim  = |index| size.get(index).as_f64().unwrap() as i32;
    (dim(0),dim(1))
}



// =============
// === Tests ===
// =============

#[wasm_bindgen_test]
async fn reports_initial_size_and_changes() {
    let host   = create_host(100,50);
    let sensor = ResizeSensor::new(WebDom::new(),Props::new());
    sensor.mount(&host).unwrap();
    assert_eq!(next_resize(&sensor).await, (100,50));

    set_host_size(&host,150,50);
    assert_eq!(next_resize(&sensor).await, (150,50));

    set_host_size(&host,40,20);
    assert_eq!(next_resize(&sensor).await, (40,20));
    assert_eq!(sensor.dimensions(), Dimensions::new(40,20));
    sensor.unmount();
}

#[wasm_bindgen_test]
fn unmount_restores_the_host() {
    let host   = create_host(100,50);
    let sensor = ResizeSensor::new(WebDom::new(),Props::new());
    sensor.mount(&host).unwrap();
    assert_eq!(host.child_element_count(), 1);
    assert!(sensor.dom().is_available());
    assert!(style::is_injected());
    sensor.unmount();
    assert_eq!(host.child_element_count(), 0);
    assert!(!sensor.is_mounted());
}

#[wasm_bindgen_test]
fn overlay_has_the_rendered_structure() {
    let host   = create_host(10,10);
    let sensor = ResizeSensor::new(WebDom::new(),Props::new());
    sensor.mount(&host).unwrap();
    let root   = host.first_element_child().unwrap();
    assert_eq!(root.class_name(), style::ROOT_CLASS);
    assert_eq!(root.child_element_count(), 2);
    assert!(sensor.render_to_string().contains(style::EXPAND_CHILD_CLASS));
    sensor.unmount();
}
