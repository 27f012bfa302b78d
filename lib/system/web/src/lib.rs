//! Thin helpers over `web-sys` used by the resize sensor: access to browser globals that degrades
//! gracefully outside of a browser, typed event listener slots, animation frame handles, CSS
//! insertion and the legacy `attachEvent` bridge.

#![warn(missing_docs)]
#![warn(unused_qualifications)]
#![warn(missing_debug_implementations)]

pub mod animation_frame;
pub mod event;
pub mod legacy;
pub mod style;

/// Commonly used imports.
pub mod prelude {
    pub use derivative::Derivative;
    pub use resize_sensor_logger::DefaultLogger as Logger;
    pub use resize_sensor_logger::LoggerApi;
    pub use resize_sensor_logger::debug;
    pub use resize_sensor_logger::warning;
    pub use std::fmt::Debug;
    pub use wasm_bindgen::JsCast;
    pub use wasm_bindgen::JsValue;
}

pub use web_sys::Document;
pub use web_sys::HtmlElement;
pub use web_sys::Window;

use failure::Fail;
use wasm_bindgen::JsValue;



// =============
// === Error ===
// =============

/// Failures of DOM operations.
#[derive(Clone,Debug,Fail,PartialEq)]
pub enum Error {
    /// The code is not running inside a browser, `window` or `document` are missing.
    #[fail(display = "Browser globals (window, document) are not available.")]
    NotInBrowser,
    /// The document has neither a `<head>`, a `<body>` nor a root element to put a stylesheet in.
    #[fail(display = "The document has no element to put a stylesheet in.")]
    MissingContainer,
    /// A JS value had a different type than expected.
    #[fail(display = "Expected a value of type {}.", _0)]
    TypeMismatch(&'static str),
    /// A JS call threw an exception.
    #[fail(display = "JavaScript exception: {}.", _0)]
    JsException(String),
}

impl From<JsValue> for Error {
    fn from(value:JsValue) -> Self {
        Error::JsException(js_to_string(&value))
    }
}

/// Result of DOM operations.
pub type Result<T> = std::result::Result<T,Error>;

/// Render a JS value (usually a thrown exception) as a human readable string.
pub fn js_to_string(value:&JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}",value))
}



// ===============
// === Globals ===
// ===============

/// Access the global `window` object.
#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<Window> {
    web_sys::window().ok_or(Error::NotInBrowser)
}

/// Access the global `window` object. There is none outside of `wasm32`.
#[cfg(not(target_arch = "wasm32"))]
pub fn window() -> Result<Window> {
    Err(Error::NotInBrowser)
}

/// Access the global `document` object.
pub fn document() -> Result<Document> {
    window()?.document().ok_or(Error::NotInBrowser)
}

/// Checks whether browser globals are reachable. Evaluated once per thread, never panics.
pub fn is_browser() -> bool {
    thread_local! {
        static IS_BROWSER : bool = document().is_ok();
    }
    IS_BROWSER.with(|t| *t)
}

/// Forward Rust panics to the browser console. Does nothing without the
/// `console_error_panic_hook` feature.
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}



// =============
// === Tests ===
// =============
