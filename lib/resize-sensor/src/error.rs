//! Errors reported by the sensor.

use failure::Fail;
use resize_sensor_web as web;
use wasm_bindgen::JsValue;



// =============
// === Error ===
// =============

/// Failure of a DOM operation performed by the sensor.
#[derive(Clone,Debug,Fail,PartialEq)]
pub enum Error {
    /// The browser DOM is not available, e.g. during server-side rendering.
    #[fail(display = "Browser DOM is not available.")]
    Unavailable,
    /// A DOM call failed.
    #[fail(display = "DOM operation failed: {}", _0)]
    Dom(String),
}

impl From<web::Error> for Error {
    fn from(error:web::Error) -> Self {
        match error {
            web::Error::NotInBrowser => Error::Unavailable,
            other                    => Error::Dom(other.to_string()),
        }
    }
}

impl From<JsValue> for Error {
    fn from(value:JsValue) -> Self {
        web::Error::from(value).into()
    }
}

/// Result of sensor operations.
pub type Result<T> = std::result::Result<T,Error>;
