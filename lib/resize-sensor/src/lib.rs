//! Element resize detection without `ResizeObserver`.
//!
//! The sensor puts an invisible overlay into the observed element. The overlay contains two
//! scrollable triggers, kept scrolled to their bottom-right corner. Growing the element makes the
//! scrollbar of the *expand* trigger disappear, shrinking it clamps the scroll position of the
//! *contract* trigger, and either way the browser emits a `scroll` event. The sensor catches it,
//! re-arms the triggers, and on the next animation frame compares the overlay size with the last
//! reported one.
//!
//! The component is generic over [`dom::Dom`], implemented for the real browser
//! ([`dom::web::WebDom`]) and for a simulated DOM used in tests (`dom::mock::MockDom`, enabled by
//! the `mock` feature).

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

pub mod component;
pub mod config;
pub mod dimensions;
pub mod dom;
pub mod error;
pub mod markup;
pub mod sensor;
pub mod style;

pub use component::Component;
pub use config::Callback;
pub use config::Config;
pub use config::Props;
pub use dimensions::Dimensions;
pub use error::Error;
pub use error::Result;
pub use sensor::ResizeSensor;

/// Commonly used imports.
pub mod prelude {
    pub use derivative::Derivative;
    pub use resize_sensor_logger::DefaultLogger as Logger;
    pub use resize_sensor_logger::LoggerApi;
    pub use resize_sensor_logger::debug;
    pub use resize_sensor_logger::info;
    pub use resize_sensor_logger::trace;
    pub use resize_sensor_logger::warning;
    pub use std::cell::Cell;
    pub use std::cell::RefCell;
    pub use std::fmt::Debug;
    pub use std::rc::Rc;
    pub use std::rc::Weak;
}
