//! Logger which emits all messages.

use crate::*;

use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;
#[cfg(target_arch = "wasm32")]
use web_sys::console;



// =============
// === Level ===
// =============

#[derive(Clone,Copy,Debug,PartialEq,Eq)]
enum Level {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
    GroupBegin,
}

/// Browser console sink.
#[cfg(target_arch = "wasm32")]
fn emit(level:Level, text:String) {
    let text = JsValue::from(text);
    match level {
        Level::Trace      => console::trace_1(&text),
        Level::Debug      => console::debug_1(&text),
        Level::Info       => console::info_1(&text),
        Level::Warning    => console::warn_1(&text),
        Level::Error      => console::error_1(&text),
        Level::GroupBegin => console::group_1(&text),
    }
}

/// Standard output sink, used by native builds and tests.
#[cfg(not(target_arch = "wasm32"))]
fn emit(level:Level, text:String) {
    match level {
        Level::Trace      => println!("[TRACE] {}",text),
        Level::Debug      => println!("{}",text),
        Level::Info       => println!("{}",text),
        Level::Warning    => println!("[WARNING] {}",text),
        Level::Error      => println!("[ERROR] {}",text),
        Level::GroupBegin => println!(">>> {}",text),
    }
}

#[cfg(target_arch = "wasm32")]
fn emit_group_end() {
    console::group_end();
}

#[cfg(not(target_arch = "wasm32"))]
fn emit_group_end() {
    println!("<<<")
}



// ==============
// === Logger ===
// ==============

/// Default Logger implementation.
#[derive(Clone,Debug,Default)]
pub struct Logger {
    path : Rc<String>,
}

impl Logger {
    /// Dot-separated path of this logger.
    pub fn path(&self) -> &str {
        &self.path
    }

    fn log<M:LogMsg>(&self, level:Level, msg:M) {
        emit(level,msg.with_log_msg(|s| format!("[{}] {}",self.path,s)))
    }
}

impl LoggerApi for Logger {
    fn new<T:AsRef<str>>(path:T) -> Self {
        let path = Rc::new(path.as_ref().to_owned());
        Self {path}
    }

    fn sub<T:AsRef<str>>(&self, path:T) -> Self {
        if self.path.is_empty() { Self::new(path) } else {
            Self::new(format!("{}.{}",self.path,path.as_ref()))
        }
    }

    fn group<M:LogMsg,T,F:FnOnce() -> T>(&self, msg:M, f:F) -> T {
        self.group_begin(msg);
        let out = f();
        self.group_end();
        out
    }

    fn trace       <M:LogMsg>(&self, msg:M) { self.log(Level::Trace,msg) }
    fn debug       <M:LogMsg>(&self, msg:M) { self.log(Level::Debug,msg) }
    fn info        <M:LogMsg>(&self, msg:M) { self.log(Level::Info,msg) }
    fn warning     <M:LogMsg>(&self, msg:M) { self.log(Level::Warning,msg) }
    fn error       <M:LogMsg>(&self, msg:M) { self.log(Level::Error,msg) }
    fn group_begin <M:LogMsg>(&self, msg:M) { self.log(Level::GroupBegin,msg) }
    fn group_end   (&self) { emit_group_end() }
}
