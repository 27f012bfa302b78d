//! Logger which discards all messages.

use crate::*;



/// Trivial logger that discards all the messages.
#[derive(Clone,Copy,Debug,Default)]
pub struct Logger();

impl From<enabled::Logger> for Logger {
    fn from(_:enabled::Logger) -> Self { Logger() }
}

impl From<&enabled::Logger> for Logger {
    fn from(_:&enabled::Logger) -> Self { Logger() }
}

impl Logger {
    /// Discarding loggers have no path.
    pub fn path(&self) -> &str {
        ""
    }
}

impl LoggerApi for Logger {
    fn new<T:AsRef<str>>(_:T) -> Self {
        Logger()
    }

    fn sub<T:AsRef<str>>(&self, _:T) -> Logger {
        Logger()
    }

    fn group<M:LogMsg,T,F:FnOnce() -> T>(&self, _:M, f:F) -> T {
        f()
    }

    fn trace      <M:LogMsg>(&self, _:M){}
    fn debug      <M:LogMsg>(&self, _:M){}
    fn info       <M:LogMsg>(&self, _:M){}
    fn warning    <M:LogMsg>(&self, _:M){}
    fn error      <M:LogMsg>(&self, _:M){}
    fn group_begin<M:LogMsg>(&self, _:M){}
    fn group_end             (&self)     {}
}
