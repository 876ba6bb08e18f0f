//! Base sink adapters
//!
//! Sinks are thin adapters around an externally supplied write primitive;
//! each returns an ordinary [`Logger`](crate::Logger) value, so everything
//! in [`core`](crate::core) layers over them uniformly.

mod error;

#[cfg(feature = "console")]
mod console;

#[cfg(feature = "syslog")]
mod system_log;

pub use self::error::{Result, SinkError};

#[cfg(feature = "console")]
pub use self::console::{console, console_errors, console_with_colors};

#[cfg(feature = "syslog")]
pub use self::system_log::system_log;
