//! # Composable Log
//!
//! A logging library where a logger is a first-class *value*: a wrapper
//! around a single `accept(message)` operation, combined, filtered,
//! transformed, and fanned out with pure combinators instead of class
//! hierarchies or global singletons.
//!
//! ## Features
//!
//! - **Loggers as values**: inject logging behavior like any other
//!   dependency; no global state
//! - **Combinators**: level filtering, prefix/suffix, truncation, tag
//!   augmentation, contravariant `pullback`, and merging
//! - **Thread safe**: loggers hold no mutable state; safety of the
//!   aggregate is the underlying sink's documented contract
//! - **Pluggable sinks**: console and system-log adapters included,
//!   anything else via [`Logger::from_fn`]
//!
//! ## Example
//!
//! ```
//! use composable_log::prelude::*;
//! use composable_log::sinks;
//!
//! let logger = sinks::console::<&str>()
//!     .min_level(LogLevel::Info)
//!     .adding_prefix("app: ")
//!     .adding_tags(["service"]);
//!
//! logger.info("listening on port 8080", ["net"]);
//! logger.debug("dropped by the level filter", []);
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{format_tags, reduce_all, Logger, LogLevel, Message, Tag};
    pub use crate::sinks::{Result, SinkError};
}

pub use crate::core::{format_tags, reduce_all, Logger, LogLevel, Message, Tag};
pub use crate::sinks::{Result, SinkError};
