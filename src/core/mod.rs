//! Core logger value, level, message model, and combinators

pub mod log_level;
pub mod logger;
pub mod message;
mod transforms;

pub use log_level::LogLevel;
pub use logger::{reduce_all, Logger};
pub use message::{format_tags, Message, Tag};
