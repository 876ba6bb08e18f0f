//! Console sink
//!
//! A thin adapter: renders each message with the default human-readable
//! formatting and writes it to stdout. Output goes through `println!`, so
//! concurrent accepts from multiple threads interleave per line, never
//! mid-line.

use colored::Colorize;
use std::fmt;

use crate::core::{format_tags, Logger, LogLevel, Message, Tag};

/// A logger that prints every message to stdout, coloring the level label.
///
/// # Examples
///
/// ```
/// use composable_log::sinks;
///
/// let logger = sinks::console::<&str>();
/// logger.info("server started", ["boot"]);
/// ```
pub fn console<T: Tag + fmt::Display>() -> Logger<Message<T>> {
    console_with_colors(true)
}

/// Like [`console`], with level-label coloring switchable off (for pipes or
/// terminals where escape codes are unwelcome).
pub fn console_with_colors<T: Tag + fmt::Display>(use_colors: bool) -> Logger<Message<T>> {
    Logger::from_fn(move |message: Message<T>| {
        println!("> {}", render(&message, use_colors));
    })
}

/// A console logger restricted to error and fatal messages.
pub fn console_errors<T: Tag + fmt::Display>() -> Logger<Message<T>> {
    console().min_level(LogLevel::Error)
}

fn render<T: Tag + fmt::Display>(message: &Message<T>, use_colors: bool) -> String {
    let level = if use_colors {
        message
            .level
            .formatted()
            .color(message.level.color_code())
            .to_string()
    } else {
        message.level.formatted()
    };

    if message.tags.is_empty() {
        format!("{}: {}", level, message.value)
    } else {
        format!("{}: {} {}", level, message.value, format_tags(&message.tags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain() {
        let message = Message::new("disk full", LogLevel::Fatal, ["storage"]);
        assert_eq!(render(&message, false), "💀 fatal: disk full #storage");
    }

    #[test]
    fn test_console_errors_drops_below_error() {
        // Must not print anything; a panic or output here would fail the
        // filtering contract, not just the formatting.
        let logger = console_errors::<&str>();
        logger.debug("quiet", []);
        logger.warning("quiet", []);
    }
}
