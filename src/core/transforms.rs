//! Filtering, text, and tag transforms over the default message type, plus
//! the level-keyed convenience emitters.
//!
//! Every transform here is a thin application of [`Logger::pullback`] or
//! [`Logger::ignore_messages`]; none of them carries state beyond what the
//! closure captures.

use std::collections::BTreeSet;
use std::fmt;

use super::log_level::LogLevel;
use super::logger::Logger;
use super::message::{Message, Tag};

impl<T: Tag> Logger<Message<T>> {
    /// Drop messages with a level strictly below `threshold`. A message at
    /// exactly `threshold` is kept.
    pub fn min_level(self, threshold: LogLevel) -> Self {
        self.ignore_messages(move |message| message.level < threshold)
    }

    /// Drop messages with a level strictly above `threshold`. A message at
    /// exactly `threshold` is kept.
    pub fn max_level(self, threshold: LogLevel) -> Self {
        self.ignore_messages(move |message| message.level > threshold)
    }

    /// Drop messages at exactly `level`; all other levels pass through.
    pub fn disable_level(self, level: LogLevel) -> Self {
        self.ignore_messages(move |message| message.level == level)
    }

    /// Prepend `prefix` to the text value; level and tags are untouched.
    pub fn adding_prefix(self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.pullback(move |mut message: Message<T>| {
            message.value = format!("{}{}", prefix, message.value);
            message
        })
    }

    /// Append `suffix` to the text value; level and tags are untouched.
    pub fn adding_suffix(self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        self.pullback(move |mut message: Message<T>| {
            message.value = format!("{}{}", message.value, suffix);
            message
        })
    }

    /// Truncate the text value to at most `n` leading characters. No
    /// truncation marker is appended; text already within the bound is
    /// unchanged, and `n = 0` yields empty text.
    pub fn max_length(self, n: usize) -> Self {
        self.pullback(move |mut message: Message<T>| {
            message.value = truncate_chars(&message.value, n);
            message
        })
    }

    /// Keep at most the first `n` lines of the text value, rejoined with
    /// `\n`. Text with fewer lines is unchanged; `n = 0` yields empty text.
    pub fn max_lines(self, n: usize) -> Self {
        self.pullback(move |mut message: Message<T>| {
            message.value = truncate_lines(&message.value, n);
            message
        })
    }

    /// Replace each message's tag set with the union of `tags` and the
    /// existing set. Union is commutative and duplicate-safe, so applying
    /// the same tag twice is equivalent to applying it once.
    pub fn adding_tags(self, tags: impl IntoIterator<Item = T>) -> Self {
        let added: BTreeSet<T> = tags.into_iter().collect();
        self.pullback(move |mut message: Message<T>| {
            message.tags.extend(added.iter().cloned());
            message
        })
    }

    /// Build a [`Message`] from any displayable value and feed it through
    /// this logger.
    pub fn log(
        &self,
        level: LogLevel,
        value: impl fmt::Display,
        tags: impl IntoIterator<Item = T>,
    ) {
        self.accept(Message::new(value.to_string(), level, tags));
    }

    pub fn debug(&self, value: impl fmt::Display, tags: impl IntoIterator<Item = T>) {
        self.log(LogLevel::Debug, value, tags);
    }

    pub fn info(&self, value: impl fmt::Display, tags: impl IntoIterator<Item = T>) {
        self.log(LogLevel::Info, value, tags);
    }

    pub fn warning(&self, value: impl fmt::Display, tags: impl IntoIterator<Item = T>) {
        self.log(LogLevel::Warning, value, tags);
    }

    pub fn error(&self, value: impl fmt::Display, tags: impl IntoIterator<Item = T>) {
        self.log(LogLevel::Error, value, tags);
    }

    pub fn fatal(&self, value: impl fmt::Display, tags: impl IntoIterator<Item = T>) {
        self.log(LogLevel::Fatal, value, tags);
    }
}

/// The same text transforms over loggers of raw strings, for callers that
/// never adopt the default message shape.
impl Logger<String> {
    pub fn adding_prefix(self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.pullback(move |text: String| format!("{}{}", prefix, text))
    }

    pub fn adding_suffix(self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        self.pullback(move |text: String| format!("{}{}", text, suffix))
    }

    pub fn max_length(self, n: usize) -> Self {
        self.pullback(move |text: String| truncate_chars(&text, n))
    }

    pub fn max_lines(self, n: usize) -> Self {
        self.pullback(move |text: String| truncate_lines(&text, n))
    }
}

// Truncation counts characters, not bytes, so multi-byte text never splits
// mid-codepoint.
fn truncate_chars(text: &str, n: usize) -> String {
    text.chars().take(n).collect()
}

fn truncate_lines(text: &str, n: usize) -> String {
    text.lines().take(n).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("debug", 1), "d");
        assert_eq!(truncate_chars("debug", 5), "debug");
        assert_eq!(truncate_chars("debug", 99), "debug");
        assert_eq!(truncate_chars("debug", 0), "");
        assert_eq!(truncate_chars("héllo", 2), "hé");
    }

    #[test]
    fn test_truncate_lines() {
        assert_eq!(truncate_lines("a\nb", 1), "a");
        assert_eq!(truncate_lines("a\nb\nc", 2), "a\nb");
        assert_eq!(truncate_lines("a", 3), "a");
        assert_eq!(truncate_lines("a\nb", 0), "");
    }
}
