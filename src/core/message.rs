//! The default message shape: text, level, and a set of tags.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::log_level::LogLevel;

/// Bound alias for types usable as message tags.
///
/// Tags live in a `BTreeSet`, so they must be totally ordered; requiring
/// `Ord` also makes tag formatting deterministic (tags are always rendered
/// in sorted order). Blanket-implemented for every qualifying type.
pub trait Tag: Ord + Clone + Send + Sync + 'static {}

impl<T: Ord + Clone + Send + Sync + 'static> Tag for T {}

/// The batteries-included message type: a text value, a severity level, and
/// a mathematical set of tags (duplicates collapse, union is commutative).
///
/// Equality is structural across all three fields; the tag set compares as a
/// set regardless of insertion order. Transforms never mutate a message in
/// place, they construct a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de> + Ord"
))]
pub struct Message<T> {
    pub value: String,
    pub level: LogLevel,
    pub tags: BTreeSet<T>,
}

impl<T: Ord> Message<T> {
    pub fn new(
        value: impl Into<String>,
        level: LogLevel,
        tags: impl IntoIterator<Item = T>,
    ) -> Self {
        Self {
            value: value.into(),
            level,
            tags: tags.into_iter().collect(),
        }
    }

    /// Human-readable rendering: marked level label, text value, then the
    /// formatted tag set (omitted when empty).
    ///
    /// ```
    /// use composable_log::{LogLevel, Message};
    ///
    /// let message = Message::new("ready", LogLevel::Info, ["boot"]);
    /// assert_eq!(message.formatted(), "ℹ️ info: ready #boot");
    /// ```
    pub fn formatted(&self) -> String
    where
        T: fmt::Display,
    {
        if self.tags.is_empty() {
            format!("{}: {}", self.level.formatted(), self.value)
        } else {
            format!(
                "{}: {} {}",
                self.level.formatted(),
                self.value,
                format_tags(&self.tags)
            )
        }
    }
}

/// Deterministic display string for a tag set: each tag with a leading `#`,
/// joined by single spaces, in sorted order.
pub fn format_tags<T: fmt::Display>(tags: &BTreeSet<T>) -> String {
    tags.iter()
        .map(|tag| format!("#{}", tag))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_tags_collapse() {
        let message = Message::new("x", LogLevel::Debug, ["a", "b", "a"]);
        assert_eq!(message.tags.len(), 2);
    }

    #[test]
    fn test_equality_ignores_tag_insertion_order() {
        let left = Message::new("x", LogLevel::Debug, ["a", "b"]);
        let right = Message::new("x", LogLevel::Debug, ["b", "a"]);
        assert_eq!(left, right);
    }

    #[test]
    fn test_format_tags_sorted() {
        let tags: BTreeSet<&str> = ["net", "auth", "db"].into_iter().collect();
        assert_eq!(format_tags(&tags), "#auth #db #net");
    }

    #[test]
    fn test_format_tags_empty() {
        let tags: BTreeSet<&str> = BTreeSet::new();
        assert_eq!(format_tags(&tags), "");
    }

    #[test]
    fn test_formatted_without_tags() {
        let message: Message<&str> = Message::new("boom", LogLevel::Error, []);
        assert_eq!(message.formatted(), "🚫 error: boom");
    }

    #[test]
    fn test_serde_roundtrip() {
        let message = Message::new("x", LogLevel::Warning, ["a", "b"]);
        let json = serde_json::to_string(&message).unwrap();
        let back: Message<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.value, "x");
        assert_eq!(back.level, LogLevel::Warning);
        assert_eq!(back.tags.len(), 2);
    }
}
