//! The `Logger<M>` value and the generic combinators over it.
//!
//! A logger is nothing but a shared, immutable wrapper around a single
//! consuming operation `accept: M -> ()`. Every combinator returns a *new*
//! logger value capturing its inputs by closure; no combinator ever mutates
//! an existing logger, so previously constructed loggers are unaffected by
//! anything layered on top of them later.

use std::fmt;
use std::sync::Arc;

/// A value representing "a way to consume a log message" of type `M`.
///
/// Cloning is cheap (the wrapped operation is shared), and a logger holds no
/// mutable state of its own, so a single logger value may be invoked from
/// multiple threads concurrently. Whether the *aggregate* is thread-safe
/// depends entirely on the underlying sink operation; that must be documented
/// per sink, not assumed here.
///
/// # Examples
///
/// ```
/// use composable_log::Logger;
///
/// let upper = Logger::from_fn(|s: String| {
///     assert_eq!(s, "HELLO");
/// })
/// .pullback(|s: String| s.to_uppercase());
///
/// upper.accept("hello".to_string());
/// ```
pub struct Logger<M> {
    accept: Arc<dyn Fn(M) + Send + Sync>,
}

impl<M> Clone for Logger<M> {
    fn clone(&self) -> Self {
        Self {
            accept: Arc::clone(&self.accept),
        }
    }
}

impl<M> fmt::Debug for Logger<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}

impl<M: 'static> Default for Logger<M> {
    fn default() -> Self {
        Self::ignore()
    }
}

impl<M: 'static> Logger<M> {
    /// Wrap an arbitrary accept function as a logger.
    ///
    /// The function may be impure (print, append to a list, forward over a
    /// socket); the core is agnostic about what a sink does with a message.
    pub fn from_fn(f: impl Fn(M) + Send + Sync + 'static) -> Self {
        Self {
            accept: Arc::new(f),
        }
    }

    /// A logger that silently discards every message.
    ///
    /// Identity element for [`combine`](Self::combine) in both positions.
    pub fn ignore() -> Self {
        Self::from_fn(|_| {})
    }

    /// Feed a message to the wrapped accept operation.
    pub fn accept(&self, message: M) {
        (self.accept)(message);
    }

    /// Fan out to two loggers: `self` receives the message first, then
    /// `other`, unconditionally in that order.
    ///
    /// No isolation is imposed between the two calls: if `self`'s accept
    /// panics, `other` never sees the message. The alternative (catching and
    /// continuing) would silently swallow failures, which this crate avoids.
    pub fn combine(self, other: Self) -> Self
    where
        M: Clone,
    {
        Logger::from_fn(move |message: M| {
            self.accept(message.clone());
            other.accept(message);
        })
    }

    /// Contravariant map: adapt a `Logger<M>` into a `Logger<N>` by
    /// transforming each incoming `N` into an `M` before forwarding.
    ///
    /// Every message-specific transform in this crate is a pullback under
    /// the hood. Composition fuses as expected:
    /// `l.pullback(f).pullback(g)` behaves like `l.pullback(|x| f(g(x)))`.
    pub fn pullback<N: 'static>(self, f: impl Fn(N) -> M + Send + Sync + 'static) -> Logger<N> {
        Logger::from_fn(move |message: N| self.accept(f(message)))
    }

    /// Drop messages matching the predicate; everything else forwards
    /// unchanged. A dropped message causes no side effect at all, not even
    /// on the wrapped logger.
    pub fn ignore_messages(self, predicate: impl Fn(&M) -> bool + Send + Sync + 'static) -> Self {
        Logger::from_fn(move |message: M| {
            if !predicate(&message) {
                self.accept(message);
            }
        })
    }
}

/// Merge any number of loggers into one that forwards each message to every
/// input logger in sequence order. An empty input yields [`Logger::ignore`].
///
/// # Examples
///
/// ```
/// use composable_log::{reduce_all, Logger};
///
/// let merged: Logger<u32> = reduce_all([Logger::ignore(), Logger::ignore()]);
/// merged.accept(1);
/// ```
pub fn reduce_all<M, I>(loggers: I) -> Logger<M>
where
    M: Clone + 'static,
    I: IntoIterator<Item = Logger<M>>,
{
    loggers.into_iter().fold(Logger::ignore(), Logger::combine)
}

impl<M: Clone + 'static> FromIterator<Logger<M>> for Logger<M> {
    fn from_iter<I: IntoIterator<Item = Logger<M>>>(iter: I) -> Self {
        reduce_all(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn collector<M: Send + 'static>() -> (Logger<M>, Arc<Mutex<Vec<M>>>) {
        let store = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&store);
        (
            Logger::from_fn(move |m| sink.lock().unwrap().push(m)),
            store,
        )
    }

    #[test]
    fn test_from_fn_forwards() {
        let (logger, store) = collector::<u32>();
        logger.accept(1);
        logger.accept(2);
        assert_eq!(*store.lock().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_ignore_is_noop() {
        let logger: Logger<u32> = Logger::ignore();
        logger.accept(42);
    }

    #[test]
    fn test_combinator_leaves_original_untouched() {
        let (base, store) = collector::<String>();
        let _filtered = base.clone().ignore_messages(|_| true);

        // The original logger still sees everything.
        base.accept("kept".to_string());
        assert_eq!(*store.lock().unwrap(), vec!["kept".to_string()]);
    }

    #[test]
    fn test_pullback_transforms_before_forwarding() {
        let (base, store) = collector::<String>();
        let lengths = base.pullback(|n: usize| format!("len={}", n));
        lengths.accept(3);
        assert_eq!(*store.lock().unwrap(), vec!["len=3".to_string()]);
    }

    #[test]
    fn test_ignore_messages_drops_silently() {
        let (base, store) = collector::<u32>();
        let odd_only = base.ignore_messages(|n| n % 2 == 0);
        for n in 0..6 {
            odd_only.accept(n);
        }
        assert_eq!(*store.lock().unwrap(), vec![1, 3, 5]);
    }

    #[test]
    fn test_reduce_all_empty_is_ignore() {
        let merged: Logger<u32> = reduce_all(Vec::new());
        merged.accept(7);
    }
}
