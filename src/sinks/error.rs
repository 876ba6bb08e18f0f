//! Error types for sink construction
//!
//! The combinator core is total and defines no error type; only building a
//! sink that talks to an external facility can fail.

pub type Result<T> = std::result::Result<T, SinkError>;

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// IO error while setting up a sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Connecting to the system log daemon failed
    #[error("system log connection failed: {0}")]
    SystemLog(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SinkError::SystemLog("no /dev/log socket".to_string());
        assert_eq!(
            err.to_string(),
            "system log connection failed: no /dev/log socket"
        );
    }
}
