//! Extension traits for error handling

use super::types::{Error, Result};

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to a Result
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a lazy message
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::execution_with_source(message, Into::<Error>::into(e)))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| Error::execution_with_source(f(), Into::<Error>::into(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_prefixes_description() {
        let parsed: std::result::Result<u8, serde_json::Error> = serde_json::from_str("[]");
        let err = parsed.context("reading port").unwrap_err();
        assert!(err.to_string().starts_with("reading port failed: JSON error"));
    }

    #[test]
    fn test_context_keeps_cause_as_source() {
        use std::error::Error as _;

        let parsed: std::result::Result<u8, serde_json::Error> = serde_json::from_str("[]");
        let err = parsed.context("reading port").unwrap_err();
        let source = err.source().expect("cause should be kept");
        assert!(matches!(
            source.downcast_ref::<Error>(),
            Some(Error::Json { .. })
        ));
    }

    #[test]
    fn test_with_context_is_lazy_on_success() {
        let ok: std::result::Result<u8, Error> = Ok(7);
        let value = ok
            .with_context(|| unreachable!("context built for a success"))
            .unwrap();
        assert_eq!(value, 7);
    }
}
