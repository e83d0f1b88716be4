use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tracing::debug;

use crate::application::CompletionClient;
use crate::domain::DomainError;

const DEFAULT_ANSWER: &str =
    "Mock travel tip: shoulder season has the best prices and the smallest crowds.";

/// A [`CompletionClient`] that answers locally without any network call.
///
/// Used by the `--mock` flag (no API key required) and by the test suite,
/// where the invocation counter lets tests assert that gated submissions
/// issue zero calls.
pub struct MockCompletion {
    answer: Option<String>,
    calls: AtomicUsize,
}

impl MockCompletion {
    pub fn new() -> Self {
        Self::with_answer(DEFAULT_ANSWER)
    }

    /// Always answer with the given canned text.
    pub fn with_answer(answer: impl Into<String>) -> Self {
        Self {
            answer: Some(answer.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fail every call, for exercising the error-normalization path.
    pub fn failing() -> Self {
        Self {
            answer: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `complete` invocations so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockCompletion {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionClient for MockCompletion {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        debug!("MockCompletion answering prompt of {} chars", prompt.len());

        match &self.answer {
            Some(text) => Ok(text.clone()),
            None => Err(DomainError::network("mock completion forced to fail")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counts_invocations() {
        let mock = MockCompletion::with_answer("hi");
        assert_eq!(mock.calls(), 0);
        mock.complete("a").await.unwrap();
        mock.complete("b").await.unwrap();
        assert_eq!(mock.calls(), 2);
    }

    #[tokio::test]
    async fn failing_mock_returns_error() {
        let mock = MockCompletion::failing();
        assert!(mock.complete("a").await.is_err());
        assert_eq!(mock.calls(), 1);
    }
}
