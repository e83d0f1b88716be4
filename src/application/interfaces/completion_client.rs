use async_trait::async_trait;

use crate::domain::DomainError;

/// An interface for sending a prompt to a chat-completion model and receiving
/// the response text.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Consumers (e.g. [`crate::application::AskQuestionUseCase`]) remain
/// decoupled from any particular provider or HTTP client library, so the
/// client can be swapped for a test double.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `prompt` as a single user-role message and return the model's
    /// response text.
    async fn complete(&self, prompt: &str) -> Result<String, DomainError>;
}
