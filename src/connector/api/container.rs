use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::application::{AskQuestionUseCase, CompletionClient};
use crate::{GroqClient, MockCompletion};

pub struct ContainerConfig {
    /// Answer locally with the mock client instead of calling the API.
    /// No credential is required in this mode.
    pub mock: bool,
}

/// Wires the completion client and hands out use cases.
///
/// The client is constructed here, once, and passed explicitly — there is no
/// module-level global, so tests can build a container-equivalent wiring
/// around any [`CompletionClient`] double.
pub struct Container {
    completion_client: Arc<dyn CompletionClient>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let completion_client: Arc<dyn CompletionClient> = if config.mock {
            debug!("Using mock completion client");
            Arc::new(MockCompletion::new())
        } else {
            debug!("Initializing Groq completion client from environment");
            // Missing GROQ_API_KEY is fatal here, before anything serves.
            Arc::new(GroqClient::from_env()?)
        };

        Ok(Self {
            completion_client,
            config,
        })
    }

    pub fn ask_use_case(&self) -> AskQuestionUseCase {
        AskQuestionUseCase::new(self.completion_client.clone())
    }

    pub fn is_mock(&self) -> bool {
        self.config.mock
    }
}
