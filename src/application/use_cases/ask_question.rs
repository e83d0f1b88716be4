use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::application::CompletionClient;
use crate::domain::{is_travel_related, AskOutcome, Question};

/// Orchestrates one question submission: gate the question through the topic
/// classifier, build the assistant prompt, and issue a single completion
/// call. No retries; each submission is independent.
///
/// Failures from the completion client are normalized into displayable
/// `Error: …` text rather than propagated, so every caller ends up with an
/// [`AskOutcome`] it can render directly.
pub struct AskQuestionUseCase {
    completion_client: Arc<dyn CompletionClient>,
}

impl AskQuestionUseCase {
    pub fn new(completion_client: Arc<dyn CompletionClient>) -> Self {
        Self { completion_client }
    }

    /// Wrap the question in the fixed travel-assistant prompt template.
    fn build_prompt(question: &str) -> String {
        format!(
            "Act as a travel assistant and answer '{question}' based on \
             general travel and hospitality knowledge."
        )
    }

    pub async fn execute(&self, question: &Question) -> AskOutcome {
        if question.is_empty() {
            return AskOutcome::Empty;
        }

        if !is_travel_related(question.text()) {
            info!("Rejected off-topic question");
            return AskOutcome::OffTopic;
        }

        let prompt = Self::build_prompt(question.text());
        let start_time = Instant::now();

        let text = match self.completion_client.complete(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Completion call failed: {e}");
                format!("Error: {e}")
            }
        };

        info!(
            "Answered question in {:.2}s",
            start_time.elapsed().as_secs_f64()
        );

        AskOutcome::Answered(text)
    }
}
