use anyhow::Result;

use crate::domain::{AskOutcome, Question};

use super::super::Container;

pub struct AskController<'a> {
    container: &'a Container,
}

impl<'a> AskController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn ask(&self, question: String) -> Result<String> {
        let use_case = self.container.ask_use_case();
        let outcome = use_case.execute(&Question::new(question)).await;

        Ok(Self::format_outcome(&outcome))
    }

    fn format_outcome(outcome: &AskOutcome) -> String {
        match outcome {
            AskOutcome::Answered(text) => {
                format!("Here's a personalized travel recommendation for you!\n\n{text}")
            }
            AskOutcome::OffTopic => {
                "Hmm, it looks like your question isn't travel-related. \
                 Try asking about trips, hotels, or destinations!"
                    .to_string()
            }
            AskOutcome::Empty => {
                "You gotta ask me something! What's your next trip?".to_string()
            }
        }
    }
}
