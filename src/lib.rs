pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{AskQuestionUseCase, CompletionClient};

pub use cli::Commands;

pub use connector::{Container, ContainerConfig, GroqClient, MockCompletion, Router};

pub use domain::{is_travel_related, AskOutcome, DomainError, Question, TRAVEL_KEYWORDS};
