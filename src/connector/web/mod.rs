//! Single-page web front end.
//!
//! One form, three display states: success banner with the answer text,
//! error banner for off-topic questions, warning banner for empty input.
//! A small JSON API mirrors the same states for programmatic callers.

use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Form, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{AskOutcome, Question};

use super::api::Container;

pub mod page;

#[derive(Deserialize)]
pub struct AskForm {
    #[serde(default)]
    question: String,
}

#[derive(Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Serialize)]
pub struct AskResponse {
    /// One of `success`, `error`, `warning`.
    pub status: &'static str,
    pub message: String,
}

impl From<AskOutcome> for AskResponse {
    fn from(outcome: AskOutcome) -> Self {
        match outcome {
            AskOutcome::Answered(text) => Self {
                status: "success",
                message: text,
            },
            AskOutcome::OffTopic => Self {
                status: "error",
                message: "Your question isn't travel-related. Try asking about trips, \
                          hotels, or destinations!"
                    .to_string(),
            },
            AskOutcome::Empty => Self {
                status: "warning",
                message: "You gotta ask me something! What's your next trip?".to_string(),
            },
        }
    }
}

async fn index() -> Html<String> {
    Html(page::render(None, ""))
}

async fn submit(
    State(container): State<Arc<Container>>,
    Form(form): Form<AskForm>,
) -> Html<String> {
    let question = Question::new(form.question.clone());
    let outcome = container.ask_use_case().execute(&question).await;
    Html(page::render(Some(&outcome), &form.question))
}

async fn ping() -> &'static str {
    "pong"
}

async fn ask_api(
    State(container): State<Arc<Container>>,
    Json(request): Json<AskRequest>,
) -> Json<AskResponse> {
    let question = Question::new(request.question);
    let outcome = container.ask_use_case().execute(&question).await;
    Json(outcome.into())
}

pub fn app(container: Arc<Container>) -> axum::Router {
    axum::Router::new()
        .route("/", get(index).post(submit))
        .route("/api/v1/ping", get(ping))
        .route("/api/v1/ask", post(ask_api))
        .with_state(container)
}

/// Bind and serve the web front end until the process is stopped.
pub async fn serve(container: Arc<Container>, port: u16, public: bool) -> Result<()> {
    let host = if public { "0.0.0.0" } else { "127.0.0.1" };
    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;
    info!("TravelVibe listening on http://{host}:{port}");

    axum::serve(listener, app(container)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_maps_to_json_states() {
        let success: AskResponse = AskOutcome::Answered("text".into()).into();
        assert_eq!(success.status, "success");
        assert_eq!(success.message, "text");

        let error: AskResponse = AskOutcome::OffTopic.into();
        assert_eq!(error.status, "error");

        let warning: AskResponse = AskOutcome::Empty.into();
        assert_eq!(warning.status, "warning");
    }
}
