//! Newsletter sign-up route handler.

use axum::{Form, extract::State, response::Response};
use serde::Deserialize;
use tracing::instrument;

use super::apply;
use crate::error::Result;
use crate::page::Command;
use crate::state::AppState;

/// Newsletter subscription form data.
#[derive(Debug, Deserialize)]
pub struct SubscribeForm {
    #[serde(default)]
    pub email: String,
}

/// Newsletter form submit.
#[instrument(skip(state, form))]
pub async fn subscribe(
    State(state): State<AppState>,
    Form(form): Form<SubscribeForm>,
) -> Result<Response> {
    apply(&state, Command::SubscribeNewsletter(form.email)).await
}
