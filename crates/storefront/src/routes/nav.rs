//! Header route handlers: dropdown menus, unavailable links and key presses.

use axum::{
    Form,
    extract::{Path, State},
    response::Response,
};
use serde::Deserialize;
use tracing::instrument;

use super::apply;
use crate::chrome::Dropdown;
use crate::error::{AppError, Result};
use crate::page::Command;
use crate::state::AppState;

/// Key press form data.
#[derive(Debug, Deserialize)]
pub struct KeyForm {
    pub key: String,
}

fn parse_dropdown(raw: &str) -> Result<Dropdown> {
    raw.parse().map_err(AppError::BadRequest)
}

/// Dropdown trigger.
#[instrument(skip(state))]
pub async fn toggle(State(state): State<AppState>, Path(dropdown): Path<String>) -> Result<Response> {
    let dropdown = parse_dropdown(&dropdown)?;
    apply(&state, Command::ToggleDropdown(dropdown)).await
}

/// A link inside a dropdown.
#[instrument(skip(state))]
pub async fn follow(State(state): State<AppState>, Path(dropdown): Path<String>) -> Result<Response> {
    let dropdown = parse_dropdown(&dropdown)?;
    apply(&state, Command::FollowDropdownLink(dropdown)).await
}

/// Click outside any dropdown trigger.
#[instrument(skip(state))]
pub async fn close(State(state): State<AppState>) -> Result<Response> {
    apply(&state, Command::CloseDropdowns).await
}

/// A link to a page that does not exist yet.
#[instrument(skip(state))]
pub async fn unavailable(State(state): State<AppState>) -> Result<Response> {
    apply(&state, Command::UnavailableLink).await
}

/// Document key press.
#[instrument(skip(state))]
pub async fn key(State(state): State<AppState>, Form(form): Form<KeyForm>) -> Result<Response> {
    apply(&state, Command::KeyPress(form.key)).await
}
