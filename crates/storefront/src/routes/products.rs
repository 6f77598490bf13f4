//! Product page route handlers.

use axum::{Form, extract::State, response::Response};
use serde::Deserialize;
use tracing::instrument;

use super::apply;
use crate::error::Result;
use crate::page::Command;
use crate::state::AppState;

/// Colour option form data.
#[derive(Debug, Deserialize)]
pub struct ColorForm {
    pub color: String,
}

/// Colour option.
#[instrument(skip(state))]
pub async fn color(State(state): State<AppState>, Form(form): Form<ColorForm>) -> Result<Response> {
    apply(&state, Command::SelectColor(form.color)).await
}

/// Carousel next button.
#[instrument(skip(state))]
pub async fn next_image(State(state): State<AppState>) -> Result<Response> {
    apply(&state, Command::NextImage).await
}

/// Carousel previous button.
#[instrument(skip(state))]
pub async fn prev_image(State(state): State<AppState>) -> Result<Response> {
    apply(&state, Command::PreviousImage).await
}

/// Quantity `+`.
#[instrument(skip(state))]
pub async fn increase_quantity(State(state): State<AppState>) -> Result<Response> {
    apply(&state, Command::IncreaseQuantity).await
}

/// Quantity `−`; never below 1.
#[instrument(skip(state))]
pub async fn decrease_quantity(State(state): State<AppState>) -> Result<Response> {
    apply(&state, Command::DecreaseQuantity).await
}

/// Add to basket.
#[instrument(skip(state))]
pub async fn add(State(state): State<AppState>) -> Result<Response> {
    apply(&state, Command::AddToBasket).await
}
