//! Basket overlay route handlers.
//!
//! Row controls post the index they were rendered with.

use axum::{
    extract::{Path, State},
    response::Response,
};
use tracing::instrument;

use super::apply;
use crate::error::Result;
use crate::page::Command;
use crate::state::AppState;

/// Basket button in the header.
#[instrument(skip(state))]
pub async fn open(State(state): State<AppState>) -> Result<Response> {
    apply(&state, Command::OpenBasket).await
}

/// Close button inside the overlay.
#[instrument(skip(state))]
pub async fn close(State(state): State<AppState>) -> Result<Response> {
    apply(&state, Command::CloseBasket).await
}

/// Click on the dimmed area around the overlay.
#[instrument(skip(state))]
pub async fn backdrop(State(state): State<AppState>) -> Result<Response> {
    apply(&state, Command::BackdropClick).await
}

/// `+` on a basket row.
#[instrument(skip(state))]
pub async fn increment(State(state): State<AppState>, Path(index): Path<usize>) -> Result<Response> {
    apply(&state, Command::IncrementRow(index)).await
}

/// `−` on a basket row; removes the row at quantity 1.
#[instrument(skip(state))]
pub async fn decrement(State(state): State<AppState>, Path(index): Path<usize>) -> Result<Response> {
    apply(&state, Command::DecrementRow(index)).await
}

/// Remove a basket row outright.
#[instrument(skip(state))]
pub async fn remove(State(state): State<AppState>, Path(index): Path<usize>) -> Result<Response> {
    apply(&state, Command::RemoveRow(index)).await
}

/// Terms & Conditions checkbox.
#[instrument(skip(state))]
pub async fn terms(State(state): State<AppState>) -> Result<Response> {
    apply(&state, Command::ToggleTerms).await
}

/// Checkout button.
#[instrument(skip(state))]
pub async fn checkout(State(state): State<AppState>) -> Result<Response> {
    apply(&state, Command::Checkout).await
}
