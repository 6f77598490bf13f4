//! Home page route handlers: hero carousel and colour swatches.

use axum::{
    Form,
    extract::{Path, State},
    response::Response,
};
use tracing::instrument;

use super::apply;
use super::products::ColorForm;
use crate::error::{AppError, Result};
use crate::home::HeroButton;
use crate::page::Command;
use crate::state::AppState;

/// Hero label button (`start`, `01`, `02`, `03`).
#[instrument(skip(state))]
pub async fn hero(State(state): State<AppState>, Path(button): Path<String>) -> Result<Response> {
    let button: HeroButton = button.parse().map_err(AppError::BadRequest)?;
    apply(&state, Command::PressHero(button)).await
}

/// Colour-theme swatch.
#[instrument(skip(state))]
pub async fn swatch(State(state): State<AppState>, Form(form): Form<ColorForm>) -> Result<Response> {
    apply(&state, Command::SelectSwatch(form.color)).await
}
