//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (new page load)
//! GET  /product                - Product page (new page load)
//! GET  /health                 - Health check
//! GET  /images/*               - Product and hero images
//!
//! # Basket overlay
//! GET  /basket                           - Overlay fragment
//! POST /basket/open                      - Basket button
//! POST /basket/close                     - Close button
//! POST /basket/backdrop                  - Click on the dimmed backdrop
//! POST /basket/rows/{index}/increment    - Row `+`
//! POST /basket/rows/{index}/decrement    - Row `−`
//! POST /basket/rows/{index}/remove       - Remove row
//! POST /basket/terms                     - Terms checkbox
//! POST /basket/checkout                  - Checkout button
//!
//! # Header
//! POST /keys                             - Key press (form: key)
//! POST /nav/dropdowns/{dropdown}/toggle  - Dropdown trigger
//! POST /nav/dropdowns/{dropdown}/follow  - Link inside a dropdown
//! POST /nav/dropdowns/close              - Click outside
//! POST /nav/unavailable                  - Link to a missing page
//!
//! # Product page
//! POST /product/color                    - Colour option (form: color)
//! POST /product/image/next               - Carousel next
//! POST /product/image/prev               - Carousel previous
//! POST /product/quantity/increment       - Quantity `+`
//! POST /product/quantity/decrement       - Quantity `−`
//! POST /product/add                      - Add to basket
//!
//! # Home page
//! POST /home/hero/{button}               - Hero label button
//! POST /home/swatch                      - Colour swatch (form: color)
//! POST /newsletter                       - Newsletter sign-up (form: email)
//! ```
//!
//! Every POST applies one command to the current page and returns the
//! re-rendered page.

pub mod basket;
pub mod home;
pub mod nav;
pub mod newsletter;
pub mod pages;
pub mod products;

use axum::{
    Router,
    http::Uri,
    middleware,
    response::Response,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::error::{AppError, Result, add_breadcrumb};
use crate::page::Command;
use crate::state::AppState;

/// Apply `command` to the current page and render the result.
async fn apply(state: &AppState, command: Command) -> Result<Response> {
    add_breadcrumb("page", &format!("{command:?}"));
    let mut page = state.page().await;
    let outcome = page.dispatch(command);
    pages::render(&page, &outcome.notices)
}

/// Create the basket overlay routes router.
pub fn basket_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::basket))
        .route("/open", post(basket::open))
        .route("/close", post(basket::close))
        .route("/backdrop", post(basket::backdrop))
        .route("/rows/{index}/increment", post(basket::increment))
        .route("/rows/{index}/decrement", post(basket::decrement))
        .route("/rows/{index}/remove", post(basket::remove))
        .route("/terms", post(basket::terms))
        .route("/checkout", post(basket::checkout))
}

/// Create the header navigation routes router.
pub fn nav_routes() -> Router<AppState> {
    Router::new()
        .route("/dropdowns/close", post(nav::close))
        .route("/dropdowns/{dropdown}/toggle", post(nav::toggle))
        .route("/dropdowns/{dropdown}/follow", post(nav::follow))
        .route("/unavailable", post(nav::unavailable))
}

/// Create the product page routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::product))
        .route("/color", post(products::color))
        .route("/image/next", post(products::next_image))
        .route("/image/prev", post(products::prev_image))
        .route("/quantity/increment", post(products::increase_quantity))
        .route("/quantity/decrement", post(products::decrease_quantity))
        .route("/add", post(products::add))
}

/// Create the home page widget routes router.
pub fn home_routes() -> Router<AppState> {
    Router::new()
        .route("/hero/{button}", post(home::hero))
        .route("/swatch", post(home::swatch))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .nest("/product", product_routes())
        .nest("/basket", basket_routes())
        .nest("/nav", nav_routes())
        .nest("/home", home_routes())
        .route("/keys", post(nav::key))
        .route("/newsletter", post(newsletter::subscribe))
}

/// Build the full application router with middleware and state.
pub fn router(state: AppState) -> Router {
    let images = ServeDir::new(state.config().static_dir.join("images"));

    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .nest_service("/images", images)
        .fallback(not_found)
        .layer(middleware::from_fn(
            crate::middleware::request_id_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
