//! Page rendering and the page-load handlers.
//!
//! Templates receive owned view structs built from the locked [`Page`], so
//! the lock is released as soon as the HTML string exists.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};
use tracing::instrument;

use lumina_core::ColorVariant;

use crate::chrome::{Dropdown, NavigationChrome};
use crate::error::{AppError, Result};
use crate::filters;
use crate::home::{HERO_SLIDES, HeroButton, HeroCarousel, ThemeSwatches};
use crate::page::{Notice, Page, PageKind};
use crate::product::ProductSelector;
use crate::state::AppState;
use crate::view::{BasketRow, BasketView, image_src};

// =============================================================================
// View Data
// =============================================================================

/// Header display data.
#[derive(Clone)]
pub struct NavView {
    pub speakers_open: bool,
    pub more_open: bool,
    /// Inline `style` value for nav links, basket button and logo.
    pub accent_style: String,
    pub basket_count: u64,
}

impl From<&NavigationChrome> for NavView {
    fn from(chrome: &NavigationChrome) -> Self {
        Self {
            speakers_open: chrome.is_dropdown_open(Dropdown::Speakers),
            more_open: chrome.is_dropdown_open(Dropdown::More),
            accent_style: accent_style(chrome.accent()),
            basket_count: 0,
        }
    }
}

fn accent_style(accent: Option<&str>) -> String {
    accent.map_or_else(String::new, |color| format!("color: {color}"))
}

/// Basket overlay display data.
#[derive(Clone)]
pub struct BasketOverlayView {
    pub open: bool,
    pub placeholder_visible: bool,
    pub list_visible: bool,
    pub rows: Vec<BasketRow>,
    pub total_quantity: u64,
    pub terms_accepted: bool,
}

impl BasketOverlayView {
    fn new(view: &BasketView, chrome: &NavigationChrome) -> Self {
        Self {
            open: chrome.overlay_open(),
            placeholder_visible: view.placeholder_visible(),
            list_visible: view.list_visible(),
            rows: view.rows().to_vec(),
            total_quantity: view.total_quantity(),
            terms_accepted: chrome.terms_accepted(),
        }
    }
}

/// A notice shown above the page content.
#[derive(Clone)]
pub struct NoticeView {
    pub message: &'static str,
    pub warning: bool,
}

impl From<Notice> for NoticeView {
    fn from(notice: Notice) -> Self {
        Self {
            message: notice.message(),
            warning: notice.is_warning(),
        }
    }
}

/// A colour option on the product page or a swatch on the home page.
#[derive(Clone)]
pub struct ColorOptionView {
    pub id: &'static str,
    pub label: &'static str,
    pub accent: &'static str,
    pub selected: bool,
}

fn color_options(selected: Option<ColorVariant>) -> Vec<ColorOptionView> {
    ColorVariant::ALL
        .into_iter()
        .map(|color| ColorOptionView {
            id: color.id(),
            label: color.label(),
            accent: color.accent(),
            selected: selected == Some(color),
        })
        .collect()
}

/// Product selector display data.
#[derive(Clone)]
pub struct ProductView {
    pub has_image: bool,
    pub image: String,
    pub image_src: String,
    pub image_alt: String,
    pub image_position: usize,
    pub image_count: usize,
    pub quantity: u32,
    pub colors: Vec<ColorOptionView>,
}

impl From<&ProductSelector> for ProductView {
    fn from(selector: &ProductSelector) -> Self {
        let image = selector.current_image();
        Self {
            has_image: image.is_some(),
            image: image.map(str::to_string).unwrap_or_default(),
            image_src: image.map(image_src).unwrap_or_default(),
            image_alt: selector.image_alt(),
            image_position: selector.image_index() + 1,
            image_count: selector.image_count(),
            quantity: selector.quantity().get(),
            colors: color_options(Some(selector.selected())),
        }
    }
}

/// A hero label button.
#[derive(Clone)]
pub struct HeroButtonView {
    pub value: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// A hero slide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroSlideView {
    pub number: usize,
    pub active: bool,
}

/// Hero carousel display data.
#[derive(Clone)]
pub struct HeroView {
    pub slides: Vec<HeroSlideView>,
    pub indicator_position: usize,
    pub buttons: Vec<HeroButtonView>,
}

impl From<&HeroCarousel> for HeroView {
    fn from(hero: &HeroCarousel) -> Self {
        Self {
            slides: (0..HERO_SLIDES)
                .map(|slide| HeroSlideView {
                    number: slide + 1,
                    active: slide == hero.current_slide(),
                })
                .collect(),
            indicator_position: hero.indicator_position(),
            buttons: HeroButton::ALL
                .into_iter()
                .map(|button| HeroButtonView {
                    value: button.as_str(),
                    label: button.label(),
                    active: hero.active_button() == Some(button),
                })
                .collect(),
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub nav: NavView,
    pub basket: BasketOverlayView,
    pub notices: Vec<NoticeView>,
    pub hero: HeroView,
    pub swatches: Vec<ColorOptionView>,
    pub newsletter_input: String,
}

/// Product page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/product.html")]
pub struct ProductTemplate {
    pub nav: NavView,
    pub basket: BasketOverlayView,
    pub notices: Vec<NoticeView>,
    pub product: ProductView,
}

/// Basket overlay fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/basket.html")]
pub struct BasketTemplate {
    pub basket: BasketOverlayView,
}

// =============================================================================
// Rendering
// =============================================================================

/// Render the whole current page with `notices` on top.
///
/// # Errors
///
/// Returns `AppError::Render` if the template fails.
pub fn render(page: &Page, notices: &[Notice]) -> Result<Response> {
    let mut nav = NavView::from(page.chrome());
    nav.basket_count = page.basket().total_quantity();
    let basket = BasketOverlayView::new(page.view(), page.chrome());
    let notices = notices.iter().copied().map(NoticeView::from).collect();

    let html = match page.kind() {
        PageKind::Home => HomeTemplate {
            nav,
            basket,
            notices,
            hero: page
                .hero()
                .map_or_else(|| HeroView::from(&HeroCarousel::new()), HeroView::from),
            swatches: color_options(page.swatches().and_then(ThemeSwatches::active)),
            newsletter_input: page.newsletter_input().to_string(),
        }
        .render()?,
        PageKind::Product => {
            let selector = page
                .selector()
                .ok_or_else(|| AppError::NotFound("product selector".to_string()))?;
            ProductTemplate {
                nav,
                basket,
                notices,
                product: ProductView::from(selector),
            }
            .render()?
        }
    };

    Ok(Html(html).into_response())
}

// =============================================================================
// Handlers
// =============================================================================

/// Home page (new page load).
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<Response> {
    let page = state.navigate(PageKind::Home).await;
    render(&page, &[])
}

/// Product page (new page load).
#[instrument(skip(state))]
pub async fn product(State(state): State<AppState>) -> Result<Response> {
    let page = state.navigate(PageKind::Product).await;
    render(&page, &[])
}

/// Basket overlay fragment for the current page.
#[instrument(skip(state))]
pub async fn basket(State(state): State<AppState>) -> Result<Response> {
    let page = state.page().await;
    let html = BasketTemplate {
        basket: BasketOverlayView::new(page.view(), page.chrome()),
    }
    .render()?;
    Ok(Html(html).into_response())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::page::Command;
    use crate::product::ImageCatalog;
    use crate::store::{BASKET_KEY, BasketStore, MemoryStore};

    fn page(kind: PageKind) -> Page {
        let store = BasketStore::new(Arc::new(MemoryStore::new()), BASKET_KEY);
        Page::load(kind, store, &ImageCatalog::default())
    }

    #[test]
    fn test_accent_style() {
        assert_eq!(accent_style(None), "");
        assert_eq!(accent_style(Some("#b18778")), "color: #b18778");
    }

    #[test]
    fn test_product_view_tracks_selector() {
        let mut page = page(PageKind::Product);
        page.dispatch(Command::SelectColor("moonlight-white".to_string()));
        page.dispatch(Command::PreviousImage);

        let view = ProductView::from(page.selector().unwrap());
        assert_eq!(view.image, "images/MoonlightWhite3.png");
        assert_eq!(view.image_src, "/images/MoonlightWhite3.png");
        assert_eq!(view.image_position, 3);
        assert!(view.colors.iter().any(|c| c.selected && c.id == "moonlight-white"));
    }

    #[test]
    fn test_hero_view_marks_one_slide() {
        let mut page = page(PageKind::Home);
        page.dispatch(Command::PressHero(HeroButton::Three));
        let view = HeroView::from(page.hero().unwrap());
        let active: Vec<bool> = view.slides.iter().map(|slide| slide.active).collect();
        assert_eq!(active, vec![false, false, false, true]);
        assert_eq!(view.indicator_position, 3);
        assert!(view.buttons[3].active);
    }

    #[test]
    fn test_basket_fragment_renders_rows() {
        let mut page = page(PageKind::Product);
        page.dispatch(Command::AddToBasket);
        let html = BasketTemplate {
            basket: BasketOverlayView::new(page.view(), page.chrome()),
        }
        .render()
        .unwrap();
        assert!(html.contains("SAGE GREEN"));
        assert!(html.contains("/basket/rows/0/increment"));
    }

    #[test]
    fn test_render_product_page() {
        let page = page(PageKind::Product);
        let response = render(&page, &[Notice::TermsRequired]).unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }
}
