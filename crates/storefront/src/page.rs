//! Page state and command dispatch.
//!
//! A [`Page`] is everything that lives for one page load: the basket and its
//! view, the header chrome and whichever page-specific widgets exist on the
//! loaded page. User actions arrive as [`Command`]s and are applied one at a
//! time by [`Page::dispatch`], each running to completion before the next.
//!
//! Commands aimed at a widget the current page does not have are ignored,
//! the same way a handler is never attached when its element is missing.

use tracing::instrument;

use lumina_core::ColorVariant;

use crate::basket::Basket;
use crate::chrome::{CheckoutGate, Dropdown, NavigationChrome};
use crate::home::{HeroButton, HeroCarousel, ThemeSwatches};
use crate::newsletter;
use crate::product::{ImageCatalog, ProductSelector};
use crate::store::BasketStore;
use crate::view::BasketView;

/// Which page is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Product,
}

/// A user action (or timer tick) to apply to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Header
    ToggleDropdown(Dropdown),
    FollowDropdownLink(Dropdown),
    /// Click outside any dropdown trigger.
    CloseDropdowns,
    UnavailableLink,
    OpenBasket,
    CloseBasket,
    /// Click on the dimmed area around the basket overlay.
    BackdropClick,
    KeyPress(String),

    // Basket overlay
    IncrementRow(usize),
    DecrementRow(usize),
    RemoveRow(usize),
    ToggleTerms,
    Checkout,

    // Product page
    SelectColor(String),
    NextImage,
    PreviousImage,
    IncreaseQuantity,
    DecreaseQuantity,
    AddToBasket,

    // Home page
    PressHero(HeroButton),
    RotateHero,
    SelectSwatch(String),
    SubscribeNewsletter(String),
}

impl Command {
    /// Clicks bubble to the document, which closes open dropdowns unless the
    /// click was on a dropdown trigger.
    const fn closes_dropdowns(&self) -> bool {
        !matches!(
            self,
            Self::ToggleDropdown(_) | Self::KeyPress(_) | Self::RotateHero
        )
    }
}

/// User-facing feedback raised by a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    CheckoutProceeding,
    TermsRequired,
    PageUnavailable,
    NewsletterEmailMissing,
    NewsletterEmailInvalid,
    NewsletterSubscribed,
}

impl Notice {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::CheckoutProceeding => "Proceeding to payment & delivery... 🎉",
            Self::TermsRequired => "Please accept the Terms & Conditions to continue.",
            Self::PageUnavailable => "Denne side er ikke tilgængelig endnu.",
            Self::NewsletterEmailMissing => "Indtast venligst din emailadresse",
            Self::NewsletterEmailInvalid => "Indtast venligst en gyldig emailadresse",
            Self::NewsletterSubscribed => "Tak for at tilmelde dig LUMINA nyhedsbrev!",
        }
    }

    /// Whether the notice tells the user something went wrong.
    #[must_use]
    pub const fn is_warning(self) -> bool {
        matches!(
            self,
            Self::TermsRequired | Self::NewsletterEmailMissing | Self::NewsletterEmailInvalid
        )
    }
}

/// What a dispatched command produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub notices: Vec<Notice>,
}

impl Outcome {
    fn notice(notice: Notice) -> Self {
        Self {
            notices: vec![notice],
        }
    }
}

/// State of one loaded page.
#[derive(Debug)]
pub struct Page {
    kind: PageKind,
    basket: Basket,
    view: BasketView,
    chrome: NavigationChrome,
    selector: Option<ProductSelector>,
    hero: Option<HeroCarousel>,
    swatches: Option<ThemeSwatches>,
    newsletter_input: String,
}

impl Page {
    /// Load `kind`: read the basket from `store` and render it.
    #[must_use]
    pub fn load(kind: PageKind, store: BasketStore, catalog: &ImageCatalog) -> Self {
        let basket = Basket::load(store);
        let mut view = BasketView::new();
        view.render(basket.items());

        let (selector, hero, swatches) = match kind {
            PageKind::Home => (None, Some(HeroCarousel::new()), Some(ThemeSwatches::new())),
            PageKind::Product => (Some(ProductSelector::new(catalog.clone())), None, None),
        };

        tracing::debug!(?kind, rows = basket.len(), "Page loaded");
        Self {
            kind,
            basket,
            view,
            chrome: NavigationChrome::new(),
            selector,
            hero,
            swatches,
            newsletter_input: String::new(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> PageKind {
        self.kind
    }

    #[must_use]
    pub const fn basket(&self) -> &Basket {
        &self.basket
    }

    #[must_use]
    pub const fn view(&self) -> &BasketView {
        &self.view
    }

    #[must_use]
    pub const fn chrome(&self) -> &NavigationChrome {
        &self.chrome
    }

    #[must_use]
    pub const fn selector(&self) -> Option<&ProductSelector> {
        self.selector.as_ref()
    }

    #[must_use]
    pub const fn hero(&self) -> Option<&HeroCarousel> {
        self.hero.as_ref()
    }

    #[must_use]
    pub const fn swatches(&self) -> Option<&ThemeSwatches> {
        self.swatches.as_ref()
    }

    /// Text left in the newsletter field after the last submit.
    #[must_use]
    pub fn newsletter_input(&self) -> &str {
        &self.newsletter_input
    }

    /// Apply one command.
    #[instrument(skip(self), fields(page = ?self.kind))]
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        if command.closes_dropdowns() {
            self.chrome.close_dropdowns();
        }

        match command {
            Command::ToggleDropdown(dropdown) => self.chrome.toggle_dropdown(dropdown),
            Command::FollowDropdownLink(dropdown) => self.chrome.follow_dropdown_link(dropdown),
            Command::CloseDropdowns => {}
            Command::UnavailableLink => return Outcome::notice(Notice::PageUnavailable),
            Command::OpenBasket => self.chrome.open_overlay(),
            Command::CloseBasket | Command::BackdropClick => self.chrome.close_overlay(),
            Command::KeyPress(key) => {
                if key == "Escape" && self.chrome.escape() {
                    tracing::debug!("Basket overlay closed with Escape");
                }
            }

            Command::IncrementRow(index) => self.update_row(index, Basket::increment),
            Command::DecrementRow(index) => self.update_row(index, Basket::decrement),
            Command::RemoveRow(index) => self.update_row(index, Basket::remove_at),
            Command::ToggleTerms => self.chrome.toggle_terms(),
            Command::Checkout => {
                let notice = match self.chrome.checkout() {
                    CheckoutGate::Proceed => Notice::CheckoutProceeding,
                    CheckoutGate::TermsRequired => Notice::TermsRequired,
                };
                tracing::info!(?notice, "Checkout pressed");
                return Outcome::notice(notice);
            }

            Command::SelectColor(raw) => self.select_color(&raw),
            Command::NextImage => self.with_selector(|selector| selector.advance_image(1)),
            Command::PreviousImage => self.with_selector(|selector| selector.advance_image(-1)),
            Command::IncreaseQuantity => {
                self.with_selector(ProductSelector::increment_quantity);
            }
            Command::DecreaseQuantity => {
                self.with_selector(ProductSelector::decrement_quantity);
            }
            Command::AddToBasket => self.add_to_basket(),

            Command::PressHero(button) => match self.hero.as_mut() {
                Some(hero) => hero.press(button),
                None => tracing::debug!("No hero carousel on this page"),
            },
            Command::RotateHero => {
                if let Some(hero) = self.hero.as_mut() {
                    hero.rotate();
                }
            }
            Command::SelectSwatch(raw) => self.select_swatch(&raw),
            Command::SubscribeNewsletter(input) => return self.subscribe(input),
        }

        Outcome::default()
    }

    fn update_row<T, E: std::fmt::Display>(
        &mut self,
        index: usize,
        op: impl FnOnce(&mut Basket, usize) -> Result<T, E>,
    ) {
        if let Err(e) = op(&mut self.basket, index) {
            tracing::warn!(error = %e, "Ignoring stale basket control");
        }
        self.view.render(self.basket.items());
    }

    fn with_selector(&mut self, f: impl FnOnce(&mut ProductSelector)) {
        match self.selector.as_mut() {
            Some(selector) => f(selector),
            None => tracing::debug!("No product selector on this page"),
        }
    }

    fn select_color(&mut self, raw: &str) {
        let Some(selector) = self.selector.as_mut() else {
            tracing::debug!("No product selector on this page");
            return;
        };
        match selector.select_color(raw) {
            Ok(color) => self.chrome.apply_accent(color.accent()),
            Err(e) => tracing::error!(error = %e, "Colour selection rejected"),
        }
    }

    fn add_to_basket(&mut self) {
        let Some(selector) = self.selector.as_ref() else {
            tracing::debug!("No product selector on this page");
            return;
        };
        let Some(selection) = selector.selection() else {
            tracing::warn!("No product image displayed, nothing to add");
            return;
        };

        self.basket.add_or_increment(
            selection.color.into(),
            selection.quantity,
            selection.image_ref,
        );
        self.view.render(self.basket.items());
        self.chrome.open_overlay();
        self.view.force_filled();
    }

    fn select_swatch(&mut self, raw: &str) {
        let Some(swatches) = self.swatches.as_mut() else {
            tracing::debug!("No theme swatches on this page");
            return;
        };
        match raw.parse::<ColorVariant>() {
            Ok(color) => {
                let accent = swatches.select(color);
                self.chrome.apply_accent(accent);
            }
            Err(e) => tracing::error!(error = %e, "Swatch selection rejected"),
        }
    }

    fn subscribe(&mut self, input: String) -> Outcome {
        let notice = newsletter::subscribe(&input);
        self.newsletter_input = if notice == Notice::NewsletterSubscribed {
            String::new()
        } else {
            input
        };
        Outcome::notice(notice)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::store::{BASKET_KEY, MemoryStore};

    fn store() -> BasketStore {
        BasketStore::new(Arc::new(MemoryStore::new()), BASKET_KEY)
    }

    fn product_page(store: &BasketStore) -> Page {
        Page::load(PageKind::Product, store.clone(), &ImageCatalog::default())
    }

    #[test]
    fn test_end_to_end_product_flow() {
        let store = store();
        let mut page = product_page(&store);
        assert!(page.view().placeholder_visible());

        page.dispatch(Command::IncreaseQuantity);
        page.dispatch(Command::AddToBasket);
        assert_eq!(page.basket().items()[0].quantity.get(), 2);
        assert_eq!(page.basket().items()[0].image_ref, "images/SageGreen1.png");
        assert!(page.chrome().overlay_open());
        assert!(page.view().list_visible());

        page.dispatch(Command::DecreaseQuantity);
        page.dispatch(Command::AddToBasket);
        assert_eq!(page.basket().len(), 1);
        assert_eq!(page.basket().items()[0].quantity.get(), 3);

        for _ in 0..3 {
            page.dispatch(Command::DecrementRow(0));
        }
        assert!(page.basket().is_empty());
        assert!(page.view().placeholder_visible());
        assert!(!page.view().list_visible());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_basket_survives_page_loads() {
        let store = store();
        let mut page = product_page(&store);
        page.dispatch(Command::SelectColor("Dusty Rose".to_string()));
        page.dispatch(Command::NextImage);
        page.dispatch(Command::AddToBasket);

        let home = Page::load(PageKind::Home, store.clone(), &ImageCatalog::default());
        assert_eq!(home.basket().len(), 1);
        assert_eq!(home.view().rows()[0].color_display_name, "DUSTY ROSE");
        assert_eq!(home.view().rows()[0].image_ref, "images/DustyRose2.png");
        assert!(home.view().list_visible());
        assert!(!home.chrome().overlay_open());
    }

    #[test]
    fn test_select_color_applies_accent() {
        let mut page = product_page(&store());
        page.dispatch(Command::SelectColor("lavender-mist".to_string()));
        assert_eq!(page.chrome().accent(), Some("#7f6c70"));

        page.dispatch(Command::SelectColor("Neon".to_string()));
        assert_eq!(page.chrome().accent(), Some("#7f6c70"));
        assert_eq!(
            page.selector().unwrap().selected(),
            ColorVariant::LavenderMist
        );
    }

    #[test]
    fn test_stale_row_index_leaves_basket_alone() {
        let mut page = product_page(&store());
        page.dispatch(Command::AddToBasket);
        let outcome = page.dispatch(Command::IncrementRow(5));
        assert_eq!(outcome, Outcome::default());
        assert_eq!(page.basket().items()[0].quantity.get(), 1);
    }

    #[test]
    fn test_product_commands_are_inert_on_home() {
        let mut home = Page::load(PageKind::Home, store(), &ImageCatalog::default());
        home.dispatch(Command::AddToBasket);
        home.dispatch(Command::NextImage);
        assert!(home.basket().is_empty());
        assert!(home.selector().is_none());
    }

    #[test]
    fn test_home_commands_are_inert_on_product() {
        let mut page = product_page(&store());
        page.dispatch(Command::PressHero(HeroButton::Two));
        page.dispatch(Command::SelectSwatch("dusty-rose".to_string()));
        assert!(page.hero().is_none());
        assert_eq!(page.chrome().accent(), None);
    }

    #[test]
    fn test_clicks_close_dropdowns() {
        let mut page = product_page(&store());
        page.dispatch(Command::ToggleDropdown(Dropdown::Speakers));
        assert_eq!(page.chrome().open_dropdown(), Some(Dropdown::Speakers));

        page.dispatch(Command::NextImage);
        assert_eq!(page.chrome().open_dropdown(), None);

        page.dispatch(Command::ToggleDropdown(Dropdown::More));
        page.dispatch(Command::KeyPress("Tab".to_string()));
        assert_eq!(page.chrome().open_dropdown(), Some(Dropdown::More));
    }

    #[test]
    fn test_unavailable_link_notice() {
        let mut page = product_page(&store());
        page.dispatch(Command::ToggleDropdown(Dropdown::More));
        let outcome = page.dispatch(Command::UnavailableLink);
        assert_eq!(outcome.notices, vec![Notice::PageUnavailable]);
        assert_eq!(page.chrome().open_dropdown(), None);
    }

    #[test]
    fn test_checkout_requires_terms() {
        let mut page = product_page(&store());
        assert_eq!(
            page.dispatch(Command::Checkout).notices,
            vec![Notice::TermsRequired]
        );
        page.dispatch(Command::ToggleTerms);
        assert_eq!(
            page.dispatch(Command::Checkout).notices,
            vec![Notice::CheckoutProceeding]
        );
    }

    #[test]
    fn test_escape_closes_overlay() {
        let mut page = product_page(&store());
        page.dispatch(Command::OpenBasket);
        page.dispatch(Command::KeyPress("Enter".to_string()));
        assert!(page.chrome().overlay_open());
        page.dispatch(Command::KeyPress("Escape".to_string()));
        assert!(!page.chrome().overlay_open());
    }

    #[test]
    fn test_home_swatch_and_hero() {
        let mut home = Page::load(PageKind::Home, store(), &ImageCatalog::default());
        home.dispatch(Command::SelectSwatch("Sage Green".to_string()));
        assert_eq!(home.chrome().accent(), Some("#8b9c8d"));

        home.dispatch(Command::PressHero(HeroButton::Three));
        home.dispatch(Command::RotateHero);
        assert_eq!(home.hero().unwrap().current_slide(), 0);
    }

    #[test]
    fn test_newsletter_keeps_input_until_valid() {
        let mut home = Page::load(PageKind::Home, store(), &ImageCatalog::default());
        let outcome = home.dispatch(Command::SubscribeNewsletter("hej@".to_string()));
        assert_eq!(outcome.notices, vec![Notice::NewsletterEmailInvalid]);
        assert_eq!(home.newsletter_input(), "hej@");

        let outcome = home.dispatch(Command::SubscribeNewsletter("hej@lumina.dk".to_string()));
        assert_eq!(outcome.notices, vec![Notice::NewsletterSubscribed]);
        assert_eq!(home.newsletter_input(), "");
    }
}
