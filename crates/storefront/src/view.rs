//! Basket view.
//!
//! Turns the basket rows into display rows for the overlay. The view is
//! rebuilt from scratch on every render; row controls carry the index they
//! were rendered with.

use lumina_core::{LineItem, PRODUCT_NAME};

/// Whether the overlay shows the placeholder or the row list.
///
/// A single value, so the two containers can never both be shown or both
/// be hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presentation {
    /// "Your basket is empty" placeholder visible, list hidden.
    #[default]
    Empty,
    /// Row list visible, placeholder hidden.
    Filled,
}

/// The `src` attribute for a stored image reference.
///
/// Catalogue references are relative to the site root (`images/...`) and get
/// a leading `/`. References that are already rooted or carry a URL scheme,
/// as older basket documents stored them, are used as they are.
#[must_use]
pub fn image_src(image_ref: &str) -> String {
    let has_scheme = image_ref.split_once(':').is_some_and(|(scheme, _)| {
        scheme.starts_with(|c: char| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    });
    if image_ref.is_empty() || image_ref.starts_with('/') || has_scheme {
        image_ref.to_string()
    } else {
        format!("/{image_ref}")
    }
}

/// One rendered basket row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketRow {
    /// Position the increment/decrement controls act on.
    pub index: usize,
    pub image_ref: String,
    /// Value for the row image's `src` attribute.
    pub image_src: String,
    pub product_name: &'static str,
    pub color_display_name: String,
    pub quantity: u32,
}

/// The rendered basket overlay contents.
#[derive(Debug, Clone, Default)]
pub struct BasketView {
    rows: Vec<BasketRow>,
    presentation: Presentation,
    total_quantity: u64,
}

impl BasketView {
    /// A view with no rows.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all rows and rebuild them from `items`.
    pub fn render(&mut self, items: &[LineItem]) {
        self.rows = items
            .iter()
            .enumerate()
            .map(|(index, item)| BasketRow {
                index,
                image_ref: item.image_ref.clone(),
                image_src: image_src(&item.image_ref),
                product_name: PRODUCT_NAME,
                color_display_name: item.color_display_name.clone(),
                quantity: item.quantity.get(),
            })
            .collect();
        self.total_quantity = items
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum();
        self.presentation = if self.rows.is_empty() {
            Presentation::Empty
        } else {
            Presentation::Filled
        };
    }

    /// Show the row list regardless of the last render.
    pub const fn force_filled(&mut self) {
        self.presentation = Presentation::Filled;
    }

    #[must_use]
    pub fn rows(&self) -> &[BasketRow] {
        &self.rows
    }

    #[must_use]
    pub const fn presentation(&self) -> Presentation {
        self.presentation
    }

    #[must_use]
    pub const fn placeholder_visible(&self) -> bool {
        matches!(self.presentation, Presentation::Empty)
    }

    #[must_use]
    pub const fn list_visible(&self) -> bool {
        matches!(self.presentation, Presentation::Filled)
    }

    /// Units across all rows, for the navigation badge.
    #[must_use]
    pub const fn total_quantity(&self) -> u64 {
        self.total_quantity
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use lumina_core::{ColorVariant, Quantity};

    fn items() -> Vec<LineItem> {
        vec![
            LineItem::new(ColorVariant::SageGreen.into(), "img1", Quantity::new(2).unwrap()),
            LineItem::new(ColorVariant::DustyRose.into(), "img2", Quantity::ONE),
        ]
    }

    #[test]
    fn test_render_empty_shows_placeholder_only() {
        let mut view = BasketView::new();
        view.render(&[]);
        assert!(view.placeholder_visible());
        assert!(!view.list_visible());
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_render_non_empty_shows_list_only() {
        let mut view = BasketView::new();
        view.render(&items());
        assert!(!view.placeholder_visible());
        assert!(view.list_visible());
        assert_eq!(view.total_quantity(), 3);
    }

    #[test]
    fn test_render_replaces_previous_rows() {
        let mut view = BasketView::new();
        view.render(&items());
        assert_eq!(view.rows().len(), 2);

        let remaining = &items()[1..];
        view.render(remaining);
        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.rows()[0].index, 0);
        assert_eq!(view.rows()[0].color_display_name, "DUSTY ROSE");
        assert_eq!(view.rows()[0].product_name, "LUMINA ONE");

        view.render(&[]);
        assert_eq!(view.presentation(), Presentation::Empty);
    }

    #[test]
    fn test_rows_carry_their_index() {
        let mut view = BasketView::new();
        view.render(&items());
        let indexes: Vec<usize> = view.rows().iter().map(|row| row.index).collect();
        assert_eq!(indexes, vec![0, 1]);
        assert_eq!(view.rows()[0].quantity, 2);
    }

    #[test]
    fn test_image_src_roots_catalogue_refs_only() {
        assert_eq!(image_src("images/SageGreen1.png"), "/images/SageGreen1.png");
        assert_eq!(image_src("/images/SageGreen1.png"), "/images/SageGreen1.png");
        assert_eq!(
            image_src("http://127.0.0.1:5500/images/SageGreen1.png"),
            "http://127.0.0.1:5500/images/SageGreen1.png"
        );
        assert_eq!(
            image_src("https://cdn.example.com/DustyRose2.png"),
            "https://cdn.example.com/DustyRose2.png"
        );
        assert_eq!(image_src(""), "");
    }

    #[test]
    fn test_rows_carry_absolute_image_refs_unchanged() {
        let mut view = BasketView::new();
        view.render(&[LineItem::new(
            ColorVariant::SageGreen.into(),
            "http://127.0.0.1:5500/images/SageGreen1.png",
            Quantity::ONE,
        )]);
        assert_eq!(
            view.rows()[0].image_src,
            "http://127.0.0.1:5500/images/SageGreen1.png"
        );
    }

    #[test]
    fn test_force_filled() {
        let mut view = BasketView::new();
        view.render(&items());
        view.force_filled();
        assert_eq!(view.presentation(), Presentation::Filled);
    }
}
