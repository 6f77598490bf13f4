//! Product page selector.
//!
//! Tracks which colour of the LUMINA ONE is shown, which of its images is
//! displayed and the quantity picker next to "add to basket". It never
//! touches the basket itself; [`ProductSelector::selection`] hands the
//! current choice to the page, which passes it on to the basket model.

use std::collections::HashMap;

use thiserror::Error;
use tracing::instrument;

use lumina_core::{ColorVariant, Quantity};

/// Images shown per colour.
const IMAGES_PER_COLOR: usize = 3;

/// Errors from the selector.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// The requested colour has no image set.
    #[error("no image set for colour: {0}")]
    UnknownColor(String),
}

/// Per-colour product image sets.
#[derive(Debug, Clone)]
pub struct ImageCatalog {
    sets: HashMap<ColorVariant, Vec<String>>,
}

impl ImageCatalog {
    /// A catalog with the given sets. Colours missing from `sets`, or mapped
    /// to an empty list, cannot be selected.
    #[must_use]
    pub const fn new(sets: HashMap<ColorVariant, Vec<String>>) -> Self {
        Self { sets }
    }

    /// Images for `color`, if it has any.
    #[must_use]
    pub fn images(&self, color: ColorVariant) -> Option<&[String]> {
        self.sets
            .get(&color)
            .map(Vec::as_slice)
            .filter(|set| !set.is_empty())
    }
}

/// `images/<Stem>1.png` .. `images/<Stem>3.png` for every colour.
impl Default for ImageCatalog {
    fn default() -> Self {
        let sets = ColorVariant::ALL
            .into_iter()
            .map(|color| {
                let images = (1..=IMAGES_PER_COLOR)
                    .map(|n| format!("images/{}{n}.png", color.image_stem()))
                    .collect();
                (color, images)
            })
            .collect();
        Self { sets }
    }
}

/// What "add to basket" hands to the basket model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub color: ColorVariant,
    pub quantity: Quantity,
    pub image_ref: String,
}

/// Colour, image and quantity state of the product page.
#[derive(Debug, Clone)]
pub struct ProductSelector {
    catalog: ImageCatalog,
    selected: ColorVariant,
    image_index: usize,
    quantity: Quantity,
}

impl ProductSelector {
    /// Colour shown when the page loads.
    pub const DEFAULT_COLOR: ColorVariant = ColorVariant::SageGreen;

    /// A selector on the default colour, first image, quantity one.
    #[must_use]
    pub const fn new(catalog: ImageCatalog) -> Self {
        Self {
            catalog,
            selected: Self::DEFAULT_COLOR,
            image_index: 0,
            quantity: Quantity::ONE,
        }
    }

    #[must_use]
    pub const fn selected(&self) -> ColorVariant {
        self.selected
    }

    #[must_use]
    pub const fn image_index(&self) -> usize {
        self.image_index
    }

    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Image currently displayed.
    #[must_use]
    pub fn current_image(&self) -> Option<&str> {
        self.catalog
            .images(self.selected)
            .and_then(|set| set.get(self.image_index))
            .map(String::as_str)
    }

    /// Alt text for the displayed image, e.g. `Sage Green speaker 2`.
    #[must_use]
    pub fn image_alt(&self) -> String {
        format!("{} speaker {}", self.selected.label(), self.image_index + 1)
    }

    /// Number of images for the selected colour.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.catalog.images(self.selected).map_or(0, <[String]>::len)
    }

    /// Switch colour and go back to its first image.
    ///
    /// Accepts the identifier (`sage-green`) or the label (`Sage Green`).
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::UnknownColor`] and leaves the state unchanged
    /// if the colour is unknown or has no images.
    #[instrument(skip(self))]
    pub fn select_color(&mut self, raw: &str) -> Result<ColorVariant, SelectorError> {
        let color = raw
            .parse::<ColorVariant>()
            .ok()
            .filter(|color| self.catalog.images(*color).is_some())
            .ok_or_else(|| SelectorError::UnknownColor(raw.to_owned()))?;

        self.selected = color;
        self.image_index = 0;
        Ok(color)
    }

    /// Step through the selected colour's images, wrapping at both ends.
    /// Does nothing when the colour has no images.
    pub fn advance_image(&mut self, delta: isize) {
        let len = self.image_count();
        if len == 0 {
            return;
        }
        let len = isize::try_from(len).unwrap_or(isize::MAX);
        let current = isize::try_from(self.image_index).unwrap_or(0);
        let next = (current + delta).rem_euclid(len);
        self.image_index = usize::try_from(next).unwrap_or(0);
    }

    /// Quantity picker "+".
    pub const fn increment_quantity(&mut self) {
        self.quantity = self.quantity.increment();
    }

    /// Quantity picker "-"; stays at one.
    pub const fn decrement_quantity(&mut self) {
        if let Some(quantity) = self.quantity.decrement() {
            self.quantity = quantity;
        }
    }

    /// The current choice, or `None` if no image is displayed.
    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        let image_ref = self.current_image()?.to_owned();
        Some(Selection {
            color: self.selected,
            quantity: self.quantity,
            image_ref,
        })
    }
}
