//! Basket commands.
//!
//! Each invocation is one page load: the basket is read from the store, at
//! most one mutation is applied and written back, then the rows are printed.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use lumina_core::{ColorVariant, Quantity, QuantityError, UnknownColor};
use lumina_storefront::basket::{Basket, BasketError};
use lumina_storefront::config::{ConfigError, StorefrontConfig};
use lumina_storefront::product::ImageCatalog;
use lumina_storefront::store::{BasketStore, FileStore};
use lumina_storefront::view::BasketView;

/// Errors from basket commands.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Color(#[from] UnknownColor),

    #[error("invalid quantity: {0}")]
    Quantity(#[from] QuantityError),

    #[error("no product images for {0}")]
    NoImages(ColorVariant),

    #[error(transparent)]
    Basket(#[from] BasketError),
}

/// Load the basket the storefront would see with the current environment.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn open() -> Result<Basket, CommandError> {
    let config = StorefrontConfig::from_env()?;
    let store = FileStore::for_origin(&config.data_dir, &config.origin);
    info!(root = %store.root().display(), key = %config.basket_key, "Opening basket");

    Ok(Basket::load(BasketStore::new(
        Arc::new(store),
        config.basket_key,
    )))
}

/// Add `quantity` of `color` with its first product image.
///
/// # Errors
///
/// Returns an error if the colour is unknown, the quantity is zero or the
/// colour has no images.
pub fn add(basket: &mut Basket, color: &str, quantity: u32) -> Result<(), CommandError> {
    let color: ColorVariant = color.parse()?;
    let quantity = Quantity::new(quantity)?;
    let catalog = ImageCatalog::default();
    let image_ref = catalog
        .images(color)
        .and_then(<[String]>::first)
        .ok_or(CommandError::NoImages(color))?;

    basket.add_or_increment(color.into(), quantity, image_ref.as_str());
    Ok(())
}

/// Print the basket rows.
#[allow(clippy::print_stdout)]
pub fn show(basket: &Basket) {
    let mut view = BasketView::new();
    view.render(basket.items());

    if view.placeholder_visible() {
        println!("Your basket is empty");
        return;
    }

    for row in view.rows() {
        println!(
            "{:>3}  {}  {:<16} x{:<4} {}",
            row.index, row.product_name, row.color_display_name, row.quantity, row.image_ref
        );
    }
    println!("Total: {}", view.total_quantity());
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use lumina_storefront::store::{BASKET_KEY, MemoryStore};

    use super::*;

    fn basket() -> Basket {
        Basket::load(BasketStore::new(Arc::new(MemoryStore::new()), BASKET_KEY))
    }

    #[test]
    fn test_add_uses_first_image() {
        let mut basket = basket();
        add(&mut basket, "Lavender Mist", 2).unwrap();
        assert_eq!(basket.items()[0].image_ref, "images/LavenderMist1.png");
        assert_eq!(basket.items()[0].quantity.get(), 2);
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let mut basket = basket();
        assert!(matches!(
            add(&mut basket, "neon", 1),
            Err(CommandError::Color(_))
        ));
        assert!(matches!(
            add(&mut basket, "sage-green", 0),
            Err(CommandError::Quantity(_))
        ));
        assert!(basket.is_empty());
    }
}
