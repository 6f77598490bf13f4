//! Basket line items.

use core::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use super::color::ColorId;

/// Product name shown on every basket row.
pub const PRODUCT_NAME: &str = "LUMINA ONE";

/// Errors that can occur when constructing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// Quantities start at one.
    #[error("quantity must be at least 1")]
    Zero,
}

/// A positive item count.
///
/// ## Constraints
///
/// - Never zero; a row that would reach zero is removed instead
/// - Increments saturate at `u32::MAX`
///
/// ```
/// use lumina_core::Quantity;
///
/// let two = Quantity::new(2).unwrap();
/// assert_eq!(two.decrement().map(Quantity::get), Some(1));
/// assert_eq!(Quantity::ONE.decrement(), None);
/// assert!(Quantity::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// The smallest quantity.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Create a quantity.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::Zero`] for `0`.
    pub const fn new(value: u32) -> Result<Self, QuantityError> {
        match NonZeroU32::new(value) {
            Some(inner) => Ok(Self(inner)),
            None => Err(QuantityError::Zero),
        }
    }

    /// Returns the count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// One more, saturating.
    #[must_use]
    pub const fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// One less, or `None` when this is the last one.
    #[must_use]
    pub const fn decrement(self) -> Option<Self> {
        match NonZeroU32::new(self.0.get() - 1) {
            Some(inner) => Some(Self(inner)),
            None => None,
        }
    }

    /// Sum of two quantities, saturating.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0.get()))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.get()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One basket row: a colour of the product, its image and a count.
///
/// Serialized with the field names of the stored basket document:
///
/// ```json
/// { "colorId": "sage-green", "colorDisplayName": "SAGE GREEN",
///   "imageRef": "images/SageGreen1.png", "quantity": 2 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Colour identifier; unique within a basket.
    pub color_id: ColorId,
    /// Display label derived from `color_id`.
    pub color_display_name: String,
    /// Image captured when the row was added.
    pub image_ref: String,
    /// Number of units, always at least one.
    pub quantity: Quantity,
}

impl LineItem {
    /// Create a row, deriving the display name from the colour id.
    #[must_use]
    pub fn new(color_id: ColorId, image_ref: impl Into<String>, quantity: Quantity) -> Self {
        Self {
            color_display_name: color_id.display_name(),
            color_id,
            image_ref: image_ref.into(),
            quantity,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ColorVariant;

    #[test]
    fn test_quantity_rejects_zero() {
        assert_eq!(Quantity::new(0), Err(QuantityError::Zero));
        assert_eq!(Quantity::new(3).unwrap().get(), 3);
    }

    #[test]
    fn test_quantity_increment_saturates() {
        let max = Quantity::new(u32::MAX).unwrap();
        assert_eq!(max.increment(), max);
        assert_eq!(Quantity::ONE.increment().get(), 2);
    }

    #[test]
    fn test_quantity_decrement_to_none() {
        let two = Quantity::new(2).unwrap();
        assert_eq!(two.decrement(), Some(Quantity::ONE));
        assert_eq!(Quantity::ONE.decrement(), None);
    }

    #[test]
    fn test_quantity_serde() {
        let json = serde_json::to_string(&Quantity::new(4).unwrap()).unwrap();
        assert_eq!(json, "4");
        assert!(serde_json::from_str::<Quantity>("0").is_err());
    }

    #[test]
    fn test_line_item_display_name_follows_color() {
        let item = LineItem::new(
            ColorVariant::DustyRose.into(),
            "images/DustyRose1.png",
            Quantity::ONE,
        );
        assert_eq!(item.color_display_name, "DUSTY ROSE");
    }

    #[test]
    fn test_line_item_json_shape() {
        let item = LineItem::new(
            ColorVariant::SageGreen.into(),
            "img1",
            Quantity::new(2).unwrap(),
        );
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "colorId": "sage-green",
                "colorDisplayName": "SAGE GREEN",
                "imageRef": "img1",
                "quantity": 2
            })
        );
    }
}
