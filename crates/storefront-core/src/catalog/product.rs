//! Product type.

use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are created once when the catalog is built and never mutated
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current price.
    pub price: Money,
    /// Prior price. Zero or absent means no discount is shown.
    pub old_price: Option<Money>,
    /// Category tag used by the catalog filter.
    pub category: CategoryId,
    /// Availability flag.
    pub in_stock: bool,
}

impl Product {
    /// Create an in-stock product with no prior price.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<CategoryId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            old_price: None,
            category: category.into(),
            in_stock: true,
        }
    }

    /// Set the prior price.
    pub fn with_old_price(mut self, old_price: Money) -> Self {
        self.old_price = Some(old_price);
        self
    }

    /// Mark the product as out of stock.
    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }

    /// Check if the prior price is above the current one.
    pub fn has_discount(&self) -> bool {
        self.old_price
            .map(|old| old > self.price)
            .unwrap_or(false)
    }

    /// Discount relative to the prior price, in percent.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.old_price.and_then(|old| self.price.percent_off(old))
    }

    /// Check if the product can be offered for purchase.
    pub fn is_purchasable(&self) -> bool {
        self.in_stock
    }
}
