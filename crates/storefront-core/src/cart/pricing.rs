//! Cart pricing summary.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Pricing breakdown for a cart.
///
/// There is no shipping, tax, or discount code step, so `total` always
/// equals `subtotal`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Amount due.
    pub total: Money,
    /// Sum of quantities.
    pub item_count: u64,
    /// Per-line breakdown, in cart order.
    pub line_items: Vec<LineItemPricing>,
}

impl CartPricing {
    /// Pricing for an empty cart.
    pub fn empty() -> Self {
        Self {
            subtotal: Money::zero(),
            total: Money::zero(),
            item_count: 0,
            line_items: Vec::new(),
        }
    }

    /// Check if there is anything to pay for.
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}

/// Pricing for a single line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    /// Product on this line.
    pub product_id: ProductId,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// unit_price * quantity.
    pub total: Money,
}
