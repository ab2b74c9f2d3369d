//! Cart and line item types.

use std::collections::HashSet;

use crate::cart::{CartPricing, LineItemPricing};
use crate::catalog::{CatalogStore, Product};
use crate::error::StorefrontError;
use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

/// Result of adding a product to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum AddOutcome {
    /// A new line item was created with quantity 1.
    Added,
    /// An existing line item was incremented.
    Incremented { quantity: u32 },
    /// The id is not in the catalog; the cart is unchanged.
    NotFound,
}

/// A shopping cart.
///
/// Holds at most one line item per product id, in order of first add.
/// Deserializing goes through [`Cart::from_line_items`], so both rules hold
/// for carts built from data too.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct Cart {
    items: Vec<LineItem>,
}

#[derive(Deserialize)]
struct CartRecord {
    items: Vec<LineItem>,
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = CartRecord::deserialize(deserializer)?;
        Cart::from_line_items(record.items).map_err(serde::de::Error::custom)
    }
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from existing lines.
    ///
    /// Rejects zero quantities and repeated product ids.
    pub fn from_line_items(items: Vec<LineItem>) -> Result<Self, StorefrontError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.quantity == 0 {
                return Err(StorefrontError::InvalidCart(format!(
                    "zero quantity for {}",
                    item.product_id
                )));
            }
            if !seen.insert(&item.product_id) {
                return Err(StorefrontError::InvalidCart(format!(
                    "duplicate line for {}",
                    item.product_id
                )));
            }
        }
        Ok(Self { items })
    }

    /// Add one unit of a catalog product.
    ///
    /// The product's display fields and price are captured on first add.
    /// Unknown ids leave the cart untouched and return [`AddOutcome::NotFound`].
    pub fn add_to_cart(&mut self, catalog: &CatalogStore, product_id: &ProductId) -> AddOutcome {
        if let Some(existing) = self.items.iter_mut().find(|i| &i.product_id == product_id) {
            existing.quantity = existing.quantity.saturating_add(1);
            debug!(product_id = %product_id, quantity = existing.quantity, "incremented cart line");
            return AddOutcome::Incremented {
                quantity: existing.quantity,
            };
        }

        let Some(product) = catalog.find_product_by_id(product_id) else {
            warn!(product_id = %product_id, "ignoring add for unknown product");
            return AddOutcome::NotFound;
        };

        self.items.push(LineItem::from_product(product));
        debug!(product_id = %product_id, "added cart line");
        AddOutcome::Added
    }

    /// Remove the whole line for a product. Returns whether a line was removed.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        let removed = self.items.len() < len_before;
        if removed {
            debug!(product_id = %product_id, "removed cart line");
        }
        removed
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Line items in order of first add.
    pub fn line_items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get total item count (sum of quantities).
    pub fn total_item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of captured unit price times quantity over all lines.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Get number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the line for a product.
    pub fn get_item(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }

    /// Check if a product has a line in the cart.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.get_item(product_id).is_some()
    }

    /// Calculate cart pricing.
    pub fn pricing(&self) -> CartPricing {
        let line_items: Vec<LineItemPricing> = self
            .items
            .iter()
            .map(|item| LineItemPricing {
                product_id: item.product_id.clone(),
                unit_price: item.unit_price,
                quantity: item.quantity,
                total: item.line_total(),
            })
            .collect();

        let subtotal = self.subtotal();
        CartPricing {
            subtotal,
            total: subtotal,
            item_count: self.total_item_count(),
            line_items,
        }
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product ID.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Price captured when the line was created.
    pub unit_price: Money,
    /// Prior price captured when the line was created.
    pub old_price: Option<Money>,
    /// Category tag.
    pub category: CategoryId,
    /// Availability at add time.
    pub in_stock: bool,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl LineItem {
    /// Create a line with quantity 1 from a catalog product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            old_price: product.old_price,
            category: product.category.clone(),
            in_stock: product.in_stock,
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CatalogStore {
        CatalogStore::new(
            vec![
                Product::new("headset", "Headset", Money::new(24990), "audio"),
                Product::new("strip", "Strip", Money::new(4990), "setups"),
            ],
            &[],
        )
        .unwrap()
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_item_count(), 0);
        assert!(cart.subtotal().is_zero());
    }

    #[test]
    fn test_add_item() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let outcome = cart.add_to_cart(&catalog, &ProductId::new("headset"));

        assert_eq!(outcome, AddOutcome::Added);
        assert_eq!(cart.total_item_count(), 1);
        assert_eq!(cart.line_items()[0].name, "Headset");
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let id = ProductId::new("headset");

        cart.add_to_cart(&catalog, &id);
        let outcome = cart.add_to_cart(&catalog, &id);

        assert_eq!(outcome, AddOutcome::Incremented { quantity: 2 });
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.total_item_count(), 2);
    }

    #[test]
    fn test_increment_keeps_insertion_order() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add_to_cart(&catalog, &ProductId::new("headset"));
        cart.add_to_cart(&catalog, &ProductId::new("strip"));
        cart.add_to_cart(&catalog, &ProductId::new("headset"));

        let order: Vec<&str> = cart.line_items().iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(order, vec!["headset", "strip"]);
    }

    #[test]
    fn test_unknown_product_is_ignored() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let outcome = cart.add_to_cart(&catalog, &ProductId::new("missing"));

        assert_eq!(outcome, AddOutcome::NotFound);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_item() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let id = ProductId::new("headset");
        cart.add_to_cart(&catalog, &id);
        cart.add_to_cart(&catalog, &id);

        assert!(cart.remove_from_cart(&id));
        assert!(!cart.contains(&id));
        assert!(!cart.remove_from_cart(&id));
    }

    #[test]
    fn test_pricing() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add_to_cart(&catalog, &ProductId::new("headset"));
        cart.add_to_cart(&catalog, &ProductId::new("headset"));
        cart.add_to_cart(&catalog, &ProductId::new("strip"));

        let pricing = cart.pricing();
        assert_eq!(pricing.subtotal.amount_cents, 54970);
        assert_eq!(pricing.total, pricing.subtotal);
        assert_eq!(pricing.item_count, 3);
        assert_eq!(pricing.line_items[0].total.amount_cents, 49980);
    }

    #[test]
    fn test_deserialize_rejects_zero_quantity() {
        let json = r#"{"items": [{
            "product_id": "zen-pad", "name": "Zen", "unit_price": {"amount_cents": 3990},
            "old_price": null, "category": "perifericos", "in_stock": true, "quantity": 0
        }]}"#;
        let err = serde_json::from_str::<Cart>(json).unwrap_err();
        assert!(err.to_string().contains("zero quantity"));
    }

    #[test]
    fn test_deserialize_rejects_duplicate_lines() {
        let line = r#"{
            "product_id": "zen-pad", "name": "Zen", "unit_price": {"amount_cents": 3990},
            "old_price": null, "category": "perifericos", "in_stock": true, "quantity": 1
        }"#;
        let json = format!(r#"{{"items": [{line}, {line}]}}"#);
        let err = serde_json::from_str::<Cart>(&json).unwrap_err();
        assert!(err.to_string().contains("duplicate line"));
    }

    #[test]
    fn test_serialized_cart_reloads() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add_to_cart(&catalog, &ProductId::new("headset"));
        cart.add_to_cart(&catalog, &ProductId::new("headset"));
        cart.add_to_cart(&catalog, &ProductId::new("strip"));

        let json = serde_json::to_string(&cart).unwrap();
        let reloaded: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, cart);
    }

    #[test]
    fn test_from_line_items_validates() {
        let catalog = catalog();
        let headset = catalog.find_product_by_id(&ProductId::new("headset")).unwrap();
        let line = LineItem::from_product(headset);

        assert!(Cart::from_line_items(vec![line.clone()]).is_ok());
        assert!(matches!(
            Cart::from_line_items(vec![line.clone(), line]),
            Err(StorefrontError::InvalidCart(_))
        ));
    }

    #[test]
    fn test_price_captured_at_first_add() {
        let original = catalog();
        let repriced = CatalogStore::new(
            vec![Product::new("headset", "Headset", Money::new(19990), "audio")],
            &[],
        )
        .unwrap();
        let mut cart = Cart::new();
        let id = ProductId::new("headset");

        cart.add_to_cart(&original, &id);
        cart.add_to_cart(&repriced, &id);

        assert_eq!(cart.get_item(&id).unwrap().unit_price.amount_cents, 24990);
        assert_eq!(cart.subtotal().amount_cents, 49980);
    }

    #[test]
    fn test_clear() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add_to_cart(&catalog, &ProductId::new("strip"));
        cart.clear();
        assert!(cart.is_empty());
    }
}
