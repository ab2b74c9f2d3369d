//! Storefront session: one shopper's cart and catalog criteria.
//!
//! The presentation layer turns gestures into [`Command`]s, dispatches them,
//! and re-reads a [`SessionSnapshot`] to redraw. Commands run to completion
//! one at a time; nothing here touches rendering.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::cart::{AddOutcome, Cart, CartPricing, LineItem};
use crate::catalog::{CatalogStore, Product};
use crate::ids::ProductId;
use crate::money::Money;
use crate::view::{CatalogView, CategoryFilter, SortOption, ViewCriteria};

/// An operation requested by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "command", content = "value")]
pub enum Command {
    /// Add one unit of a product.
    AddToCart(ProductId),
    /// Remove a product's line entirely.
    RemoveFromCart(ProductId),
    /// Change the category filter (`"all"` or a category tag).
    SetFilter(String),
    /// Change the sort order.
    SetSort(String),
}

/// What a dispatched command did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CommandOutcome {
    /// Result of an add.
    Cart { outcome: AddOutcome },
    /// Result of a remove; `removed` is false when the id had no line.
    Removed { removed: bool },
    /// The criteria now in effect.
    Criteria { criteria: ViewCriteria },
}

/// Read-only copy of everything the presentation layer draws.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSnapshot {
    /// Featured grid.
    pub featured: Vec<Product>,
    /// Catalog grid under the current criteria.
    pub catalog: CatalogView,
    /// Cart lines in order of first add.
    pub line_items: Vec<LineItem>,
    /// Cart pricing breakdown.
    pub cart: CartPricing,
    /// Sum of quantities, for the cart badge.
    pub total_item_count: u64,
    /// Cart subtotal.
    pub subtotal: Money,
    /// Checkout is offered only for a non-empty cart.
    pub checkout_enabled: bool,
}

/// A shopper's session over a shared catalog.
#[derive(Debug, Clone)]
pub struct StorefrontSession<'a> {
    catalog: &'a CatalogStore,
    cart: Cart,
    criteria: ViewCriteria,
}

impl<'a> StorefrontSession<'a> {
    /// Start a session with an empty cart and default criteria.
    pub fn new(catalog: &'a CatalogStore) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            criteria: ViewCriteria::default(),
        }
    }

    /// Run one command to completion.
    #[instrument(skip(self), level = "debug")]
    pub fn dispatch(&mut self, command: Command) -> CommandOutcome {
        match command {
            Command::AddToCart(id) => CommandOutcome::Cart {
                outcome: self.add_to_cart(&id),
            },
            Command::RemoveFromCart(id) => CommandOutcome::Removed {
                removed: self.remove_from_cart(&id),
            },
            Command::SetFilter(raw) => {
                self.set_filter(&raw);
                CommandOutcome::Criteria {
                    criteria: self.criteria.clone(),
                }
            }
            Command::SetSort(raw) => {
                self.set_sort(&raw);
                CommandOutcome::Criteria {
                    criteria: self.criteria.clone(),
                }
            }
        }
    }

    /// Add one unit of a product; unknown ids leave the cart unchanged.
    pub fn add_to_cart(&mut self, product_id: &ProductId) -> AddOutcome {
        self.cart.add_to_cart(self.catalog, product_id)
    }

    /// Remove a product's line. Idempotent.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> bool {
        self.cart.remove_from_cart(product_id)
    }

    /// Replace the category filter.
    pub fn set_filter(&mut self, raw: &str) {
        self.criteria.filter = CategoryFilter::parse(raw);
    }

    /// Replace the sort order, falling back to recommended for unknown values.
    pub fn set_sort(&mut self, raw: &str) {
        self.criteria.sort = SortOption::parse(raw);
    }

    /// The catalog this session reads from.
    pub fn catalog(&self) -> &CatalogStore {
        self.catalog
    }

    /// The session's cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Criteria currently in effect.
    pub fn criteria(&self) -> &ViewCriteria {
        &self.criteria
    }

    /// Derive the catalog grid for the current criteria.
    pub fn catalog_view(&self) -> CatalogView {
        CatalogView::derive(self.catalog.all_products(), &self.criteria)
    }

    /// Capture the current state for rendering.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            featured: self
                .catalog
                .featured_products()
                .into_iter()
                .cloned()
                .collect(),
            catalog: self.catalog_view(),
            line_items: self.cart.line_items().to_vec(),
            cart: self.cart.pricing(),
            total_item_count: self.cart.total_item_count(),
            subtotal: self.cart.subtotal(),
            checkout_enabled: !self.cart.is_empty(),
        }
    }
}
