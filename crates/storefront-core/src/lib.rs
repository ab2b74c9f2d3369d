//! Cart and catalog state engine for the storefront demo.
//!
//! This crate holds the state behind the storefront pages; rendering is left
//! to whatever consumes its snapshots.
//!
//! - **Catalog**: the read-only product list and its featured subset
//! - **View**: category filtering and price sorting of the catalog grid
//! - **Cart**: line items, quantity accumulation, totals
//! - **Session**: typed commands and render snapshots for one shopper
//!
//! # Example
//!
//! ```rust
//! use storefront_core::prelude::*;
//!
//! let catalog = demo_catalog().unwrap();
//! let mut session = StorefrontSession::new(&catalog);
//!
//! session.dispatch(Command::AddToCart(ProductId::new("quantum-headset")));
//! session.dispatch(Command::AddToCart(ProductId::new("quantum-headset")));
//! session.dispatch(Command::AddToCart(ProductId::new("lumen-strip")));
//! session.dispatch(Command::SetFilter("audio".to_string()));
//!
//! let snapshot = session.snapshot();
//! assert_eq!(snapshot.total_item_count, 3);
//! assert_eq!(snapshot.subtotal.display(), "$549.70");
//! assert_eq!(snapshot.catalog.total, 2);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod session;
pub mod view;

pub use error::StorefrontError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StorefrontError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{demo_catalog, CatalogStore, Product};

    // View
    pub use crate::view::{derive_view, CatalogView, CategoryFilter, SortOption, ViewCriteria};

    // Cart
    pub use crate::cart::{AddOutcome, Cart, CartPricing, LineItem, LineItemPricing};

    // Session
    pub use crate::session::{Command, CommandOutcome, SessionSnapshot, StorefrontSession};

    pub use crate::config::{CatalogConfig, ProductRecord};
}
