//! Product catalog module.
//!
//! Contains the product type, the catalog store, and the demo catalog.

mod demo;
mod product;
mod store;

pub use demo::{demo_catalog, FEATURED_IDS};
pub use product::Product;
pub use store::CatalogStore;
