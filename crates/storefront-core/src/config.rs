//! Catalog configuration files.
//!
//! A catalog can be authored as TOML or JSON:
//!
//! ```toml
//! featured = ["quantum-headset"]
//!
//! [[products]]
//! id = "quantum-headset"
//! name = "Auriculares QuantumWave X"
//! price = 249.9
//! old_price = 289.9
//! category = "audio"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::{CatalogStore, Product};
use crate::error::StorefrontError;
use crate::ids::{CategoryId, ProductId};
use crate::money::Money;

/// Catalog configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Ids shown in the featured grid, in order.
    #[serde(default)]
    pub featured: Vec<String>,

    /// Products in catalog order.
    #[serde(default)]
    pub products: Vec<ProductRecord>,
}

/// One product as written in a config file, with decimal prices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Zero or absent means no discount.
    #[serde(default)]
    pub old_price: Option<f64>,
    pub category: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

impl ProductRecord {
    fn into_product(self) -> Result<Product, StorefrontError> {
        for value in std::iter::once(self.price).chain(self.old_price) {
            if !value.is_finite() || value < 0.0 {
                return Err(StorefrontError::InvalidPrice {
                    product_id: self.id,
                    value,
                });
            }
        }

        Ok(Product {
            id: ProductId::new(self.id),
            name: self.name,
            price: Money::from_decimal(self.price),
            old_price: self.old_price.map(Money::from_decimal),
            category: CategoryId::new(self.category),
            in_stock: self.in_stock,
        })
    }
}

impl CatalogConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StorefrontError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| StorefrontError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config = if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        info!(
            path = %path.display(),
            products = config.products.len(),
            featured = config.featured.len(),
            "loaded catalog config"
        );
        Ok(config)
    }

    /// Parse a TOML catalog.
    pub fn from_toml_str(content: &str) -> Result<Self, StorefrontError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a JSON catalog.
    pub fn from_json_str(content: &str) -> Result<Self, StorefrontError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Validate and convert into a catalog store.
    pub fn into_store(self) -> Result<CatalogStore, StorefrontError> {
        let products = self
            .products
            .into_iter()
            .map(ProductRecord::into_product)
            .collect::<Result<Vec<_>, _>>()?;
        let featured: Vec<ProductId> = self.featured.into_iter().map(ProductId::new).collect();
        CatalogStore::new(products, &featured)
    }
}
