//! Catalog store: the read-only product list for a session.

use std::collections::HashMap;

use crate::catalog::Product;
use crate::error::StorefrontError;
use crate::ids::{CategoryId, ProductId};

/// The authoritative product list plus the featured subset.
///
/// Featured products are kept as indices into the full list, so a featured
/// entry always carries the same field values as its catalog counterpart.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    featured: Vec<usize>,
    index: HashMap<ProductId, usize>,
}

impl CatalogStore {
    /// Build a catalog from products in display order and the ids to feature.
    ///
    /// Fails on duplicate product ids, negative prices, or a featured id that
    /// is not part of `products`.
    pub fn new(
        products: Vec<Product>,
        featured_ids: &[ProductId],
    ) -> Result<Self, StorefrontError> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if product.price.is_negative() {
                return Err(StorefrontError::InvalidPrice {
                    product_id: product.id.to_string(),
                    value: product.price.to_decimal(),
                });
            }
            if index.insert(product.id.clone(), position).is_some() {
                return Err(StorefrontError::DuplicateProduct(product.id.to_string()));
            }
        }

        let featured = featured_ids
            .iter()
            .map(|id| {
                index
                    .get(id)
                    .copied()
                    .ok_or_else(|| StorefrontError::FeaturedNotInCatalog(id.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            products,
            featured,
            index,
        })
    }

    /// All products in catalog order.
    pub fn all_products(&self) -> &[Product] {
        &self.products
    }

    /// The featured subset, in featured order.
    pub fn featured_products(&self) -> Vec<&Product> {
        self.featured.iter().map(|&i| &self.products[i]).collect()
    }

    /// Look up a product. Unknown ids are a normal case and yield `None`.
    pub fn find_product_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.index.get(id).map(|&i| &self.products[i])
    }

    /// Distinct category tags in first-seen catalog order.
    pub fn categories(&self) -> Vec<&CategoryId> {
        let mut seen: Vec<&CategoryId> = Vec::new();
        for product in &self.products {
            if !seen.contains(&&product.category) {
                seen.push(&product.category);
            }
        }
        seen
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
