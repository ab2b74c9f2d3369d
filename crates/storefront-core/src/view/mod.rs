//! Catalog view engine.
//!
//! Derives the filtered, sorted product list shown in the catalog grid.
//! Derivation is a pure function of the product slice and the criteria.

mod criteria;

pub use criteria::{CategoryFilter, SortOption, ViewCriteria, ALL_CATEGORIES};

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Filter and sort `products` according to `criteria`.
///
/// The input is never reordered; sorting works on a copy. Price sorts are
/// stable, so equal prices keep their catalog order.
pub fn derive_view(products: &[Product], criteria: &ViewCriteria) -> Vec<Product> {
    let mut view: Vec<Product> = products
        .iter()
        .filter(|p| criteria.filter.matches(p))
        .cloned()
        .collect();

    match criteria.sort {
        SortOption::Recommended => {}
        SortOption::PriceAsc => view.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOption::PriceDesc => view.sort_by(|a, b| b.price.cmp(&a.price)),
    }

    view
}

/// A derived catalog view together with the criteria that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogView {
    /// Products in display order.
    pub products: Vec<Product>,
    /// Criteria used for this view.
    pub criteria: ViewCriteria,
    /// Number of products in the view.
    pub total: usize,
}

impl CatalogView {
    /// Derive a view from a product slice.
    pub fn derive(products: &[Product], criteria: &ViewCriteria) -> Self {
        let products = derive_view(products, criteria);
        Self {
            total: products.len(),
            products,
            criteria: criteria.clone(),
        }
    }

    /// Check if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("a", "A", Money::new(3000), "audio"),
            Product::new("b", "B", Money::new(1000), "setups"),
            Product::new("c", "C", Money::new(3000), "setups"),
            Product::new("d", "D", Money::new(1000), "audio"),
        ]
    }

    fn ids(view: &[Product]) -> Vec<&str> {
        view.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_recommended_keeps_order() {
        let view = derive_view(&catalog(), &ViewCriteria::default());
        assert_eq!(ids(&view), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_filter_by_category() {
        let criteria = ViewCriteria::new().with_filter(CategoryFilter::parse("setups"));
        let view = derive_view(&catalog(), &criteria);
        assert_eq!(ids(&view), vec!["b", "c"]);
    }

    #[test]
    fn test_price_sorts_are_stable() {
        let asc = derive_view(&catalog(), &ViewCriteria::new().with_sort(SortOption::PriceAsc));
        assert_eq!(ids(&asc), vec!["b", "d", "a", "c"]);

        let desc = derive_view(&catalog(), &ViewCriteria::new().with_sort(SortOption::PriceDesc));
        assert_eq!(ids(&desc), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let criteria = ViewCriteria::new().with_filter(CategoryFilter::parse("garden"));
        let view = CatalogView::derive(&catalog(), &criteria);
        assert!(view.is_empty());
        assert_eq!(view.total, 0);
    }

    #[test]
    fn test_padded_filters_match_nothing() {
        for raw in ["   ", " audio "] {
            let criteria = ViewCriteria::new().with_filter(CategoryFilter::parse(raw));
            assert!(derive_view(&catalog(), &criteria).is_empty(), "filter {:?}", raw);
        }
    }

    #[test]
    fn test_input_untouched() {
        let products = catalog();
        let before = products.clone();
        let _ = derive_view(&products, &ViewCriteria::new().with_sort(SortOption::PriceDesc));
        assert_eq!(products, before);
    }
}
