//! Catalog view criteria: category filter and sort order.

use std::fmt;

use crate::catalog::Product;
use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Sentinel filter value that matches every category.
pub const ALL_CATEGORIES: &str = "all";

/// Which categories a catalog view keeps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// Keep every product.
    #[default]
    All,
    /// Keep products filed under this tag.
    Category(CategoryId),
}

impl CategoryFilter {
    /// Parse a raw filter value. `"all"` and the empty string mean [`CategoryFilter::All`].
    ///
    /// Any other value, whitespace included, is taken verbatim as a category
    /// tag; a tag no product carries simply produces an empty view.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(CategoryId::new(raw))
        }
    }

    /// Check if a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(tag) => &product.category == tag,
        }
    }

    /// The raw filter value, `"all"` for [`CategoryFilter::All`].
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(tag) => tag.as_str(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort options for the catalog grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Curated catalog order, no reordering.
    #[default]
    Recommended,
    /// Sort by price, low to high.
    #[serde(rename = "price-ascending", alias = "price-asc")]
    PriceAsc,
    /// Sort by price, high to low.
    #[serde(rename = "price-descending", alias = "price-desc")]
    PriceDesc,
}

impl SortOption {
    /// Parse a raw sort value.
    ///
    /// Unrecognised values fall back to [`SortOption::Recommended`] since they
    /// only affect display ordering.
    pub fn parse(raw: &str) -> Self {
        Self::from_str(raw).unwrap_or_else(|| {
            warn!(sort = raw, "unrecognised sort option, using recommended order");
            SortOption::Recommended
        })
    }

    /// Strict parse; `None` for unrecognised values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "" | "recommended" => Some(SortOption::Recommended),
            "price-asc" | "price-ascending" => Some(SortOption::PriceAsc),
            "price-desc" | "price-descending" => Some(SortOption::PriceDesc),
            _ => None,
        }
    }

    /// Canonical name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Recommended => "recommended",
            SortOption::PriceAsc => "price-ascending",
            SortOption::PriceDesc => "price-descending",
        }
    }

    /// Label for the sort control.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Recommended => "Recommended",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
        }
    }
}

/// The (filter, sort) pair controlling a catalog view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ViewCriteria {
    /// Category filter.
    pub filter: CategoryFilter,
    /// Sort option.
    pub sort: SortOption,
}

impl ViewCriteria {
    /// Default criteria: every category, recommended order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category filter.
    pub fn with_filter(mut self, filter: CategoryFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }
}
