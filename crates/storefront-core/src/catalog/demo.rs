//! The demo storefront catalog.

use crate::catalog::{CatalogStore, Product};
use crate::error::StorefrontError;
use crate::ids::ProductId;
use crate::money::Money;

/// Ids of the products shown in the featured grid.
pub const FEATURED_IDS: [&str; 4] = [
    "quantum-headset",
    "neon-keyboard",
    "holo-monitor",
    "nova-mouse",
];

/// Build the demo catalog: four featured products followed by four
/// catalog-only ones.
pub fn demo_catalog() -> Result<CatalogStore, StorefrontError> {
    let products = vec![
        Product::new(
            "quantum-headset",
            "Auriculares QuantumWave X",
            Money::from_decimal(249.9),
            "audio",
        )
        .with_old_price(Money::from_decimal(289.9)),
        Product::new(
            "neon-keyboard",
            "Teclado mecánico NeonK70",
            Money::from_decimal(189.9),
            "perifericos",
        )
        .with_old_price(Money::from_decimal(219.9)),
        Product::new(
            "holo-monitor",
            "Monitor HoloView 32\"",
            Money::from_decimal(499.0),
            "setups",
        )
        .with_old_price(Money::zero()),
        Product::new(
            "nova-mouse",
            "Mouse NovaPro Wireless",
            Money::from_decimal(129.9),
            "perifericos",
        )
        .with_old_price(Money::from_decimal(149.9))
        .out_of_stock(),
        Product::new(
            "lumen-strip",
            "LumenStrip RGB 2m",
            Money::from_decimal(49.9),
            "setups",
        )
        .with_old_price(Money::from_decimal(59.9)),
        Product::new(
            "orbit-dock",
            "OrbitDock USB-C Pro",
            Money::from_decimal(139.9),
            "setups",
        )
        .with_old_price(Money::zero()),
        Product::new(
            "flux-mic",
            "Micrófono FluxCast Studio",
            Money::from_decimal(159.9),
            "audio",
        )
        .with_old_price(Money::from_decimal(179.9)),
        Product::new(
            "zen-pad",
            "Alfombrilla ZenGlide XL",
            Money::from_decimal(39.9),
            "perifericos",
        )
        .with_old_price(Money::zero()),
    ];

    let featured: Vec<ProductId> = FEATURED_IDS.iter().map(|&id| ProductId::new(id)).collect();
    CatalogStore::new(products, &featured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_shape() {
        let store = demo_catalog().unwrap();
        assert_eq!(store.len(), 8);
        assert_eq!(store.featured_products().len(), 4);
        assert_eq!(store.all_products()[4].id.as_str(), "lumen-strip");
    }

    #[test]
    fn test_featured_match_catalog_entries() {
        let store = demo_catalog().unwrap();
        for featured in store.featured_products() {
            let full = store.find_product_by_id(&featured.id).unwrap();
            assert_eq!(full, featured);
        }
    }

    #[test]
    fn test_demo_discounts() {
        let store = demo_catalog().unwrap();
        let monitor = store.find_product_by_id(&ProductId::new("holo-monitor")).unwrap();
        assert!(!monitor.has_discount());

        let headset = store.find_product_by_id(&ProductId::new("quantum-headset")).unwrap();
        assert!(headset.has_discount());
        assert_eq!(headset.price.display(), "$249.90");
    }
}
