use std::collections::HashSet;

use super::errors::CatalogError;
use super::model::{Product, ProductCategory};
use super::seed;

/// The static, read-only list of purchasable items.
///
/// Built once at startup and shared behind an `Arc`; the cart and the view
/// layer only ever read from it.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Builds a catalog, rejecting duplicate product identifiers.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicatedProduct);
            }
        }
        Ok(Self { products })
    }

    /// Constructor for the brand's built-in product list (no validation,
    /// the seed data is covered by tests).
    pub fn seeded() -> Self {
        Self {
            products: seed::products(),
        }
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn by_category(&self, category: ProductCategory) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    pub fn on_sale(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.on_sale).collect()
    }
}
