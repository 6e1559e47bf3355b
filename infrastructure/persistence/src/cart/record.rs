use serde::{Deserialize, Serialize};

use business::domain::cart::model::CartLine;
use business::domain::catalog::model::{LocalizedName, Product, ProductCategory};
use business::domain::errors::StorageError;

/// Serialized form of one cart line. The product snapshot is embedded in
/// full, so a stored line survives catalog changes untouched.
#[derive(Debug, Serialize, Deserialize)]
pub struct CartLineRecord {
    pub product: ProductSnapshotRecord,
    pub quantity: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductSnapshotRecord {
    pub id: u32,
    pub name_ko: String,
    pub name_en: String,
    pub sale_price: u64,
    pub original_price: u64,
    pub on_sale: bool,
    pub category: ProductCategory,
    pub review_count: u32,
    pub like_count: u32,
}

impl CartLineRecord {
    pub fn from_domain(line: &CartLine) -> Self {
        Self {
            product: ProductSnapshotRecord {
                id: line.product.id,
                name_ko: line.product.name.ko.clone(),
                name_en: line.product.name.en.clone(),
                sale_price: line.product.sale_price,
                original_price: line.product.original_price,
                on_sale: line.product.on_sale,
                category: line.product.category,
                review_count: line.product.review_count,
                like_count: line.product.like_count,
            },
            quantity: line.quantity,
        }
    }

    /// Validating mapper: a record that parsed but violates the cart
    /// invariants counts as a schema mismatch, i.e. a read failure.
    pub fn into_domain(self) -> Result<CartLine, StorageError> {
        if self.quantity == 0 {
            return Err(StorageError::ReadFailure);
        }
        Ok(CartLine {
            product: Product {
                id: self.product.id,
                name: LocalizedName::new(self.product.name_ko, self.product.name_en),
                sale_price: self.product.sale_price,
                original_price: self.product.original_price,
                on_sale: self.product.on_sale,
                category: self.product.category,
                review_count: self.product.review_count,
                like_count: self.product.like_count,
            },
            quantity: self.quantity,
        })
    }
}
