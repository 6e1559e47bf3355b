#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog.duplicated_product")]
    DuplicatedProduct,
    #[error("catalog.product_not_found")]
    ProductNotFound,
}
