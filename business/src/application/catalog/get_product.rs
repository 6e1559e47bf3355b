use std::sync::Arc;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::store::ProductCatalog;
use crate::domain::catalog::use_cases::get_product::{GetProductParams, GetProductUseCase};
use crate::domain::logger::Logger;

pub struct GetProductUseCaseImpl {
    pub catalog: Arc<ProductCatalog>,
    pub logger: Arc<dyn Logger>,
}

impl GetProductUseCase for GetProductUseCaseImpl {
    fn execute(&self, params: GetProductParams) -> Result<Product, CatalogError> {
        self.logger
            .debug(&format!("Looking up product {}", params.id));
        self.catalog
            .find_by_id(params.id)
            .cloned()
            .ok_or(CatalogError::ProductNotFound)
    }
}
