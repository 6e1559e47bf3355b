use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;

pub struct GetProductParams {
    pub id: u32,
}

pub trait GetProductUseCase: Send + Sync {
    fn execute(&self, params: GetProductParams) -> Result<Product, CatalogError>;
}
