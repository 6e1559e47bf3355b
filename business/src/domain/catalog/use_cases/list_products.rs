use crate::domain::catalog::model::{Product, ProductCategory};

pub struct ListProductsParams {
    pub category: Option<ProductCategory>,
}

pub trait ListProductsUseCase: Send + Sync {
    fn execute(&self, params: ListProductsParams) -> Vec<Product>;
}
