use std::sync::Arc;

use crate::domain::catalog::model::Product;
use crate::domain::catalog::store::ProductCatalog;
use crate::domain::catalog::use_cases::list_products::{ListProductsParams, ListProductsUseCase};
use crate::domain::logger::Logger;

pub struct ListProductsUseCaseImpl {
    pub catalog: Arc<ProductCatalog>,
    pub logger: Arc<dyn Logger>,
}

impl ListProductsUseCase for ListProductsUseCaseImpl {
    fn execute(&self, params: ListProductsParams) -> Vec<Product> {
        match params.category {
            Some(category) => {
                self.logger
                    .debug(&format!("Listing products in category {}", category));
                self.catalog
                    .by_category(category)
                    .into_iter()
                    .cloned()
                    .collect()
            }
            None => {
                self.logger.debug("Listing all products");
                self.catalog.all().to_vec()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::{LocalizedName, ProductCategory};
    use mockall::mock;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn product(id: u32, category: ProductCategory) -> Product {
        Product {
            id,
            name: LocalizedName::new("테스트", "Test"),
            sale_price: 10_000,
            original_price: 10_000,
            on_sale: false,
            category,
            review_count: 0,
            like_count: 0,
        }
    }

    #[test]
    fn should_list_all_products_without_filter() {
        let catalog = ProductCatalog::new(vec![
            product(1, ProductCategory::Skincare),
            product(2, ProductCategory::Makeup),
        ])
        .unwrap();

        let use_case = ListProductsUseCaseImpl {
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };

        let products = use_case.execute(ListProductsParams { category: None });

        assert_eq!(products.len(), 2);
    }

    #[test]
    fn should_filter_by_category() {
        let catalog = ProductCatalog::new(vec![
            product(1, ProductCategory::Skincare),
            product(2, ProductCategory::Makeup),
        ])
        .unwrap();

        let use_case = ListProductsUseCaseImpl {
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };

        let products = use_case.execute(ListProductsParams {
            category: Some(ProductCategory::Makeup),
        });

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 2);
    }
}
