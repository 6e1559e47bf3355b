use super::model::{LocalizedName, Product, ProductCategory};

/// The brand's built-in product list. The storefront ships its catalog as
/// source data; there is no remote catalog service.
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: LocalizedName::new("리페어 세럼", "Repair Serum"),
            sale_price: 150_000,
            original_price: 180_000,
            on_sale: true,
            category: ProductCategory::Skincare,
            review_count: 214,
            like_count: 532,
        },
        Product {
            id: 2,
            name: LocalizedName::new("수분 크림", "Hydra Cream"),
            sale_price: 90_000,
            original_price: 90_000,
            on_sale: false,
            category: ProductCategory::Skincare,
            review_count: 128,
            like_count: 301,
        },
        Product {
            id: 3,
            name: LocalizedName::new("비타민 토너", "Vitamin Toner"),
            sale_price: 38_000,
            original_price: 45_000,
            on_sale: true,
            category: ProductCategory::Skincare,
            review_count: 86,
            like_count: 149,
        },
        Product {
            id: 4,
            name: LocalizedName::new("벨벳 립스틱", "Velvet Lipstick"),
            sale_price: 28_000,
            original_price: 28_000,
            on_sale: false,
            category: ProductCategory::Makeup,
            review_count: 342,
            like_count: 760,
        },
        Product {
            id: 5,
            name: LocalizedName::new("실크 쿠션", "Silk Cushion"),
            sale_price: 42_000,
            original_price: 52_000,
            on_sale: true,
            category: ProductCategory::Makeup,
            review_count: 198,
            like_count: 415,
        },
        Product {
            id: 6,
            name: LocalizedName::new("진정 시트 마스크", "Calming Sheet Mask"),
            sale_price: 3_500,
            original_price: 4_000,
            on_sale: true,
            category: ProductCategory::Mask,
            review_count: 67,
            like_count: 92,
        },
        Product {
            id: 7,
            name: LocalizedName::new("콜라겐 나이트 마스크", "Collagen Night Mask"),
            sale_price: 32_000,
            original_price: 32_000,
            on_sale: false,
            category: ProductCategory::Mask,
            review_count: 51,
            like_count: 120,
        },
        Product {
            id: 8,
            name: LocalizedName::new("딥 클렌징 폼", "Deep Cleansing Foam"),
            sale_price: 18_000,
            original_price: 22_000,
            on_sale: true,
            category: ProductCategory::Cleansing,
            review_count: 174,
            like_count: 238,
        },
        Product {
            id: 9,
            name: LocalizedName::new("클렌징 오일", "Cleansing Oil"),
            sale_price: 26_000,
            original_price: 26_000,
            on_sale: false,
            category: ProductCategory::Cleansing,
            review_count: 93,
            like_count: 187,
        },
        Product {
            id: 10,
            name: LocalizedName::new("데일리 선크림", "Daily Sun Cream"),
            sale_price: 21_000,
            original_price: 24_000,
            on_sale: true,
            category: ProductCategory::Suncare,
            review_count: 267,
            like_count: 448,
        },
        Product {
            id: 11,
            name: LocalizedName::new("톤업 선쿠션", "Tone-up Sun Cushion"),
            sale_price: 29_000,
            original_price: 29_000,
            on_sale: false,
            category: ProductCategory::Suncare,
            review_count: 44,
            like_count: 75,
        },
    ]
}
