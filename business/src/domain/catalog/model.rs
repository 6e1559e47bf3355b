use serde::{Deserialize, Serialize};

/// Display languages supported by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Korean,
    English,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Korean => write!(f, "ko"),
            Language::English => write!(f, "en"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ko" => Ok(Language::Korean),
            "en" => Ok(Language::English),
            _ => Err(format!("Invalid language: {}", s)),
        }
    }
}

/// Per-language display name of a product. Korean is the brand's home
/// market and acts as the fallback when a translation is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedName {
    pub ko: String,
    pub en: String,
}

impl LocalizedName {
    pub fn new(ko: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ko: ko.into(),
            en: en.into(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Korean => &self.ko,
            Language::English if self.en.is_empty() => &self.ko,
            Language::English => &self.en,
        }
    }
}

/// Merchandising categories of the brand's catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Skincare,
    Makeup,
    Mask,
    Cleansing,
    Suncare,
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductCategory::Skincare => write!(f, "skincare"),
            ProductCategory::Makeup => write!(f, "makeup"),
            ProductCategory::Mask => write!(f, "mask"),
            ProductCategory::Cleansing => write!(f, "cleansing"),
            ProductCategory::Suncare => write!(f, "suncare"),
        }
    }
}

impl std::str::FromStr for ProductCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skincare" => Ok(ProductCategory::Skincare),
            "makeup" => Ok(ProductCategory::Makeup),
            "mask" => Ok(ProductCategory::Mask),
            "cleansing" => Ok(ProductCategory::Cleansing),
            "suncare" => Ok(ProductCategory::Suncare),
            _ => Err(format!("Invalid product category: {}", s)),
        }
    }
}

/// A purchasable item. Catalog products are immutable for the lifetime of
/// the process; prices are integral KRW amounts.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: LocalizedName,
    pub sale_price: u64,
    pub original_price: u64,
    pub on_sale: bool,
    pub category: ProductCategory,
    pub review_count: u32,
    pub like_count: u32,
}

impl Product {
    /// Discount against the original price, in whole percent, rounded down.
    pub fn discount_percent(&self) -> u32 {
        if self.original_price == 0 || self.sale_price >= self.original_price {
            return 0;
        }
        let discounted = self.original_price - self.sale_price;
        (discounted * 100 / self.original_price) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn product(sale_price: u64, original_price: u64) -> Product {
        Product {
            id: 1,
            name: LocalizedName::new("수분 크림", "Hydra Cream"),
            sale_price,
            original_price,
            on_sale: true,
            category: ProductCategory::Skincare,
            review_count: 12,
            like_count: 40,
        }
    }

    #[test]
    fn should_return_translation_for_requested_language() {
        let name = LocalizedName::new("수분 크림", "Hydra Cream");

        assert_eq!(name.get(Language::Korean), "수분 크림");
        assert_eq!(name.get(Language::English), "Hydra Cream");
    }

    #[test]
    fn should_fall_back_to_korean_when_translation_missing() {
        let name = LocalizedName::new("수분 크림", "");

        assert_eq!(name.get(Language::English), "수분 크림");
    }

    #[test]
    fn should_round_trip_language_through_string() {
        for language in [Language::Korean, Language::English] {
            assert_eq!(Language::from_str(&language.to_string()), Ok(language));
        }
    }

    #[test]
    fn should_round_trip_category_through_string() {
        let category = ProductCategory::Cleansing;

        assert_eq!(
            ProductCategory::from_str(&category.to_string()),
            Ok(ProductCategory::Cleansing)
        );
    }

    #[test]
    fn should_reject_unknown_category_string() {
        assert!(ProductCategory::from_str("perfume").is_err());
    }

    #[test]
    fn should_compute_discount_percent() {
        assert_eq!(product(90_000, 120_000).discount_percent(), 25);
    }

    #[test]
    fn should_report_zero_discount_when_not_discounted() {
        assert_eq!(product(120_000, 120_000).discount_percent(), 0);
        assert_eq!(product(120_000, 0).discount_percent(), 0);
    }
}
