//! Products Data

use std::str::FromStr;

use serde::Deserialize;
use smallvec::SmallVec;
use thiserror::Error;

use crate::domain::{categories::records::CategoryUuid, products::records::ProductUuid};

/// Product type used when none is given.
pub const DEFAULT_PRODUCT_TYPE: &str = "general";

/// Editable product fields, shared by create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    pub name: String,
    pub description: Option<String>,
    pub price: u64,
    pub sale_price: Option<u64>,
    pub category_uuid: Option<CategoryUuid>,
    pub image_url: Option<String>,
    pub stock_quantity: u32,
    pub product_type: Option<String>,
    pub is_new: bool,
    pub is_sale: bool,
    pub sizes: SmallVec<[String; 5]>,
}

impl ProductDetails {
    /// Trim sizes, dropping blank entries, and resolve the product type.
    #[must_use]
    pub fn normalised(mut self) -> Self {
        self.sizes = self
            .sizes
            .into_iter()
            .map(|size| size.trim().to_string())
            .filter(|size| !size.is_empty())
            .collect();

        self.product_type = Some(self.product_type_or_default().to_string());

        self
    }

    /// The product type, or [`DEFAULT_PRODUCT_TYPE`] when unset or blank.
    pub fn product_type_or_default(&self) -> &str {
        self.product_type
            .as_deref()
            .map(str::trim)
            .filter(|product_type| !product_type.is_empty())
            .unwrap_or(DEFAULT_PRODUCT_TYPE)
    }
}

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub details: ProductDetails,
}

/// Storefront collections a shopper can browse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    /// A handful of active products for the landing page.
    #[default]
    Featured,
    New,
    Men,
    Women,
    Sale,
}

/// Number of products shown in the featured collection.
pub const FEATURED_LIMIT: u32 = 6;

impl Collection {
    /// Filter selecting this collection's products.
    pub fn filter(self) -> ProductFilter {
        let active = ProductFilter {
            active_only: true,
            ..ProductFilter::default()
        };

        match self {
            Self::Featured => ProductFilter {
                limit: Some(FEATURED_LIMIT),
                ..active
            },
            Self::New => ProductFilter {
                new_only: true,
                ..active
            },
            Self::Men => ProductFilter {
                product_type: Some("men".to_string()),
                ..active
            },
            Self::Women => ProductFilter {
                product_type: Some("women".to_string()),
                ..active
            },
            Self::Sale => ProductFilter {
                on_sale: true,
                ..active
            },
        }
    }
}

/// Collection name that is not one of the storefront collections.
#[derive(Debug, Error)]
#[error("unknown collection: {0}")]
pub struct UnknownCollection(pub String);

impl FromStr for Collection {
    type Err = UnknownCollection;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "featured" => Ok(Self::Featured),
            "new" => Ok(Self::New),
            "men" => Ok(Self::Men),
            "women" => Ok(Self::Women),
            "sale" => Ok(Self::Sale),
            _ => Err(UnknownCollection(value.to_string())),
        }
    }
}

/// Equality predicates applied when listing products; results are newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub active_only: bool,
    pub product_type: Option<String>,
    pub on_sale: bool,
    pub new_only: bool,
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::*;

    fn details() -> ProductDetails {
        ProductDetails {
            name: "Logo Tee".to_string(),
            description: None,
            price: 25_00,
            sale_price: None,
            category_uuid: None,
            image_url: None,
            stock_quantity: 3,
            product_type: None,
            is_new: false,
            is_sale: false,
            sizes: smallvec![],
        }
    }

    #[test]
    fn normalised_trims_and_drops_blank_sizes() {
        let details = ProductDetails {
            sizes: smallvec![" S".to_string(), String::new(), "M ".to_string(), "  ".to_string()],
            ..details()
        }
        .normalised();

        assert_eq!(details.sizes.as_slice(), ["S", "M"]);
    }

    #[test]
    fn normalised_defaults_blank_product_type() {
        let details = ProductDetails {
            product_type: Some("   ".to_string()),
            ..details()
        }
        .normalised();

        assert_eq!(details.product_type.as_deref(), Some(DEFAULT_PRODUCT_TYPE));
    }

    #[test]
    fn women_collection_filters_active_women_products() {
        let filter = Collection::Women.filter();

        assert!(filter.active_only);
        assert_eq!(filter.product_type.as_deref(), Some("women"));
        assert!(!filter.on_sale);
        assert_eq!(filter.limit, None);
    }

    #[test]
    fn featured_collection_is_limited() {
        assert_eq!(Collection::Featured.filter().limit, Some(FEATURED_LIMIT));
    }

    #[test]
    fn collection_names_parse_ignoring_case() {
        assert_eq!("Women".parse::<Collection>().ok(), Some(Collection::Women));
        assert!("outlet".parse::<Collection>().is_err());
    }

    #[test]
    fn sale_collection_requires_sale_flag() {
        let filter = Collection::Sale.filter();

        assert!(filter.active_only && filter.on_sale);
    }
}
