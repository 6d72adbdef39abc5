//! The closed registry of entity kinds extensions can attach to.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A commerce entity kind that display, form and link contributions key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CustomFieldModel {
    Order,
    Product,
    ProductVariant,
    ProductCategory,
    ProductCollection,
    ProductTag,
    ProductType,
    PriceList,
    Customer,
    CustomerGroup,
    Promotion,
    Campaign,
    Region,
    SalesChannel,
    ShippingProfile,
    StockLocation,
    InventoryItem,
    Store,
    User,
}

impl CustomFieldModel {
    /// Every registered model, in declaration order.
    pub const ALL: [CustomFieldModel; 19] = [
        Self::Order,
        Self::Product,
        Self::ProductVariant,
        Self::ProductCategory,
        Self::ProductCollection,
        Self::ProductTag,
        Self::ProductType,
        Self::PriceList,
        Self::Customer,
        Self::CustomerGroup,
        Self::Promotion,
        Self::Campaign,
        Self::Region,
        Self::SalesChannel,
        Self::ShippingProfile,
        Self::StockLocation,
        Self::InventoryItem,
        Self::Store,
        Self::User,
    ];

    /// Returns the canonical (kebab-case) name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Order => "order",
            Self::Product => "product",
            Self::ProductVariant => "product-variant",
            Self::ProductCategory => "product-category",
            Self::ProductCollection => "product-collection",
            Self::ProductTag => "product-tag",
            Self::ProductType => "product-type",
            Self::PriceList => "price-list",
            Self::Customer => "customer",
            Self::CustomerGroup => "customer-group",
            Self::Promotion => "promotion",
            Self::Campaign => "campaign",
            Self::Region => "region",
            Self::SalesChannel => "sales-channel",
            Self::ShippingProfile => "shipping-profile",
            Self::StockLocation => "stock-location",
            Self::InventoryItem => "inventory-item",
            Self::Store => "store",
            Self::User => "user",
        }
    }

    /// Parses a model name. Accepts the canonical kebab form and the
    /// snake form used by backend entity names (`product_tag`).
    pub fn parse(s: &str) -> Result<Self, Error> {
        let normalized = s.trim().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|model| model.as_str() == normalized)
            .ok_or_else(|| Error::UnknownModel(s.to_string()))
    }
}

impl fmt::Display for CustomFieldModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomFieldModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
