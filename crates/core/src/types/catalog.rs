//! Room and shop catalog types.
//!
//! All of these are backend-owned records and closed wire enums; the
//! client reads them and never mutates them.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// Room tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Regular,
    Premium,
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Regular => write!(f, "regular"),
            Self::Premium => write!(f, "premium"),
        }
    }
}

/// Billing package selected when a staff member opens a session.
///
/// Same tier names as [`RoomType`], but a distinct type: the package is
/// what gets billed, the room type is what the room physically is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BillingPackage {
    #[default]
    Regular,
    Premium,
}

impl std::fmt::Display for BillingPackage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Regular => write!(f, "regular"),
            Self::Premium => write!(f, "premium"),
        }
    }
}

impl std::str::FromStr for BillingPackage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(Self::Regular),
            "premium" => Ok(Self::Premium),
            _ => Err(format!("invalid package: {s}")),
        }
    }
}

/// Shop product category, one per menu tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    /// Food.
    #[default]
    Makanan,
    /// Drinks.
    Minuman,
    /// Snacks.
    Cemilan,
}

impl ProductCategory {
    /// All categories, in menu-tab order.
    pub const ALL: [Self; 3] = [Self::Makanan, Self::Minuman, Self::Cemilan];
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Makanan => write!(f, "makanan"),
            Self::Minuman => write!(f, "minuman"),
            Self::Cemilan => write!(f, "cemilan"),
        }
    }
}

impl std::str::FromStr for ProductCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "makanan" => Ok(Self::Makanan),
            "minuman" => Ok(Self::Minuman),
            "cemilan" => Ok(Self::Cemilan),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}

/// A shop product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    /// Unit price in the smallest currency unit.
    pub price: Price,
    /// Image URL; used by graphical front-ends, ignored by the CLI.
    pub image: String,
    pub category: ProductCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_round_trip() {
        for category in ProductCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{category}\""));
            let back: ProductCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
        assert!(serde_json::from_str::<ProductCategory>("\"dessert\"").is_err());
    }

    #[test]
    fn test_package_parse() {
        assert_eq!(
            "premium".parse::<BillingPackage>().unwrap(),
            BillingPackage::Premium
        );
        assert!("gold".parse::<BillingPackage>().is_err());
    }

    #[test]
    fn test_product_decodes_backend_shape() {
        let product: Product = serde_json::from_str(
            r#"{
                "id": 1,
                "title": "Nasi Goreng",
                "price": 15000,
                "image": "https://images.example/nasi-goreng",
                "category": "makanan"
            }"#,
        )
        .unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price, Price::new(15_000));
        assert_eq!(product.category, ProductCategory::Makanan);
    }
}
