use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An inventory item owned by exactly one account. `(owner_id, sku)` is
/// unique; ownership is permanent and non-transferable.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub sku: String,
    pub image_url: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to persist a new product, stamped with its owner.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub owner_id: Uuid,
    pub name: String,
    pub kind: String,
    pub sku: String,
    pub image_url: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_as_type() {
        let product = Product {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            name: "Widget".to_string(),
            kind: "hardware".to_string(),
            sku: "SKU-1".to_string(),
            image_url: "https://example.com/w.png".to_string(),
            description: None,
            quantity: 5,
            price: Decimal::new(1000, 2),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["type"], "hardware");
        assert!(json.get("kind").is_none());
    }
}
