/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{AssetState, OrderStatus};
use super::models::DepreciationRate;

/// Payload for POST /assets.api. Only `name` is required by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AssetCreateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(
        default,
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
    #[serde(
        default,
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub sale_price: Option<Decimal>,
    #[serde(
        default,
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub salvage_value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_group_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AssetState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchased_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_threshold: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_free: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_for_sale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_on_web_store: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_model_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<serde_json::Value>,
}

/// Payload for PUT /assets/{id}.api; every field optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AssetUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(
        default,
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
    #[serde(
        default,
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub sale_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_group_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AssetState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_free: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_for_sale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_on_web_store: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GroupCreateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depreciation_rates: Option<Vec<DepreciationRate>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GroupUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_on_web_store: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_on_web_store: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_depreciation_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depreciation_rates: Option<Vec<DepreciationRate>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreateRequest {
    pub asset_id: u64,
    pub user_id: u64,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OrderUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_create_request_skips_absent_fields() {
        let req = GroupCreateRequest {
            name: "Heavy Equipment".to_string(),
            ..GroupCreateRequest::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Heavy Equipment"}));
    }

    #[test]
    fn test_asset_create_request_serializes_price_as_string() {
        let req = AssetCreateRequest {
            name: "Scissor Lift".to_string(),
            price: Some("45.00".parse().unwrap()),
            ..AssetCreateRequest::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Scissor Lift", "price": "45.00"})
        );
    }
}
