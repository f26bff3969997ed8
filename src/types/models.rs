/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{AssetState, OrderStatus};

/// A rentable/trackable inventory item.
///
/// EzRentOut returns far more columns than any one tenant uses; every field
/// outside the identifying ones is optional so that partial payloads decode.
/// Money amounts arrive as decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Asset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Tenant-visible sequence number; stands in for `id` when the API
    /// omits the numeric identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_num: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AssetState>,
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
    #[serde(
        default,
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub rent_collected: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_group_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_threshold: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkin_due_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_checked_out_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_checked_in_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_checked_out_to_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchased_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retired_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_model_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_free: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_for_sale: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_on_web_store: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rental_prices: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub document_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Asset {
    /// Some tenant payloads omit the numeric `id`; `sequence_num` is the
    /// documented fallback identifier.
    pub(crate) fn backfill_id(mut self) -> Self {
        if self.id.is_none() {
            self.id = self.sequence_num;
        }
        self
    }
}

/// Depreciation schedule entry attached to a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepreciationRate {
    pub depreciation_method_name: String,
    pub rate: Decimal,
}

/// Top-level asset classification category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Group {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_on_web_store: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden_on_web_store: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_depreciation_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_service_triage: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triage_completion_period: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triage_completion_period_basis: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depreciation_rates: Vec<DepreciationRate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Nested classification under a parent [`Group`]. `lft`/`rgt` are the
/// service's nested-set tree markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SubGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lft: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgt: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subgroup_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_on_web_store: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden_on_web_store: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triage_same_as_group: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Item returned by the unified group listing: top-level groups and
/// sub-groups come from different endpoints but share one page shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GroupEntry {
    Group(Group),
    SubGroup(SubGroup),
}

impl GroupEntry {
    pub fn id(&self) -> Option<u64> {
        match self {
            GroupEntry::Group(g) => g.id,
            GroupEntry::SubGroup(sg) => sg.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            GroupEntry::Group(g) => &g.name,
            GroupEntry::SubGroup(sg) => &sg.name,
        }
    }
}

/// A rental transaction linking an asset and a user over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub asset_id: u64,
    pub user_id: u64,
    pub start_date: String,
    pub end_date: String,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_backfill_id_from_sequence_num() {
        let asset = Asset {
            sequence_num: Some(731),
            name: "Trailer".to_string(),
            ..Asset::default()
        };
        assert_eq!(asset.backfill_id().id, Some(731));
    }

    #[test]
    fn test_asset_backfill_keeps_existing_id() {
        let asset = Asset {
            id: Some(12),
            sequence_num: Some(731),
            name: "Trailer".to_string(),
            ..Asset::default()
        };
        assert_eq!(asset.backfill_id().id, Some(12));
    }

    #[test]
    fn test_asset_decodes_sparse_payload() {
        let asset: Asset = serde_json::from_str(
            r#"{"id": 5, "name": "Generator", "description": null, "price": "120.50"}"#,
        )
        .unwrap();
        assert_eq!(asset.id, Some(5));
        assert_eq!(asset.description, None);
        assert_eq!(asset.price, Some("120.50".parse().unwrap()));
        assert!(asset.document_urls.is_empty());
    }

    #[test]
    fn test_sub_group_tree_markers() {
        let sub_group: SubGroup = serde_json::from_str(
            r#"{"id": 9, "name": "Excavators", "parent_id": 4, "lft": 2, "rgt": 3}"#,
        )
        .unwrap();
        assert_eq!(sub_group.parent_id, Some(4));
        assert_eq!(sub_group.lft, Some(2));
        assert_eq!(sub_group.rgt, Some(3));
    }
}
