/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::models::{Asset, Group, Location, Order, SubGroup, User};

/// Uniform page shape presented to callers after the endpoint-specific
/// wire key (`assets`, `groups`, `sub_groups`, ...) has been unwrapped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    pub total_pages: u32,
}

// Wire envelopes. The service keys each listing by entity name alongside
// the page count; these stay internal and are flattened into PagedResponse.

#[derive(Debug, Deserialize)]
pub(crate) struct AssetsEnvelope {
    pub assets: Vec<Asset>,
    pub total_pages: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UsersEnvelope {
    pub users: Vec<User>,
    pub total_pages: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GroupsEnvelope {
    pub groups: Vec<Group>,
    pub total_pages: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SubGroupsEnvelope {
    pub sub_groups: Vec<SubGroup>,
    pub total_pages: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LocationsEnvelope {
    pub locations: Vec<Location>,
    pub total_pages: u32,
}

/// Single-asset envelope; the service denormalizes a few display names
/// alongside the entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetResponse {
    pub asset: Asset,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub order: Order,
}

/// Body of DELETE responses; tenants differ on the exact shape, so both
/// fields are lenient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DeleteResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// GET /api_status.api body. Keeps any extra tenant fields around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ApiStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
