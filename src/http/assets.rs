/*
[INPUT]:  Page numbers, asset identifiers, and create/update payloads
[OUTPUT]: Typed asset entities and uniform paged listings
[POS]:    HTTP layer - asset endpoints
[UPDATE]: When adding new asset endpoints or changing query parameters
*/

use crate::http::{EzRentOutClient, Result};
use crate::types::responses::AssetsEnvelope;
use crate::types::{
    Asset, AssetCreateRequest, AssetResponse, AssetUpdateRequest, DeleteResponse, PagedResponse,
};
use reqwest::Method;

/// Fixed flags asset GETs carry so custom fields, documents and images are
/// included in the payload.
const ENRICHMENT_FLAGS: &str = "include_custom_fields=true&show_document_urls=true\
&show_image_urls=true&show_document_details=true";

impl EzRentOutClient {
    /// List assets, one page at a time.
    ///
    /// GET /assets.api?page={page}
    pub async fn get_all_assets(&self, page: u32) -> Result<PagedResponse<Asset>> {
        let endpoint = format!("/assets.api?page={page}&{ENRICHMENT_FLAGS}");
        let builder = self.api_request(Method::GET, &endpoint)?;
        let envelope: AssetsEnvelope = self.send_json(builder, "get all asset").await?;

        Ok(PagedResponse {
            data: envelope.assets.into_iter().map(Asset::backfill_id).collect(),
            total_pages: envelope.total_pages,
        })
    }

    /// Fetch a single asset.
    ///
    /// GET /assets/{id}.api
    pub async fn get_asset(&self, id: u64) -> Result<AssetResponse> {
        let endpoint = format!("/assets/{id}.api?{ENRICHMENT_FLAGS}");
        let builder = self.api_request(Method::GET, &endpoint)?;
        let action = format!("get asset with id {id}");
        let mut response: AssetResponse = self.send_json(builder, &action).await?;
        response.asset = response.asset.backfill_id();
        Ok(response)
    }

    /// Create an asset.
    ///
    /// POST /assets.api
    pub async fn create_asset(&self, req: &AssetCreateRequest) -> Result<AssetResponse> {
        let builder = self.api_request(Method::POST, "/assets.api")?.json(req);
        self.send_json(builder, "create asset").await
    }

    /// Update an asset.
    ///
    /// PUT /assets/{id}.api
    pub async fn update_asset(&self, id: u64, req: &AssetUpdateRequest) -> Result<AssetResponse> {
        let endpoint = format!("/assets/{id}.api");
        let builder = self.api_request(Method::PUT, &endpoint)?.json(req);
        let action = format!("update asset with id {id}");
        self.send_json(builder, &action).await
    }

    /// Delete an asset.
    ///
    /// DELETE /assets/{id}.api
    pub async fn delete_asset(&self, id: u64) -> Result<DeleteResponse> {
        let endpoint = format!("/assets/{id}.api");
        let builder = self.api_request(Method::DELETE, &endpoint)?;
        let action = format!("delete asset with id {id}");
        self.send_json(builder, &action).await
    }
}
