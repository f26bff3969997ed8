/*
[INPUT]:  Page numbers
[OUTPUT]: Typed location entities in uniform paged listings
[POS]:    HTTP layer - location endpoints
[UPDATE]: When adding new location endpoints
*/

use crate::http::{EzRentOutClient, Result};
use crate::types::responses::LocationsEnvelope;
use crate::types::{Location, PagedResponse};
use reqwest::Method;

impl EzRentOutClient {
    /// List locations, one page at a time.
    ///
    /// GET /locations.api?page={page}
    pub async fn get_all_locations(&self, page: u32) -> Result<PagedResponse<Location>> {
        let endpoint = format!("/locations.api?page={page}");
        let builder = self.api_request(Method::GET, &endpoint)?;
        let envelope: LocationsEnvelope = self.send_json(builder, "get all location").await?;

        Ok(PagedResponse {
            data: envelope.locations,
            total_pages: envelope.total_pages,
        })
    }
}
