/*
[INPUT]:  None (health probe)
[OUTPUT]: API availability report
[POS]:    HTTP layer - status endpoint
[UPDATE]: When the status payload changes
*/

use crate::http::{EzRentOutClient, Result};
use crate::types::ApiStatus;
use reqwest::Method;

impl EzRentOutClient {
    /// Probe the remote API.
    ///
    /// GET /api_status.api
    pub async fn check_status(&self) -> Result<ApiStatus> {
        let builder = self.api_request(Method::GET, "/api_status.api")?;
        self.send_json(builder, "check API status").await
    }
}
