/*
[INPUT]:  Page numbers and user identifiers
[OUTPUT]: Typed user entities and uniform paged listings
[POS]:    HTTP layer - user endpoints
[UPDATE]: When adding new user endpoints or changing query parameters
*/

use crate::http::{EzRentOutClient, Result};
use crate::types::responses::UsersEnvelope;
use crate::types::{PagedResponse, User, UserResponse};
use reqwest::Method;

impl EzRentOutClient {
    /// List users, one page at a time.
    ///
    /// GET /users.api?page={page}
    pub async fn get_all_users(&self, page: u32) -> Result<PagedResponse<User>> {
        let endpoint = format!("/users.api?page={page}");
        let builder = self.api_request(Method::GET, &endpoint)?;
        let envelope: UsersEnvelope = self.send_json(builder, "get all user").await?;

        Ok(PagedResponse {
            data: envelope.users,
            total_pages: envelope.total_pages,
        })
    }

    /// Fetch a single user.
    ///
    /// GET /users/{id}.api
    pub async fn get_user(&self, id: u64) -> Result<UserResponse> {
        let endpoint = format!("/users/{id}.api");
        let builder = self.api_request(Method::GET, &endpoint)?;
        let action = format!("get user with id {id}");
        self.send_json(builder, &action).await
    }
}
