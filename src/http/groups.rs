/*
[INPUT]:  Page numbers, optional parent group ids, create/update payloads
[OUTPUT]: Uniform paged group/sub-group listings and raw mutation bodies
[POS]:    HTTP layer - group classification endpoints
[UPDATE]: When adding new group endpoints or changing parent routing
*/

use crate::http::{EzRentOutClient, Result};
use crate::types::responses::{GroupsEnvelope, SubGroupsEnvelope};
use crate::types::{GroupCreateRequest, GroupEntry, GroupUpdateRequest, PagedResponse};
use reqwest::Method;

impl EzRentOutClient {
    /// List classification groups, or the sub-groups of `parent_id` when
    /// one is given. Both listings unify to the same page shape.
    ///
    /// GET /assets/classification_view.api?page={page}
    /// GET /groups/get_sub_groups.api?group_id={parent_id}
    pub async fn get_all_groups(
        &self,
        page: u32,
        parent_id: Option<u64>,
    ) -> Result<PagedResponse<GroupEntry>> {
        match parent_id {
            Some(parent) => {
                let endpoint = format!("/groups/get_sub_groups.api?group_id={parent}");
                let builder = self.api_request(Method::GET, &endpoint)?;
                let envelope: SubGroupsEnvelope =
                    self.send_json(builder, "get all group").await?;
                Ok(PagedResponse {
                    data: envelope
                        .sub_groups
                        .into_iter()
                        .map(GroupEntry::SubGroup)
                        .collect(),
                    total_pages: envelope.total_pages,
                })
            }
            None => {
                let endpoint = format!(
                    "/assets/classification_view.api?page={page}&show_document_details=true"
                );
                let builder = self.api_request(Method::GET, &endpoint)?;
                let envelope: GroupsEnvelope = self.send_json(builder, "get all group").await?;
                Ok(PagedResponse {
                    data: envelope.groups.into_iter().map(GroupEntry::Group).collect(),
                    total_pages: envelope.total_pages,
                })
            }
        }
    }

    /// Create a group, or a sub-group under `parent_id` when one is given.
    ///
    /// POST /groups.api                         body {"group": ...}
    /// POST /groups/{parent_id}/sub_groups.api  body {"sub_group": ...}
    ///
    /// The service echoes a different envelope for each branch, so the raw
    /// body is returned as-is.
    pub async fn create_group(
        &self,
        req: &GroupCreateRequest,
        parent_id: Option<u64>,
    ) -> Result<serde_json::Value> {
        let (endpoint, body) = match parent_id {
            Some(parent) => (
                format!("/groups/{parent}/sub_groups.api"),
                serde_json::json!({ "sub_group": req }),
            ),
            None => (
                "/groups.api".to_string(),
                serde_json::json!({ "group": req }),
            ),
        };

        let builder = self.api_request(Method::POST, &endpoint)?.json(&body);
        self.send_json(builder, "create group").await
    }

    /// Update a group.
    ///
    /// PUT /groups/{id}.api  body {"group": ...}
    ///
    /// Sub-groups are updated through the same flat endpoint; the service's
    /// parent-scoped `/groups/{parent}/sub_groups/{id}.api` route is not
    /// used here.
    pub async fn update_group(
        &self,
        id: u64,
        req: &GroupUpdateRequest,
    ) -> Result<serde_json::Value> {
        let endpoint = format!("/groups/{id}.api");
        let body = serde_json::json!({ "group": req });
        let builder = self.api_request(Method::PUT, &endpoint)?.json(&body);
        let action = format!("update group with id {id}");
        self.send_json(builder, &action).await
    }
}
