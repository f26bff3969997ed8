/*
[INPUT]:  Order identifiers and create/update payloads
[OUTPUT]: Typed rental order entities
[POS]:    HTTP layer - order endpoints
[UPDATE]: When adding new order endpoints or changing order flow
*/

use crate::http::{EzRentOutClient, Result};
use crate::types::{DeleteResponse, OrderCreateRequest, OrderResponse, OrderUpdateRequest};
use reqwest::Method;

impl EzRentOutClient {
    /// Create a rental order.
    ///
    /// POST /orders.api
    pub async fn create_order(&self, req: &OrderCreateRequest) -> Result<OrderResponse> {
        let builder = self.api_request(Method::POST, "/orders.api")?.json(req);
        self.send_json(builder, "create order").await
    }

    /// Fetch a single order.
    ///
    /// GET /orders/{id}.api
    pub async fn get_order(&self, id: u64) -> Result<OrderResponse> {
        let endpoint = format!("/orders/{id}.api");
        let builder = self.api_request(Method::GET, &endpoint)?;
        let action = format!("get order with id {id}");
        self.send_json(builder, &action).await
    }

    /// Update an order.
    ///
    /// PUT /orders/{id}.api
    pub async fn update_order(&self, id: u64, req: &OrderUpdateRequest) -> Result<OrderResponse> {
        let endpoint = format!("/orders/{id}.api");
        let builder = self.api_request(Method::PUT, &endpoint)?.json(req);
        let action = format!("update order with id {id}");
        self.send_json(builder, &action).await
    }

    /// Delete an order.
    ///
    /// DELETE /orders/{id}.api
    pub async fn delete_order(&self, id: u64) -> Result<DeleteResponse> {
        let endpoint = format!("/orders/{id}.api");
        let builder = self.api_request(Method::DELETE, &endpoint)?;
        let action = format!("delete order with id {id}");
        self.send_json(builder, &action).await
    }
}
