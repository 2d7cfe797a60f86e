use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::{AppError, Result};
use crate::modules::auth::{Credentials, Session};
use crate::modules::orders::{Order, OrderUpdate};

/// Remote API response for endpoints where non-2xx statuses are expected
/// test outcomes rather than client errors.
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    /// The `message` field most ENSEK response bodies carry
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }

    /// Decode the body into a typed value
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.body.clone()).map_err(AppError::from)
    }
}

/// HTTP client for the ENSEK energy-trading API.
///
/// All operations live under the `/ENSEK` base path. Calls that the remote
/// service gates on authorization take an explicit optional [`Session`];
/// transport and JSON-decoding failures are the only errors, while remote
/// rejections come back as an [`ApiResponse`] for the caller to assert on.
pub struct EnsekClient {
    client: Client,
    base_url: String,
}

impl EnsekClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(request: RequestBuilder, session: Option<&Session>) -> RequestBuilder {
        match session {
            Some(session) => request.bearer_auth(session.token()),
            None => request,
        }
    }

    async fn finish(request: RequestBuilder) -> Result<ApiResponse> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        // Error statuses sometimes come with empty or non-JSON bodies
        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::Null)
        };
        tracing::debug!(status = status.as_u16(), "ENSEK response received");
        Ok(ApiResponse { status, body })
    }

    /// GET /ENSEK/energy
    pub async fn energy(&self) -> Result<ApiResponse> {
        Self::finish(self.client.get(self.url("/ENSEK/energy"))).await
    }

    /// GET /ENSEK/orders
    pub async fn orders(&self) -> Result<ApiResponse> {
        Self::finish(self.client.get(self.url("/ENSEK/orders"))).await
    }

    /// GET /ENSEK/orders decoded into typed orders; non-200 is an error here
    pub async fn orders_typed(&self) -> Result<Vec<Order>> {
        let response = self.orders().await?;
        if response.status != StatusCode::OK {
            return Err(AppError::Verification(format!(
                "GET /ENSEK/orders returned {}",
                response.status
            )));
        }
        response.json()
    }

    /// GET /ENSEK/orders/{guid}
    pub async fn order(&self, guid: &str, session: Option<&Session>) -> Result<ApiResponse> {
        let request = self.client.get(self.url(&format!("/ENSEK/orders/{guid}")));
        Self::finish(Self::bearer(request, session)).await
    }

    /// PUT /ENSEK/orders/{guid}
    pub async fn update_order(
        &self,
        guid: &str,
        update: &OrderUpdate,
        session: Option<&Session>,
    ) -> Result<ApiResponse> {
        let request = self
            .client
            .put(self.url(&format!("/ENSEK/orders/{guid}")))
            .json(update);
        Self::finish(Self::bearer(request, session)).await
    }

    /// DELETE /ENSEK/orders/{guid}
    pub async fn delete_order(&self, guid: &str, session: Option<&Session>) -> Result<ApiResponse> {
        let request = self
            .client
            .delete(self.url(&format!("/ENSEK/orders/{guid}")));
        Self::finish(Self::bearer(request, session)).await
    }

    /// PUT /ENSEK/buy/{energy_id}/{quantity}
    pub async fn buy(&self, energy_id: u32, quantity: u32) -> Result<ApiResponse> {
        self.buy_raw(&energy_id.to_string(), &quantity.to_string())
            .await
    }

    /// PUT /ENSEK/buy with arbitrary path segments, for malformed-input tests
    pub async fn buy_raw(&self, energy_id: &str, quantity: &str) -> Result<ApiResponse> {
        let request = self
            .client
            .put(self.url(&format!("/ENSEK/buy/{energy_id}/{quantity}")));
        Self::finish(request).await
    }

    /// POST /ENSEK/login, exchanging credentials for a bearer session
    pub async fn login(&self, credentials: &Credentials) -> Result<Session> {
        let request = self.client.post(self.url("/ENSEK/login")).json(credentials);
        let response = Self::finish(request).await?;

        if response.status != StatusCode::OK {
            return Err(AppError::Unauthorized(format!(
                "login failed with status {}",
                response.status
            )));
        }

        let token = response
            .body
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                AppError::Unauthorized("login response missing access_token".to_string())
            })?;

        Ok(Session::new(token))
    }

    /// POST /ENSEK/reset, the token-gated administrative reset
    pub async fn reset(&self, session: &Session) -> Result<ApiResponse> {
        let request = self
            .client
            .post(self.url("/ENSEK/reset"))
            .bearer_auth(session.token());
        Self::finish(request).await
    }
}
