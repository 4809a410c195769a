//! HTTP implementation of Store against the Billed backend
//!
//! Endpoints:
//! - `GET /bills` lists the bills of the authenticated user
//! - `POST /bills` uploads a receipt (multipart `file` + `email`) and returns
//!   `{fileUrl, key}`
//! - `PATCH /bills/{selector}` completes a draft with a JSON `BillUpdate`
//!
//! When local storage holds a token under the configured key it is sent as
//! a bearer token.

use crate::config::ApiConfig;
use crate::core::{
    Bill, BillsService, CreateBillRequest, CreatedBill, LocalStorage, Store, StoreError,
    UpdateBillRequest,
};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Store backed by the Billed REST API
#[derive(Clone)]
pub struct ApiStore {
    client: Client,
    base_url: String,
    token_key: String,
    local_storage: Arc<dyn LocalStorage>,
}

impl ApiStore {
    pub fn new(config: &ApiConfig, local_storage: Arc<dyn LocalStorage>) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token_key: config.token_key.clone(),
            local_storage,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.local_storage.get_item(&self.token_key) {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, StoreError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url = %response.url(), "bills API call failed");
            return Err(StoreError::Http {
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))
    }
}

impl Store for ApiStore {
    fn bills(&self) -> Arc<dyn BillsService> {
        Arc::new(self.clone())
    }
}

#[async_trait]
impl BillsService for ApiStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        tracing::debug!(base_url = %self.base_url, "listing bills");
        self.send(self.client.get(self.url("bills"))).await
    }

    async fn create(&self, request: CreateBillRequest) -> Result<CreatedBill, StoreError> {
        let file = request.data.file;
        tracing::debug!(file_name = %file.name, "uploading receipt");

        let mut part = Part::bytes(file.bytes).file_name(file.name.clone());
        if !file.mime_type.is_empty() {
            part = part
                .mime_str(&file.mime_type)
                .map_err(|e| StoreError::Transport(e.to_string()))?;
        }

        let mut form = Form::new().part("file", part);
        if let Some(email) = request.data.email {
            form = form.text("email", email);
        }

        // reqwest sets the multipart content type itself
        let created: CreatedBill = self
            .send(self.client.post(self.url("bills")).multipart(form))
            .await?;

        Ok(CreatedBill {
            file_name: created.file_name.or(Some(file.name)),
            ..created
        })
    }

    async fn update(&self, request: UpdateBillRequest) -> Result<Bill, StoreError> {
        tracing::debug!(selector = %request.selector, "updating bill");
        let path = format!("bills/{}", request.selector);
        self.send(self.client.patch(self.url(&path)).json(&request.data))
            .await
    }
}
