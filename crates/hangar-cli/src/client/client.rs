use crate::pictures::{PictureFile, file_name_from_url, is_valid_image_url};
use crate::{CliClientResult, ClientError};

use hangar_core::{AnalyticsReport, NewOrder, Order, OrderUpdate, Reposition};

use std::time::Duration;

use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP client for the order REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

#[derive(Serialize)]
struct BatchRequest<'a> {
    orders: &'a [Reposition],
}

#[derive(Deserialize)]
struct PictureList {
    #[serde(default)]
    pictures: Vec<PictureEntry>,
}

#[derive(Deserialize)]
struct PictureEntry {
    filename: String,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:5000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Create a client whose requests give up after `timeout`
    pub fn with_timeout(base_url: &str, timeout: Duration) -> CliClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// API URL made of the base URL plus percent-encoded path segments
    fn endpoint(&self, segments: &[&str]) -> CliClientResult<Url> {
        let mut url =
            Url::parse(&self.base_url).map_err(|_| ClientError::invalid_url(&self.base_url))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::invalid_url(&self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Build a request against the API base URL
    fn request(&self, method: Method, segments: &[&str]) -> CliClientResult<RequestBuilder> {
        let url = self.endpoint(segments)?;
        debug!("{} {}", method, url);
        Ok(self
            .client
            .request(method, url)
            .header(ACCEPT, "application/json"))
    }

    /// Send a request, turning non-2xx answers into API errors
    async fn send(&self, req: RequestBuilder) -> CliClientResult<Response> {
        let response = req.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let parsed = serde_json::from_str::<Value>(&body).ok();

        let code = parsed
            .as_ref()
            .and_then(|v| v.pointer("/error/code"))
            .and_then(|v| v.as_str())
            .map(String::from)
            .unwrap_or_else(|| status.as_u16().to_string());

        let message = parsed
            .as_ref()
            .and_then(|v| {
                v.pointer("/error/message")
                    .or_else(|| v.get("message"))
                    .or_else(|| v.get("error"))
            })
            .and_then(|v| v.as_str())
            .map(String::from)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });

        Err(ClientError::api_error(code, message))
    }

    /// Execute request and decode the JSON body
    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> CliClientResult<T> {
        let body = self.send(req).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Execute request whose body is informational; an empty body is `null`
    async fn execute_value(&self, req: RequestBuilder) -> CliClientResult<Value> {
        let body = self.send(req).await?.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }

    // =========================================================================
    // Order Operations
    // =========================================================================

    /// List every order that is not archived
    pub async fn list_orders(&self) -> CliClientResult<Vec<Order>> {
        let req = self.request(Method::GET, &["api", "orders"])?;
        self.execute(req).await
    }

    /// List archived orders
    pub async fn list_done_orders(&self) -> CliClientResult<Vec<Order>> {
        let req = self.request(Method::GET, &["api", "orders", "done"])?;
        self.execute(req).await
    }

    /// Create an order from a validated draft
    pub async fn create_order(&self, order: &NewOrder) -> CliClientResult<Value> {
        let req = self.request(Method::POST, &["api", "orders"])?.json(order);
        self.execute_value(req).await
    }

    /// Replace name, planes and priority of an order
    pub async fn update_order(&self, id: &str, update: &OrderUpdate) -> CliClientResult<Value> {
        let req = self
            .request(Method::PUT, &["api", "orders", id])?
            .json(update);
        self.execute_value(req).await
    }

    /// Permanently delete an order
    pub async fn delete_order(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &["api", "orders", id])?;
        self.execute_value(req).await
    }

    /// Archive an order
    pub async fn mark_done(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::PATCH, &["api", "orders", id, "done"])?;
        self.execute_value(req).await
    }

    /// Bring an archived order back to the board
    pub async fn mark_undone(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::PATCH, &["api", "orders", id, "undone"])?;
        self.execute_value(req).await
    }

    /// Commit status and index of every order in one call
    pub async fn batch_reposition(&self, orders: &[Reposition]) -> CliClientResult<Value> {
        let req = self
            .request(Method::PUT, &["api", "orders"])?
            .json(&BatchRequest { orders });
        self.execute_value(req).await
    }

    /// Pre-aggregated statistics
    pub async fn analytics(&self) -> CliClientResult<AnalyticsReport> {
        let req = self.request(Method::GET, &["api", "orders", "analytics"])?;
        self.execute(req).await
    }

    // =========================================================================
    // Picture Operations
    // =========================================================================

    /// File names of an order's pictures
    pub async fn list_pictures(&self, order_id: &str) -> CliClientResult<Vec<String>> {
        let req = self.request(Method::GET, &["api", "orders", order_id, "pics"])?;
        let list: PictureList = self.execute(req).await?;
        Ok(list
            .pictures
            .into_iter()
            .map(|picture| picture.filename)
            .collect())
    }

    /// Delete one picture of an order
    pub async fn delete_picture(&self, order_id: &str, filename: &str) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &["api", "orders", order_id, "pics", filename])?;
        self.execute_value(req).await
    }

    /// Multipart upload, one `pictures` part per file
    pub async fn upload_pictures(
        &self,
        order_id: &str,
        files: &[PictureFile],
    ) -> CliClientResult<Value> {
        let mut form = Form::new();
        for file in files {
            let part = Part::bytes(file.bytes.clone())
                .file_name(file.name.clone())
                .mime_str(&file.content_type)?;
            form = form.part("pictures", part);
        }

        let req = self
            .request(Method::POST, &["api", "orders", order_id, "pics"])?
            .multipart(form);
        self.execute_value(req).await
    }

    /// Public address of a stored picture
    pub fn picture_url(&self, filename: &str) -> CliClientResult<String> {
        Ok(self
            .endpoint(&["api", "orders", "pics", filename])?
            .to_string())
    }

    /// Download a remote image into an uploadable file.
    ///
    /// The URL must look like an image link and the response must declare
    /// an `image/*` content type.
    pub async fn fetch_image(&self, url: &str) -> CliClientResult<PictureFile> {
        if !is_valid_image_url(url) {
            return Err(ClientError::picture(
                "Please enter a valid image URL (.jpg, .png, .gif, etc.)",
            ));
        }

        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::picture(format!(
                "Failed to load image from URL ({})",
                status
            )));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(|v| v.trim().to_string())
            .unwrap_or_default();

        if !content_type.starts_with("image/") {
            return Err(ClientError::picture("URL does not point to a valid image"));
        }

        let bytes = response.bytes().await?;
        Ok(PictureFile::new(
            &file_name_from_url(url),
            &content_type,
            bytes.to_vec(),
        ))
    }
}
