// src/services/rest_client.rs
// DOCUMENTATION: REST document store client
// PURPOSE: Handle communication with the JSON document store and the image upload endpoint

use crate::config::Config;
use crate::errors::{SyncError, SyncResult};
use crate::models::{ImageFile, UploadedImage};
use crate::services::document_store::{
    validate_key, DocumentStore, ImageUploader, ListQuery, RecordMap,
};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;

/// REST client for the remote document store
/// DOCUMENTATION: Collections live at `{base}/{collection}.json`, records at
/// `{base}/{collection}/{id}.json`. No auth headers are attached.
#[derive(Clone)]
pub struct RestDocumentStore {
    /// HTTP client for making requests
    client: Client,
    /// Base URL of the document store
    base_url: String,
    /// Image upload endpoint
    upload_url: String,
}

/// Response body of a POST to a collection
#[derive(Debug, Deserialize)]
struct InsertResponse {
    /// Generated key of the new record
    name: String,
}

impl RestDocumentStore {
    /// Create a new client
    pub fn new(client: Client, base_url: impl Into<String>, upload_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            upload_url: upload_url.into(),
        }
    }

    pub fn from_config(client: Client, config: &Config) -> Self {
        Self::new(client, config.store_url.clone(), config.upload_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}.json", self.base_url, collection)
    }

    fn record_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}/{}.json", self.base_url, collection, id)
    }

    /// Pass non-2xx responses through as `SyncError::Status`
    async fn check_status(response: Response) -> SyncResult<Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::error!("Document store error {}: {}", status, body);
        Err(status_error(status, body))
    }

    async fn send(request: reqwest::RequestBuilder) -> SyncResult<Response> {
        let response = request.send().await.map_err(|e| {
            log::error!("Document store request failed: {}", e);
            SyncError::Transport(format!("Request failed: {}", e))
        })?;
        Self::check_status(response).await
    }
}

/// Non-2xx response, status and body passed through unchanged
fn status_error(status: StatusCode, body: String) -> SyncError {
    SyncError::Status {
        status: status.as_u16(),
        body,
    }
}

/// `orderBy` / `equalTo` parameters; the store expects JSON string literals
fn query_params(query: &ListQuery) -> SyncResult<[(&'static str, String); 2]> {
    Ok([
        ("orderBy", serde_json::to_string(&query.order_by)?),
        ("equalTo", serde_json::to_string(&query.equal_to)?),
    ])
}

/// Collection body: `null` is an empty collection, anything but an object is malformed
fn records_from_body(collection: &str, body: Value) -> SyncResult<RecordMap> {
    match body {
        Value::Null => Ok(RecordMap::new()),
        Value::Object(records) => Ok(records),
        other => Err(SyncError::Decode(format!(
            "expected an object for collection '{}', got {}",
            collection, other
        ))),
    }
}

#[async_trait]
impl DocumentStore for RestDocumentStore {
    async fn list(&self, collection: &str, query: Option<&ListQuery>) -> SyncResult<RecordMap> {
        let url = self.collection_url(collection);
        let mut request = self.client.get(&url);

        if let Some(query) = query {
            request = request.query(&query_params(query)?);
        }

        log::debug!("GET {} (query: {:?})", url, query);
        let body: Value = Self::send(request).await?.json().await?;
        records_from_body(collection, body)
    }

    async fn get(&self, collection: &str, id: &str) -> SyncResult<Value> {
        validate_key(id)?;
        let url = self.record_url(collection, id);

        log::debug!("GET {}", url);
        let body: Value = Self::send(self.client.get(&url)).await?.json().await?;
        Ok(body)
    }

    async fn insert(&self, collection: &str, record: Value) -> SyncResult<String> {
        let url = self.collection_url(collection);

        log::debug!("POST {}", url);
        let created: InsertResponse = Self::send(self.client.post(&url).json(&record))
            .await?
            .json()
            .await?;

        log::info!("Created {}/{}", collection, created.name);
        Ok(created.name)
    }

    async fn replace(&self, collection: &str, id: &str, record: Value) -> SyncResult<()> {
        validate_key(id)?;
        let url = self.record_url(collection, id);

        log::debug!("PUT {}", url);
        Self::send(self.client.put(&url).json(&record)).await?;
        Ok(())
    }

    async fn remove(&self, collection: &str, id: &str) -> SyncResult<()> {
        validate_key(id)?;
        let url = self.record_url(collection, id);

        log::debug!("DELETE {}", url);
        Self::send(self.client.delete(&url)).await?;
        Ok(())
    }
}

#[async_trait]
impl ImageUploader for RestDocumentStore {
    async fn upload_image(&self, image: ImageFile) -> SyncResult<UploadedImage> {
        let size = image.bytes.len();
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name.clone())
            .mime_str(&image.content_type)
            .map_err(|e| SyncError::InvalidInput(format!("content type: {}", e)))?;
        let form = Form::new().part("image", part);

        log::debug!("POST {} ({} bytes, {})", self.upload_url, size, image.file_name);
        let uploaded: UploadedImage = Self::send(self.client.post(&self.upload_url).multipart(form))
            .await?
            .json()
            .await?;

        log::info!("Uploaded image {} -> {}", image.file_name, uploaded.image_path);
        Ok(uploaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> RestDocumentStore {
        RestDocumentStore::new(
            Client::new(),
            "https://example.firebaseio.com/",
            "https://uploads.example.com/storeImage",
        )
    }

    #[test]
    fn test_urls() {
        let store = store();
        assert_eq!(store.base_url(), "https://example.firebaseio.com");
        assert_eq!(
            store.collection_url("offered-places"),
            "https://example.firebaseio.com/offered-places.json"
        );
        assert_eq!(
            store.record_url("bookings", "-Lk9"),
            "https://example.firebaseio.com/bookings/-Lk9.json"
        );
    }

    #[tokio::test]
    async fn test_bad_key_rejected_before_request() {
        let result = store().remove("bookings", "a/b").await;
        assert!(matches!(result, Err(SyncError::InvalidInput(_))));
    }

    #[test]
    fn test_insert_response_parsing() {
        let parsed: InsertResponse = serde_json::from_str(r#"{"name":"-NkA1"}"#).unwrap();
        assert_eq!(parsed.name, "-NkA1");
    }

    #[test]
    fn test_upload_response_parsing() {
        let body = r#"{"imageUrl":"https://storage.example.com/o/abc.jpg?alt=media","imagePath":"uploaded/abc.jpg"}"#;
        let parsed: UploadedImage = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.image_url, "https://storage.example.com/o/abc.jpg?alt=media");
        assert_eq!(parsed.image_path, "uploaded/abc.jpg");
    }

    #[test]
    fn test_null_body_is_empty_collection() {
        let records = records_from_body("bookings", Value::Null).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_object_body_keeps_every_key() {
        let body = json!({"-K1": {"title": "A"}, "-K2": {"title": "B"}});
        let records = records_from_body("offered-places", body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records["-K2"]["title"], "B");
    }

    #[test]
    fn test_non_object_body_is_decode_error() {
        let result = records_from_body("offered-places", json!([1, 2]));
        assert!(matches!(result, Err(SyncError::Decode(_))));

        let result = records_from_body("offered-places", json!("oops"));
        assert!(matches!(result, Err(SyncError::Decode(_))));
    }

    #[test]
    fn test_status_error_passes_body_through() {
        let body = r#"{"error":"Permission denied"}"#.to_string();
        let err = status_error(StatusCode::UNAUTHORIZED, body.clone());

        assert_eq!(err, SyncError::Status { status: 401, body });
        assert_eq!(err.status_code(), Some(401));
    }

    #[test]
    fn test_query_params_are_json_literals() {
        let query = ListQuery::field_equals("userId", r#"o"brien\x"#);
        let params = query_params(&query).unwrap();

        assert_eq!(params[0], ("orderBy", "\"userId\"".to_string()));
        assert_eq!(params[1].0, "equalTo");
        let decoded: String = serde_json::from_str(&params[1].1).unwrap();
        assert_eq!(decoded, r#"o"brien\x"#);
    }
}
