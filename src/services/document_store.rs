// src/services/document_store.rs
// DOCUMENTATION: Remote document store port
// PURPOSE: Transport seam between the stores and the REST backend

use crate::errors::{SyncError, SyncResult};
use crate::models::{ImageFile, UploadedImage};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Records of one collection keyed by their store-assigned key
pub type RecordMap = Map<String, Value>;

/// Equality filter on a child field (`orderBy` / `equalTo`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub order_by: String,
    pub equal_to: String,
}

impl ListQuery {
    pub fn field_equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        ListQuery {
            order_by: field.into(),
            equal_to: value.into(),
        }
    }

    pub fn matches(&self, record: &Value) -> bool {
        record.get(&self.order_by).and_then(Value::as_str) == Some(self.equal_to.as_str())
    }
}

/// JSON document store addressed by collection and key
/// DOCUMENTATION: Every method is a single request; nothing is retried or cached here.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read a whole collection. An absent collection is an empty map.
    async fn list(&self, collection: &str, query: Option<&ListQuery>) -> SyncResult<RecordMap>;

    /// Read one record. Absent records come back as `Value::Null`.
    async fn get(&self, collection: &str, id: &str) -> SyncResult<Value>;

    /// Create a record and return the key the store generated for it
    async fn insert(&self, collection: &str, record: Value) -> SyncResult<String>;

    /// Overwrite a record completely
    async fn replace(&self, collection: &str, id: &str, record: Value) -> SyncResult<()>;

    async fn remove(&self, collection: &str, id: &str) -> SyncResult<()>;
}

/// Binary upload endpoint for listing images
#[async_trait]
pub trait ImageUploader: Send + Sync {
    async fn upload_image(&self, image: ImageFile) -> SyncResult<UploadedImage>;
}

/// Decode every record of a collection, pairing it with its key
pub fn decode_records<D, T, F>(records: RecordMap, build: F) -> SyncResult<Vec<T>>
where
    D: DeserializeOwned,
    F: Fn(String, D) -> T,
{
    records
        .into_iter()
        .map(|(key, value)| {
            let data = serde_json::from_value::<D>(value)
                .map_err(|e| SyncError::Decode(format!("record '{}': {}", key, e)))?;
            Ok(build(key, data))
        })
        .collect()
}

/// Decode a single record, mapping an absent one to `NotFound`
pub fn decode_record<D: DeserializeOwned>(collection: &str, id: &str, value: Value) -> SyncResult<D> {
    if value.is_null() {
        return Err(SyncError::NotFound(format!("{}/{}", collection, id)));
    }
    serde_json::from_value(value).map_err(|e| SyncError::Decode(format!("record '{}': {}", id, e)))
}

pub fn encode_record<S: Serialize>(record: &S) -> SyncResult<Value> {
    Ok(serde_json::to_value(record)?)
}

/// Reject keys the store cannot address as a single path segment
pub fn validate_key(id: &str) -> SyncResult<()> {
    const FORBIDDEN: [char; 6] = ['/', '.', '#', '$', '[', ']'];

    if id.is_empty() {
        return Err(SyncError::InvalidInput("empty record key".to_string()));
    }
    if id.contains(&FORBIDDEN[..]) {
        return Err(SyncError::InvalidInput(format!(
            "record key '{}' contains a forbidden character",
            id
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Item {
        name: String,
    }

    #[test]
    fn test_decode_records_pairs_keys() {
        let records = json!({"k1": {"name": "a"}, "k2": {"name": "b"}});
        let map = records.as_object().cloned().unwrap();

        let items = decode_records(map, |key, item: Item| (key, item.name)).unwrap();
        assert_eq!(
            items,
            vec![("k1".to_string(), "a".to_string()), ("k2".to_string(), "b".to_string())]
        );
    }

    #[test]
    fn test_decode_records_fails_on_bad_record() {
        let map = json!({"k1": {"nope": 1}}).as_object().cloned().unwrap();
        let result = decode_records(map, |key, item: Item| (key, item.name));
        assert!(matches!(result, Err(SyncError::Decode(_))));
    }

    #[test]
    fn test_decode_record_null_is_not_found() {
        let result: SyncResult<Item> = decode_record("offered-places", "x", Value::Null);
        assert_eq!(result.unwrap_err(), SyncError::NotFound("offered-places/x".to_string()));
    }

    #[test]
    fn test_validate_key() {
        assert!(validate_key("-LkXyz_12").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../secret").is_err());
        assert!(validate_key("a/b").is_err());
    }

    #[test]
    fn test_list_query_matches_string_field() {
        let query = ListQuery::field_equals("userId", "abc");
        assert!(query.matches(&json!({"userId": "abc"})));
        assert!(!query.matches(&json!({"userId": "xyz"})));
        assert!(!query.matches(&json!({"other": "abc"})));
    }
}
