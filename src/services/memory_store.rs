// src/services/memory_store.rs
// DOCUMENTATION: In-memory document store used by the store tests
// PURPOSE: Stand-in for the REST backend that records every call and can inject failures

use crate::errors::{SyncError, SyncResult};
use crate::models::{ImageFile, UploadedImage};
use crate::services::document_store::{DocumentStore, ImageUploader, ListQuery, RecordMap};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// One recorded request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List(String),
    Get(String, String),
    Insert(String),
    Replace(String, String),
    Remove(String, String),
    Upload(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Get,
    Insert,
    Replace,
    Remove,
    Upload,
}

#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: Mutex<HashMap<String, BTreeMap<String, Value>>>,
    calls: Mutex<Vec<Call>>,
    failures: Mutex<HashMap<Op, SyncError>>,
    next_key: AtomicU64,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a record directly, bypassing the call log
    pub fn seed(&self, collection: &str, id: &str, record: Value) {
        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), record);
    }

    pub fn record(&self, collection: &str, id: &str) -> Option<Value> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .and_then(|records| records.get(id).cloned())
    }

    /// Make the next call of `op` fail with `error`
    pub fn fail_next(&self, op: Op, error: SyncError) {
        self.failures.lock().unwrap().insert(op, error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, op: Op) -> usize {
        self.calls()
            .iter()
            .filter(|call| {
                matches!(
                    (op, call),
                    (Op::List, Call::List(_))
                        | (Op::Get, Call::Get(..))
                        | (Op::Insert, Call::Insert(_))
                        | (Op::Replace, Call::Replace(..))
                        | (Op::Remove, Call::Remove(..))
                        | (Op::Upload, Call::Upload(_))
                )
            })
            .count()
    }

    fn enter(&self, op: Op, call: Call) -> SyncResult<()> {
        self.calls.lock().unwrap().push(call);
        match self.failures.lock().unwrap().remove(&op) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn list(&self, collection: &str, query: Option<&ListQuery>) -> SyncResult<RecordMap> {
        self.enter(Op::List, Call::List(collection.to_string()))?;
        let collections = self.collections.lock().unwrap();
        Ok(collections
            .get(collection)
            .map(|records| {
                records
                    .iter()
                    .filter(|(_, record)| query.map_or(true, |q| q.matches(record)))
                    .map(|(key, record)| (key.clone(), record.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn get(&self, collection: &str, id: &str) -> SyncResult<Value> {
        self.enter(Op::Get, Call::Get(collection.to_string(), id.to_string()))?;
        Ok(self.record(collection, id).unwrap_or(Value::Null))
    }

    async fn insert(&self, collection: &str, record: Value) -> SyncResult<String> {
        self.enter(Op::Insert, Call::Insert(collection.to_string()))?;
        let key = format!("-K{:04}", self.next_key.fetch_add(1, Ordering::SeqCst) + 1);
        self.seed(collection, &key, record);
        Ok(key)
    }

    async fn replace(&self, collection: &str, id: &str, record: Value) -> SyncResult<()> {
        self.enter(Op::Replace, Call::Replace(collection.to_string(), id.to_string()))?;
        self.seed(collection, id, record);
        Ok(())
    }

    async fn remove(&self, collection: &str, id: &str) -> SyncResult<()> {
        self.enter(Op::Remove, Call::Remove(collection.to_string(), id.to_string()))?;
        if let Some(records) = self.collections.lock().unwrap().get_mut(collection) {
            records.remove(id);
        }
        Ok(())
    }
}

#[async_trait]
impl ImageUploader for MemoryDocumentStore {
    async fn upload_image(&self, image: ImageFile) -> SyncResult<UploadedImage> {
        self.enter(Op::Upload, Call::Upload(image.file_name.clone()))?;
        Ok(UploadedImage {
            image_url: format!("https://storage.example.com/{}", image.file_name),
            image_path: format!("uploads/{}", image.file_name),
        })
    }
}
