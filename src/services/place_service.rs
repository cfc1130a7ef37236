// src/services/place_service.rs
// DOCUMENTATION: Place collection sync
// PURPOSE: Keep the local place cache in step with the remote `offered-places` collection

use crate::errors::{SyncError, SyncResult};
use crate::models::{ImageFile, NewPlace, Place, PlaceData, UploadedImage};
use crate::services::cache::{Collection, Snapshot};
use crate::services::document_store::{
    decode_record, decode_records, encode_record, DocumentStore, ImageUploader,
};
use crate::services::AuthSession;
use std::sync::Arc;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use uuid::Uuid;

pub const PLACES_COLLECTION: &str = "offered-places";

/// Place store
/// DOCUMENTATION: Owns the cached place list for the session. Remote calls are
/// never retried; the cache only changes after a remote call succeeded.
/// Concurrent mutations are last-response-wins.
pub struct PlaceStore {
    remote: Arc<dyn DocumentStore>,
    uploader: Arc<dyn ImageUploader>,
    auth: Arc<AuthSession>,
    places: Collection<Place>,
}

impl PlaceStore {
    pub fn new(
        remote: Arc<dyn DocumentStore>,
        uploader: Arc<dyn ImageUploader>,
        auth: Arc<AuthSession>,
    ) -> Self {
        Self {
            remote,
            uploader,
            auth,
            places: Collection::new(),
        }
    }

    /// Current cached places
    pub fn places(&self) -> Vec<Place> {
        self.places.snapshot()
    }

    pub fn version(&self) -> u64 {
        self.places.version()
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot<Place>> {
        self.places.subscribe()
    }

    pub fn stream(&self) -> WatchStream<Snapshot<Place>> {
        self.places.stream()
    }

    /// Fetch all places
    /// DOCUMENTATION: Replaces the cache wholesale (no merge) and returns the new list.
    /// On failure the cache is left as it was.
    pub async fn fetch_places(&self) -> SyncResult<Vec<Place>> {
        let records = self.remote.list(PLACES_COLLECTION, None).await?;
        let places = decode_records(records, |id, data: PlaceData| Place::from_record(id, data))?;

        log::info!("Fetched {} places", places.len());
        self.places.replace(places.clone());
        Ok(places)
    }

    /// Fetch one place without touching the cache
    pub async fn get_place(&self, place_id: &str) -> SyncResult<Place> {
        let value = self.remote.get(PLACES_COLLECTION, place_id).await?;
        let data: PlaceData = decode_record(PLACES_COLLECTION, place_id, value)?;
        Ok(Place::from_record(place_id, data))
    }

    /// Upload a listing image
    pub async fn upload_image(&self, image: ImageFile) -> SyncResult<UploadedImage> {
        self.uploader.upload_image(image).await
    }

    /// Create a place owned by the signed-in user
    /// DOCUMENTATION: The cache is appended to only after the store accepted the
    /// record, and the cached copy carries the store key instead of the placeholder id.
    pub async fn add_place(&self, new_place: NewPlace) -> SyncResult<Place> {
        let user_id = self.auth.require_user_id()?;
        let mut place = new_place.into_place(Uuid::new_v4().to_string(), user_id);

        let record = encode_record(&place.to_record())?;
        let key = self.remote.insert(PLACES_COLLECTION, record).await?;

        log::debug!("Place placeholder {} stored as {}", place.id, key);
        place.id = key;

        let cached = place.clone();
        self.places.modify(move |places| places.push(cached));
        log::info!("Added place {} ({})", place.id, place.title);
        Ok(place)
    }

    /// Change title and description of a cached place
    /// DOCUMENTATION: A cold cache is filled by one fetch first. Every other field is
    /// carried over and the full record is written back (PUT). On success the whole
    /// cache is replaced with the list computed here.
    pub async fn update_place(
        &self,
        place_id: &str,
        title: &str,
        description: &str,
    ) -> SyncResult<Place> {
        let mut places = self.places.snapshot();
        if places.is_empty() {
            log::info!("Place cache is empty, fetching before update");
            places = self.fetch_places().await?;
        }

        let index = places
            .iter()
            .position(|p| p.id == place_id)
            .ok_or_else(|| SyncError::NotFound(format!("{}/{}", PLACES_COLLECTION, place_id)))?;

        let updated = places[index].with_details(title, description);
        let record = encode_record(&updated.to_record())?;
        self.remote.replace(PLACES_COLLECTION, place_id, record).await?;

        places[index] = updated.clone();
        self.places.replace(places);
        log::info!("Updated place {}", place_id);
        Ok(updated)
    }
}
