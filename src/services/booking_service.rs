// src/services/booking_service.rs
// DOCUMENTATION: Booking collection sync
// PURPOSE: Keep the signed-in user's bookings cached and in step with the remote `bookings` collection

use crate::errors::SyncResult;
use crate::models::{Booking, BookingData, NewBooking};
use crate::services::cache::{Collection, Snapshot};
use crate::services::document_store::{decode_records, encode_record, DocumentStore, ListQuery};
use crate::services::AuthSession;
use std::sync::Arc;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use uuid::Uuid;

pub const BOOKINGS_COLLECTION: &str = "bookings";

/// Booking store
/// DOCUMENTATION: Same sync rules as the place store: no retries, cache changes
/// only after the remote call succeeded, last response wins.
pub struct BookingStore {
    remote: Arc<dyn DocumentStore>,
    auth: Arc<AuthSession>,
    bookings: Collection<Booking>,
}

impl BookingStore {
    pub fn new(remote: Arc<dyn DocumentStore>, auth: Arc<AuthSession>) -> Self {
        Self {
            remote,
            auth,
            bookings: Collection::new(),
        }
    }

    pub fn bookings(&self) -> Vec<Booking> {
        self.bookings.snapshot()
    }

    pub fn version(&self) -> u64 {
        self.bookings.version()
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot<Booking>> {
        self.bookings.subscribe()
    }

    pub fn stream(&self) -> WatchStream<Snapshot<Booking>> {
        self.bookings.stream()
    }

    /// Fetch the signed-in user's bookings and replace the cache
    pub async fn fetch_bookings(&self) -> SyncResult<Vec<Booking>> {
        let user_id = self.auth.require_user_id()?;
        let query = ListQuery::field_equals("userId", user_id);

        let records = self.remote.list(BOOKINGS_COLLECTION, Some(&query)).await?;
        let bookings =
            decode_records(records, |id, data: BookingData| Booking::from_record(id, data))?;

        log::info!("Fetched {} bookings for {}", bookings.len(), query.equal_to);
        self.bookings.replace(bookings.clone());
        Ok(bookings)
    }

    /// Create a booking for the signed-in user
    pub async fn add_booking(&self, new_booking: NewBooking) -> SyncResult<Booking> {
        let user_id = self.auth.require_user_id()?;
        let mut booking = new_booking.into_booking(Uuid::new_v4().to_string(), user_id);

        let record = encode_record(&booking.to_record())?;
        booking.id = self.remote.insert(BOOKINGS_COLLECTION, record).await?;

        let cached = booking.clone();
        self.bookings.modify(move |bookings| bookings.push(cached));
        log::info!("Added booking {} for place {}", booking.id, booking.place_id);
        Ok(booking)
    }

    /// Delete a booking remotely, then drop it from the cache
    pub async fn cancel_booking(&self, booking_id: &str) -> SyncResult<()> {
        self.remote.remove(BOOKINGS_COLLECTION, booking_id).await?;

        self.bookings
            .modify(|bookings| bookings.retain(|booking| booking.id != booking_id));
        log::info!("Cancelled booking {}", booking_id);
        Ok(())
    }
}
