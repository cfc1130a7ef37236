// src/models/place.rs
// DOCUMENTATION: Core data structures for places
// PURPOSE: Defines the cached Place entity and its wire record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic location of a place
/// DOCUMENTATION: Coordinates plus the human-readable address picked on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceLocation {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
    #[serde(default)]
    pub static_map_image_url: String,
}

/// A rentable listing as held in the local cache
/// DOCUMENTATION: `id` is the key the remote store assigned; every other field
/// mirrors the stored record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Remote store key
    pub id: String,

    pub title: String,

    pub description: String,

    /// Public URL of the listing image
    pub image_url: String,

    /// Price per night
    pub price: f64,

    /// First bookable day (not checked against `available_to`)
    pub available_from: DateTime<Utc>,

    /// Last bookable day
    pub available_to: DateTime<Utc>,

    /// Owner's user id
    pub user_id: String,

    /// Absent on listings stored before locations were recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<PlaceLocation>,
}

/// Wire record stored under `offered-places/{id}`
/// DOCUMENTATION: Same fields as Place minus the id, which is the map key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceData {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: f64,
    pub available_from: DateTime<Utc>,
    pub available_to: DateTime<Utc>,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<PlaceLocation>,
}

/// Input for creating a new place
/// DOCUMENTATION: The owner is taken from the signed-in user, not from here
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlace {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub available_from: DateTime<Utc>,
    pub available_to: DateTime<Utc>,
    pub location: PlaceLocation,
    pub image_url: String,
}

impl Place {
    /// Build a Place from a stored record and its key
    pub fn from_record(id: impl Into<String>, data: PlaceData) -> Self {
        Place {
            id: id.into(),
            title: data.title,
            description: data.description,
            image_url: data.image_url,
            price: data.price,
            available_from: data.available_from,
            available_to: data.available_to,
            user_id: data.user_id,
            location: data.location,
        }
    }

    /// Convert into the record sent to the store (id stripped)
    pub fn to_record(&self) -> PlaceData {
        PlaceData {
            title: self.title.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            price: self.price,
            available_from: self.available_from,
            available_to: self.available_to,
            user_id: self.user_id.clone(),
            location: self.location.clone(),
        }
    }

    /// Copy of this place with only title and description replaced
    pub fn with_details(&self, title: &str, description: &str) -> Self {
        Place {
            title: title.to_string(),
            description: description.to_string(),
            ..self.clone()
        }
    }
}

impl NewPlace {
    /// Turn the input into a Place owned by `user_id` under a placeholder id
    pub fn into_place(self, id: impl Into<String>, user_id: impl Into<String>) -> Place {
        Place {
            id: id.into(),
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            price: self.price,
            available_from: self.available_from,
            available_to: self.available_to,
            user_id: user_id.into(),
            location: Some(self.location),
        }
    }
}
