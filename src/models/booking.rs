// src/models/booking.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reservation of a place, as held in the local cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub place_id: String,
    pub user_id: String,
    /// Copy of the place title at booking time
    pub place_title: String,
    /// Copy of the place image at booking time
    pub place_image: String,
    pub first_name: String,
    pub last_name: String,
    pub guest_number: u32,
    pub booked_from: DateTime<Utc>,
    pub booked_to: DateTime<Utc>,
}

/// Wire record stored under `bookings/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingData {
    pub place_id: String,
    pub user_id: String,
    pub place_title: String,
    pub place_image: String,
    pub first_name: String,
    pub last_name: String,
    pub guest_number: u32,
    pub booked_from: DateTime<Utc>,
    pub booked_to: DateTime<Utc>,
}

/// Input for creating a booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub place_id: String,
    pub place_title: String,
    pub place_image: String,
    pub first_name: String,
    pub last_name: String,
    pub guest_number: u32,
    pub booked_from: DateTime<Utc>,
    pub booked_to: DateTime<Utc>,
}

impl Booking {
    pub fn from_record(id: impl Into<String>, data: BookingData) -> Self {
        Booking {
            id: id.into(),
            place_id: data.place_id,
            user_id: data.user_id,
            place_title: data.place_title,
            place_image: data.place_image,
            first_name: data.first_name,
            last_name: data.last_name,
            guest_number: data.guest_number,
            booked_from: data.booked_from,
            booked_to: data.booked_to,
        }
    }

    pub fn to_record(&self) -> BookingData {
        BookingData {
            place_id: self.place_id.clone(),
            user_id: self.user_id.clone(),
            place_title: self.place_title.clone(),
            place_image: self.place_image.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            guest_number: self.guest_number,
            booked_from: self.booked_from,
            booked_to: self.booked_to,
        }
    }
}

impl NewBooking {
    pub fn into_booking(self, id: impl Into<String>, user_id: impl Into<String>) -> Booking {
        Booking {
            id: id.into(),
            place_id: self.place_id,
            user_id: user_id.into(),
            place_title: self.place_title,
            place_image: self.place_image,
            first_name: self.first_name,
            last_name: self.last_name,
            guest_number: self.guest_number,
            booked_from: self.booked_from,
            booked_to: self.booked_to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_booking_record_round_trip_keeps_wire_names() {
        let value = json!({
            "placeId": "p1",
            "userId": "abc",
            "placeTitle": "Manhattan Mansion",
            "placeImage": "https://example.com/m.jpg",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "guestNumber": 2,
            "bookedFrom": "2019-03-01T00:00:00Z",
            "bookedTo": "2019-03-05T00:00:00Z"
        });

        let data: BookingData = serde_json::from_value(value).unwrap();
        let booking = Booking::from_record("b1", data);
        assert_eq!(booking.id, "b1");
        assert_eq!(booking.guest_number, 2);

        let back = serde_json::to_value(booking.to_record()).unwrap();
        assert_eq!(back["guestNumber"], 2);
        assert!(back.get("id").is_none());
    }
}
