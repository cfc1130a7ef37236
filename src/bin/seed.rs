// src/bin/seed.rs
// DOCUMENTATION: Seed the remote store with sample listings
// PURPOSE: Populate an empty `offered-places` collection for development

use chrono::{TimeZone, Utc};
use staysync::config::Config;
use staysync::models::{NewPlace, PlaceLocation};
use staysync::SyncContext;
use std::process;

struct Sample {
    title: &'static str,
    description: &'static str,
    image_url: &'static str,
    price: f64,
    lat: f64,
    lng: f64,
    address: &'static str,
}

const SAMPLES: [Sample; 3] = [
    Sample {
        title: "Manhattan Mansion",
        description: "In the heart of New York City",
        image_url: "https://ds4.cityrealty.com/img/45f400ad66da3a16eaa0c2e8ab4bb09ee10e8721+w+h+0+60/manhattan-house-200-east-66th-street-01.jpg",
        price: 149.99,
        lat: 40.7648,
        lng: -73.9624,
        address: "200 E 66th St, New York, NY",
    },
    Sample {
        title: "Amour Toujours",
        description: "A romantic place in Paris",
        image_url: "https://static1.squarespace.com/static/5236f137e4b0588d65814e39/t/57700a05d1758ef2e6df0b66/1466960549052/The+Ritz+Paris.jpg",
        price: 249.99,
        lat: 48.8681,
        lng: 2.3289,
        address: "15 Place Vendome, Paris",
    },
    Sample {
        title: "San Francisco city",
        description: "Best house in town",
        image_url: "https://media.nbcsandiego.com/images/653*367/FullHouseHouse.JPG",
        price: 189.90,
        lat: 37.7764,
        lng: -122.4329,
        address: "1709 Broderick St, San Francisco, CA",
    },
];

#[tokio::main]
async fn main() {
    let config = Config::from_env();
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", &config.log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        process::exit(1);
    }

    let context = match SyncContext::from_config(&config) {
        Ok(context) => context,
        Err(e) => {
            log::error!("Failed to initialize: {}", e);
            process::exit(1);
        }
    };

    match context.places.fetch_places().await {
        Ok(existing) if !existing.is_empty() => {
            log::warn!(
                "{} already holds {} places, adding samples anyway",
                config.store_url,
                existing.len()
            );
        }
        Ok(_) => {}
        Err(e) => {
            log::error!("Cannot read {}: {}", config.store_url, e);
            process::exit(1);
        }
    }

    let (Some(available_from), Some(available_to)) = (
        Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).single(),
        Utc.with_ymd_and_hms(2019, 12, 31, 0, 0, 0).single(),
    ) else {
        log::error!("Invalid sample availability range");
        process::exit(1);
    };

    let mut failed = 0;
    for sample in SAMPLES.iter() {
        let new_place = NewPlace {
            title: sample.title.to_string(),
            description: sample.description.to_string(),
            price: sample.price,
            available_from,
            available_to,
            location: PlaceLocation {
                lat: sample.lat,
                lng: sample.lng,
                address: sample.address.to_string(),
                static_map_image_url: String::new(),
            },
            image_url: sample.image_url.to_string(),
        };

        match context.places.add_place(new_place).await {
            Ok(place) => log::info!("Seeded {} as {}", place.title, place.id),
            Err(e) => {
                failed += 1;
                log::error!("Failed to seed {}: {}", sample.title, e);
            }
        }
    }

    log::info!(
        "Done: {} seeded, {} failed, {} places cached",
        SAMPLES.len() - failed,
        failed,
        context.places.places().len()
    );

    if failed > 0 {
        process::exit(1);
    }
}
