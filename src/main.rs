// src/main.rs
// DOCUMENTATION: Command-line entry point
// PURPOSE: Initialize config and logging, then drive the place and booking stores

use anyhow::Context;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use staysync::config::Config;
use staysync::models::{ImageFile, NewPlace, PlaceLocation};
use staysync::SyncContext;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "staysync", version, about = "Sync places and bookings with the remote store")]
struct Cli {
    /// Act as this user instead of STAYSYNC_USER_ID
    #[arg(long, env = "STAYSYNC_AS_USER")]
    user: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all offered places
    Places,
    /// Show one place
    Place { id: String },
    /// Offer a new place
    AddPlace {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        price: f64,
        /// First available day (YYYY-MM-DD)
        #[arg(long, value_parser = parse_day)]
        from: DateTime<Utc>,
        /// Last available day (YYYY-MM-DD)
        #[arg(long, value_parser = parse_day)]
        to: DateTime<Utc>,
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lng: f64,
        #[arg(long)]
        address: String,
        /// Image file to upload first
        #[arg(long)]
        image: PathBuf,
    },
    /// Change title and description of a place
    UpdatePlace {
        id: String,
        title: String,
        description: String,
    },
    /// Upload an image and print its URLs
    UploadImage { path: PathBuf },
    /// List the current user's bookings
    Bookings,
    /// Cancel one of the current user's bookings
    CancelBooking { id: String },
}

fn parse_day(value: &str) -> Result<DateTime<Utc>, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
        .map(|day| day.and_time(NaiveTime::MIN).and_utc())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration (also loads .env)
    let config = Config::from_env();

    // 2. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            config.log_level.as_str()
        } else {
            "info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    let cli = Cli::parse();

    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Configuration error")?;

    log::info!("Environment: {}", config.environment);
    log::info!("Document store: {}", config.store_url);

    // 3. Wire the session
    let context = SyncContext::from_config(&config)?;
    if let Some(user) = cli.user {
        context.auth.sign_in(user);
    }

    // 4. Run the command
    match cli.command {
        Command::Places => {
            let places = context.places.fetch_places().await?;
            print_json(&places)?;
        }
        Command::Place { id } => {
            let place = context.places.get_place(&id).await?;
            print_json(&place)?;
        }
        Command::AddPlace {
            title,
            description,
            price,
            from,
            to,
            lat,
            lng,
            address,
            image,
        } => {
            let file = ImageFile::from_path(&image).await?;
            let uploaded = context.places.upload_image(file).await?;
            let place = context
                .places
                .add_place(NewPlace {
                    title,
                    description,
                    price,
                    available_from: from,
                    available_to: to,
                    location: PlaceLocation {
                        lat,
                        lng,
                        address,
                        static_map_image_url: String::new(),
                    },
                    image_url: uploaded.image_url,
                })
                .await?;
            print_json(&place)?;
        }
        Command::UpdatePlace {
            id,
            title,
            description,
        } => {
            let place = context
                .places
                .update_place(&id, &title, &description)
                .await
                .with_context(|| format!("Updating place {}", id))?;
            print_json(&place)?;
        }
        Command::UploadImage { path } => {
            let file = ImageFile::from_path(&path).await?;
            let uploaded = context.places.upload_image(file).await?;
            print_json(&uploaded)?;
        }
        Command::Bookings => {
            let bookings = context.bookings.fetch_bookings().await?;
            print_json(&bookings)?;
        }
        Command::CancelBooking { id } => {
            context.bookings.cancel_booking(&id).await?;
            log::info!("{} bookings left", context.bookings.bookings().len());
        }
    }

    Ok(())
}
