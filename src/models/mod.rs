// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export entity and wire types

pub mod booking;
pub mod image;
pub mod place;

pub use booking::*;
pub use image::*;
pub use place::*;
