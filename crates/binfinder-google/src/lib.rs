//! Google adapters for Binfinder
//!
//! Implements the Binfinder provider ports against Google services:
//!
//! - [`GoogleMapsClient`]: Geocoding API and Places Nearby Search
//!   (`GeocodingProvider` + `PlacesProvider`)
//! - [`GeminiClassifier`]: Gemini `generateContent` with an inline image
//!   (`WasteClassifier`)
//!
//! Both clients validate their credentials at construction time and never
//! retry failed calls.

mod config;
mod gemini;
mod image;
mod maps;
mod status;

pub use config::{GeminiConfig, GoogleMapsConfig, GEMINI_API_KEY_ENV, MAPS_API_KEY_ENV};
pub use gemini::GeminiClassifier;
pub use image::load_image;
pub use maps::GoogleMapsClient;
