//! Waste Classifier Port
//!
//! Abstract interface for asking an external model where an item belongs.

use async_trait::async_trait;

use crate::domain::entities::{ImageInput, WasteClassification};
use crate::domain::errors::ProviderError;

/// Service interface for photo-based waste sorting
#[async_trait]
pub trait WasteClassifier: Send + Sync {
    async fn classify(&self, image: &ImageInput) -> Result<WasteClassification, ProviderError>;
}
