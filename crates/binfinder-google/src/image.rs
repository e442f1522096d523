//! Image loading for classification requests

use std::fs;
use std::path::Path;

use mime_guess::MimeGuess;

use binfinder::{DomainError, ImageInput};

/// Read an image file, guessing its MIME type from the extension.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageInput, DomainError> {
    let path = path.as_ref();
    let mime = MimeGuess::from_path(path).first_or_octet_stream();

    if mime.type_() != "image" {
        return Err(DomainError::Validation(format!(
            "Unsupported file type {} for {}",
            mime,
            path.display()
        )));
    }

    let bytes = fs::read(path).map_err(|e| {
        DomainError::Validation(format!("Error loading image file {}: {}", path.display(), e))
    })?;

    ImageInput::new(mime.essence_str(), bytes)
}
