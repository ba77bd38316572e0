use crate::error::{PostwrightError, Result};
use crate::models::collection::{Collection, RawCollection};
use std::fs;
use std::path::Path;

/// Load a Postman collection from a file and validate its node shapes
pub fn load_collection<P: AsRef<Path>>(path: P) -> Result<Collection> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        PostwrightError::CollectionLoadError(format!("Failed to read file {}: {}", path.display(), e))
    })?;

    let raw: RawCollection = serde_json::from_str(&content).map_err(|e| {
        PostwrightError::CollectionLoadError(format!("Failed to parse collection JSON: {}", e))
    })?;

    let collection = Collection::try_from(raw)?;

    tracing::debug!(
        path = %path.display(),
        items = collection.items.len(),
        "collection loaded"
    );

    Ok(collection)
}
