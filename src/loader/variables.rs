use crate::error::{PostwrightError, Result};
use crate::models::VariableMapping;
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

/// Load a flat `{ "name": value }` variables file
pub fn load_variables<P: AsRef<Path>>(path: P) -> Result<VariableMapping> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        PostwrightError::VariablesLoadError(format!("Failed to read file {}: {}", path.display(), e))
    })?;

    let object: IndexMap<String, serde_json::Value> = serde_json::from_str(&content).map_err(|e| {
        PostwrightError::VariablesLoadError(format!("Failed to parse variables JSON: {}", e))
    })?;

    Ok(VariableMapping::from_json_object(object))
}
