//! JSON parameter-document loading.
//!
//! The loader only gets the document off disk and into typed records;
//! semantic validation (types, duplicates, constraint consistency) is the
//! domain layer's job.

use std::path::Path;

use tracing::debug;

use mcpgen_core::{
    application::{EngineError, ports::ParameterLoader},
    domain::ParameterRecord,
    error::GeneratorResult,
};

/// Reads parameter definitions from a JSON file.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParameterLoader;

impl JsonParameterLoader {
    pub fn new() -> Self {
        Self
    }
}

impl ParameterLoader for JsonParameterLoader {
    fn load(&self, path: &Path) -> GeneratorResult<Vec<ParameterRecord>> {
        let text = std::fs::read_to_string(path).map_err(|e| EngineError::ParameterFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| EngineError::ParameterFile {
                path: path.to_path_buf(),
                reason: format!("invalid JSON: {e}"),
            })?;
        if !value.is_array() {
            return Err(EngineError::ParameterFile {
                path: path.to_path_buf(),
                reason: "expected a top-level JSON array of parameter records".into(),
            }
            .into());
        }

        let records: Vec<ParameterRecord> =
            serde_json::from_value(value).map_err(|e| EngineError::ParameterFile {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        debug!(path = %path.display(), count = records.len(), "Parameter document loaded");
        Ok(records)
    }
}
