//! Append-only TOML component registry.
//!
//! Each kind has one registry file of `[[component]]` tables. Updates never
//! rewrite existing entries: the current file is parsed only to detect
//! duplicates, and a new record is appended as text after whatever is
//! already there, preserving it byte for byte.

use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use mcpgen_core::{
    application::{
        EngineError,
        ports::{ComponentRegistry, RegistryOutcome},
    },
    domain::RegistryRecord,
    error::GeneratorResult,
};

#[derive(Debug, Default, Serialize, Deserialize)]
struct RegistryDoc {
    #[serde(default)]
    component: Vec<RegistryRecord>,
}

/// TOML-file-backed registry adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlRegistry;

impl TomlRegistry {
    pub fn new() -> Self {
        Self
    }
}

impl ComponentRegistry for TomlRegistry {
    fn register(
        &self,
        registry_path: &Path,
        record: &RegistryRecord,
    ) -> GeneratorResult<RegistryOutcome> {
        let existing = if registry_path.is_file() {
            std::fs::read_to_string(registry_path).map_err(|e| registry_error(registry_path, e))?
        } else {
            String::new()
        };

        let doc: RegistryDoc =
            toml::from_str(&existing).map_err(|e| registry_error(registry_path, e))?;
        if doc.component.iter().any(|c| c.name == record.name) {
            debug!(name = %record.name, "Record already present, leaving registry untouched");
            return Ok(RegistryOutcome::AlreadyRegistered);
        }

        let mut stamped = record.clone();
        stamped.created = Some(Utc::now().to_rfc3339());
        let entry = toml::to_string(&RegistryDoc {
            component: vec![stamped],
        })
        .map_err(|e| registry_error(registry_path, e))?;

        let mut content = existing;
        if !content.is_empty() && !content.ends_with("\n\n") {
            while content.ends_with('\n') {
                content.pop();
            }
            content.push_str("\n\n");
        }
        content.push_str(&entry);

        if let Some(parent) = registry_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| registry_error(registry_path, e))?;
        }
        std::fs::write(registry_path, &content).map_err(|e| registry_error(registry_path, e))?;
        debug!(path = %registry_path.display(), name = %record.name, "Record appended");
        Ok(RegistryOutcome::Appended)
    }

    fn list(&self, registry_path: &Path) -> GeneratorResult<Vec<RegistryRecord>> {
        if !registry_path.is_file() {
            return Ok(Vec::new());
        }
        let text =
            std::fs::read_to_string(registry_path).map_err(|e| registry_error(registry_path, e))?;
        let doc: RegistryDoc =
            toml::from_str(&text).map_err(|e| registry_error(registry_path, e))?;
        Ok(doc.component)
    }
}

fn registry_error(
    path: &Path,
    e: impl std::fmt::Display,
) -> mcpgen_core::error::GeneratorError {
    EngineError::Registry {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}
