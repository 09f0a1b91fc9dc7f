//! Weight configuration documents on the local filesystem.
//!
//! Format follows the extension: `.toml` is TOML, anything else is JSON.
//! Saves write a sibling temp file and rename it over the target so readers
//! never see a truncated document.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use skillfuse_core::errors::{PersistenceError, SkillfuseResult};
use skillfuse_core::traits::IConfigBackingStore;
use skillfuse_core::FusionConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Filesystem-backed [`IConfigBackingStore`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FileConfigBackingStore;

impl FileConfigBackingStore {
    pub fn new() -> Self {
        Self
    }

    fn parse(path: &Path, content: &str) -> SkillfuseResult<FusionConfig> {
        let parsed = match DocumentFormat::for_path(path) {
            DocumentFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            DocumentFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|reason| {
            PersistenceError::Parse {
                path: path.display().to_string(),
                reason,
            }
            .into()
        })
    }

    fn render(path: &Path, config: &FusionConfig) -> SkillfuseResult<String> {
        let rendered = match DocumentFormat::for_path(path) {
            DocumentFormat::Json => serde_json::to_string_pretty(config).map_err(|e| e.to_string()),
            DocumentFormat::Toml => toml::to_string_pretty(config).map_err(|e| e.to_string()),
        };
        rendered.map_err(|reason| PersistenceError::Serialize { reason }.into())
    }
}

impl IConfigBackingStore for FileConfigBackingStore {
    fn load(&self, path: &Path) -> SkillfuseResult<FusionConfig> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PersistenceError::NotFound {
                path: path.display().to_string(),
            },
            _ => io_error(path, &e),
        })?;
        let config = Self::parse(path, &content)?;
        config.validate()?;
        Ok(config)
    }

    fn save(&self, path: &Path, config: &FusionConfig) -> SkillfuseResult<()> {
        let rendered = Self::render(path, config)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| io_error(parent, &e))?;
        }
        let tmp = temp_sibling(path);
        fs::write(&tmp, rendered).map_err(|e| io_error(&tmp, &e))?;
        fs::rename(&tmp, path).map_err(|e| io_error(path, &e))?;
        Ok(())
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn io_error(path: &Path, e: &std::io::Error) -> PersistenceError {
    PersistenceError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}
