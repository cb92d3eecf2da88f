//! `updateapi.toml` parsing.
//!
//! Every key has a default matching the repository layout, so a manifest is
//! only needed when a checkout deviates from it. Formatters are plain argv
//! vectors invoked with the output directory appended; `None` skips
//! formatting (tests and CI sandboxes).

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Manifest filename looked up in the working directory by default.
pub const DEFAULT_MANIFEST: &str = "updateapi.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub mobile: MobileSection,

    #[serde(default)]
    pub admin: AdminSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    /// Root scanned for `*.dto.rs`, `*.gateway.rs` and `*.events.rs` files.
    #[serde(default = "default_server_src")]
    pub src_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MobileSection {
    #[serde(default = "default_mobile_out")]
    pub out_dir: PathBuf,

    /// e.g. `["dart", "format"]`.
    #[serde(default)]
    pub formatter: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdminSection {
    #[serde(default = "default_admin_out")]
    pub out_dir: PathBuf,

    /// e.g. `["npx", "prettier", "--write"]`.
    #[serde(default)]
    pub formatter: Option<Vec<String>>,
}

fn default_server_src() -> PathBuf {
    PathBuf::from("server/src")
}

fn default_mobile_out() -> PathBuf {
    PathBuf::from("mobile/lib/generated")
}

fn default_admin_out() -> PathBuf {
    PathBuf::from("admin/src/generated")
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            src_dir: default_server_src(),
        }
    }
}

impl Default for MobileSection {
    fn default() -> Self {
        Self {
            out_dir: default_mobile_out(),
            formatter: None,
        }
    }
}

impl Default for AdminSection {
    fn default() -> Self {
        Self {
            out_dir: default_admin_out(),
            formatter: None,
        }
    }
}

impl Config {
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid updateapi.toml")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read manifest: {:?}", path.as_ref()))?;
        Self::from_str(&content)
    }

    /// Load an explicit manifest, the default one if present, or defaults.
    pub fn load(manifest: Option<&str>) -> Result<Self> {
        match manifest {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_MANIFEST).exists() => Self::from_file(DEFAULT_MANIFEST),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn from_str___empty_manifest___uses_defaults() {
        let config = Config::from_str("").unwrap();

        assert_eq!(config.server.src_dir, PathBuf::from("server/src"));
        assert_eq!(config.mobile.out_dir, PathBuf::from("mobile/lib/generated"));
        assert_eq!(config.admin.out_dir, PathBuf::from("admin/src/generated"));
        assert!(config.mobile.formatter.is_none());
    }

    #[test]
    fn from_str___overrides_apply_per_section() {
        let config = Config::from_str(
            r#"
            [server]
            src_dir = "backend/src"

            [mobile]
            out_dir = "app/lib/gen"
            formatter = ["dart", "format"]
            "#,
        )
        .unwrap();

        assert_eq!(config.server.src_dir, PathBuf::from("backend/src"));
        assert_eq!(config.mobile.out_dir, PathBuf::from("app/lib/gen"));
        assert_eq!(
            config.mobile.formatter.unwrap(),
            vec!["dart".to_string(), "format".to_string()]
        );
        // Untouched section keeps its default.
        assert_eq!(config.admin.out_dir, PathBuf::from("admin/src/generated"));
    }

    #[test]
    fn from_str___unknown_keys___are_rejected() {
        assert!(Config::from_str("[server]\nsrc = \"typo\"").is_err());
    }
}
