use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::transform::ParamDedup;
use crate::url_model::QueryDelimiter;

/// Global configuration loaded from `~/.config/urledit/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Scheme put in front of a host with no `://` when rebuilding from the form.
    pub form_default_scheme: String,
    /// Scheme put in front of a URL with no `://` when it is submitted.
    pub submit_default_scheme: String,
    /// Delimiter the query is split on and joined with in the editor.
    #[serde(default)]
    pub default_delimiter: QueryDelimiter,
    /// Whether encode/decode collapse entries that become identical.
    #[serde(default)]
    pub dedup: ParamDedup,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            form_default_scheme: "http".to_string(),
            submit_default_scheme: "https".to_string(),
            default_delimiter: QueryDelimiter::Ampersand,
            dedup: ParamDedup::Preserve,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urledit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<EditorConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = EditorConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<EditorConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: EditorConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_values() {
        let cfg = EditorConfig::default();
        assert_eq!(cfg.form_default_scheme, "http");
        assert_eq!(cfg.submit_default_scheme, "https");
        assert_eq!(cfg.default_delimiter, QueryDelimiter::Ampersand);
        assert_eq!(cfg.dedup, ParamDedup::Preserve);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = EditorConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: EditorConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            form_default_scheme = "https"
            submit_default_scheme = "http"
            default_delimiter = ";"
            dedup = "collapse"
        "#;
        let cfg: EditorConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.form_default_scheme, "https");
        assert_eq!(cfg.submit_default_scheme, "http");
        assert_eq!(cfg.default_delimiter, QueryDelimiter::Semicolon);
        assert_eq!(cfg.dedup, ParamDedup::Collapse);
    }

    #[test]
    fn config_toml_optional_fields_default() {
        let toml = r#"
            form_default_scheme = "http"
            submit_default_scheme = "https"
        "#;
        let cfg: EditorConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.default_delimiter, QueryDelimiter::Ampersand);
        assert_eq!(cfg.dedup, ParamDedup::Preserve);
    }

    #[test]
    fn config_rejects_unknown_delimiter() {
        let toml = r#"
            form_default_scheme = "http"
            submit_default_scheme = "https"
            default_delimiter = ","
        "#;
        assert!(toml::from_str::<EditorConfig>(toml).is_err());
    }

    #[test]
    fn load_from_path_reads_file() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"form_default_scheme = \"ftp\"\nsubmit_default_scheme = \"https\"\n")
            .unwrap();
        f.flush().unwrap();
        let cfg = load_from_path(f.path()).unwrap();
        assert_eq!(cfg.form_default_scheme, "ftp");
    }

    #[test]
    fn load_from_missing_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_path(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
