//! Configuration management for chatseg.
//!
//! Loads configuration from ${CHATSEG_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Markdown styling options for text segments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    pub enabled: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, run `cargo xtask update-default-config`.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for chatseg configuration.
    //!
    //! CHATSEG_HOME resolution order:
    //! 1. CHATSEG_HOME environment variable (if set)
    //! 2. ~/.config/chatseg (default)
    //! 3. ./.chatseg when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the chatseg home directory.
    pub fn chatseg_home() -> PathBuf {
        if let Ok(home) = std::env::var("CHATSEG_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".chatseg"),
            |h| h.join(".config").join("chatseg"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        chatseg_home().join("config.toml")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Render reasoning blocks expanded instead of collapsed.
    pub expand_thinking: bool,
    /// Label shown on reasoning blocks.
    pub thinking_label: String,
    /// Pretty-print JSON output.
    pub pretty_json: bool,
    pub markdown: MarkdownConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            expand_thinking: false,
            thinking_label: Self::DEFAULT_THINKING_LABEL.to_string(),
            pretty_json: true,
            markdown: MarkdownConfig::default(),
        }
    }
}

impl Config {
    const DEFAULT_THINKING_LABEL: &str = "Thinking";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            let config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(config)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Config::default())
        }
    }

    /// Returns the reasoning label, falling back to the default when blank.
    pub fn effective_thinking_label(&self) -> &str {
        let label = self.thinking_label.trim();
        if label.is_empty() {
            Self::DEFAULT_THINKING_LABEL
        } else {
            label
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Generates a fresh config TOML from Rust defaults.
    ///
    /// Uses the embedded template for structure/comments and merges
    /// generated values from `Config::default()` into it.
    pub fn generate() -> Result<String> {
        use toml_edit::DocumentMut;

        let generated_toml = toml::to_string(&Config::default())
            .context("Failed to serialize default config to TOML")?;

        // Parse template as base (preserves comments)
        let mut doc: DocumentMut = default_config_template()
            .parse()
            .context("Failed to parse default config template")?;

        let generated_doc: DocumentMut = generated_toml
            .parse()
            .context("Failed to parse generated config")?;

        merge_items(doc.as_table_mut(), generated_doc.as_table());

        Ok(doc.to_string())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

/// Overwrites values in `target` with those in `source`, keeping comments.
fn merge_items(target: &mut toml_edit::Table, source: &toml_edit::Table) {
    use toml_edit::Item;

    for (key, value) in source.iter() {
        match value {
            Item::Value(v) => {
                // Keep the template's decor (inline comments, spacing).
                let decor = target
                    .get(key)
                    .and_then(Item::as_value)
                    .map(|existing| existing.decor().clone());
                let mut v = v.clone();
                if let Some(decor) = decor {
                    *v.decor_mut() = decor;
                }
                target[key] = Item::Value(v);
            }
            Item::Table(src_table) => {
                if let Some(Item::Table(target_table)) = target.get_mut(key) {
                    merge_items(target_table, src_table);
                } else {
                    target[key] = Item::Table(src_table.clone());
                }
            }
            Item::ArrayOfTables(arr) => {
                target[key] = Item::ArrayOfTables(arr.clone());
            }
            Item::None => {}
        }
    }
}
