//! Configuration management for mcpr-howto.
//!
//! Configuration is loaded from multiple sources and merged:
//! 1. Global config: `~/.config/mcpr-howto/config.json` (or `.jsonc`)
//! 2. Environment variable: `MCPR_HOWTO_CONFIG_CONTENT`
//! 3. An explicit `--config` file
//!
//! Supports JSONC (JSON with comments) and variable substitution:
//! - `{env:VAR_NAME}` - Substitute environment variable
//! - `{file:path}` - Substitute file contents (trimmed)

use crate::error::ConfigError;
use mcpr_tui_core::Locale;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Static regex for variable substitution, compiled once.
static VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

fn var_regex() -> &'static regex::Regex {
    VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\{(env|file):([^}]+)\}")
            .expect("Invalid regex pattern - this is a compile-time constant")
    })
}

/// Environment variable holding inline config content.
pub const CONFIG_CONTENT_ENV: &str = "MCPR_HOWTO_CONFIG_CONTENT";

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// UI language (`en`, `ja`, `zh`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Token to display in the instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// TUI settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tui: Option<TuiConfig>,
}

/// TUI settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Open the dialog immediately on start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_open: Option<bool>,

    /// Columns per horizontal scroll step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_step: Option<u16>,

    /// Capture mouse events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mouse: Option<bool>,
}

impl TuiConfig {
    pub fn merge(mut self, other: Self) -> Self {
        if other.start_open.is_some() {
            self.start_open = other.start_open;
        }
        if other.scroll_step.is_some() {
            self.scroll_step = other.scroll_step;
        }
        if other.mouse.is_some() {
            self.mouse = other.mouse;
        }
        self
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Loading order (later sources override earlier):
    /// 1. Global config from `~/.config/mcpr-howto/`
    /// 2. `MCPR_HOWTO_CONFIG_CONTENT` environment variable
    /// 3. `explicit`, which must exist when given
    pub async fn load(explicit: Option<&Path>) -> Result<(Self, Vec<PathBuf>), ConfigError> {
        let mut config = Config::default();
        let mut sources = Vec::new();

        if let Some(global_dir) = Self::global_config_dir() {
            for name in &["config.json", "config.jsonc"] {
                let path = global_dir.join(name);
                if path.exists() {
                    let loaded = Self::load_file(&path).await?;
                    config = config.merge(loaded);
                    sources.push(path);
                    break;
                }
            }
        }

        if let Ok(content) = std::env::var(CONFIG_CONTENT_ENV) {
            let loaded = Self::parse_jsonc(&content, Path::new("."), "<env>")?;
            config = config.merge(loaded);
        }

        if let Some(path) = explicit {
            let loaded = Self::load_file(path).await?;
            config = config.merge(loaded);
            sources.push(path.to_path_buf());
        }

        tracing::debug!("Loaded configuration from {} file(s)", sources.len());
        Ok((config, sources))
    }

    /// Get the global config directory.
    ///
    /// On Unix, prefers `~/.config/mcpr-howto` over the platform directory.
    pub fn global_config_dir() -> Option<PathBuf> {
        #[cfg(unix)]
        {
            if let Some(home) = dirs::home_dir() {
                let xdg_config = home.join(".config").join("mcpr-howto");
                if xdg_config.exists() {
                    return Some(xdg_config);
                }
            }
        }

        dirs::config_dir().map(|d| d.join("mcpr-howto"))
    }

    /// Load configuration from a file.
    pub async fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.display().to_string(),
                source,
            })?;
        Self::parse_jsonc(&content, path, &path.display().to_string())
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(mut self, other: Self) -> Self {
        if other.theme.is_some() {
            self.theme = other.theme;
        }
        if other.locale.is_some() {
            self.locale = other.locale;
        }
        if other.token.is_some() {
            self.token = other.token;
        }
        self.tui = match (self.tui, other.tui) {
            (Some(base), Some(other)) => Some(base.merge(other)),
            (base, other) => other.or(base),
        };
        self
    }

    /// Resolve the configured locale.
    pub fn locale(&self) -> Result<Locale, ConfigError> {
        match self.locale.as_deref() {
            None => Ok(Locale::default()),
            Some(tag) => Locale::parse(tag).ok_or_else(|| ConfigError::UnknownLocale(tag.to_string())),
        }
    }

    /// TUI settings, defaulted.
    pub fn tui(&self) -> TuiConfig {
        self.tui.clone().unwrap_or_default()
    }

    /// Parse JSONC (JSON with comments).
    ///
    /// Comments are stripped before substitution, so references inside
    /// commented-out lines are never resolved.
    fn parse_jsonc(content: &str, config_path: &Path, source: &str) -> Result<Self, ConfigError> {
        let stripped = Self::strip_comments(content);
        let substituted = Self::substitute_variables(&stripped, config_path)?;

        serde_json::from_str(&substituted).map_err(|e| ConfigError::InvalidJson {
            path: source.to_string(),
            message: e.to_string(),
        })
    }

    /// Strip JSON comments.
    fn strip_comments(input: &str) -> String {
        let mut result = String::with_capacity(input.len());
        let mut chars = input.chars().peekable();
        let mut in_string = false;
        let mut escape_next = false;

        while let Some(c) = chars.next() {
            if escape_next {
                result.push(c);
                escape_next = false;
                continue;
            }

            if c == '\\' && in_string {
                result.push(c);
                escape_next = true;
                continue;
            }

            if c == '"' {
                in_string = !in_string;
                result.push(c);
                continue;
            }

            if in_string {
                result.push(c);
                continue;
            }

            if c == '/' {
                match chars.peek() {
                    Some('/') => {
                        chars.next();
                        for c in chars.by_ref() {
                            if c == '\n' {
                                result.push('\n');
                                break;
                            }
                        }
                        continue;
                    }
                    Some('*') => {
                        chars.next();
                        let mut prev = ' ';
                        for c in chars.by_ref() {
                            if prev == '*' && c == '/' {
                                break;
                            }
                            // Keep line numbers stable for error messages.
                            if c == '\n' {
                                result.push('\n');
                            }
                            prev = c;
                        }
                        continue;
                    }
                    _ => {}
                }
            }

            result.push(c);
        }

        result
    }

    /// Substitute `{env:..}` and `{file:..}` references.
    ///
    /// File paths are relative to the config file's directory.
    fn substitute_variables(content: &str, config_path: &Path) -> Result<String, ConfigError> {
        let config_dir = config_path.parent().unwrap_or(Path::new("."));
        let mut result = content.to_string();

        for cap in var_regex().captures_iter(content) {
            let (Some(full), Some(kind), Some(value)) = (cap.get(0), cap.get(1), cap.get(2)) else {
                continue;
            };
            let value = value.as_str();

            let replacement = match kind.as_str() {
                "env" => std::env::var(value).map_err(|_| ConfigError::EnvVarNotFound {
                    name: value.to_string(),
                })?,
                "file" => {
                    let file_path = config_dir.join(value);
                    std::fs::read_to_string(&file_path)
                        .map_err(|_| ConfigError::FileRefNotFound {
                            path: file_path.display().to_string(),
                        })?
                        .trim()
                        .to_string()
                }
                _ => continue,
            };

            result = result.replace(full.as_str(), &replacement);
        }

        Ok(result)
    }
}
