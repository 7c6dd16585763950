//! Renderer configuration.
//!
//! Discovery order:
//! 1. An explicit path passed by the caller.
//! 2. `TGMARKUP_CONFIG` environment variable.
//! 3. `~/.tgmarkup/config.json`
//! 4. If none exists, defaults.
//!
//! ```json
//! {
//!   "defaultMode": "MarkdownV2",
//!   "strictLanguages": true,
//!   "languageAliases": { "golang": "go", "zsh": "bash" }
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MarkupError, Result};
use crate::language::LanguageRegistry;
use crate::mode::ParseMode;

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "TGMARKUP_CONFIG";

/// Renderer settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Mode used when a caller does not pick one.
    #[serde(default, alias = "defaultMode")]
    pub default_mode: ParseMode,

    /// Reject unknown code-block languages instead of dropping them.
    #[serde(default, alias = "strictLanguages")]
    pub strict_languages: bool,

    /// Extra alias → language mappings, merged over the built-in table.
    /// Targets may themselves be aliases.
    #[serde(default, alias = "languageAliases")]
    pub language_aliases: HashMap<String, String>,
}

impl RenderConfig {
    /// Parse a JSON config document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The built-in registry extended with [`language_aliases`](Self::language_aliases).
    ///
    /// Fails if an alias targets a language the built-in table does not know.
    pub fn build_registry(&self) -> Result<LanguageRegistry> {
        let builtin = LanguageRegistry::builtin();
        let mut overrides = Vec::with_capacity(self.language_aliases.len());
        for (alias, target) in &self.language_aliases {
            let Some(lang) = builtin.normalize(target) else {
                return Err(MarkupError::ConfigInvalid {
                    reason: format!("alias {alias:?} targets unsupported language {target:?}"),
                });
            };
            overrides.push((alias.as_str(), lang));
        }
        Ok(builtin.clone().with_overrides(overrides))
    }
}

/// Resolve the config file path using the discovery chain.
///
/// `env_path` is the value of [`CONFIG_ENV_VAR`], if set. Returns `None`
/// when neither is given and no home-directory config exists.
pub fn discover_config_path(
    env_path: Option<String>,
    home_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = env_path.filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    let path = home_dir?.join(".tgmarkup").join("config.json");
    path.exists().then_some(path)
}

/// Load configuration, falling back to defaults when no file is found.
///
/// An explicitly given `path` must exist; a discovered one that vanished is
/// treated as absent.
pub fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let discovered =
                discover_config_path(std::env::var(CONFIG_ENV_VAR).ok(), dirs::home_dir());
            match discovered {
                Some(p) if p.exists() => p,
                Some(p) => {
                    tracing::warn!(
                        path = %p.display(),
                        "config path does not exist, using defaults"
                    );
                    return Ok(RenderConfig::default());
                }
                None => {
                    tracing::info!("no config file found, using defaults");
                    return Ok(RenderConfig::default());
                }
            }
        }
    };

    tracing::debug!(path = %path.display(), "loading config file");
    let contents = std::fs::read_to_string(&path)?;
    RenderConfig::from_json(&contents).map_err(|e| MarkupError::ConfigInvalid {
        reason: format!("{}: {e}", path.display()),
    })
}
