//! Configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars.
//! The resulting `Settings` value is passed explicitly into the engine; nothing
//! here is global.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OracleConfig {
    pub endpoint: String,
    pub limit: usize,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://en.wikipedia.org/w/api.php".to_string(),
            limit: 10,
            timeout_secs: 10,
            user_agent: concat!("catlink/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Thresholds for the similarity-based tiers. Similarities are percentages
/// in `[0, 100]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MatchingConfig {
    pub subject_similarity: f64,
    pub subject_fallback_similarity: f64,
    pub name_fuzzy_similarity: f64,
    pub proximity_max_gap: usize,
    pub min_fuzzy_token_len: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            subject_similarity: 90.0,
            subject_fallback_similarity: 70.0,
            name_fuzzy_similarity: 80.0,
            proximity_max_gap: 5,
            min_fuzzy_token_len: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PresentationConfig {
    pub class_name: String,
    pub title_attribute: String,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self { class_name: "wiki-link".to_string(), title_attribute: "data-wiki-title".to_string() }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub oracle: OracleConfig,
    pub matching: MatchingConfig,
    pub presentation: PresentationConfig,
}

impl Settings {
    pub fn validate(&self) -> crate::error::Result<()> {
        let m = &self.matching;
        for (name, value) in [
            ("matching.subject_similarity", m.subject_similarity),
            ("matching.subject_fallback_similarity", m.subject_fallback_similarity),
            ("matching.name_fuzzy_similarity", m.name_fuzzy_similarity),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(Error::InvalidConfig(format!("{name} must be within 0..=100, got {value}")));
            }
        }
        if m.proximity_max_gap == 0 {
            return Err(Error::InvalidConfig("matching.proximity_max_gap must be at least 1".to_string()));
        }
        if self.oracle.endpoint.trim().is_empty() {
            return Err(Error::InvalidConfig("oracle.endpoint is empty".to_string()));
        }
        Ok(())
    }
}

/// Merged configuration sources plus the `Settings` extracted from them.
/// Settings are validated once, when the `Config` is built.
pub struct Config {
    figment: Figment,
    settings: Settings,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_in(Path::new("."))
    }

    /// Load `config.toml` and `config.<env>.toml` from `base`, then `APP_*`
    /// env vars (`__` separates nested keys, e.g. `APP_ORACLE__LIMIT`).
    pub fn load_in(base: &Path) -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(base.join("config.toml")));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file(base.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(base.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(base.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        Self::from_figment(figment)
    }

    pub fn from_figment(figment: Figment) -> anyhow::Result<Self> {
        let settings: Settings = figment
            .extract()
            .map_err(|e| anyhow::anyhow!("Failed to read settings: {}", e))?;
        settings.validate()?;
        Ok(Self { figment, settings })
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
