//! Configuration loading.
//!
//! The only knobs are which files get scanned: the stylesheet extension and,
//! per pass, the file-name markers that exclude a file from that pass.
//!
//! # Configuration file
//!
//! The default configuration file is `wxss-fix.toml` in the current working
//! directory. Use [`Config::load`] to read it:
//!
//! ```rust,no_run
//! use wxss_fix::config::Config;
//!
//! let config = Config::load(None).expect("failed to load config");
//! assert_eq!(config.discovery.extension, "wxss");
//! ```

use std::path::Path;

/// Name of the configuration file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "wxss-fix.toml";

/// Main configuration.
///
/// All fields carry defaults so the config file can be omitted entirely.
/// The defaults scan `.wxss` files and exclude `test_` fixtures from the
/// patch pass only.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Which files are stylesheets.
    pub discovery: DiscoveryConfig,
    /// Settings for the compatibility (`patch`) pass.
    pub patch: PassConfig,
    /// Settings for the nested-comment (`repair`) pass.
    pub repair: PassConfig,
}

/// Stylesheet discovery settings.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// File extension without the leading dot (e.g. `wxss`).
    ///
    /// A leading dot is accepted in the TOML file and stripped by
    /// [`DiscoveryConfig::normalize`].
    pub extension: String,
}

/// Per-pass settings.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PassConfig {
    /// File-name substrings that exclude a file from the pass.
    ///
    /// Matched against the file name only, never against directory names.
    pub exclude: Vec<String>,
}

impl DiscoveryConfig {
    /// Strips a leading dot and surrounding whitespace from the extension.
    pub fn normalize(&mut self) {
        let trimmed = self.extension.trim();
        self.extension = trimmed.strip_prefix('.').unwrap_or(trimmed).to_string();
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        DiscoveryConfig {
            extension: "wxss".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            discovery: DiscoveryConfig::default(),
            patch: PassConfig {
                exclude: vec!["test_".to_string()],
            },
            repair: PassConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try `wxss-fix.toml` in the current directory.
    /// 3. If that file does not exist either, return [`Config::default()`].
    ///
    /// Sections missing from the file keep their [`Config::default()`]
    /// values.
    ///
    /// # Errors
    ///
    /// Returns `Err(String)` when:
    /// - The explicit path does not exist.
    /// - The file cannot be read from disk.
    /// - The TOML content fails to parse.
    /// - The extension is empty after normalization.
    pub fn load(path: Option<&Path>) -> Result<Config, String> {
        let config_path = if let Some(p) = path {
            if p.exists() {
                Some(p.to_path_buf())
            } else {
                return Err(format!("Config file not found: {}", p.display()));
            }
        } else {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                Some(default_path.to_path_buf())
            } else {
                None
            }
        };

        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
                Config::from_toml(&content)
                    .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))
            }
            None => Ok(Config::default()),
        }
    }

    /// Parses configuration from TOML text.
    ///
    /// # Examples
    ///
    /// ```
    /// use wxss_fix::config::Config;
    ///
    /// let config = Config::from_toml("[discovery]\nextension = \".css\"\n").unwrap();
    /// assert_eq!(config.discovery.extension, "css");
    /// assert_eq!(config.patch.exclude, vec!["test_".to_string()]);
    /// ```
    pub fn from_toml(content: &str) -> Result<Config, String> {
        let mut config: Config = toml::from_str(content).map_err(|e| e.to_string())?;
        config.discovery.normalize();
        if config.discovery.extension.is_empty() {
            return Err("discovery.extension must not be empty".to_string());
        }
        Ok(config)
    }

    /// Returns the exclusion markers for the named pass.
    ///
    /// Unknown pass names have no exclusions.
    pub fn excludes_for(&self, pass: &str) -> &[String] {
        match pass {
            "patch" => &self.patch.exclude,
            "repair" => &self.repair.exclude,
            _ => &[],
        }
    }
}
