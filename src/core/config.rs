//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Path to a JSON product catalog
    /// Example: ./data/catalog.json
    pub catalog_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            catalog_path: lookup("CATALOG_PATH").filter(|v| !v.trim().is_empty()),
        }
    }

    /// Check if a catalog file is configured
    pub fn has_catalog(&self) -> bool {
        self.catalog_path.is_some()
    }
}
