//! Runtime configuration read from the process environment.
//!
//! `main.rs` loads an optional `.env` file first, so every variable below can
//! also be set there:
//!
//! - `APP_ENV`: `testing` selects `questions-test.json`, anything else `questions.json`.
//! - `QUESTIONS_FILE`: explicit storage path, wins over `APP_ENV`.
//! - `HOST` / `PORT`: bind address of the HTTP server.

use std::path::PathBuf;

const PRODUCTION_FILE: &str = "./questions.json";
const TESTING_FILE: &str = "./questions-test.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Path of the JSON file holding the question collection.
    pub storage_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            storage_path: PathBuf::from(PRODUCTION_FILE),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration through `lookup`, falling back to the defaults
    /// for missing or unparsable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();

        let storage_path = match lookup("QUESTIONS_FILE") {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ if lookup("APP_ENV").as_deref() == Some("testing") => PathBuf::from(TESTING_FILE),
            _ => default.storage_path,
        };

        Self {
            host: lookup("HOST").unwrap_or(default.host),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.port),
            storage_path,
        }
    }
}
