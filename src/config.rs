use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

use crate::encyclopedia::DEFAULT_CONTENT_ID;
use crate::lookup::FilmService;
use crate::search::SearchClient;

pub const DEFAULT_SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Process configuration, read once at startup and handed to the core.
#[derive(Debug, Clone)]
pub struct Config {
    pub search_url: String,
    pub search_key: String,
    pub catalog_cx: String,
    pub encyclopedia_cx: String,
    pub content_id: String,
    /// Chat transport credential. The lookups never use it.
    pub bot_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        dotenv().ok(); // Load .env file if present
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Config> {
        let required = |key: &str| {
            get(key).with_context(|| format!("Missing required environment variable: {key}"))
        };
        let or_default = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            search_url: or_default("GOOGLE_SEARCH_URL", DEFAULT_SEARCH_URL),
            search_key: required("GOOGLE_SEARCH_KEY")?,
            catalog_cx: required("GOOGLE_SEARCH_KINOPOISK")?,
            encyclopedia_cx: required("GOOGLE_SEARCH_WIKI")?,
            content_id: or_default("FILMBOT_CONTENT_ID", DEFAULT_CONTENT_ID),
            bot_token: get("BOT_TOKEN"),
        })
    }

    pub fn search_client(&self) -> SearchClient {
        SearchClient::new(
            self.search_url.clone(),
            self.search_key.clone(),
            self.catalog_cx.clone(),
            self.encyclopedia_cx.clone(),
        )
    }

    /// Whether a chat transport credential is configured. An empty value
    /// counts as missing.
    pub fn has_bot_token(&self) -> bool {
        self.bot_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn film_service(&self) -> FilmService {
        FilmService::from_search(self.search_client(), self.content_id.clone())
    }
}
