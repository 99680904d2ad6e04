use crate::models::{LookbackBounds, ScanConfig};
use crate::services::scanner::DEFAULT_KEYWORDS;
use crate::services::youtube_api::{ReqwestTransport, YoutubeApi};
use crate::AppState;
use anyhow::Result;
use env_logger::Builder;
use lazy_static::lazy_static;
use log::{info, warn, LevelFilter};
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::env;
use std::sync::Arc;

pub const YOUTUBE_API_KEY_NAME: &str = "YOUTUBE_API_KEY";

lazy_static! {
    pub static ref YOUTUBE_API_BASE_URL: String = env::var("YOUTUBE_API_BASE_URL")
        .unwrap_or_else(|_| "https://www.googleapis.com/youtube/v3".to_string());
    pub static ref FRONTEND_ORIGIN: String =
        env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:8080".to_string());
}

/// Source of named credentials. Resolved once at startup and handed to the API client.
pub trait SecretStore {
    fn secret(&self, name: &str) -> Result<String>;
}

/// Reads secrets from the process environment (after `.env` has been loaded).
pub struct EnvSecretStore;

impl SecretStore for EnvSecretStore {
    fn secret(&self, name: &str) -> Result<String> {
        let value = env::var(name)
            .map_err(|_| anyhow::anyhow!("{name} environment variable must be set"))?;
        if value.trim().is_empty() {
            return Err(anyhow::anyhow!("{name} environment variable is empty"));
        }
        Ok(value)
    }
}

pub fn init_logger() {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .try_init()
        .ok();
    info!("Starting viral topics backend...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            subscriber_threshold: 53_000,
            max_results_per_keyword: 5,
            lookback: LookbackBounds::default(),
        }
    }
}

impl Default for LookbackBounds {
    fn default() -> Self {
        Self {
            min: 1,
            max: 30,
            default: 5,
        }
    }
}

impl ScanConfig {
    /// Built-in defaults with the optional `SCAN_KEYWORDS`, `SMALL_CHANNEL_SUBSCRIBER_CUTOFF`
    /// and `MAX_RESULTS_PER_KEYWORD` overrides applied.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("SCAN_KEYWORDS") {
            let keywords: Vec<String> = raw
                .split('|')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(String::from)
                .collect();
            if keywords.is_empty() {
                warn!("SCAN_KEYWORDS is set but contains no keywords, keeping defaults");
            } else {
                self.keywords = keywords;
            }
        }

        if let Some(raw) = lookup("SMALL_CHANNEL_SUBSCRIBER_CUTOFF") {
            match raw.trim().parse::<u64>() {
                Ok(threshold) => self.subscriber_threshold = threshold,
                Err(e) => warn!("Ignoring SMALL_CHANNEL_SUBSCRIBER_CUTOFF={raw:?}: {e}"),
            }
        }

        if let Some(raw) = lookup("MAX_RESULTS_PER_KEYWORD") {
            match raw.trim().parse::<u32>() {
                // the search endpoint caps maxResults at 50
                Ok(cap) if (1..=50).contains(&cap) => self.max_results_per_keyword = cap,
                Ok(cap) => warn!("Ignoring MAX_RESULTS_PER_KEYWORD={cap}: must be within 1..=50"),
                Err(e) => warn!("Ignoring MAX_RESULTS_PER_KEYWORD={raw:?}: {e}"),
            }
        }

        self
    }
}

pub fn create_youtube_api(secrets: &dyn SecretStore) -> Result<YoutubeApi> {
    let api_key = secrets.secret(YOUTUBE_API_KEY_NAME)?;
    let base_url = &*YOUTUBE_API_BASE_URL;
    info!("Using YouTube Data API at: {base_url}");

    Ok(YoutubeApi::new(
        Arc::new(ReqwestTransport::new()),
        api_key,
        base_url.clone(),
    ))
}

pub fn create_app_state(secrets: &dyn SecretStore) -> Result<AppState> {
    let api = create_youtube_api(secrets)?;
    let scan_config = ScanConfig::from_env();

    info!(
        "Loaded scan config: {} keywords, subscriber threshold {}, {} results per keyword",
        scan_config.keywords.len(),
        scan_config.subscriber_threshold,
        scan_config.max_results_per_keyword
    );

    Ok(AppState { api, scan_config })
}

pub fn create_cors() -> Result<rocket_cors::Cors> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::some_exact(&[FRONTEND_ORIGIN.as_str()]))
        .allowed_methods(
            vec![Method::Get, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&["Accept", "Content-Type"]))
        .allow_credentials(false)
        .to_cors()
        .map_err(|e| anyhow::anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}
