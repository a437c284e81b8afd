//! Run configuration, read once at startup from the environment (and an
//! optional `.env` file) and passed by reference from there on.

use tracing::{info, warn};

use crate::{
    error::ConfigError,
    helpers::{
        email::{DEFAULT_SMTP_PORT, EmailSettings},
        ferry::DEFAULT_PDF_BASE_URL,
    },
    models::availability::{CabinIndexFilter, SailingTarget},
};

#[derive(Clone, Debug)]
pub struct WatchConfig {
    pub route_code: String,
    /// `None` when `SAILING_DATE_TIME` is missing or has no time half.
    pub sailing: Option<SailingTarget>,
    /// `None` means every row index is inspected.
    pub cabin_indexes: Option<CabinIndexFilter>,
    pub email: EmailSettings,
    pub pdf_base_url: String,
}

impl WatchConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded settings from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => warn!("Ignoring unreadable .env file: {}", e),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source. Blank values are
    /// treated as absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = match get("EMAIL_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_SMTP_PORT,
        };

        let route_code = get("ROUTE_CODE").ok_or(ConfigError::MissingRouteCode)?;

        let sailing_raw = get("SAILING_DATE_TIME").unwrap_or_default();
        let sailing = SailingTarget::parse(&sailing_raw);
        if sailing.is_none() {
            warn!(
                "SAILING_DATE_TIME '{}' is not a '<date> <time>' pair, nothing can match",
                sailing_raw
            );
        }

        let cabin_indexes = get("CABIN_INDEXES").and_then(|raw| CabinIndexFilter::parse(&raw));

        Ok(Self {
            route_code,
            sailing,
            cabin_indexes,
            email: EmailSettings {
                to: get("EMAIL_TO"),
                from: get("EMAIL_FROM"),
                host: get("EMAIL_HOST"),
                port,
                user: get("EMAIL_USER"),
                pass: get("EMAIL_PASS"),
            },
            pdf_base_url: get("CABIN_PDF_BASE_URL")
                .unwrap_or_else(|| DEFAULT_PDF_BASE_URL.to_string()),
        })
    }
}
