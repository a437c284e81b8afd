use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ROUTE_CODE not found in environment variables")]
    MissingRouteCode,
    #[error("EMAIL_PORT must be a port number, got '{0}'")]
    InvalidPort(String),
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{url} returned status {status}")]
    Status { status: StatusCode, url: String },
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to load PDF: {0}")]
    Document(#[from] lopdf::Error),
    #[error("failed to extract text from page {page}: {source}")]
    Page {
        page: u32,
        #[source]
        source: lopdf::Error,
    },
}

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("failed to build email: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("failed to send email: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Failures that end a watch run. Per-line and per-notification problems
/// never surface here.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
