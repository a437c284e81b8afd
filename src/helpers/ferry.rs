use reqwest::{Client, header};
use tracing::{error, info};

use crate::error::TransportError;

pub const DEFAULT_PDF_BASE_URL: &str = "https://storage.googleapis.com/dd-front-cabin-dd-prod-5ab1";

// The bucket only answers requests that look like they come from the
// brittany-ferries.co.uk cabin availability page.
const BROWSER_HEADERS: [(&str, &str); 12] = [
    ("accept", "application/pdf"),
    ("accept-language", "en-GB,en;q=0.7"),
    ("origin", "https://www.brittany-ferries.co.uk"),
    ("priority", "u=1, i"),
    (
        "sec-ch-ua",
        "\"Not A(Brand\";v=\"8\", \"Chromium\";v=\"132\", \"Brave\";v=\"132\"",
    ),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", "\"macOS\""),
    ("sec-fetch-dest", "empty"),
    ("sec-fetch-mode", "cors"),
    ("sec-fetch-site", "cross-site"),
    ("sec-gpc", "1"),
    (
        "user-agent",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.0.0 Safari/537.36",
    ),
];

pub fn browser_headers() -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();
    for (name, value) in BROWSER_HEADERS {
        headers.insert(
            header::HeaderName::from_static(name),
            header::HeaderValue::from_static(value),
        );
    }
    headers
}

pub fn ferry_client_init() -> Result<Client, TransportError> {
    info!("Building ferry client with browser headers");
    match Client::builder().default_headers(browser_headers()).build() {
        Ok(client) => Ok(client),
        Err(e) => {
            error!("Failed to build ferry client: {}", e);
            Err(e.into())
        }
    }
}

pub fn pdf_url(base_url: &str, route_code: &str) -> String {
    format!(
        "{}/cabin_availability_{}.pdf",
        base_url.trim_end_matches('/'),
        route_code
    )
}

/// Downloads the cabin availability PDF for a route.
pub async fn fetch_pdf(
    client: &Client,
    base_url: &str,
    route_code: &str,
) -> Result<Vec<u8>, TransportError> {
    let url = pdf_url(base_url, route_code);
    info!("Fetching cabin availability from {}", url);

    let response = match client.get(&url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Failed to send request to {}: {}", url, e);
            return Err(e.into());
        }
    };

    let status = response.status();
    if !status.is_success() {
        error!("{} returned error status {}", url, status);
        return Err(TransportError::Status { status, url });
    }

    let bytes = response.bytes().await?;
    info!("Received {} bytes", bytes.len());
    Ok(bytes.to_vec())
}
