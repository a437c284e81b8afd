use std::io::{self, Write};

use reqwest::Client;
use tracing::{error, info, warn};

use crate::{
    config::WatchConfig,
    error::WatchError,
    helpers::{email::Notifier, ferry, matcher::find_availability, pdf::extract_pages},
    models::availability::AvailabilityHit,
};

pub const NO_AVAILABILITY_MESSAGE: &str =
    "No matching cabins available for the specified date and time.";

/// Fetches the route's availability PDF, looks for the configured sailing and
/// notifies about every cabin type with a positive count.
pub struct CabinWatcher<N> {
    pub client: Client,
    pub notifier: N,
    pub config: WatchConfig,
}

impl<N: Notifier> CabinWatcher<N> {
    pub fn new(client: Client, notifier: N, config: WatchConfig) -> Self {
        info!("Creating new CabinWatcher for route {}", config.route_code);
        Self {
            client,
            notifier,
            config,
        }
    }

    /// Runs one check, printing results to stdout.
    pub async fn run(&self) -> Result<Vec<AvailabilityHit>, WatchError> {
        self.run_with_output(&mut io::stdout()).await
    }

    /// Runs one check, writing one line per hit (or the no-availability
    /// message) to `out`. Only transport and document failures end the run;
    /// notification failures are logged and the remaining hits still go out.
    pub async fn run_with_output<W: Write>(
        &self,
        out: &mut W,
    ) -> Result<Vec<AvailabilityHit>, WatchError> {
        let pdf = ferry::fetch_pdf(
            &self.client,
            &self.config.pdf_base_url,
            &self.config.route_code,
        )
        .await?;

        let pages = extract_pages(&pdf)?;

        let hits = match &self.config.sailing {
            Some(target) => {
                info!("Scanning {} page(s) for sailing {}", pages.len(), target);
                find_availability(&pages, target, self.config.cabin_indexes.as_ref())
            }
            None => {
                warn!("No sailing date/time configured, skipping scan");
                Vec::new()
            }
        };

        self.report(&hits, out).await;
        Ok(hits)
    }

    async fn report<W: Write>(&self, hits: &[AvailabilityHit], out: &mut W) {
        if hits.is_empty() {
            info!("No availability found");
            emit(out, NO_AVAILABILITY_MESSAGE);
            return;
        }

        for hit in hits {
            let message = hit.message();
            emit(out, &message);
            info!("{}", message);

            if let Err(e) = self.notifier.send(&hit.subject(), &message).await {
                error!("Notification for index {} failed: {}", hit.index, e);
            }
        }
    }
}

fn emit<W: Write>(out: &mut W, line: &str) {
    if let Err(e) = writeln!(out, "{line}") {
        warn!("Failed to write report line: {}", e);
    }
}
