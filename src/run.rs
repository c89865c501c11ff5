//! Application execution logic.
//!
//! One run reads the last observation (creating the store on first use),
//! fetches the current public address, appends it, prints the outcome and
//! then optionally notifies the webhook.

use std::fmt;

use chrono::TimeDelta;
use thiserror::Error;

use ip_tracker::address::{AddressFetcher, FetchError, HttpAddressFetcher};
use ip_tracker::config::ValidatedConfig;
use ip_tracker::detect::{Detection, detect};
use ip_tracker::history::{
    HistoryStore, Observation, SqliteHistoryStore, StoreError, format_timestamp,
};
use ip_tracker::time::{Clock, SystemClock};
use ip_tracker::transport::{HttpError, ReqwestClient};
use ip_tracker::webhook::{DiscordWebhook, Notifier, NotifyError, message};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to build the HTTP client.
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] HttpError),

    /// The history store could not be created, read or written.
    #[error("History store error: {0}")]
    Store(#[from] StoreError),

    /// The public address could not be fetched.
    #[error("Failed to fetch public address: {0}")]
    Fetch(#[from] FetchError),

    /// The notification could not be delivered.
    #[error("Failed to send notification: {0}")]
    Notify(#[from] NotifyError),
}

/// What a run recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing was on record; this is the first observation.
    FirstRecorded {
        /// The observation just appended
        current: Observation,
    },

    /// The address matches the last recorded one.
    Unchanged {
        /// The observation just appended
        current: Observation,
        /// The last observation before this run
        previous: Observation,
    },

    /// The address differs from the last recorded one.
    Changed {
        /// The observation just appended
        current: Observation,
        /// The last observation before this run
        previous: Observation,
    },
}

impl Outcome {
    /// Returns the observation appended by this run.
    #[must_use]
    pub const fn current(&self) -> &Observation {
        match self {
            Self::FirstRecorded { current }
            | Self::Unchanged { current, .. }
            | Self::Changed { current, .. } => current,
        }
    }

    /// Returns the webhook message for this outcome, if it warrants one.
    #[must_use]
    pub fn notification(&self) -> Option<String> {
        match self {
            Self::FirstRecorded { current } => Some(message::tracking_started(&current.address)),
            Self::Unchanged { .. } => None,
            Self::Changed { current, previous } => Some(message::address_changed(
                &previous.address,
                &current.address,
            )),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstRecorded { current } => write!(
                f,
                "Stored public IP address {} for the first time",
                current.address
            ),
            Self::Unchanged { current, previous } => write!(
                f,
                "Public IP address {} unchanged since {}",
                current.address,
                format_timestamp(&previous.observed_at)
            ),
            Self::Changed { current, previous } => write!(
                f,
                "Public IP address changed from {} to {}",
                previous.address, current.address
            ),
        }
    }
}

/// How a notification is handled.
#[derive(Debug)]
pub enum Delivery<N> {
    /// Notifications are turned off.
    Disabled,
    /// Log the message instead of sending it.
    DryRun,
    /// Send through the notifier.
    Webhook(N),
}

/// Executes one tracking run.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built, or if any store,
/// fetch or notify step fails. An observation appended before a failed
/// notification stays recorded.
///
/// Excluded from coverage - talks to the network.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<Outcome, RunError> {
    let client = ReqwestClient::with_timeout(config.http_timeout).map_err(RunError::Client)?;

    let store = SqliteHistoryStore::new(&config.db_path);
    let fetcher = HttpAddressFetcher::new(client.clone(), config.address_url.clone());
    let delivery = create_delivery(&config, client);

    tracing::info!("Using address history at {}", store.path().display());
    tracing::debug!("Resolving public address via {}", fetcher.endpoint());

    let outcome = record(&store, &fetcher, &SystemClock).await?;
    println!("{outcome}");

    announce(&outcome, &delivery).await?;
    Ok(outcome)
}

/// Creates the notification delivery from configuration.
fn create_delivery<H>(config: &ValidatedConfig, client: H) -> Delivery<DiscordWebhook<H>> {
    let Some(ref notifications) = config.notifications else {
        return Delivery::Disabled;
    };

    if let Some(ref id) = notifications.discord_id {
        tracing::debug!("Notifications configured for Discord user {id}");
    }

    if config.dry_run {
        tracing::info!("Dry-run mode enabled - notifications will be logged but not sent");
        return Delivery::DryRun;
    }

    Delivery::Webhook(DiscordWebhook::new(client, notifications.target.clone()))
}

/// Records the current address and classifies it against the history.
///
/// Creates the store when it does not exist yet. The observation is
/// appended in every successful case, including when the address is unchanged.
///
/// # Errors
///
/// Returns [`RunError::Store`] or [`RunError::Fetch`]. A fetch failure
/// happens before anything is appended.
pub async fn record<S, F, C>(store: &S, fetcher: &F, clock: &C) -> Result<Outcome, RunError>
where
    S: HistoryStore,
    F: AddressFetcher,
    C: Clock,
{
    let latest = if store.exists() {
        store.latest()?
    } else {
        tracing::info!("No address history found, creating it");
        store.initialize()?;
        None
    };

    if latest.is_none() {
        tracing::info!("No address on record yet");
    }

    tracing::info!("Fetching public IP address");
    let address = fetcher.fetch().await?;
    let current = Observation::new(address, clock.now());

    let detection = detect(latest, &current.address);
    store.append(&current)?;
    tracing::debug!("Appended observation of {}", current.address);

    let outcome = match detection {
        Detection::FirstObservation => Outcome::FirstRecorded { current },
        Detection::Unchanged { previous } => {
            tracing::info!(
                "Last check was {} ago",
                format_elapsed(current.observed_at - previous.observed_at)
            );
            Outcome::Unchanged { current, previous }
        }
        Detection::Changed { previous } => Outcome::Changed { current, previous },
    };

    Ok(outcome)
}

/// Sends the notification an outcome calls for, if any.
///
/// # Errors
///
/// Returns [`RunError::Notify`] when delivery through the webhook fails.
pub async fn announce<N: Notifier>(outcome: &Outcome, delivery: &Delivery<N>) -> Result<(), RunError> {
    let Some(message) = outcome.notification() else {
        return Ok(());
    };

    match delivery {
        Delivery::Disabled => {
            tracing::debug!("Notifications disabled, not sending: {message}");
        }
        Delivery::DryRun => {
            tracing::info!("Dry-run: would notify: {message}");
        }
        Delivery::Webhook(notifier) => {
            let status = notifier.notify(&message).await?;
            tracing::info!("Notification delivered (HTTP {status})");
        }
    }

    Ok(())
}

/// Formats an elapsed time as `1d 2h 3m 4s`, omitting leading zero units.
fn format_elapsed(elapsed: TimeDelta) -> String {
    let total = elapsed.num_seconds().max(0);
    let (days, rest) = (total / 86_400, total % 86_400);
    let (hours, rest) = (rest / 3_600, rest % 3_600);
    let (minutes, seconds) = (rest / 60, rest % 60);

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {seconds}s")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}
