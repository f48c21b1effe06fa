use reqwest::{Client, StatusCode};
use std::{sync::Arc, time::Duration};
use thiserror::Error;
use tokio::{task::JoinHandle, time};
use tracing::{debug, warn};

use crate::dashboard::binding::ResolveBindings;
use crate::models::snapshot::StatsSnapshot;

/// Cadence of the dashboard refresh loop.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(30);
/// Stats endpoint, relative to the panel base URL. No query, no body, no
/// custom headers.
pub const STATS_PATH: &str = "/api/stats";
/// The refresh loop only ever runs on the dashboard root.
pub const DASHBOARD_PATH: &str = "/";

/// Why a single poll produced nothing. Logged and dropped by the loop;
/// never escalated past the tick that hit it.
#[derive(Debug, Error)]
pub enum PollError {
    #[error("stats request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("stats endpoint returned {0}")]
    Status(StatusCode),
    #[error("malformed stats payload: {0}")]
    Malformed(#[source] reqwest::Error),
}

/// Periodic dashboard refresher. Fetches the panel's stats snapshot on a
/// fixed cadence and writes the counters into whichever cards the surface
/// currently exposes.
///
/// One instance is expected per process. Activation is gated on the
/// current route; off the dashboard root the poller never starts and never
/// issues a request.
pub struct StatsPoller<R> {
    http_client: Client,
    stats_url: String,
    resolver: Arc<R>,
    period: Duration,
}

impl<R: ResolveBindings + 'static> StatsPoller<R> {
    /// `period` falls back to [`REFRESH_INTERVAL`] when not given.
    pub fn new(base_url: impl Into<String>, resolver: Arc<R>, period: Option<Duration>) -> Self {
        let base = base_url.into();
        Self {
            http_client: Client::new(),
            stats_url: format!("{}{}", base.trim_end_matches('/'), STATS_PATH),
            resolver,
            period: period.unwrap_or(REFRESH_INTERVAL),
        }
    }

    /// Start the refresh loop if `route` is the dashboard root. On any
    /// other route nothing is registered: no timer, no request, ever.
    pub fn activate(self, route: &str) -> Option<PollerHandle> {
        if route != DASHBOARD_PATH {
            return None;
        }
        let task = tokio::spawn(self.run());
        Some(PollerHandle { task })
    }

    async fn run(self) {
        // The first poll fires one full period after activation, not
        // immediately.
        let start = time::Instant::now() + self.period;
        let mut ticker = time::interval_at(start, self.period);
        loop {
            ticker.tick().await;
            let client = self.http_client.clone();
            let url = self.stats_url.clone();
            let resolver = self.resolver.clone();
            // Each tick is its own fire-and-forget task: a slow response
            // never delays the next tick, and overlapping completions stay
            // last-write-wins with no ordering between them.
            tokio::spawn(async move {
                match poll_once(&client, &url, resolver.as_ref()).await {
                    Ok(snapshot) => debug!(?snapshot, "dashboard stats refreshed"),
                    Err(err) => warn!(error = %err, "stats refresh failed"),
                }
            });
        }
    }
}

/// One atomic fetch-then-patch unit. Bindings are resolved fresh after the
/// response arrives, so cards swapped in since the previous tick are
/// written too. On a non-success status or a bad body the surface is left
/// untouched.
pub async fn poll_once<R>(
    client: &Client,
    stats_url: &str,
    resolver: &R,
) -> Result<StatsSnapshot, PollError>
where
    R: ResolveBindings + ?Sized,
{
    let response = client
        .get(stats_url)
        .send()
        .await
        .map_err(PollError::Request)?;

    let status = response.status();
    if !status.is_success() {
        return Err(PollError::Status(status));
    }

    let snapshot: StatsSnapshot = response.json().await.map_err(PollError::Malformed)?;
    resolver.resolve_bindings().apply(&snapshot);
    Ok(snapshot)
}

/// Handle to a running refresh loop. Dropping it detaches the loop, which
/// then runs for the life of the process; [`PollerHandle::stop`] tears it
/// down explicitly.
pub struct PollerHandle {
    task: JoinHandle<()>,
}

impl PollerHandle {
    pub fn stop(self) {
        self.task.abort();
    }

    pub fn is_stopped(&self) -> bool {
        self.task.is_finished()
    }
}
