//! The weather lookup controller: query text, one request at a time, and the resulting state.
//!
//! Submissions made while a request is in flight are ignored. The in-flight check, the
//! credential and query guards, and the switch to `Loading` happen in a single state update, so
//! two concurrent submissions can never both reach the provider.
//!
//! There is no way to abort a request from outside. If a `submit` future is dropped while the
//! request is in flight, the state becomes `Failed` with a cancellation message so the next
//! submission is admitted again.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    error::LookupError,
    model::{RequestState, WeatherResult},
    provider::WeatherProvider,
};

/// What a call to [`WeatherLookupController::submit`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A request was already in flight; nothing changed.
    Ignored,
    Succeeded(WeatherResult),
    Failed(LookupError),
}

#[derive(Debug)]
pub struct WeatherLookupController {
    config: Config,
    provider: Arc<dyn WeatherProvider>,
    query: watch::Sender<String>,
    state: watch::Sender<RequestState>,
}

const CANCELLED: &str = "Request cancelled";

/// Fails the in-flight request if dropped before the outcome is stored.
struct InFlight<'a> {
    state: &'a watch::Sender<RequestState>,
    armed: bool,
}

impl<'a> InFlight<'a> {
    fn new(state: &'a watch::Sender<RequestState>) -> Self {
        Self { state, armed: true }
    }

    fn finish(mut self, next: RequestState) {
        self.armed = false;
        self.state.send_replace(next);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed {
            warn!("lookup dropped while in flight");
            let cancelled = LookupError::Provider(CANCELLED.to_string());
            self.state.send_replace(RequestState::Failed(cancelled));
        }
    }
}

enum Admission {
    Busy,
    Rejected(LookupError),
    Accepted { city: String, api_key: String },
}

impl WeatherLookupController {
    pub fn new(config: Config, provider: Arc<dyn WeatherProvider>) -> Self {
        Self {
            config,
            provider,
            query: watch::Sender::new(String::new()),
            state: watch::Sender::new(RequestState::Idle),
        }
    }

    /// Replace the query text. Not validated until [`submit`](Self::submit).
    pub fn set_query(&self, text: impl Into<String>) {
        self.query.send_replace(text.into());
    }

    pub fn query(&self) -> String {
        self.query.borrow().clone()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> RequestState {
        self.state.borrow().clone()
    }

    /// Receive every state transition, starting from the current one.
    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state.subscribe()
    }

    /// Run one lookup for the current query.
    ///
    /// Guard failures (credential, then empty query) set `Failed` without touching the network.
    /// Otherwise exactly one provider call is made and its outcome replaces the state wholesale.
    pub async fn submit(&self) -> SubmitOutcome {
        let (city, api_key) = match self.admit() {
            Admission::Busy => {
                debug!("lookup already in flight; submission ignored");
                return SubmitOutcome::Ignored;
            }
            Admission::Rejected(err) => {
                debug!(error = %err, "submission rejected before request");
                return SubmitOutcome::Failed(err);
            }
            Admission::Accepted { city, api_key } => (city, api_key),
        };

        let in_flight = InFlight::new(&self.state);

        match self.provider.current_weather(&city, &api_key).await {
            Ok(result) => {
                info!(city = %city, location = %result.location(), "weather lookup succeeded");
                in_flight.finish(RequestState::Success(result.clone()));
                SubmitOutcome::Succeeded(result)
            }
            Err(err) => {
                warn!(city = %city, error = %err, "weather lookup failed");
                in_flight.finish(RequestState::Failed(err.clone()));
                SubmitOutcome::Failed(err)
            }
        }
    }

    fn admit(&self) -> Admission {
        let mut admission = Admission::Busy;

        self.state.send_if_modified(|state| {
            if state.is_loading() {
                return false;
            }

            let (next, decision) = match self.check_guards() {
                Ok((city, api_key)) => {
                    (RequestState::Loading, Admission::Accepted { city, api_key })
                }
                Err(err) => (RequestState::Failed(err.clone()), Admission::Rejected(err)),
            };

            *state = next;
            admission = decision;
            true
        });

        admission
    }

    fn check_guards(&self) -> Result<(String, String), LookupError> {
        let api_key = self.config.credential()?.to_string();

        let city = self.query.borrow().trim().to_string();
        if city.is_empty() {
            return Err(LookupError::Validation);
        }

        Ok((city, api_key))
    }
}
