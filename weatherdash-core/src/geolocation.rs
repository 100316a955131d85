//! One-shot geolocation sync.
//!
//! When the page has no `lat`/`lon` of its own, a single location request is
//! issued; on success the rounded coordinates are merged into the query state
//! and a replace-navigation is requested. Failures are logged and the page
//! keeps showing the default location. Cancelling before the request resolves
//! discards the result.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use url::form_urlencoded;

use crate::error::LocationError;

pub const LAT_PARAM: &str = "lat";
pub const LON_PARAM: &str = "lon";

/// Ordered query pairs with `URLSearchParams`-style editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pairs: Vec<(String, String)>,
}

impl QueryState {
    /// Parse a raw query string; a leading `?` is ignored.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let pairs = form_urlencoded::parse(raw.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn has_location(&self) -> bool {
        self.has(LAT_PARAM) && self.has(LON_PARAM)
    }

    /// Replace the first `key` in place, drop any later duplicates, or append if absent.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.pairs[first].1 = value;
                let mut index = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = index <= first || k != key;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

/// Fixed 4-decimal rendering; halves round away from zero.
pub fn round_coordinate(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    format!("{rounded:.4}")
}

/// Merge a resolved position into an existing query.
pub fn apply_position(query: &QueryState, position: Position) -> QueryState {
    let mut next = query.clone();
    next.set(LAT_PARAM, round_coordinate(position.latitude));
    next.set(LON_PARAM, round_coordinate(position.longitude));
    next
}

/// Platform capability that answers "where am I" once.
#[async_trait]
pub trait Geolocator: Send + Sync {
    async fn current_position(&self) -> Result<Position, LocationError>;
}

/// Applies a new query to the page, replacing the current history entry.
pub trait QueryNavigator: Send {
    fn replace(&mut self, query: &QueryState);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// Coordinates were already present; nothing to do.
    Skipped,
    AwaitingLocation { pending: bool },
    Resolved,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    Skipped,
    /// No geolocation capability on this platform.
    Unsupported,
    AlreadyAttempted,
    Resolved(QueryState),
    Failed(LocationError),
    Cancelled,
}

/// Small status box shown while the page has no coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationIndicator {
    Locating,
    AccessRequired,
}

impl LocationIndicator {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Locating => "Locating...",
            Self::AccessRequired => "Location access required for local weather",
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeolocationSync {
    query: QueryState,
    state: SyncState,
    attempted: bool,
}

impl GeolocationSync {
    pub fn new(query: QueryState) -> Self {
        let state = if query.has_location() {
            SyncState::Skipped
        } else {
            SyncState::AwaitingLocation { pending: false }
        };

        Self {
            query,
            state,
            attempted: false,
        }
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn indicator(&self) -> Option<LocationIndicator> {
        match self.state {
            SyncState::AwaitingLocation { pending: true } => Some(LocationIndicator::Locating),
            SyncState::AwaitingLocation { pending: false } => Some(LocationIndicator::AccessRequired),
            SyncState::Skipped | SyncState::Resolved => None,
        }
    }

    /// Issue the location request, at most once per sync.
    pub async fn run(
        &mut self,
        geolocator: Option<&dyn Geolocator>,
        navigator: &mut dyn QueryNavigator,
        cancel: &CancellationToken,
    ) -> SyncOutcome {
        match self.state {
            SyncState::Skipped => return SyncOutcome::Skipped,
            SyncState::Resolved => return SyncOutcome::AlreadyAttempted,
            SyncState::AwaitingLocation { .. } if self.attempted => return SyncOutcome::AlreadyAttempted,
            SyncState::AwaitingLocation { .. } => {}
        }

        let Some(geolocator) = geolocator else {
            return SyncOutcome::Unsupported;
        };

        self.attempted = true;
        self.state = SyncState::AwaitingLocation { pending: true };

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            result = geolocator.current_position() => Some(result),
        };

        match result {
            None => {
                tracing::debug!("Geolocation cancelled before resolving; result discarded");
                self.state = SyncState::AwaitingLocation { pending: false };
                SyncOutcome::Cancelled
            }
            Some(Ok(position)) => {
                let next = apply_position(&self.query, position);
                navigator.replace(&next);
                self.query = next.clone();
                self.state = SyncState::Resolved;
                SyncOutcome::Resolved(next)
            }
            Some(Err(err)) => {
                tracing::warn!(error = %err, "Geolocation error");
                self.state = SyncState::AwaitingLocation { pending: false };
                SyncOutcome::Failed(err)
            }
        }
    }
}
