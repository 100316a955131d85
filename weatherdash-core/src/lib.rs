//! Core library for Weather Dash.
//!
//! This crate defines:
//! - Configuration loading
//! - The forecast provider abstraction and the Open-Meteo client
//! - Normalization of raw forecasts into a UI-ready view-model
//! - WMO weather code classification
//! - The one-shot geolocation sync state machine
//!
//! It is used by `weatherdash-web`, but holds no HTTP server or HTML concerns.

pub mod condition;
pub mod config;
pub mod error;
pub mod geolocation;
pub mod model;
pub mod provider;
pub mod session;

pub use condition::{Condition, ConditionKind, classify};
pub use config::{AuthConfig, Config, DebugConfig, LocationConfig, ProviderConfig, ServerConfig};
pub use error::{ForecastError, LocationError};
pub use geolocation::{GeolocationSync, Geolocator, LocationIndicator, Position, QueryNavigator, QueryState};
pub use model::{Coordinates, HourlyPoint, RequestedLocation, WeatherViewModel};
pub use provider::{Clock, ForecastProvider, SystemClock, fetch_forecast};
pub use session::{IdentityProvider, Session, SessionUser};
