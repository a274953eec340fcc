/// wxalert_service: personal severe-weather email alert service.
///
/// # Module structure
///
/// ```text
/// wxalert_service
/// ├── model       — shared data types (ForecastEntry, CurrentReading, WxError, …)
/// ├── config      — deployment policy (service.toml) and subscriber registry
/// │                 (subscribers.toml) loaders
/// ├── ingest
/// │   ├── owm     — OpenWeatherMap APIs: URL construction + JSON parsing,
/// │   │             WeatherProvider trait and blocking client
/// │   └── fixtures (test only) — representative API response payloads
/// ├── analysis
/// │   └── rain    — today's rain outlook: window detection, merging, formatting
/// ├── alert
/// │   └── conditions — severe-condition keyword/threshold evaluation
/// ├── notify      — message composition + Notifier delivery seam
/// ├── scheduler   — main polling loop (fan-out fetch, evaluate, dispatch)
/// └── endpoint    — HTTP API for on-demand city outlooks
/// ```

/// Public modules
pub mod alert;
pub mod analysis;
pub mod config;
pub mod endpoint;
pub mod ingest;
pub mod model;
pub mod notify;
pub mod scheduler;
