/// Core data types for the weather alert service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic beyond trivial accessors, no I/O, and no external
/// collaborators — only types.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

// ---------------------------------------------------------------------------
// Forecast granularity
// ---------------------------------------------------------------------------

/// Width of one forecast entry's window, in hours. The OpenWeatherMap 5-day
/// forecast reports one entry per 3-hour step.
pub const FORECAST_STEP_HOURS: i64 = 3;

// ---------------------------------------------------------------------------
// Geographic types
// ---------------------------------------------------------------------------

/// WGS84 coordinates resolved for a city via the geocoding API.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

// ---------------------------------------------------------------------------
// Reading types
// ---------------------------------------------------------------------------

/// One weather state attached to a forecast entry. A forecast entry can
/// carry several of these (e.g. "Rain" and "Mist" simultaneously).
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherCondition {
    /// Primary condition label, e.g. "Rain", "Clouds".
    pub label: String,
    /// Free-text detail, e.g. "light rain", "overcast clouds".
    pub description: String,
}

/// A single 3-hour forecast step, already converted to the forecast
/// location's local wall-clock time by the ingest layer.
///
/// `rain_mm_3h` is the rainfall volume predicted for the trailing 3-hour
/// window; the upstream API omits the field entirely for dry periods.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    pub timestamp: NaiveDateTime,
    pub conditions: Vec<WeatherCondition>,
    pub rain_mm_3h: Option<f64>,
}

/// A parsed forecast feed for one location: the 3-hour entries (already
/// converted to location-local wall-clock time by the ingest layer) plus the
/// location's UTC offset, needed to derive the local "now" at analysis time.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub entries: Vec<ForecastEntry>,
    pub utc_offset_seconds: i32,
}

impl Forecast {
    /// Converts a UTC instant to this forecast location's local wall-clock
    /// time, for use as the analysis reference "now".
    pub fn local_time(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        (instant + Duration::seconds(self.utc_offset_seconds as i64)).naive_utc()
    }
}

/// An instantaneous current-conditions snapshot for one location.
///
/// Immutable once built; each severity evaluation consumes exactly one of
/// these. Temperatures are Celsius, wind speeds m/s (metric API units).
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentReading {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub temperature_c: f64,
    pub humidity: i64,
    pub wind_speed_ms: f64,
    /// Primary condition label, e.g. "Thunderstorm".
    pub condition: String,
    /// Free-text detail, e.g. "thunderstorm with light drizzle".
    pub description: String,
}

// ---------------------------------------------------------------------------
// Analysis output types
// ---------------------------------------------------------------------------

/// A half-open interval [start, end) of forecast rain, in location-local time.
///
/// Windows produced by the merge step in `analysis::rain` are non-overlapping
/// and sorted by start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RainWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl RainWindow {
    /// Builds the window covered by a single forecast entry starting at `t`.
    pub fn for_entry(t: NaiveDateTime) -> Self {
        RainWindow {
            start: t,
            end: t + Duration::hours(FORECAST_STEP_HOURS),
        }
    }
}

/// Outcome of a severe-condition evaluation: `severe` is true exactly when
/// at least one rule matched, and `reasons` lists the matched rules' canned
/// messages in catalog order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlertDecision {
    pub severe: bool,
    pub reasons: Vec<String>,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching or parsing weather data.
#[derive(Debug, PartialEq)]
pub enum WxError {
    /// Non-2xx HTTP response from the weather API.
    HttpError(u16),
    /// The response body could not be deserialized.
    ParseError(String),
    /// The geocoding API returned no match for the requested city.
    CityNotFound(String),
    /// The response parsed but lacked a required section (e.g. no `main`
    /// block in a current-weather response).
    IncompleteData(String),
    /// The request could not be sent at all (DNS, connect, timeout).
    RequestFailed(String),
}

impl std::fmt::Display for WxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WxError::HttpError(code) => write!(f, "HTTP error: {}", code),
            WxError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            WxError::CityNotFound(city) => write!(f, "City not found: {}", city),
            WxError::IncompleteData(what) => write!(f, "Incomplete API data: {}", what),
            WxError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
        }
    }
}

impl std::error::Error for WxError {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn local(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 6)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_entry_window_spans_one_forecast_step() {
        let w = RainWindow::for_entry(local(9));
        assert_eq!(w.start, local(9));
        assert_eq!(w.end, local(12));
    }

    #[test]
    fn test_windows_order_by_start_time() {
        let early = RainWindow::for_entry(local(6));
        let late = RainWindow::for_entry(local(18));
        assert!(early < late);
    }

    #[test]
    fn test_error_display_names_the_city() {
        let err = WxError::CityNotFound("Atlantis".to_string());
        assert_eq!(err.to_string(), "City not found: Atlantis");
    }
}
