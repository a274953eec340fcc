/// OpenWeatherMap API client.
///
/// Handles URL construction and JSON response parsing for the three
/// endpoints this service consumes:
///   - Geocoding:      https://api.openweathermap.org/geo/1.0/direct
///   - Current:        https://api.openweathermap.org/data/2.5/weather
///   - 5-day forecast: https://api.openweathermap.org/data/2.5/forecast
///
/// All requests use metric units. Forecast entry timestamps arrive as unix
/// epoch seconds; the parser shifts them by the city block's UTC offset so
/// downstream analysis works in the location's local wall-clock time. See
/// `fixtures.rs` for annotated examples of the response shapes.

use chrono::DateTime;
use serde::Deserialize;

use crate::model::{
    Coordinates, CurrentReading, Forecast, ForecastEntry, WeatherCondition, WxError,
};

const GEO_BASE_URL: &str = "https://api.openweathermap.org/geo/1.0/direct";
const WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const FORECAST_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

// ---------------------------------------------------------------------------
// Provider trait
// ---------------------------------------------------------------------------

/// Source of weather data for one location.
///
/// The scheduler and HTTP endpoint depend on this trait rather than on the
/// concrete client, so evaluation logic can be exercised without network
/// access. Implementations must be shareable across the scheduler's worker
/// threads.
pub trait WeatherProvider: Send + Sync {
    /// Resolves a city name to coordinates.
    fn geocode(&self, city: &str) -> Result<Coordinates, WxError>;

    /// Fetches the current conditions at the given coordinates.
    fn current_weather(&self, coords: Coordinates) -> Result<CurrentReading, WxError>;

    /// Fetches the 5-day/3-hour forecast for the given coordinates.
    fn forecast(&self, coords: Coordinates) -> Result<Forecast, WxError>;
}

// ---------------------------------------------------------------------------
// Serde structures for API response deserialization
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GeoEntry {
    lat: Option<f64>,
    lon: Option<f64>,
}

#[derive(Deserialize)]
struct CurrentResponse {
    name: String,
    main: Option<MainBlock>,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
    wind: Option<WindBlock>,
}

#[derive(Deserialize)]
struct MainBlock {
    temp: f64,
    humidity: i64,
}

#[derive(Deserialize)]
struct ConditionBlock {
    main: String,
    description: String,
}

#[derive(Deserialize)]
struct WindBlock {
    speed: f64,
}

#[derive(Deserialize)]
struct ForecastResponse {
    list: Vec<ForecastItem>,
    city: Option<CityBlock>,
}

#[derive(Deserialize)]
struct ForecastItem {
    dt: i64,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
    rain: Option<RainBlock>,
}

#[derive(Deserialize)]
struct RainBlock {
    #[serde(rename = "3h")]
    volume_3h: Option<f64>,
}

#[derive(Deserialize)]
struct CityBlock {
    timezone: Option<i32>,
}

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

/// Builds a geocoding URL for a city name. The name is percent-encoded and
/// the request limited to the single best match.
pub fn build_geocode_url(city: &str, api_key: &str) -> String {
    format!(
        "{}?q={}&limit=1&appid={}",
        GEO_BASE_URL,
        urlencoding::encode(city),
        api_key
    )
}

/// Builds a current-weather URL for coordinates, metric units.
pub fn build_current_url(coords: Coordinates, api_key: &str) -> String {
    format!(
        "{}?lat={}&lon={}&appid={}&units=metric",
        WEATHER_BASE_URL, coords.latitude, coords.longitude, api_key
    )
}

/// Builds a 5-day forecast URL for coordinates, metric units.
pub fn build_forecast_url(coords: Coordinates, api_key: &str) -> String {
    format!(
        "{}?lat={}&lon={}&appid={}&units=metric",
        FORECAST_BASE_URL, coords.latitude, coords.longitude, api_key
    )
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parses a geocoding response into coordinates.
///
/// # Errors
/// - `WxError::CityNotFound` — the API returned an empty match array.
/// - `WxError::IncompleteData` — a match was returned without lat/lon.
pub fn parse_geocode_response(json: &str, city: &str) -> Result<Coordinates, WxError> {
    let entries: Vec<GeoEntry> = serde_json::from_str(json)
        .map_err(|e| WxError::ParseError(format!("geocode deserialization failed: {}", e)))?;

    let entry = entries
        .into_iter()
        .next()
        .ok_or_else(|| WxError::CityNotFound(city.to_string()))?;

    match (entry.lat, entry.lon) {
        (Some(latitude), Some(longitude)) => Ok(Coordinates { latitude, longitude }),
        _ => Err(WxError::IncompleteData(
            "geocode entry missing lat/lon".to_string(),
        )),
    }
}

/// Parses a current-weather response into a `CurrentReading`.
///
/// The city name comes from the response's `name` field; coordinates are
/// threaded through from the request since the reading is keyed by them.
///
/// # Errors
/// - `WxError::IncompleteData` — response lacked the `main` block, the
///   `weather` array, or the `wind` block.
pub fn parse_current_response(json: &str, coords: Coordinates) -> Result<CurrentReading, WxError> {
    let response: CurrentResponse = serde_json::from_str(json)
        .map_err(|e| WxError::ParseError(format!("current-weather deserialization failed: {}", e)))?;

    let main = response
        .main
        .ok_or_else(|| WxError::IncompleteData("no 'main' block in current weather".to_string()))?;

    let condition = response
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| WxError::IncompleteData("empty 'weather' array in current weather".to_string()))?;

    let wind = response
        .wind
        .ok_or_else(|| WxError::IncompleteData("no 'wind' block in current weather".to_string()))?;

    Ok(CurrentReading {
        city: response.name,
        latitude: coords.latitude,
        longitude: coords.longitude,
        temperature_c: main.temp,
        humidity: main.humidity,
        wind_speed_ms: wind.speed,
        condition: condition.main,
        description: condition.description,
    })
}

/// Parses a 5-day forecast response into a `Forecast`.
///
/// Entry timestamps are shifted by the city block's UTC offset (0 when the
/// API omits it) so they read as the location's local wall-clock time.
///
/// # Errors
/// - `WxError::ParseError` — malformed JSON or an out-of-range timestamp.
pub fn parse_forecast_response(json: &str) -> Result<Forecast, WxError> {
    let response: ForecastResponse = serde_json::from_str(json)
        .map_err(|e| WxError::ParseError(format!("forecast deserialization failed: {}", e)))?;

    let utc_offset_seconds = response
        .city
        .and_then(|c| c.timezone)
        .unwrap_or(0);

    let mut entries = Vec::with_capacity(response.list.len());

    for item in response.list {
        let shifted = item.dt + utc_offset_seconds as i64;
        let timestamp = DateTime::from_timestamp(shifted, 0)
            .ok_or_else(|| WxError::ParseError(format!("timestamp out of range: {}", item.dt)))?
            .naive_utc();

        let conditions = item
            .weather
            .into_iter()
            .map(|c| WeatherCondition {
                label: c.main,
                description: c.description,
            })
            .collect();

        entries.push(ForecastEntry {
            timestamp,
            conditions,
            rain_mm_3h: item.rain.and_then(|r| r.volume_3h),
        });
    }

    Ok(Forecast {
        entries,
        utc_offset_seconds,
    })
}

// ---------------------------------------------------------------------------
// Blocking HTTP client
// ---------------------------------------------------------------------------

/// Blocking OpenWeatherMap client. One instance is shared across the
/// scheduler's worker threads; `reqwest::blocking::Client` pools
/// connections internally.
pub struct OwmClient {
    client: reqwest::blocking::Client,
    api_key: String,
}

impl OwmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_key,
        }
    }

    fn fetch(&self, url: &str) -> Result<String, WxError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| WxError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WxError::HttpError(status.as_u16()));
        }

        response
            .text()
            .map_err(|e| WxError::RequestFailed(e.to_string()))
    }
}

impl WeatherProvider for OwmClient {
    fn geocode(&self, city: &str) -> Result<Coordinates, WxError> {
        let body = self.fetch(&build_geocode_url(city, &self.api_key))?;
        parse_geocode_response(&body, city)
    }

    fn current_weather(&self, coords: Coordinates) -> Result<CurrentReading, WxError> {
        let body = self.fetch(&build_current_url(coords, &self.api_key))?;
        parse_current_response(&body, coords)
    }

    fn forecast(&self, coords: Coordinates) -> Result<Forecast, WxError> {
        let body = self.fetch(&build_forecast_url(coords, &self.api_key))?;
        parse_forecast_response(&body)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
