/// HTTP endpoint for querying a city's weather outlook
///
/// Provides a simple REST API for external tools (dashboards, the web
/// frontend) to query the same evaluation the scheduler runs, on demand
/// and for any city.
///
/// Endpoints:
/// - GET /outlook/{city} - Current reading, rain outlook, and alert decision
/// - GET /health - Service health check

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::alert::conditions::{AlertThresholds, evaluate_conditions};
use crate::analysis::rain::analyze_rain_today;
use crate::ingest::owm::WeatherProvider;
use crate::model::{CurrentReading, WxError};

// ---------------------------------------------------------------------------
// Response Types
// ---------------------------------------------------------------------------

/// Complete outlook response for one city.
#[derive(Debug, Serialize, Deserialize)]
pub struct OutlookResponse {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,

    /// Current conditions snapshot
    pub current: ReadingData,

    /// Today's rain outlook
    pub rain: RainData,

    /// Severity evaluation of the current conditions
    pub alert: AlertData,
}

/// Simplified current-reading data for JSON response
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadingData {
    pub temperature_c: f64,
    pub humidity: i64,
    pub wind_speed_ms: f64,
    pub condition: String,
    pub description: String,
}

/// Rain outlook data for JSON response
#[derive(Debug, Serialize, Deserialize)]
pub struct RainData {
    pub will_rain: bool,
    pub volume_mm: f64,
    pub windows: Vec<String>,
}

/// Alert decision for JSON response
#[derive(Debug, Serialize, Deserialize)]
pub struct AlertData {
    pub severe: bool,
    pub reasons: Vec<String>,
}

// ---------------------------------------------------------------------------
// Outlook assembly
// ---------------------------------------------------------------------------

/// Builds the full outlook for a city: geocode, fetch current + forecast,
/// evaluate severity, analyze today's rain.
pub fn build_outlook(
    provider: &dyn WeatherProvider,
    thresholds: &AlertThresholds,
    city: &str,
) -> Result<OutlookResponse, WxError> {
    build_outlook_at(provider, thresholds, city, Utc::now())
}

/// As `build_outlook`, with an explicit reference instant anchoring
/// "today" for the rain analysis.
pub fn build_outlook_at(
    provider: &dyn WeatherProvider,
    thresholds: &AlertThresholds,
    city: &str,
    now_utc: DateTime<Utc>,
) -> Result<OutlookResponse, WxError> {
    let coords = provider.geocode(city)?;
    let reading = provider.current_weather(coords)?;
    let forecast = provider.forecast(coords)?;

    let decision = evaluate_conditions(&reading, thresholds);
    let outlook = analyze_rain_today(&forecast.entries, forecast.local_time(now_utc));

    Ok(OutlookResponse {
        city: reading.city.clone(),
        latitude: coords.latitude,
        longitude: coords.longitude,
        current: reading_to_data(&reading),
        rain: RainData {
            will_rain: outlook.rain_today,
            volume_mm: outlook.total_volume_mm,
            windows: outlook.formatted_windows,
        },
        alert: AlertData {
            severe: decision.severe,
            reasons: decision.reasons,
        },
    })
}

/// Convert CurrentReading to ReadingData
fn reading_to_data(reading: &CurrentReading) -> ReadingData {
    ReadingData {
        temperature_c: reading.temperature_c,
        humidity: reading.humidity,
        wind_speed_ms: reading.wind_speed_ms,
        condition: reading.condition.clone(),
        description: reading.description.clone(),
    }
}

// ---------------------------------------------------------------------------
// HTTP Server
// ---------------------------------------------------------------------------

/// Start HTTP endpoint server on the specified port
pub fn start_endpoint_server(
    port: u16,
    provider: std::sync::Arc<dyn WeatherProvider>,
    thresholds: AlertThresholds,
) -> Result<(), String> {
    let server = tiny_http::Server::http(format!("0.0.0.0:{}", port))
        .map_err(|e| format!("Failed to start HTTP server: {}", e))?;

    println!("📡 HTTP endpoint listening on http://0.0.0.0:{}", port);
    println!("   GET /outlook/{{city}} - Query city outlook");
    println!("   GET /health - Service health check\n");

    for request in server.incoming_requests() {
        let url = request.url();

        // Route requests
        let response = if url == "/health" {
            handle_health()
        } else if url.starts_with("/outlook/") {
            let city = url.trim_start_matches("/outlook/");
            let city = urlencoding::decode(city)
                .map(|c| c.into_owned())
                .unwrap_or_else(|_| city.to_string());
            handle_outlook_query(provider.as_ref(), &thresholds, &city)
        } else {
            create_response(
                404,
                serde_json::json!({
                    "error": "Not found",
                    "available_endpoints": ["/health", "/outlook/{city}"]
                }),
            )
        };

        if let Err(e) = request.respond(response) {
            eprintln!("Failed to send response: {}", e);
        }
    }

    Ok(())
}

/// Handle /health endpoint
fn handle_health() -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    create_response(
        200,
        serde_json::json!({
            "status": "ok",
            "service": "wxalert_service",
            "version": "0.1.0"
        }),
    )
}

/// Handle /outlook/{city} endpoint
fn handle_outlook_query(
    provider: &dyn WeatherProvider,
    thresholds: &AlertThresholds,
    city: &str,
) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    match build_outlook(provider, thresholds, city) {
        Ok(data) => create_response(200, serde_json::to_value(&data).unwrap()),
        Err(WxError::CityNotFound(_)) => create_response(
            404,
            serde_json::json!({
                "error": "City not found",
                "city": city
            }),
        ),
        Err(e) => create_response(
            502,
            serde_json::json!({
                "error": e.to_string(),
                "city": city
            }),
        ),
    }
}

/// Create HTTP response with JSON body
fn create_response(status_code: u16, json: serde_json::Value) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let body = serde_json::to_string_pretty(&json).unwrap();
    let bytes = body.into_bytes();

    tiny_http::Response::from_data(bytes)
        .with_status_code(tiny_http::StatusCode::from(status_code))
        .with_header(
            tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap(),
        )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
