/// Weather data ingestion.
///
/// Submodules:
/// - `owm`      — OpenWeatherMap API: URL construction + JSON parsing,
///               `WeatherProvider` trait and blocking HTTP client.
/// - `fixtures` (test only) — representative API response payloads.

pub mod owm;

#[cfg(test)]
pub(crate) mod fixtures;
