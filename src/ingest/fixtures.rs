/// Test fixtures: representative JSON payloads from the OpenWeatherMap APIs.
///
/// These fixtures are structurally complete but truncated to the minimum
/// needed to exercise the parsers. They reflect the real envelopes returned
/// by:
///   https://api.openweathermap.org/geo/1.0/direct     (geocoding)
///   https://api.openweathermap.org/data/2.5/weather   (current conditions)
///   https://api.openweathermap.org/data/2.5/forecast  (5-day / 3-hour)
///
/// Forecast response shape:
///   list[]
///     .dt        — unix epoch seconds (UTC)
///     .weather[] — condition objects with .main label and .description text
///     .rain.3h   — trailing 3-hour rainfall volume in mm; the whole `rain`
///                  object is OMITTED for dry periods, not set to zero
///   city.timezone — UTC shift in seconds for the forecast location
///
/// Forecast timestamps below fall on 2026-08-06 (09:00, 12:00, 15:00,
/// 18:00 UTC) plus one next-day entry, so analyzer tests can pin "now" to
/// that date.

/// Single geocoding match for London.
pub(crate) fn fixture_geocode_london_json() -> &'static str {
    r#"[
      {
        "name": "London",
        "local_names": { "en": "London" },
        "lat": 51.5073,
        "lon": -0.1276,
        "country": "GB",
        "state": "England"
      }
    ]"#
}

/// Geocoding miss: the API returns an empty array rather than an error
/// status for unknown city names.
pub(crate) fn fixture_geocode_empty_json() -> &'static str {
    "[]"
}

/// Current conditions during a thunderstorm. Exercises the severity
/// keyword path ("Thunderstorm" label, "heavy rain" in the description).
pub(crate) fn fixture_current_thunderstorm_json() -> &'static str {
    r#"{
      "coord": { "lon": -0.1276, "lat": 51.5073 },
      "weather": [
        { "id": 202, "main": "Thunderstorm", "description": "thunderstorm with heavy rain", "icon": "11d" }
      ],
      "base": "stations",
      "main": { "temp": 17.4, "feels_like": 17.2, "temp_min": 16.1, "temp_max": 18.9, "pressure": 1007, "humidity": 88 },
      "visibility": 8000,
      "wind": { "speed": 9.3, "deg": 240 },
      "clouds": { "all": 90 },
      "dt": 1786006800,
      "sys": { "country": "GB", "sunrise": 1785990000, "sunset": 1786043000 },
      "timezone": 3600,
      "id": 2643743,
      "name": "London",
      "cod": 200
    }"#
}

/// Calm, clear current conditions. No severity rule should fire on this.
pub(crate) fn fixture_current_clear_json() -> &'static str {
    r#"{
      "coord": { "lon": -0.1276, "lat": 51.5073 },
      "weather": [
        { "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }
      ],
      "base": "stations",
      "main": { "temp": 21.6, "feels_like": 21.3, "temp_min": 20.0, "temp_max": 23.1, "pressure": 1018, "humidity": 52 },
      "visibility": 10000,
      "wind": { "speed": 3.1, "deg": 200 },
      "clouds": { "all": 5 },
      "dt": 1786006800,
      "sys": { "country": "GB", "sunrise": 1785990000, "sunset": 1786043000 },
      "timezone": 3600,
      "id": 2643743,
      "name": "London",
      "cod": 200
    }"#
}

/// Degenerate current-weather body with no `main` block — seen when the
/// upstream API errors inside a 200 response. Parser must reject it.
pub(crate) fn fixture_current_missing_main_json() -> &'static str {
    r#"{
      "coord": { "lon": -0.1276, "lat": 51.5073 },
      "weather": [
        { "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }
      ],
      "cod": 200,
      "name": "London"
    }"#
}

/// A rainy forecast day (UTC location): rain at 09:00 (2.0mm) and 12:00
/// (1.5mm) — contiguous, so they merge — dry clouds at 15:00, rain again
/// at 18:00 (0.5mm), plus a next-day rain entry that today's analysis must
/// ignore.
pub(crate) fn fixture_forecast_rain_day_json() -> &'static str {
    r#"{
      "cod": "200",
      "message": 0,
      "cnt": 5,
      "list": [
        {
          "dt": 1786006800,
          "main": { "temp": 16.2, "humidity": 90 },
          "weather": [ { "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" } ],
          "wind": { "speed": 5.2, "deg": 230 },
          "pop": 0.9,
          "rain": { "3h": 2.0 },
          "dt_txt": "2026-08-06 09:00:00"
        },
        {
          "dt": 1786017600,
          "main": { "temp": 15.8, "humidity": 93 },
          "weather": [ { "id": 501, "main": "Rain", "description": "moderate rain", "icon": "10d" } ],
          "wind": { "speed": 6.0, "deg": 235 },
          "pop": 1.0,
          "rain": { "3h": 1.5 },
          "dt_txt": "2026-08-06 12:00:00"
        },
        {
          "dt": 1786028400,
          "main": { "temp": 17.0, "humidity": 78 },
          "weather": [ { "id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03d" } ],
          "wind": { "speed": 4.4, "deg": 250 },
          "pop": 0.1,
          "dt_txt": "2026-08-06 15:00:00"
        },
        {
          "dt": 1786039200,
          "main": { "temp": 14.9, "humidity": 91 },
          "weather": [ { "id": 500, "main": "Rain", "description": "light rain", "icon": "10n" } ],
          "wind": { "speed": 5.7, "deg": 240 },
          "pop": 0.8,
          "rain": { "3h": 0.5 },
          "dt_txt": "2026-08-06 18:00:00"
        },
        {
          "dt": 1786093200,
          "main": { "temp": 15.3, "humidity": 89 },
          "weather": [ { "id": 501, "main": "Rain", "description": "moderate rain", "icon": "10d" } ],
          "wind": { "speed": 6.8, "deg": 220 },
          "pop": 1.0,
          "rain": { "3h": 4.0 },
          "dt_txt": "2026-08-07 09:00:00"
        }
      ],
      "city": {
        "id": 2643743,
        "name": "London",
        "coord": { "lat": 51.5073, "lon": -0.1276 },
        "country": "GB",
        "population": 1000000,
        "timezone": 0,
        "sunrise": 1785990000,
        "sunset": 1786043000
      }
    }"#
}

/// Forecast for a UTC+2 location with a single 09:00 UTC entry — exercises
/// the epoch-to-local shift (entry should read as 11:00 local).
pub(crate) fn fixture_forecast_offset_json() -> &'static str {
    r#"{
      "cod": "200",
      "message": 0,
      "cnt": 1,
      "list": [
        {
          "dt": 1786006800,
          "main": { "temp": 24.1, "humidity": 60 },
          "weather": [ { "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" } ],
          "wind": { "speed": 3.9, "deg": 180 },
          "pop": 0.6,
          "rain": { "3h": 0.8 },
          "dt_txt": "2026-08-06 09:00:00"
        }
      ],
      "city": {
        "id": 756135,
        "name": "Warsaw",
        "coord": { "lat": 52.2298, "lon": 21.0118 },
        "country": "PL",
        "population": 1700000,
        "timezone": 7200,
        "sunrise": 1785988000,
        "sunset": 1786041000
      }
    }"#
}

/// All-dry forecast day for the same date — no entry mentions rain.
pub(crate) fn fixture_forecast_dry_day_json() -> &'static str {
    r#"{
      "cod": "200",
      "message": 0,
      "cnt": 2,
      "list": [
        {
          "dt": 1786006800,
          "main": { "temp": 22.5, "humidity": 45 },
          "weather": [ { "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" } ],
          "wind": { "speed": 2.8, "deg": 170 },
          "pop": 0.0,
          "dt_txt": "2026-08-06 09:00:00"
        },
        {
          "dt": 1786017600,
          "main": { "temp": 24.0, "humidity": 40 },
          "weather": [ { "id": 801, "main": "Clouds", "description": "few clouds", "icon": "02d" } ],
          "wind": { "speed": 3.3, "deg": 175 },
          "pop": 0.0,
          "dt_txt": "2026-08-06 12:00:00"
        }
      ],
      "city": {
        "id": 2643743,
        "name": "London",
        "coord": { "lat": 51.5073, "lon": -0.1276 },
        "country": "GB",
        "population": 1000000,
        "timezone": 0,
        "sunrise": 1785990000,
        "sunset": 1786043000
      }
    }"#
}
