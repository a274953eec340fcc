/// Configuration loaders - parse service.toml and subscribers.toml
///
/// Separates deployment policy (alert thresholds, polling cadence) and the
/// subscriber registry from code, so thresholds can be tuned and
/// subscribers added without recompiling the service. The OpenWeatherMap
/// API key is deliberately NOT in these files; it comes from the
/// environment (see `main.rs`).

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;

use crate::alert::conditions::AlertThresholds;

// ---------------------------------------------------------------------------
// service.toml
// ---------------------------------------------------------------------------

/// Service-wide settings loaded from service.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub scheduler: SchedulerSection,
    pub thresholds: ThresholdSection,
}

/// Polling cadence and fan-out width for the scheduler loop.
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerSection {
    pub poll_interval_minutes: u64,
    pub fetch_threads: usize,
}

/// Alert threshold policy for this deployment.
///
/// The temperature band is the inclusive safe range; readings outside it
/// raise the extreme-temperature alert. Wind speeds are m/s.
#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdSection {
    pub min_temp_c: f64,
    pub max_temp_c: f64,
    pub wind_threshold_ms: f64,
}

/// Converts the TOML threshold section to the evaluator's threshold type.
///
/// This adapter bridges the configuration layer and the domain model so the
/// evaluator stays independent of how thresholds are stored.
impl From<&ThresholdSection> for AlertThresholds {
    fn from(section: &ThresholdSection) -> Self {
        AlertThresholds {
            min_temp_c: section.min_temp_c,
            max_temp_c: section.max_temp_c,
            wind_threshold_ms: section.wind_threshold_ms,
        }
    }
}

/// Loads service settings from service.toml.
///
/// # Panics
/// Panics if the configuration file is missing, malformed, or contains
/// invalid data. This is intentional — the service cannot operate without
/// a threshold policy.
///
/// # File Location
/// Expects `service.toml` in the current working directory (project root
/// when running via `cargo run`).
pub fn load_service_config() -> ServiceConfig {
    let config_path = "service.toml";

    let contents = fs::read_to_string(config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path, e));

    toml::from_str(&contents)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", config_path, e))
}

// ---------------------------------------------------------------------------
// subscribers.toml
// ---------------------------------------------------------------------------

/// One alert recipient and the locations they follow, loaded from
/// subscribers.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscriberConfig {
    pub name: String,
    pub email: String,

    /// Locations this subscriber receives alerts for. Coordinates are
    /// resolved once (at registration time) rather than geocoded on every
    /// poll cycle.
    pub location: Vec<LocationConfig>,
}

/// A followed location with pre-resolved coordinates.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationConfig {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Root structure for TOML parsing.
#[derive(Debug, Deserialize)]
struct SubscriberRegistry {
    subscriber: Vec<SubscriberConfig>,
}

/// Loads the subscriber registry from subscribers.toml.
///
/// # Panics
/// Panics if the file is missing or malformed, for the same reason as
/// `load_service_config`.
pub fn load_subscribers() -> Vec<SubscriberConfig> {
    let config_path = "subscribers.toml";

    let contents = fs::read_to_string(config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path, e));

    let registry: SubscriberRegistry = toml::from_str(&contents)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", config_path, e));

    registry.subscriber
}

/// Loads the subscriber registry and builds a lookup map keyed by email.
pub fn load_subscriber_map() -> HashMap<String, SubscriberConfig> {
    load_subscribers()
        .into_iter()
        .map(|s| (s.email.clone(), s))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_service_config_succeeds() {
        let config = load_service_config();
        assert!(config.scheduler.poll_interval_minutes > 0);
        assert!(config.scheduler.fetch_threads > 0);
    }

    #[test]
    fn test_threshold_band_is_well_formed() {
        let config = load_service_config();
        assert!(
            config.thresholds.min_temp_c < config.thresholds.max_temp_c,
            "safe band must have min < max"
        );
        assert!(config.thresholds.wind_threshold_ms > 0.0);
    }

    #[test]
    fn test_load_subscribers_succeeds() {
        let subscribers = load_subscribers();
        assert!(!subscribers.is_empty(), "Should have at least one subscriber");
    }

    #[test]
    fn test_all_subscribers_have_required_fields() {
        for subscriber in load_subscribers() {
            assert!(!subscriber.name.is_empty(), "Name must not be empty");
            assert!(
                subscriber.email.contains('@'),
                "{}: email must look like an address",
                subscriber.name
            );
            assert!(
                !subscriber.location.is_empty(),
                "{}: must follow at least one location",
                subscriber.name
            );
            for location in &subscriber.location {
                assert!(!location.city.is_empty(), "City must not be empty");
                assert!(location.latitude >= -90.0 && location.latitude <= 90.0);
                assert!(location.longitude >= -180.0 && location.longitude <= 180.0);
            }
        }
    }

    #[test]
    fn test_subscriber_map_lookup() {
        let map = load_subscriber_map();
        let subscribers = load_subscribers();
        assert_eq!(map.len(), subscribers.len(), "emails should be unique");
        for subscriber in &subscribers {
            assert!(map.contains_key(&subscriber.email));
        }
    }

    #[test]
    fn test_threshold_conversion() {
        let section = ThresholdSection {
            min_temp_c: -10.0,
            max_temp_c: 40.0,
            wind_threshold_ms: 50.0,
        };

        let thresholds: AlertThresholds = (&section).into();
        assert_eq!(thresholds.min_temp_c, -10.0);
        assert_eq!(thresholds.max_temp_c, 40.0);
        assert_eq!(thresholds.wind_threshold_ms, 50.0);
    }
}
