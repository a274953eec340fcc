/// Severe-condition rule evaluation.
///
/// Applies a fixed keyword catalog plus configurable temperature and wind
/// thresholds to a single `CurrentReading` and produces an `AlertDecision`.
/// Every rule is evaluated independently — all matching rules contribute a
/// reason, with no early exit — so one reading can legitimately carry
/// several reasons (e.g. a thunderstorm with high winds).
///
/// Each matched category contributes its own canned message, keyed off the
/// category that matched rather than the raw condition label; a reading
/// whose free-text description mentions "hail" gets the hail message even
/// when its primary label is something else entirely.

use crate::model::{AlertDecision, CurrentReading};

// ---------------------------------------------------------------------------
// Severity catalog
// ---------------------------------------------------------------------------

/// Fixed catalog of severe weather categories matched by keyword against
/// the condition label and detailed description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SevereCategory {
    Thunderstorm,
    HeavyRain,
    Snow,
    Blizzard,
    HighWind,
    Hail,
    Fog,
}

impl SevereCategory {
    /// Catalog in evaluation order. Reasons appear in this order in the
    /// resulting decision.
    pub const ALL: [SevereCategory; 7] = [
        SevereCategory::Thunderstorm,
        SevereCategory::HeavyRain,
        SevereCategory::Snow,
        SevereCategory::Blizzard,
        SevereCategory::HighWind,
        SevereCategory::Hail,
        SevereCategory::Fog,
    ];

    /// Keyword matched case-insensitively as a substring of the condition
    /// label or description.
    pub fn keyword(&self) -> &'static str {
        match self {
            SevereCategory::Thunderstorm => "thunderstorm",
            SevereCategory::HeavyRain => "heavy rain",
            SevereCategory::Snow => "snow",
            SevereCategory::Blizzard => "blizzard",
            SevereCategory::HighWind => "high wind",
            SevereCategory::Hail => "hail",
            SevereCategory::Fog => "fog",
        }
    }

    /// Canned alert message for this category.
    pub fn message(&self) -> &'static str {
        match self {
            SevereCategory::Thunderstorm => "Thunderstorm conditions are present.",
            SevereCategory::HeavyRain => "Heavy rain is expected.",
            SevereCategory::Snow => "Snowstorm conditions are present.",
            SevereCategory::Blizzard => "Blizzard conditions are present.",
            SevereCategory::HighWind => "High wind speeds detected.",
            SevereCategory::Hail => "Hailstorm conditions are present.",
            SevereCategory::Fog => "Dense fog conditions are present.",
        }
    }
}

/// Message for the temperature rule, which has no keyword category.
pub const MSG_EXTREME_TEMPERATURE: &str = "Extreme temperatures detected.";

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Deployment-configurable limits for the temperature and wind rules.
///
/// Temperatures are Celsius, wind speeds m/s. The safe temperature band is
/// inclusive: a reading at exactly `min_temp_c` or `max_temp_c` does not
/// alert.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertThresholds {
    pub min_temp_c: f64,
    pub max_temp_c: f64,
    pub wind_threshold_ms: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            min_temp_c: -10.0,
            max_temp_c: 40.0,
            wind_threshold_ms: 50.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Evaluates all severity rules against a current reading.
///
/// `severe` is true exactly when at least one rule matched. The reason list
/// is ordered: catalog categories first (in `SevereCategory::ALL` order),
/// then the temperature rule, then the wind rule.
pub fn evaluate_conditions(
    reading: &CurrentReading,
    thresholds: &AlertThresholds,
) -> AlertDecision {
    let condition = reading.condition.to_lowercase();
    let description = reading.description.to_lowercase();

    let mut reasons = Vec::new();

    for category in SevereCategory::ALL {
        let keyword = category.keyword();
        if condition.contains(keyword) || description.contains(keyword) {
            reasons.push(category.message().to_string());
        }
    }

    if reading.temperature_c < thresholds.min_temp_c
        || reading.temperature_c > thresholds.max_temp_c
    {
        reasons.push(MSG_EXTREME_TEMPERATURE.to_string());
    }

    if reading.wind_speed_ms > thresholds.wind_threshold_ms {
        reasons.push(SevereCategory::HighWind.message().to_string());
    }

    AlertDecision {
        severe: !reasons.is_empty(),
        reasons,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
