/// Notification composition and dispatch seam.
///
/// Composition is pure: functions here turn evaluation results into a
/// subject and plain-text body. Delivery goes through the `Notifier` trait
/// so the scheduler never talks to a mail server directly — production
/// deployments plug in an SMTP-backed implementation, tests use the
/// in-memory recorder, and `--once` dry runs print to the console.

use std::error::Error;
use std::sync::Mutex;

use crate::analysis::rain::RainOutlook;
use crate::model::CurrentReading;

// ---------------------------------------------------------------------------
// Message composition
// ---------------------------------------------------------------------------

/// A composed message ready for delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub subject: String,
    pub body: String,
}

/// Composes the severe-weather alert for one city.
///
/// The reason list comes from the severity evaluation; when a rain outlook
/// is supplied and rain is forecast, the merged windows are appended so one
/// message carries the full picture for the day.
pub fn compose_severe_alert(
    city: &str,
    reasons: &[String],
    outlook: Option<&RainOutlook>,
) -> Message {
    let mut body = format!(
        "Severe weather conditions are expected in {}.\n\nDetails: {}\n",
        city,
        reasons.join("\n")
    );

    if let Some(outlook) = outlook {
        if outlook.rain_today {
            body.push_str(&format!(
                "\nRain is forecast today ({:.1} mm expected):\n",
                outlook.total_volume_mm
            ));
            for window in &outlook.formatted_windows {
                body.push_str(&format!("  {}\n", window));
            }
        }
    }

    body.push_str("\nBest Regards,\nThe Weather App Team");

    Message {
        subject: format!("Severe Weather Alert in {}!", city),
        body,
    }
}

/// Composes the current-weather digest for a subscriber's followed
/// locations.
pub fn compose_weather_digest(recipient_name: &str, readings: &[CurrentReading]) -> Message {
    let mut body = format!(
        "Hi {},\n\nHere is the current weather for your favorite locations:\n\n",
        recipient_name
    );

    for reading in readings {
        body.push_str(&format!(
            "Location: {}\nWeather: {}\nTemperature: {}°C\nHumidity: {}%\n\n",
            reading.city, reading.description, reading.temperature_c, reading.humidity
        ));
    }

    body.push_str("Best Regards,\nThe Weather Assistant Team");

    Message {
        subject: "Your Favorite Locations' Weather Update".to_string(),
        body,
    }
}

// ---------------------------------------------------------------------------
// Delivery
// ---------------------------------------------------------------------------

/// Delivery seam between the scheduler and whatever actually sends mail.
pub trait Notifier: Send + Sync {
    fn deliver(&self, to: &str, message: &Message) -> Result<(), Box<dyn Error>>;
}

/// Prints each message to stdout instead of sending it. Used for dry runs
/// and local development.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn deliver(&self, to: &str, message: &Message) -> Result<(), Box<dyn Error>> {
        println!("--- notification for {} ---", to);
        println!("Subject: {}", message.subject);
        println!("{}\n", message.body);
        Ok(())
    }
}

/// Records every delivered message for later inspection. The scheduler
/// tests assert against this.
#[derive(Default)]
pub struct MemoryNotifier {
    sent: Mutex<Vec<SentMessage>>,
}

/// A delivery captured by `MemoryNotifier`.
#[derive(Debug, Clone, PartialEq)]
pub struct SentMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything delivered so far, in delivery order.
    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().expect("notifier mutex poisoned").clone()
    }
}

impl Notifier for MemoryNotifier {
    fn deliver(&self, to: &str, message: &Message) -> Result<(), Box<dyn Error>> {
        self.sent.lock().expect("notifier mutex poisoned").push(SentMessage {
            to: to.to_string(),
            subject: message.subject.clone(),
            body: message.body.clone(),
        });
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RainWindow;
    use chrono::NaiveDate;

    fn reading(city: &str, description: &str, temp: f64, humidity: i64) -> CurrentReading {
        CurrentReading {
            city: city.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            temperature_c: temp,
            humidity,
            wind_speed_ms: 3.0,
            condition: "Clouds".to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_severe_alert_subject_names_the_city() {
        let message = compose_severe_alert("London", &["Hailstorm conditions are present.".to_string()], None);
        assert_eq!(message.subject, "Severe Weather Alert in London!");
    }

    #[test]
    fn test_severe_alert_body_lists_each_reason() {
        let reasons = vec![
            "Thunderstorm conditions are present.".to_string(),
            "High wind speeds detected.".to_string(),
        ];
        let message = compose_severe_alert("London", &reasons, None);

        assert!(message.body.starts_with("Severe weather conditions are expected in London."));
        assert!(message.body.contains("Thunderstorm conditions are present."));
        assert!(message.body.contains("High wind speeds detected."));
        assert!(message.body.ends_with("Best Regards,\nThe Weather App Team"));
    }

    #[test]
    fn test_severe_alert_appends_rain_windows_when_forecast() {
        let start = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap().and_hms_opt(9, 0, 0).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap().and_hms_opt(15, 0, 0).unwrap();
        let outlook = RainOutlook {
            rain_today: true,
            total_volume_mm: 3.5,
            windows: vec![RainWindow { start, end }],
            formatted_windows: vec!["09:00 AM (morning) - 03:00 PM (afternoon)".to_string()],
        };

        let message = compose_severe_alert("London", &["Heavy rain is expected.".to_string()], Some(&outlook));
        assert!(message.body.contains("Rain is forecast today (3.5 mm expected):"));
        assert!(message.body.contains("09:00 AM (morning) - 03:00 PM (afternoon)"));
    }

    #[test]
    fn test_severe_alert_omits_rain_section_on_dry_outlook() {
        let outlook = RainOutlook {
            rain_today: false,
            total_volume_mm: 0.0,
            windows: vec![],
            formatted_windows: vec![],
        };
        let message = compose_severe_alert("London", &["Dense fog conditions are present.".to_string()], Some(&outlook));
        assert!(!message.body.contains("Rain is forecast"));
    }

    #[test]
    fn test_digest_includes_every_location() {
        let readings = vec![
            reading("London", "overcast clouds", 17.4, 88),
            reading("Chicago", "clear sky", 25.0, 40),
        ];
        let message = compose_weather_digest("Ada", &readings);

        assert_eq!(message.subject, "Your Favorite Locations' Weather Update");
        assert!(message.body.starts_with("Hi Ada,"));
        assert!(message.body.contains("Location: London"));
        assert!(message.body.contains("Weather: overcast clouds"));
        assert!(message.body.contains("Temperature: 17.4°C"));
        assert!(message.body.contains("Humidity: 88%"));
        assert!(message.body.contains("Location: Chicago"));
        assert!(message.body.ends_with("Best Regards,\nThe Weather Assistant Team"));
    }

    #[test]
    fn test_memory_notifier_records_deliveries_in_order() {
        let notifier = MemoryNotifier::new();
        let first = compose_severe_alert("London", &["Heavy rain is expected.".to_string()], None);
        let second = compose_severe_alert("Chicago", &["Hailstorm conditions are present.".to_string()], None);

        notifier.deliver("ada.fowler@example.com", &first).unwrap();
        notifier.deliver("marcus.reid@example.com", &second).unwrap();

        let sent = notifier.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, "ada.fowler@example.com");
        assert_eq!(sent[0].subject, "Severe Weather Alert in London!");
        assert_eq!(sent[1].subject, "Severe Weather Alert in Chicago!");
    }
}
