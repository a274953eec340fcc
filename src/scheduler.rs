/// Core scheduler implementation for the weather alert service
///
/// This module implements the main polling loop that:
/// 1. Fans weather fetches out over a thread pool, one job per
///    (subscriber, location) pair
/// 2. Runs the pure severity evaluation and rain analysis on each result
/// 3. Composes and dispatches one alert per affected pair via the
///    `Notifier` seam
/// 4. Sleeps the remainder of the poll interval and repeats
///
/// Evaluation never touches the network and delivery never blocks a fetch:
/// workers only fetch, and all evaluation/dispatch happens on the
/// scheduler's own thread as results stream in. Every cycle is independent
/// and idempotent from the evaluator's point of view.

use chrono::{DateTime, Utc};
use std::error::Error;
use std::sync::Arc;
use std::sync::mpsc;
use threadpool::ThreadPool;

use crate::alert::conditions::{AlertThresholds, evaluate_conditions};
use crate::analysis::rain::analyze_rain_today;
use crate::config::SubscriberConfig;
use crate::ingest::owm::WeatherProvider;
use crate::model::{Coordinates, CurrentReading, Forecast, WxError};
use crate::notify::{Notifier, compose_severe_alert};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Scheduler configuration
pub struct SchedulerConfig {
    /// How often to run a full poll cycle (default: 60 minutes; upstream
    /// current-conditions data refreshes roughly every 10)
    pub poll_interval_minutes: u64,

    /// Worker threads for the per-location fetch fan-out
    pub fetch_threads: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            poll_interval_minutes: 60,
            fetch_threads: 4,
        }
    }
}

// ---------------------------------------------------------------------------
// Cycle results
// ---------------------------------------------------------------------------

/// Summary of one completed poll cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleOutcome {
    pub locations_checked: usize,
    pub alerts_sent: usize,
    pub fetch_failures: usize,
}

/// What one fetch worker hands back over the channel.
struct FetchOutcome {
    subscriber_email: String,
    city: String,
    result: Result<(CurrentReading, Forecast), WxError>,
}

// ---------------------------------------------------------------------------
// Scheduler
// ---------------------------------------------------------------------------

/// Main scheduler state
pub struct Scheduler {
    config: SchedulerConfig,
    thresholds: AlertThresholds,
    subscribers: Vec<SubscriberConfig>,
    provider: Arc<dyn WeatherProvider>,
    notifier: Arc<dyn Notifier>,
}

impl Scheduler {
    pub fn new(
        config: SchedulerConfig,
        thresholds: AlertThresholds,
        subscribers: Vec<SubscriberConfig>,
        provider: Arc<dyn WeatherProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            thresholds,
            subscribers,
            provider,
            notifier,
        }
    }

    /// Total number of (subscriber, location) pairs polled per cycle.
    pub fn location_count(&self) -> usize {
        self.subscribers.iter().map(|s| s.location.len()).sum()
    }

    /// Run one poll cycle against the wall clock.
    pub fn run_cycle(&self) -> Result<CycleOutcome, Box<dyn Error>> {
        self.run_cycle_at(Utc::now())
    }

    /// Run one poll cycle with an explicit reference instant.
    ///
    /// The instant anchors "today" for the rain analysis (shifted into each
    /// location's local time); pinning it makes a cycle reproducible in
    /// tests and means one cycle evaluates every location against the same
    /// moment.
    pub fn run_cycle_at(&self, now_utc: DateTime<Utc>) -> Result<CycleOutcome, Box<dyn Error>> {
        let pool = ThreadPool::new(self.config.fetch_threads);
        let (tx, rx) = mpsc::channel();

        let mut locations_checked = 0;
        for subscriber in &self.subscribers {
            for location in &subscriber.location {
                let provider = Arc::clone(&self.provider);
                let tx = tx.clone();
                let subscriber_email = subscriber.email.clone();
                let city = location.city.clone();
                let coords = Coordinates {
                    latitude: location.latitude,
                    longitude: location.longitude,
                };

                locations_checked += 1;
                pool.execute(move || {
                    let result = provider.current_weather(coords).and_then(|reading| {
                        provider.forecast(coords).map(|forecast| (reading, forecast))
                    });
                    // Receiver only disappears if the cycle already failed.
                    let _ = tx.send(FetchOutcome {
                        subscriber_email,
                        city,
                        result,
                    });
                });
            }
        }
        drop(tx);

        let mut alerts_sent = 0;
        let mut fetch_failures = 0;

        for outcome in rx {
            match outcome.result {
                Ok((reading, forecast)) => {
                    let decision = evaluate_conditions(&reading, &self.thresholds);
                    if !decision.severe {
                        continue;
                    }

                    let local_now = forecast.local_time(now_utc);
                    let outlook = analyze_rain_today(&forecast.entries, local_now);
                    let message =
                        compose_severe_alert(&outcome.city, &decision.reasons, Some(&outlook));

                    self.notifier.deliver(&outcome.subscriber_email, &message)?;
                    println!(
                        "   ✓ {} - alert sent to {} ({} reason(s))",
                        outcome.city,
                        outcome.subscriber_email,
                        decision.reasons.len()
                    );
                    alerts_sent += 1;
                }
                Err(e) => {
                    eprintln!("   ✗ {} - fetch failed: {}", outcome.city, e);
                    fetch_failures += 1;
                }
            }
        }

        Ok(CycleOutcome {
            locations_checked,
            alerts_sent,
            fetch_failures,
        })
    }

    /// Main scheduler loop (runs indefinitely)
    pub fn run(&self) -> Result<(), Box<dyn Error>> {
        println!("🚀 Starting scheduler loop...");
        println!("   Poll interval: {} minutes", self.config.poll_interval_minutes);
        println!(
            "   Watching {} locations across {} subscribers",
            self.location_count(),
            self.subscribers.len()
        );

        loop {
            let start = Utc::now();

            match self.run_cycle() {
                Ok(outcome) => {
                    println!(
                        "✓ Cycle complete: {} alerts across {} locations ({} fetch failures)",
                        outcome.alerts_sent, outcome.locations_checked, outcome.fetch_failures
                    );
                }
                Err(e) => {
                    eprintln!("✗ Cycle error: {}", e);
                }
            }

            // Sleep until next poll interval
            let elapsed = (Utc::now() - start).num_seconds();
            let sleep_seconds = (self.config.poll_interval_minutes * 60) as i64 - elapsed;

            if sleep_seconds > 0 {
                std::thread::sleep(std::time::Duration::from_secs(sleep_seconds as u64));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
