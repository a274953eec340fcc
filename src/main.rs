//! Weather Alert Service - Main Daemon
//!
//! A server-side daemon that continuously:
//! 1. Polls OpenWeatherMap for every subscriber's followed locations
//! 2. Evaluates severe-condition rules and today's rain outlook
//! 3. Dispatches alert notifications through the configured notifier
//! 4. Provides an HTTP endpoint for on-demand city outlooks
//!
//! Usage:
//!   cargo run --release                    # Start the polling loop
//!   cargo run --release -- --once          # Run a single cycle and exit
//!   cargo run --release -- --endpoint 8080 # Also serve HTTP on port 8080
//!
//! Environment:
//!   OWM_API_KEY - OpenWeatherMap API key

use std::env;
use std::sync::Arc;

use wxalert_service::alert::conditions::AlertThresholds;
use wxalert_service::config;
use wxalert_service::endpoint;
use wxalert_service::ingest::owm::OwmClient;
use wxalert_service::notify::ConsoleNotifier;
use wxalert_service::scheduler::{Scheduler, SchedulerConfig};

fn main() {
    println!("⛈  Weather Alert Service");
    println!("=========================\n");

    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();
    let mut endpoint_port: Option<u16> = None;
    let mut run_once = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--endpoint" => {
                if i + 1 < args.len() {
                    endpoint_port = args[i + 1].parse().ok();
                    i += 2;
                } else {
                    eprintln!("Error: --endpoint requires a port number");
                    std::process::exit(1);
                }
            }
            "--once" => {
                run_once = true;
                i += 1;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                eprintln!("Usage: {} [--once] [--endpoint PORT]", args[0]);
                std::process::exit(1);
            }
        }
    }

    // API key comes from the environment, not the config files
    dotenv::dotenv().ok();
    let api_key = match env::var("OWM_API_KEY") {
        Ok(key) if !key.is_empty() => key,
        _ => {
            eprintln!("\n❌ OWM_API_KEY environment variable not set\n");
            eprintln!("  1. Copy .env.example to .env: cp .env.example .env");
            eprintln!("  2. Edit .env and set OWM_API_KEY=<your OpenWeatherMap key>\n");
            std::process::exit(1);
        }
    };

    // Load deployment policy and subscriber registry
    println!("📋 Loading configuration...");
    let service_config = config::load_service_config();
    let subscribers = config::load_subscribers();

    if subscribers.is_empty() {
        eprintln!("\n❌ No subscribers configured in subscribers.toml\n");
        std::process::exit(1);
    }

    let location_count: usize = subscribers.iter().map(|s| s.location.len()).sum();
    println!(
        "✓ {} subscribers, {} locations, polling every {} minutes\n",
        subscribers.len(),
        location_count,
        service_config.scheduler.poll_interval_minutes
    );

    let thresholds = AlertThresholds::from(&service_config.thresholds);
    let provider = Arc::new(OwmClient::new(api_key));

    let scheduler = Scheduler::new(
        SchedulerConfig {
            poll_interval_minutes: service_config.scheduler.poll_interval_minutes,
            fetch_threads: service_config.scheduler.fetch_threads,
        },
        thresholds.clone(),
        subscribers,
        provider.clone(),
        Arc::new(ConsoleNotifier),
    );

    // Start HTTP endpoint if requested (in background thread)
    if let Some(port) = endpoint_port {
        println!("🚀 Starting HTTP endpoint server...");
        let endpoint_provider = provider.clone();
        let endpoint_thresholds = thresholds.clone();

        std::thread::spawn(move || {
            if let Err(e) = endpoint::start_endpoint_server(port, endpoint_provider, endpoint_thresholds) {
                eprintln!("❌ Endpoint server error: {}", e);
            }
        });
    }

    if run_once {
        match scheduler.run_cycle() {
            Ok(outcome) => {
                println!(
                    "✓ Cycle complete: {} alerts across {} locations ({} fetch failures)",
                    outcome.alerts_sent, outcome.locations_checked, outcome.fetch_failures
                );
            }
            Err(e) => {
                eprintln!("\n❌ Cycle error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    // Run the main polling loop
    println!("🔄 Starting continuous polling loop...");
    println!("   Press Ctrl+C to stop\n");

    if let Err(e) = scheduler.run() {
        eprintln!("\n❌ Scheduler error: {}", e);
        std::process::exit(1);
    }
}
