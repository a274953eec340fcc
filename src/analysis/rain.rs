/// Rain outlook analysis for the current calendar day.
///
/// Consumes the 3-hour forecast feed for one location and answers three
/// questions: will it rain today, how much in total, and during which
/// merged time windows. The caller supplies the reference "now" (in the
/// location's local time) so the analysis is reproducible — this module
/// never reads the system clock.
///
/// Pipeline: filter entries to today → collect per-entry rain windows →
/// sort → merge contiguous/overlapping windows → format for display.

use chrono::{NaiveDateTime, Timelike};

use crate::model::{ForecastEntry, RainWindow};

// ---------------------------------------------------------------------------
// Day segments
// ---------------------------------------------------------------------------

/// Coarse time-of-day bucket, used only for display alongside window
/// endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySegment {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl DaySegment {
    /// Buckets a local hour: morning [6,12), afternoon [12,18),
    /// evening [18,21), night otherwise.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=11 => DaySegment::Morning,
            12..=17 => DaySegment::Afternoon,
            18..=20 => DaySegment::Evening,
            _ => DaySegment::Night,
        }
    }
}

impl std::fmt::Display for DaySegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DaySegment::Morning => write!(f, "morning"),
            DaySegment::Afternoon => write!(f, "afternoon"),
            DaySegment::Evening => write!(f, "evening"),
            DaySegment::Night => write!(f, "night"),
        }
    }
}

// ---------------------------------------------------------------------------
// Outlook
// ---------------------------------------------------------------------------

/// Result of analyzing today's forecast entries for one location.
#[derive(Debug, Clone, PartialEq)]
pub struct RainOutlook {
    /// True when at least one of today's entries forecasts rain.
    pub rain_today: bool,
    /// Sum of the rain entries' 3-hour volumes, rounded to 1 decimal (mm).
    pub total_volume_mm: f64,
    /// Merged rain windows, non-overlapping, sorted by start time.
    pub windows: Vec<RainWindow>,
    /// One display string per merged window, in the same order.
    pub formatted_windows: Vec<String>,
}

impl RainOutlook {
    fn dry() -> Self {
        RainOutlook {
            rain_today: false,
            total_volume_mm: 0.0,
            windows: Vec::new(),
            formatted_windows: Vec::new(),
        }
    }
}

/// Analyzes the forecast feed for rain on `now`'s calendar date.
///
/// An entry counts as rain when any of its condition descriptions contains
/// the substring "rain", case-insensitively — so "light rain" and
/// "heavy intensity rain" both match. Each rain entry contributes a
/// 3-hour window starting at its timestamp and its `rain_mm_3h` volume
/// (0 when the feed omits the field).
///
/// Entries outside today's date are ignored; an empty or all-dry feed
/// yields a valid "no rain" outlook rather than an error.
pub fn analyze_rain_today(entries: &[ForecastEntry], now: NaiveDateTime) -> RainOutlook {
    let today = now.date();
    let mut total_volume_mm = 0.0;
    let mut windows = Vec::new();

    for entry in entries {
        if entry.timestamp.date() != today {
            continue;
        }
        if !is_rain_entry(entry) {
            continue;
        }
        total_volume_mm += entry.rain_mm_3h.unwrap_or(0.0);
        windows.push(RainWindow::for_entry(entry.timestamp));
    }

    if windows.is_empty() {
        return RainOutlook::dry();
    }

    let merged = merge_windows(windows);
    let formatted_windows = merged.iter().map(format_window).collect();

    RainOutlook {
        rain_today: true,
        total_volume_mm: round_to_1dp(total_volume_mm),
        windows: merged,
        formatted_windows,
    }
}

fn is_rain_entry(entry: &ForecastEntry) -> bool {
    entry
        .conditions
        .iter()
        .any(|c| c.description.to_lowercase().contains("rain"))
}

// ---------------------------------------------------------------------------
// Window merging
// ---------------------------------------------------------------------------

/// Merges a set of rain windows into the minimal set of non-overlapping
/// windows covering the same union, sorted by start time.
///
/// The sweep comparison is closed: a window whose start coincides exactly
/// with the current end (`next.start == current.end`) is contiguous and
/// coalesces; only a positive gap separates windows. Merging an
/// already-merged set returns it unchanged.
pub fn merge_windows(mut windows: Vec<RainWindow>) -> Vec<RainWindow> {
    if windows.is_empty() {
        return windows;
    }

    windows.sort_by_key(|w| w.start);

    let mut merged = Vec::new();
    let mut current = windows[0];

    for next in &windows[1..] {
        if next.start <= current.end {
            current.end = current.end.max(next.end);
        } else {
            merged.push(current);
            current = *next;
        }
    }
    merged.push(current);

    merged
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Formats a merged window as
/// `"09:00 AM (morning) - 03:00 PM (afternoon)"` — 12-hour clock with the
/// day segment of each endpoint's local hour.
pub fn format_window(window: &RainWindow) -> String {
    format!(
        "{} ({}) - {} ({})",
        window.start.format("%I:%M %p"),
        DaySegment::from_hour(window.start.hour()),
        window.end.format("%I:%M %p"),
        DaySegment::from_hour(window.end.hour()),
    )
}

fn round_to_1dp(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
