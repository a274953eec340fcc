/// Forecast analysis for the weather alert service.
///
/// Submodules:
/// - `rain` — today's rain outlook: window detection, merging, formatting.
///
/// Future additions: multi-day outlooks, precipitation trend scoring.

pub mod rain;
