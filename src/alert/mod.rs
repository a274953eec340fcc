/// Alert generation for the weather alert service.
///
/// Submodules:
/// - `conditions` — severe-condition rule evaluation over a current reading.

pub mod conditions;
