//! Time-of-day greeting shown above the agenda.

/// Pick a greeting for the given hour (0-23).
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}
