// Date formatting helpers shared by the entry list and home screens.

use chrono::{DateTime, NaiveDate, Utc};

/// Canonical YYYY-MM-DD key for a calendar day.
pub fn day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Example: "Monday, January 1, 2024"
pub fn format_long_date(day: NaiveDate) -> String {
    day.format("%A, %B %-d, %Y").to_string()
}

/// Example: "MONDAY January 1, 2024"
pub fn format_uppercase_date(day: NaiveDate) -> String {
    format!(
        "{} {}",
        day.format("%A").to_string().to_uppercase(),
        day.format("%B %-d, %Y")
    )
}

/// Example: "02:30 PM"
pub fn format_time(instant: DateTime<Utc>) -> String {
    instant.format("%I:%M %p").to_string()
}

/// Greeting for the given hour of day (0-23).
pub fn time_of_day_greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 17 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}
