use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use crate::settings::StatsSettings;

/// `"{label} HH:MM:SS"`, or empty when the label is disabled or nothing has
/// been saved yet.
pub fn last_saved_text<Tz>(settings: &StatsSettings, saved_at: Option<&DateTime<Tz>>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match saved_at {
        Some(at) if settings.show_last_saved_time => {
            format!("{} {}", settings.last_saved_time_label, at.format("%H:%M:%S"))
        }
        _ => String::new(),
    }
}
