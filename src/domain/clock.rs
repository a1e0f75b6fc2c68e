use chrono::{DateTime, Local, Timelike};

/// HH:MM:SS, with an AM/PM suffix in twelve-hour mode.
#[must_use]
pub fn format_time(now: &DateTime<Local>, twelve_hour: bool) -> String {
    if twelve_hour {
        let (is_pm, hour) = now.hour12();
        let suffix = if is_pm { "PM" } else { "AM" };
        format!("{:02}:{:02}:{:02} {}", hour, now.minute(), now.second(), suffix)
    } else {
        format!("{:02}:{:02}:{:02}", now.hour(), now.minute(), now.second())
    }
}

/// Long-form date line for the header, e.g. "Tuesday, March 4, 2025".
#[must_use]
pub fn format_date(now: &DateTime<Local>) -> String {
    now.format("%A, %B %-d, %Y").to_string()
}

#[must_use]
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        0..=4 => "Good night",
        5..=11 => "Good morning",
        12..=16 => "Good afternoon",
        17..=20 => "Good evening",
        _ => "Good night",
    }
}
