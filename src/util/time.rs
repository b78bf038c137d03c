use chrono::{DateTime, NaiveDate, Utc};

/// Format a timestamp as a human-readable relative time string.
pub fn relative_time(dt: &DateTime<Utc>) -> String {
    relative_time_from(dt, Utc::now())
}

pub fn relative_time_from(dt: &DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(dt);

    let seconds = duration.num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = duration.num_minutes();
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }

    let hours = duration.num_hours();
    if hours < 24 {
        return format!("{}h ago", hours);
    }

    let days = duration.num_days();
    if days < 30 {
        return format!("{}d ago", days);
    }

    if days < 365 {
        return format!("{}mo ago", days / 30);
    }

    format!("{}y ago", days / 365)
}

/// Date as shown in week labels, e.g. `Aug 7, 2026`.
pub fn format_week_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
