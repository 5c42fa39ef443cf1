use chrono::{DateTime, Local, Utc};

pub fn format_date(timestamp: Option<&DateTime<Utc>>) -> String {
    match timestamp {
        Some(timestamp) => timestamp.with_timezone(&Local).format("%d %b %Y").to_string(),
        None => "Unknown".to_string(),
    }
}

pub fn format_experience(years: u32) -> String {
    let suffix = if years == 1 { "" } else { "s" };
    format!("{years} year{suffix}")
}

/// Upper-cased first letter of a name, used for avatar placeholders.
pub fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .find(|c| c.is_alphanumeric())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralises_experience() {
        assert_eq!(format_experience(1), "1 year");
        assert_eq!(format_experience(0), "0 years");
        assert_eq!(format_experience(15), "15 years");
    }

    #[test]
    fn initial_skips_punctuation() {
        assert_eq!(initial("asha"), "A");
        assert_eq!(initial("  (ravi)"), "R");
        assert_eq!(initial(""), "?");
    }

    #[test]
    fn formats_dates_as_day_month_year() {
        let timestamp: DateTime<Utc> = "2024-03-15T12:00:00Z".parse().unwrap();
        let rendered = format_date(Some(&timestamp));
        assert!(rendered.ends_with("Mar 2024"), "{rendered}");
        assert_eq!(format_date(None), "Unknown");
    }
}
