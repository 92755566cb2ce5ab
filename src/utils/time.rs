use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn to_epoch_millis(dt: DateTime<Utc>) -> i64 {
    dt.timestamp_millis()
}

/// Registration only asks for an age, so the birth date is pinned to
/// January 1st of `current_year - age`.
pub fn birth_date_from_age(age: i32, today: NaiveDate) -> Option<NaiveDate> {
    if age < 0 {
        return None;
    }
    NaiveDate::from_ymd_opt(today.year() - age, 1, 1)
}

/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM[:SS]` (also with a space separator)
/// and bare `YYYY-MM-DD`. Values without an offset are taken as UTC.
pub fn parse_flexible_datetime(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn birth_date_is_first_of_january() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(
            birth_date_from_age(16, today),
            NaiveDate::from_ymd_opt(2010, 1, 1)
        );
        assert_eq!(birth_date_from_age(0, today), NaiveDate::from_ymd_opt(2026, 1, 1));
        assert_eq!(birth_date_from_age(-1, today), None);
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let dt = parse_flexible_datetime("2025-03-01T10:00:00+03:00").unwrap();
        assert_eq!(dt.hour(), 7);
    }

    #[test]
    fn parses_naive_forms_as_utc() {
        let dt = parse_flexible_datetime("2025-03-01T14:30").unwrap();
        assert_eq!((dt.hour(), dt.minute()), (14, 30));

        let dt = parse_flexible_datetime("2025-03-01 09:15:20").unwrap();
        assert_eq!(dt.second(), 20);

        let dt = parse_flexible_datetime("2025-03-01").unwrap();
        assert_eq!(dt.to_rfc3339(), "2025-03-01T00:00:00+00:00");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_flexible_datetime("").is_none());
        assert!(parse_flexible_datetime("next tuesday").is_none());
    }

    #[test]
    fn epoch_millis() {
        let dt = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 1).unwrap();
        assert_eq!(to_epoch_millis(dt), 1000);
    }
}
