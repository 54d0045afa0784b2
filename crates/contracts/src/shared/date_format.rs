/// Date and time formatting for table cells (es-ES style, DD/MM/YYYY)
use super::list_view::field::parse_epoch_millis;

/// Format ISO datetime string to DD/MM/YYYY HH:MM:SS
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02:26"
///
/// The wall-clock time is kept as sent; an offset is dropped, not applied.
/// Anything chrono cannot parse is returned unchanged.
pub fn format_datetime(datetime_str: &str) -> String {
    let trimmed = datetime_str.trim();
    let parsed = chrono::DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.naive_local())
        .or_else(|_| {
            let normalized = trimmed.replacen(' ', "T", 1);
            chrono::NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.f")
                .or_else(|_| chrono::NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M"))
        });
    match parsed {
        Ok(dt) => dt.format("%d/%m/%Y %H:%M:%S").to_string(),
        Err(_) => datetime_str.to_string(),
    }
}

/// Format ISO date string to DD/MM/YYYY
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.trim().split(['T', ' ']).next().unwrap_or(date_str);
    match chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Formats an optional date, "—" when absent.
pub fn format_date_opt(date_str: Option<&str>) -> String {
    match date_str {
        Some(s) if !s.trim().is_empty() => format_date(s),
        _ => super::list_view::EMPTY_DISPLAY.to_string(),
    }
}

const MESES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre", "octubre",
    "noviembre", "diciembre",
];

/// Long Spanish date, as in the header and detail modals.
/// Example: "2024-03-15" -> "15 de marzo de 2024"
pub fn format_date_long(date_str: &str) -> String {
    let date_part = date_str.split(['T', ' ']).next().unwrap_or(date_str);
    match chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => {
            use chrono::Datelike;
            format!("{} de {} de {}", date.day(), MESES[date.month0() as usize], date.year())
        }
        Err(_) => date_str.to_string(),
    }
}

/// True when the value is a date strictly before `today` ("YYYY-MM-DD").
pub fn is_before(date_str: &str, today: &str) -> bool {
    match (parse_epoch_millis(date_str), parse_epoch_millis(today)) {
        (Some(a), Some(b)) => a < b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15/03/2024 14:02:26"
        );
        assert_eq!(
            format_datetime("2024-12-31 23:59:59"),
            "31/12/2024 23:59:59"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
        assert_eq!(format_date_opt(None), "—");
    }

    #[test]
    fn test_format_date_long() {
        assert_eq!(format_date_long("2026-10-16"), "16 de octubre de 2026");
        assert_eq!(format_date_long("2024-03-05T09:00:00Z"), "5 de marzo de 2024");
        assert_eq!(format_date_long("pronto"), "pronto");
    }

    #[test]
    fn test_format_datetime_with_offset() {
        assert_eq!(
            format_datetime("2024-03-15T10:00:00-05:00"),
            "15/03/2024 10:00:00"
        );
        assert_eq!(
            format_datetime("2024-03-15T10:00:00+02:00"),
            "15/03/2024 10:00:00"
        );
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_datetime("a-b-cTx"), "a-b-cTx");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date("a-b-c"), "a-b-c");
        assert_eq!(format_date("2024-13-40"), "2024-13-40");
    }

    #[test]
    fn test_is_before() {
        assert!(is_before("2024-01-31", "2024-02-01"));
        assert!(!is_before("2024-02-01", "2024-02-01"));
        assert!(!is_before("sin fecha", "2024-02-01"));
    }
}
