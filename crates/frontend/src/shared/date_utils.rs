//! Browser clock helpers. Formatting itself lives in `contracts::shared::date_format`.

/// `YYYY-MM-DD` from calendar parts; `month` is 1-based.
pub fn iso_date(year: u32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Today in the browser's local time zone, as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    let now = js_sys::Date::new_0();
    iso_date(now.get_full_year(), now.get_month() + 1, now.get_date())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_date_pads_month_and_day() {
        assert_eq!(iso_date(2026, 3, 7), "2026-03-07");
        assert_eq!(iso_date(2026, 12, 31), "2026-12-31");
    }
}
