use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Digits of a phone number, formatting stripped
pub fn digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Calendar day of an ISO-8601 date or timestamp, time-of-day ignored.
///
/// Accepts RFC 3339 (`2026-10-14T09:30:00+03:00`), naive timestamps
/// (`2026-10-14T09:30:00`, optionally with fractional seconds) and bare
/// dates (`2026-10-14`).
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.date_naive());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(ts.date());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(ts.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Money rendered without trailing zeros (`3500.00` -> `3500`)
pub fn money(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Deserialize a tag field, falling back to `T::default()` for values this
/// client does not know.
///
/// Use with `#[serde(default, deserialize_with = "crate::util::lenient")]`
/// so one record carrying a new tag does not fail a whole list.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Unknown tag, using default");
        T::default()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_supported_shapes() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        assert_eq!(parse_calendar_date("2026-10-14T23:59:00+03:00"), Some(day));
        assert_eq!(parse_calendar_date("2026-10-14T08:00:00"), Some(day));
        assert_eq!(parse_calendar_date("2026-10-14T08:00:00.123456"), Some(day));
        assert_eq!(parse_calendar_date("2026-10-14"), Some(day));
        assert_eq!(parse_calendar_date("завтра"), None);
    }

    #[test]
    fn money_drops_trailing_zeros() {
        assert_eq!(money(Decimal::new(350000, 2)), "3500");
        assert_eq!(money(Decimal::new(12050, 2)), "120.5");
    }

    #[derive(Debug, Deserialize)]
    struct Tagged {
        #[serde(default, deserialize_with = "lenient")]
        kind: crate::models::Unit,
    }

    #[test]
    fn lenient_falls_back_to_default() {
        let known: Tagged = serde_json::from_str(r#"{"kind":"kg"}"#).unwrap();
        assert_eq!(known.kind, crate::models::Unit::Kg);
        let unknown: Tagged = serde_json::from_str(r#"{"kind":"шт"}"#).unwrap();
        assert_eq!(unknown.kind, crate::models::Unit::Pcs);
        let wrong_type: Tagged = serde_json::from_str(r#"{"kind":7}"#).unwrap();
        assert_eq!(wrong_type.kind, crate::models::Unit::Pcs);
        let missing: Tagged = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.kind, crate::models::Unit::Pcs);
    }

    #[test]
    fn digits_strip_formatting() {
        assert_eq!(digits("+7 (999) 123-45-67"), "79991234567");
    }
}
