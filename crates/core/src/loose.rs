//! Loosely-typed request values.
//!
//! Form-driven clients send numbers as strings, lists as comma-separated
//! text, and sometimes the wrong type entirely. [`LooseValue`] accepts any
//! JSON value and exposes parse-with-fallback accessors that return `None`
//! instead of failing.

use chrono::{NaiveDate, TimeZone, Utc};
use serde::Deserialize;

use crate::types::Timestamp;

/// Any JSON value, classified by the shapes the catalog cares about.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LooseValue {
    Number(f64),
    Text(String),
    List(Vec<serde_json::Value>),
    Other(serde_json::Value),
}

impl LooseValue {
    /// A finite number, from a JSON number or a numeric string.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            Self::Number(n) => *n,
            Self::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return None;
                }
                s.parse::<f64>().ok()?
            }
            Self::List(_) | Self::Other(_) => return None,
        };
        n.is_finite().then_some(n)
    }

    /// An integral number that fits in `i32`.
    pub fn as_i32(&self) -> Option<i32> {
        let n = self.as_number()?;
        (n.fract() == 0.0 && n >= f64::from(i32::MIN) && n <= f64::from(i32::MAX))
            .then_some(n as i32)
    }

    /// An integral number that fits in `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        let n = self.as_number()?;
        let bound = -(i64::MIN as f64);
        (n.fract() == 0.0 && n >= -bound && n < bound).then_some(n as i64)
    }

    /// Trimmed, non-blank text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.trim()).filter(|s| !s.is_empty()),
            _ => None,
        }
    }

    /// A list of trimmed, non-blank strings.
    ///
    /// Arrays keep their string elements; text is split on commas. An empty
    /// result is reported as `None`.
    pub fn as_string_list(&self) -> Option<Vec<String>> {
        let items: Vec<String> = match self {
            Self::List(values) => values
                .iter()
                .filter_map(|v| v.as_str())
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            Self::Text(s) => s
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            Self::Number(_) | Self::Other(_) => return None,
        };
        (!items.is_empty()).then_some(items)
    }

    /// A timestamp from RFC 3339 text or a `YYYY-MM-DD` date (UTC midnight).
    pub fn as_timestamp(&self) -> Option<Timestamp> {
        let s = self.as_text()?;
        if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(s) {
            return Some(ts.with_timezone(&Utc));
        }
        let midnight = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()?
            .and_hms_opt(0, 0, 0)?;
        Some(Utc.from_utc_datetime(&midnight))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn loose(value: serde_json::Value) -> LooseValue {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn deserializes_every_json_shape() {
        assert_eq!(loose(json!(3)), LooseValue::Number(3.0));
        assert_eq!(loose(json!("x")), LooseValue::Text("x".into()));
        assert_eq!(loose(json!(["a"])), LooseValue::List(vec![json!("a")]));
        assert_eq!(loose(json!(true)), LooseValue::Other(json!(true)));
        assert_eq!(loose(json!({"a": 1})), LooseValue::Other(json!({"a": 1})));
    }

    #[test]
    fn numbers_from_numbers_and_strings() {
        assert_eq!(loose(json!(7.5)).as_number(), Some(7.5));
        assert_eq!(loose(json!(" 8.25 ")).as_number(), Some(8.25));
        assert_eq!(loose(json!("1e3")).as_number(), Some(1000.0));
    }

    #[test]
    fn non_numeric_values_are_absent() {
        let values = [
            json!(""),
            json!("  "),
            json!("12abc"),
            json!("NaN"),
            json!("inf"),
            json!(true),
            json!([1]),
        ];
        for value in values {
            assert_eq!(loose(value.clone()).as_number(), None, "{value}");
        }
    }

    #[test]
    fn integers_must_be_integral_and_in_range() {
        assert_eq!(loose(json!("2010")).as_i32(), Some(2010));
        assert_eq!(loose(json!(148)).as_i32(), Some(148));
        assert_eq!(loose(json!(1999.5)).as_i32(), None);
        assert_eq!(loose(json!(3_000_000_000_u64)).as_i32(), None);
        assert_eq!(loose(json!(3_000_000_000_u64)).as_i64(), Some(3_000_000_000));
        assert_eq!(loose(json!(1e19)).as_i64(), None);
    }

    #[test]
    fn text_is_trimmed_and_blank_is_absent() {
        assert_eq!(loose(json!("  hi ")).as_text(), Some("hi"));
        assert_eq!(loose(json!("   ")).as_text(), None);
        assert_eq!(loose(json!(5)).as_text(), None);
    }

    #[test]
    fn comma_separated_lists() {
        assert_eq!(
            loose(json!("Drama, Romance, ")).as_string_list(),
            Some(vec!["Drama".to_string(), "Romance".to_string()])
        );
        assert_eq!(loose(json!(" , ,")).as_string_list(), None);
    }

    #[test]
    fn array_lists_drop_blank_and_non_string_items() {
        assert_eq!(
            loose(json!([" Leonardo DiCaprio ", "", 42, null, "Elliot Page"])).as_string_list(),
            Some(vec!["Leonardo DiCaprio".to_string(), "Elliot Page".to_string()])
        );
        assert_eq!(loose(json!(["  "])).as_string_list(), None);
        assert_eq!(loose(json!(12)).as_string_list(), None);
    }

    #[test]
    fn timestamps_from_rfc3339_and_dates() {
        let ts = loose(json!("2010-07-16")).as_timestamp().unwrap();
        assert_eq!(ts.to_rfc3339(), "2010-07-16T00:00:00+00:00");

        let ts = loose(json!("2010-07-16T12:30:00+02:00")).as_timestamp().unwrap();
        assert_eq!(ts.to_rfc3339(), "2010-07-16T10:30:00+00:00");
    }

    #[test]
    fn invalid_dates_are_absent() {
        for value in [json!("not a date"), json!("2010-13-45"), json!(""), json!(1279238400)] {
            assert_eq!(loose(value.clone()).as_timestamp(), None, "{value}");
        }
    }
}
