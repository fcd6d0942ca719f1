use chrono::{NaiveDate, Utc};

use crate::error::{AppError, Result};

/// Today's date in UTC, the reference point for "not in the future".
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// A present, non-blank string.
pub fn non_empty(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::illegal(format!("The {field} is not valid"))),
    }
}

pub fn required_date(value: Option<NaiveDate>, field: &str) -> Result<NaiveDate> {
    value.ok_or_else(|| AppError::illegal(format!("The {field} is not valid")))
}

pub fn not_in_future(date: NaiveDate, today: NaiveDate, field: &str) -> Result<()> {
    if date > today {
        return Err(AppError::illegal(format!("The {field} cannot be in the future")));
    }
    Ok(())
}

pub fn strictly_before(date: NaiveDate, bound: NaiveDate, field: &str) -> Result<()> {
    if date >= bound {
        return Err(AppError::illegal(format!("The {field} is not valid")));
    }
    Ok(())
}

/// Fails when any of `matching_ids` belongs to a row other than `current`.
pub fn unique(
    matching_ids: impl IntoIterator<Item = i32>,
    current: Option<i32>,
    field: &str,
) -> Result<()> {
    if matching_ids.into_iter().any(|id| Some(id) != current) {
        return Err(AppError::illegal(format!("The {field} already exists")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn non_empty_rejects_missing_and_blank() {
        assert!(non_empty(None, "name").is_err());
        assert!(non_empty(Some(String::new()), "name").is_err());
        assert!(non_empty(Some("   ".into()), "name").is_err());
        assert_eq!(non_empty(Some("Frida".into()), "name").unwrap(), "Frida");
    }

    #[test]
    fn non_empty_reports_field() {
        let err = non_empty(None, "coordinates").unwrap_err();
        assert_eq!(err.to_string(), "Illegal operation: The coordinates is not valid");
    }

    #[test]
    fn future_dates_are_rejected() {
        let today = date(2024, 5, 1);
        assert!(not_in_future(date(2024, 5, 1), today, "date").is_ok());
        assert!(not_in_future(date(2024, 5, 2), today, "date").is_err());
    }

    #[test]
    fn strictly_before_rejects_equal_dates() {
        assert!(strictly_before(date(1900, 1, 1), date(1950, 1, 1), "birth date").is_ok());
        assert!(strictly_before(date(1950, 1, 1), date(1950, 1, 1), "birth date").is_err());
        assert!(strictly_before(date(1960, 1, 1), date(1950, 1, 1), "birth date").is_err());
    }

    #[test]
    fn unique_ignores_the_row_being_updated() {
        assert!(unique([], None, "name").is_ok());
        assert!(unique([4], Some(4), "name").is_ok());
        assert!(unique([4], None, "name").is_err());
        assert!(unique([4, 7], Some(4), "name").is_err());
    }

    #[test]
    fn required_date_needs_a_value() {
        assert!(required_date(None, "death date").is_err());
        assert_eq!(required_date(Some(date(2000, 1, 1)), "x").unwrap(), date(2000, 1, 1));
    }
}
