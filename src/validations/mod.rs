//! Form-field parsing for the entities submitted as plain string fields.
//!
//! Each form mirrors one page of the app: every field arrives as an optional
//! string, the parser returns the typed payload or the first violation's
//! message. Nothing is written to the database on a parse failure.

pub mod bowel_log;
pub mod daily_fasting;
pub mod inbody_log;
pub mod period_log;

use chrono::{NaiveDate, NaiveTime};

use crate::error::AppError;

fn non_blank(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|s| !s.is_empty())
}

/// Required `YYYY-MM-DD` field.
pub(crate) fn required_date(field: Option<&str>, message: &str) -> Result<NaiveDate, AppError> {
    let raw = non_blank(field).ok_or_else(|| AppError::Validation(message.into()))?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("날짜 형식이 올바르지 않습니다: {raw}")))
}

/// Optional `YYYY-MM-DD` field; blank means absent.
pub(crate) fn optional_date(field: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    match non_blank(field) {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| AppError::Validation(format!("날짜 형식이 올바르지 않습니다: {raw}"))),
    }
}

/// Optional `HH:MM` or `HH:MM:SS` field; blank means absent.
pub(crate) fn optional_time(field: Option<&str>) -> Result<Option<NaiveTime>, AppError> {
    match non_blank(field) {
        None => Ok(None),
        Some(raw) => NaiveTime::parse_from_str(raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
            .map(Some)
            .map_err(|_| AppError::Validation(format!("시간 형식이 올바르지 않습니다: {raw}"))),
    }
}

/// Optional numeric field bounded to `0..=max`; blank means absent.
pub(crate) fn optional_number(
    field: Option<&str>,
    max: f64,
    label: &str,
) -> Result<Option<f64>, AppError> {
    match non_blank(field) {
        None => Ok(None),
        Some(raw) => {
            let value: f64 = raw
                .parse()
                .map_err(|_| AppError::Validation(format!("{label}은(는) 숫자여야 합니다")))?;
            if !(0.0..=max).contains(&value) {
                return Err(AppError::Validation(format!(
                    "{label}은(는) 0~{max} 사이여야 합니다"
                )));
            }
            Ok(Some(value))
        }
    }
}

/// Optional free-text field; blank collapses to NULL.
pub(crate) fn optional_text(field: Option<String>) -> Option<String> {
    field
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_date_missing() {
        let err = required_date(None, "날짜를 입력하세요").unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "날짜를 입력하세요"));

        let err = required_date(Some("   "), "날짜를 입력하세요").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_required_date_parses() {
        let date = required_date(Some("2026-03-02"), "날짜를 입력하세요").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
    }

    #[test]
    fn test_optional_number_non_numeric_rejected() {
        let err = optional_number(Some("abc"), 500.0, "공복 혈당").unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("숫자")));
    }

    #[test]
    fn test_optional_number_out_of_range_rejected() {
        assert!(optional_number(Some("501"), 500.0, "공복 혈당").is_err());
        assert!(optional_number(Some("-1"), 500.0, "공복 혈당").is_err());
        assert_eq!(optional_number(Some("500"), 500.0, "공복 혈당").unwrap(), Some(500.0));
    }

    #[test]
    fn test_optional_number_blank_is_absent() {
        assert_eq!(optional_number(None, 20.0, "케톤").unwrap(), None);
        assert_eq!(optional_number(Some(""), 20.0, "케톤").unwrap(), None);
    }

    #[test]
    fn test_optional_time_formats() {
        assert_eq!(
            optional_time(Some("07:30")).unwrap(),
            NaiveTime::from_hms_opt(7, 30, 0)
        );
        assert_eq!(
            optional_time(Some("07:30:15")).unwrap(),
            NaiveTime::from_hms_opt(7, 30, 15)
        );
        assert!(optional_time(Some("7시 30분")).is_err());
        assert_eq!(optional_time(None).unwrap(), None);
    }

    #[test]
    fn test_optional_text_blank_collapses() {
        assert_eq!(optional_text(Some("  ".into())), None);
        assert_eq!(optional_text(Some(" memo ".into())), Some("memo".into()));
        assert_eq!(optional_text(None), None);
    }
}
