use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::AppError;
use crate::validations::{optional_number, optional_text, required_date};

/// Raw form fields for the daily fasting log, as submitted.
#[derive(Debug, Deserialize)]
pub struct DailyFastingForm {
    pub log_date: Option<String>,
    pub fasting_glucose: Option<String>,
    pub fasting_ketone: Option<String>,
    pub diet_note: Option<String>,
}

#[derive(Debug, PartialEq)]
pub struct DailyFastingPayload {
    pub log_date: NaiveDate,
    pub fasting_glucose: Option<f64>,
    pub fasting_ketone: Option<f64>,
    pub diet_note: Option<String>,
}

impl DailyFastingForm {
    pub fn parse(self) -> Result<DailyFastingPayload, AppError> {
        Ok(DailyFastingPayload {
            log_date: required_date(self.log_date.as_deref(), "날짜를 입력하세요")?,
            fasting_glucose: optional_number(self.fasting_glucose.as_deref(), 500.0, "공복 혈당")?,
            fasting_ketone: optional_number(self.fasting_ketone.as_deref(), 20.0, "공복 케톤")?,
            diet_note: optional_text(self.diet_note),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(
        log_date: Option<&str>,
        glucose: Option<&str>,
        ketone: Option<&str>,
        note: Option<&str>,
    ) -> DailyFastingForm {
        DailyFastingForm {
            log_date: log_date.map(String::from),
            fasting_glucose: glucose.map(String::from),
            fasting_ketone: ketone.map(String::from),
            diet_note: note.map(String::from),
        }
    }

    #[test]
    fn test_valid_form() {
        let payload = form(Some("2026-03-02"), Some("95"), Some("1.2"), Some("간헐적 단식"))
            .parse()
            .unwrap();
        assert_eq!(payload.fasting_glucose, Some(95.0));
        assert_eq!(payload.fasting_ketone, Some(1.2));
        assert_eq!(payload.diet_note.as_deref(), Some("간헐적 단식"));
    }

    #[test]
    fn test_missing_date_is_first_violation() {
        let err = form(None, Some("95"), None, None).parse().unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "날짜를 입력하세요"));
    }

    #[test]
    fn test_non_numeric_glucose_rejected() {
        let err = form(Some("2026-03-02"), Some("abc"), None, None)
            .parse()
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("공복 혈당")));
    }

    #[test]
    fn test_blank_optionals_become_null() {
        let payload = form(Some("2026-03-02"), Some(""), None, Some("  "))
            .parse()
            .unwrap();
        assert_eq!(payload.fasting_glucose, None);
        assert_eq!(payload.fasting_ketone, None);
        assert_eq!(payload.diet_note, None);
    }
}
