use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::AppError;
use crate::validations::{optional_date, optional_text, required_date};

/// Raw form fields for a period log.
#[derive(Debug, Deserialize)]
pub struct PeriodLogForm {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, PartialEq)]
pub struct PeriodLogPayload {
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub note: Option<String>,
}

impl PeriodLogForm {
    pub fn parse(self) -> Result<PeriodLogPayload, AppError> {
        Ok(PeriodLogPayload {
            start_date: required_date(self.start_date.as_deref(), "시작일을 입력하세요")?,
            end_date: optional_date(self.end_date.as_deref())?,
            note: optional_text(self.note),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_date_required() {
        let form = PeriodLogForm {
            start_date: None,
            end_date: Some("2026-03-05".into()),
            note: None,
        };
        let err = form.parse().unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "시작일을 입력하세요"));
    }

    #[test]
    fn test_open_ended_period() {
        let form = PeriodLogForm {
            start_date: Some("2026-03-01".into()),
            end_date: Some("".into()),
            note: Some("가벼움".into()),
        };
        let payload = form.parse().unwrap();
        assert_eq!(payload.end_date, None);
        assert_eq!(payload.note.as_deref(), Some("가벼움"));
    }
}
