use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::error::AppError;
use crate::validations::{optional_text, optional_time, required_date};

/// Raw form fields for a bowel log.
#[derive(Debug, Deserialize)]
pub struct BowelLogForm {
    pub log_date: Option<String>,
    pub log_time: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, PartialEq)]
pub struct BowelLogPayload {
    pub log_date: NaiveDate,
    pub log_time: Option<NaiveTime>,
    pub note: Option<String>,
}

impl BowelLogForm {
    pub fn parse(self) -> Result<BowelLogPayload, AppError> {
        Ok(BowelLogPayload {
            log_date: required_date(self.log_date.as_deref(), "날짜를 입력하세요")?,
            log_time: optional_time(self.log_time.as_deref())?,
            note: optional_text(self.note),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_required_time_optional() {
        let form = BowelLogForm {
            log_date: Some("2026-03-02".into()),
            log_time: None,
            note: None,
        };
        let payload = form.parse().unwrap();
        assert_eq!(payload.log_time, None);

        let form = BowelLogForm {
            log_date: None,
            log_time: Some("08:15".into()),
            note: None,
        };
        assert!(form.parse().is_err());
    }

    #[test]
    fn test_time_parsed() {
        let form = BowelLogForm {
            log_date: Some("2026-03-02".into()),
            log_time: Some("08:15".into()),
            note: Some("정상".into()),
        };
        let payload = form.parse().unwrap();
        assert_eq!(payload.log_time, NaiveTime::from_hms_opt(8, 15, 0));
    }
}
