use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::AppError;
use crate::validations::{optional_number, required_date};

/// Raw form fields for an inbody measurement snapshot.
#[derive(Debug, Default, Deserialize)]
pub struct InbodyLogForm {
    pub measured_date: Option<String>,
    pub basal_metabolic_rate: Option<String>,
    pub skeletal_muscle_mass: Option<String>,
    pub body_fat_mass: Option<String>,
    pub bmi: Option<String>,
    pub body_fat_pct: Option<String>,
    pub abdominal_fat_ratio: Option<String>,
    pub visceral_fat_level: Option<String>,
    pub body_water: Option<String>,
    pub protein: Option<String>,
    pub minerals: Option<String>,
}

#[derive(Debug, PartialEq)]
pub struct InbodyLogPayload {
    pub measured_date: NaiveDate,
    pub basal_metabolic_rate: Option<f64>,
    pub skeletal_muscle_mass: Option<f64>,
    pub body_fat_mass: Option<f64>,
    pub bmi: Option<f64>,
    pub body_fat_pct: Option<f64>,
    pub abdominal_fat_ratio: Option<f64>,
    pub visceral_fat_level: Option<f64>,
    pub body_water: Option<f64>,
    pub protein: Option<f64>,
    pub minerals: Option<f64>,
}

impl InbodyLogForm {
    pub fn parse(self) -> Result<InbodyLogPayload, AppError> {
        Ok(InbodyLogPayload {
            measured_date: required_date(self.measured_date.as_deref(), "측정일을 입력하세요")?,
            basal_metabolic_rate: optional_number(
                self.basal_metabolic_rate.as_deref(),
                5000.0,
                "기초대사량",
            )?,
            skeletal_muscle_mass: optional_number(
                self.skeletal_muscle_mass.as_deref(),
                100.0,
                "골격근량",
            )?,
            body_fat_mass: optional_number(self.body_fat_mass.as_deref(), 200.0, "체지방량")?,
            bmi: optional_number(self.bmi.as_deref(), 100.0, "BMI")?,
            body_fat_pct: optional_number(self.body_fat_pct.as_deref(), 100.0, "체지방률")?,
            abdominal_fat_ratio: optional_number(
                self.abdominal_fat_ratio.as_deref(),
                10.0,
                "복부지방률",
            )?,
            visceral_fat_level: optional_number(
                self.visceral_fat_level.as_deref(),
                30.0,
                "내장지방레벨",
            )?,
            body_water: optional_number(self.body_water.as_deref(), 100.0, "체수분")?,
            protein: optional_number(self.protein.as_deref(), 50.0, "단백질")?,
            minerals: optional_number(self.minerals.as_deref(), 20.0, "무기질")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measured_date_required() {
        let err = InbodyLogForm::default().parse().unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "측정일을 입력하세요"));
    }

    #[test]
    fn test_field_maxima_enforced() {
        let form = InbodyLogForm {
            measured_date: Some("2026-03-02".into()),
            visceral_fat_level: Some("31".into()),
            ..Default::default()
        };
        let err = form.parse().unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("내장지방레벨")));
    }

    #[test]
    fn test_all_numeric_fields_optional() {
        let form = InbodyLogForm {
            measured_date: Some("2026-03-02".into()),
            skeletal_muscle_mass: Some("24.5".into()),
            ..Default::default()
        };
        let payload = form.parse().unwrap();
        assert_eq!(payload.skeletal_muscle_mass, Some(24.5));
        assert_eq!(payload.body_fat_mass, None);
        assert_eq!(payload.minerals, None);
    }
}
