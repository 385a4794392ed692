use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InbodyLog {
    pub id: Uuid,
    pub user_id: Uuid,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
