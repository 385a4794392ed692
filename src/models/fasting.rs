use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::evaluations::fasting::{DayEvaluation, MetabolicState};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DailyFasting {
    pub id: Uuid,
    pub user_id: Uuid,
    pub log_date: NaiveDate,
    pub fasting_glucose: Option<f64>,
    pub fasting_ketone: Option<f64>,
    pub diet_note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Detail response: the row plus its derived scoring, when both readings
/// are present.
#[derive(Debug, Serialize)]
pub struct DailyFastingDetail {
    #[serde(flatten)]
    pub fasting: DailyFasting,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<DayEvaluation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metabolic_state: Option<MetabolicState>,
}

#[derive(Debug, Deserialize)]
pub struct FastingQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
