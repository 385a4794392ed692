use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TimelyWeight {
    pub id: Uuid,
    pub user_id: Uuid,
    pub measured_at: DateTime<Utc>,
    pub weight: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateWeightRequest {
    /// Defaults to the current instant when absent.
    pub measured_at: Option<DateTime<Utc>>,
    #[validate(range(min = 1.0, max = 500.0, message = "체중은 1~500kg 사이여야 합니다"))]
    pub weight: f64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateWeightRequest {
    pub measured_at: Option<DateTime<Utc>>,
    #[validate(range(min = 1.0, max = 500.0, message = "체중은 1~500kg 사이여야 합니다"))]
    pub weight: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct WeightRangeQuery {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}
