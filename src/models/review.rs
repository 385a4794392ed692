use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DailyReview {
    pub id: Uuid,
    pub user_id: Uuid,
    pub review_date: NaiveDate,
    pub rating: i32,
    pub good_points: Option<String>,
    pub bad_points: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpsertReviewRequest {
    pub review_date: Option<NaiveDate>,
    #[validate(range(min = 1, max = 5, message = "평점은 1~5 사이여야 합니다"))]
    pub rating: i32,
    pub good_points: Option<String>,
    pub bad_points: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReviewQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
