use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TimelyMeal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub eaten_at: DateTime<Utc>,
    pub foods: Vec<String>,
    pub progress: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateMealRequest {
    pub eaten_at: Option<DateTime<Utc>>,
    #[validate(length(min = 1, message = "음식을 1개 이상 입력하세요"))]
    pub foods: Vec<String>,
    /// How much of the planned meal was eaten, percent.
    #[validate(range(min = 0, max = 100, message = "진행률은 0~100 사이여야 합니다"))]
    pub progress: Option<i32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMealRequest {
    pub eaten_at: Option<DateTime<Utc>>,
    #[validate(length(min = 1, message = "음식을 1개 이상 입력하세요"))]
    pub foods: Option<Vec<String>>,
    #[validate(range(min = 0, max = 100, message = "진행률은 0~100 사이여야 합니다"))]
    pub progress: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct MealRangeQuery {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}
