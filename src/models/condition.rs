use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Whether an observation describes the body or the emotional state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "condition_source", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ConditionSource {
    Body,
    Emotion,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ConditionEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub logged_at: DateTime<Utc>,
    pub condition_type: String,
    pub intensity: i32,
    pub note: Option<String>,
    pub source: ConditionSource,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateConditionRequest {
    pub logged_at: Option<DateTime<Utc>>,
    #[validate(length(min = 1, message = "컨디션 이름을 입력하세요"))]
    pub condition_type: String,
    #[validate(range(min = 1, max = 7, message = "강도는 1~7 사이여야 합니다"))]
    pub intensity: i32,
    pub note: Option<String>,
    pub source: ConditionSource,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateConditionRequest {
    pub logged_at: Option<DateTime<Utc>>,
    #[validate(length(min = 1, message = "컨디션 이름을 입력하세요"))]
    pub condition_type: Option<String>,
    #[validate(range(min = 1, max = 7, message = "강도는 1~7 사이여야 합니다"))]
    pub intensity: Option<i32>,
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConditionRangeQuery {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub source: Option<ConditionSource>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserConditionPreset {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: ConditionSource,
    pub label: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpsertPresetRequest {
    pub category: ConditionSource,
    #[validate(length(min = 1, max = 50, message = "프리셋 이름은 1~50자여야 합니다"))]
    pub label: String,
}

#[derive(Debug, Deserialize)]
pub struct PresetQuery {
    pub category: Option<ConditionSource>,
}
