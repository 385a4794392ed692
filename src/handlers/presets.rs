use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::condition::{PresetQuery, UpsertPresetRequest, UserConditionPreset};
use crate::AppState;

pub async fn list_presets(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<PresetQuery>,
) -> AppResult<Json<Vec<UserConditionPreset>>> {
    let rows = if let Some(category) = query.category {
        sqlx::query_as::<_, UserConditionPreset>(
            r#"
            SELECT * FROM user_condition_presets
            WHERE user_id = $1 AND category = $2
            ORDER BY label ASC
            "#,
        )
        .bind(auth_user.id)
        .bind(category)
        .fetch_all(&state.db)
        .await?
    } else {
        sqlx::query_as::<_, UserConditionPreset>(
            r#"
            SELECT * FROM user_condition_presets
            WHERE user_id = $1
            ORDER BY category ASC, label ASC
            "#,
        )
        .bind(auth_user.id)
        .fetch_all(&state.db)
        .await?
    };

    Ok(Json(rows))
}

/// Idempotent: re-adding an existing label returns the stored row.
pub async fn upsert_preset(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<UpsertPresetRequest>,
) -> AppResult<Json<UserConditionPreset>> {
    if let Err(e) = body.validate() {
        return Err(AppError::Validation(e.to_string()));
    }

    let label = body.label.trim().to_string();
    if label.is_empty() {
        return Err(AppError::Validation("프리셋 이름을 입력하세요".into()));
    }

    let row = sqlx::query_as::<_, UserConditionPreset>(
        r#"
        INSERT INTO user_condition_presets (id, user_id, category, label)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (user_id, category, label) DO UPDATE
            SET label = user_condition_presets.label
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(body.category)
    .bind(&label)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(row))
}

pub async fn delete_preset(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    sqlx::query("DELETE FROM user_condition_presets WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(auth_user.id)
        .execute(&state.db)
        .await?;

    Ok(Json(serde_json::json!({ "deleted": true })))
}
