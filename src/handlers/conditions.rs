use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::condition::{
    ConditionEntry, ConditionRangeQuery, CreateConditionRequest, UpdateConditionRequest,
};
use crate::AppState;

pub async fn list_conditions(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<ConditionRangeQuery>,
) -> AppResult<Json<Vec<ConditionEntry>>> {
    let end = query.end.unwrap_or_else(Utc::now);
    let start = query.start.unwrap_or_else(|| end - chrono::Duration::days(30));

    let rows = if let Some(source) = query.source {
        sqlx::query_as::<_, ConditionEntry>(
            r#"
            SELECT * FROM timely_conditions
            WHERE user_id = $1 AND source = $2 AND logged_at BETWEEN $3 AND $4
            ORDER BY logged_at ASC
            "#,
        )
        .bind(auth_user.id)
        .bind(source)
        .bind(start)
        .bind(end)
        .fetch_all(&state.db)
        .await?
    } else {
        sqlx::query_as::<_, ConditionEntry>(
            r#"
            SELECT * FROM timely_conditions
            WHERE user_id = $1 AND logged_at BETWEEN $2 AND $3
            ORDER BY logged_at ASC
            "#,
        )
        .bind(auth_user.id)
        .bind(start)
        .bind(end)
        .fetch_all(&state.db)
        .await?
    };

    Ok(Json(rows))
}

pub async fn create_condition(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<CreateConditionRequest>,
) -> AppResult<Json<ConditionEntry>> {
    if let Err(e) = body.validate() {
        return Err(AppError::Validation(e.to_string()));
    }

    let logged_at = body.logged_at.unwrap_or_else(Utc::now);
    let label = body.condition_type.trim().to_string();
    let note = body.note.as_deref().map(str::trim).filter(|s| !s.is_empty());

    let row = sqlx::query_as::<_, ConditionEntry>(
        r#"
        INSERT INTO timely_conditions (id, user_id, logged_at, condition_type, intensity, note, source)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(logged_at)
    .bind(&label)
    .bind(body.intensity)
    .bind(note)
    .bind(body.source)
    .fetch_one(&state.db)
    .await?;

    // First use of a new label registers it as a preset
    sqlx::query(
        r#"
        INSERT INTO user_condition_presets (id, user_id, category, label)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (user_id, category, label) DO NOTHING
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(body.source)
    .bind(&label)
    .execute(&state.db)
    .await?;

    Ok(Json(row))
}

pub async fn update_condition(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateConditionRequest>,
) -> AppResult<Json<ConditionEntry>> {
    if let Err(e) = body.validate() {
        return Err(AppError::Validation(e.to_string()));
    }

    let row = sqlx::query_as::<_, ConditionEntry>(
        r#"
        UPDATE timely_conditions SET
            logged_at = COALESCE($3, logged_at),
            condition_type = COALESCE($4, condition_type),
            intensity = COALESCE($5, intensity),
            note = COALESCE($6, note)
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(auth_user.id)
    .bind(body.logged_at)
    .bind(&body.condition_type)
    .bind(body.intensity)
    .bind(&body.note)
    .fetch_optional(&state.db)
    .await?
    .ok_or(AppError::NotFound("컨디션 기록을 찾을 수 없습니다".into()))?;

    Ok(Json(row))
}

pub async fn delete_condition(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    sqlx::query("DELETE FROM timely_conditions WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(auth_user.id)
        .execute(&state.db)
        .await?;

    Ok(Json(serde_json::json!({ "deleted": true })))
}
