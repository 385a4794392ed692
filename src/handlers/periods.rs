use axum::{
    extract::{Path, State},
    Extension, Json,
};
use uuid::Uuid;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::period::PeriodLog;
use crate::validations::period_log::PeriodLogForm;
use crate::AppState;

pub async fn list_periods(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<PeriodLog>>> {
    let rows = sqlx::query_as::<_, PeriodLog>(
        r#"
        SELECT * FROM period_logs
        WHERE user_id = $1
        ORDER BY start_date DESC
        "#,
    )
    .bind(auth_user.id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

pub async fn create_period(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(form): Json<PeriodLogForm>,
) -> AppResult<Json<PeriodLog>> {
    let payload = form.parse()?;

    let row = sqlx::query_as::<_, PeriodLog>(
        r#"
        INSERT INTO period_logs (id, user_id, start_date, end_date, note)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(payload.start_date)
    .bind(payload.end_date)
    .bind(&payload.note)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(row))
}

pub async fn update_period(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(form): Json<PeriodLogForm>,
) -> AppResult<Json<PeriodLog>> {
    let payload = form.parse()?;

    let row = sqlx::query_as::<_, PeriodLog>(
        r#"
        UPDATE period_logs SET
            start_date = $3,
            end_date = $4,
            note = $5,
            updated_at = NOW()
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(auth_user.id)
    .bind(payload.start_date)
    .bind(payload.end_date)
    .bind(&payload.note)
    .fetch_optional(&state.db)
    .await?
    .ok_or(AppError::NotFound("생리 기록을 찾을 수 없습니다".into()))?;

    Ok(Json(row))
}

pub async fn delete_period(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    sqlx::query("DELETE FROM period_logs WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(auth_user.id)
        .execute(&state.db)
        .await?;

    Ok(Json(serde_json::json!({ "deleted": true })))
}
