use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::bowel::{BowelLog, BowelQuery};
use crate::validations::bowel_log::BowelLogForm;
use crate::AppState;

pub async fn list_bowels(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<BowelQuery>,
) -> AppResult<Json<Vec<BowelLog>>> {
    let start = query
        .start_date
        .unwrap_or_else(|| Utc::now().date_naive() - chrono::Duration::days(30));
    let end = query.end_date.unwrap_or_else(|| Utc::now().date_naive());

    let rows = sqlx::query_as::<_, BowelLog>(
        r#"
        SELECT * FROM bowel_logs
        WHERE user_id = $1 AND log_date BETWEEN $2 AND $3
        ORDER BY log_date DESC, log_time DESC NULLS LAST
        "#,
    )
    .bind(auth_user.id)
    .bind(start)
    .bind(end)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

pub async fn create_bowel(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(form): Json<BowelLogForm>,
) -> AppResult<Json<BowelLog>> {
    let payload = form.parse()?;

    let row = sqlx::query_as::<_, BowelLog>(
        r#"
        INSERT INTO bowel_logs (id, user_id, log_date, log_time, note)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(payload.log_date)
    .bind(payload.log_time)
    .bind(&payload.note)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(row))
}

pub async fn update_bowel(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(form): Json<BowelLogForm>,
) -> AppResult<Json<BowelLog>> {
    let payload = form.parse()?;

    let row = sqlx::query_as::<_, BowelLog>(
        r#"
        UPDATE bowel_logs SET
            log_date = $3,
            log_time = $4,
            note = $5
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(auth_user.id)
    .bind(payload.log_date)
    .bind(payload.log_time)
    .bind(&payload.note)
    .fetch_optional(&state.db)
    .await?
    .ok_or(AppError::NotFound("배변 기록을 찾을 수 없습니다".into()))?;

    Ok(Json(row))
}

pub async fn delete_bowel(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    sqlx::query("DELETE FROM bowel_logs WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(auth_user.id)
        .execute(&state.db)
        .await?;

    Ok(Json(serde_json::json!({ "deleted": true })))
}
