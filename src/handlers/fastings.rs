use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::evaluations::fasting::{evaluate_day, evaluate_metabolic_state};
use crate::models::fasting::{DailyFasting, DailyFastingDetail, FastingQuery};
use crate::validations::daily_fasting::DailyFastingForm;
use crate::AppState;

pub async fn list_fastings(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<FastingQuery>,
) -> AppResult<Json<Vec<DailyFasting>>> {
    let start = query
        .start_date
        .unwrap_or_else(|| Utc::now().date_naive() - chrono::Duration::days(30));
    let end = query.end_date.unwrap_or_else(|| Utc::now().date_naive());

    let rows = sqlx::query_as::<_, DailyFasting>(
        r#"
        SELECT * FROM daily_fastings
        WHERE user_id = $1 AND log_date BETWEEN $2 AND $3
        ORDER BY log_date DESC
        "#,
    )
    .bind(auth_user.id)
    .bind(start)
    .bind(end)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

/// Detail for one calendar day, with the derived scoring when both readings
/// are recorded.
pub async fn get_fasting_by_date(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(date): Path<NaiveDate>,
) -> AppResult<Json<DailyFastingDetail>> {
    let fasting = sqlx::query_as::<_, DailyFasting>(
        "SELECT * FROM daily_fastings WHERE user_id = $1 AND log_date = $2",
    )
    .bind(auth_user.id)
    .bind(date)
    .fetch_optional(&state.db)
    .await?
    .ok_or(AppError::NotFound("해당 날짜의 기록이 없습니다".into()))?;

    let (evaluation, metabolic_state) =
        match (fasting.fasting_glucose, fasting.fasting_ketone) {
            (Some(g), Some(k)) => (
                Some(evaluate_day(g, k)),
                Some(evaluate_metabolic_state(g, k)),
            ),
            _ => (None, None),
        };

    Ok(Json(DailyFastingDetail {
        fasting,
        evaluation,
        metabolic_state,
    }))
}

pub async fn create_fasting(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(form): Json<DailyFastingForm>,
) -> AppResult<Json<DailyFasting>> {
    let payload = form.parse()?;

    let result = sqlx::query_as::<_, DailyFasting>(
        r#"
        INSERT INTO daily_fastings (id, user_id, log_date, fasting_glucose, fasting_ketone, diet_note)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(payload.log_date)
    .bind(payload.fasting_glucose)
    .bind(payload.fasting_ketone)
    .bind(&payload.diet_note)
    .fetch_one(&state.db)
    .await;

    match result {
        Ok(row) => Ok(Json(row)),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(AppError::Conflict(
            "이미 해당 날짜의 기록이 있습니다".into(),
        )),
        Err(e) => Err(e.into()),
    }
}

pub async fn update_fasting(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(form): Json<DailyFastingForm>,
) -> AppResult<Json<DailyFasting>> {
    let payload = form.parse()?;

    let row = sqlx::query_as::<_, DailyFasting>(
        r#"
        UPDATE daily_fastings SET
            log_date = $3,
            fasting_glucose = $4,
            fasting_ketone = $5,
            diet_note = $6,
            updated_at = NOW()
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(auth_user.id)
    .bind(payload.log_date)
    .bind(payload.fasting_glucose)
    .bind(payload.fasting_ketone)
    .bind(&payload.diet_note)
    .fetch_optional(&state.db)
    .await?
    .ok_or(AppError::NotFound("기록을 찾을 수 없습니다".into()))?;

    Ok(Json(row))
}

/// Filter-based delete: deleting an id that no longer exists is a no-op
/// success, not an error.
pub async fn delete_fasting(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    sqlx::query("DELETE FROM daily_fastings WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(auth_user.id)
        .execute(&state.db)
        .await?;

    Ok(Json(serde_json::json!({ "deleted": true })))
}
