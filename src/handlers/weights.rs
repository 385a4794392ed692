use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::weight::{
    CreateWeightRequest, TimelyWeight, UpdateWeightRequest, WeightRangeQuery,
};
use crate::stats::boxplot::{daily_box_stats, DailyBoxStats};
use crate::stats::weight::{daily_average, DailyWeight};
use crate::AppState;

fn range_bounds(query: &WeightRangeQuery) -> (DateTime<Utc>, DateTime<Utc>) {
    let end = query.end.unwrap_or_else(Utc::now);
    let start = query.start.unwrap_or_else(|| end - chrono::Duration::days(30));
    (start, end)
}

async fn fetch_samples(
    state: &AppState,
    user_id: Uuid,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> AppResult<Vec<(DateTime<Utc>, f64)>> {
    let samples = sqlx::query_as::<_, (DateTime<Utc>, f64)>(
        r#"
        SELECT measured_at, weight FROM timely_weights
        WHERE user_id = $1 AND measured_at BETWEEN $2 AND $3
        ORDER BY measured_at ASC
        "#,
    )
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_all(&state.db)
    .await?;

    Ok(samples)
}

pub async fn list_weights(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<WeightRangeQuery>,
) -> AppResult<Json<Vec<TimelyWeight>>> {
    let (start, end) = range_bounds(&query);

    let rows = sqlx::query_as::<_, TimelyWeight>(
        r#"
        SELECT * FROM timely_weights
        WHERE user_id = $1 AND measured_at BETWEEN $2 AND $3
        ORDER BY measured_at DESC
        "#,
    )
    .bind(auth_user.id)
    .bind(start)
    .bind(end)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

pub async fn create_weight(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<CreateWeightRequest>,
) -> AppResult<Json<TimelyWeight>> {
    if let Err(e) = body.validate() {
        return Err(AppError::Validation(e.to_string()));
    }

    let measured_at = body.measured_at.unwrap_or_else(Utc::now);

    let row = sqlx::query_as::<_, TimelyWeight>(
        r#"
        INSERT INTO timely_weights (id, user_id, measured_at, weight)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(measured_at)
    .bind(body.weight)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(row))
}

pub async fn update_weight(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateWeightRequest>,
) -> AppResult<Json<TimelyWeight>> {
    if let Err(e) = body.validate() {
        return Err(AppError::Validation(e.to_string()));
    }

    let row = sqlx::query_as::<_, TimelyWeight>(
        r#"
        UPDATE timely_weights SET
            measured_at = COALESCE($3, measured_at),
            weight = COALESCE($4, weight)
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(auth_user.id)
    .bind(body.measured_at)
    .bind(body.weight)
    .fetch_optional(&state.db)
    .await?
    .ok_or(AppError::NotFound("체중 기록을 찾을 수 없습니다".into()))?;

    Ok(Json(row))
}

pub async fn delete_weight(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    sqlx::query("DELETE FROM timely_weights WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(auth_user.id)
        .execute(&state.db)
        .await?;

    Ok(Json(serde_json::json!({ "deleted": true })))
}

/// Chart feed: one averaged point per KST day.
pub async fn get_daily_average(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<WeightRangeQuery>,
) -> AppResult<Json<Vec<DailyWeight>>> {
    let (start, end) = range_bounds(&query);
    let samples = fetch_samples(&state, auth_user.id, start, end).await?;
    Ok(Json(daily_average(&samples)))
}

/// Whisker-chart feed: per-day box stats plus the day-over-day trend flag.
pub async fn get_boxplot(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<WeightRangeQuery>,
) -> AppResult<Json<Vec<DailyBoxStats>>> {
    let (start, end) = range_bounds(&query);
    let samples = fetch_samples(&state, auth_user.id, start, end).await?;
    Ok(Json(daily_box_stats(&samples)))
}
