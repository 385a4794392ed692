use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::review::{DailyReview, ReviewQuery, UpsertReviewRequest};
use crate::AppState;

/// One review per (user, date): insert or overwrite in place.
pub async fn upsert_review(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<UpsertReviewRequest>,
) -> AppResult<Json<DailyReview>> {
    if let Err(e) = body.validate() {
        return Err(AppError::Validation(e.to_string()));
    }

    let review_date = body.review_date.unwrap_or_else(|| Utc::now().date_naive());

    let review = sqlx::query_as::<_, DailyReview>(
        r#"
        INSERT INTO daily_reviews (id, user_id, review_date, rating, good_points, bad_points)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (user_id, review_date) DO UPDATE SET
            rating = $4,
            good_points = $5,
            bad_points = $6,
            updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(review_date)
    .bind(body.rating)
    .bind(&body.good_points)
    .bind(&body.bad_points)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(review))
}

pub async fn list_reviews(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<ReviewQuery>,
) -> AppResult<Json<Vec<DailyReview>>> {
    let start = query
        .start_date
        .unwrap_or_else(|| Utc::now().date_naive() - chrono::Duration::days(30));
    let end = query.end_date.unwrap_or_else(|| Utc::now().date_naive());

    let rows = sqlx::query_as::<_, DailyReview>(
        r#"
        SELECT * FROM daily_reviews
        WHERE user_id = $1 AND review_date BETWEEN $2 AND $3
        ORDER BY review_date DESC
        "#,
    )
    .bind(auth_user.id)
    .bind(start)
    .bind(end)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

pub async fn delete_review(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    sqlx::query("DELETE FROM daily_reviews WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(auth_user.id)
        .execute(&state.db)
        .await?;

    Ok(Json(serde_json::json!({ "deleted": true })))
}
