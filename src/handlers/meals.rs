use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::meal::{CreateMealRequest, MealRangeQuery, TimelyMeal, UpdateMealRequest};
use crate::AppState;

pub async fn list_meals(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<MealRangeQuery>,
) -> AppResult<Json<Vec<TimelyMeal>>> {
    let end = query.end.unwrap_or_else(Utc::now);
    let start = query.start.unwrap_or_else(|| end - chrono::Duration::days(30));

    let rows = sqlx::query_as::<_, TimelyMeal>(
        r#"
        SELECT * FROM timely_meals
        WHERE user_id = $1 AND eaten_at BETWEEN $2 AND $3
        ORDER BY eaten_at ASC
        "#,
    )
    .bind(auth_user.id)
    .bind(start)
    .bind(end)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

pub async fn create_meal(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<CreateMealRequest>,
) -> AppResult<Json<TimelyMeal>> {
    if let Err(e) = body.validate() {
        return Err(AppError::Validation(e.to_string()));
    }

    let eaten_at = body.eaten_at.unwrap_or_else(Utc::now);

    let row = sqlx::query_as::<_, TimelyMeal>(
        r#"
        INSERT INTO timely_meals (id, user_id, eaten_at, foods, progress)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(eaten_at)
    .bind(&body.foods)
    .bind(body.progress.unwrap_or(100))
    .fetch_one(&state.db)
    .await?;

    Ok(Json(row))
}

pub async fn update_meal(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateMealRequest>,
) -> AppResult<Json<TimelyMeal>> {
    if let Err(e) = body.validate() {
        return Err(AppError::Validation(e.to_string()));
    }

    let row = sqlx::query_as::<_, TimelyMeal>(
        r#"
        UPDATE timely_meals SET
            eaten_at = COALESCE($3, eaten_at),
            foods = COALESCE($4, foods),
            progress = COALESCE($5, progress)
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(auth_user.id)
    .bind(body.eaten_at)
    .bind(&body.foods)
    .bind(body.progress)
    .fetch_optional(&state.db)
    .await?
    .ok_or(AppError::NotFound("식단 기록을 찾을 수 없습니다".into()))?;

    Ok(Json(row))
}

pub async fn delete_meal(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    sqlx::query("DELETE FROM timely_meals WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(auth_user.id)
        .execute(&state.db)
        .await?;

    Ok(Json(serde_json::json!({ "deleted": true })))
}
