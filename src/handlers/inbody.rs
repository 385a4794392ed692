use axum::{
    extract::{Path, State},
    Extension, Json,
};
use uuid::Uuid;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::inbody::InbodyLog;
use crate::validations::inbody_log::InbodyLogForm;
use crate::AppState;

pub async fn list_inbody(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<InbodyLog>>> {
    let rows = sqlx::query_as::<_, InbodyLog>(
        r#"
        SELECT * FROM inbody_logs
        WHERE user_id = $1
        ORDER BY measured_date DESC
        "#,
    )
    .bind(auth_user.id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

pub async fn get_inbody(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<InbodyLog>> {
    let row = sqlx::query_as::<_, InbodyLog>(
        "SELECT * FROM inbody_logs WHERE id = $1 AND user_id = $2",
    )
    .bind(id)
    .bind(auth_user.id)
    .fetch_optional(&state.db)
    .await?
    .ok_or(AppError::NotFound("인바디 기록을 찾을 수 없습니다".into()))?;

    Ok(Json(row))
}

pub async fn create_inbody(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(form): Json<InbodyLogForm>,
) -> AppResult<Json<InbodyLog>> {
    let payload = form.parse()?;

    let row = sqlx::query_as::<_, InbodyLog>(
        r#"
        INSERT INTO inbody_logs (
            id, user_id, measured_date,
            basal_metabolic_rate, skeletal_muscle_mass, body_fat_mass, bmi,
            body_fat_pct, abdominal_fat_ratio, visceral_fat_level,
            body_water, protein, minerals
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(payload.measured_date)
    .bind(payload.basal_metabolic_rate)
    .bind(payload.skeletal_muscle_mass)
    .bind(payload.body_fat_mass)
    .bind(payload.bmi)
    .bind(payload.body_fat_pct)
    .bind(payload.abdominal_fat_ratio)
    .bind(payload.visceral_fat_level)
    .bind(payload.body_water)
    .bind(payload.protein)
    .bind(payload.minerals)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(row))
}

pub async fn update_inbody(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(form): Json<InbodyLogForm>,
) -> AppResult<Json<InbodyLog>> {
    let payload = form.parse()?;

    let row = sqlx::query_as::<_, InbodyLog>(
        r#"
        UPDATE inbody_logs SET
            measured_date = $3,
            basal_metabolic_rate = $4,
            skeletal_muscle_mass = $5,
            body_fat_mass = $6,
            bmi = $7,
            body_fat_pct = $8,
            abdominal_fat_ratio = $9,
            visceral_fat_level = $10,
            body_water = $11,
            protein = $12,
            minerals = $13,
            updated_at = NOW()
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(auth_user.id)
    .bind(payload.measured_date)
    .bind(payload.basal_metabolic_rate)
    .bind(payload.skeletal_muscle_mass)
    .bind(payload.body_fat_mass)
    .bind(payload.bmi)
    .bind(payload.body_fat_pct)
    .bind(payload.abdominal_fat_ratio)
    .bind(payload.visceral_fat_level)
    .bind(payload.body_water)
    .bind(payload.protein)
    .bind(payload.minerals)
    .fetch_optional(&state.db)
    .await?
    .ok_or(AppError::NotFound("인바디 기록을 찾을 수 없습니다".into()))?;

    Ok(Json(row))
}

pub async fn delete_inbody(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    sqlx::query("DELETE FROM inbody_logs WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(auth_user.id)
        .execute(&state.db)
        .await?;

    Ok(Json(serde_json::json!({ "deleted": true })))
}
