use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::auth::middleware::AuthUser;
use crate::error::AppResult;
use crate::evaluations::fasting::evaluate_day;
use crate::stats::daybucket::local_day;
use crate::stats::weight::daily_average;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// One calendar cell: which kinds of entries the day has.
#[derive(Debug, Default, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub has_fasting: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fasting_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_rating: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_weight: Option<f64>,
    pub meal_count: i64,
    pub condition_count: i64,
    pub bowel_count: i64,
    pub in_period: bool,
}

/// KST midnight of `date`, as a UTC instant.
fn kst_day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc() - Duration::hours(9)
}

fn day_entry(days: &mut BTreeMap<NaiveDate, DailySummary>, date: NaiveDate) -> &mut DailySummary {
    days.entry(date).or_insert_with(|| DailySummary {
        date,
        ..DailySummary::default()
    })
}

/// Calendar feed: merge every entity's entries for the range into per-day
/// markers. Timestamped entries are bucketed onto their KST day; only days
/// that have at least one entry appear.
pub async fn get_daily_summary(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<SummaryQuery>,
) -> AppResult<Json<Vec<DailySummary>>> {
    let end = query.end_date.unwrap_or_else(|| Utc::now().date_naive());
    let start = query.start_date.unwrap_or_else(|| end - Duration::days(30));

    // Timestamped tables cover [KST midnight of start, KST midnight after end)
    let ts_start = kst_day_start(start);
    let ts_end = kst_day_start(end + Duration::days(1));

    let mut days: BTreeMap<NaiveDate, DailySummary> = BTreeMap::new();

    let fastings = sqlx::query_as::<_, (NaiveDate, Option<f64>, Option<f64>)>(
        r#"
        SELECT log_date, fasting_glucose, fasting_ketone FROM daily_fastings
        WHERE user_id = $1 AND log_date BETWEEN $2 AND $3
        "#,
    )
    .bind(auth_user.id)
    .bind(start)
    .bind(end)
    .fetch_all(&state.db)
    .await?;

    for (date, glucose, ketone) in fastings {
        let entry = day_entry(&mut days, date);
        entry.has_fasting = true;
        if let (Some(g), Some(k)) = (glucose, ketone) {
            entry.fasting_score = Some(evaluate_day(g, k).final_score);
        }
    }

    let reviews = sqlx::query_as::<_, (NaiveDate, i32)>(
        r#"
        SELECT review_date, rating FROM daily_reviews
        WHERE user_id = $1 AND review_date BETWEEN $2 AND $3
        "#,
    )
    .bind(auth_user.id)
    .bind(start)
    .bind(end)
    .fetch_all(&state.db)
    .await?;

    for (date, rating) in reviews {
        day_entry(&mut days, date).review_rating = Some(rating);
    }

    let weights = sqlx::query_as::<_, (DateTime<Utc>, f64)>(
        r#"
        SELECT measured_at, weight FROM timely_weights
        WHERE user_id = $1 AND measured_at >= $2 AND measured_at < $3
        ORDER BY measured_at ASC
        "#,
    )
    .bind(auth_user.id)
    .bind(ts_start)
    .bind(ts_end)
    .fetch_all(&state.db)
    .await?;

    for daily in daily_average(&weights) {
        day_entry(&mut days, daily.date).avg_weight = Some(daily.weight);
    }

    let meals = sqlx::query_scalar::<_, DateTime<Utc>>(
        r#"
        SELECT eaten_at FROM timely_meals
        WHERE user_id = $1 AND eaten_at >= $2 AND eaten_at < $3
        "#,
    )
    .bind(auth_user.id)
    .bind(ts_start)
    .bind(ts_end)
    .fetch_all(&state.db)
    .await?;

    for eaten_at in meals {
        day_entry(&mut days, local_day(eaten_at)).meal_count += 1;
    }

    let conditions = sqlx::query_scalar::<_, DateTime<Utc>>(
        r#"
        SELECT logged_at FROM timely_conditions
        WHERE user_id = $1 AND logged_at >= $2 AND logged_at < $3
        "#,
    )
    .bind(auth_user.id)
    .bind(ts_start)
    .bind(ts_end)
    .fetch_all(&state.db)
    .await?;

    for logged_at in conditions {
        day_entry(&mut days, local_day(logged_at)).condition_count += 1;
    }

    let bowels = sqlx::query_scalar::<_, NaiveDate>(
        r#"
        SELECT log_date FROM bowel_logs
        WHERE user_id = $1 AND log_date BETWEEN $2 AND $3
        "#,
    )
    .bind(auth_user.id)
    .bind(start)
    .bind(end)
    .fetch_all(&state.db)
    .await?;

    for date in bowels {
        day_entry(&mut days, date).bowel_count += 1;
    }

    // Periods overlapping the range mark each covered day; an open-ended
    // period covers only its start day.
    let periods = sqlx::query_as::<_, (NaiveDate, Option<NaiveDate>)>(
        r#"
        SELECT start_date, end_date FROM period_logs
        WHERE user_id = $1
          AND start_date <= $3
          AND COALESCE(end_date, start_date) >= $2
        "#,
    )
    .bind(auth_user.id)
    .bind(start)
    .bind(end)
    .fetch_all(&state.db)
    .await?;

    for (period_start, period_end) in periods {
        let first = period_start.max(start);
        let last = period_end.unwrap_or(period_start).min(end);
        let mut date = first;
        while date <= last {
            day_entry(&mut days, date).in_period = true;
            date += Duration::days(1);
        }
    }

    Ok(Json(days.into_values().collect()))
}
