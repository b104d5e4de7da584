use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::auth::middleware::AuthUser;
use crate::engine::Emotion;
use crate::error::{AppError, AppResult};
use crate::models::checkin::Checkin;
use crate::models::weekly_analysis::WeeklyAnalysis;
use crate::AppState;

pub async fn list_analyses(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<WeeklyAnalysis>>> {
    let analyses = sqlx::query_as::<_, WeeklyAnalysis>(
        r#"
        SELECT * FROM weekly_analyses
        WHERE user_id = $1
        ORDER BY generated_at DESC
        "#,
    )
    .bind(auth_user.id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(analyses))
}

pub async fn get_analysis(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(analysis_id): Path<Uuid>,
) -> AppResult<Json<WeeklyAnalysis>> {
    let analysis = sqlx::query_as::<_, WeeklyAnalysis>(
        "SELECT * FROM weekly_analyses WHERE id = $1 AND user_id = $2",
    )
    .bind(analysis_id)
    .bind(auth_user.id)
    .fetch_optional(&state.db)
    .await?
    .ok_or(AppError::NotFound("Análise não encontrada".into()))?;

    Ok(Json(analysis))
}

/// Generate and persist a weekly analysis from the user's trailing 7-day
/// check-in window. The window is filtered here; the engine receives it
/// as-is and rejects an empty one with a conflict.
pub async fn generate_analysis(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<WeeklyAnalysis>> {
    let window_end = Utc::now();
    let window_start = window_end - Duration::days(7);

    let checkins = sqlx::query_as::<_, Checkin>(
        r#"
        SELECT * FROM checkins
        WHERE user_id = $1 AND created_at >= $2
        ORDER BY created_at ASC
        "#,
    )
    .bind(auth_user.id)
    .bind(window_start)
    .fetch_all(&state.db)
    .await?;

    let emotions: Vec<Emotion> = checkins.iter().map(|c| c.emotion).collect();
    let texts: Vec<String> = checkins.iter().map(|c| c.text.clone()).collect();

    let outcome = state.engine.analyze(&emotions, &texts).await?;

    let week_reference = format!(
        "Semana {} a {}",
        window_start.format("%d/%m/%Y"),
        window_end.format("%d/%m/%Y")
    );

    let analysis = sqlx::query_as::<_, WeeklyAnalysis>(
        r#"
        INSERT INTO weekly_analyses
            (id, user_id, week_reference, predominant_emotion, summary, recommendation)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(&week_reference)
    .bind(outcome.predominant.as_label())
    .bind(&outcome.summary)
    .bind(&outcome.recommendation)
    .fetch_one(&state.db)
    .await?;

    tracing::info!(
        analysis_id = %analysis.id,
        user_id = %auth_user.id,
        predominant = %analysis.predominant_emotion,
        checkins = checkins.len(),
        "Weekly analysis generated"
    );

    Ok(Json(analysis))
}

pub async fn delete_analysis(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(analysis_id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let result = sqlx::query("DELETE FROM weekly_analyses WHERE id = $1 AND user_id = $2")
        .bind(analysis_id)
        .bind(auth_user.id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Análise não encontrada".into()));
    }

    Ok(Json(serde_json::json!({ "deleted": true })))
}
