use axum::{
    extract::{Path, State},
    Extension, Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::auth::middleware::AuthUser;
use crate::engine::response::generate_response;
use crate::error::{AppError, AppResult};
use crate::models::checkin::{Checkin, CreateCheckinRequest, UpdateCheckinRequest};
use crate::AppState;

pub async fn list_checkins(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<Checkin>>> {
    let checkins = sqlx::query_as::<_, Checkin>(
        r#"
        SELECT * FROM checkins
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(auth_user.id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(checkins))
}

pub async fn get_checkin(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(checkin_id): Path<Uuid>,
) -> AppResult<Json<Checkin>> {
    let checkin =
        sqlx::query_as::<_, Checkin>("SELECT * FROM checkins WHERE id = $1 AND user_id = $2")
            .bind(checkin_id)
            .bind(auth_user.id)
            .fetch_optional(&state.db)
            .await?
            .ok_or(AppError::NotFound("Check-in não encontrado".into()))?;

    Ok(Json(checkin))
}

pub async fn create_checkin(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<CreateCheckinRequest>,
) -> AppResult<Json<Checkin>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let sentiment = body.emotion.sentiment();
    let reply = generate_response(body.emotion, &body.text, &mut rand::thread_rng());

    let checkin = sqlx::query_as::<_, Checkin>(
        r#"
        INSERT INTO checkins (id, user_id, emotion, text, sentiment, generated_response)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(body.emotion)
    .bind(&body.text)
    .bind(sentiment)
    .bind(&reply)
    .fetch_one(&state.db)
    .await?;

    tracing::info!(
        checkin_id = %checkin.id,
        user_id = %auth_user.id,
        emotion = %checkin.emotion,
        sentiment = %checkin.sentiment.as_str(),
        "Check-in created"
    );

    Ok(Json(checkin))
}

pub async fn update_checkin(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(checkin_id): Path<Uuid>,
    Json(body): Json<UpdateCheckinRequest>,
) -> AppResult<Json<Checkin>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    // Derived fields follow the new emotion and text; the original check-in
    // timestamp is kept.
    let sentiment = body.emotion.sentiment();
    let reply = generate_response(body.emotion, &body.text, &mut rand::thread_rng());

    let checkin = sqlx::query_as::<_, Checkin>(
        r#"
        UPDATE checkins
        SET emotion = $3, text = $4, sentiment = $5, generated_response = $6
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(checkin_id)
    .bind(auth_user.id)
    .bind(body.emotion)
    .bind(&body.text)
    .bind(sentiment)
    .bind(&reply)
    .fetch_optional(&state.db)
    .await?
    .ok_or(AppError::NotFound("Check-in não encontrado".into()))?;

    Ok(Json(checkin))
}

pub async fn delete_checkin(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(checkin_id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let result = sqlx::query("DELETE FROM checkins WHERE id = $1 AND user_id = $2")
        .bind(checkin_id)
        .bind(auth_user.id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Check-in não encontrado".into()));
    }

    Ok(Json(serde_json::json!({ "deleted": true })))
}
