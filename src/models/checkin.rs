use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::engine::{Emotion, Sentiment};

/// One emotional check-in. `sentiment` and `generated_response` are derived
/// by the engine at write time and read-only afterward.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Checkin {
    pub id: Uuid,
    pub user_id: Uuid,
    pub emotion: Emotion,
    pub text: String,
    pub sentiment: Sentiment,
    pub generated_response: String,
    pub created_at: DateTime<Utc>,
}

/// POST /api/checkins. The emotion field accepts canonical names and their
/// feminine variants, case-insensitively (lenient deserialization on
/// [`Emotion`] itself).
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCheckinRequest {
    pub emotion: Emotion,

    #[validate(length(min = 1, max = 100, message = "Texto deve ter entre 1 e 100 caracteres"))]
    pub text: String,
}

/// PUT /api/checkins/{id}. Full replace; derived fields are recomputed,
/// the original check-in timestamp is preserved.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCheckinRequest {
    pub emotion: Emotion,

    #[validate(length(min = 1, max = 100, message = "Texto deve ter entre 1 e 100 caracteres"))]
    pub text: String,
}
