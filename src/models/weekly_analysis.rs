use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted weekly analysis. `predominant_emotion` is stored as text
/// because `"Misto"` is a legal value alongside the five emotion names.
/// Re-analysis inserts a new row; rows are never updated.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct WeeklyAnalysis {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Human-readable window label, e.g. "Semana 01/08/2026 a 08/08/2026".
    pub week_reference: String,
    pub predominant_emotion: String,
    pub summary: String,
    pub recommendation: String,
    pub generated_at: DateTime<Utc>,
}
