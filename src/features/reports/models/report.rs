use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for report
#[derive(Debug, Clone, FromRow)]
pub struct Report {
    pub id: Uuid,
    pub description: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new report
///
/// Every field is already validated: strings are non-empty, coordinates
/// non-zero.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub description: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub image: String,
}
