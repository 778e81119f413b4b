use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{NewReport, Report};

/// Service for report operations
pub struct ReportService {
    pool: PgPool,
}

impl ReportService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new report from a validated submission
    pub async fn create(&self, data: &NewReport) -> Result<Report> {
        let report = sqlx::query_as::<_, Report>(
            r#"
            INSERT INTO reports (description, category, latitude, longitude, image)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, description, category, latitude, longitude, image, created_at
            "#,
        )
        .bind(&data.description)
        .bind(&data.category)
        .bind(data.latitude)
        .bind(data.longitude)
        .bind(&data.image)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create report: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Created report: {} (category: {})",
            report.id,
            report.category
        );

        Ok(report)
    }

    /// List all reports, newest first
    pub async fn list(&self) -> Result<Vec<Report>> {
        let reports = sqlx::query_as::<_, Report>(
            r#"
            SELECT id, description, category, latitude, longitude, image, created_at
            FROM reports
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list reports: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(reports)
    }
}
