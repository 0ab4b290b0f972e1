//! Report repository
//!
//! Insert-one and list-all against the `reports` table. The pool is acquired
//! lazily through `Database`, so the first request to touch the repository is
//! what establishes the connection.

use crisismap_core::models::{NewReport, Report};
use crisismap_core::AppError;
use sqlx::Postgres;

use crate::database::Database;

#[derive(Clone)]
pub struct ReportRepository {
    db: Database,
}

impl ReportRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Persist one report and return it with the store-assigned id. This is
    /// the single write of the submission path; there are no staged writes.
    #[tracing::instrument(skip(self, report), fields(db.table = "reports", db.operation = "insert"))]
    pub async fn create(&self, report: NewReport) -> Result<Report, AppError> {
        let pool = self.db.pool().await?;

        let created = sqlx::query_as::<Postgres, Report>(
            r#"INSERT INTO reports (lat, long, comment, image_url, "timestamp")
               VALUES ($1, $2, $3, $4, $5)
               RETURNING id, lat, long, comment, image_url, "timestamp""#,
        )
        .bind(report.lat)
        .bind(report.long)
        .bind(report.comment)
        .bind(report.image_url)
        .bind(report.timestamp)
        .fetch_one(pool)
        .await?;

        Ok(created)
    }

    /// Fetch every persisted report. No filtering, no pagination, and no
    /// ordering guarantee.
    #[tracing::instrument(skip(self), fields(db.table = "reports", db.operation = "select"))]
    pub async fn list_all(&self) -> Result<Vec<Report>, AppError> {
        let pool = self.db.pool().await?;

        let reports = sqlx::query_as::<Postgres, Report>(
            r#"SELECT id, lat, long, comment, image_url, "timestamp" FROM reports"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(reports)
    }
}
