//! Postgres submission store.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use super::{ContactSubmission, NewSubmission, SubmissionStore};

/// Store writing to the `contact_submissions` table.
#[derive(Debug)]
pub struct PostgresSubmissionStore {
    pool: PgPool,
}

impl PostgresSubmissionStore {
    /// Connect and run the embedded migrations.
    pub async fn new(connection_string: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }
}

fn from_row(row: &PgRow) -> Result<ContactSubmission> {
    Ok(ContactSubmission {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        subject: row.try_get("subject")?,
        message: row.try_get("message")?,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl SubmissionStore for PostgresSubmissionStore {
    fn name(&self) -> &'static str {
        "postgres"
    }

    async fn insert(&self, new: &NewSubmission) -> Result<ContactSubmission> {
        let row = sqlx::query(
            r#"
            INSERT INTO contact_submissions (name, email, subject, message)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, subject, message, created_at
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.subject)
        .bind(&new.message)
        .fetch_one(&self.pool)
        .await?;

        from_row(&row)
    }

    async fn list_recent(&self) -> Result<Vec<ContactSubmission>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, email, subject, message, created_at
            FROM contact_submissions
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(from_row).collect()
    }
}
