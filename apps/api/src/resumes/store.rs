//! sqlx persistence for resume records.
//!
//! Each row mirrors the full [`Resume`] record in a JSONB `data` column and
//! duplicates `title`/`template` as plain columns so list queries never touch
//! the document body. Ownership is enforced in SQL: every per-row query is
//! scoped by `user_id`.

use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{Resume, ResumeRow};

pub async fn insert_resume(
    db: &PgPool,
    user_id: Uuid,
    resume: &Resume,
) -> Result<ResumeRow, AppError> {
    let data = serde_json::to_value(resume).context("serializing resume record")?;
    let row: ResumeRow = sqlx::query_as(
        r#"
        INSERT INTO resumes (id, user_id, title, template, data, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&resume.title)
    .bind(&resume.template)
    .bind(data)
    .fetch_one(db)
    .await?;
    Ok(row)
}

/// The owner's resumes, most recently touched first.
pub async fn list_resumes(db: &PgPool, user_id: Uuid) -> Result<Vec<ResumeRow>, AppError> {
    let rows: Vec<ResumeRow> =
        sqlx::query_as("SELECT * FROM resumes WHERE user_id = $1 ORDER BY updated_at DESC")
            .bind(user_id)
            .fetch_all(db)
            .await?;
    Ok(rows)
}

pub async fn get_resume(db: &PgPool, id: Uuid, user_id: Uuid) -> Result<ResumeRow, AppError> {
    let row: Option<ResumeRow> =
        sqlx::query_as("SELECT * FROM resumes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(db)
            .await?;
    row.ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}

pub async fn update_resume(
    db: &PgPool,
    id: Uuid,
    user_id: Uuid,
    resume: &Resume,
) -> Result<ResumeRow, AppError> {
    let data = serde_json::to_value(resume).context("serializing resume record")?;
    let row: Option<ResumeRow> = sqlx::query_as(
        r#"
        UPDATE resumes
        SET title = $3, template = $4, data = $5, updated_at = NOW()
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(&resume.title)
    .bind(&resume.template)
    .bind(data)
    .fetch_optional(db)
    .await?;
    row.ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}

pub async fn delete_resume(db: &PgPool, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM resumes WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Resume {id} not found")));
    }
    Ok(())
}

/// Decodes the JSONB document of a stored row back into a [`Resume`].
pub fn decode_resume(row: &ResumeRow) -> Result<Resume, AppError> {
    let resume = serde_json::from_value(row.data.clone())
        .with_context(|| format!("decoding stored resume {}", row.id))?;
    Ok(resume)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_decode_resume_tolerates_partial_documents() {
        let row = ResumeRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "My Resume".to_string(),
            template: "classic".to_string(),
            data: serde_json::json!({
                "title": "My Resume",
                "personalInfo": { "fullName": "Jane Doe" }
            }),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let resume = decode_resume(&row).unwrap();
        assert_eq!(resume.personal_info.full_name, "Jane Doe");
        assert!(resume.experience.is_empty());
    }
}
