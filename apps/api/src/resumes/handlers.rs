//! HTTP handlers for the resume API, including the LaTeX import/export
//! boundary around the converter in [`crate::latex`].

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::latex::{parse_latex_resume, resume_to_latex};
use crate::models::resume::{Resume, ResumeRow};
use crate::resumes::store;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResumeRequest {
    pub user_id: Uuid,
    pub resume: Resume,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportLatexRequest {
    pub user_id: Uuid,
    pub latex_code: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewLatexRequest {
    pub latex_code: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateResumeRequest {
    pub user_id: Uuid,
}

/// POST /api/v1/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Json(req): Json<SaveResumeRequest>,
) -> Result<(StatusCode, Json<ResumeRow>), AppError> {
    let row = store::insert_resume(&state.db, req.user_id, &req.resume).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/resumes?user_id=
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<ResumeRow>>, AppError> {
    let rows = store::list_resumes(&state.db, params.user_id).await?;
    Ok(Json(rows))
}

/// GET /api/v1/resumes/templates
pub async fn handle_list_templates() -> Json<Value> {
    Json(json!([
        { "id": "classic", "name": "Classic", "description": "Single-column serif layout" },
        { "id": "modern", "name": "Modern", "description": "Sans-serif with accent color" },
        { "id": "minimal", "name": "Minimal", "description": "Whitespace-heavy, no rules" },
        { "id": "professional", "name": "Professional", "description": "Dense two-column layout" }
    ]))
}

/// GET /api/v1/resumes/:id?user_id=
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ResumeRow>, AppError> {
    let row = store::get_resume(&state.db, id, params.user_id).await?;
    Ok(Json(row))
}

/// PUT /api/v1/resumes/:id
pub async fn handle_update_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SaveResumeRequest>,
) -> Result<Json<ResumeRow>, AppError> {
    let row = store::update_resume(&state.db, id, req.user_id, &req.resume).await?;
    Ok(Json(row))
}

/// DELETE /api/v1/resumes/:id?user_id=
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    store::delete_resume(&state.db, id, params.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/resumes/:id/duplicate
pub async fn handle_duplicate_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<DuplicateResumeRequest>,
) -> Result<(StatusCode, Json<ResumeRow>), AppError> {
    let row = store::get_resume(&state.db, id, req.user_id).await?;
    let mut resume = store::decode_resume(&row)?;
    resume.title = format!("{} (Copy)", row.title);
    let copy = store::insert_resume(&state.db, req.user_id, &resume).await?;
    Ok((StatusCode::CREATED, Json(copy)))
}

/// POST /api/v1/resumes/import-latex
pub async fn handle_import_latex(
    State(state): State<AppState>,
    Json(req): Json<ImportLatexRequest>,
) -> Result<(StatusCode, Json<ResumeRow>), AppError> {
    let resume = parse_import(&req.latex_code, state.config.max_import_bytes)?;
    let row = store::insert_resume(&state.db, req.user_id, &resume).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// POST /api/v1/resumes/preview-latex
///
/// Same extraction as import, without persisting anything.
pub async fn handle_preview_latex(
    State(state): State<AppState>,
    Json(req): Json<PreviewLatexRequest>,
) -> Result<Json<Resume>, AppError> {
    let resume = parse_import(&req.latex_code, state.config.max_import_bytes)?;
    Ok(Json(resume))
}

/// GET /api/v1/resumes/:id/export-latex?user_id=
pub async fn handle_export_latex(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let row = store::get_resume(&state.db, id, params.user_id).await?;
    let resume = store::decode_resume(&row)?;
    let latex = resume_to_latex(&resume);
    Ok((
        [
            (header::CONTENT_TYPE, "application/x-tex"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"resume.tex\"",
            ),
        ],
        latex,
    ))
}

fn parse_import(latex_code: &str, max_bytes: usize) -> Result<Resume, AppError> {
    if latex_code.trim().is_empty() {
        return Err(AppError::Validation("LaTeX code is required".to_string()));
    }
    if latex_code.len() > max_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "LaTeX input exceeds the {max_bytes} byte limit"
        )));
    }
    let resume = parse_latex_resume(latex_code)?;
    tracing::debug!(
        experience = resume.experience.len(),
        education = resume.education.len(),
        projects = resume.projects.len(),
        "extracted resume from LaTeX import"
    );
    Ok(resume)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_import_rejects_empty_input() {
        let err = parse_import("   \n", 1024).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_parse_import_rejects_oversized_input() {
        let big = "x".repeat(64);
        let err = parse_import(&big, 32).unwrap_err();
        assert!(matches!(err, AppError::PayloadTooLarge(_)));
    }

    #[test]
    fn test_parse_import_extracts_resume() {
        let resume = parse_import("\\name{Jane Doe}", 1024).unwrap();
        assert_eq!(resume.personal_info.full_name, "Jane Doe");
        assert_eq!(resume.title, "Imported from LaTeX");
    }
}
