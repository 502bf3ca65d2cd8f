use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::candidate_dto::CandidateListResponse,
    error::Result,
    services::candidate_service::UploadTarget,
    AppState,
};

/// Pull the file name out of each uploaded part. Document content is never
/// inspected; the body is drained and discarded.
async fn collect_file_names(multipart: &mut Multipart) -> Result<Vec<String>> {
    let mut names = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        let file_name = field.file_name().unwrap_or_default().to_string();
        field.bytes().await?;
        names.push(file_name);
    }
    Ok(names)
}

#[utoipa::path(
    post,
    path = "/api/vacancies/{id}/candidates",
    params(
        ("id" = u32, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 201, description = "Candidate records built from the uploaded files", body = Json<CandidateListResponse>)
    )
)]
#[axum::debug_handler]
pub async fn upload_vacancy_candidates(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    let file_names = collect_file_names(&mut multipart).await?;
    let created = state
        .candidate_service
        .ingest_uploads(&file_names, UploadTarget::Vacancy(id));
    Ok((
        StatusCode::CREATED,
        Json(CandidateListResponse::from(created)),
    ))
}

#[utoipa::path(
    post,
    path = "/api/candidates",
    responses(
        (status = 201, description = "Candidate records staged in the pool", body = Json<CandidateListResponse>)
    )
)]
#[axum::debug_handler]
pub async fn upload_pool_candidates(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    let file_names = collect_file_names(&mut multipart).await?;
    let created = state
        .candidate_service
        .ingest_uploads(&file_names, UploadTarget::Pool);
    Ok((
        StatusCode::CREATED,
        Json(CandidateListResponse::from(created)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/candidates",
    responses(
        (status = 200, description = "Candidates currently staged in the pool", body = Json<CandidateListResponse>)
    )
)]
#[axum::debug_handler]
pub async fn list_pool(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.candidate_service.list_pool();
    Ok(Json(CandidateListResponse::from(items)))
}

#[utoipa::path(
    post,
    path = "/api/vacancies/{id}/shortlist",
    params(
        ("id" = u32, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 200, description = "Rewritten candidate list; empty when the id is unknown", body = Json<CandidateListResponse>)
    )
)]
#[axum::debug_handler]
pub async fn shortlist_vacancy(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse> {
    let items = state.shortlist_service.process_vacancy(id);
    Ok(Json(CandidateListResponse::from(items)))
}

#[utoipa::path(
    post,
    path = "/api/candidates/shortlist",
    responses(
        (status = 200, description = "Rewritten pool", body = Json<CandidateListResponse>)
    )
)]
#[axum::debug_handler]
pub async fn shortlist_pool(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.shortlist_service.process_pool();
    Ok(Json(CandidateListResponse::from(items)))
}
