use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::vacancy_dto::{
        CreateVacancyPayload, VacancyListResponse, VacancyResponse, VacancySummaryResponse,
    },
    error::{Error, Result},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/vacancies",
    request_body = CreateVacancyPayload,
    responses(
        (status = 201, description = "Vacancy created successfully", body = Json<VacancyResponse>)
    )
)]
#[axum::debug_handler]
pub async fn create_vacancy(
    State(state): State<AppState>,
    Json(payload): Json<CreateVacancyPayload>,
) -> Result<impl IntoResponse> {
    let vacancy = state.vacancy_service.create(
        payload.title,
        payload.description,
        payload.closing_date,
        payload.contact,
    );
    Ok((StatusCode::CREATED, Json(VacancyResponse::from(vacancy))))
}

#[utoipa::path(
    get,
    path = "/api/vacancies/open",
    responses(
        (status = 200, description = "Open vacancies in creation order", body = Json<VacancyListResponse>)
    )
)]
#[axum::debug_handler]
pub async fn list_open_vacancies(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.vacancy_service.list_open();
    Ok(Json(VacancyListResponse::from(items)))
}

#[utoipa::path(
    get,
    path = "/api/vacancies/closed",
    responses(
        (status = 200, description = "Closed vacancies for historical review", body = Json<VacancyListResponse>)
    )
)]
#[axum::debug_handler]
pub async fn list_closed_vacancies(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.vacancy_service.list_closed();
    Ok(Json(VacancyListResponse::from(items)))
}

#[utoipa::path(
    get,
    path = "/api/vacancies/{id}",
    params(
        ("id" = u32, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 200, description = "Vacancy found", body = Json<VacancyResponse>),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn get_vacancy(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse> {
    let vacancy = state
        .vacancy_service
        .get_by_id(id)
        .ok_or_else(|| Error::NotFound(format!("Vacancy {} not found", id)))?;
    Ok(Json(VacancyResponse::from(vacancy)))
}

#[utoipa::path(
    post,
    path = "/api/vacancies/{id}/close",
    params(
        ("id" = u32, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 204, description = "Close recorded; unknown ids are ignored")
    )
)]
#[axum::debug_handler]
pub async fn close_vacancy(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse> {
    state.vacancy_service.close(id);
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/vacancies/{id}/summary",
    params(
        ("id" = u32, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 200, description = "Applicant counts for the vacancy", body = Json<VacancySummaryResponse>),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn vacancy_summary(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse> {
    let summary = state
        .history_service
        .summarize_vacancy(id)
        .ok_or_else(|| Error::NotFound(format!("Vacancy {} not found", id)))?;
    Ok(Json(VacancySummaryResponse::from(summary)))
}
