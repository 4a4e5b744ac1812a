use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::{PaginatedResponse, PaginationParams},
        professor::{AddProfessorRequest, ProfessorIdQuery, ProfessorResponse},
    },
};
use validator::Validate;

use crate::error::{WebError, WebResult};

use super::services;

#[utoipa::path(
    get,
    path = "/api/professor",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of professors", body = PaginatedResponse<ProfessorResponse>),
        (status = 400, description = "Invalid pagination or page doesn't exist")
    ),
    tag = "professors"
)]
pub async fn list_professors(
    State(db): State<Database>,
    Query(pagination): Query<PaginationParams>,
) -> WebResult<Response> {
    pagination.validate().map_err(WebError::BadRequest)?;

    let response = services::list_professors(db.pool(), &pagination).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/professor/{id}",
    params(
        ("id" = i64, Path, description = "Professor id")
    ),
    responses(
        (status = 200, description = "Professor found", body = ProfessorResponse),
        (status = 404, description = "Professor not found")
    ),
    tag = "professors"
)]
pub async fn get_professor(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> WebResult<Response> {
    let professor = services::get_professor(db.pool(), id).await?;

    Ok(Json(ProfessorResponse::from(professor)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/professor",
    request_body = AddProfessorRequest,
    responses(
        (status = 201, description = "Professor created successfully", body = ProfessorResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "professors"
)]
pub async fn create_professor(
    State(db): State<Database>,
    payload: Result<Json<AddProfessorRequest>, JsonRejection>,
) -> WebResult<Response> {
    let Json(req) = payload?;
    req.validate()?;

    let professor = services::create_professor(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(ProfessorResponse::from(professor))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/professor/{id}",
    params(
        ("id" = i64, Path, description = "Professor id")
    ),
    request_body = AddProfessorRequest,
    responses(
        (status = 200, description = "Professor updated successfully", body = ProfessorResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Professor not found")
    ),
    tag = "professors"
)]
pub async fn update_professor(
    State(db): State<Database>,
    Path(id): Path<i64>,
    payload: Result<Json<AddProfessorRequest>, JsonRejection>,
) -> WebResult<Response> {
    let Json(req) = payload?;
    req.validate()?;

    let updated = services::update_professor(db.pool(), id, &req).await?;

    Ok(Json(ProfessorResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/professor",
    params(ProfessorIdQuery),
    responses(
        (status = 204, description = "Professor deleted successfully"),
        (status = 404, description = "Professor not found")
    ),
    tag = "professors"
)]
pub async fn delete_professor(
    State(db): State<Database>,
    Query(query): Query<ProfessorIdQuery>,
) -> WebResult<Response> {
    services::delete_professor(db.pool(), query.id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
