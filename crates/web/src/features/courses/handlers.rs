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
        course::{CourseResponse, CreateCourseRequest},
    },
};
use validator::Validate;

use crate::error::{WebError, WebResult};

use super::services;

#[utoipa::path(
    get,
    path = "/api/course",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of courses", body = PaginatedResponse<CourseResponse>),
        (status = 400, description = "Invalid pagination or page doesn't exist")
    ),
    tag = "courses"
)]
pub async fn list_courses(
    State(db): State<Database>,
    Query(pagination): Query<PaginationParams>,
) -> WebResult<Response> {
    pagination.validate().map_err(WebError::BadRequest)?;

    let response = services::list_courses(db.pool(), &pagination).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/course/{id}",
    params(
        ("id" = i64, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 404, description = "Course not found")
    ),
    tag = "courses"
)]
pub async fn get_course(State(db): State<Database>, Path(id): Path<i64>) -> WebResult<Response> {
    let course = services::get_course(db.pool(), id).await?;

    Ok(Json(CourseResponse::from(course)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/course",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created successfully", body = CourseResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "courses"
)]
pub async fn create_course(
    State(db): State<Database>,
    payload: Result<Json<CreateCourseRequest>, JsonRejection>,
) -> WebResult<Response> {
    let Json(req) = payload?;
    req.validate()?;

    let course = services::create_course(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(CourseResponse::from(course))).into_response())
}
