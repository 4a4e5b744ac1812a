use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::{PaginatedResponse, PaginationParams},
        professor::ProfessorResponse,
        review::{
            AddReviewRequest, ProfessorReviewsFilter, ReviewIdQuery, ReviewResponse,
            StudentReviewsFilter,
        },
    },
};

use crate::error::{WebError, WebResult};

use super::services;

#[utoipa::path(
    get,
    path = "/review/AllProfessorsReviews",
    params(PaginationParams),
    responses(
        (status = 200, description = "Reviewed professors by average rating, highest first", body = PaginatedResponse<ProfessorResponse>),
        (status = 400, description = "Invalid pagination or page doesn't exist")
    ),
    tag = "reviews"
)]
pub async fn list_rated_professors(
    State(db): State<Database>,
    Query(pagination): Query<PaginationParams>,
) -> WebResult<Response> {
    pagination.validate().map_err(WebError::BadRequest)?;

    let response = services::list_rated_professors(db.pool(), &pagination).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/review/ProfessorsReviews",
    params(ProfessorReviewsFilter, PaginationParams),
    responses(
        (status = 200, description = "Reviews of the professor, oldest first", body = PaginatedResponse<ReviewResponse>),
        (status = 400, description = "Invalid pagination or page doesn't exist"),
        (status = 404, description = "Professor has no reviews")
    ),
    tag = "reviews"
)]
pub async fn list_professor_reviews(
    State(db): State<Database>,
    Query(filter): Query<ProfessorReviewsFilter>,
    Query(pagination): Query<PaginationParams>,
) -> WebResult<Response> {
    pagination.validate().map_err(WebError::BadRequest)?;

    let response =
        services::list_professor_reviews(db.pool(), filter.prof_id, &pagination).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/review/StudentsReviews",
    params(StudentReviewsFilter, PaginationParams),
    responses(
        (status = 200, description = "Reviews written by the student, oldest first", body = PaginatedResponse<ReviewResponse>),
        (status = 400, description = "Invalid pagination or page doesn't exist"),
        (status = 404, description = "Student has no reviews")
    ),
    tag = "reviews"
)]
pub async fn list_student_reviews(
    State(db): State<Database>,
    Query(filter): Query<StudentReviewsFilter>,
    Query(pagination): Query<PaginationParams>,
) -> WebResult<Response> {
    pagination.validate().map_err(WebError::BadRequest)?;

    let response =
        services::list_student_reviews(db.pool(), filter.apps_id, &pagination).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/review/Add",
    request_body = AddReviewRequest,
    responses(
        (status = 200, description = "Review was added", body = String, content_type = "text/plain"),
        (status = 400, description = "Validation error or unknown caller"),
        (status = 404, description = "Professor or course not found"),
        (status = 409, description = "User has already reviewed the professor and course")
    ),
    tag = "reviews"
)]
pub async fn add_review(
    State(db): State<Database>,
    payload: Result<Json<AddReviewRequest>, JsonRejection>,
) -> WebResult<Response> {
    let Json(req) = payload?;

    services::add_review(db.pool(), &req).await?;

    Ok((StatusCode::OK, "Review was added successfully").into_response())
}

#[utoipa::path(
    delete,
    path = "/review/delete",
    params(ReviewIdQuery),
    responses(
        (status = 204, description = "Review deleted successfully"),
        (status = 404, description = "Review not found")
    ),
    tag = "reviews"
)]
pub async fn remove_review(
    State(db): State<Database>,
    Query(query): Query<ReviewIdQuery>,
) -> WebResult<Response> {
    services::remove_review(db.pool(), query.review_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
