use utoipa::OpenApi;

use crate::features::{courses, professors, ratings, reviews};

#[derive(OpenApi)]
#[openapi(
    paths(
        professors::handlers::list_professors,
        professors::handlers::get_professor,
        professors::handlers::create_professor,
        professors::handlers::update_professor,
        professors::handlers::delete_professor,
        courses::handlers::list_courses,
        courses::handlers::get_course,
        courses::handlers::create_course,
        reviews::handlers::list_rated_professors,
        reviews::handlers::list_professor_reviews,
        reviews::handlers::list_student_reviews,
        reviews::handlers::add_review,
        reviews::handlers::remove_review,
        ratings::handlers::recompute_all_ratings,
    ),
    components(
        schemas(
            storage::dto::professor::AddProfessorRequest,
            storage::dto::professor::ProfessorResponse,
            storage::dto::course::CreateCourseRequest,
            storage::dto::course::CourseResponse,
            storage::dto::review::AddReviewRequest,
            storage::dto::review::ReviewResponse,
            storage::models::CourseType,
        )
    ),
    tags(
        (name = "professors", description = "Professor endpoints"),
        (name = "courses", description = "Course endpoints"),
        (name = "reviews", description = "Review submission and listing endpoints"),
        (name = "ratings", description = "Rating maintenance endpoints"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}
