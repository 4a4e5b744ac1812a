use sqlx::PgPool;
use storage::{
    dto::{
        common::{PaginatedResponse, PaginationParams},
        course::{CourseResponse, CreateCourseRequest},
    },
    error::{Result, StorageError},
    models::Course,
    repository::course::CourseRepository,
};

/// List courses ordered by id, one page at a time
pub async fn list_courses(
    pool: &PgPool,
    pagination: &PaginationParams,
) -> Result<PaginatedResponse<CourseResponse>> {
    let repo = CourseRepository::new(pool);

    let total = repo.count().await?;
    let window = pagination.window(total)?;
    let courses = repo.list_page(&window).await?;

    Ok(
        PaginatedResponse::new(courses, pagination.page, &window, total)
            .map(CourseResponse::from),
    )
}

/// Get course by id
pub async fn get_course(pool: &PgPool, id: i64) -> Result<Course> {
    let repo = CourseRepository::new(pool);
    let course = repo.find_by_id(id).await.inspect_err(|e| log_not_found(e, id))?;

    tracing::info!(id, "Requested Course");
    Ok(course)
}

/// Create a new course
pub async fn create_course(pool: &PgPool, request: &CreateCourseRequest) -> Result<Course> {
    let repo = CourseRepository::new(pool);
    let course = repo.create(request).await?;

    tracing::info!(id = course.course_id, "Created Course");
    Ok(course)
}

fn log_not_found(error: &StorageError, id: i64) {
    if matches!(error, StorageError::NotFound(_)) {
        tracing::warn!(id, "No Course with id {} found in database", id);
    }
}
