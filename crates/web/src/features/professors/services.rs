use sqlx::PgPool;
use storage::{
    dto::{
        common::{PaginatedResponse, PaginationParams},
        professor::{AddProfessorRequest, ProfessorResponse},
    },
    error::{Result, StorageError},
    models::Professor,
    repository::professor::ProfessorRepository,
};

/// List professors ordered by id, one page at a time
pub async fn list_professors(
    pool: &PgPool,
    pagination: &PaginationParams,
) -> Result<PaginatedResponse<ProfessorResponse>> {
    let repo = ProfessorRepository::new(pool);

    let total = repo.count().await?;
    let window = pagination.window(total)?;
    let professors = repo.list_page(&window).await?;

    Ok(
        PaginatedResponse::new(professors, pagination.page, &window, total)
            .map(ProfessorResponse::from),
    )
}

/// Get professor by id
pub async fn get_professor(pool: &PgPool, id: i64) -> Result<Professor> {
    let repo = ProfessorRepository::new(pool);
    let professor = repo.find_by_id(id).await.inspect_err(|e| log_not_found(e, id))?;

    tracing::info!(id, "Requested Professor");
    Ok(professor)
}

/// Create a new professor
pub async fn create_professor(pool: &PgPool, request: &AddProfessorRequest) -> Result<Professor> {
    let repo = ProfessorRepository::new(pool);
    let professor = repo.create(request).await?;

    tracing::info!(id = professor.professor_id, "Created Professor");
    Ok(professor)
}

/// Replace a professor's details
pub async fn update_professor(
    pool: &PgPool,
    id: i64,
    request: &AddProfessorRequest,
) -> Result<Professor> {
    let repo = ProfessorRepository::new(pool);
    let professor = repo.update(id, request).await.inspect_err(|e| log_not_found(e, id))?;

    tracing::info!(id, "Updated Professor");
    Ok(professor)
}

/// Delete a professor together with its reviews
pub async fn delete_professor(pool: &PgPool, id: i64) -> Result<()> {
    let repo = ProfessorRepository::new(pool);
    repo.delete(id).await.inspect_err(|e| log_not_found(e, id))?;

    tracing::info!(id, "Deleted Professor");
    Ok(())
}

fn log_not_found(error: &StorageError, id: i64) {
    if matches!(error, StorageError::NotFound(_)) {
        tracing::warn!(id, "No Professor with id {} found in database", id);
    }
}
