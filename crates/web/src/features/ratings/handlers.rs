use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::Database;

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    post,
    path = "/api/admin/ratings/recompute",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Professor ratings recomputed successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Recomputation failed")
    ),
    tag = "ratings"
)]
pub async fn recompute_all_ratings(State(db): State<Database>) -> WebResult<Response> {
    let count = services::recompute_all_ratings(db.pool()).await?;

    Ok(Json(serde_json::json!({
        "recomputed_count": count,
        "message": format!("Successfully recomputed ratings for {} professors", count)
    }))
    .into_response())
}
