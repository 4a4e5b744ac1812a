use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "course_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CourseType {
    Compulsory,
    Elective,
    Laboratory,
}

#[derive(Debug, Clone, FromRow)]
pub struct Course {
    pub course_id: i64,
    pub name: String,
    pub course_type: CourseType,
    pub created_at: chrono::NaiveDateTime,
}
