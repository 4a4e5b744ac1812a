use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Course, CourseType};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CourseResponse {
    pub id: i64,
    pub name: String,
    #[serde(rename = "Type")]
    pub course_type: CourseType,
}

/// Request payload for creating a new course
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCourseRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[serde(rename = "Type")]
    pub course_type: CourseType,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.course_id,
            name: course.name,
            course_type: course.course_type,
        }
    }
}
