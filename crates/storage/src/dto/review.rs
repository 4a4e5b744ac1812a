use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationErrors};

use crate::services::caller::CallerCredentials;

/// Review as listed per professor or per student
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ReviewResponse {
    pub id: i64,
    pub professor_id: i64,
    pub professor_full_name: String,
    pub course_id: i64,
    pub course_name: String,
    pub rating: i32,
    pub users_subject_score: f64,
    pub comments: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Request payload for submitting a review.
///
/// `apps_id` and `token` identify the caller; everything else describes the
/// review itself. Required fields are optional at the serde level so a
/// payload missing several of them reports all of them as validation errors.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct AddReviewRequest {
    #[validate(required(message = "AppsId is required"))]
    pub apps_id: Option<i64>,

    #[validate(
        required(message = "Token is required"),
        length(min = 1, max = 255, message = "Token must be between 1 and 255 characters")
    )]
    pub token: Option<String>,

    #[validate(required(message = "CourseId is required"))]
    pub course_id: Option<i64>,

    #[validate(required(message = "ProfessorId is required"))]
    pub professor_id: Option<i64>,

    #[validate(
        required(message = "Rating is required"),
        range(min = 1, max = 5, message = "Rating must be between 1 and 5")
    )]
    pub rating: Option<i32>,

    #[validate(
        required(message = "UsersSubjectScore is required"),
        range(min = 0.0, max = 10.0, message = "Subject score must be between 0 and 10")
    )]
    pub users_subject_score: Option<f64>,

    #[validate(length(max = 2000, message = "Comments must be at most 2000 characters"))]
    pub comments: Option<String>,
}

/// A review request that passed validation
#[derive(Debug, Clone)]
pub struct ReviewSubmission {
    pub credentials: CallerCredentials,
    pub course_id: i64,
    pub professor_id: i64,
    pub rating: i32,
    pub users_subject_score: f64,
    pub comments: Option<String>,
}

impl AddReviewRequest {
    /// Validate the payload and extract the submission it describes.
    pub fn submission(&self) -> Result<ReviewSubmission, ValidationErrors> {
        self.validate()?;

        match (
            self.apps_id,
            &self.token,
            self.course_id,
            self.professor_id,
            self.rating,
            self.users_subject_score,
        ) {
            (
                Some(apps_id),
                Some(token),
                Some(course_id),
                Some(professor_id),
                Some(rating),
                Some(users_subject_score),
            ) => Ok(ReviewSubmission {
                credentials: CallerCredentials {
                    apps_id,
                    token: token.clone(),
                },
                course_id,
                professor_id,
                rating,
                users_subject_score,
                comments: self.comments.clone(),
            }),
            // `required` already rejected every missing field.
            _ => Err(ValidationErrors::new()),
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProfessorReviewsFilter {
    pub prof_id: i64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct StudentReviewsFilter {
    pub apps_id: i64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ReviewIdQuery {
    pub review_id: i64,
}
