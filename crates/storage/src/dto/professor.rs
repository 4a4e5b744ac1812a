use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::Professor;

/// Professor as exposed by the API, including the current average rating
/// (`-1` when nobody has reviewed the professor yet).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ProfessorResponse {
    pub id: i64,
    pub full_name: String,
    pub mail: Option<String>,
    pub phone: Option<String>,
    pub office: Option<String>,
    pub e_office: Option<String>,
    pub average_rating: f64,
}

/// Request payload for creating or replacing a professor
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct AddProfessorRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Full name must be between 1 and 255 characters"
    ))]
    pub full_name: String,

    #[validate(email(message = "Mail must be a valid email address"))]
    #[validate(length(max = 255))]
    pub mail: Option<String>,

    #[validate(length(max = 50))]
    pub phone: Option<String>,

    #[validate(length(max = 255))]
    pub office: Option<String>,

    #[validate(url)]
    #[validate(length(max = 500))]
    pub e_office: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProfessorIdQuery {
    pub id: i64,
}

impl From<Professor> for ProfessorResponse {
    fn from(professor: Professor) -> Self {
        Self {
            id: professor.professor_id,
            full_name: professor.full_name,
            mail: professor.mail,
            phone: professor.phone,
            office: professor.office,
            e_office: professor.e_office,
            average_rating: professor.average_rating,
        }
    }
}
