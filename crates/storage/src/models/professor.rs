use sqlx::FromRow;

/// Stored `average_rating` of a professor nobody has reviewed yet.
pub const NO_RATING: f64 = -1.0;

#[derive(Debug, Clone, FromRow)]
pub struct Professor {
    pub professor_id: i64,
    pub full_name: String,
    pub mail: Option<String>,
    pub phone: Option<String>,
    pub office: Option<String>,
    pub e_office: Option<String>,
    /// Mean of all review ratings, or [`NO_RATING`].
    pub average_rating: f64,
    pub created_at: chrono::NaiveDateTime,
}
