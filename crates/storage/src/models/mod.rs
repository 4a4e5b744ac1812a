mod course;
mod professor;
mod review;
mod user_auth;

pub use course::{Course, CourseType};
pub use professor::{NO_RATING, Professor};
pub use review::{NewReview, Review, ReviewRating};
pub use user_auth::UserAuth;
