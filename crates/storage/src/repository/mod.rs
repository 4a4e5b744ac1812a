pub mod course;
pub mod professor;
pub mod review;
pub mod user_auth;
