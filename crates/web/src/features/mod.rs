pub mod courses;
pub mod professors;
pub mod ratings;
pub mod reviews;
