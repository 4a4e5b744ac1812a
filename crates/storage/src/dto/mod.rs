pub mod common;
pub mod course;
pub mod professor;
pub mod review;
