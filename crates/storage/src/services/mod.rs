pub mod caller;
pub mod rating_aggregation;
pub mod review_lifecycle;
pub mod review_listing;
