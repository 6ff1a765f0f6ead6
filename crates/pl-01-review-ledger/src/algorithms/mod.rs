//! Review aggregation and publication algorithms.

pub mod aggregation;
pub mod approval;
pub mod publication;

pub use aggregation::{submit_review, validate_review, ReviewSubmission};
pub use approval::{approval_rate, meets_publication_threshold};
