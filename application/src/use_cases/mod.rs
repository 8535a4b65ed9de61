//! Use cases orchestrating the validation flow

pub mod run_validator;
pub mod validate_batch;
pub mod validate_content;
