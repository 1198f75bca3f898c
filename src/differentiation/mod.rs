// common helpers
pub mod errors;

// estimators
pub mod central;
