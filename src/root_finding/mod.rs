// common helpers
pub mod algorithms;
pub mod errors;
pub mod report;
pub(crate) mod config;
pub(crate) mod signs;
pub(crate) mod tolerances;

// algorithms
pub mod bisection;
pub mod false_position;
pub mod fixed_point;
pub mod newton;
pub mod secant;
