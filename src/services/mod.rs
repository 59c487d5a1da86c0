pub mod duplicate_gate;
pub mod errors;
mod review_service;
pub mod validation;

pub use errors::ReviewError;
pub use review_service::ReviewService;
