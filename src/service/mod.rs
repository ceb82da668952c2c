//! Service layer: run orchestration and report output.

mod gadd_service;
mod reporter;

pub use gadd_service::GaddService;
pub use reporter::Reporter;
