//! Soil analysis module.
//!
//! Validates soil samples, resolves crop requirements and computes fertilizer,
//! pH, salinity and suitability recommendations, exposed as HTTP endpoints.

pub mod advisory;
pub mod classify;
pub mod engine;
pub mod fertilizer;
pub mod models;
pub mod report;
mod routes;
pub mod scoring;
pub mod validator;

pub use models::AnalysisRequest;
pub use report::AnalysisReport;
pub use routes::router;
pub use fertilizer::DosingError;
pub use validator::ValidationError;

use crate::reference::RequirementTable;

/// Why a request produced no report.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Dosing(#[from] DosingError),
}

/// Validate a raw request and analyse it. Nothing is computed if validation fails.
pub fn analyze(
    request: &AnalysisRequest,
    table: &RequirementTable,
) -> Result<AnalysisReport, AnalysisError> {
    let input = validator::validate(request)?;
    Ok(engine::analyze(&input, table)?)
}
