//! Service error types

use niche_core::NicheError;
use niche_harvest::HarvestError;
use thiserror::Error;

/// Errors that stop a pipeline before it issues any request
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid run configuration: {0}")]
    Config(#[from] NicheError),

    #[error("Failed to set up harvester: {0}")]
    Harvest(#[from] HarvestError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
