//! Front-end error type.

use crate::prompt::PromptError;
use seocrm_core::{ExportError, ServiceError, StoreError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CliResult<T> = Result<T, CliError>;

/// Any failure that ends the interactive session.
#[derive(Debug)]
pub enum CliError {
    Prompt(PromptError),
    Service(ServiceError),
    Store(StoreError),
    Export(ExportError),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prompt(err) => write!(f, "{err}"),
            Self::Service(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Export(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Prompt(err) => Some(err),
            Self::Service(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Export(err) => Some(err),
        }
    }
}

impl From<PromptError> for CliError {
    fn from(value: PromptError) -> Self {
        Self::Prompt(value)
    }
}

impl From<ServiceError> for CliError {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}

impl From<StoreError> for CliError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<ExportError> for CliError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}

/// Short machine-readable code for log lines.
pub fn error_code(err: &CliError) -> &'static str {
    match err {
        CliError::Prompt(_) => "prompt_failed",
        CliError::Service(_) => "service_failed",
        CliError::Store(_) => "store_failed",
        CliError::Export(_) => "export_failed",
    }
}
