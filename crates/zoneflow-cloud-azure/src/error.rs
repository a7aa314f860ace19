//! Azure provider error types

use thiserror::Error;
use zoneflow_cloud::CloudError;

#[derive(Error, Debug)]
pub enum AzureError {
    #[error("Managed identity token request failed: {0}")]
    Identity(String),

    #[error("ARM request failed ({status} {code}): {message}")]
    Arm {
        status: u16,
        code: String,
        message: String,
    },

    #[error("Operation ended in state {0}")]
    OperationFailed(String),

    #[error("Response missing field: {0}")]
    MissingField(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cloud error: {0}")]
    Cloud(#[from] CloudError),
}

pub type Result<T> = std::result::Result<T, AzureError>;

impl From<AzureError> for CloudError {
    fn from(err: AzureError) -> Self {
        match err {
            AzureError::Identity(msg) => CloudError::AuthenticationFailed(msg),
            e @ AzureError::Arm {
                status: 401 | 403, ..
            } => CloudError::AuthenticationFailed(e.to_string()),
            AzureError::Arm {
                status: 404,
                code,
                message,
            } => CloudError::ResourceNotFound(format!("{}: {}", code, message)),
            e @ AzureError::Arm { .. } => CloudError::ApiError(e.to_string()),
            AzureError::OperationFailed(state) => CloudError::OperationFailed(state),
            AzureError::MissingField(field) => {
                CloudError::InvalidResponse(format!("response missing field: {}", field))
            }
            AzureError::Http(e) => CloudError::ApiError(e.to_string()),
            AzureError::Json(e) => CloudError::InvalidResponse(e.to_string()),
            AzureError::Cloud(e) => e,
        }
    }
}
