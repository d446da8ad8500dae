use crate::errors::DeskError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("Unknown widget '{key}'")]
    UnknownWidget { key: String },

    #[error("No open window with instance id '{instance}'")]
    InstanceNotFound { instance: String },
}

impl DeskError for HostError {
    fn error_code(&self) -> &'static str {
        match self {
            HostError::UnknownWidget { .. } => "HOST_UNKNOWN_WIDGET",
            HostError::InstanceNotFound { .. } => "HOST_INSTANCE_NOT_FOUND",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
