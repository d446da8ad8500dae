use crate::errors::DeskError;
use crate::host::HostError;
use crate::shell::ShellControl;
use crate::widgets::WidgetError;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Window '{window}' not found")]
    WindowNotFound { window: String },

    #[error("Window '{window}' has no {control:?} control")]
    ControlDisabled {
        window: String,
        control: ShellControl,
    },

    #[error("Window '{window}' could not be registered with the window manager")]
    RegistrationSkipped { window: String },

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Widget(#[from] WidgetError),
}

impl DeskError for DispatchError {
    fn error_code(&self) -> &'static str {
        match self {
            DispatchError::WindowNotFound { .. } => "WINDOW_NOT_FOUND",
            DispatchError::ControlDisabled { .. } => "WINDOW_CONTROL_DISABLED",
            DispatchError::RegistrationSkipped { .. } => "WINDOW_REGISTRATION_SKIPPED",
            DispatchError::Host(e) => e.error_code(),
            DispatchError::Widget(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            DispatchError::WindowNotFound { .. } | DispatchError::ControlDisabled { .. } => true,
            DispatchError::RegistrationSkipped { .. } => false,
            DispatchError::Host(e) => e.is_user_error(),
            DispatchError::Widget(e) => e.is_user_error(),
        }
    }
}
