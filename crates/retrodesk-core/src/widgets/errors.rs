use crate::errors::DeskError;

/// Validation failures for widget input.
///
/// The `Display` text is exactly what a panel shows to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    #[error("Please enter a number between {min} and {max}")]
    OutOfRange { min: i64, max: i64 },

    #[error("Please enter a positive odd integer between 1 and 1,000,000")]
    InvalidCollatzSeed,

    #[error("Please enter two integers between 1 and 1,000,000,000")]
    InvalidGcdOperands,

    #[error("Unknown widget '{key}'")]
    UnknownWidget { key: String },

    #[error("The {widget} panel does not support '{action}'")]
    UnsupportedAction {
        widget: &'static str,
        action: &'static str,
    },
}

impl DeskError for WidgetError {
    fn error_code(&self) -> &'static str {
        match self {
            WidgetError::OutOfRange { .. } => "WIDGET_INPUT_OUT_OF_RANGE",
            WidgetError::InvalidCollatzSeed => "WIDGET_INVALID_COLLATZ_SEED",
            WidgetError::InvalidGcdOperands => "WIDGET_INVALID_GCD_OPERANDS",
            WidgetError::UnknownWidget { .. } => "WIDGET_UNKNOWN",
            WidgetError::UnsupportedAction { .. } => "WIDGET_UNSUPPORTED_ACTION",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
