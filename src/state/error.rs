use super::types::WindowHandle;

/// Warning shown whenever there is no usable target window.
pub const SELECT_WINDOW_MESSAGE: &str = "Select a window (or it may have closed).";

/// Failure reported by a [`WindowBackend`](super::WindowBackend) call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The handle no longer refers to a live window.
    #[error("window {0} no longer exists")]
    HandleInvalid(WindowHandle),
    /// Any other OS refusal (access denied, elevated target, ...).
    #[error("{operation} failed with error code {code}")]
    Os { operation: &'static str, code: u32 },
}

/// Recoverable failure of a controller operation.
///
/// None of these are fatal: the caller surfaces a warning and stays
/// interactive.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControlError {
    /// Nothing was selected.
    #[error("no window selected")]
    NoSelection,
    /// The selection no longer matches the last enumeration.
    #[error("window \"{0}\" not found")]
    NotFound(String),
    /// The window closed between enumeration and the OS call.
    #[error("window {0} is no longer available")]
    WindowUnavailable(WindowHandle),
    #[error("{operation} failed with error code {code}")]
    Os { operation: &'static str, code: u32 },
}

impl ControlError {
    /// Text for the warning notification shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::NoSelection | Self::NotFound(_) | Self::WindowUnavailable(_) => {
                SELECT_WINDOW_MESSAGE.to_string()
            }
            Self::Os { operation, code } => {
                format!("Could not update the window ({operation}, error {code}).")
            }
        }
    }
}

impl From<BackendError> for ControlError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::HandleInvalid(handle) => Self::WindowUnavailable(handle),
            BackendError::Os { operation, code } => Self::Os { operation, code },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_errors_share_the_select_window_warning() {
        assert_eq!(ControlError::NoSelection.user_message(), SELECT_WINDOW_MESSAGE);
        assert_eq!(
            ControlError::NotFound("Calc".into()).user_message(),
            SELECT_WINDOW_MESSAGE
        );
        assert_eq!(
            ControlError::WindowUnavailable(WindowHandle(0x10)).user_message(),
            SELECT_WINDOW_MESSAGE
        );
    }

    #[test]
    fn os_error_names_the_operation() {
        // Arrange
        let err = ControlError::from(BackendError::Os {
            operation: "SetWindowPos",
            code: 5,
        });

        // Act
        let message = err.user_message();

        // Assert
        assert!(message.contains("SetWindowPos"));
        assert!(message.contains('5'));
    }

    #[test]
    fn invalid_handle_maps_to_window_unavailable() {
        let err = ControlError::from(BackendError::HandleInvalid(WindowHandle(0x20)));

        assert_eq!(err, ControlError::WindowUnavailable(WindowHandle(0x20)));
    }
}
