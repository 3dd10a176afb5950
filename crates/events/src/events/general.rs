use serde::{Deserialize, Serialize};

/// Operation lifecycle notifications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeneralEvent {
    /// Generic operation started notification
    OperationStarted { operation: String },

    /// Generic operation completion with success status
    OperationCompleted { operation: String, success: bool },

    /// Generic operation failure with error details
    OperationFailed { operation: String, error: String },
}
