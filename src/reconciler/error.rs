//! Error types for the response reconciler.

use thiserror::Error;

/// Reasons a single endpoint could not be (fully) reconciled.
///
/// None of these abort a deployment pass; they surface as diagnostics.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReconcileError {
    /// No resource was filed under the derived identifier.
    #[error("could not find CloudFormation object {identifier}")]
    ResourceNotFound { identifier: String },

    /// The resource exists but lacks the method/integration structure.
    #[error("CloudFormation object {identifier} is malformed: {reason}")]
    MalformedResource {
        identifier: String,
        reason: &'static str,
    },

    /// A response key that is not an HTTP status code. Other keys still apply.
    #[error("response key \"{key}\" is not a status code")]
    MalformedStatusCode { key: String },
}
