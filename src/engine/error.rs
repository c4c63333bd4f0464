use crate::types::variable::Variable;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("Malformed source data for {variable}: {reason}")]
    MalformedSource { variable: Variable, reason: String },

    #[error("Insufficient {variable} data: found {found} valid readings, need at least {required}")]
    InsufficientData {
        variable: Variable,
        found: usize,
        required: usize,
    },
}
