use thiserror::Error;

/// Failures the example programs illustrate on purpose.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    #[error("Division by zero is not allowed: {dividend} / 0")]
    DivideByZero { dividend: f64 },

    #[error("{type_name} does not implement '{capability}'")]
    NotImplemented {
        type_name: &'static str,
        capability: &'static str,
    },

    #[error("Unknown enemy type: '{0}'")]
    UnknownEnemyType(String),

    #[error("No service registered for {0}")]
    ServiceNotRegistered(&'static str),

    #[error("Nothing to undo")]
    NothingToUndo,
}

impl PatternError {
    pub fn not_implemented(type_name: &'static str, capability: &'static str) -> Self {
        Self::NotImplemented {
            type_name,
            capability,
        }
    }
}
