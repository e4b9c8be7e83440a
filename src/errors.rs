use thiserror::Error;

/// Domain errors: mathematically undefined operation outcomes.
///
/// The `Display` text is the user-facing message, verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Cannot divide by zero")]
    DivideByZero,

    #[error("{0}")]
    InvalidInput(String),
}

pub type CalcResult<T> = Result<T, CalcError>;
