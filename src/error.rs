use thiserror::Error;

/// Errors raised by polynomial operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolynomialError {
    /// The divisor of a long division is the zero polynomial.
    #[error("cannot divide by the zero polynomial")]
    ZeroDivisor,

    /// The two operands of a binary operation use different variables.
    #[error("polynomials in '{left}' and '{right}' cannot be combined")]
    LiteralMismatch { left: char, right: char },
}
