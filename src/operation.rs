use std::fmt::{self, Display};

use tracing::debug;

use crate::error::PolynomialError;
use crate::poly::{division::DivisionResult, polynomial::Polynomial};

/// A binary operation on two polynomials in the same variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// The outcome of an [Operation].
#[derive(Debug, Clone, PartialEq)]
pub enum OperationOutput {
    Polynomial(Polynomial),
    Division(DivisionResult),
}

impl Operation {
    /// The name of the result of the operation.
    pub fn result_name(&self) -> &'static str {
        match self {
            Operation::Add => "Sum",
            Operation::Subtract => "Difference",
            Operation::Multiply => "Product",
            Operation::Divide => "Quotient",
        }
    }

    /// Apply the operation to `lhs` and `rhs`. The operation is rejected
    /// if both polynomials have a literal and the literals differ.
    pub fn apply(
        &self,
        lhs: &Polynomial,
        rhs: &Polynomial,
    ) -> Result<OperationOutput, PolynomialError> {
        if let (Some(left), Some(right)) = (lhs.literal(), rhs.literal()) {
            if left != right {
                debug!("Cannot {} polynomials in {} and {}", self, left, right);
                return Err(PolynomialError::LiteralMismatch { left, right });
            }
        }

        Ok(match self {
            Operation::Add => OperationOutput::Polynomial(lhs.add(rhs)),
            Operation::Subtract => OperationOutput::Polynomial(lhs.subtract(rhs)),
            Operation::Multiply => OperationOutput::Polynomial(lhs.multiply(rhs)),
            Operation::Divide => OperationOutput::Division(lhs.divide(rhs)?),
        })
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        })
    }
}

impl Display for OperationOutput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OperationOutput::Polynomial(p) => p.fmt(f),
            OperationOutput::Division(d) => d.fmt(f),
        }
    }
}
