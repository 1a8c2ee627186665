pub mod division;
pub mod polynomial;
pub mod representation;
pub mod term;

pub use self::division::{DivisionPart, DivisionResult};
pub use self::polynomial::Polynomial;
pub use self::term::Term;

/// The exponent of a term.
pub type Degree = i32;

/// The number of terms a polynomial stores without a heap allocation.
pub const INLINED_TERMS: usize = 8;
