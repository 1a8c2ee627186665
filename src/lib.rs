//! Polyarith is a small library for arithmetic on polynomials in one variable.
//!
//! Polynomials are sums of terms `c * x^d` with floating-point coefficients and
//! integer degrees. They are kept normalized at all times: terms are sorted by
//! decreasing degree, every degree occurs at most once and no term has a zero
//! coefficient.
//!
//! For example:
//!
//! ```
//! use polyarith::poly::{polynomial::Polynomial, term::Term};
//!
//! let p = Polynomial::from_coefficients('x', &[1., 0., -1.]);
//! let d: Polynomial = [Term::new(1., 'x', 1), Term::new(-1., 'x', 0)]
//!     .into_iter()
//!     .collect();
//!
//! let r = p.divide(&d).unwrap();
//! assert_eq!(r.to_string(), "Quotient:  x +1 Remainder:  0");
//! assert_eq!(p.evaluate(3.), 8.);
//! ```

pub mod error;
pub mod operation;
pub mod poly;
pub mod printer;
