use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::ops::{Mul, Neg};

use crate::printer::TermPrinter;

use super::Degree;

/// A single monomial `coefficient * literal^degree`.
///
/// Equality compares all three fields, while [Term::cmp_degree] only looks
/// at the degree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    coefficient: f64,
    literal: char,
    degree: Degree,
}

impl Default for Term {
    /// The term `0 x^0`.
    fn default() -> Self {
        Term::new(0., 'x', 0)
    }
}

impl Term {
    #[inline]
    pub const fn new(coefficient: f64, literal: char, degree: Degree) -> Term {
        Term {
            coefficient,
            literal,
            degree,
        }
    }

    #[inline]
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    #[inline]
    pub fn literal(&self) -> char {
        self.literal
    }

    #[inline]
    pub fn degree(&self) -> Degree {
        self.degree
    }

    #[inline]
    pub fn set_coefficient(&mut self, coefficient: f64) {
        self.coefficient = coefficient;
    }

    #[inline]
    pub fn set_literal(&mut self, literal: char) {
        self.literal = literal;
    }

    #[inline]
    pub fn set_degree(&mut self, degree: Degree) {
        self.degree = degree;
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficient == 0.
    }

    /// Compare by decreasing degree: a term of higher degree is [Ordering::Less],
    /// so that it sorts first.
    #[inline]
    pub fn cmp_degree(&self, other: &Term) -> Ordering {
        other.degree.cmp(&self.degree)
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        TermPrinter::new(self).fmt(f)
    }
}

impl Mul for Term {
    type Output = Term;

    /// Multiply two terms. The product takes the literal of `other`.
    ///
    /// Degrees add with wrap-around at the bounds of [Degree].
    fn mul(self, other: Term) -> Self::Output {
        Term::new(
            self.coefficient * other.coefficient,
            other.literal,
            self.degree.wrapping_add(other.degree),
        )
    }
}

impl Neg for Term {
    type Output = Term;

    #[inline]
    fn neg(mut self) -> Self::Output {
        self.coefficient = -self.coefficient;
        self
    }
}
