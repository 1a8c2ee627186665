use std::fmt::{self, Display};
use std::ops::{Add, Mul, Neg, Sub};

use smallvec::SmallVec;

use crate::printer::PolynomialPrinter;

use super::term::Term;
use super::{Degree, INLINED_TERMS};

/// A polynomial in a single variable with floating-point coefficients.
///
/// The terms are always sorted by strictly decreasing degree, every degree
/// occurs at most once and no term has a zero coefficient. The only way
/// to add terms is [Polynomial::add_term], which maintains these invariants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polynomial {
    terms: SmallVec<[Term; INLINED_TERMS]>,
}

impl Polynomial {
    /// Constructs the zero polynomial.
    #[inline]
    pub fn new() -> Polynomial {
        Polynomial {
            terms: SmallVec::new(),
        }
    }

    /// Constructs a polynomial from dense coefficients, ordered from
    /// degree `coefficients.len() - 1` down to degree 0.
    pub fn from_coefficients(literal: char, coefficients: &[f64]) -> Polynomial {
        let mut p = Polynomial::new();
        for (degree, c) in (0..coefficients.len()).rev().zip(coefficients) {
            let degree = Degree::try_from(degree)
                .unwrap_or_else(|_| panic!("Too many coefficients: {}", coefficients.len()));
            p.add_term(Term::new(*c, literal, degree));
        }
        p
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms in the polynomial.
    #[inline]
    pub fn nterms(&self) -> usize {
        self.terms.len()
    }

    /// The terms, sorted by decreasing degree.
    #[inline]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    /// The term with the highest degree.
    #[inline]
    pub fn leading_term(&self) -> Option<&Term> {
        self.terms.first()
    }

    /// The literal of the leading term. A polynomial is expected to use a
    /// single literal for all its terms.
    #[inline]
    pub fn literal(&self) -> Option<char> {
        self.leading_term().map(Term::literal)
    }

    #[inline]
    pub fn degree(&self) -> Option<Degree> {
        self.leading_term().map(Term::degree)
    }

    /// The leading coefficient.
    #[inline]
    pub fn lcoeff(&self) -> Option<f64> {
        self.leading_term().map(Term::coefficient)
    }

    /// Add a term to the polynomial. A term with the same degree as an
    /// existing term is merged into it, keeping the literal of the existing term,
    /// and the merged term is removed if its coefficient becomes zero.
    /// Terms with a zero coefficient are ignored.
    pub fn add_term(&mut self, term: Term) {
        if term.is_zero() {
            return;
        }

        match self.terms.binary_search_by(|t| t.cmp_degree(&term)) {
            Ok(i) => {
                let c = self.terms[i].coefficient() + term.coefficient();
                if c == 0. {
                    self.terms.remove(i);
                } else {
                    self.terms[i].set_coefficient(c);
                }
            }
            Err(i) => self.terms.insert(i, term),
        }
    }

    /// Remove the term of degree `degree`, if present.
    pub(crate) fn remove_degree(&mut self, degree: Degree) -> Option<Term> {
        let i = self
            .terms
            .binary_search_by(|t| degree.cmp(&t.degree()))
            .ok()?;
        Some(self.terms.remove(i))
    }

    /// Evaluate the polynomial at `value`. A term of degree 0 contributes
    /// its coefficient, also when `value` is zero.
    pub fn evaluate(&self, value: f64) -> f64 {
        self.terms
            .iter()
            .map(|t| t.coefficient() * value.powf(f64::from(t.degree())))
            .sum()
    }

    /// Compute `self + other`.
    pub fn add(&self, other: &Polynomial) -> Polynomial {
        let mut res = self.clone();
        for t in other {
            res.add_term(*t);
        }
        res
    }

    /// Compute `self - other`.
    pub fn subtract(&self, other: &Polynomial) -> Polynomial {
        let mut res = self.clone();
        for t in other {
            res.add_term(-*t);
        }
        res
    }

    /// Multiply every term of `self` with every term of `other`. The product
    /// terms take the literal of `other`.
    pub fn multiply(&self, other: &Polynomial) -> Polynomial {
        let mut res = Polynomial::new();
        for a in self {
            for b in other {
                res.add_term(*a * *b);
            }
        }
        res
    }

    /// Check if the polynomial is sorted and has only non-zero coefficients.
    pub fn check_consistency(&self) {
        for t in &self.terms {
            if t.is_zero() {
                panic!("Inconsistent polynomial (0 coefficient): {:?}", self);
            }
        }

        for w in self.terms.windows(2) {
            if w[0].degree() == w[1].degree() {
                panic!("Inconsistent polynomial (equal degrees): {:?}", self);
            }
            if w[0].degree() < w[1].degree() {
                panic!("Inconsistent polynomial (wrong term ordering): {:?}", self);
            }
        }
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        PolynomialPrinter::new(self).fmt(f)
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl Extend<Term> for Polynomial {
    fn extend<T: IntoIterator<Item = Term>>(&mut self, iter: T) {
        for t in iter {
            self.add_term(t);
        }
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<T: IntoIterator<Item = Term>>(iter: T) -> Self {
        let mut p = Polynomial::new();
        p.extend(iter);
        p
    }
}

impl<'a, 'b> Add<&'a Polynomial> for &'b Polynomial {
    type Output = Polynomial;

    #[inline]
    fn add(self, other: &'a Polynomial) -> Self::Output {
        Polynomial::add(self, other)
    }
}

impl<'a, 'b> Sub<&'a Polynomial> for &'b Polynomial {
    type Output = Polynomial;

    #[inline]
    fn sub(self, other: &'a Polynomial) -> Self::Output {
        self.subtract(other)
    }
}

impl<'a, 'b> Mul<&'a Polynomial> for &'b Polynomial {
    type Output = Polynomial;

    #[inline]
    fn mul(self, other: &'a Polynomial) -> Self::Output {
        self.multiply(other)
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(mut self) -> Self::Output {
        // negation keeps the degrees, so the order is unaffected
        for t in &mut self.terms {
            *t = -*t;
        }
        self
    }
}
