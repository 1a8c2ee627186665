use std::fmt::{self, Display};

use tracing::{debug, instrument};

use crate::error::PolynomialError;
use crate::printer::PolynomialPrinter;

use super::polynomial::Polynomial;
use super::term::Term;

/// The single term `0 x^0` that stands in for a zero quotient or remainder.
static ZERO_SENTINEL: [Term; 1] = [Term::new(0., 'x', 0)];

/// The quotient or remainder of a long division.
#[derive(Debug, Clone, PartialEq)]
pub enum DivisionPart {
    /// Represented and printed as the single term `0 x^0`.
    Zero,
    NonZero(Polynomial),
}

impl DivisionPart {
    pub fn from_polynomial(poly: Polynomial) -> DivisionPart {
        if poly.is_zero() {
            DivisionPart::Zero
        } else {
            DivisionPart::NonZero(poly)
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        matches!(self, DivisionPart::Zero)
    }

    /// The terms of the part. The zero part yields the sentinel term `0 x^0`.
    pub fn terms(&self) -> &[Term] {
        match self {
            DivisionPart::Zero => &ZERO_SENTINEL,
            DivisionPart::NonZero(p) => p.terms(),
        }
    }

    /// Convert to a polynomial, mapping the zero part to the empty polynomial.
    pub fn to_polynomial(&self) -> Polynomial {
        match self {
            DivisionPart::Zero => Polynomial::new(),
            DivisionPart::NonZero(p) => p.clone(),
        }
    }

    pub fn into_polynomial(self) -> Polynomial {
        match self {
            DivisionPart::Zero => Polynomial::new(),
            DivisionPart::NonZero(p) => p,
        }
    }

    /// Evaluate the part at `value`.
    pub fn evaluate(&self, value: f64) -> f64 {
        match self {
            DivisionPart::Zero => 0.,
            DivisionPart::NonZero(p) => p.evaluate(value),
        }
    }
}

impl From<Polynomial> for DivisionPart {
    fn from(poly: Polynomial) -> Self {
        DivisionPart::from_polynomial(poly)
    }
}

impl Display for DivisionPart {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        PolynomialPrinter::from_terms(self.terms()).fmt(f)
    }
}

/// The quotient and remainder of a long division.
#[derive(Debug, Clone, PartialEq)]
pub struct DivisionResult {
    quotient: DivisionPart,
    remainder: DivisionPart,
}

impl DivisionResult {
    #[inline]
    pub fn quotient(&self) -> &DivisionPart {
        &self.quotient
    }

    #[inline]
    pub fn remainder(&self) -> &DivisionPart {
        &self.remainder
    }

    pub fn into_parts(self) -> (DivisionPart, DivisionPart) {
        (self.quotient, self.remainder)
    }
}

impl Display for DivisionResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Quotient: {} Remainder: {}", self.quotient, self.remainder)
    }
}

impl Polynomial {
    /// Divide `self` by `divisor` using long division. The remainder is zero or
    /// has a degree lower than the degree of `divisor`.
    ///
    /// Every step cancels the leading term of the remainder exactly, so that
    /// floating-point residue cannot stall the division. Rounding errors in the
    /// lower-degree coefficients are not corrected.
    ///
    /// Degrees wrap around at the bounds of [Degree](super::Degree), like in
    /// [Polynomial::multiply]. The degrees of the remainder are never affected,
    /// only the degree of a quotient term whose true value exceeds the bounds.
    #[instrument(level = "trace", skip_all, fields(dividend = %self, divisor = %divisor))]
    pub fn divide(&self, divisor: &Polynomial) -> Result<DivisionResult, PolynomialError> {
        let div_term = *divisor
            .leading_term()
            .ok_or(PolynomialError::ZeroDivisor)?;

        let mut quotient = Polynomial::new();
        let mut remainder = self.clone();

        while let Some(num_term) = remainder.leading_term().copied() {
            if num_term.degree() < div_term.degree() {
                break;
            }

            let q_term = Term::new(
                num_term.coefficient() / div_term.coefficient(),
                num_term.literal(),
                num_term.degree().wrapping_sub(div_term.degree()),
            );
            quotient.add_term(q_term);

            let subtrahend = Polynomial::from_iter([q_term]).multiply(divisor);
            remainder = remainder.subtract(&subtrahend);
            if let Some(residue) = remainder.remove_degree(num_term.degree()) {
                debug!(
                    "Dropped residue {} at degree {}",
                    residue.coefficient(),
                    residue.degree()
                );
            }

            debug!("q_term={}, remainder={}", q_term, remainder);
        }

        Ok(DivisionResult {
            quotient: quotient.into(),
            remainder: remainder.into(),
        })
    }
}

#[cfg(test)]
mod test {
    use crate::error::PolynomialError;
    use crate::poly::polynomial::Polynomial;
    use crate::poly::term::Term;

    use super::DivisionPart;

    fn poly(terms: &[(f64, i32)]) -> Polynomial {
        terms.iter().map(|(c, d)| Term::new(*c, 'x', *d)).collect()
    }

    #[test]
    fn exact_division() {
        let p = poly(&[(1., 2), (-1., 0)]);
        let d = poly(&[(1., 1), (-1., 0)]);

        let r = p.divide(&d).unwrap();
        assert_eq!(r.quotient(), &DivisionPart::NonZero(poly(&[(1., 1), (1., 0)])));
        assert!(r.remainder().is_zero());
        assert_eq!(r.remainder().terms(), &[Term::new(0., 'x', 0)]);
    }

    #[test]
    fn division_with_remainder() {
        // (2x^3 - 3x^2 + 4x + 5) / (x^2 + 1) = 2x - 3, remainder 2x + 8
        let p = poly(&[(2., 3), (-3., 2), (4., 1), (5., 0)]);
        let d = poly(&[(1., 2), (1., 0)]);

        let (q, r) = p.divide(&d).unwrap().into_parts();
        assert_eq!(q.into_polynomial(), poly(&[(2., 1), (-3., 0)]));
        assert_eq!(r.into_polynomial(), poly(&[(2., 1), (8., 0)]));
    }

    #[test]
    fn lower_degree_dividend() {
        let p = poly(&[(3., 1), (1., 0)]);
        let d = poly(&[(1., 2)]);

        let r = p.divide(&d).unwrap();
        assert!(r.quotient().is_zero());
        assert_eq!(r.quotient().terms(), &[Term::default()]);
        assert_eq!(r.remainder(), &DivisionPart::NonZero(p));
    }

    #[test]
    fn zero_dividend() {
        let r = Polynomial::new().divide(&poly(&[(2., 1)])).unwrap();
        assert!(r.quotient().is_zero());
        assert!(r.remainder().is_zero());
    }

    #[test]
    fn constant_divisor() {
        let p = poly(&[(3., 2), (6., 0)]);
        let r = p.divide(&poly(&[(3., 0)])).unwrap();
        assert_eq!(r.quotient().to_polynomial(), poly(&[(1., 2), (2., 0)]));
        assert!(r.remainder().is_zero());
    }

    #[test]
    fn zero_divisor() {
        let p = poly(&[(1., 1)]);
        assert_eq!(p.divide(&Polynomial::new()), Err(PolynomialError::ZeroDivisor));
    }

    #[test]
    fn inexact_coefficients_terminate() {
        // 1/3 and 1/7 are not exactly representable, so the leading term
        // would otherwise leave residue
        let p = poly(&[(1., 5), (0.1, 3), (-2., 0)]);
        let d = poly(&[(3., 2), (1. / 7., 1), (0.3, 0)]);

        let r = p.divide(&d).unwrap();
        assert_eq!(r.quotient().terms()[0].degree(), 3);
        let rem = r.remainder().to_polynomial();
        assert!(rem.degree().map_or(true, |deg| deg < 2));
        rem.check_consistency();

        for x in [-2., -0.5, 0., 1., 3.] {
            let lhs = p.evaluate(x);
            let rhs = d.evaluate(x) * r.quotient().evaluate(x) + r.remainder().evaluate(x);
            assert!((lhs - rhs).abs() < 1e-9 * lhs.abs().max(1.));
        }
    }

    #[test]
    fn extreme_degrees() {
        let p = poly(&[(1., i32::MAX)]);

        let r = p.divide(&poly(&[(1., -1)])).unwrap();
        assert_eq!(r.quotient().terms(), &[Term::new(1., 'x', i32::MIN)]);
        assert!(r.remainder().is_zero());

        let r = p.divide(&poly(&[(2., i32::MAX - 1), (4., 0)])).unwrap();
        assert_eq!(r.quotient().terms(), &[Term::new(0.5, 'x', 1)]);
        assert_eq!(r.remainder().terms(), &[Term::new(-2., 'x', 1)]);

        let r = poly(&[(3., i32::MIN + 1), (1., i32::MIN)])
            .divide(&poly(&[(1., i32::MIN)]))
            .unwrap();
        assert_eq!(r.quotient().to_polynomial(), poly(&[(3., 1), (1., 0)]));
        assert!(r.remainder().is_zero());
    }

    #[test]
    fn display() {
        let p = poly(&[(1., 2), (-1., 0)]);
        let d = poly(&[(1., 1), (-1., 0)]);
        assert_eq!(
            p.divide(&d).unwrap().to_string(),
            "Quotient:  x +1 Remainder:  0"
        );
    }
}
