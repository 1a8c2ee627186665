use std::fmt::{self, Write};

use crate::poly::{polynomial::Polynomial, term::Term, Degree};

/// Options that control how terms and polynomials are rendered.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// Print magnitudes with a fixed number of decimals instead of
    /// the shortest representation.
    pub precision: Option<usize>,
    /// Print degrees as superscripts, i.e. `x²` instead of `x^2`.
    pub num_exp_as_superscript: bool,
}

impl PrintOptions {
    fn fmt_number(&self, n: f64, f: &mut fmt::Formatter) -> fmt::Result {
        match self.precision {
            Some(p) => write!(f, "{:.*}", p, n),
            None => write!(f, "{}", n),
        }
    }

    fn fmt_exponent(&self, degree: Degree, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.num_exp_as_superscript {
            return write!(f, "^{}", degree);
        }

        for c in degree.to_string().chars() {
            f.write_char(match c {
                '-' => '⁻',
                '0' => '⁰',
                '1' => '¹',
                '2' => '²',
                '3' => '³',
                '4' => '⁴',
                '5' => '⁵',
                '6' => '⁶',
                '7' => '⁷',
                '8' => '⁸',
                '9' => '⁹',
                _ => c,
            })?;
        }
        Ok(())
    }
}

/// Renders a single term on its own, without sign handling.
pub struct TermPrinter<'a> {
    pub term: &'a Term,
    pub opts: PrintOptions,
}

impl<'a> TermPrinter<'a> {
    pub fn new(term: &'a Term) -> TermPrinter<'a> {
        TermPrinter {
            term,
            opts: PrintOptions::default(),
        }
    }

    pub fn new_with_options(term: &'a Term, opts: PrintOptions) -> TermPrinter<'a> {
        TermPrinter { term, opts }
    }
}

impl<'a> fmt::Display for TermPrinter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = self.term.coefficient();
        if c == 0. {
            return Ok(());
        }

        if c != 1. {
            self.opts.fmt_number(c, f)?;
        } else if self.term.degree() == 1 {
            return f.write_char(self.term.literal());
        }

        f.write_char(self.term.literal())?;
        self.opts.fmt_exponent(self.term.degree(), f)
    }
}

/// Renders a sequence of terms as a signed sum, in the given order.
///
/// All terms are printed with the literal of the first term. No terms
/// print as a single space.
pub struct PolynomialPrinter<'a> {
    pub terms: &'a [Term],
    pub opts: PrintOptions,
}

impl<'a> PolynomialPrinter<'a> {
    pub fn new(poly: &'a Polynomial) -> PolynomialPrinter<'a> {
        Self::from_terms(poly.terms())
    }

    pub fn new_with_options(poly: &'a Polynomial, opts: PrintOptions) -> PolynomialPrinter<'a> {
        PolynomialPrinter {
            terms: poly.terms(),
            opts,
        }
    }

    pub fn from_terms(terms: &'a [Term]) -> PolynomialPrinter<'a> {
        PolynomialPrinter {
            terms,
            opts: PrintOptions::default(),
        }
    }
}

impl<'a> fmt::Display for PolynomialPrinter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Some(first) = self.terms.first() else {
            return f.write_char(' ');
        };
        let literal = first.literal();

        for (i, t) in self.terms.iter().enumerate() {
            let c = t.coefficient();
            if c < 0. {
                f.write_str(" -")?;
            } else if i == 0 {
                f.write_char(' ')?;
            } else {
                f.write_str(" +")?;
            }

            if c.abs() != 1. || t.degree() == 0 {
                self.opts.fmt_number(c.abs(), f)?;
            }

            match t.degree() {
                0 => {}
                1 => f.write_char(literal)?,
                d => {
                    f.write_char(literal)?;
                    self.opts.fmt_exponent(d, f)?;
                }
            }
        }

        Ok(())
    }
}
