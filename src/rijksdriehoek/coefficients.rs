// Copyright (c) 2024 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! This module contains the coefficients of the RD / WGS 84 approximation
//! formulas and a function to evaluate them.
//!
//! The coefficients are those published by F.H. Schreutelkamp and
//! G.L. Strang van Hees in
//! *Benaderingsformules voor de transformatie tussen RD- en WGS84-kaartcoördinaten*.
//!
//! Each series is a sparse list of [`Term`]s: only the nonzero coefficients
//! are stored, in the order in which they are summed.

/// A single term of a bivariate polynomial: `coefficient * u^p * v^q`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Term {
    /// The power of the first variable.
    pub p: u8,
    /// The power of the second variable.
    pub q: u8,
    /// The coefficient of the term.
    pub coefficient: f64,
}

impl Term {
    /// Constructor.
    /// * `p` - the power of the first variable.
    /// * `q` - the power of the second variable.
    /// * `coefficient` - the coefficient.
    #[must_use]
    pub const fn new(p: u8, q: u8, coefficient: f64) -> Self {
        Self { p, q, coefficient }
    }

    /// Evaluate the term at `(u, v)`.
    ///
    /// Note: `0^0` is 1, so a term with `p == 0` or `q == 0` does not depend
    /// on that variable.
    #[must_use]
    pub fn evaluate(&self, u: f64, v: f64) -> f64 {
        self.coefficient * libm::pow(u, f64::from(self.p)) * libm::pow(v, f64::from(self.q))
    }
}

/// The latitude series of the forward transform, in arc seconds.
/// `p` is the power of `dX`, `q` the power of `dY`.
pub const SUM_N: [Term; 11] = [
    Term::new(0, 1, 3_235.653_89),
    Term::new(2, 0, -32.582_97),
    Term::new(0, 2, -0.247_5),
    Term::new(2, 1, -0.849_78),
    Term::new(0, 3, -0.065_5),
    Term::new(2, 2, -0.017_09),
    Term::new(1, 0, -0.007_38),
    Term::new(4, 0, 0.005_3),
    Term::new(2, 3, -0.000_39),
    Term::new(4, 1, 0.000_33),
    Term::new(1, 1, -0.000_12),
];

/// The longitude series of the forward transform, in arc seconds.
/// `p` is the power of `dX`, `q` the power of `dY`.
pub const SUM_E: [Term; 12] = [
    Term::new(1, 0, 5_260.529_16),
    Term::new(1, 1, 105.946_84),
    Term::new(1, 2, 2.456_56),
    Term::new(3, 0, -0.818_85),
    Term::new(1, 3, 0.055_94),
    Term::new(3, 1, -0.056_07),
    Term::new(0, 1, 0.011_99),
    Term::new(3, 2, -0.002_56),
    Term::new(1, 4, 0.001_28),
    Term::new(0, 2, 0.000_22),
    Term::new(2, 0, -0.000_22),
    Term::new(5, 0, 0.000_26),
];

/// The `R` coefficients of the inverse transform, giving the x offset in metres.
/// `p` is the power of `dLat`, `q` the power of `dLon`, in `(p, q)` order.
pub const R: [Term; 9] = [
    Term::new(0, 1, 190_094.945),
    Term::new(0, 2, -0.008),
    Term::new(0, 3, -32.391),
    Term::new(1, 0, -0.705),
    Term::new(1, 1, -11_832.228),
    Term::new(1, 3, -0.608),
    Term::new(2, 1, -114.221),
    Term::new(2, 3, 0.148),
    Term::new(3, 1, -2.340),
];

/// The `S` coefficients of the inverse transform, giving the y offset in metres.
/// `p` is the power of `dLat`, `q` the power of `dLon`, in `(p, q)` order.
pub const S: [Term; 10] = [
    Term::new(0, 1, 0.433),
    Term::new(0, 2, 3_638.893),
    Term::new(0, 4, 0.092),
    Term::new(1, 0, 309_056.544),
    Term::new(1, 1, -0.032),
    Term::new(1, 2, -157.984),
    Term::new(1, 4, -0.054),
    Term::new(2, 0, 73.077),
    Term::new(2, 2, -6.439),
    Term::new(3, 0, 59.788),
];

/// Evaluate a series of terms at `(u, v)`, summing in table order.
/// * `terms` - the terms of the series.
/// * `u` - the first variable.
/// * `v` - the second variable.
/// # Examples
/// ```
/// use rd_wgs84::rijksdriehoek::coefficients::{evaluate_series, SUM_N, SUM_E};
///
/// // Every term vanishes at the reference point
/// assert_eq!(0.0, evaluate_series(&SUM_N, 0.0, 0.0));
/// assert_eq!(0.0, evaluate_series(&SUM_E, 0.0, 0.0));
/// ```
#[must_use]
pub fn evaluate_series(terms: &[Term], u: f64, v: f64) -> f64 {
    terms
        .iter()
        .fold(0.0, |sum, term| sum + term.evaluate(u, v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    /// Whether the `(p, q)` powers of a table are strictly increasing.
    fn is_row_major(terms: &[Term]) -> bool {
        terms.windows(2).all(|w| (w[0].p, w[0].q) < (w[1].p, w[1].q))
    }

    #[test]
    fn test_term_evaluate() {
        let term = Term::new(2, 1, -0.849_78);
        assert_eq!(-0.849_78 * 9.0 * 5.0, term.evaluate(3.0, 5.0));

        // 0^0 == 1
        let constant = Term::new(0, 0, 2.5);
        assert_eq!(2.5, constant.evaluate(0.0, 0.0));

        let linear = Term::new(0, 1, 3_235.653_89);
        assert_eq!(3_235.653_89, linear.evaluate(0.0, 1.0));
        assert_eq!(0.0, linear.evaluate(1.0, 0.0));
    }

    #[test]
    fn test_table_sizes_and_powers() {
        assert_eq!(11, SUM_N.len());
        assert_eq!(12, SUM_E.len());

        // The inverse tables are sparse forms of 4 x 5 matrices
        for term in R.iter().chain(S.iter()) {
            assert!(term.p < 4);
            assert!(term.q < 5);
            assert_ne!(0.0, term.coefficient);
        }
        assert!(is_row_major(&R));
        assert!(is_row_major(&S));
    }

    #[test]
    fn test_forward_dominant_terms() {
        // At dX = 0 only the pure dY terms of SUM_N remain
        let expected_n = 3_235.653_89 + -0.247_5 + -0.065_5;
        assert!(is_within_tolerance(
            expected_n,
            evaluate_series(&SUM_N, 0.0, 1.0),
            1e-12
        ));

        // At dY = 0 only the pure dX terms of SUM_E remain
        let expected_e = 5_260.529_16 + -0.818_85 + -0.000_22 + 0.000_26;
        assert!(is_within_tolerance(
            expected_e,
            evaluate_series(&SUM_E, 1.0, 0.0),
            1e-12
        ));

        // Near the origin the linear terms dominate
        let d = 1.0e-5;
        assert!(is_within_tolerance(
            3_235.653_89 * d,
            evaluate_series(&SUM_N, 0.0, d),
            1e-9
        ));
        assert!(is_within_tolerance(
            5_260.529_16 * d,
            evaluate_series(&SUM_E, d, 0.0),
            1e-9
        ));
    }

    #[test]
    fn test_inverse_dominant_terms() {
        let d = 1.0e-4;
        assert!(is_within_tolerance(
            190_094.945 * d,
            evaluate_series(&R, 0.0, d),
            1e-9
        ));
        assert!(is_within_tolerance(
            309_056.544 * d,
            evaluate_series(&S, d, 0.0),
            1e-6
        ));
    }

    #[test]
    fn test_evaluate_series_empty() {
        assert_eq!(0.0, evaluate_series(&[], 1.0, 1.0));
    }
}
