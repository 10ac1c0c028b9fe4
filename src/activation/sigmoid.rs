use std::f64::consts::E;

use crate::math::matrix::Matrix;

/// The logistic activation, the only one this network uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sigmoid;

impl Sigmoid {
    /// `1 / (1 + e^-x)`
    ///
    /// In `f64` this rounds to exactly `1.0` for `x` above about 37 and to
    /// `0.0` below about -745; it is never NaN for finite `x`.
    pub fn function(x: f64) -> f64 {
        1.0 / (1.0 + E.powf(-x))
    }

    /// `σ(x) · (1 - σ(x))`, evaluated at the pre-activation `x`.
    pub fn derivative(x: f64) -> f64 {
        let fx = Sigmoid::function(x);
        fx * (1.0 - fx)
    }

    pub fn apply(m: &Matrix) -> Matrix {
        m.map(Sigmoid::function)
    }

    pub fn apply_derivative(m: &Matrix) -> Matrix {
        m.map(Sigmoid::derivative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_values() {
        assert!((Sigmoid::function(0.0) - 0.5).abs() < 1e-12);
        assert!(Sigmoid::function(6.0) > 0.99);
        assert!(Sigmoid::function(-6.0) < 0.01);
        assert!((Sigmoid::function(2.0) + Sigmoid::function(-2.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_saturates_without_nan() {
        assert_eq!(Sigmoid::function(1000.0), 1.0);
        assert_eq!(Sigmoid::function(-1000.0), 0.0);
        assert!(Sigmoid::function(30.0) < 1.0);
        assert!(Sigmoid::function(-30.0) > 0.0);
        assert_eq!(Sigmoid::derivative(-1000.0), 0.0);
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let h = 1e-6;
        for &x in &[-3.0, -0.5, 0.0, 0.7, 4.0] {
            let numeric = (Sigmoid::function(x + h) - Sigmoid::function(x - h)) / (2.0 * h);
            assert!((Sigmoid::derivative(x) - numeric).abs() < 1e-8);
        }
        assert!((Sigmoid::derivative(0.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_apply_is_elementwise() {
        let m = Matrix::from_rows(vec![vec![0.0, 1.0], vec![-1.0, 2.0]]).unwrap();
        let a = Sigmoid::apply(&m);
        assert_eq!(a.shape(), (2, 2));
        assert!((a.get(1, 0) - Sigmoid::function(-1.0)).abs() < 1e-15);
    }
}
