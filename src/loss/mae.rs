use crate::math::matrix::Matrix;

pub struct MaeLoss;

impl MaeLoss {
    /// Scalar MAE: mean(|predicted - expected|)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| (p - y).abs())
            .sum::<f64>() / n
    }

    /// Mean absolute value over every entry of a residual matrix.
    pub fn of_residuals(residuals: &Matrix) -> f64 {
        let n = (residuals.rows() * residuals.cols()) as f64;
        residuals.data().iter().flatten().map(|e| e.abs()).sum::<f64>() / n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loss() {
        assert!((MaeLoss::loss(&[0.5, 1.0], &[0.0, 0.0]) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_of_residuals() {
        let e = Matrix::from_rows(vec![vec![-1.0], vec![0.5], vec![0.0], vec![2.5]]).unwrap();
        assert!((MaeLoss::of_residuals(&e) - 1.0).abs() < 1e-12);
    }
}
