use rand::Rng;

use crate::error::{NetworkError, Result};

/// Dense row-major matrix of `f64`.
///
/// The shape is fixed at construction. Every binary operation checks the
/// shapes of both operands and returns `NetworkError::DimensionMismatch`
/// instead of panicking, so shape bugs surface at the call site.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Fills a `(rows, cols)` matrix with samples uniform over [-1, 1),
    /// consuming `rng` in row-major order.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>() * 2.0 - 1.0;
            }
        }

        res
    }

    /// Builds a matrix from rows. Fails on an empty row set or ragged rows.
    pub fn from_rows(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = match data.first() {
            Some(row) => row.len(),
            None => return Err(NetworkError::mismatch("matrix rows", 1, 0)),
        };
        if let Some(bad) = data.iter().find(|row| row.len() != cols) {
            return Err(NetworkError::mismatch("matrix row width", cols, bad.len()));
        }

        Ok(Matrix {
            rows: data.len(),
            cols,
            data,
        })
    }

    /// A single-row matrix.
    pub fn row_vector(values: Vec<f64>) -> Matrix {
        Matrix {
            rows: 1,
            cols: values.len(),
            data: vec![values],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i]
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i][j]
    }

    pub fn data(&self) -> &[Vec<f64>] {
        &self.data
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.data
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    /// Matrix product `self · rhs`.
    pub fn dot(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(NetworkError::mismatch("matrix product", self.cols, rhs.rows));
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        Ok(res)
    }

    /// Adds a `1 x cols` row to every row of `self`.
    pub fn add_row(&self, row: &Matrix) -> Result<Matrix> {
        if row.rows != 1 {
            return Err(NetworkError::mismatch("broadcast row count", 1, row.rows));
        }
        if row.cols != self.cols {
            return Err(NetworkError::mismatch("broadcast row width", self.cols, row.cols));
        }

        let bias = &row.data[0];
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .map(|r| r.iter().zip(bias).map(|(x, b)| x + b).collect())
                .collect(),
        })
    }

    pub fn sub(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with(rhs, "elementwise subtraction", |a, b| a - b)
    }

    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn hadamard(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with(rhs, "hadamard product", |a, b| a * b)
    }

    /// In-place `self += factor * rhs`.
    pub fn add_scaled(&mut self, rhs: &Matrix, factor: f64) -> Result<()> {
        self.check_same_shape(rhs, "scaled update")?;

        for (row, rhs_row) in self.data.iter_mut().zip(&rhs.data) {
            for (x, d) in row.iter_mut().zip(rhs_row) {
                *x += factor * d;
            }
        }

        Ok(())
    }

    /// Mean of each column, as a `1 x cols` row.
    pub fn column_means(&self) -> Matrix {
        let mut means = vec![0.0; self.cols];
        if self.rows == 0 {
            return Matrix::row_vector(means);
        }

        for row in &self.data {
            for (m, x) in means.iter_mut().zip(row) {
                *m += x;
            }
        }
        let n = self.rows as f64;
        for m in &mut means {
            *m /= n;
        }

        Matrix::row_vector(means)
    }

    pub fn is_finite(&self) -> bool {
        self.data.iter().flatten().all(|x| x.is_finite())
    }

    fn check_same_shape(&self, rhs: &Matrix, context: &'static str) -> Result<()> {
        if self.rows != rhs.rows {
            return Err(NetworkError::mismatch(context, self.rows, rhs.rows));
        }
        if self.cols != rhs.cols {
            return Err(NetworkError::mismatch(context, self.cols, rhs.cols));
        }
        Ok(())
    }

    fn zip_with<F>(&self, rhs: &Matrix, context: &'static str, op: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.check_same_shape(rhs, context)?;

        let data = self
            .data
            .iter()
            .zip(&rhs.data)
            .map(|(row_a, row_b)| row_a.iter().zip(row_b).map(|(&a, &b)| op(a, b)).collect())
            .collect();

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn m(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_from_rows_rejects_ragged_and_empty() {
        assert_eq!(
            Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]),
            Err(NetworkError::DimensionMismatch {
                context: "matrix row width",
                expected: 2,
                actual: 1,
            })
        );
        assert!(Matrix::from_rows(vec![]).is_err());
    }

    #[test]
    fn test_dot() {
        let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let b = m(vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]]);
        let c = a.dot(&b).unwrap();
        assert_eq!(c, m(vec![vec![4.0, 5.0], vec![10.0, 11.0]]));
        assert!(b.dot(&b).is_err());
    }

    #[test]
    fn test_transpose() {
        let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.get(2, 1), 6.0);
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn test_add_row_broadcasts() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let bias = Matrix::row_vector(vec![10.0, 20.0]);
        assert_eq!(
            a.add_row(&bias).unwrap(),
            m(vec![vec![11.0, 22.0], vec![13.0, 24.0]])
        );
        assert!(a.add_row(&Matrix::row_vector(vec![1.0])).is_err());
        assert!(a.add_row(&a).is_err());
    }

    #[test]
    fn test_elementwise_ops_check_shape() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = m(vec![vec![2.0, 2.0], vec![0.5, 1.0]]);
        assert_eq!(a.hadamard(&b).unwrap(), m(vec![vec![2.0, 4.0], vec![1.5, 4.0]]));
        assert_eq!(a.sub(&b).unwrap(), m(vec![vec![-1.0, 0.0], vec![2.5, 3.0]]));
        assert!(a.sub(&Matrix::zeros(2, 3)).is_err());
        assert!(a.hadamard(&Matrix::zeros(1, 2)).is_err());
    }

    #[test]
    fn test_add_scaled_in_place() {
        let mut a = m(vec![vec![1.0, 1.0]]);
        a.add_scaled(&m(vec![vec![2.0, -4.0]]), 0.5).unwrap();
        assert_eq!(a, m(vec![vec![2.0, -1.0]]));
        assert!(a.add_scaled(&Matrix::zeros(2, 2), 1.0).is_err());
    }

    #[test]
    fn test_column_means() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 6.0]]);
        assert_eq!(a.column_means(), Matrix::row_vector(vec![2.0, 4.0]));
    }

    #[test]
    fn test_random_range_and_reproducibility() {
        let a = Matrix::random(8, 8, &mut StdRng::seed_from_u64(7));
        let b = Matrix::random(8, 8, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(a.data().iter().flatten().all(|&x| (-1.0..1.0).contains(&x)));
    }
}
