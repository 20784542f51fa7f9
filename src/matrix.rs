//! Dense row-major matrix used for weights, biases and activations.
//!
//! Methods taking `&mut self` mutate the receiver in place and return it for
//! chaining. Associated functions taking `&Matrix` (`dot`, `subtract`,
//! `transpose`, `mapped`) allocate a fresh result and leave their inputs alone.
use crate::error::{NnError, Result};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use std::ops::{Index, IndexMut};

/// A `rows × cols` grid of `f64` values stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Create a zero-filled matrix.
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(
            rows > 0 && cols > 0,
            "Matrix dimensions must be positive, got {}x{}",
            rows,
            cols
        );
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Column vector (`len × 1`) holding `values` top to bottom.
    ///
    /// Panics if `values` is empty.
    pub fn from_array(values: &[f64]) -> Self {
        let mut m = Self::new(values.len(), 1);
        m.data.copy_from_slice(values);
        m
    }

    /// Build from row-major data.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows == 0 || cols == 0 || data.len() != rows * cols {
            return Err(NnError::ShapeMismatch {
                op: "from_vec",
                left: (rows, cols),
                right: (data.len(), 1),
            });
        }
        Ok(Self { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Row-major view of the backing store.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Flatten in row-major reading order.
    pub fn to_array(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// Fill every element with an independent standard normal sample.
    pub fn randomize_gaussian<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        for v in self.data.iter_mut() {
            *v = StandardNormal.sample(rng);
        }
        self
    }

    /// Apply `f` to every element in place.
    pub fn map<F: Fn(f64) -> f64>(&mut self, f: F) -> &mut Self {
        for v in self.data.iter_mut() {
            *v = f(*v);
        }
        self
    }

    /// Return a new matrix with `f` applied to every element of `m`.
    pub fn mapped<F: Fn(f64) -> f64>(m: &Matrix, f: F) -> Matrix {
        Matrix {
            rows: m.rows,
            cols: m.cols,
            data: m.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Element-wise `self += other`.
    ///
    /// Panics on shape mismatch.
    pub fn add(&mut self, other: &Matrix) -> &mut Self {
        if let Err(e) = self.try_add(other) {
            panic!("{}", e);
        }
        self
    }

    pub fn try_add(&mut self, other: &Matrix) -> Result<&mut Self> {
        self.check_same_shape(other, "add")?;
        for (a, &b) in self.data.iter_mut().zip(&other.data) {
            *a += b;
        }
        Ok(self)
    }

    pub fn add_scalar(&mut self, s: f64) -> &mut Self {
        self.map(|v| v + s)
    }

    /// Element-wise (Hadamard) `self *= other`. Not the matrix product.
    ///
    /// Panics on shape mismatch.
    pub fn multiply(&mut self, other: &Matrix) -> &mut Self {
        if let Err(e) = self.try_multiply(other) {
            panic!("{}", e);
        }
        self
    }

    pub fn try_multiply(&mut self, other: &Matrix) -> Result<&mut Self> {
        self.check_same_shape(other, "multiply")?;
        for (a, &b) in self.data.iter_mut().zip(&other.data) {
            *a *= b;
        }
        Ok(self)
    }

    pub fn multiply_scalar(&mut self, s: f64) -> &mut Self {
        self.map(|v| v * s)
    }

    /// Matrix product `a · b`, shape `(a.rows, b.cols)`.
    ///
    /// Panics if `a.cols != b.rows`.
    pub fn dot(a: &Matrix, b: &Matrix) -> Matrix {
        Self::try_dot(a, b).unwrap_or_else(|e| panic!("{}", e))
    }

    pub fn try_dot(a: &Matrix, b: &Matrix) -> Result<Matrix> {
        if a.cols != b.rows {
            return Err(NnError::ShapeMismatch {
                op: "dot",
                left: a.shape(),
                right: b.shape(),
            });
        }
        let mut out = Matrix::new(a.rows, b.cols);
        for i in 0..a.rows {
            let a_row = &a.data[i * a.cols..(i + 1) * a.cols];
            for (k, &a_ik) in a_row.iter().enumerate() {
                let b_row = &b.data[k * b.cols..(k + 1) * b.cols];
                let out_row = &mut out.data[i * b.cols..(i + 1) * b.cols];
                for (o, &b_kj) in out_row.iter_mut().zip(b_row) {
                    *o += a_ik * b_kj;
                }
            }
        }
        Ok(out)
    }

    /// Element-wise `a - b`.
    ///
    /// Panics on shape mismatch.
    pub fn subtract(a: &Matrix, b: &Matrix) -> Matrix {
        Self::try_subtract(a, b).unwrap_or_else(|e| panic!("{}", e))
    }

    pub fn try_subtract(a: &Matrix, b: &Matrix) -> Result<Matrix> {
        a.check_same_shape(b, "subtract")?;
        Ok(Matrix {
            rows: a.rows,
            cols: a.cols,
            data: a.data.iter().zip(&b.data).map(|(&x, &y)| x - y).collect(),
        })
    }

    /// New matrix with rows and columns swapped.
    pub fn transpose(a: &Matrix) -> Matrix {
        let mut out = Matrix::new(a.cols, a.rows);
        for i in 0..a.rows {
            for j in 0..a.cols {
                out.data[j * a.rows + i] = a.data[i * a.cols + j];
            }
        }
        out
    }

    fn check_same_shape(&self, other: &Matrix, op: &'static str) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(NnError::ShapeMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "Index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(
            row < self.rows && col < self.cols,
            "Index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn m(rows: usize, cols: usize, data: &[f64]) -> Matrix {
        Matrix::from_vec(rows, cols, data.to_vec()).unwrap()
    }

    #[test]
    fn test_new_is_zeroed() {
        let z = Matrix::new(2, 3);
        assert_eq!(z.shape(), (2, 3));
        assert!(z.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    #[should_panic(expected = "Matrix dimensions must be positive")]
    fn test_zero_rows_rejected() {
        let _ = Matrix::new(0, 3);
    }

    #[test]
    fn test_from_array_is_column_vector() {
        let v = Matrix::from_array(&[1.0, 2.0, 3.0]);
        assert_eq!(v.shape(), (3, 1));
        assert_eq!(v[(2, 0)], 3.0);
        assert_eq!(v.to_array(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_from_vec_length_checked() {
        let err = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, NnError::ShapeMismatch { op: "from_vec", .. }));
    }

    #[test]
    fn test_dot() {
        // [[1,2],[3,4]] · [[2,0],[1,2]] = [[4,4],[10,8]]
        let a = m(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = m(2, 2, &[2.0, 0.0, 1.0, 2.0]);
        assert_eq!(Matrix::dot(&a, &b), m(2, 2, &[4.0, 4.0, 10.0, 8.0]));
    }

    #[test]
    fn test_dot_non_square() {
        let a = m(2, 3, &[1.0, 0.0, -1.0, 2.0, 1.0, 0.5]);
        let x = Matrix::from_array(&[1.0, 2.0, 3.0]);
        let y = Matrix::dot(&a, &x);
        assert_eq!(y.shape(), (2, 1));
        assert_eq!(y.to_array(), vec![-2.0, 5.5]);
    }

    #[test]
    #[should_panic(expected = "Shape mismatch in dot")]
    fn test_dot_shape_mismatch_panics() {
        let a = Matrix::new(2, 3);
        let b = Matrix::new(2, 3);
        let _ = Matrix::dot(&a, &b);
    }

    #[test]
    fn test_try_dot_reports_shapes() {
        let err = Matrix::try_dot(&Matrix::new(2, 3), &Matrix::new(4, 1)).unwrap_err();
        assert_eq!(
            err,
            NnError::ShapeMismatch {
                op: "dot",
                left: (2, 3),
                right: (4, 1),
            }
        );
    }

    #[test]
    fn test_in_place_ops_chain() {
        let mut a = m(1, 3, &[1.0, -2.0, 3.0]);
        let b = m(1, 3, &[2.0, 2.0, 2.0]);
        a.add(&b).multiply(&b).multiply_scalar(0.5).add_scalar(1.0);
        assert_eq!(a.to_array(), vec![4.0, 1.0, 6.0]);
    }

    #[test]
    #[should_panic(expected = "Shape mismatch in add")]
    fn test_add_shape_mismatch_panics() {
        let mut a = Matrix::new(2, 1);
        a.add(&Matrix::new(1, 2));
    }

    #[test]
    #[should_panic(expected = "Shape mismatch in multiply")]
    fn test_multiply_shape_mismatch_panics() {
        let mut a = Matrix::new(3, 1);
        a.multiply(&Matrix::new(2, 1));
    }

    #[test]
    #[should_panic(expected = "Shape mismatch in subtract")]
    fn test_subtract_shape_mismatch_panics() {
        let _ = Matrix::subtract(&Matrix::new(2, 1), &Matrix::new(1, 2));
    }

    #[test]
    fn test_try_subtract_reports_shapes() {
        assert_eq!(
            Matrix::try_subtract(&Matrix::new(2, 1), &Matrix::new(1, 2)),
            Err(NnError::ShapeMismatch {
                op: "subtract",
                left: (2, 1),
                right: (1, 2),
            })
        );
    }

    #[test]
    fn test_subtract_and_mapped_leave_inputs() {
        let a = m(2, 1, &[5.0, 1.0]);
        let b = m(2, 1, &[2.0, 3.0]);
        let d = Matrix::subtract(&a, &b);
        assert_eq!(d.to_array(), vec![3.0, -2.0]);
        let sq = Matrix::mapped(&a, |v| v * v);
        assert_eq!(sq.to_array(), vec![25.0, 1.0]);
        assert_eq!(a.to_array(), vec![5.0, 1.0]);
        assert_eq!(b.to_array(), vec![2.0, 3.0]);
    }

    #[test]
    fn test_transpose() {
        let a = m(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let t = Matrix::transpose(&a);
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.to_array(), vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(t[(2, 1)], a[(1, 2)]);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let a = Matrix::new(2, 2);
        assert_eq!(a.get(1, 1), Some(0.0));
        assert_eq!(a.get(2, 0), None);
    }

    #[test]
    fn test_randomize_gaussian_is_zero_centred() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut a = Matrix::new(100, 100);
        a.randomize_gaussian(&mut rng);
        let n = a.as_slice().len() as f64;
        let mean = a.as_slice().iter().sum::<f64>() / n;
        let var = a.as_slice().iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        assert!(mean.abs() < 0.05, "mean = {}", mean);
        assert!((var - 1.0).abs() < 0.1, "var = {}", var);
        assert!(a.as_slice().iter().any(|&v| v < 0.0));
        assert!(a.as_slice().iter().any(|&v| v.abs() > 1.0));
    }

    #[test]
    fn test_randomize_gaussian_seeded_is_reproducible() {
        let mut a = Matrix::new(3, 4);
        let mut b = Matrix::new(3, 4);
        a.randomize_gaussian(&mut StdRng::seed_from_u64(42));
        b.randomize_gaussian(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
