use nalgebra::{Matrix, SMatrix};

use crate::scalar::max_abs;
use crate::Scalar;

use super::{StateCheck, VectorSpace};

// Covers SVector<T, R> (C = 1) and the 3x3 Yukawa matrices.
impl<T: Scalar, const R: usize, const C: usize> VectorSpace for SMatrix<T, R, C> {
    type T = T;
    fn abs(&self) -> Self {
        self.map(num_traits::abs)
    }
    fn add_scalar(&self, scalar: T) -> Self {
        Matrix::add_scalar(self, scalar)
    }
    fn component_div(&self, other: &Self) -> Self {
        Matrix::component_div(self, other)
    }
    fn norm_inf(&self) -> T {
        max_abs(self.iter())
    }
    fn set_zero(&mut self) {
        self.fill(T::zero());
    }
}

impl<T: Scalar, const R: usize, const C: usize> StateCheck for SMatrix<T, R, C> {
    fn check(&self) -> bool {
        self.iter().all(|&x| x.is_finite_value())
    }
}
