use crate::Scalar;
use num_traits::One;
use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, MulAssign};

mod nalgebra_static;

pub trait VectorOpsByValue<Rhs = Self, Output = Self>: Add<Rhs, Output = Output> {}

impl<V, Rhs, Output> VectorOpsByValue<Rhs, Output> for V where V: Add<Rhs, Output = Output> {}

pub trait VectorMutOpsByValue<Rhs = Self>: AddAssign<Rhs> {}

impl<V, Rhs> VectorMutOpsByValue<Rhs> for V where V: AddAssign<Rhs> {}

/// Vector-space algebra used by the explicit steppers in [crate::ode_solver].
///
/// Implementing this trait declares that a type is closed under addition and
/// scalar multiplication, so a stepper can blend states and derivatives with
/// these operations alone, without decomposing the type into its entries.
/// It is implemented for [crate::ParameterState] and for the fixed-size
/// nalgebra matrices ([nalgebra::SMatrix], which includes [nalgebra::SVector])
/// that a parameter state is made of.
pub trait VectorSpace:
    VectorOpsByValue<Self>
    + for<'b> VectorOpsByValue<&'b Self>
    + VectorMutOpsByValue<Self>
    + for<'b> VectorMutOpsByValue<&'b Self>
    + Mul<Self::T, Output = Self>
    + MulAssign<Self::T>
    + Clone
    + Debug
{
    type T: Scalar;

    /// element-wise absolute value
    fn abs(&self) -> Self;

    /// adds `scalar` to every entry
    fn add_scalar(&self, scalar: Self::T) -> Self;

    /// element-wise (Hadamard) quotient
    fn component_div(&self, other: &Self) -> Self;

    /// largest absolute entry
    fn norm_inf(&self) -> Self::T;

    fn set_zero(&mut self);

    /// self += alpha * x
    fn axpy(&mut self, alpha: Self::T, x: &Self) {
        *self += x.clone() * alpha;
    }

    /// self = a1 * x1 + a2 * x2
    fn scale_sum(&mut self, a1: Self::T, x1: &Self, a2: Self::T, x2: &Self) {
        *self = x1.clone() * a1 + x2.clone() * a2;
    }
}

/// Validity gate queried by the drivers after every accepted step.
pub trait StateCheck {
    fn check(&self) -> bool;
}

/// Assert two states agree to within `tol` in the infinity norm.
pub fn assert_eq_st<V: VectorSpace>(left: &V, right: &V, tol: V::T) {
    let diff = left.clone() + right.clone() * (-<V::T as One>::one());
    let err = diff.norm_inf();
    if !err.is_finite_value() || err > tol {
        eprintln!("left: {:?}", left);
        eprintln!("right: {:?}", right);
        panic!("State mismatch: |left - right|_inf = {} > {}", err, tol);
    }
}
