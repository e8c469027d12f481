use std::ops::{Add, AddAssign, Div, Mul, MulAssign};

use crate::Scalar;

use super::ParameterState;

// Loop order always comes from the left state operand, or from the only state operand
// when the other one is a scalar.

impl<T: Scalar, const N: usize, const M: usize> AddAssign<&ParameterState<T, N, M>>
    for ParameterState<T, N, M>
{
    fn add_assign(&mut self, rhs: &ParameterState<T, N, M>) {
        self.g += &rhs.g;
        self.la += &rhs.la;
        self.yu += &rhs.yu;
        self.yd += &rhs.yd;
        self.ye += &rhs.ye;
    }
}

impl<T: Scalar, const N: usize, const M: usize> AddAssign<ParameterState<T, N, M>>
    for ParameterState<T, N, M>
{
    fn add_assign(&mut self, rhs: ParameterState<T, N, M>) {
        *self += &rhs;
    }
}

impl<T: Scalar, const N: usize, const M: usize> MulAssign<T> for ParameterState<T, N, M> {
    fn mul_assign(&mut self, rhs: T) {
        self.g *= rhs;
        self.la *= rhs;
        self.yu *= rhs;
        self.yd *= rhs;
        self.ye *= rhs;
    }
}

impl<T: Scalar, const N: usize, const M: usize> Add<&ParameterState<T, N, M>>
    for &ParameterState<T, N, M>
{
    type Output = ParameterState<T, N, M>;
    fn add(self, rhs: &ParameterState<T, N, M>) -> Self::Output {
        ParameterState::with_nloops(
            self.g + rhs.g,
            self.la + rhs.la,
            self.yu + rhs.yu,
            self.yd + rhs.yd,
            self.ye + rhs.ye,
            self.nloops,
        )
    }
}

impl<T: Scalar, const N: usize, const M: usize> Add<&ParameterState<T, N, M>>
    for ParameterState<T, N, M>
{
    type Output = ParameterState<T, N, M>;
    fn add(self, rhs: &ParameterState<T, N, M>) -> Self::Output {
        &self + rhs
    }
}

impl<T: Scalar, const N: usize, const M: usize> Add<ParameterState<T, N, M>>
    for &ParameterState<T, N, M>
{
    type Output = ParameterState<T, N, M>;
    fn add(self, rhs: ParameterState<T, N, M>) -> Self::Output {
        self + &rhs
    }
}

impl<T: Scalar, const N: usize, const M: usize> Add<ParameterState<T, N, M>>
    for ParameterState<T, N, M>
{
    type Output = ParameterState<T, N, M>;
    fn add(self, rhs: ParameterState<T, N, M>) -> Self::Output {
        &self + &rhs
    }
}

impl<T: Scalar, const N: usize, const M: usize> Mul<T> for ParameterState<T, N, M> {
    type Output = ParameterState<T, N, M>;
    fn mul(mut self, rhs: T) -> Self::Output {
        self *= rhs;
        self
    }
}

impl<T: Scalar, const N: usize, const M: usize> Mul<T> for &ParameterState<T, N, M> {
    type Output = ParameterState<T, N, M>;
    fn mul(self, rhs: T) -> Self::Output {
        *self * rhs
    }
}

/// Adds the scalar to every entry of every sub-object, off-diagonal Yukawa entries
/// included.
impl<T: Scalar, const N: usize, const M: usize> Add<T> for ParameterState<T, N, M> {
    type Output = ParameterState<T, N, M>;
    fn add(self, rhs: T) -> Self::Output {
        ParameterState::with_nloops(
            self.g.add_scalar(rhs),
            self.la.add_scalar(rhs),
            self.yu.add_scalar(rhs),
            self.yd.add_scalar(rhs),
            self.ye.add_scalar(rhs),
            self.nloops,
        )
    }
}

/// Hadamard quotient of each sub-object. Zero divisors give inf or NaN entries, which
/// [ParameterState::check] then rejects.
impl<T: Scalar, const N: usize, const M: usize> Div<ParameterState<T, N, M>>
    for ParameterState<T, N, M>
{
    type Output = ParameterState<T, N, M>;
    fn div(self, rhs: ParameterState<T, N, M>) -> Self::Output {
        ParameterState::with_nloops(
            self.g.component_div(&rhs.g),
            self.la.component_div(&rhs.la),
            self.yu.component_div(&rhs.yu),
            self.yd.component_div(&rhs.yd),
            self.ye.component_div(&rhs.ye),
            self.nloops,
        )
    }
}

// Scalars on the left need a concrete type, a blanket impl over `T` would be an orphan.
macro_rules! impl_scalar_lhs {
    ($scalar:ty) => {
        impl<const N: usize, const M: usize> Mul<ParameterState<$scalar, N, M>> for $scalar {
            type Output = ParameterState<$scalar, N, M>;
            fn mul(self, rhs: ParameterState<$scalar, N, M>) -> Self::Output {
                rhs * self
            }
        }

        impl<const N: usize, const M: usize> Add<ParameterState<$scalar, N, M>> for $scalar {
            type Output = ParameterState<$scalar, N, M>;
            fn add(self, rhs: ParameterState<$scalar, N, M>) -> Self::Output {
                rhs + self
            }
        }
    };
}

impl_scalar_lhs!(f64);

/// Element-wise absolute value, keeping the loop order.
pub fn abs<T: Scalar, const N: usize, const M: usize>(
    x: &ParameterState<T, N, M>,
) -> ParameterState<T, N, M> {
    x.abs()
}
