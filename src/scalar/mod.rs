use std::fmt::Display;

use nalgebra::RealField;
use num_traits::Signed;

/// Real scalar type the parameter states and tableaux are built from.
pub trait Scalar:
    RealField + Copy + From<f64> + Into<f64> + Display + Signed + PartialOrd
{
    const EPSILON: Self;
    const INFINITY: Self;
    const NAN: Self;
    fn is_nan(self) -> bool;

    /// true if the value is neither NaN nor infinite
    fn is_finite_value(self) -> bool {
        !<Self as Scalar>::is_nan(self) && num_traits::abs(self) != Self::INFINITY
    }
}

impl Scalar for f64 {
    const EPSILON: Self = f64::EPSILON;
    const INFINITY: Self = f64::INFINITY;
    const NAN: Self = f64::NAN;
    fn is_nan(self) -> bool {
        self.is_nan()
    }
}

/// Largest absolute value (infinity norm) over an iterator of entries.
///
/// A NaN entry makes the result NaN, so an error norm built from it fails any `<=` test.
pub fn max_abs<'a, T: Scalar>(entries: impl IntoIterator<Item = &'a T>) -> T {
    entries.into_iter().fold(T::zero(), |acc, &x| {
        let ax = num_traits::abs(x);
        if <T as Scalar>::is_nan(acc) || <T as Scalar>::is_nan(ax) {
            T::NAN
        } else if ax > acc {
            ax
        } else {
            acc
        }
    })
}
