use serde::Serialize;

use crate::vector::VectorSpace;
use crate::Scalar;

pub mod closure;

/// The right-hand side of an RGE system: the rate of change of a state `x` with respect
/// to the flow parameter `t` (typically the log of the energy scale).
///
/// The physics lives entirely in the implementation, the drivers only see the
/// [VectorSpace] result.
pub trait RgeOp {
    type T: Scalar;
    type V: VectorSpace<T = Self::T>;

    /// Compute the operator `F(x, t)` at a given state and time, writing into `y`.
    fn call_inplace(&self, x: &Self::V, t: Self::T, y: &mut Self::V);

    /// Compute the operator `F(x, t)` at a given state and time.
    fn call(&self, x: &Self::V, t: Self::T) -> Self::V {
        let mut y = x.clone();
        self.call_inplace(x, t, &mut y);
        y
    }

    fn statistics(&self) -> OpStatistics {
        OpStatistics::default()
    }
}

impl<C: RgeOp> RgeOp for &C {
    type T = C::T;
    type V = C::V;
    fn call_inplace(&self, x: &Self::V, t: Self::T, y: &mut Self::V) {
        C::call_inplace(*self, x, t, y)
    }
    fn statistics(&self) -> OpStatistics {
        C::statistics(*self)
    }
}

#[derive(Default, Clone, Debug, Serialize)]
pub struct OpStatistics {
    pub number_of_calls: usize,
}

impl OpStatistics {
    pub fn increment_call(&mut self) {
        self.number_of_calls += 1;
    }
}
