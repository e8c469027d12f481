use std::cell::RefCell;
use std::marker::PhantomData;

use crate::vector::VectorSpace;

use super::{OpStatistics, RgeOp};

/// Wraps a closure `f(x, t, y)` that writes `dx/dt` into `y`.
pub struct RgeClosure<V, F>
where
    V: VectorSpace,
    F: Fn(&V, V::T, &mut V),
{
    func: F,
    statistics: RefCell<OpStatistics>,
    _phantom: PhantomData<V>,
}

impl<V, F> RgeClosure<V, F>
where
    V: VectorSpace,
    F: Fn(&V, V::T, &mut V),
{
    pub fn new(func: F) -> Self {
        Self {
            func,
            statistics: RefCell::new(OpStatistics::default()),
            _phantom: PhantomData,
        }
    }
}

impl<V, F> RgeOp for RgeClosure<V, F>
where
    V: VectorSpace,
    F: Fn(&V, V::T, &mut V),
{
    type T = V::T;
    type V = V;
    fn call_inplace(&self, x: &V, t: V::T, y: &mut V) {
        self.statistics.borrow_mut().increment_call();
        (self.func)(x, t, y)
    }
    fn statistics(&self) -> OpStatistics {
        self.statistics.borrow().clone()
    }
}
