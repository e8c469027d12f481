use nalgebra::{Matrix3, SMatrix, SVector};
use serde::{Deserialize, Serialize};

use crate::scalar::{max_abs, Scalar};
use crate::vector::{StateCheck, VectorSpace};

mod ops;

pub use ops::abs;

/// Gauge couplings, one entry per gauge group factor.
pub type GaugeVector<T, const N: usize> = SVector<T, N>;

/// Scalar (Higgs) self-couplings.
pub type SelfCouplingVector<T, const M: usize> = SVector<T, M>;

/// Yukawa couplings, indexed by fermion generation.
pub type YukawaMatrix<T> = Matrix3<T>;

/// Loop order used when none is given.
pub const DEFAULT_NLOOPS: i32 = 2;

/// Every sub-object must stay strictly below this infinity norm for a state to pass
/// [ParameterState::check]. Growth past it is taken as the flow running into a Landau pole.
pub const LANDAU_POLE_BOUND: f64 = 3.5;

/// The point in parameter space that an RGE flow advances: `N` gauge couplings, `M`
/// self-couplings, the up, down and charged-lepton Yukawa matrices and the loop order
/// the derivatives are computed at.
///
/// A `ParameterState` is a plain value. All storage is fixed size, so copies never
/// share data and nothing is heap allocated. Arithmetic acts member-wise on the five
/// numeric sub-objects and keeps the loop order of the (left, non-scalar) operand, so a
/// stepper can treat the whole aggregate as one element of a vector space, see
/// [VectorSpace].
///
/// # Example
///
/// ```
/// use rgeflow::{GaugeVector, ParameterState, YukawaMatrix};
///
/// let g = GaugeVector::<f64, 3>::new(0.46, 0.65, 1.2);
/// let yu = YukawaMatrix::from_diagonal_element(0.9);
/// let state: ParameterState<f64, 3, 1> =
///     ParameterState::without_self_couplings(g, yu, YukawaMatrix::zeros(), YukawaMatrix::zeros());
/// assert!(state.check());
///
/// let blown_up = state * 4.0;
/// assert!(!blown_up.check());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterState<T: Scalar, const N: usize, const M: usize> {
    pub g: GaugeVector<T, N>,
    pub la: SelfCouplingVector<T, M>,
    pub yu: YukawaMatrix<T>,
    pub yd: YukawaMatrix<T>,
    pub ye: YukawaMatrix<T>,
    nloops: i32,
}

impl<T: Scalar, const N: usize, const M: usize> Default for ParameterState<T, N, M> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar, const N: usize, const M: usize> ParameterState<T, N, M> {
    /// All couplings zero, loop order [DEFAULT_NLOOPS].
    pub fn zeros() -> Self {
        Self::with_nloops(
            GaugeVector::zeros(),
            SelfCouplingVector::zeros(),
            YukawaMatrix::zeros(),
            YukawaMatrix::zeros(),
            YukawaMatrix::zeros(),
            DEFAULT_NLOOPS,
        )
    }

    /// Explicit couplings, loop order [DEFAULT_NLOOPS].
    pub fn new(
        g: GaugeVector<T, N>,
        la: SelfCouplingVector<T, M>,
        yu: YukawaMatrix<T>,
        yd: YukawaMatrix<T>,
        ye: YukawaMatrix<T>,
    ) -> Self {
        Self::with_nloops(g, la, yu, yd, ye, DEFAULT_NLOOPS)
    }

    pub fn with_nloops(
        g: GaugeVector<T, N>,
        la: SelfCouplingVector<T, M>,
        yu: YukawaMatrix<T>,
        yd: YukawaMatrix<T>,
        ye: YukawaMatrix<T>,
        nloops: i32,
    ) -> Self {
        Self {
            g,
            la,
            yu,
            yd,
            ye,
            nloops,
        }
    }

    /// Gauge and Yukawa couplings only, the self-couplings start at zero.
    pub fn without_self_couplings(
        g: GaugeVector<T, N>,
        yu: YukawaMatrix<T>,
        yd: YukawaMatrix<T>,
        ye: YukawaMatrix<T>,
    ) -> Self {
        Self::without_self_couplings_with_nloops(g, yu, yd, ye, DEFAULT_NLOOPS)
    }

    pub fn without_self_couplings_with_nloops(
        g: GaugeVector<T, N>,
        yu: YukawaMatrix<T>,
        yd: YukawaMatrix<T>,
        ye: YukawaMatrix<T>,
        nloops: i32,
    ) -> Self {
        Self::with_nloops(g, SelfCouplingVector::zeros(), yu, yd, ye, nloops)
    }

    /// Sets every coupling to zero. The loop order is left alone.
    pub fn set_zero(&mut self) {
        self.g.fill(T::zero());
        self.la.fill(T::zero());
        self.yu.fill(T::zero());
        self.yd.fill(T::zero());
        self.ye.fill(T::zero());
    }

    pub fn nloops(&self) -> i32 {
        self.nloops
    }

    /// Not validated here, a non-positive loop order only shows up in [Self::check].
    pub fn set_nloops(&mut self, nloops: i32) {
        self.nloops = nloops;
    }

    /// Element-wise absolute value of every coupling.
    pub fn abs(&self) -> Self {
        Self::with_nloops(
            self.g.abs(),
            self.la.abs(),
            self.yu.abs(),
            self.yd.abs(),
            self.ye.abs(),
            self.nloops,
        )
    }

    /// Landau pole and NaN check.
    ///
    /// Returns `true` only if every entry of `g`, `la`, `yu`, `yd` and `ye` is finite,
    /// the largest absolute entry of each of them is below [LANDAU_POLE_BOUND], and the
    /// loop order is positive. Drivers call this after each step and stop the flow as
    /// soon as it fails.
    pub fn check(&self) -> bool {
        let bound = T::from(LANDAU_POLE_BOUND);
        perturbative(&self.g, bound)
            && perturbative(&self.la, bound)
            && perturbative(&self.yu, bound)
            && perturbative(&self.yd, bound)
            && perturbative(&self.ye, bound)
            && self.nloops > 0
    }
}

fn perturbative<T: Scalar, const R: usize, const C: usize>(
    m: &SMatrix<T, R, C>,
    bound: T,
) -> bool {
    StateCheck::check(m) && VectorSpace::norm_inf(m) < bound
}

impl<T: Scalar, const N: usize, const M: usize> VectorSpace for ParameterState<T, N, M> {
    type T = T;
    fn abs(&self) -> Self {
        ParameterState::abs(self)
    }
    fn add_scalar(&self, scalar: T) -> Self {
        *self + scalar
    }
    fn component_div(&self, other: &Self) -> Self {
        *self / *other
    }
    fn norm_inf(&self) -> T {
        max_abs(&[
            VectorSpace::norm_inf(&self.g),
            VectorSpace::norm_inf(&self.la),
            VectorSpace::norm_inf(&self.yu),
            VectorSpace::norm_inf(&self.yd),
            VectorSpace::norm_inf(&self.ye),
        ])
    }
    fn set_zero(&mut self) {
        ParameterState::set_zero(self);
    }
}

impl<T: Scalar, const N: usize, const M: usize> StateCheck for ParameterState<T, N, M> {
    fn check(&self) -> bool {
        ParameterState::check(self)
    }
}
