use crate::{
    builder_error,
    error::{BuilderError, RgeError},
    op::closure::RgeClosure,
    RgeOp, RgeProblem, VectorSpace,
};

/// Builder for RGE problems. Use methods to set parameters and then call one of the build methods when done.
#[derive(Clone, Debug)]
pub struct RgeBuilder {
    t0: f64,
    h0: f64,
    h_min: f64,
    rtol: f64,
    atol: f64,
    max_steps: usize,
}

impl Default for RgeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for RGE problems. Use methods to set parameters and then call one of the build methods when done.
///
/// # Example
///
/// ```rust
/// use rgeflow::{ExplicitRk, RgeBuilder};
/// use nalgebra::Vector1;
///
/// // dg/dt = b g^3 / (16 pi^2)
/// let b = -7.0;
/// let problem = RgeBuilder::new()
///     .t0(0.0)
///     .h0(0.1)
///     .build_closure(move |x: &Vector1<f64>, _t: f64, y: &mut Vector1<f64>| {
///         y[0] = b * x[0].powi(3) / (16.0 * std::f64::consts::PI.powi(2));
///     })
///     .unwrap();
///
/// let mut solver = ExplicitRk::default();
/// let soln = solver.integrate_adaptive(&problem, Vector1::new(1.2), 10.0).unwrap();
/// assert!(soln.y.last().unwrap()[0] < 1.2);
/// ```
impl RgeBuilder {
    /// Create a new builder with default parameters:
    /// - t0 = 0.0
    /// - h0 = 1e-2
    /// - h_min = 1e-12
    /// - rtol = 1e-6
    /// - atol = 1e-6
    /// - max_steps = 100_000
    pub fn new() -> Self {
        Self {
            t0: 0.0,
            h0: 1e-2,
            h_min: 1e-12,
            rtol: 1e-6,
            atol: 1e-6,
            max_steps: 100_000,
        }
    }

    /// Set the initial time (the log of the starting scale).
    pub fn t0(mut self, t0: f64) -> Self {
        self.t0 = t0;
        self
    }

    /// Set the initial step size. Only the magnitude is used, the direction of the flow
    /// comes from the stop time passed to the driver.
    pub fn h0(mut self, h0: f64) -> Self {
        self.h0 = h0;
        self
    }

    /// Set the smallest step the adaptive driver may take before giving up.
    pub fn h_min(mut self, h_min: f64) -> Self {
        self.h_min = h_min;
        self
    }

    pub fn rtol(mut self, rtol: f64) -> Self {
        self.rtol = rtol;
        self
    }

    pub fn atol(mut self, atol: f64) -> Self {
        self.atol = atol;
        self
    }

    pub fn max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    fn validate(&self) -> Result<(), RgeError> {
        if !(self.h0.is_finite() && self.h0 > 0.0) {
            return Err(builder_error!(InvalidStepSize, self.h0));
        }
        if !(self.h_min > 0.0 && self.h_min <= self.h0) {
            return Err(builder_error!(InvalidMinStepSize));
        }
        if !(self.rtol > 0.0 && self.atol > 0.0) {
            return Err(RgeError::from(BuilderError::InvalidTolerance {
                rtol: self.rtol,
                atol: self.atol,
            }));
        }
        if self.max_steps == 0 {
            return Err(builder_error!(InvalidMaxSteps));
        }
        Ok(())
    }

    /// Build a problem around any [RgeOp].
    pub fn build<Eqn: RgeOp>(self, eqn: Eqn) -> Result<RgeProblem<Eqn>, RgeError> {
        self.validate()?;
        Ok(RgeProblem::new(
            eqn,
            Eqn::T::from(self.t0),
            Eqn::T::from(self.h0),
            Eqn::T::from(self.h_min),
            Eqn::T::from(self.rtol),
            Eqn::T::from(self.atol),
            self.max_steps,
        ))
    }

    /// Build a problem from a closure `rhs(x, t, y)` that writes `dx/dt` into `y`.
    pub fn build_closure<V, F>(self, rhs: F) -> Result<RgeProblem<RgeClosure<V, F>>, RgeError>
    where
        V: VectorSpace,
        F: Fn(&V, V::T, &mut V),
    {
        self.build(RgeClosure::new(rhs))
    }
}
