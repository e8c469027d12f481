use serde::Serialize;

use crate::{
    error::{FlowError, RgeError},
    flow_error, RgeOp, RgeProblem, RgeSolution, Scalar, StateCheck, Tableau, VectorSpace,
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SolverStatistics {
    pub number_of_steps: usize,
    pub number_of_error_test_failures: usize,
    pub number_of_rhs_evals: usize,
    pub initial_step_size: f64,
    pub final_step_size: f64,
}

impl Default for SolverStatistics {
    fn default() -> Self {
        Self {
            number_of_steps: 0,
            number_of_error_test_failures: 0,
            number_of_rhs_evals: 0,
            initial_step_size: 0.0,
            final_step_size: 0.0,
        }
    }
}

/// The result of a single explicit step from `(t, x)` with step size `h`.
pub struct RkStep<V: VectorSpace> {
    /// the propagated solution at `t + h`
    pub y: V,
    /// the derivative at the start of the step
    pub dy: V,
    /// the local error estimate, if the tableau has an embedded method
    pub error: Option<V>,
}

/// An explicit Runge-Kutta driver defined by a [Tableau].
///
/// The driver only combines states through [VectorSpace], so it runs on a
/// [crate::ParameterState] as well as on a bare nalgebra matrix. After every accepted
/// step the new state is passed through [StateCheck], and the flow is stopped with
/// [FlowError::LandauPole] as soon as the check fails.
///
/// Step size control in [Self::integrate_adaptive] follows the usual scheme for
/// embedded pairs: the relative error of a step is
///
/// `err = max_i |e_i| / (atol + rtol * (|x_i| + |h| |dx_i/dt|))`
///
/// A step with `err > 1` is rejected and retried with `h * max(0.9 err^(-1/(q - 1)), 0.2)`
/// where `q = order - 1` is the order of the embedded estimate. After an accepted step with
/// `err < 0.5` the step grows by `min(0.9 err^(-1/order), 5)`.
pub struct ExplicitRk<T: Scalar> {
    tableau: Tableau<T>,
    statistics: SolverStatistics,
}

impl<T: Scalar> Default for ExplicitRk<T> {
    fn default() -> Self {
        Self::new(Tableau::dormand_prince())
    }
}

impl<T: Scalar> ExplicitRk<T> {
    pub fn new(tableau: Tableau<T>) -> Self {
        Self {
            tableau,
            statistics: SolverStatistics::default(),
        }
    }

    pub fn rk4() -> Self {
        Self::new(Tableau::rk4())
    }

    pub fn tableau(&self) -> &Tableau<T> {
        &self.tableau
    }

    pub fn order(&self) -> usize {
        self.tableau.order()
    }

    pub fn get_statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    /// Take one step of size `h` from `(t, x)`. No validity check is performed here.
    pub fn step<Eqn>(
        &mut self,
        problem: &RgeProblem<Eqn>,
        x: &Eqn::V,
        t: T,
        h: T,
    ) -> RkStep<Eqn::V>
    where
        Eqn: RgeOp<T = T>,
    {
        let s = self.tableau.s();
        let mut k: Vec<Eqn::V> = Vec::with_capacity(s);
        for i in 0..s {
            let mut xi = x.clone();
            for (j, kj) in k.iter().enumerate() {
                let aij = self.tableau.a()[(i, j)];
                if aij != T::zero() {
                    xi.axpy(h * aij, kj);
                }
            }
            k.push(problem.eqn.call(&xi, t + self.tableau.c()[i] * h));
            self.statistics.number_of_rhs_evals += 1;
        }

        let mut y = x.clone();
        for (ki, &bi) in k.iter().zip(self.tableau.b().iter()) {
            if bi != T::zero() {
                y.axpy(h * bi, ki);
            }
        }

        let error = self.tableau.d().map(|d| {
            let mut error = k[0].clone();
            error.set_zero();
            for (ki, &di) in k.iter().zip(d.iter()) {
                if di != T::zero() {
                    error.axpy(h * di, ki);
                }
            }
            error
        });

        let dy = k.swap_remove(0);
        RkStep { y, dy, error }
    }

    /// Integrate from `problem.t0` to `t1` with the fixed step `problem.h0`. The last step
    /// is shortened to land on `t1`. `t1 < t0` runs the flow backwards.
    pub fn integrate_const<Eqn>(
        &mut self,
        problem: &RgeProblem<Eqn>,
        x0: Eqn::V,
        t1: T,
    ) -> Result<RgeSolution<Eqn::V>, RgeError>
    where
        Eqn: RgeOp<T = T>,
        Eqn::V: StateCheck,
    {
        let (mut t, mut h) = self.start(problem, &x0, t1)?;
        let mut x = x0;
        let mut soln = RgeSolution::default();
        soln.push(x.clone(), t);

        while !reached(t, h, t1) {
            self.check_max_steps(problem, t)?;
            h = clip_to_stop(t, h, t1);
            let step = self.step(problem, &x, t, h);
            t = advance(t, h, t1);
            x = step.y;
            self.accept(&x, t, h)?;
            soln.push(x.clone(), t);
        }
        Ok(soln)
    }

    /// Integrate from `problem.t0` to `t1` with error control, see [ExplicitRk]. Needs a
    /// tableau with an embedded error estimate.
    pub fn integrate_adaptive<Eqn>(
        &mut self,
        problem: &RgeProblem<Eqn>,
        x0: Eqn::V,
        t1: T,
    ) -> Result<RgeSolution<Eqn::V>, RgeError>
    where
        Eqn: RgeOp<T = T>,
        Eqn::V: StateCheck,
    {
        if self.tableau.d().is_none() {
            return Err(flow_error!(NoErrorEstimate));
        }
        let (mut t, mut h) = self.start(problem, &x0, t1)?;
        let mut x = x0;
        let mut soln = RgeSolution::default();
        soln.push(x.clone(), t);

        let order = self.order() as f64;
        let error_order = (order - 1.0).max(2.0);

        while !reached(t, h, t1) {
            self.check_max_steps(problem, t)?;
            h = clip_to_stop(t, h, t1);
            let step = self.step(problem, &x, t, h);
            let err: f64 = match &step.error {
                Some(error) => relative_error(problem, &x, &step.dy, error, h).into(),
                None => return Err(flow_error!(NoErrorEstimate)),
            };

            // a NaN error fails the test
            if err.is_nan() || err > 1.0 {
                self.statistics.number_of_error_test_failures += 1;
                let factor = if err.is_finite() {
                    (0.9 * err.powf(-1.0 / (error_order - 1.0))).max(0.2)
                } else {
                    0.2
                };
                h *= T::from(factor);
                if num_traits::abs(h) < problem.h_min {
                    return Err(flow_error!(StepSizeTooSmall, time: t.into()));
                }
                continue;
            }

            t = advance(t, h, t1);
            x = step.y;
            self.accept(&x, t, h)?;
            soln.push(x.clone(), t);

            // a step clipped to land on t1 also grows here, harmless since the loop ends
            if err < 0.5 {
                let factor = if err > 0.0 {
                    (0.9 * err.powf(-1.0 / order)).min(5.0)
                } else {
                    5.0
                };
                h *= T::from(factor);
            }
        }
        Ok(soln)
    }

    fn start<Eqn>(
        &mut self,
        problem: &RgeProblem<Eqn>,
        x0: &Eqn::V,
        t1: T,
    ) -> Result<(T, T), RgeError>
    where
        Eqn: RgeOp<T = T>,
        Eqn::V: StateCheck,
    {
        if !x0.check() {
            return Err(flow_error!(InvalidInitialState));
        }
        let t0 = problem.t0;
        if t1 == t0 {
            return Err(flow_error!(EmptyInterval, t0: t0.into()));
        }
        let h = if t1 > t0 {
            num_traits::abs(problem.h0)
        } else {
            -num_traits::abs(problem.h0)
        };
        self.statistics = SolverStatistics {
            initial_step_size: h.into(),
            ..Default::default()
        };
        Ok((t0, h))
    }

    fn check_max_steps<Eqn: RgeOp<T = T>>(
        &self,
        problem: &RgeProblem<Eqn>,
        t: T,
    ) -> Result<(), RgeError> {
        if self.statistics.number_of_steps >= problem.max_steps {
            return Err(flow_error!(
                MaxStepsExceeded,
                max_steps: problem.max_steps,
                time: t.into()
            ));
        }
        Ok(())
    }

    fn accept<V: StateCheck>(&mut self, x: &V, t: T, h: T) -> Result<(), RgeError> {
        self.statistics.number_of_steps += 1;
        self.statistics.final_step_size = h.into();
        if !x.check() {
            return Err(flow_error!(LandauPole, t: t.into()));
        }
        Ok(())
    }
}

/// err = max_i |e_i| / (atol + rtol * (|x_i| + |h| |dx_i/dt|))
fn relative_error<Eqn: RgeOp>(
    problem: &RgeProblem<Eqn>,
    x: &Eqn::V,
    dy: &Eqn::V,
    error: &Eqn::V,
    h: Eqn::T,
) -> Eqn::T {
    let scale = (x.abs() * problem.rtol + dy.abs() * (problem.rtol * num_traits::abs(h)))
        .add_scalar(problem.atol);
    error.abs().component_div(&scale).norm_inf()
}

fn roundoff<T: Scalar>(t: T, h: T) -> T {
    T::from(100.0) * T::EPSILON * (num_traits::abs(t) + num_traits::abs(h))
}

fn reached<T: Scalar>(t: T, h: T, t1: T) -> bool {
    num_traits::abs(t1 - t) <= roundoff(t, h)
}

// shorten the step if it would overshoot the stop time
fn clip_to_stop<T: Scalar>(t: T, h: T, t1: T) -> T {
    let troundoff = roundoff(t, h);
    if (h > T::zero() && t + h > t1 - troundoff) || (h < T::zero() && t + h < t1 + troundoff) {
        t1 - t
    } else {
        h
    }
}

fn advance<T: Scalar>(t: T, h: T, t1: T) -> T {
    let t_new = t + h;
    if num_traits::abs(t1 - t_new) <= roundoff(t, h) {
        t1
    } else {
        t_new
    }
}
